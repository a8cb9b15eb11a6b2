use std::fmt;

use clap::ValueEnum;
use serde::Deserialize;

/// Who the quiz is aimed at. Picks the quiz definition for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    Teen,
    Adult,
}

impl Audience {
    /// Every segment in the order the welcome screen offers them.
    pub const ALL: [Audience; 2] = [Audience::Teen, Audience::Adult];

    pub fn title(self) -> &'static str {
        match self {
            Audience::Teen => "For Teens",
            Audience::Adult => "Professionals",
        }
    }

    pub fn tagline(self) -> &'static str {
        match self {
            Audience::Teen => "Fun, fast & futuristic",
            Audience::Adult => "Industry insights & trends",
        }
    }

    pub fn bootcamp_name(self) -> &'static str {
        match self {
            Audience::Teen => "Teen",
            Audience::Adult => "Professional",
        }
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Audience::Teen => f.write_str("teen"),
            Audience::Adult => f.write_str("adult"),
        }
    }
}
