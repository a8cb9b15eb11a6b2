use std::path::PathBuf;

use clap::Parser;

use crate::models::Audience;

pub const DEFAULT_LOG_FILTER: &str = "ai_quiz=info";

/// Terminal AI quiz for teens and professionals.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Skip the welcome screen and start this quiz right away
    #[arg(short, long, value_enum, env = "AI_QUIZ_AUDIENCE")]
    pub audience: Option<Audience>,

    /// Append logs to this file (the terminal is busy drawing the quiz)
    #[arg(long, env = "AI_QUIZ_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Log filter directives, e.g. `ai_quiz=debug`
    #[arg(long, env = "AI_QUIZ_LOG", default_value = DEFAULT_LOG_FILTER)]
    pub log_filter: String,

    /// Turn off confetti
    #[arg(long, env = "AI_QUIZ_NO_CONFETTI")]
    pub no_confetti: bool,
}

impl Config {
    pub fn confetti_enabled(&self) -> bool {
        !self.no_confetti
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            audience: None,
            log_file: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            no_confetti: false,
        }
    }
}
