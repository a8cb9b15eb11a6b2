use serde::Deserialize;

use super::Question;

/// Colours a quiz is drawn with, as `#rrggbb` strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Theme {
    /// Progress bar and card highlights.
    pub primary: String,
    /// Background of the advance affordance.
    pub accent: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuizDefinition {
    pub title: String,
    pub description: String,
    /// When the follow-up session takes place, already formatted for display.
    pub event_date: String,
    pub theme: Theme,
    pub questions: Vec<Question>,
}

impl QuizDefinition {
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn is_last(&self, index: usize) -> bool {
        index + 1 == self.questions.len()
    }
}
