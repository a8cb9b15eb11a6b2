use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Question {
    pub id: u32,
    pub text: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    #[serde(default)]
    pub explanation: Option<String>,
}

impl Question {
    /// Whether `option` is this question's correct answer. Anything that is
    /// not one of the listed options is simply wrong.
    pub fn is_correct(&self, option: &str) -> bool {
        self.correct_answer == option
    }

    pub fn correct_index(&self) -> Option<usize> {
        self.options.iter().position(|o| *o == self.correct_answer)
    }
}
