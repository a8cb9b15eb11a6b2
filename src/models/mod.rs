mod audience;
mod question;
mod quiz;

pub use audience::Audience;
pub use question::Question;
pub use quiz::{QuizDefinition, Theme};
