//! Celebration hooks the session fires into.
//!
//! The session never looks at what happens on the other side: a missing or
//! broken effect cannot change scoring.

pub trait Feedback {
    /// The answer just locked in was correct.
    fn on_correct_answer(&mut self);

    /// The last question was passed and the quiz is over.
    fn on_quiz_completed(&mut self);
}

/// Feedback that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Feedback for Silent {
    fn on_correct_answer(&mut self) {}

    fn on_quiz_completed(&mut self) {}
}

impl<F: Feedback + ?Sized> Feedback for Box<F> {
    fn on_correct_answer(&mut self) {
        (**self).on_correct_answer();
    }

    fn on_quiz_completed(&mut self) {
        (**self).on_quiz_completed();
    }
}

/// Counts every hook call. Handy for checking when celebrations fire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub correct: usize,
    pub completed: usize,
}

impl Feedback for Tally {
    fn on_correct_answer(&mut self) {
        self.correct += 1;
    }

    fn on_quiz_completed(&mut self) {
        self.completed += 1;
    }
}
