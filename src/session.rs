//! The quiz session state machine.
//!
//! `Welcome -> InProgress -> Finished -> Welcome`. Every operation is safe to
//! call at any time: an action the current state does not allow is ignored
//! and reported back as `false`.

use uuid::Uuid;

use crate::data::Catalog;
use crate::feedback::{Feedback, Silent};
use crate::models::{Audience, Question, QuizDefinition};
use crate::view::{self, View};

/// Which screen the session is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    InProgress,
    Finished,
}

/// Where a user is inside a running quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progress {
    pub audience: Audience,
    /// Always a valid index into the active quiz's questions.
    pub index: usize,
    pub score: usize,
    /// The locked-in answer for the current question, if any.
    pub answer: Option<String>,
}

/// How a finished quiz went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub audience: Audience,
    pub score: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Welcome,
    InProgress(Progress),
    Finished(Outcome),
}

impl SessionState {
    pub fn screen(&self) -> Screen {
        match self {
            SessionState::Welcome => Screen::Welcome,
            SessionState::InProgress(_) => Screen::InProgress,
            SessionState::Finished(_) => Screen::Finished,
        }
    }
}

pub struct QuizSession<F = Silent> {
    catalog: Catalog,
    feedback: F,
    state: SessionState,
    session_id: Option<Uuid>,
}

impl QuizSession<Silent> {
    /// A session with no celebration effects attached.
    pub fn silent(catalog: Catalog) -> Self {
        Self::new(catalog, Silent)
    }
}

impl<F: Feedback> QuizSession<F> {
    pub fn new(catalog: Catalog, feedback: F) -> Self {
        Self {
            catalog,
            feedback,
            state: SessionState::Welcome,
            session_id: None,
        }
    }

    /// Begin a fresh attempt at the quiz for `audience`.
    ///
    /// Only accepted from the welcome screen.
    pub fn start_session(&mut self, audience: Audience) -> bool {
        if self.state != SessionState::Welcome {
            tracing::debug!(screen = ?self.screen(), "start ignored outside welcome screen");
            return false;
        }

        let session_id = Uuid::new_v4();
        self.session_id = Some(session_id);
        self.state = SessionState::InProgress(Progress {
            audience,
            index: 0,
            score: 0,
            answer: None,
        });

        tracing::info!(
            session = %session_id,
            %audience,
            questions = self.catalog.quiz(audience).total_questions(),
            "session started"
        );
        true
    }

    /// Lock in `option` as the answer to the current question.
    ///
    /// Strings that are not one of the question's options are recorded but can
    /// never be correct. Once an answer is locked in, further calls do nothing
    /// until the user advances.
    pub fn select_answer(&mut self, option: &str) -> bool {
        let SessionState::InProgress(progress) = &mut self.state else {
            tracing::debug!(screen = ?self.state.screen(), "answer ignored outside a quiz");
            return false;
        };

        if let Some(locked) = &progress.answer {
            tracing::debug!(
                session = ?self.session_id,
                question = progress.index,
                locked = %locked,
                "answer already checked, ignoring selection"
            );
            return false;
        }

        let question = &self.catalog.quiz(progress.audience).questions[progress.index];
        let correct = question.is_correct(option);
        progress.answer = Some(option.to_string());

        tracing::info!(
            session = ?self.session_id,
            question = question.id,
            correct,
            "answer checked"
        );

        if correct {
            progress.score += 1;
            self.feedback.on_correct_answer();
        }
        true
    }

    /// Move past a checked question, finishing the quiz after the last one.
    pub fn advance(&mut self) -> bool {
        let SessionState::InProgress(progress) = &mut self.state else {
            tracing::debug!(screen = ?self.state.screen(), "advance ignored outside a quiz");
            return false;
        };

        if progress.answer.is_none() {
            tracing::debug!(
                session = ?self.session_id,
                question = progress.index,
                "advance ignored before an answer is checked"
            );
            return false;
        }

        let quiz = self.catalog.quiz(progress.audience);
        if quiz.is_last(progress.index) {
            let outcome = Outcome {
                audience: progress.audience,
                score: progress.score,
            };
            tracing::info!(
                session = ?self.session_id,
                score = outcome.score,
                total = quiz.total_questions(),
                "quiz finished"
            );
            self.state = SessionState::Finished(outcome);
            self.feedback.on_quiz_completed();
        } else {
            progress.index += 1;
            progress.answer = None;
            tracing::debug!(session = ?self.session_id, question = progress.index, "next question");
        }
        true
    }

    /// Drop whatever attempt is underway and go back to the welcome screen.
    pub fn restart(&mut self) -> bool {
        tracing::info!(session = ?self.session_id, from = ?self.screen(), "session restarted");
        self.state = SessionState::Welcome;
        self.session_id = None;
        true
    }
}

impl<F> QuizSession<F> {
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn screen(&self) -> Screen {
        self.state.screen()
    }

    pub fn audience(&self) -> Option<Audience> {
        match &self.state {
            SessionState::Welcome => None,
            SessionState::InProgress(progress) => Some(progress.audience),
            SessionState::Finished(outcome) => Some(outcome.audience),
        }
    }

    /// Zero-based index of the current question. Zero outside a quiz.
    pub fn question_index(&self) -> usize {
        match &self.state {
            SessionState::InProgress(progress) => progress.index,
            SessionState::Finished(_) => self.total_questions().saturating_sub(1),
            SessionState::Welcome => 0,
        }
    }

    pub fn score(&self) -> usize {
        match &self.state {
            SessionState::Welcome => 0,
            SessionState::InProgress(progress) => progress.score,
            SessionState::Finished(outcome) => outcome.score,
        }
    }

    pub fn selected_option(&self) -> Option<&str> {
        match &self.state {
            SessionState::InProgress(progress) => progress.answer.as_deref(),
            _ => None,
        }
    }

    pub fn answer_checked(&self) -> bool {
        self.selected_option().is_some()
    }

    pub fn active_quiz(&self) -> Option<&QuizDefinition> {
        self.audience().map(|audience| self.catalog.quiz(audience))
    }

    pub fn total_questions(&self) -> usize {
        self.active_quiz().map_or(0, QuizDefinition::total_questions)
    }

    pub fn current_question(&self) -> Option<&Question> {
        match &self.state {
            SessionState::InProgress(progress) => {
                self.catalog.quiz(progress.audience).question(progress.index)
            }
            _ => None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn feedback(&self) -> &F {
        &self.feedback
    }

    pub fn feedback_mut(&mut self) -> &mut F {
        &mut self.feedback
    }

    /// Correlation id of the running attempt, for logs.
    pub fn session_id(&self) -> Option<Uuid> {
        self.session_id
    }

    /// Read-only projection for drawing the current screen.
    pub fn view(&self) -> View<'_> {
        view::project(&self.state, &self.catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::Tally;

    fn session() -> QuizSession<Tally> {
        QuizSession::new(Catalog::builtin().unwrap(), Tally::default())
    }

    fn correct_answer<F>(session: &QuizSession<F>) -> String {
        session.current_question().unwrap().correct_answer.clone()
    }

    #[test]
    fn test_starts_on_welcome() {
        let session = session();
        assert_eq!(session.screen(), Screen::Welcome);
        assert_eq!(session.score(), 0);
        assert_eq!(session.audience(), None);
        assert!(session.current_question().is_none());
        assert!(session.session_id().is_none());
    }

    #[test]
    fn test_start_session_resets_progress() {
        let mut session = session();
        assert!(session.start_session(Audience::Teen));

        assert_eq!(session.screen(), Screen::InProgress);
        assert_eq!(session.audience(), Some(Audience::Teen));
        assert_eq!(session.question_index(), 0);
        assert_eq!(session.score(), 0);
        assert_eq!(session.selected_option(), None);
        assert!(!session.answer_checked());
        assert!(session.session_id().is_some());
    }

    #[test]
    fn test_start_ignored_while_quiz_running() {
        let mut session = session();
        session.start_session(Audience::Teen);
        let answer = correct_answer(&session);
        session.select_answer(&answer);

        assert!(!session.start_session(Audience::Adult));
        assert_eq!(session.audience(), Some(Audience::Teen));
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn test_correct_answer_scores_and_celebrates() {
        let mut session = session();
        session.start_session(Audience::Teen);
        let answer = correct_answer(&session);

        assert!(session.select_answer(&answer));
        assert_eq!(session.score(), 1);
        assert!(session.answer_checked());
        assert_eq!(session.selected_option(), Some(answer.as_str()));
        assert_eq!(session.feedback().correct, 1);
    }

    #[test]
    fn test_wrong_answer_locks_without_scoring() {
        let mut session = session();
        session.start_session(Audience::Teen);

        assert!(session.select_answer("Advanced Internet"));
        assert_eq!(session.score(), 0);
        assert!(session.answer_checked());
        assert_eq!(session.feedback().correct, 0);
    }

    #[test]
    fn test_second_selection_is_ignored() {
        let mut session = session();
        session.start_session(Audience::Teen);
        let answer = correct_answer(&session);

        session.select_answer("Always Intelligent");
        assert!(!session.select_answer(&answer));
        assert_eq!(session.score(), 0);
        assert_eq!(session.selected_option(), Some("Always Intelligent"));

        let mut session = self::session();
        session.start_session(Audience::Teen);
        session.select_answer(&answer);
        assert!(!session.select_answer(&answer));
        assert_eq!(session.score(), 1);
        assert_eq!(session.feedback().correct, 1);
    }

    #[test]
    fn test_advance_requires_checked_answer() {
        let mut session = session();
        session.start_session(Audience::Adult);

        assert!(!session.advance());
        assert_eq!(session.question_index(), 0);
        assert_eq!(session.screen(), Screen::InProgress);
    }

    #[test]
    fn test_advance_moves_to_next_question() {
        let mut session = session();
        session.start_session(Audience::Adult);
        session.select_answer("Making websites");

        assert!(session.advance());
        assert_eq!(session.question_index(), 1);
        assert!(!session.answer_checked());
        assert_eq!(session.selected_option(), None);
        assert_eq!(session.current_question().unwrap().id, 2);
    }

    #[test]
    fn test_last_advance_finishes_once() {
        let mut session = session();
        session.start_session(Audience::Adult);
        for _ in 0..session.total_questions() {
            let answer = correct_answer(&session);
            session.select_answer(&answer);
            session.advance();
        }

        assert_eq!(session.screen(), Screen::Finished);
        assert_eq!(session.score(), 5);
        assert_eq!(session.feedback().completed, 1);

        assert!(!session.advance());
        assert!(!session.select_answer("True"));
        assert_eq!(session.feedback().completed, 1);
        assert_eq!(session.score(), 5);
    }

    #[test]
    fn test_actions_ignored_on_welcome() {
        let mut session = session();
        assert!(!session.select_answer("True"));
        assert!(!session.advance());
        assert_eq!(session.screen(), Screen::Welcome);
        assert_eq!(session.feedback(), &Tally::default());
    }

    #[test]
    fn test_restart_from_any_screen() {
        let mut session = session();
        assert!(session.restart());
        assert_eq!(session.screen(), Screen::Welcome);

        session.start_session(Audience::Teen);
        session.select_answer("Artificial Intelligence");
        assert!(session.restart());
        assert_eq!(session.screen(), Screen::Welcome);
        assert_eq!(session.score(), 0);
        assert!(session.session_id().is_none());
    }

    #[test]
    fn test_each_attempt_gets_new_session_id() {
        let mut session = session();
        session.start_session(Audience::Teen);
        let first = session.session_id();
        session.restart();
        session.start_session(Audience::Teen);
        assert_ne!(session.session_id(), first);
    }
}
