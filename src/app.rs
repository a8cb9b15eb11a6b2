use std::time::Instant;

use crate::data::Catalog;
use crate::effects::Confetti;
use crate::models::Audience;
use crate::session::{QuizSession, Screen};

/// The terminal front end: a quiz session plus the keyboard cursors used to
/// pick things on screen.
pub struct App {
    session: QuizSession<Confetti>,
    audience_cursor: usize,
    option_cursor: usize,
}

impl App {
    pub fn new(catalog: Catalog, confetti: Confetti) -> Self {
        Self {
            session: QuizSession::new(catalog, confetti),
            audience_cursor: 0,
            option_cursor: 0,
        }
    }

    pub fn session(&self) -> &QuizSession<Confetti> {
        &self.session
    }

    pub fn screen(&self) -> Screen {
        self.session.screen()
    }

    pub fn audience_cursor(&self) -> usize {
        self.audience_cursor
    }

    pub fn option_cursor(&self) -> usize {
        self.option_cursor
    }

    pub fn highlighted_audience(&self) -> Audience {
        Audience::ALL[self.audience_cursor]
    }

    pub fn select_next_audience(&mut self) {
        self.audience_cursor = (self.audience_cursor + 1) % Audience::ALL.len();
    }

    pub fn select_previous_audience(&mut self) {
        let count = Audience::ALL.len();
        self.audience_cursor = (self.audience_cursor + count - 1) % count;
    }

    pub fn start_highlighted(&mut self) {
        self.start(self.highlighted_audience());
    }

    pub fn start(&mut self, audience: Audience) {
        if self.session.start_session(audience) {
            self.option_cursor = 0;
        }
    }

    fn option_count(&self) -> usize {
        self.session
            .current_question()
            .map_or(0, |question| question.options.len())
    }

    /// The cursor stays put once an answer is locked in.
    pub fn select_next_option(&mut self) {
        let count = self.option_count();
        if count == 0 || self.session.answer_checked() {
            return;
        }
        self.option_cursor = (self.option_cursor + 1) % count;
    }

    pub fn select_previous_option(&mut self) {
        let count = self.option_count();
        if count == 0 || self.session.answer_checked() {
            return;
        }
        self.option_cursor = (self.option_cursor + count - 1) % count;
    }

    pub fn submit_highlighted(&mut self) {
        self.submit_option(self.option_cursor);
    }

    /// Lock in the option shown with `label` ('a' and 'A' both mean the first).
    pub fn submit_label(&mut self, label: char) {
        let label = label.to_ascii_lowercase();
        if label.is_ascii_lowercase() {
            self.submit_option((label as u8 - b'a') as usize);
        }
    }

    fn submit_option(&mut self, index: usize) {
        let Some(option) = self
            .session
            .current_question()
            .and_then(|question| question.options.get(index))
            .cloned()
        else {
            return;
        };

        if self.session.select_answer(&option) {
            self.option_cursor = index;
        }
    }

    pub fn advance(&mut self) {
        if self.session.advance() {
            self.option_cursor = 0;
        }
    }

    pub fn restart(&mut self) {
        self.session.restart();
        self.option_cursor = 0;
    }

    /// Whether confetti is still flying and the screen needs redrawing.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.session.feedback().is_active(now)
    }

    pub fn tick(&mut self, now: Instant) {
        self.session.feedback_mut().prune(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(Catalog::builtin().unwrap(), Confetti::seeded(true, 1))
    }

    #[test]
    fn test_audience_cursor_wraps() {
        let mut app = app();
        assert_eq!(app.highlighted_audience(), Audience::Teen);
        app.select_next_audience();
        assert_eq!(app.highlighted_audience(), Audience::Adult);
        app.select_next_audience();
        assert_eq!(app.highlighted_audience(), Audience::Teen);
        app.select_previous_audience();
        assert_eq!(app.highlighted_audience(), Audience::Adult);

        app.start_highlighted();
        assert_eq!(app.session().audience(), Some(Audience::Adult));
    }

    #[test]
    fn test_option_cursor_wraps_over_question_options() {
        let mut app = app();
        app.start(Audience::Teen);
        app.select_previous_option();
        assert_eq!(app.option_cursor(), 3);
        app.select_next_option();
        assert_eq!(app.option_cursor(), 0);
    }

    #[test]
    fn test_submit_highlighted_locks_answer() {
        let mut app = app();
        app.start(Audience::Teen);
        app.select_next_option();
        app.submit_highlighted();

        assert_eq!(app.session().selected_option(), Some("Artificial Intelligence"));
        assert_eq!(app.session().score(), 1);
        assert!(app.is_animating(Instant::now()));

        app.select_next_option();
        assert_eq!(app.option_cursor(), 1);
    }

    #[test]
    fn test_submit_label_out_of_range_is_ignored() {
        let mut app = app();
        app.start(Audience::Teen);
        for _ in 0..3 {
            app.submit_label('a');
            app.advance();
        }

        // true/false question has only A and B
        app.submit_label('c');
        assert!(!app.session().answer_checked());
        app.submit_label('A');
        assert_eq!(app.session().selected_option(), Some("True"));
    }

    #[test]
    fn test_advance_resets_cursor() {
        let mut app = app();
        app.start(Audience::Adult);
        app.submit_label('d');
        assert_eq!(app.option_cursor(), 3);
        app.advance();
        assert_eq!(app.option_cursor(), 0);
        assert_eq!(app.session().question_index(), 1);
    }
}
