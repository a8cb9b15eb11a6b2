//! # ai-quiz
//!
//! A terminal quiz about AI with one question set for teens and one for
//! professionals.
//!
//! The core is [`QuizSession`], a small state machine that reads from the
//! compiled-in [`Catalog`] and reports celebrations through a [`Feedback`]
//! implementation. The terminal front end drives it from key presses.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ai_quiz::{Config, Quiz, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     let quiz = Quiz::new(&Config::default())?;
//!     quiz.run()?;
//!     Ok(())
//! }
//! ```
//!
//! The session can also be driven without a terminal:
//!
//! ```rust
//! use ai_quiz::{Audience, Catalog, QuizSession, Screen};
//!
//! let mut session = QuizSession::silent(Catalog::builtin().unwrap());
//! session.start_session(Audience::Teen);
//! session.select_answer("Artificial Intelligence");
//! assert_eq!(session.score(), 1);
//! session.advance();
//! assert_eq!(session.question_index(), 1);
//! assert_eq!(session.screen(), Screen::InProgress);
//! ```

mod app;
pub mod config;
mod data;
pub mod effects;
mod error;
pub mod feedback;
pub mod logging;
mod models;
pub mod session;
pub mod terminal;
mod ui;
pub mod view;

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

pub use app::App;
pub use config::Config;
pub use data::{Catalog, CatalogError};
pub use effects::Confetti;
pub use error::QuizError;
pub use feedback::{Feedback, Silent, Tally};
pub use models::{Audience, Question, QuizDefinition, Theme};
pub use session::{QuizSession, Screen, SessionState};
pub use view::{OptionStatus, View};

/// How often the screen is redrawn while waiting for input.
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

/// A quiz instance that can be run in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    /// Build a quiz from the compiled-in catalog.
    ///
    /// When `config.audience` is set the welcome screen is skipped.
    pub fn new(config: &Config) -> Result<Self, QuizError> {
        let catalog = Catalog::builtin()?;
        let mut app = App::new(catalog, Confetti::new(config.confetti_enabled()));
        if let Some(audience) = config.audience {
            app.start(audience);
        }
        Ok(Self { app })
    }

    /// Run the quiz in the terminal.
    ///
    /// This will take over the terminal, display the quiz UI, and return
    /// when the user quits.
    pub fn run(mut self) -> Result<(), QuizError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app);
        terminal::restore()?;
        result
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::AppTerminal, app: &mut App) -> Result<(), QuizError> {
    loop {
        let now = Instant::now();
        app.tick(now);
        terminal.draw(|frame| ui::render(frame, app, now))?;

        if !event::poll(FRAME_INTERVAL)? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                tracing::info!("quit requested");
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match app.screen() {
        Screen::Welcome => handle_welcome_input(app, key),
        Screen::InProgress => handle_quiz_input(app, key),
        Screen::Finished => handle_result_input(app, key),
    }
}

fn handle_welcome_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_previous_audience();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next_audience();
            false
        }
        KeyCode::Enter => {
            app.start_highlighted();
            false
        }
        KeyCode::Char('1') | KeyCode::Char('t') | KeyCode::Char('T') => {
            app.start(Audience::Teen);
            false
        }
        KeyCode::Char('2') | KeyCode::Char('p') | KeyCode::Char('P') => {
            app.start(Audience::Adult);
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        _ => false,
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> bool {
    let checked = app.session().answer_checked();
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_previous_option();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next_option();
            false
        }
        KeyCode::Enter | KeyCode::Char(' ') if checked => {
            app.advance();
            false
        }
        KeyCode::Char('n') | KeyCode::Char('N') => {
            app.advance();
            false
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.submit_highlighted();
            false
        }
        KeyCode::Char(c @ ('a'..='d' | 'A'..='D')) => {
            app.submit_label(c);
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_result_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => {
            app.restart();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        _ => false,
    }
}
