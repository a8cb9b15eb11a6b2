//! Raw-mode terminal setup and teardown.

use std::io::{self, Stdout};
use std::panic;

use crossterm::{
    ExecutableCommand,
    cursor::{Hide, Show},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

pub type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Switch to the alternate screen in raw mode.
///
/// A panic hook is installed first so a crash still hands the user back a
/// usable shell.
pub fn init() -> io::Result<AppTerminal> {
    setup_panic_hook();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?.execute(Hide)?;
    tracing::debug!("terminal initialised");
    Terminal::new(CrosstermBackend::new(stdout))
}

pub fn restore() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(Show)?.execute(LeaveAlternateScreen)?;
    tracing::debug!("terminal restored");
    Ok(())
}

fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = io::stdout().execute(Show);
        let _ = io::stdout().execute(LeaveAlternateScreen);
        tracing::error!(%panic_info, "panicked while drawing the quiz");
        original_hook(panic_info);
    }));
}
