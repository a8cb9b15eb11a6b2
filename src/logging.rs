use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, DEFAULT_LOG_FILTER};
use crate::error::QuizError;

/// Install the global subscriber.
///
/// Logs only go to `config.log_file`: stdout belongs to the TUI. Without a
/// file nothing is installed and events are dropped.
pub fn init(config: &Config) -> Result<(), QuizError> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };

    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(open_log_file(path)?)),
        )
        .try_init()
        .map_err(|err| QuizError::Logging(err.to_string()))?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "logging to {}", path.display());
    Ok(())
}

fn open_log_file(path: &Path) -> Result<File, QuizError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| QuizError::LogFile {
            path: path.to_path_buf(),
            source,
        })
}
