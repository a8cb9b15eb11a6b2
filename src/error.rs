use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::data::CatalogError;

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The built-in quiz content is broken.
    #[error("failed to load quiz content: {0}")]
    Catalog(#[from] CatalogError),

    /// Terminal I/O failed while running the quiz.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("cannot open log file {}: {source}", .path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot set up logging: {0}")]
    Logging(String),
}
