//! Error types for note operations

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for note operations.
pub type Result<T> = std::result::Result<T, NotesError>;

/// Errors that can occur while reading or generating notes
#[derive(Error, Debug)]
pub enum NotesError {
    /// Filesystem error on a specific path
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// Path being read or written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Missing or malformed input from the caller
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Graph serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl NotesError {
    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        NotesError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<notekeeper_domain::FileCountMismatch> for NotesError {
    fn from(e: notekeeper_domain::FileCountMismatch) -> Self {
        NotesError::InvalidInput(format!("absolute path list does not match notes: {}", e))
    }
}
