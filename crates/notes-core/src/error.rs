//! Error types for Notes core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-facing messages and exit codes.

use thiserror::Error;

/// Result type alias for Notes operations.
pub type Result<T> = std::result::Result<T, NotesError>;

/// Core error type for Notes operations.
#[derive(Debug, Error)]
pub enum NotesError {
    /// Reading or writing the backing file failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Generic error (fallback)
    #[error("{0}")]
    Other(String),
}

impl From<std::io::Error> for NotesError {
    fn from(err: std::io::Error) -> Self {
        NotesError::Storage(err.to_string())
    }
}
