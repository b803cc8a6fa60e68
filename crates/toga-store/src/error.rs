//! Error types for the store module.

use thiserror::Error;
use toga_core::AccountError;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An account with this canonical username is already stored.
    #[error("user {0} already exists")]
    UserAlreadyExists(String),

    /// Account validation or decoding failed.
    #[error(transparent)]
    Account(#[from] AccountError),

    /// The users document is not valid JSON of the expected shape.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
