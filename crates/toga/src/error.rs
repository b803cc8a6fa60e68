//! Error types for the directory.

use thiserror::Error;
use toga_core::AccountError;
use toga_store::StoreError;

/// Errors that can occur during directory operations.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Storage error.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    /// Account validation error.
    #[error("account error: {0}")]
    Account(#[from] AccountError),

    /// No account with this username.
    #[error("unknown user: {0}")]
    UnknownUser(String),

    /// The password did not match.
    #[error("authentication failed for user {0}")]
    AuthenticationFailed(String),
}

/// Result type for directory operations.
pub type Result<T> = std::result::Result<T, DirectoryError>;
