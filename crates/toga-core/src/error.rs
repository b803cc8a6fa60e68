//! Error types for Toga Core.

use thiserror::Error;

/// Errors that can occur while building, validating or decoding accounts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    #[error("invalid username: {0:?}")]
    InvalidUsername(String),

    #[error("password may not be blank")]
    EmptyPassword,

    #[error("password too short: must be at least {min} characters, got {actual}")]
    PasswordTooShort { min: usize, actual: usize },

    #[error("unknown privilege: {0:?}")]
    UnknownPrivilegeToken(String),

    #[error("no username specified")]
    MissingUsername,

    #[error("no password specified for user {0}")]
    MissingPassword(String),

    #[error("corrupt password detected for user {username}: {reason}")]
    CorruptPassword { username: String, reason: String },
}

/// Result type for account operations.
pub type Result<T> = std::result::Result<T, AccountError>;
