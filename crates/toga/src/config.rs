//! Directory configuration.

use std::path::PathBuf;

/// Default users file, relative to the working directory.
pub const DEFAULT_USERS_FILE: &str = "password.json";

/// Configuration for a [`Directory`](crate::Directory).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryConfig {
    /// Path of the users document.
    pub users_file: PathBuf,
    /// Whether opening a missing users file creates an empty one.
    pub create_if_missing: bool,
}

impl DirectoryConfig {
    /// Configuration for the given users file, with defaults otherwise.
    pub fn new(users_file: impl Into<PathBuf>) -> Self {
        Self {
            users_file: users_file.into(),
            ..Self::default()
        }
    }

    pub fn with_create_if_missing(mut self, create_if_missing: bool) -> Self {
        self.create_if_missing = create_if_missing;
        self
    }
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            users_file: PathBuf::from(DEFAULT_USERS_FILE),
            create_if_missing: true,
        }
    }
}
