//! # Toga
//!
//! A small user directory: validated usernames, SHA-512 password digests
//! and privilege bitmasks, persisted as an indented JSON document.
//!
//! ## Overview
//!
//! - **Accounts**: a username (letter first, three or more letters/digits),
//!   a display name, a password digest and a privilege mask
//! - **Privileges**: `PRV_READ`, `PRV_WRITE`, `PRV_DELETE`, `PRV_EXECUTE`,
//!   written as a `|`-joined string
//! - **Store**: accounts keyed by lowercased username, loaded from and saved
//!   to any reader/writer or file path
//! - **Directory**: a store bound to its users file, with login checks
//!
//! ## Usage
//!
//! ```rust,no_run
//! use toga::{Directory, DirectoryConfig, PrivilegeMask};
//!
//! let mut directory = Directory::open(DirectoryConfig::new("password.json")).unwrap();
//!
//! directory
//!     .add_user("tim", "Tim", "sausages", PrivilegeMask::READ | PrivilegeMask::WRITE)
//!     .unwrap();
//! directory.save().unwrap();
//!
//! let tim = directory.login("TIM", "sausages").unwrap();
//! assert!(tim.has_privilege(PrivilegeMask::READ));
//! ```
//!
//! ## Re-exports
//!
//! - `toga::core` - Accounts, digests and privilege masks
//! - `toga::store` - The user store and the JSON document format

pub mod config;
pub mod directory;
pub mod error;

// Re-export component crates
pub use toga_core as core;
pub use toga_store as store;

// Re-export main types for convenience
pub use config::{DirectoryConfig, DEFAULT_USERS_FILE};
pub use directory::Directory;
pub use error::{DirectoryError, Result};

// Re-export commonly used types
pub use toga_core::{AccountError, AccountRecord, PasswordDigest, PrivilegeMask, UserAccount};
pub use toga_store::{StoreError, UserStore};
