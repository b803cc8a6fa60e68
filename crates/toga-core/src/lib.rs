//! # Toga Core
//!
//! Pure primitives for Toga: user accounts, password digests and privilege
//! masks.
//!
//! This crate contains no I/O. Persistence lives in `toga-store`.
//!
//! ## Key Types
//!
//! - [`UserAccount`] - Username, display name, password digest and privileges
//! - [`PasswordDigest`] - Fixed 64-byte SHA-512 digest of a password
//! - [`PrivilegeMask`] - Bitmask of granted privileges with a `|`-joined string form
//! - [`AccountRecord`] - The serialized shape of an account
//!
//! ## Usage
//!
//! ```rust
//! use toga_core::{PrivilegeMask, UserAccount};
//!
//! let mut account = UserAccount::create("tim", "Tim").unwrap();
//! account.set_password("sausages").unwrap();
//! account.grant(PrivilegeMask::READ);
//!
//! assert!(account.authenticate("sausages"));
//! assert_eq!(account.privileges().to_string(), "PRV_READ");
//! ```

pub mod account;
pub mod crypto;
pub mod error;
pub mod privilege;
pub mod record;
pub mod validation;

pub use account::UserAccount;
pub use crypto::{DigestDecodeError, DigestLengthError, PasswordDigest, DIGEST_LEN};
pub use error::{AccountError, Result};
pub use privilege::{PrivilegeMask, PRIVILEGE_NAMES, PRIVILEGE_SEPARATOR};
pub use record::AccountRecord;
pub use validation::{canonical_username, validate_password, validate_username, MIN_PASSWORD_LEN};
