//! # Toga Store
//!
//! Keeps user accounts in memory and persists them as a JSON document.
//!
//! ## Overview
//!
//! [`UserStore`] maps lowercased usernames to [`UserAccount`]s. It can be
//! filled by [`UserStore::add`], which validates and hashes as it goes, or
//! by loading a users document from any reader or from a file path.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use toga_core::PrivilegeMask;
//! use toga_store::UserStore;
//!
//! let mut store = UserStore::load_from_path("password.json").unwrap();
//! store.add("tim", "Tim", "sausages", PrivilegeMask::READ).unwrap();
//!
//! if let Some(tim) = store.get("TIM") {
//!     assert!(tim.authenticate("sausages"));
//! }
//!
//! store.save_to_path("password.json").unwrap();
//! ```
//!
//! ## Design Notes
//!
//! - **One key rule**: `add` and every load path key accounts by lowercased username
//! - **All-or-nothing loads**: a document with one bad record changes nothing
//! - **Stable output**: saved documents are sorted by username
//! - **Single owner**: mutation takes `&mut self`; there is no internal locking
//!
//! [`UserAccount`]: toga_core::UserAccount

pub mod document;
pub mod error;
pub mod users;

pub use document::{read_accounts, write_accounts};
pub use error::{Result, StoreError};
pub use users::UserStore;
