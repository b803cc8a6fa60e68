//! # Toga Testkit
//!
//! Testing utilities for Toga.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known passwords with their expected SHA-512 digests
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: Temporary users files and pre-filled stores
//!
//! ## Golden Vectors
//!
//! ```rust
//! use toga_testkit::vectors::verify_all_vectors;
//!
//! for (name, ok, hex) in verify_all_vectors() {
//!     assert!(ok, "{name}: {hex}");
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use toga_testkit::generators::{account_from_params, AccountParams};
//!
//! proptest! {
//!     #[test]
//!     fn password_verifies(params: AccountParams) {
//!         let account = account_from_params(&params);
//!         prop_assert!(account.authenticate(&params.password));
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use toga_testkit::fixtures::TestFixture;
//!
//! let fixture = TestFixture::with_sample_users();
//! let store = fixture.load().unwrap();
//! assert!(store.get("tim").is_some());
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{sample_store, TestFixture, SAMPLE_USERS};
pub use generators::{account_from_params, AccountParams};
pub use vectors::{all_vectors, verify_all_vectors, GoldenVector};
