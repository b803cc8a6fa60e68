//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use toga_core::PrivilegeMask;
use toga_store::{Result, UserStore};

/// Sample accounts as `(username, realname, password, privileges)`.
pub const SAMPLE_USERS: [(&str, &str, &str, PrivilegeMask); 3] = [
    ("tim", "Tim", "sausages", PrivilegeMask::READ),
    (
        "alice",
        "Alice Liddell",
        "rabbithole",
        PrivilegeMask::all(),
    ),
    ("bob", "", "carrots", PrivilegeMask::empty()),
];

/// A store holding [`SAMPLE_USERS`].
pub fn sample_store() -> UserStore {
    let mut store = UserStore::new();
    for (username, realname, password, privileges) in SAMPLE_USERS {
        store
            .add(username, realname, password, privileges)
            .expect("sample users are valid");
    }
    store
}

/// A temporary directory with a users file path inside it.
///
/// The directory and everything in it is removed on drop.
pub struct TestFixture {
    dir: TempDir,
    users_file: PathBuf,
}

impl TestFixture {
    /// Create a fixture whose users file does not exist yet.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let users_file = dir.path().join("password.json");
        Self { dir, users_file }
    }

    /// Create a fixture whose users file holds [`SAMPLE_USERS`].
    pub fn with_sample_users() -> Self {
        let fixture = Self::new();
        sample_store()
            .save_to_path(&fixture.users_file)
            .expect("write sample users");
        fixture
    }

    /// Create a fixture whose users file holds the given text verbatim.
    pub fn with_document(document: &str) -> Self {
        let fixture = Self::new();
        fixture.write_document(document);
        fixture
    }

    /// Path of the users file.
    pub fn users_file(&self) -> &Path {
        &self.users_file
    }

    /// Path of the temporary directory.
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    /// Overwrite the users file.
    pub fn write_document(&self, document: &str) {
        fs::write(&self.users_file, document).expect("write users file");
    }

    /// Read the users file back as text.
    pub fn read_document(&self) -> String {
        fs::read_to_string(&self.users_file).expect("read users file")
    }

    /// Load the users file into a new store.
    pub fn load(&self) -> Result<UserStore> {
        UserStore::load_from_path(&self.users_file)
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
