//! The user store: accounts keyed by lowercased username.

use std::collections::HashMap;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use toga_core::{canonical_username, PrivilegeMask, UserAccount};

use crate::document::{read_accounts, write_accounts};
use crate::error::{Result, StoreError};

/// In-memory collection of user accounts.
///
/// Keys are canonical (lowercased) usernames, on every insertion path. The
/// store is meant to be owned by a single caller; wrap it in a lock if it
/// has to be shared.
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    users: HashMap<String, UserAccount>,
}

impl UserStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create and register a new account.
    ///
    /// The username is lowercased before it is validated and stored.
    pub fn add(
        &mut self,
        username: &str,
        realname: &str,
        password: &str,
        privileges: PrivilegeMask,
    ) -> Result<()> {
        let username = canonical_username(username);
        if self.users.contains_key(&username) {
            return Err(StoreError::UserAlreadyExists(username));
        }

        let mut account = UserAccount::create(username.clone(), realname)?;
        account.set_password(password)?;
        account.grant(privileges);

        self.users.insert(username, account);
        Ok(())
    }

    /// Insert an account under its canonical username, replacing and
    /// returning any account already stored there.
    pub fn insert(&mut self, account: UserAccount) -> Option<UserAccount> {
        let key = canonical_username(account.username());
        self.users.insert(key, account)
    }

    /// Look up an account, ignoring case.
    pub fn get(&self, username: &str) -> Option<&UserAccount> {
        self.users.get(&canonical_username(username))
    }

    /// Look up an account for modification, ignoring case.
    pub fn get_mut(&mut self, username: &str) -> Option<&mut UserAccount> {
        self.users.get_mut(&canonical_username(username))
    }

    pub fn contains(&self, username: &str) -> bool {
        self.users.contains_key(&canonical_username(username))
    }

    /// Remove and return an account, ignoring case.
    pub fn remove(&mut self, username: &str) -> Option<UserAccount> {
        self.users.remove(&canonical_username(username))
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Iterate over all accounts, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &UserAccount> {
        self.users.values()
    }

    /// Canonical usernames, sorted.
    pub fn usernames(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.users.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Read a users document and merge its accounts into this store.
    ///
    /// Accounts are keyed by their lowercased username; a later record for
    /// the same user replaces an earlier one. If any record fails to decode,
    /// the store is left untouched.
    pub fn load_from<R: Read>(&mut self, reader: R) -> Result<()> {
        let accounts = read_accounts(reader)?;
        let count = accounts.len();

        for account in accounts {
            self.insert(account);
        }

        tracing::debug!("loaded {} user records, store holds {}", count, self.len());
        Ok(())
    }

    /// Write every account as an indented users document, sorted by username.
    pub fn save_to<W: Write>(&self, writer: W) -> Result<()> {
        let mut entries: Vec<(&String, &UserAccount)> = self.users.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));

        write_accounts(writer, entries.into_iter().map(|(_, account)| account))?;

        tracing::debug!("saved {} user records", self.len());
        Ok(())
    }

    /// Open a users file and load it into a new store.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;

        let mut store = Self::new();
        store.load_from(file)?;

        tracing::debug!("read users file {}", path.display());
        Ok(store)
    }

    /// Create (or truncate) a users file and save this store to it.
    pub fn save_to_path(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)?;

        self.save_to(&file)?;
        file.sync_all()?;

        tracing::debug!("wrote users file {}", path.display());
        Ok(())
    }
}
