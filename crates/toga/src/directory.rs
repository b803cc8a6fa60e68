//! The Directory: a user store bound to its users file.
//!
//! The Directory brings together loading, account management, login checks
//! and saving behind a single owner.

use std::io::ErrorKind;

use toga_core::{PrivilegeMask, UserAccount};
use toga_store::{StoreError, UserStore};

use crate::config::DirectoryConfig;
use crate::error::{DirectoryError, Result};

/// A user store together with the file it was loaded from.
///
/// Changes stay in memory until [`Directory::save`] is called. Mutation
/// takes `&mut self`; there is no internal locking.
#[derive(Debug)]
pub struct Directory {
    /// The accounts.
    store: UserStore,
    /// Configuration.
    config: DirectoryConfig,
}

impl Directory {
    /// Open the configured users file.
    ///
    /// A missing file is created empty when `create_if_missing` is set and
    /// reported as an I/O error otherwise.
    pub fn open(config: DirectoryConfig) -> Result<Self> {
        let store = match UserStore::load_from_path(&config.users_file) {
            Ok(store) => store,
            Err(StoreError::Io(e)) if e.kind() == ErrorKind::NotFound && config.create_if_missing => {
                tracing::info!(
                    "users file {} not found, creating it",
                    config.users_file.display()
                );
                let store = UserStore::new();
                store.save_to_path(&config.users_file)?;
                store
            }
            Err(e) => return Err(e.into()),
        };

        tracing::info!(
            "opened {} with {} users",
            config.users_file.display(),
            store.len()
        );
        Ok(Self { store, config })
    }

    /// Wrap an existing store. Nothing is read from disk.
    pub fn from_store(store: UserStore, config: DirectoryConfig) -> Self {
        Self { store, config }
    }

    /// An empty directory with the default configuration. Nothing is read
    /// from disk until [`Directory::save`] writes the users file.
    pub fn in_memory() -> Self {
        Self::from_store(UserStore::new(), DirectoryConfig::default())
    }

    /// Get the configuration.
    pub fn config(&self) -> &DirectoryConfig {
        &self.config
    }

    /// Get the store reference.
    pub fn store(&self) -> &UserStore {
        &self.store
    }

    pub fn into_store(self) -> UserStore {
        self.store
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accounts
    // ─────────────────────────────────────────────────────────────────────────

    /// Create a new account. See [`UserStore::add`].
    pub fn add_user(
        &mut self,
        username: &str,
        realname: &str,
        password: &str,
        privileges: PrivilegeMask,
    ) -> Result<()> {
        self.store.add(username, realname, password, privileges)?;
        tracing::debug!("added user {}", username);
        Ok(())
    }

    /// Look up an account, ignoring case.
    pub fn user(&self, username: &str) -> Option<&UserAccount> {
        self.store.get(username)
    }

    /// Remove an account.
    pub fn remove_user(&mut self, username: &str) -> Result<UserAccount> {
        self.store
            .remove(username)
            .ok_or_else(|| DirectoryError::UnknownUser(username.to_string()))
    }

    /// Replace a user's password.
    pub fn set_password(&mut self, username: &str, password: &str) -> Result<()> {
        self.user_mut(username)?.set_password(password)?;
        Ok(())
    }

    /// Grant privileges to a user.
    pub fn grant(&mut self, username: &str, flag: PrivilegeMask) -> Result<()> {
        self.user_mut(username)?.grant(flag);
        Ok(())
    }

    /// Revoke privileges from a user.
    pub fn revoke(&mut self, username: &str, flag: PrivilegeMask) -> Result<()> {
        self.user_mut(username)?.revoke(flag);
        Ok(())
    }

    fn user_mut(&mut self, username: &str) -> Result<&mut UserAccount> {
        self.store
            .get_mut(username)
            .ok_or_else(|| DirectoryError::UnknownUser(username.to_string()))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Login
    // ─────────────────────────────────────────────────────────────────────────

    /// Check a username and password, returning the account on success.
    pub fn login(&self, username: &str, password: &str) -> Result<&UserAccount> {
        let Some(account) = self.store.get(username) else {
            tracing::warn!("login for unknown user {}", username);
            return Err(DirectoryError::UnknownUser(username.to_string()));
        };

        if !account.authenticate(password) {
            tracing::warn!("failed login for user {}", account.username());
            return Err(DirectoryError::AuthenticationFailed(
                account.username().to_string(),
            ));
        }

        Ok(account)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Persistence
    // ─────────────────────────────────────────────────────────────────────────

    /// Write all accounts back to the users file.
    pub fn save(&self) -> Result<()> {
        self.store.save_to_path(&self.config.users_file)?;
        tracing::info!(
            "saved {} users to {}",
            self.store.len(),
            self.config.users_file.display()
        );
        Ok(())
    }
}
