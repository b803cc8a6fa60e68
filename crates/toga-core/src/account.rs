//! A single user account: identity, password digest and privileges.

use std::fmt;

use crate::crypto::PasswordDigest;
use crate::error::{AccountError, Result};
use crate::privilege::PrivilegeMask;
use crate::record::AccountRecord;
use crate::validation::{validate_password, validate_username};

/// A user account.
///
/// The username keeps the casing it was created with; stores index it by
/// its lowercased form. The password digest is either unset (all zeros) or
/// the digest of a password that passed [`validate_password`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAccount {
    username: String,
    display_name: String,
    password: PasswordDigest,
    privileges: PrivilegeMask,
}

impl UserAccount {
    /// Create an account with no password and no privileges.
    pub fn create(username: impl Into<String>, display_name: impl Into<String>) -> Result<Self> {
        let username = username.into();
        validate_username(&username)?;

        Ok(Self {
            username,
            display_name: display_name.into(),
            password: PasswordDigest::ZERO,
            privileges: PrivilegeMask::empty(),
        })
    }

    /// The username, in the casing it was created with.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The free-text display name.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn set_display_name(&mut self, display_name: impl Into<String>) {
        self.display_name = display_name.into();
    }

    /// The stored password digest.
    pub fn password_digest(&self) -> &PasswordDigest {
        &self.password
    }

    /// Whether a password has been set.
    pub fn has_password(&self) -> bool {
        self.password.is_set()
    }

    /// Validate and hash a new password. The old one is kept on error.
    pub fn set_password(&mut self, plaintext: &str) -> Result<()> {
        validate_password(plaintext)?;
        self.password = Self::hash_password(plaintext);
        Ok(())
    }

    /// Hash a plaintext password.
    pub fn hash_password(plaintext: &str) -> PasswordDigest {
        PasswordDigest::hash(plaintext)
    }

    /// Check a plaintext password against the stored digest.
    ///
    /// Accounts without a password never authenticate.
    pub fn authenticate(&self, plaintext: &str) -> bool {
        self.password.is_set() && self.password.ct_eq(&Self::hash_password(plaintext))
    }

    /// The granted privileges.
    pub fn privileges(&self) -> PrivilegeMask {
        self.privileges
    }

    /// True iff every bit of `flag` is granted.
    pub fn has_privilege(&self, flag: PrivilegeMask) -> bool {
        self.privileges.has(flag)
    }

    pub fn grant(&mut self, flag: PrivilegeMask) {
        self.privileges = self.privileges.grant(flag);
    }

    pub fn revoke(&mut self, flag: PrivilegeMask) {
        self.privileges = self.privileges.revoke(flag);
    }

    /// Encode as a document record.
    ///
    /// Privilege bits without a canonical name are not written.
    pub fn serialize(&self) -> AccountRecord {
        AccountRecord {
            username: Some(self.username.clone()),
            realname: Some(self.display_name.clone()),
            password: Some(self.password.to_base64()),
            privileges: Some(self.privileges.to_string()),
        }
    }

    /// Decode a document record.
    ///
    /// The username is taken as written; it is not checked against the
    /// naming rule, so documents written by other tools still load.
    pub fn deserialize(record: &AccountRecord) -> Result<Self> {
        let username = record
            .username
            .clone()
            .ok_or(AccountError::MissingUsername)?;

        let encoded = record
            .password
            .as_deref()
            .ok_or_else(|| AccountError::MissingPassword(username.clone()))?;
        let password =
            PasswordDigest::from_base64(encoded).map_err(|e| AccountError::CorruptPassword {
                username: username.clone(),
                reason: e.to_string(),
            })?;

        let privileges = match record.privileges.as_deref() {
            Some(s) => PrivilegeMask::parse(s)?,
            None => PrivilegeMask::empty(),
        };

        Ok(Self {
            username,
            display_name: record.realname.clone().unwrap_or_default(),
            password,
            privileges,
        })
    }
}

impl fmt::Display for UserAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) {} {}",
            self.username,
            self.display_name,
            self.password.to_base64(),
            self.privileges
        )
    }
}
