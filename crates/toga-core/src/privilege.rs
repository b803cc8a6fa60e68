//! Privilege bitmask with a canonical `|`-joined string form.
//!
//! Four bits carry names: `PRV_READ`, `PRV_WRITE`, `PRV_DELETE` and
//! `PRV_EXECUTE` (bits 0 to 3). The mask is a full `u64`, so bits without a
//! name can still be stored and tested, but they are dropped by the string
//! form: `parse(to_string(m)) == m` only holds when `m.unnamed_bits()` is
//! empty.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;

use crate::error::{AccountError, Result};

bitflags! {
    /// A set of granted privileges.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PrivilegeMask: u64 {
        /// May read records.
        const READ = 1 << 0;
        /// May write records.
        const WRITE = 1 << 1;
        /// May delete records.
        const DELETE = 1 << 2;
        /// May execute actions.
        const EXECUTE = 1 << 3;
    }
}

/// Separator between names in the string form.
pub const PRIVILEGE_SEPARATOR: char = '|';

/// Canonical names, in ascending bit order.
pub const PRIVILEGE_NAMES: [(PrivilegeMask, &str); 4] = [
    (PrivilegeMask::READ, "PRV_READ"),
    (PrivilegeMask::WRITE, "PRV_WRITE"),
    (PrivilegeMask::DELETE, "PRV_DELETE"),
    (PrivilegeMask::EXECUTE, "PRV_EXECUTE"),
];

impl PrivilegeMask {
    /// True iff every bit of `flag` is set. Works for compound flags.
    pub const fn has(self, flag: Self) -> bool {
        self.bits() & flag.bits() == flag.bits()
    }

    /// Set the bits of `flag`.
    #[must_use]
    pub const fn grant(self, flag: Self) -> Self {
        Self::from_bits_retain(self.bits() | flag.bits())
    }

    /// Clear the bits of `flag`, leaving every other bit (named or not) intact.
    #[must_use]
    pub const fn revoke(self, flag: Self) -> Self {
        Self::from_bits_retain(self.bits() & !flag.bits())
    }

    /// Bits that are set but have no canonical name.
    pub const fn unnamed_bits(self) -> u64 {
        self.bits() & !Self::all().bits()
    }

    /// Canonical names of the set bits, in ascending bit order.
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        PRIVILEGE_NAMES
            .iter()
            .filter(move |(flag, _)| self.has(*flag))
            .map(|(_, name)| *name)
    }

    /// Look up a single canonical name such as `"PRV_READ"` (exact,
    /// case-sensitive). The flag identifiers (`"READ"`) are not accepted.
    pub fn from_canonical_name(name: &str) -> Option<Self> {
        PRIVILEGE_NAMES
            .iter()
            .find(|(_, n)| *n == name)
            .map(|(flag, _)| *flag)
    }

    /// Parse a `|`-joined list of canonical names.
    ///
    /// The empty string is the empty mask. Any token that is not a canonical
    /// name fails the whole parse, including an empty token between two
    /// separators.
    pub fn parse(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Ok(Self::empty());
        }

        s.split(PRIVILEGE_SEPARATOR).try_fold(Self::empty(), |mask, token| {
            Self::from_canonical_name(token)
                .map(|flag| mask.grant(flag))
                .ok_or_else(|| AccountError::UnknownPrivilegeToken(token.to_string()))
        })
    }
}

impl fmt::Display for PrivilegeMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, name) in self.names().enumerate() {
            if i > 0 {
                write!(f, "{}", PRIVILEGE_SEPARATOR)?;
            }
            f.write_str(name)?;
        }
        Ok(())
    }
}

impl FromStr for PrivilegeMask {
    type Err = AccountError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_string_ascending_order() {
        let mask = PrivilegeMask::EXECUTE | PrivilegeMask::READ | PrivilegeMask::DELETE;
        assert_eq!(mask.to_string(), "PRV_READ|PRV_DELETE|PRV_EXECUTE");
    }

    #[test]
    fn test_empty_mask_is_empty_string() {
        assert_eq!(PrivilegeMask::empty().to_string(), "");
        assert_eq!(PrivilegeMask::parse("").unwrap(), PrivilegeMask::empty());
    }

    #[test]
    fn test_parse_read_write() {
        let mask: PrivilegeMask = "PRV_READ|PRV_WRITE".parse().unwrap();
        assert!(mask.has(PrivilegeMask::READ));
        assert!(mask.has(PrivilegeMask::WRITE));
        assert!(!mask.has(PrivilegeMask::DELETE));
    }

    #[test]
    fn test_parse_unknown_token() {
        let result = PrivilegeMask::parse("PRV_READ|BOGUS");
        assert_eq!(
            result,
            Err(AccountError::UnknownPrivilegeToken("BOGUS".into()))
        );
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        let result = PrivilegeMask::parse("prv_read");
        assert!(matches!(result, Err(AccountError::UnknownPrivilegeToken(t)) if t == "prv_read"));
    }

    #[test]
    fn test_parse_rejects_flag_identifiers() {
        assert_eq!(
            PrivilegeMask::parse("READ"),
            Err(AccountError::UnknownPrivilegeToken("READ".into()))
        );
        assert_eq!(PrivilegeMask::from_canonical_name("WRITE"), None);
        assert_eq!(
            PrivilegeMask::from_canonical_name("PRV_WRITE"),
            Some(PrivilegeMask::WRITE)
        );
    }

    #[test]
    fn test_parse_trailing_separator() {
        assert_eq!(
            PrivilegeMask::parse("PRV_READ|"),
            Err(AccountError::UnknownPrivilegeToken(String::new()))
        );
    }

    #[test]
    fn test_parse_empty_token() {
        let result = PrivilegeMask::parse("PRV_READ||PRV_WRITE");
        assert_eq!(result, Err(AccountError::UnknownPrivilegeToken(String::new())));
    }

    #[test]
    fn test_has_compound_flag() {
        let mask = PrivilegeMask::READ | PrivilegeMask::WRITE;
        assert!(mask.has(PrivilegeMask::READ | PrivilegeMask::WRITE));
        assert!(!mask.has(PrivilegeMask::READ | PrivilegeMask::DELETE));
        assert!(mask.has(PrivilegeMask::empty()));
    }

    #[test]
    fn test_grant_and_revoke() {
        let mask = PrivilegeMask::empty()
            .grant(PrivilegeMask::READ | PrivilegeMask::EXECUTE)
            .revoke(PrivilegeMask::EXECUTE);
        assert_eq!(mask, PrivilegeMask::READ);

        // Revoking something not held is a no-op.
        assert_eq!(mask.revoke(PrivilegeMask::DELETE), PrivilegeMask::READ);
    }

    #[test]
    fn test_unnamed_bits_kept_but_not_printed() {
        let mask = PrivilegeMask::from_bits_retain(0b1_0000 | 0b0001);
        assert_eq!(mask.unnamed_bits(), 0b1_0000);
        assert_eq!(mask.to_string(), "PRV_READ");

        // Revoking a named bit keeps the unnamed one.
        let revoked = mask.revoke(PrivilegeMask::READ);
        assert_eq!(revoked.bits(), 0b1_0000);
    }
}
