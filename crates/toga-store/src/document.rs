//! The users document: an indented JSON array of account records.
//!
//! ```text
//! [
//!   {
//!     "username": "tim",
//!     "realname": "Tim",
//!     "password": "<base64 of 64 bytes>",
//!     "privileges": "PRV_READ|PRV_WRITE"
//!   }
//! ]
//! ```

use std::io::{BufWriter, Read, Write};

use toga_core::{AccountRecord, UserAccount};

use crate::error::Result;

/// Read a whole users document and decode every account in it.
///
/// Decoding stops at the first bad record; nothing is returned in that case.
pub fn read_accounts<R: Read>(mut reader: R) -> Result<Vec<UserAccount>> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;

    let records: Vec<AccountRecord> = serde_json::from_slice(&buf)?;
    let accounts = records
        .iter()
        .map(UserAccount::deserialize)
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(accounts)
}

/// Encode accounts as an indented users document and write it out in full.
pub fn write_accounts<'a, W, I>(writer: W, accounts: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a UserAccount>,
{
    let records: Vec<AccountRecord> = accounts
        .into_iter()
        .map(|account| {
            let unnamed = account.privileges().unnamed_bits();
            if unnamed != 0 {
                tracing::warn!(
                    "privilege bits {:#x} of user {} have no name and will not be saved",
                    unnamed,
                    account.username()
                );
            }
            account.serialize()
        })
        .collect();

    let bytes = serde_json::to_vec_pretty(&records)?;

    let mut writer = BufWriter::new(writer);
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use toga_core::{AccountError, PrivilegeMask};

    fn account(name: &str, privileges: PrivilegeMask) -> UserAccount {
        let mut account = UserAccount::create(name, name.to_uppercase()).unwrap();
        account.set_password("sausages").unwrap();
        account.grant(privileges);
        account
    }

    #[test]
    fn test_write_is_indented_array() {
        let tim = account("tim", PrivilegeMask::READ);
        let mut out = Vec::new();
        write_accounts(&mut out, [&tim]).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("[\n  {\n    \"username\": \"tim\",\n"));
        assert!(text.contains("\"privileges\": \"PRV_READ\""));
    }

    #[test]
    fn test_write_empty() {
        let mut out = Vec::new();
        write_accounts(&mut out, []).unwrap();
        assert_eq!(out, b"[]");
    }

    #[test]
    fn test_read_back() {
        let tim = account("tim", PrivilegeMask::READ | PrivilegeMask::EXECUTE);
        let bob = account("bob", PrivilegeMask::empty());

        let mut out = Vec::new();
        write_accounts(&mut out, [&tim, &bob]).unwrap();

        let accounts = read_accounts(out.as_slice()).unwrap();
        assert_eq!(accounts, vec![tim, bob]);
    }

    #[test]
    fn test_read_not_an_array() {
        let result = read_accounts(&b"{\"username\": \"tim\"}"[..]);
        assert!(matches!(result, Err(StoreError::Json(_))));
    }

    #[test]
    fn test_read_stops_at_first_bad_record() {
        let doc = br#"[
            {"username": "tim", "password": "AAAA"},
            {"realname": "nobody"}
        ]"#;
        let result = read_accounts(&doc[..]);
        assert!(matches!(
            result,
            Err(StoreError::Account(AccountError::CorruptPassword { .. }))
        ));
    }
}
