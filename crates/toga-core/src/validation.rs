//! Username and password validation.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{AccountError, Result};

/// Minimum password length, counted in characters (Unicode scalar values),
/// not bytes: `"éééé"` is long enough, `"ééé"` is not.
pub const MIN_PASSWORD_LEN: usize = 4;

/// An ASCII letter followed by at least two ASCII letters or digits.
static USERNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9]{2,}$").expect("username pattern is valid"));

/// Check a username against the account naming rule.
pub fn validate_username(username: &str) -> Result<()> {
    if USERNAME_RE.is_match(username) {
        Ok(())
    } else {
        Err(AccountError::InvalidUsername(username.to_string()))
    }
}

/// Check a plaintext password before it is hashed.
pub fn validate_password(plaintext: &str) -> Result<()> {
    let len = plaintext.chars().count();
    if len == 0 {
        return Err(AccountError::EmptyPassword);
    }
    if len < MIN_PASSWORD_LEN {
        return Err(AccountError::PasswordTooShort {
            min: MIN_PASSWORD_LEN,
            actual: len,
        });
    }
    Ok(())
}

/// The key a username is stored and looked up under.
pub fn canonical_username(username: &str) -> String {
    username.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_usernames() {
        for name in ["tim", "Tim", "TIM", "a12", "Zed9000", "abc"] {
            assert!(validate_username(name).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn test_invalid_usernames() {
        for name in ["", "ab", "1tim", "tim!", "ti m", "tim_smith", "_tim", "tïm"] {
            assert_eq!(
                validate_username(name),
                Err(AccountError::InvalidUsername(name.to_string())),
                "{name:?} should be invalid"
            );
        }
    }

    #[test]
    fn test_trailing_newline_rejected() {
        assert!(validate_username("tim\n").is_err());
    }

    #[test]
    fn test_empty_password() {
        assert_eq!(validate_password(""), Err(AccountError::EmptyPassword));
    }

    #[test]
    fn test_short_password() {
        assert_eq!(
            validate_password("ab"),
            Err(AccountError::PasswordTooShort { min: 4, actual: 2 })
        );
        assert!(validate_password("abc").is_err());
        assert!(validate_password("abcd").is_ok());
    }

    #[test]
    fn test_password_length_counts_characters() {
        // Four characters, eight bytes.
        assert!(validate_password("éééé").is_ok());
        assert!(validate_password("ééé").is_err());
    }

    #[test]
    fn test_canonical_username() {
        assert_eq!(canonical_username("TiM"), "tim");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn canonical_name_still_valid(name in "[a-zA-Z][a-zA-Z0-9]{2,20}") {
                prop_assert!(validate_username(&name).is_ok());
                let canonical = canonical_username(&name);
                prop_assert!(validate_username(&canonical).is_ok());
                prop_assert_eq!(canonical_username(&canonical), canonical);
            }

            #[test]
            fn password_length_boundary(pw in "\\PC{0,12}") {
                let len = pw.chars().count();
                let result = validate_password(&pw);
                match len {
                    0 => prop_assert_eq!(result, Err(AccountError::EmptyPassword)),
                    n if n < MIN_PASSWORD_LEN => prop_assert_eq!(
                        result,
                        Err(AccountError::PasswordTooShort { min: MIN_PASSWORD_LEN, actual: n })
                    ),
                    _ => prop_assert!(result.is_ok()),
                }
            }
        }
    }
}
