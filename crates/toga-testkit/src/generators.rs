//! Proptest generators for property-based testing.

use proptest::prelude::*;

use toga_core::{PrivilegeMask, UserAccount};

/// Generate a username that satisfies the naming rule.
pub fn username() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9]{2,15}".prop_map(String::from)
}

/// Generate a username that breaks the naming rule.
pub fn invalid_username() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        // Too short
        "[a-zA-Z][a-zA-Z0-9]?",
        // Starts with a digit
        "[0-9][a-zA-Z0-9]{2,15}",
        // Contains punctuation or whitespace
        "[a-zA-Z][a-zA-Z0-9]{1,6}[ !@#$%_.\\-][a-zA-Z0-9]{0,6}",
        // Non-ASCII letter
        "[a-zA-Z]{2,6}[éüßø][a-zA-Z]{0,6}",
    ]
}

/// Generate a password long enough to be accepted.
pub fn password() -> impl Strategy<Value = String> {
    "\\PC{4,32}".prop_map(String::from)
}

/// Generate a non-empty password that is too short.
pub fn short_password() -> impl Strategy<Value = String> {
    "\\PC{1,3}".prop_map(String::from)
}

/// Generate free-text display names, including quotes and non-ASCII.
pub fn display_name() -> impl Strategy<Value = String> {
    "\\PC{0,32}".prop_map(String::from)
}

/// Generate a mask made only of named privileges.
pub fn privilege_mask() -> impl Strategy<Value = PrivilegeMask> {
    (0u64..=PrivilegeMask::all().bits()).prop_map(PrivilegeMask::from_bits_retain)
}

/// Generate any 64-bit mask, named bits or not.
pub fn raw_privilege_mask() -> impl Strategy<Value = PrivilegeMask> {
    any::<u64>().prop_map(PrivilegeMask::from_bits_retain)
}

/// Parameters for generating an account.
#[derive(Debug, Clone)]
pub struct AccountParams {
    pub username: String,
    pub display_name: String,
    pub password: String,
    pub privileges: PrivilegeMask,
}

impl Arbitrary for AccountParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (username(), display_name(), password(), privilege_mask())
            .prop_map(|(username, display_name, password, privileges)| AccountParams {
                username,
                display_name,
                password,
                privileges,
            })
            .boxed()
    }
}

/// Build an account from parameters.
pub fn account_from_params(params: &AccountParams) -> UserAccount {
    let mut account = UserAccount::create(params.username.clone(), params.display_name.clone())
        .expect("generated username is valid");
    account
        .set_password(&params.password)
        .expect("generated password is valid");
    account.grant(params.privileges);
    account
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    use toga_core::{AccountError, PasswordDigest};
    use toga_store::{StoreError, UserStore};

    proptest! {
        #[test]
        fn test_valid_username_accepted(name in username()) {
            prop_assert!(UserAccount::create(name, "").is_ok());
        }

        #[test]
        fn test_invalid_username_rejected(name in invalid_username()) {
            let result = UserAccount::create(name.clone(), "");
            prop_assert_eq!(result, Err(AccountError::InvalidUsername(name)));
        }

        #[test]
        fn test_password_verifies(params: AccountParams, other in password()) {
            let account = account_from_params(&params);
            prop_assert!(account.authenticate(&params.password));

            prop_assume!(other != params.password);
            prop_assert!(!account.authenticate(&other));
        }

        #[test]
        fn test_short_password_rejected(pw in short_password()) {
            let mut account = UserAccount::create("tim", "").unwrap();
            let result = account.set_password(&pw);
            let is_too_short = matches!(result, Err(AccountError::PasswordTooShort { .. }));
            prop_assert!(is_too_short);
            prop_assert!(!account.has_password());
        }

        #[test]
        fn test_hash_deterministic(pw in password()) {
            prop_assert_eq!(PasswordDigest::hash(&pw), PasswordDigest::hash(&pw));
        }

        #[test]
        fn test_account_record_roundtrip(params: AccountParams) {
            let account = account_from_params(&params);
            let recovered = UserAccount::deserialize(&account.serialize()).unwrap();
            prop_assert_eq!(account, recovered);
        }

        #[test]
        fn test_account_survives_json(params: AccountParams) {
            let account = account_from_params(&params);
            let json = serde_json::to_string(&account.serialize()).unwrap();
            let record = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(UserAccount::deserialize(&record).unwrap(), account);
        }

        #[test]
        fn test_mask_string_roundtrip(mask in privilege_mask()) {
            prop_assert_eq!(PrivilegeMask::parse(&mask.to_string()).unwrap(), mask);
        }

        #[test]
        fn test_unnamed_bits_dropped_from_string(mask in raw_privilege_mask()) {
            let reparsed = PrivilegeMask::parse(&mask.to_string()).unwrap();
            prop_assert_eq!(reparsed.bits(), mask.bits() & PrivilegeMask::all().bits());
        }

        #[test]
        fn test_grant_then_has(mask in raw_privilege_mask(), flag in privilege_mask()) {
            prop_assert!(mask.grant(flag).has(flag));
        }

        #[test]
        fn test_revoke_clears_only_flag(mask in raw_privilege_mask(), flag in privilege_mask()) {
            let revoked = mask.revoke(flag);
            prop_assert_eq!(revoked.bits() & flag.bits(), 0);
            prop_assert_eq!(revoked.bits() | (mask.bits() & flag.bits()), mask.bits());
        }

        #[test]
        fn test_store_save_load(accounts in prop::collection::vec(any::<AccountParams>(), 0..8)) {
            let mut store = UserStore::new();
            let mut seen = HashSet::new();
            for params in &accounts {
                let result = store.add(
                    &params.username,
                    &params.display_name,
                    &params.password,
                    params.privileges,
                );
                if seen.insert(params.username.to_lowercase()) {
                    prop_assert!(result.is_ok());
                } else {
                    let is_duplicate = matches!(result, Err(StoreError::UserAlreadyExists(_)));
                    prop_assert!(is_duplicate);
                }
            }

            let mut buf = Vec::new();
            store.save_to(&mut buf).unwrap();

            let mut loaded = UserStore::new();
            loaded.load_from(buf.as_slice()).unwrap();

            prop_assert_eq!(loaded.usernames(), store.usernames());
            for account in store.iter() {
                prop_assert_eq!(loaded.get(account.username()), Some(account));
            }
        }
    }
}
