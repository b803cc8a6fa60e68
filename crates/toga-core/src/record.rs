//! The on-disk shape of a single account.

use serde::{Deserialize, Serialize};

/// One account as it appears in a users document.
///
/// Every field is optional on the way in so that a missing field can be
/// reported precisely by [`UserAccount::deserialize`](crate::UserAccount::deserialize).
/// Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub realname: Option<String>,

    /// Base64 of the 64-byte password digest.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// `|`-joined privilege names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub privileges: Option<String>,
}
