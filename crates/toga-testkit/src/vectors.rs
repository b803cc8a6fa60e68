//! Golden test vectors for password hashing and the users document.
//!
//! The digests are plain SHA-512 over the UTF-8 password bytes, so they can
//! be checked with any SHA-512 tool.

use toga_core::PasswordDigest;

/// A golden test vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Plaintext password.
    pub password: &'static str,
    /// Expected digest (hex).
    pub expected_hex: &'static str,
    /// Expected digest as written in a users document (base64).
    pub expected_base64: &'static str,
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "sausages",
            password: "sausages",
            expected_hex: "5d23d9baac85c89c8c4cdd4b7d5373644aa20ea1222cb8208271974a0dc1cb56\
                           6dd1fb3c6ac5cc566f921234156ab289f1f87a409cb6b7f2465da7db37f0fd2a",
            expected_base64: "XSPZuqyFyJyMTN1LfVNzZEqiDqEiLLgggnGXSg3By1Zt0fs8asXMVm+SEjQVarKJ8fh6QJy2t/JGXafbN/D9Kg==",
        },
        GoldenVector {
            name: "marmalade",
            password: "marmalade",
            expected_hex: "9c444e7dfe7d83bdbdfc42de903b0d2634459c6ea194f7f23bd6d0448cb5ca4d\
                           5f6c532154cec834649f715cb4aa7fb69eb5a013a41ef1005b05b778c98693f2",
            expected_base64: "nEROff59g729/ELekDsNJjRFnG6hlPfyO9bQRIy1yk1fbFMhVM7INGSfcVy0qn+2nrWgE6Qe8QBbBbd4yYaT8g==",
        },
        GoldenVector {
            name: "minimum length",
            password: "abcd",
            expected_hex: "d8022f2060ad6efd297ab73dcc5355c9b214054b0d1776a136a669d26a7d3b14\
                           f73aa0d0ebff19ee333368f0164b6419a96da49e3e481753e7e96b716bdccb6f",
            expected_base64: "2AIvIGCtbv0perc9zFNVybIUBUsNF3ahNqZp0mp9OxT3OqDQ6/8Z7jMzaPAWS2QZqW2knj5IF1Pn6Wtxa9zLbw==",
        },
    ]
}

/// Verify all golden vectors against the current hashing code.
///
/// Returns `(name, matches, actual_hex)` for each vector.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    all_vectors()
        .iter()
        .map(|v| {
            let digest = PasswordDigest::hash(v.password);
            let hex = digest.to_hex();
            let matches = hex == v.expected_hex && digest.to_base64() == v.expected_base64;
            (v.name.to_string(), matches, hex)
        })
        .collect()
}

/// A users document holding one account, `tim`, with password `sausages`
/// and read/write privileges.
pub const GOLDEN_DOCUMENT: &str = r#"[
  {
    "username": "tim",
    "realname": "Tim",
    "password": "XSPZuqyFyJyMTN1LfVNzZEqiDqEiLLgggnGXSg3By1Zt0fs8asXMVm+SEjQVarKJ8fh6QJy2t/JGXafbN/D9Kg==",
    "privileges": "PRV_READ|PRV_WRITE"
  }
]"#;
