//! Password hashing for Toga accounts.
//!
//! Wraps SHA-512 digests in a fixed-size type with base64 and hex helpers.

use std::fmt;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use sha2::{Digest, Sha512};
use subtle::ConstantTimeEq;

/// Size in bytes of a password digest.
pub const DIGEST_LEN: usize = 64;

/// A 64-byte SHA-512 password digest.
///
/// The all-zero digest means "no password set".
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PasswordDigest(pub [u8; DIGEST_LEN]);

impl PasswordDigest {
    /// Hash a plaintext password. This is the only hashing entry point, so
    /// setting and verifying a password always agree.
    pub fn hash(plaintext: &str) -> Self {
        let mut out = [0u8; DIGEST_LEN];
        out.copy_from_slice(&Sha512::digest(plaintext.as_bytes()));
        Self(out)
    }

    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// Create from a slice, which must be exactly [`DIGEST_LEN`] bytes.
    pub fn from_slice(slice: &[u8]) -> Result<Self, DigestLengthError> {
        let arr: [u8; DIGEST_LEN] = slice
            .try_into()
            .map_err(|_| DigestLengthError(slice.len()))?;
        Ok(Self(arr))
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Encode as standard, padded base64.
    pub fn to_base64(&self) -> String {
        BASE64.encode(self.0)
    }

    /// Decode from standard, padded base64.
    pub fn from_base64(s: &str) -> Result<Self, DigestDecodeError> {
        let bytes = BASE64.decode(s)?;
        Ok(Self::from_slice(&bytes)?)
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Whether this digest holds a real password hash.
    pub fn is_set(&self) -> bool {
        *self != Self::ZERO
    }

    /// Compare two digests in constant time.
    pub fn ct_eq(&self, other: &Self) -> bool {
        self.0[..].ct_eq(&other.0[..]).into()
    }

    /// The unset digest.
    pub const ZERO: Self = Self([0u8; DIGEST_LEN]);
}

impl Default for PasswordDigest {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sha512({}...)", &self.to_hex()[..16])
    }
}

impl AsRef<[u8]> for PasswordDigest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; DIGEST_LEN]> for PasswordDigest {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }
}

/// A digest of the wrong length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("digest must be 64 bytes, got {0}")]
pub struct DigestLengthError(pub usize);

/// Failure decoding a base64 digest.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DigestDecodeError {
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error(transparent)]
    Length(#[from] DigestLengthError),
}
