//! Hex-encoded HMAC secrets.

use std::fmt;

use crate::{CryptoError, Result};

/// A decoded HMAC key.
///
/// Built only through [`Secret::from_hex`], so every value holds at least one
/// byte. The bytes never appear in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret {
    bytes: Vec<u8>,
}

impl Secret {
    /// Decode a secret from hex text, two digits per byte.
    ///
    /// Empty input, odd-length input and non-hex digits are rejected with
    /// [`CryptoError::InvalidSecretFormat`]. Both digit cases are accepted.
    pub fn from_hex(secret_hex: &str) -> Result<Self> {
        if secret_hex.is_empty() {
            return Err(CryptoError::InvalidSecretFormat(
                "secret must not be empty".to_string(),
            ));
        }
        if secret_hex.len() % 2 != 0 {
            return Err(CryptoError::InvalidSecretFormat(format!(
                "secret must have an even number of hex digits, got {}",
                secret_hex.len()
            )));
        }

        let bytes = hex::decode(secret_hex).map_err(|e| match e {
            hex::FromHexError::InvalidHexCharacter { c, index } => {
                CryptoError::InvalidSecretFormat(format!(
                    "invalid hex digit {c:?} at position {index}"
                ))
            }
            other => CryptoError::InvalidSecretFormat(other.to_string()),
        })?;

        Ok(Self { bytes })
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Key length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false; an empty secret cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secret")
            .field("len", &self.bytes.len())
            .finish_non_exhaustive()
    }
}
