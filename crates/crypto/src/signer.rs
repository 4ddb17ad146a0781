//! HMAC-SHA256 signing with base64 output.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::{canonicalize, constant_time_compare, CryptoError, Result, Secret};

type HmacSha256 = Hmac<Sha256>;

/// Compute HMAC-SHA256 of `message` keyed by `secret`, as standard padded base64.
pub fn compute_hmac_base64(secret: &Secret, message: &[u8]) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC can take key of any size");
    mac.update(message);
    STANDARD.encode(mac.finalize().into_bytes())
}

/// Sign a canonical data string with a hex-encoded secret.
///
/// An empty secret counts as not configured and fails with
/// [`CryptoError::SecretNotConfigured`]; any other malformed secret fails
/// with [`CryptoError::InvalidSecretFormat`] before hashing.
pub fn sign(secret_hex: &str, message: &str) -> Result<String> {
    Signer::new(secret_hex)?.sign(message)
}

/// Signs canonical data strings with a configured secret.
///
/// The secret is decoded once when it is set. Replacing it needs `&mut self`,
/// so a shared `&Signer` always signs with one consistent key.
#[derive(Debug, Clone, Default)]
pub struct Signer {
    secret: Option<Secret>,
}

impl Signer {
    /// Create a signer from a hex-encoded secret.
    ///
    /// Empty text yields an unconfigured signer, matching a secret that was
    /// never provided.
    pub fn new(secret_hex: &str) -> Result<Self> {
        let mut signer = Self::unconfigured();
        signer.set_secret(secret_hex)?;
        Ok(signer)
    }

    /// Create a signer with no secret. Signing fails until one is set.
    pub fn unconfigured() -> Self {
        Self { secret: None }
    }

    /// Create a signer from an already decoded secret.
    pub fn from_secret(secret: Secret) -> Self {
        Self {
            secret: Some(secret),
        }
    }

    /// Replace the secret.
    ///
    /// Empty text clears it. On a format error the previous secret is kept.
    pub fn set_secret(&mut self, secret_hex: &str) -> Result<()> {
        self.secret = if secret_hex.is_empty() {
            None
        } else {
            Some(Secret::from_hex(secret_hex)?)
        };
        Ok(())
    }

    /// Whether a secret is set.
    pub fn is_configured(&self) -> bool {
        self.secret.is_some()
    }

    /// Sign a canonical data string.
    pub fn sign(&self, message: &str) -> Result<String> {
        let secret = self.secret.as_ref().ok_or(CryptoError::SecretNotConfigured)?;
        Ok(compute_hmac_base64(secret, message.as_bytes()))
    }

    /// Canonicalize a field set and sign the result.
    pub fn sign_fields<I, K, V>(&self, fields: I) -> Result<String>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.sign(&canonicalize(fields))
    }

    /// Check a provider-supplied signature against a field set.
    ///
    /// Signature fields inside the set are excluded from the signed data, so
    /// a notification can be passed exactly as received.
    pub fn verify_fields<I, K, V>(&self, fields: I, provided: &str) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let expected = self.sign_fields(fields)?;
        if constant_time_compare(expected.as_bytes(), provided.as_bytes()) {
            Ok(())
        } else {
            Err(CryptoError::SignatureMismatch)
        }
    }
}
