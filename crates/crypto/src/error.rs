//! Error types for the crypto crate.

use thiserror::Error;

/// Result type alias for crypto operations.
pub type Result<T> = std::result::Result<T, CryptoError>;

/// Errors that can occur while signing or verifying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoError {
    /// The hex secret is empty, has odd length, or contains a non-hex digit
    #[error("Invalid secret format: {0}")]
    InvalidSecretFormat(String),

    /// Signing was attempted without a secret
    #[error("The secret must be configured before a signature can be computed")]
    SecretNotConfigured,

    /// Signature verification failed
    #[error("Signature mismatch")]
    SignatureMismatch,
}
