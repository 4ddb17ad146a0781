//! Payment notification signing.
//!
//! This crate provides:
//! - Canonical data strings for a set of notification fields
//! - HMAC-SHA256 signatures keyed by a hex-encoded secret, encoded as base64
//! - Constant-time verification of provider-supplied signatures
//!
//! # Example
//!
//! ```rust
//! use paysig_crypto::{PaymentNotification, Signer};
//!
//! let notification = PaymentNotification {
//!     auth_result: "AUTHORISED".into(),
//!     psp_reference: "1234567890".into(),
//!     merchant_reference: "ABC123FED098".into(),
//!     skin_code: "asdfghj".into(),
//!     shopper_locale: "en_GB".into(),
//!     payment_method: "mc".into(),
//! };
//!
//! let signer = Signer::new("44782DEF547AAA06C910C43932B1EB0C71FC68D9D0C057550C48EC2ACF6BA056")?;
//! let signature = signer.sign(&notification.data_string())?;
//! assert_eq!(signature, "XBZHqzdkxVLOTbbI7KBI8lrp9rJJ90NCiNk+TiFtALA=");
//! # Ok::<(), paysig_crypto::CryptoError>(())
//! ```

#![warn(missing_docs)]

mod canonical;
mod error;
mod notification;
mod secret;
mod signer;
mod timing;

#[cfg(feature = "wasm")]
mod wasm;

pub use canonical::{canonicalize, escape, is_excluded, FieldSet, DELIMITER};
pub use error::{CryptoError, Result};
pub use notification::PaymentNotification;
pub use secret::Secret;
pub use signer::{compute_hmac_base64, sign, Signer};
pub use timing::constant_time_compare;
