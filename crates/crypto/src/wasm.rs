//! WASM bindings for notification signing.

use wasm_bindgen::prelude::*;

use crate::{PaymentNotification, Signer};

fn to_js(err: crate::CryptoError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Sign a canonical data string and return the base64 signature.
#[wasm_bindgen]
pub fn sign_message(secret_hex: &str, message: &str) -> Result<String, JsValue> {
    crate::sign(secret_hex, message).map_err(to_js)
}

/// Sign the six payment notification fields.
#[wasm_bindgen]
pub fn sign_notification(
    secret_hex: &str,
    auth_result: &str,
    psp_reference: &str,
    merchant_reference: &str,
    skin_code: &str,
    shopper_locale: &str,
    payment_method: &str,
) -> Result<String, JsValue> {
    let notification = PaymentNotification {
        auth_result: auth_result.to_string(),
        psp_reference: psp_reference.to_string(),
        merchant_reference: merchant_reference.to_string(),
        skin_code: skin_code.to_string(),
        shopper_locale: shopper_locale.to_string(),
        payment_method: payment_method.to_string(),
    };
    crate::sign(secret_hex, &notification.data_string()).map_err(to_js)
}

/// Verify a base64 signature over a canonical data string (constant-time).
///
/// # Returns
/// true if the signature matches, false on mismatch
#[wasm_bindgen]
pub fn verify_message(secret_hex: &str, message: &str, signature: &str) -> Result<bool, JsValue> {
    let expected = Signer::new(secret_hex)
        .and_then(|signer| signer.sign(message))
        .map_err(to_js)?;
    Ok(crate::constant_time_compare(
        expected.as_bytes(),
        signature.as_bytes(),
    ))
}
