//! Payment result notification fields.

use serde::{Deserialize, Serialize};

use crate::{canonicalize, FieldSet};

/// The six fields a payment result notification is signed over.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentNotification {
    /// Authorisation result, e.g. `AUTHORISED`
    pub auth_result: String,
    /// Provider reference, e.g. `1234567890`
    pub psp_reference: String,
    /// Merchant's own order reference, e.g. `ABC123FED098`
    pub merchant_reference: String,
    /// Hosted payment page configuration code
    pub skin_code: String,
    /// Shopper locale, e.g. `en_GB`
    pub shopper_locale: String,
    /// Payment method code, e.g. `mc`
    pub payment_method: String,
}

impl PaymentNotification {
    /// Field names as the provider spells them, paired with their values.
    pub fn pairs(&self) -> [(&'static str, &str); 6] {
        [
            ("authResult", self.auth_result.as_str()),
            ("pspReference", self.psp_reference.as_str()),
            ("merchantReference", self.merchant_reference.as_str()),
            ("skinCode", self.skin_code.as_str()),
            ("shopperLocale", self.shopper_locale.as_str()),
            ("paymentMethod", self.payment_method.as_str()),
        ]
    }

    /// Owned field set, ready to be extended with extra fields.
    pub fn to_fields(&self) -> FieldSet {
        self.pairs()
            .into_iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect()
    }

    /// Canonical data string over the six fields.
    pub fn data_string(&self) -> String {
        canonicalize(self.pairs())
    }
}
