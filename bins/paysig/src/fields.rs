//! Notification field arguments

use clap::Args;
use paysig_core::{Error, Result, ResultExt};
use paysig_crypto::FieldSet;
use std::path::{Path, PathBuf};

/// Fields to canonicalize
///
/// Later sources override earlier ones: fields file, the named flags, then
/// `--field` pairs.
#[derive(Args, Debug, Default)]
pub struct FieldArgs {
    /// Authorisation result, e.g. AUTHORISED
    #[arg(long)]
    pub auth_result: Option<String>,

    /// Provider reference
    #[arg(long)]
    pub psp_reference: Option<String>,

    /// Merchant reference
    #[arg(long)]
    pub merchant_reference: Option<String>,

    /// Skin code
    #[arg(long)]
    pub skin_code: Option<String>,

    /// Shopper locale, e.g. en_GB
    #[arg(long)]
    pub shopper_locale: Option<String>,

    /// Payment method, e.g. mc
    #[arg(long)]
    pub payment_method: Option<String>,

    /// Additional field as NAME=VALUE (repeatable)
    #[arg(long = "field", value_name = "NAME=VALUE")]
    pub extra: Vec<String>,

    /// JSON object of string fields, e.g. a received notification
    #[arg(long, value_name = "PATH")]
    pub fields_file: Option<PathBuf>,
}

impl FieldArgs {
    /// Collect all sources into one field set
    pub fn collect(&self) -> Result<FieldSet> {
        let mut fields = match self.fields_file {
            Some(ref path) => read_fields_file(path)?,
            None => FieldSet::new(),
        };

        let named = [
            ("authResult", &self.auth_result),
            ("pspReference", &self.psp_reference),
            ("merchantReference", &self.merchant_reference),
            ("skinCode", &self.skin_code),
            ("shopperLocale", &self.shopper_locale),
            ("paymentMethod", &self.payment_method),
        ];
        for (name, value) in named {
            if let Some(value) = value {
                fields.insert(name.to_string(), value.clone());
            }
        }

        for pair in &self.extra {
            let (name, value) = parse_pair(pair)?;
            fields.insert(name.to_string(), value.to_string());
        }

        tracing::debug!(count = fields.len(), "Collected fields");
        Ok(fields)
    }
}

/// Split `NAME=VALUE` at the first `=`; the value may contain `=` and be empty
fn parse_pair(pair: &str) -> Result<(&str, &str)> {
    pair.split_once('=').ok_or_else(|| {
        Error::invalid_input(format!("Invalid field {pair:?}"))
            .with_suggestion("Use --field NAME=VALUE")
    })
}

fn read_fields_file(path: &Path) -> Result<FieldSet> {
    let content = std::fs::read_to_string(path)
        .map_err(Error::from)
        .context(format!("While reading fields file {}", path.display()))?;

    let value: serde_json::Value = serde_json::from_str(&content)
        .map_err(Error::from)
        .context(format!("While parsing fields file {}", path.display()))?;

    let serde_json::Value::Object(map) = value else {
        return Err(Error::invalid_input("Fields file must contain a JSON object"));
    };

    map.into_iter()
        .map(|(name, value)| match value {
            serde_json::Value::String(s) => Ok((name, s)),
            other => Err(Error::invalid_input(format!(
                "Field {name:?} must be a string, got {other}"
            ))),
        })
        .collect()
}
