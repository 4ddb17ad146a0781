//! `paysig verify`

use crate::fields::FieldArgs;
use paysig_cli::output::{print_json, Status};
use paysig_core::config::{signer_from, Config, OutputFormat};
use paysig_core::Result;
use paysig_crypto::CryptoError;

/// Verify a provider-supplied signature against the collected fields
///
/// A mismatch is returned as an error so the process exits non-zero.
pub fn run(
    config: &Config,
    args: &FieldArgs,
    signature: &str,
    secret: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let resolved = config.schema.signing.resolve_secret(secret)?;
    let signer = signer_from(&resolved)?;
    let fields = args.collect()?;

    if let Err(e) = signer.verify_fields(&fields, signature) {
        if e == CryptoError::SignatureMismatch {
            tracing::warn!(fields = fields.len(), "Signature verification failed");
        }
        return Err(e.into());
    }

    match format {
        OutputFormat::Text => Status::success("Signature valid"),
        OutputFormat::Json => print_json(&serde_json::json!({ "valid": true }))?,
    }
    Ok(())
}
