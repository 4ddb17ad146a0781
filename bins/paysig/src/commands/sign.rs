//! `paysig sign`

use crate::fields::FieldArgs;
use paysig_cli::output::print_json;
use paysig_cli::urlencode::form_urlencode;
use paysig_core::config::{signer_from, Config, OutputFormat};
use paysig_core::{Error, Result, ResultExt};
use paysig_crypto::canonicalize;
use serde::Serialize;

#[derive(Serialize)]
struct SignOutput<'a> {
    signature: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    url_encoded: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a str>,
}

/// Sign the collected fields and print the signature
pub fn run(
    config: &Config,
    args: &FieldArgs,
    secret: Option<&str>,
    url_encode: bool,
    show_data: bool,
    format: OutputFormat,
) -> Result<()> {
    let resolved = config.schema.signing.resolve_secret(secret)?;
    let signer = signer_from(&resolved)?;

    let fields = args.collect()?;
    let data = canonicalize(&fields);
    let signature = signer
        .sign(&data)
        .map_err(Error::from)
        .context(format!("Secret source: {}", resolved.source()))?;
    tracing::info!(fields = fields.len(), "Signed notification");

    match format {
        OutputFormat::Text => {
            if show_data {
                println!("{data}");
            }
            if url_encode {
                println!("{}", form_urlencode(&signature));
            } else {
                println!("{signature}");
            }
        }
        OutputFormat::Json => print_json(&SignOutput {
            signature: &signature,
            url_encoded: url_encode.then(|| form_urlencode(&signature)),
            data: show_data.then_some(data.as_str()),
        })?,
    }
    Ok(())
}
