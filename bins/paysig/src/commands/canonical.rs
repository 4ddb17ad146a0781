//! `paysig canonical`

use crate::fields::FieldArgs;
use paysig_cli::output::print_json;
use paysig_core::config::OutputFormat;
use paysig_core::Result;
use paysig_crypto::canonicalize;

/// Print the canonical data string
pub fn run(args: &FieldArgs, format: OutputFormat) -> Result<()> {
    let fields = args.collect()?;
    let data = canonicalize(&fields);

    match format {
        OutputFormat::Text => println!("{data}"),
        OutputFormat::Json => print_json(&serde_json::json!({ "data": data }))?,
    }
    Ok(())
}
