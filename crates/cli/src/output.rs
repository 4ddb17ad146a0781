//! Terminal output utilities
//!
//! Results go to stdout, diagnostics to stderr.

use owo_colors::OwoColorize;
use paysig_core::config::OutputFormat;
use paysig_core::Error;
use serde::Serialize;

/// Status message helpers
pub struct Status;

impl Status {
    /// Print a success message
    pub fn success(message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print an error message
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }
}

/// Print a serializable value as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Render an error for the requested output format
pub fn format_error(err: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(&err.to_report())
            .unwrap_or_else(|_| format!("{{\"message\": {:?}}}", err.message)),
        OutputFormat::Text => err.to_string(),
    }
}

/// Report an error on stderr
pub fn report_error(err: &Error, format: OutputFormat) {
    match format {
        OutputFormat::Json => eprintln!("{}", format_error(err, format)),
        OutputFormat::Text => Status::error(&format_error(err, format)),
    }
}
