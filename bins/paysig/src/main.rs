//! paysig - payment notification signing CLI
//!
//! Builds the canonical data string for a set of notification fields and
//! signs or verifies it with an HMAC-SHA256 key given as hex.

use clap::{Parser, Subcommand, ValueEnum};
use paysig_cli::output::report_error;
use paysig_core::config::{Config, OutputFormat};
use paysig_core::error::exit_codes;
use paysig_telemetry::TelemetryConfig;
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod fields;

use fields::FieldArgs;

/// Sign and verify payment result notifications
#[derive(Parser)]
#[command(name = "paysig")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Configuration file (defaults to .paysig.toml, then the user config dir)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format; overrides [output] format
    #[arg(short, long, global = true, value_enum)]
    format: Option<FormatArg>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the signature for a set of fields
    Sign {
        #[command(flatten)]
        fields: FieldArgs,

        /// Hex-encoded HMAC key; overrides environment and config
        #[arg(long)]
        secret: Option<String>,

        /// URL-encode the signature
        #[arg(short, long)]
        url_encode: bool,

        /// Also print the canonical data string
        #[arg(long)]
        show_data: bool,
    },

    /// Print the canonical data string without signing
    Canonical {
        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Check a provider-supplied signature
    Verify {
        #[command(flatten)]
        fields: FieldArgs,

        /// Signature to check (base64)
        #[arg(short, long)]
        signature: String,

        /// Hex-encoded HMAC key; overrides environment and config
        #[arg(long)]
        secret: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let cli_format = cli.format.map(OutputFormat::from);

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            report_error(&e, cli_format.unwrap_or_default());
            return exit_code(e.exit_code());
        }
    };
    let format = cli_format.unwrap_or(config.schema.output.format);

    let telemetry = if cli.verbose {
        TelemetryConfig::verbose()
    } else {
        TelemetryConfig::default().with_level(config.schema.logging.level.clone())
    };
    if let Err(e) = paysig_telemetry::init_with_config(telemetry) {
        eprintln!("warning: {e}");
    }

    let result = match cli.command {
        Commands::Sign {
            fields,
            secret,
            url_encode,
            show_data,
        } => commands::sign::run(
            &config,
            &fields,
            secret.as_deref(),
            url_encode || config.schema.output.url_encode,
            show_data,
            format,
        ),

        Commands::Canonical { fields } => commands::canonical::run(&fields, format),

        Commands::Verify {
            fields,
            signature,
            secret,
        } => commands::verify::run(&config, &fields, &signature, secret.as_deref(), format),
    };

    match result {
        Ok(()) => exit_code(exit_codes::SUCCESS),
        Err(e) => {
            tracing::debug!(code = %e.code, "Command failed");
            report_error(&e, format);
            exit_code(e.exit_code())
        }
    }
}

fn exit_code(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
