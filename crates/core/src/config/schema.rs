//! Configuration schema definitions

use serde::{Deserialize, Serialize};

/// Environment variable consulted for the secret unless configured otherwise
pub const DEFAULT_SECRET_ENV: &str = "PAYSIG_HMAC_KEY";

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigSchema {
    /// Secret lookup
    #[serde(default)]
    pub signing: SigningConfig,

    /// Result presentation
    #[serde(default)]
    pub output: OutputConfig,

    /// Log filtering
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the hex-encoded signing secret is looked up
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SigningConfig {
    /// Environment variable holding the secret
    #[serde(default = "default_secret_env")]
    pub secret_env: String,

    /// File holding the secret; `~` and `$VAR` are expanded
    #[serde(default)]
    pub secret_file: Option<String>,

    /// Inline secret. Prefer `secret_env` or `secret_file`.
    #[serde(default)]
    pub secret_hex: Option<String>,
}

impl Default for SigningConfig {
    fn default() -> Self {
        Self {
            secret_env: default_secret_env(),
            secret_file: None,
            secret_hex: None,
        }
    }
}

fn default_secret_env() -> String {
    DEFAULT_SECRET_ENV.to_string()
}

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// A single JSON object
    Json,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    /// URL-encode signatures before printing
    #[serde(default)]
    pub url_encode: bool,

    /// Text or JSON
    #[serde(default)]
    pub format: OutputFormat,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}
