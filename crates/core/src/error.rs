//! Coded errors for the paysig front end
//!
//! Every failure carries an [`ErrorCode`] whose [`ErrorCategory`] decides the
//! process exit status. Context and a suggestion can be attached on the way
//! up, and [`Error::to_report`] gives the JSON shape used by `--format json`.

use paysig_crypto::CryptoError;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Numeric error codes, grouped by thousands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum ErrorCode {
    IoError = 2000,
    FileNotFound = 2001,
    PermissionDenied = 2002,

    ConfigError = 3000,
    ConfigNotFound = 3001,
    ConfigParseError = 3002,

    InvalidSecretFormat = 4001,
    SecretNotConfigured = 4002,
    SignatureMismatch = 4003,

    InvalidInput = 6001,
    InvalidFormat = 6002,
}

/// Coarse grouping of error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Signing,
    Validation,
}

impl ErrorCategory {
    /// Name shown in reports
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Io => "IO",
            Self::Configuration => "Configuration",
            Self::Signing => "Signing",
            Self::Validation => "Validation",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorCode {
    /// Numeric value, as printed after the `E`
    #[must_use]
    pub fn code(self) -> u32 {
        self as u32
    }

    /// Category this code belongs to
    #[must_use]
    pub fn category(self) -> ErrorCategory {
        match self {
            Self::IoError | Self::FileNotFound | Self::PermissionDenied => ErrorCategory::Io,
            Self::ConfigError | Self::ConfigNotFound | Self::ConfigParseError => {
                ErrorCategory::Configuration
            }
            Self::InvalidSecretFormat | Self::SecretNotConfigured | Self::SignatureMismatch => {
                ErrorCategory::Signing
            }
            Self::InvalidInput | Self::InvalidFormat => ErrorCategory::Validation,
        }
    }

    /// Process exit status for a failure with this code
    #[must_use]
    pub fn exit_code(self) -> i32 {
        match (self.category(), self) {
            (_, Self::SignatureMismatch) => exit_codes::SIGNATURE_MISMATCH,
            (ErrorCategory::Configuration | ErrorCategory::Signing, _) => exit_codes::CONFIG_ERROR,
            (ErrorCategory::Validation, _) => exit_codes::VALIDATION_ERROR,
            (ErrorCategory::Io, _) => exit_codes::FAILURE,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

/// A coded failure with optional context, suggestion and cause
#[derive(Error, Debug)]
pub struct Error {
    /// What went wrong, as a code
    pub code: ErrorCode,
    /// One-line description
    pub message: String,
    /// Where it happened, e.g. which file was being read
    pub context: Option<String>,
    /// What the user can do about it
    pub suggestion: Option<String>,
    /// Underlying cause
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        for (label, line) in [("Context", &self.context), ("Suggestion", &self.suggestion)] {
            if let Some(line) = line {
                write!(f, "\n  {label}: {line}")?;
            }
        }
        Ok(())
    }
}

impl Error {
    /// Error with just a code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: None,
            suggestion: None,
            source: None,
        }
    }

    /// Set the context line
    #[must_use]
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self {
            context: Some(context.into()),
            ..self
        }
    }

    /// Set the suggestion line
    #[must_use]
    pub fn with_suggestion(self, suggestion: impl Into<String>) -> Self {
        Self {
            suggestion: Some(suggestion.into()),
            ..self
        }
    }

    fn caused_by(self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self {
            source: Some(Box::new(source)),
            ..self
        }
    }

    /// Snapshot for JSON output
    #[must_use]
    pub fn to_report(&self) -> ErrorReport {
        ErrorReport {
            code: self.code,
            code_str: self.code.to_string(),
            category: self.code.category().to_string(),
            message: self.message.clone(),
            context: self.context.clone(),
            suggestion: self.suggestion.clone(),
            source: self.source.as_ref().map(ToString::to_string),
        }
    }

    /// Process exit status
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        self.code.exit_code()
    }

    /// Missing file
    pub fn file_not_found(path: impl AsRef<std::path::Path>) -> Self {
        Self::new(
            ErrorCode::FileNotFound,
            format!("File not found: {}", path.as_ref().display()),
        )
        .with_suggestion("Check the path and that it is readable")
    }

    /// Configuration failure
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// `--config` points at a file that does not exist
    pub fn config_not_found(path: impl AsRef<std::path::Path>) -> Self {
        Self::new(
            ErrorCode::ConfigNotFound,
            format!("Configuration file not found: {}", path.as_ref().display()),
        )
        .with_suggestion("Create .paysig.toml or pass an existing file to --config")
    }

    /// Malformed field argument or fields file
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }
}

/// JSON form of an [`Error`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct ErrorReport {
    pub code: ErrorCode,
    pub code_str: String,
    pub category: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Result alias used across paysig crates
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit statuses
#[allow(missing_docs)]
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
    pub const VALIDATION_ERROR: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const SIGNATURE_MISMATCH: i32 = 4;
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        let code = match err.kind() {
            std::io::ErrorKind::NotFound => ErrorCode::FileNotFound,
            std::io::ErrorKind::PermissionDenied => ErrorCode::PermissionDenied,
            _ => ErrorCode::IoError,
        };
        Self::new(code, err.to_string()).caused_by(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::new(ErrorCode::InvalidFormat, format!("Invalid JSON: {err}")).caused_by(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::new(ErrorCode::ConfigParseError, format!("Invalid TOML: {err}")).caused_by(err)
    }
}

impl From<CryptoError> for Error {
    fn from(err: CryptoError) -> Self {
        let (code, suggestion) = match err {
            CryptoError::InvalidSecretFormat(_) => (
                ErrorCode::InvalidSecretFormat,
                Some("The secret must be an even-length string of hex digits"),
            ),
            CryptoError::SecretNotConfigured => (
                ErrorCode::SecretNotConfigured,
                Some("Pass --secret, set PAYSIG_HMAC_KEY, or configure [signing] in .paysig.toml"),
            ),
            CryptoError::SignatureMismatch => (ErrorCode::SignatureMismatch, None),
        };
        let error = Self::new(code, err.to_string());
        let error = match suggestion {
            Some(suggestion) => error.with_suggestion(suggestion),
            None => error,
        };
        error.caused_by(err)
    }
}

/// Attach context to a failed [`Result`]
pub trait ResultExt<T> {
    /// Set the context line of the error, if any
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_display() {
        assert_eq!(ErrorCode::FileNotFound.to_string(), "E2001");
        assert_eq!(ErrorCode::InvalidSecretFormat.to_string(), "E4001");
    }

    #[test]
    fn test_categories() {
        assert_eq!(ErrorCode::PermissionDenied.category(), ErrorCategory::Io);
        assert_eq!(ErrorCode::ConfigParseError.category(), ErrorCategory::Configuration);
        assert_eq!(ErrorCode::SignatureMismatch.category(), ErrorCategory::Signing);
        assert_eq!(ErrorCode::InvalidFormat.category().as_str(), "Validation");
        assert_eq!(ErrorCategory::Io.to_string(), "IO");
    }

    #[test]
    fn test_display_lines() {
        let err = Error::file_not_found("/path/to/fields.json")
            .with_context("While reading notification fields");

        assert_eq!(err.code, ErrorCode::FileNotFound);
        assert_eq!(
            err.to_string(),
            "[E2001] File not found: /path/to/fields.json\n  \
             Context: While reading notification fields\n  \
             Suggestion: Check the path and that it is readable"
        );
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::invalid_input("bad"));
        let err = result.context("While parsing --field").unwrap_err();
        assert_eq!(err.context.as_deref(), Some("While parsing --field"));
        assert!(err.suggestion.is_none());
    }

    #[test]
    fn test_from_crypto_error() {
        let err = Error::from(CryptoError::InvalidSecretFormat("odd length".into()));
        assert_eq!(err.code, ErrorCode::InvalidSecretFormat);
        assert!(err.source.is_some());
        assert_eq!(err.exit_code(), exit_codes::CONFIG_ERROR);

        let err = Error::from(CryptoError::SecretNotConfigured);
        assert_eq!(err.code, ErrorCode::SecretNotConfigured);
        assert!(err.suggestion.unwrap().contains("PAYSIG_HMAC_KEY"));

        let err = Error::from(CryptoError::SignatureMismatch);
        assert!(err.suggestion.is_none());
    }

    #[test]
    fn test_from_io_error() {
        let err = Error::from(std::io::Error::from(std::io::ErrorKind::PermissionDenied));
        assert_eq!(err.code, ErrorCode::PermissionDenied);
        assert_eq!(err.exit_code(), exit_codes::FAILURE);
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            Error::from(CryptoError::SignatureMismatch).exit_code(),
            exit_codes::SIGNATURE_MISMATCH
        );
        assert_eq!(
            Error::invalid_input("bad field").exit_code(),
            exit_codes::VALIDATION_ERROR
        );
        assert_eq!(
            Error::config("unreadable").exit_code(),
            exit_codes::CONFIG_ERROR
        );
        assert_eq!(ErrorCode::IoError.exit_code(), exit_codes::FAILURE);
    }

    #[test]
    fn test_error_report_serialization() {
        let err = Error::from(CryptoError::SecretNotConfigured)
            .with_context("While signing notification");

        let report = err.to_report();
        let json = serde_json::to_string(&report).unwrap();

        assert!(json.contains("E4002"));
        assert!(json.contains("SECRET_NOT_CONFIGURED"));
        assert!(json.contains("\"category\":\"Signing\""));
    }
}
