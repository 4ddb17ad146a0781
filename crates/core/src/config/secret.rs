//! Signing secret resolution
//!
//! Lookup order: command line, environment variable, secret file, inline
//! config value. The secret itself is never logged.

use super::schema::SigningConfig;
use crate::error::{Error, Result, ResultExt};
use paysig_crypto::Signer;
use std::fmt;
use std::path::PathBuf;

/// Where a secret was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretSource {
    /// Passed as a command-line argument
    CommandLine,
    /// Read from the named environment variable
    Environment(String),
    /// Read from a file
    File(PathBuf),
    /// Inline `secret_hex` in the configuration file
    ConfigFile,
    /// No secret anywhere
    Unset,
}

impl fmt::Display for SecretSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CommandLine => write!(f, "command line"),
            Self::Environment(var) => write!(f, "environment variable {var}"),
            Self::File(path) => write!(f, "file {}", path.display()),
            Self::ConfigFile => write!(f, "configuration file"),
            Self::Unset => write!(f, "unset"),
        }
    }
}

/// A hex secret paired with where it came from
#[derive(Clone)]
pub struct ResolvedSecret {
    hex: String,
    source: SecretSource,
}

impl ResolvedSecret {
    /// Hex text, empty when unset
    #[must_use]
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// Origin of the secret
    #[must_use]
    pub fn source(&self) -> &SecretSource {
        &self.source
    }
}

impl fmt::Debug for ResolvedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedSecret")
            .field("source", &self.source)
            .field("hex_len", &self.hex.len())
            .finish()
    }
}

impl SigningConfig {
    /// Resolve the secret using the process environment
    pub fn resolve_secret(&self, cli_secret: Option<&str>) -> Result<ResolvedSecret> {
        self.resolve_secret_with(cli_secret, |name| std::env::var(name).ok())
    }

    /// Resolve the secret with a custom environment lookup
    ///
    /// Empty values from the command line or environment are skipped.
    pub fn resolve_secret_with<F>(&self, cli_secret: Option<&str>, env: F) -> Result<ResolvedSecret>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(hex) = cli_secret.filter(|s| !s.is_empty()) {
            return Ok(ResolvedSecret {
                hex: hex.to_string(),
                source: SecretSource::CommandLine,
            });
        }

        if let Some(hex) = env(self.secret_env.as_str()).filter(|s| !s.trim().is_empty()) {
            return Ok(ResolvedSecret {
                hex: hex.trim().to_string(),
                source: SecretSource::Environment(self.secret_env.clone()),
            });
        }

        if let Some(ref file) = self.secret_file {
            let expanded = shellexpand::full(file)
                .map_err(|e| Error::config(format!("Cannot expand secret_file {file}: {e}")))?;
            let path = PathBuf::from(expanded.into_owned());
            let content = std::fs::read_to_string(&path)
                .map_err(Error::from)
                .context(format!("While reading secret file {}", path.display()))?;
            return Ok(ResolvedSecret {
                hex: content.trim().to_string(),
                source: SecretSource::File(path),
            });
        }

        if let Some(ref hex) = self.secret_hex {
            return Ok(ResolvedSecret {
                hex: hex.trim().to_string(),
                source: SecretSource::ConfigFile,
            });
        }

        Ok(ResolvedSecret {
            hex: String::new(),
            source: SecretSource::Unset,
        })
    }

    /// Build a signer from the resolved secret
    ///
    /// An unset secret yields an unconfigured signer; signing with it fails.
    pub fn signer(&self, cli_secret: Option<&str>) -> Result<Signer> {
        let resolved = self.resolve_secret(cli_secret)?;
        signer_from(&resolved)
    }
}

/// Build a signer from an already resolved secret
pub fn signer_from(resolved: &ResolvedSecret) -> Result<Signer> {
    tracing::debug!(source = %resolved.source(), "Using signing secret");
    Signer::new(resolved.hex())
        .map_err(Error::from)
        .context(format!("Secret from {}", resolved.source()))
}
