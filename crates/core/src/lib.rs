//! Core utilities for paysig tools
//!
//! This crate provides shared functionality used by the command-line front end:
//!
//! - **Error handling**: Coded errors with context and recovery suggestions
//! - **Configuration**: TOML-based configuration with environment overrides
//! - **Secret resolution**: Locate the signing secret without logging it
//!
//! # Example
//!
//! ```rust,no_run
//! use paysig_core::config::Config;
//!
//! let config = Config::load(None).expect("Invalid configuration");
//! let signer = config.schema.signing.signer(None).expect("Invalid secret");
//! let signature = signer.sign("a:b:1:2");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;

pub use error::{Error, ErrorCategory, ErrorCode, Result, ResultExt};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{Config, ConfigSchema, SecretSource};
    pub use crate::error::{exit_codes, Error, ErrorCode, Result, ResultExt};
}
