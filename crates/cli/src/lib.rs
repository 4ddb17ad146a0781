//! CLI utilities for paysig tools
//!
//! Provides shared CLI functionality:
//! - Terminal status messages and error reports
//! - Form URL encoding of signatures for query strings and POST bodies

#![warn(missing_docs)]

pub mod output;
pub mod urlencode;
