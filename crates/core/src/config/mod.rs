//! Configuration loading and schema definitions
//!
//! Settings come from a TOML file; the signing secret may also come from
//! the environment or a separate file.

mod loader;
mod schema;
mod secret;

pub use loader::Config;
pub use schema::*;
pub use secret::{signer_from, ResolvedSecret, SecretSource};
