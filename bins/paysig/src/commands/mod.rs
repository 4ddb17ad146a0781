//! Subcommand implementations

pub mod canonical;
pub mod sign;
pub mod verify;
