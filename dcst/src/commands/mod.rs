//! Command modules for the dcst CLI.
//!
//! Each subcommand is implemented in its own file.

pub mod tokens;

// Re-export command types and functions
pub use tokens::{run_tokens, TokensArgs};
