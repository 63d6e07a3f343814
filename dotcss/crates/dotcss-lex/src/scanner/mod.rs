//! Scanner module.
//!
//! This module organizes the scanner implementation into smaller, focused components:
//! - `core` - Main Scanner struct, options and token dispatch
//! - `identifier` - Identifiers, names, escapes, at-keywords and hashes
//! - `number` - Numbers, dimensions and unicode ranges
//! - `string` - Quoted and unquoted strings
//! - `operator` - Punctuation and attribute-selector operators
//! - `trivia` - Whitespace, newlines and comments

mod core;
mod identifier;
mod number;
mod operator;
mod string;
mod trivia;

pub use self::core::{Scanner, ScannerOptions};
