//! dotcss-lex - Scanner for CSS-family stylesheets
//!
//! This crate turns stylesheet source into a stream of classified, positioned
//! tokens. It is the first stage of a stylesheet pipeline: a parser consumes
//! the tokens, and tools such as formatters and highlighters can use the
//! lossless token stream directly.
//!
//! # Example Usage
//!
//! ```
//! use dotcss_lex::{Scanner, TokenKind};
//!
//! let source = "@charset 'utf-8'; a { margin: 0 4px }";
//! let mut scanner = Scanner::new(source);
//!
//! let first = scanner.next_token();
//! assert_eq!(first.kind, TokenKind::Charset);
//! assert_eq!(first.lexeme(source), "@charset");
//!
//! // The scanner is also an iterator that stops before `Eof`.
//! let rest: Vec<_> = scanner.map(|t| t.kind).collect();
//! assert_eq!(rest[0], TokenKind::String);
//! assert_eq!(rest.last(), Some(&TokenKind::CurlyR));
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds, tokens and the unit table
//! - [`scanner`] - The scanner and its options
//! - [`cursor`] - Backtrackable character cursor over the source
//! - [`chars`] - Character classes of the grammar
//! - [`error`] - Errors from the helper entry points
//!
//! # Error Recovery
//!
//! [`Scanner::next_token`] never fails. Text that matches no token grammar becomes
//! a one-character [`TokenKind::Delim`], so every call either consumes input
//! or returns `Eof`.
//!
//! # Offsets
//!
//! Token spans are byte offsets into the source `&str`, so
//! `&source[span.start..span.end]` is always the lexeme. Use
//! [`dotcss_util::SourceFile`] to turn offsets into lines and columns.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod cursor;
pub mod error;
pub mod scanner;
pub mod token;

mod edge_cases;

use tracing::debug;

// Re-export main types for convenience
pub use cursor::{Cursor, EOF_CHAR};
pub use dotcss_util::Span;
pub use error::{ScanError, ScanResult};
pub use scanner::{Scanner, ScannerOptions};
pub use token::{unit_kind, Token, TokenKind};

/// Scans the whole source and returns every token, with `Eof` last.
///
/// ```
/// use dotcss_lex::{tokenize, ScannerOptions, TokenKind};
///
/// let tokens = tokenize("a:b", ScannerOptions::default());
/// assert_eq!(tokens.len(), 4);
/// assert_eq!(tokens[3].kind, TokenKind::Eof);
/// ```
pub fn tokenize(source: &str, options: ScannerOptions) -> Vec<Token<'_>> {
    let mut scanner = Scanner::with_options(source, options);
    let mut tokens = Vec::new();
    loop {
        let token = scanner.next_token();
        tokens.push(token);
        if token.is_eof() {
            break;
        }
    }

    debug!(
        tokens = tokens.len(),
        bytes = source.len(),
        "finished scanning"
    );
    tokens
}
