//! Core scanner implementation.
//!
//! This module contains the main Scanner struct, its configuration and the
//! priority-ordered token dispatch.

use tracing::trace;

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

/// Scanner configuration.
///
/// Both flags only affect which trivia tokens reach the caller; the scanned
/// text and the spans of all other tokens are the same either way.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScannerOptions {
    /// Drop `Whitespace` tokens from the stream. Defaults to `true`.
    pub ignore_whitespace: bool,
    /// Drop `Comment` tokens from the stream. Defaults to `false`.
    pub ignore_comment: bool,
}

impl Default for ScannerOptions {
    fn default() -> Self {
        Self {
            ignore_whitespace: true,
            ignore_comment: false,
        }
    }
}

impl ScannerOptions {
    /// Options that keep every token, so spans tile the whole source.
    pub const LOSSLESS: ScannerOptions = ScannerOptions {
        ignore_whitespace: false,
        ignore_comment: false,
    };

    /// Sets whether `Whitespace` tokens are dropped.
    pub fn with_ignore_whitespace(mut self, ignore: bool) -> Self {
        self.ignore_whitespace = ignore;
        self
    }

    /// Sets whether `Comment` tokens are dropped.
    pub fn with_ignore_comment(mut self, ignore: bool) -> Self {
        self.ignore_comment = ignore;
        self
    }
}

/// Scanner for CSS-family stylesheets.
///
/// The scanner turns source text into a stream of [`Token`]s, one per call to
/// [`Scanner::next_token`]. It holds no state between tokens other than its cursor
/// position and its [`ScannerOptions`].
///
/// # Example
///
/// ```
/// use dotcss_lex::{Scanner, TokenKind};
///
/// let mut scanner = Scanner::new("a { width: 4em }");
/// let kinds: Vec<_> = std::iter::from_fn(|| Some(scanner.next_token()))
///     .map(|t| t.kind)
///     .take_while(|&k| k != TokenKind::Eof)
///     .collect();
///
/// assert_eq!(
///     kinds,
///     [
///         TokenKind::Ident,
///         TokenKind::CurlyL,
///         TokenKind::Ident,
///         TokenKind::Colon,
///         TokenKind::Ems,
///         TokenKind::CurlyR,
///     ]
/// );
/// ```
#[derive(Debug)]
pub struct Scanner<'a> {
    /// Character cursor for source traversal.
    pub(super) cursor: Cursor<'a>,

    /// Trivia filtering options.
    options: ScannerOptions,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner with the default options.
    pub fn new(source: &'a str) -> Self {
        Self::with_options(source, ScannerOptions::default())
    }

    /// Creates a scanner with explicit options.
    pub fn with_options(source: &'a str, options: ScannerOptions) -> Self {
        Self {
            cursor: Cursor::new(source),
            options,
        }
    }

    /// Returns the current options.
    pub fn options(&self) -> ScannerOptions {
        self.options
    }

    /// Sets whether `Whitespace` tokens are dropped.
    pub fn set_ignore_whitespace(&mut self, ignore: bool) {
        self.options.ignore_whitespace = ignore;
    }

    /// Sets whether `Comment` tokens are dropped.
    pub fn set_ignore_comment(&mut self, ignore: bool) {
        self.options.ignore_comment = ignore;
    }

    /// Returns the source being scanned.
    pub fn source(&self) -> &'a str {
        self.cursor.source()
    }

    /// Returns the byte offset of the next character to be scanned.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns the next token.
    ///
    /// Trivia is handled first: whitespace and comments are either returned
    /// as tokens or skipped, depending on the options. At the end of input a
    /// zero-width `Eof` token is returned, and keeps being returned on every
    /// further call.
    pub fn next_token(&mut self) -> Token<'a> {
        let token = match self.trivia() {
            Some(token) => token,
            None => {
                let offset = self.cursor.position();
                if self.cursor.is_at_end() {
                    Token::new(TokenKind::Eof, offset, offset)
                } else {
                    self.scan_next(offset)
                }
            },
        };

        trace!(
            kind = %token.kind,
            start = token.span.start,
            end = token.span.end,
            "scanned token"
        );
        token
    }

    /// Dispatches on the upcoming text. The first rule that matches wins;
    /// every rule either commits a token or leaves the cursor untouched.
    fn scan_next(&mut self, offset: usize) -> Token<'a> {
        if self.cursor.advance_if_chars("<!--") {
            return Token::new(TokenKind::Cdo, offset, offset + 4);
        }

        if self.cursor.advance_if_chars("-->") {
            return Token::new(TokenKind::Cdc, offset, offset + 3);
        }

        if let Some(ident) = self.scan_identifier() {
            return Token::with_value(TokenKind::Ident, offset, self.cursor.position(), ident);
        }

        if let Some(token) = self.scan_at_keyword(offset) {
            return token;
        }

        if let Some(token) = self.scan_hash(offset) {
            return token;
        }

        if self.cursor.advance_if_char('!') {
            return Token::new(TokenKind::Exclamation, offset, offset + 1);
        }

        if let Some(token) = self.scan_numeric(offset) {
            return token;
        }

        if let Some(string) = self.scan_string() {
            return Token::with_value(TokenKind::String, offset, self.cursor.position(), string);
        }

        if let Some(kind) = self.scan_punctuation() {
            return Token::new(kind, offset, offset + 1);
        }

        if let Some(kind) = self.scan_operator() {
            return Token::new(kind, offset, offset + 2);
        }

        // Anything else is a single-character delimiter, which guarantees
        // forward progress on unrecognized input.
        self.cursor.advance();
        Token::new(TokenKind::Delim, offset, self.cursor.position())
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str, options: ScannerOptions) -> Vec<TokenKind> {
        Scanner::with_options(source, options)
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_default_options() {
        let options = ScannerOptions::default();
        assert!(options.ignore_whitespace);
        assert!(!options.ignore_comment);
    }

    #[test]
    fn test_option_builders() {
        let options = ScannerOptions::default()
            .with_ignore_whitespace(false)
            .with_ignore_comment(true);
        assert!(!options.ignore_whitespace);
        assert!(options.ignore_comment);
    }

    #[test]
    fn test_eof_on_empty_input() {
        let mut scanner = Scanner::new("");
        let token = scanner.next_token();
        assert_eq!(token, Token::new(TokenKind::Eof, 0, 0));
    }

    #[test]
    fn test_eof_repeats() {
        let mut scanner = Scanner::new("a");
        assert_eq!(scanner.next_token().kind, TokenKind::Ident);
        assert_eq!(scanner.next_token(), Token::new(TokenKind::Eof, 1, 1));
        assert_eq!(scanner.next_token(), Token::new(TokenKind::Eof, 1, 1));
    }

    #[test]
    fn test_cdo_cdc() {
        assert_eq!(
            kinds("<!-- -->", ScannerOptions::default()),
            [TokenKind::Cdo, TokenKind::Cdc]
        );
    }

    #[test]
    fn test_partial_cdo_is_delim() {
        assert_eq!(
            kinds("<!-", ScannerOptions::default()),
            [TokenKind::Delim, TokenKind::Delim, TokenKind::Delim]
        );
    }

    #[test]
    fn test_exclamation() {
        let mut scanner = Scanner::new("!important");
        assert_eq!(scanner.next_token(), Token::new(TokenKind::Exclamation, 0, 1));
        assert_eq!(
            scanner.next_token(),
            Token::with_value(TokenKind::Ident, 1, 10, "important")
        );
    }

    #[test]
    fn test_unmatched_chars_are_single_delims() {
        let mut scanner = Scanner::new("+>");
        assert_eq!(scanner.next_token(), Token::new(TokenKind::Delim, 0, 1));
        assert_eq!(scanner.next_token(), Token::new(TokenKind::Delim, 1, 2));
    }

    #[test]
    fn test_whitespace_tokens_when_not_ignored() {
        assert_eq!(
            kinds("a b", ScannerOptions::LOSSLESS),
            [TokenKind::Ident, TokenKind::Whitespace, TokenKind::Ident]
        );
    }

    #[test]
    fn test_setters_apply_to_next_scan() {
        let mut scanner = Scanner::new(" /* c */ x");
        scanner.set_ignore_comment(true);
        scanner.set_ignore_whitespace(false);
        assert_eq!(scanner.next_token(), Token::new(TokenKind::Whitespace, 0, 1));
        assert_eq!(scanner.next_token(), Token::new(TokenKind::Whitespace, 8, 9));
        assert_eq!(scanner.next_token().kind, TokenKind::Ident);
        assert_eq!(
            scanner.options(),
            ScannerOptions {
                ignore_whitespace: false,
                ignore_comment: true
            }
        );
    }

    #[test]
    fn test_iterator_stops_before_eof() {
        let scanner = Scanner::new("a;b");
        assert_eq!(scanner.count(), 3);
    }
}
