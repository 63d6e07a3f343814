//! Identifier and name lexing.
//!
//! This module handles identifiers, the looser "name" production used after
//! `@` and `#`, and backslash escapes.

use crate::chars::{is_hex_digit, is_name_char, is_name_start, is_newline, MAX_HEX_ESCAPE_DIGITS};
use crate::token::{Token, TokenKind};
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Scans an identifier and returns its text.
    ///
    /// An identifier is an optional leading `-`, then a second `-`, a
    /// name-start character or an escape, then any run of name characters and
    /// escapes. A lone `-` is not an identifier; on failure nothing is
    /// consumed. An identifier never starts or continues at a `-->`, so
    /// `red-->` is the identifier `red` followed by a CDC.
    pub fn scan_identifier(&mut self) -> Option<&'a str> {
        if self.cursor.remaining().starts_with("-->") {
            return None;
        }
        let start = self.cursor.mark();

        if self.cursor.advance_if_char('-') {
            let opened = self.cursor.advance_if_char('-')
                || self.scan_name_start()
                || self.scan_escape(false).is_some();
            if !opened {
                self.cursor.reset(start);
                return None;
            }
        } else if !(self.scan_name_start() || self.scan_escape(false).is_some()) {
            return None;
        }

        self.scan_name_chars();
        Some(self.cursor.slice_from(start))
    }

    /// Scans a (possibly empty) run of name characters and escapes.
    ///
    /// Unlike an identifier, a name may start with a digit or `-`, so
    /// `#1a2b3c` and `@-moz-document` both have names.
    pub fn scan_name(&mut self) -> &'a str {
        let start = self.cursor.mark();
        self.scan_name_chars();
        self.cursor.slice_from(start)
    }

    /// Scans a backslash escape and returns the escaped text, without the
    /// backslash.
    ///
    /// `\` followed by 1 to 6 hex digits is a code point escape; a single
    /// following space, tab or line break ends it and is consumed. `\`
    /// followed by any other character escapes that character. A `\` before a
    /// line break only counts when `include_newlines` is set (string and
    /// comment continuations); the line break is then consumed. On failure
    /// nothing is consumed.
    pub fn scan_escape(&mut self, include_newlines: bool) -> Option<&'a str> {
        if self.cursor.current_char() != '\\' {
            return None;
        }

        let mark = self.cursor.mark();
        self.cursor.advance();
        let from = self.cursor.position();

        let mut digits = 0;
        self.cursor.advance_while(|c| {
            let take = digits < MAX_HEX_ESCAPE_DIGITS && is_hex_digit(c);
            digits += usize::from(take);
            take
        });

        if digits > 0 {
            let hex = self.cursor.slice_from(from);
            if !self.cursor.advance_if_char(' ') && !self.cursor.advance_if_char('\t') {
                self.scan_newline();
            }
            return Some(hex);
        }

        if !self.cursor.is_at_end() {
            if !is_newline(self.cursor.current_char()) {
                self.cursor.advance();
                return Some(self.cursor.slice_from(from));
            }
            if include_newlines {
                self.scan_newline();
                return Some(self.cursor.slice_from(from));
            }
        }

        self.cursor.reset(mark);
        None
    }

    /// Scans `@` followed by a name.
    ///
    /// The payload is the whole lexeme, `@` included. `@charset` (in any
    /// ASCII case) gets its own kind. An `@` with no name is a `Delim`.
    pub(super) fn scan_at_keyword(&mut self, offset: usize) -> Option<Token<'a>> {
        if !self.cursor.advance_if_char('@') {
            return None;
        }

        let name = self.scan_name();
        if name.is_empty() {
            return Some(Token::new(TokenKind::Delim, offset, self.cursor.position()));
        }

        let kind = if name.eq_ignore_ascii_case("charset") {
            TokenKind::Charset
        } else {
            TokenKind::AtKeyword
        };
        let end = self.cursor.position();
        Some(Token::with_value(kind, offset, end, self.cursor.slice_from(offset)))
    }

    /// Scans `#` followed by a name. The payload is the name alone. A `#`
    /// with no name is a `Delim`.
    pub(super) fn scan_hash(&mut self, offset: usize) -> Option<Token<'a>> {
        if !self.cursor.advance_if_char('#') {
            return None;
        }

        let name = self.scan_name();
        let end = self.cursor.position();
        if name.is_empty() {
            Some(Token::new(TokenKind::Delim, offset, end))
        } else {
            Some(Token::with_value(TokenKind::Hash, offset, end, name))
        }
    }

    fn scan_name_start(&mut self) -> bool {
        if is_name_start(self.cursor.current_char()) {
            self.cursor.advance();
            true
        } else {
            false
        }
    }

    fn scan_name_chars(&mut self) {
        loop {
            if self.cursor.remaining().starts_with("-->") {
                break;
            }
            if is_name_char(self.cursor.current_char()) {
                self.cursor.advance();
            } else if self.scan_escape(false).is_none() {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::token::{Token, TokenKind};
    use crate::Scanner;

    fn scan_ident(source: &str) -> (Option<&str>, usize) {
        let mut scanner = Scanner::new(source);
        let ident = scanner.scan_identifier();
        (ident, scanner.position())
    }

    fn scan_escape(source: &str, include_newlines: bool) -> (Option<&str>, usize) {
        let mut scanner = Scanner::new(source);
        let escape = scanner.scan_escape(include_newlines);
        (escape, scanner.position())
    }

    #[test]
    fn test_simple_identifier() {
        assert_eq!(scan_ident("color:"), (Some("color"), 5));
        assert_eq!(scan_ident("_x1"), (Some("_x1"), 3));
    }

    #[test]
    fn test_identifier_with_hyphens() {
        assert_eq!(scan_ident("-moz-box"), (Some("-moz-box"), 8));
        assert_eq!(scan_ident("font-size"), (Some("font-size"), 9));
    }

    #[test]
    fn test_custom_property_prefix() {
        assert_eq!(scan_ident("--main-color"), (Some("--main-color"), 12));
        assert_eq!(scan_ident("--"), (Some("--"), 2));
    }

    #[test]
    fn test_lone_hyphen_rolls_back() {
        assert_eq!(scan_ident("-"), (None, 0));
        assert_eq!(scan_ident("-1px"), (None, 0));
        assert_eq!(scan_ident("- a"), (None, 0));
    }

    #[test]
    fn test_identifier_stops_before_cdc() {
        assert_eq!(scan_ident("red-->"), (Some("red"), 3));
        assert_eq!(scan_ident("a--->"), (Some("a-"), 2));
        assert_eq!(scan_ident("--->"), (Some("---"), 3));
    }

    #[test]
    fn test_identifier_never_starts_at_cdc() {
        assert_eq!(scan_ident("-->"), (None, 0));
    }

    #[test]
    fn test_identifier_cannot_start_with_digit() {
        assert_eq!(scan_ident("1a"), (None, 0));
    }

    #[test]
    fn test_non_ascii_identifier() {
        assert_eq!(scan_ident("über"), (Some("über"), 5));
        assert_eq!(scan_ident("\u{060f}rf"), (Some("\u{060f}rf"), 4));
    }

    #[test]
    fn test_identifier_is_not_case_folded() {
        assert_eq!(scan_ident("Red"), (Some("Red"), 3));
    }

    #[test]
    fn test_identifier_with_escapes() {
        assert_eq!(scan_ident("\\E9motion"), (Some("\\E9motion"), 9));
        assert_eq!(scan_ident("a\\:b"), (Some("a\\:b"), 4));
        assert_eq!(scan_ident("-\\31 x"), (Some("-\\31 x"), 6));
    }

    #[test]
    fn test_identifier_stops_before_backslash_newline() {
        assert_eq!(scan_ident("a\\\nb"), (Some("a"), 1));
    }

    #[test]
    fn test_hex_escape() {
        assert_eq!(scan_escape("\\E9motion", false), (Some("E9"), 3));
    }

    #[test]
    fn test_hex_escape_max_six_digits() {
        assert_eq!(scan_escape("\\0000E9ab", false), (Some("0000E9"), 7));
    }

    #[test]
    fn test_hex_escape_consumes_one_terminator() {
        assert_eq!(scan_escape("\\31  x", false), (Some("31"), 4));
        assert_eq!(scan_escape("\\31\tx", false), (Some("31"), 4));
        assert_eq!(scan_escape("\\31\r\nx", false), (Some("31"), 5));
    }

    #[test]
    fn test_literal_escape() {
        assert_eq!(scan_escape("\\\"", false), (Some("\""), 2));
        assert_eq!(scan_escape("\\é", false), (Some("é"), 3));
    }

    #[test]
    fn test_newline_escape_needs_opt_in() {
        assert_eq!(scan_escape("\\\nx", false), (None, 0));
        assert_eq!(scan_escape("\\\nx", true), (Some("\n"), 2));
        assert_eq!(scan_escape("\\\r\nx", true), (Some("\r\n"), 3));
    }

    #[test]
    fn test_backslash_at_end_is_not_escape() {
        assert_eq!(scan_escape("\\", true), (None, 0));
    }

    #[test]
    fn test_no_escape_without_backslash() {
        assert_eq!(scan_escape("a", true), (None, 0));
    }

    #[test]
    fn test_name_may_start_with_digit() {
        let mut scanner = Scanner::new("1a2b;");
        assert_eq!(scanner.scan_name(), "1a2b");
        assert_eq!(scanner.scan_name(), "");
    }

    #[test]
    fn test_at_keyword() {
        let mut scanner = Scanner::new("@import");
        assert_eq!(
            scanner.next_token(),
            Token::with_value(TokenKind::AtKeyword, 0, 7, "@import")
        );
    }

    #[test]
    fn test_charset_case_insensitive() {
        let mut scanner = Scanner::new("@CharSet");
        assert_eq!(
            scanner.next_token(),
            Token::with_value(TokenKind::Charset, 0, 8, "@CharSet")
        );
    }

    #[test]
    fn test_charset_prefix_is_at_keyword() {
        let mut scanner = Scanner::new("@charsets");
        assert_eq!(scanner.next_token().kind, TokenKind::AtKeyword);
    }

    #[test]
    fn test_bare_at_is_delim() {
        let mut scanner = Scanner::new("@ x");
        assert_eq!(scanner.next_token(), Token::new(TokenKind::Delim, 0, 1));
        assert_eq!(scanner.next_token().kind, TokenKind::Ident);
    }

    #[test]
    fn test_hash_payload_is_name() {
        let mut scanner = Scanner::new("#import");
        assert_eq!(
            scanner.next_token(),
            Token::with_value(TokenKind::Hash, 0, 7, "import")
        );
    }

    #[test]
    fn test_hash_color() {
        let mut scanner = Scanner::new("#0a0B0c");
        assert_eq!(scanner.next_token().value, Some("0a0B0c"));
    }

    #[test]
    fn test_bare_hash_is_delim() {
        let mut scanner = Scanner::new("# ");
        assert_eq!(scanner.next_token(), Token::new(TokenKind::Delim, 0, 1));
        assert!(scanner.next_token().is_eof());
    }
}
