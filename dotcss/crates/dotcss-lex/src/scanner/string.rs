//! String lexing.

use crate::chars::is_unquoted_char;
use crate::error::{ScanError, ScanResult};
use crate::token::{Token, TokenKind};
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Scans a single- or double-quoted string and returns the full lexeme,
    /// quotes included.
    ///
    /// The body may not contain a backslash or a line break, and must be
    /// followed by the matching closing quote. Otherwise nothing is consumed
    /// and the opening quote is left to fall through to `Delim`. Escapes are
    /// not decoded.
    pub fn scan_string(&mut self) -> Option<&'a str> {
        let quote = self.cursor.current_char();
        if quote != '"' && quote != '\'' {
            return None;
        }

        let start = self.cursor.mark();
        self.cursor.advance();
        self.cursor
            .advance_while(|c| c != quote && !matches!(c, '\\' | '\n' | '\r' | '\x0C'));

        if self.cursor.advance_if_char(quote) {
            Some(self.cursor.slice_from(start))
        } else {
            self.cursor.reset(start);
            None
        }
    }

    /// Scans the bare contents of a `url(...)` and returns them as an
    /// `UnquotedString` token.
    ///
    /// Callers use this once they have consumed `url(`. At least one
    /// character must be present.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::EmptyUnquotedString`] if the next character
    /// cannot start an unquoted string. The cursor does not move.
    pub fn scan_unquoted_string(&mut self) -> ScanResult<Token<'a>> {
        let start = self.cursor.mark();
        if self.cursor.is_at_end() || self.cursor.advance_while(is_unquoted_char) == 0 {
            return Err(ScanError::EmptyUnquotedString { offset: start });
        }

        let end = self.cursor.position();
        Ok(Token::with_value(
            TokenKind::UnquotedString,
            start,
            end,
            self.cursor.slice_from(start),
        ))
    }
}
