//! Whitespace, newline and comment lexing.

use crate::chars::{is_newline, is_whitespace};
use crate::token::{Token, TokenKind};
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Scans a run of spaces, tabs and line breaks.
    pub fn scan_whitespace(&mut self) -> Option<&'a str> {
        let start = self.cursor.mark();
        if self.cursor.advance_while(is_whitespace) == 0 {
            return None;
        }
        Some(self.cursor.slice_from(start))
    }

    /// Scans a run of line breaks, then one more `\r\n` if present.
    ///
    /// Returns whether anything was consumed.
    pub fn scan_newline(&mut self) -> bool {
        let run = self.cursor.advance_while(is_newline);
        let crlf = self.cursor.advance_if_chars("\r\n");
        run > 0 || crlf
    }

    /// Scans a `/* ... */` comment and returns the whole lexeme.
    ///
    /// An unterminated comment runs to the end of input.
    pub fn scan_comment(&mut self) -> Option<&'a str> {
        let start = self.cursor.mark();
        if !self.cursor.advance_if_chars("/*") {
            return None;
        }

        let mut star = false;
        let mut closed = false;
        self.cursor.advance_while(|c| {
            if star && c == '/' {
                closed = true;
                return false;
            }
            star = c == '*';
            true
        });
        if closed {
            self.cursor.advance();
        }

        Some(self.cursor.slice_from(start))
    }

    /// Consumes leading trivia, returning the first whitespace or comment
    /// token that the options keep.
    pub(super) fn trivia(&mut self) -> Option<Token<'a>> {
        loop {
            let offset = self.cursor.position();

            if self.scan_whitespace().is_some() {
                if !self.options().ignore_whitespace {
                    return Some(Token::new(TokenKind::Whitespace, offset, self.cursor.position()));
                }
                continue;
            }

            if self.scan_comment().is_some() {
                if !self.options().ignore_comment {
                    return Some(Token::new(TokenKind::Comment, offset, self.cursor.position()));
                }
                continue;
            }

            return None;
        }
    }
}
