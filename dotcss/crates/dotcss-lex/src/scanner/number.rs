//! Number, dimension and unicode-range lexing.

use crate::chars::is_hex_digit;
use crate::token::{unit_kind, Token, TokenKind};
use crate::Scanner;

/// Hex digits and `?` wildcards allowed in each half of a unicode range.
const MAX_RANGE_DIGITS: usize = 6;

impl<'a> Scanner<'a> {
    /// Scans an unsigned decimal number: `.5`, `10`, `10.` or `1.25`.
    ///
    /// There is no sign and no exponent. A lone `.` is not a number.
    pub fn scan_number(&mut self) -> Option<&'a str> {
        let start = self.cursor.mark();

        if self.cursor.current_char() == '.' && self.cursor.peek_char(1).is_ascii_digit() {
            self.cursor.advance();
            self.cursor.advance_while(|c| c.is_ascii_digit());
            return Some(self.cursor.slice_from(start));
        }

        if self.cursor.advance_while(|c| c.is_ascii_digit()) == 0 {
            return None;
        }
        if self.cursor.advance_if_char('.') {
            self.cursor.advance_while(|c| c.is_ascii_digit());
        }
        Some(self.cursor.slice_from(start))
    }

    /// Scans a number and its suffix.
    ///
    /// `%` makes a `Percentage`, an identifier makes a unit-classified
    /// dimension, and a bare number is `Num`. Numeric tokens carry no payload.
    pub(super) fn scan_numeric(&mut self, offset: usize) -> Option<Token<'a>> {
        self.scan_number()?;

        let kind = if self.cursor.advance_if_char('%') {
            TokenKind::Percentage
        } else if let Some(unit) = self.scan_identifier() {
            unit_kind(unit)
        } else {
            TokenKind::Num
        };
        Some(Token::new(kind, offset, self.cursor.position()))
    }

    /// Scans the tail of a unicode range such as `+0025-00FF` or `+4??`.
    ///
    /// The scan starts at the `+` (the leading `U` is left to the caller).
    /// The first half is hex digits followed by `?` wildcards, 1 to 6 in
    /// total; an optional `-` must then be followed by 1 to 6 hex digits.
    /// Never reached from [`Scanner::next_token`], which reads `U+` as an
    /// identifier and a delimiter.
    pub fn scan_unicode_range(&mut self) -> Option<Token<'a>> {
        let start = self.cursor.mark();

        if self.cursor.advance_if_char('+') {
            let head = self.cursor.advance_while(is_hex_digit)
                + self.cursor.advance_while(|c| c == '?');
            let head_ok = (1..=MAX_RANGE_DIGITS).contains(&head);

            let tail_ok = !self.cursor.advance_if_char('-')
                || (1..=MAX_RANGE_DIGITS).contains(&self.cursor.advance_while(is_hex_digit));

            if head_ok && tail_ok {
                return Some(Token::new(
                    TokenKind::UnicodeRange,
                    start,
                    self.cursor.position(),
                ));
            }
        }

        self.cursor.reset(start);
        None
    }
}
