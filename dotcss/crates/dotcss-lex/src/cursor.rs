//! Character cursor for traversing stylesheet source.
//!
//! This module provides the [`Cursor`] struct, a bounds-safe read position
//! over an immutable `&str`. Every sub-scanner in the crate is written as
//! "remember a mark, try to match, and reset to the mark on failure", so the
//! cursor supports unlimited backtracking through [`Cursor::mark`] and
//! [`Cursor::reset`].
//!
//! Positions are byte offsets and always sit on a UTF-8 character boundary.
//! All lookahead and lookbehind is measured in characters.

/// Character returned by every read past either end of the source.
pub const EOF_CHAR: char = '\0';

/// A cursor for traversing source text character by character.
///
/// Reads never panic: looking past the end (or before the start) yields
/// [`EOF_CHAR`] instead.
///
/// # Example
///
/// ```
/// use dotcss_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("a{}");
///
/// assert_eq!(cursor.current_char(), 'a');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), '{');
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source. `0 <= position <= source.len()`.
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor positioned at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
        }
    }

    /// Returns the current character, or [`EOF_CHAR`] at the end.
    #[inline]
    pub fn current_char(&self) -> char {
        self.peek_char(0)
    }

    /// Returns the character `offset` characters ahead of the current
    /// position.
    ///
    /// # Example
    ///
    /// ```
    /// use dotcss_lex::cursor::{Cursor, EOF_CHAR};
    ///
    /// let cursor = Cursor::new("abc");
    /// assert_eq!(cursor.peek_char(0), 'a');
    /// assert_eq!(cursor.peek_char(2), 'c');
    /// assert_eq!(cursor.peek_char(3), EOF_CHAR);
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        let rest = self.remaining();

        // Fast path: an all-ASCII prefix means bytes and chars line up.
        match rest.as_bytes().get(..=offset) {
            Some(prefix) if prefix.is_ascii() => prefix[offset] as char,
            _ => rest.chars().nth(offset).unwrap_or(EOF_CHAR),
        }
    }

    /// Returns the character `offset` characters behind the current
    /// position. An offset of zero is the current character.
    ///
    /// # Example
    ///
    /// ```
    /// use dotcss_lex::cursor::{Cursor, EOF_CHAR};
    ///
    /// let mut cursor = Cursor::new("ab");
    /// cursor.advance();
    /// assert_eq!(cursor.lookback_char(0), 'b');
    /// assert_eq!(cursor.lookback_char(1), 'a');
    /// assert_eq!(cursor.lookback_char(2), EOF_CHAR);
    /// ```
    pub fn lookback_char(&self, offset: usize) -> char {
        if offset == 0 {
            return self.current_char();
        }
        self.source[..self.position]
            .chars()
            .rev()
            .nth(offset - 1)
            .unwrap_or(EOF_CHAR)
    }

    /// Returns the current character and advances past it.
    ///
    /// At the end of the source this returns [`EOF_CHAR`] and does not move.
    #[inline]
    pub fn next_char(&mut self) -> char {
        let c = self.current_char();
        self.advance();
        c
    }

    /// Advances the cursor by one character. Does nothing at the end.
    #[inline]
    pub fn advance(&mut self) {
        if let Some(c) = self.remaining().chars().next() {
            self.position += c.len_utf8();
        }
    }

    /// Consumes one character iff it equals `expected`.
    ///
    /// # Example
    ///
    /// ```
    /// use dotcss_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("~=");
    /// assert!(cursor.advance_if_char('~'));
    /// assert!(!cursor.advance_if_char('~'));
    /// assert_eq!(cursor.current_char(), '=');
    /// ```
    #[inline]
    pub fn advance_if_char(&mut self, expected: char) -> bool {
        if !self.is_at_end() && self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes `literal` iff the upcoming text matches it entirely.
    ///
    /// Nothing is consumed when the match fails part-way.
    ///
    /// # Example
    ///
    /// ```
    /// use dotcss_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("<!-x");
    /// assert!(!cursor.advance_if_chars("<!--"));
    /// assert_eq!(cursor.position(), 0);
    /// assert!(cursor.advance_if_chars("<!-"));
    /// assert_eq!(cursor.position(), 3);
    /// ```
    #[inline]
    pub fn advance_if_chars(&mut self, literal: &str) -> bool {
        if self.remaining().starts_with(literal) {
            self.position += literal.len();
            true
        } else {
            false
        }
    }

    /// Consumes characters while `predicate` holds for the current one and
    /// returns how many characters were consumed.
    ///
    /// The predicate is `FnMut`, so callers can thread small pieces of scan
    /// state through captured locals.
    ///
    /// # Example
    ///
    /// ```
    /// use dotcss_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("123px");
    /// assert_eq!(cursor.advance_while(|c| c.is_ascii_digit()), 3);
    /// assert_eq!(cursor.remaining(), "px");
    /// ```
    pub fn advance_while(&mut self, mut predicate: impl FnMut(char) -> bool) -> usize {
        let mut count = 0;
        while let Some(c) = self.remaining().chars().next() {
            if !predicate(c) {
                break;
            }
            self.position += c.len_utf8();
            count += 1;
        }
        count
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns a mark for the current position, for use with [`reset`].
    ///
    /// [`reset`]: Cursor::reset
    #[inline]
    pub fn mark(&self) -> usize {
        self.position
    }

    /// Rewinds (or fast-forwards) to a position previously returned by
    /// [`mark`]. Marks stay valid for the cursor's whole lifetime.
    ///
    /// # Example
    ///
    /// ```
    /// use dotcss_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("-->");
    /// let mark = cursor.mark();
    /// cursor.advance_while(|c| c == '-');
    /// cursor.reset(mark);
    /// assert_eq!(cursor.current_char(), '-');
    /// ```
    ///
    /// [`mark`]: Cursor::mark
    #[inline]
    pub fn reset(&mut self, mark: usize) {
        debug_assert!(self.source.is_char_boundary(mark.min(self.source.len())));
        self.position = mark.min(self.source.len());
    }

    /// Returns the current byte position in the source.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the slice `[from, to)` of the source.
    ///
    /// Out-of-range, inverted or non-boundary ranges yield an empty string.
    ///
    /// # Example
    ///
    /// ```
    /// use dotcss_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("4em");
    /// assert_eq!(cursor.slice(1, 3), "em");
    /// assert_eq!(cursor.slice(1, 9), "");
    /// ```
    #[inline]
    pub fn slice(&self, from: usize, to: usize) -> &'a str {
        if to > self.source.len() {
            return "";
        }
        self.source.get(from..to).unwrap_or("")
    }

    /// Returns the slice from `start` to the current position.
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.slice(start, self.position)
    }

    /// Returns the source text from the current position to the end.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// Returns the full source text.
    #[inline]
    pub fn source(&self) -> &'a str {
        self.source
    }
}
