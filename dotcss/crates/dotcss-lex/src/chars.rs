//! Character classes used by the scanner grammar.
//!
//! These follow the CSS 2.1 tokenization rules rather than Unicode
//! identifier rules: every code point at or above U+0080 counts as a name
//! character, with no category lookup.

/// Maximum number of hex digits in an escape like `\E9` or `\0000E9`.
pub const MAX_HEX_ESCAPE_DIGITS: usize = 6;

/// Whether `c` can start an identifier: `_`, an ASCII letter, or any
/// non-ASCII code point.
///
/// ```
/// use dotcss_lex::chars::is_name_start;
///
/// assert!(is_name_start('a'));
/// assert!(is_name_start('_'));
/// assert!(is_name_start('ü'));
/// assert!(!is_name_start('-'));
/// assert!(!is_name_start('1'));
/// ```
#[inline]
pub fn is_name_start(c: char) -> bool {
    c == '_' || c.is_ascii_alphabetic() || !c.is_ascii()
}

/// Whether `c` can continue an identifier or name: a name-start character,
/// an ASCII digit, or `-`.
///
/// ```
/// use dotcss_lex::chars::is_name_char;
///
/// assert!(is_name_char('-'));
/// assert!(is_name_char('9'));
/// assert!(!is_name_char('.'));
/// ```
#[inline]
pub fn is_name_char(c: char) -> bool {
    is_name_start(c) || c.is_ascii_digit() || c == '-'
}

/// Whether `c` is an ASCII hex digit.
#[inline]
pub fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

/// Line terminators: `\n`, `\r` and form feed.
#[inline]
pub fn is_newline(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\x0C')
}

/// Whitespace: space, tab and the line terminators.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    c == ' ' || c == '\t' || is_newline(c)
}

/// Characters allowed in the bare contents of `url(...)`.
///
/// ```
/// use dotcss_lex::chars::is_unquoted_char;
///
/// assert!(is_unquoted_char('/'));
/// assert!(!is_unquoted_char(')'));
/// assert!(!is_unquoted_char(' '));
/// ```
#[inline]
pub fn is_unquoted_char(c: char) -> bool {
    !matches!(c, '\\' | '\'' | '"' | '(' | ')') && !is_whitespace(c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::EOF_CHAR;

    #[test]
    fn test_sentinel_is_in_no_class() {
        assert!(!is_name_start(EOF_CHAR));
        assert!(!is_name_char(EOF_CHAR));
        assert!(!is_hex_digit(EOF_CHAR));
        assert!(!is_whitespace(EOF_CHAR));
    }

    #[test]
    fn test_non_ascii_is_name_start() {
        assert!(is_name_start('\u{80}'));
        assert!(is_name_start('\u{060f}'));
        assert!(is_name_start('😀'));
    }

    #[test]
    fn test_whitespace_class() {
        for c in [' ', '\t', '\n', '\r', '\x0C'] {
            assert!(is_whitespace(c), "{:?}", c);
        }
        assert!(!is_whitespace('\u{a0}'));
        assert!(!is_whitespace('\x0B'));
    }

    #[test]
    fn test_hex_digits() {
        assert!(is_hex_digit('0'));
        assert!(is_hex_digit('f'));
        assert!(is_hex_digit('F'));
        assert!(!is_hex_digit('g'));
    }
}
