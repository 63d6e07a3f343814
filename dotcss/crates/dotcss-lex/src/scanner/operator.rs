//! Punctuation and attribute-selector operator lexing.

use crate::token::TokenKind;
use crate::Scanner;

/// Two-character attribute matchers, as in `[lang|=en]`.
const OPERATORS: &[(&str, TokenKind)] = &[
    ("~=", TokenKind::Includes),
    ("|=", TokenKind::Dashmatch),
    ("*=", TokenKind::SubstringOperator),
    ("^=", TokenKind::PrefixOperator),
    ("$=", TokenKind::SuffixOperator),
];

impl<'a> Scanner<'a> {
    /// Consumes a single punctuation character and returns its kind.
    pub(super) fn scan_punctuation(&mut self) -> Option<TokenKind> {
        let kind = match self.cursor.current_char() {
            ';' => TokenKind::SemiColon,
            ':' => TokenKind::Colon,
            '{' => TokenKind::CurlyL,
            '}' => TokenKind::CurlyR,
            '[' => TokenKind::BracketL,
            ']' => TokenKind::BracketR,
            '(' => TokenKind::ParenthesisL,
            ')' => TokenKind::ParenthesisR,
            ',' => TokenKind::Comma,
            _ => return None,
        };
        self.cursor.advance();
        Some(kind)
    }

    /// Consumes a two-character attribute operator and returns its kind.
    pub(super) fn scan_operator(&mut self) -> Option<TokenKind> {
        OPERATORS
            .iter()
            .find(|(op, _)| self.cursor.advance_if_chars(op))
            .map(|&(_, kind)| kind)
    }
}

#[cfg(test)]
mod tests {
    use crate::token::{Token, TokenKind};
    use crate::Scanner;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Scanner::new(source).map(|t| t.kind).collect()
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(
            kinds(";:{}[](),"),
            [
                TokenKind::SemiColon,
                TokenKind::Colon,
                TokenKind::CurlyL,
                TokenKind::CurlyR,
                TokenKind::BracketL,
                TokenKind::BracketR,
                TokenKind::ParenthesisL,
                TokenKind::ParenthesisR,
                TokenKind::Comma,
            ]
        );
    }

    #[test]
    fn test_attribute_operators() {
        assert_eq!(
            kinds("~= |= *= ^= $="),
            [
                TokenKind::Includes,
                TokenKind::Dashmatch,
                TokenKind::SubstringOperator,
                TokenKind::PrefixOperator,
                TokenKind::SuffixOperator,
            ]
        );
    }

    #[test]
    fn test_operator_span() {
        let mut scanner = Scanner::new("[a^=b]");
        scanner.next_token();
        scanner.next_token();
        assert_eq!(scanner.next_token(), Token::new(TokenKind::PrefixOperator, 2, 4));
    }

    #[test]
    fn test_operator_prefix_alone_is_delim() {
        assert_eq!(
            kinds("~ | = *"),
            [TokenKind::Delim, TokenKind::Delim, TokenKind::Delim, TokenKind::Delim]
        );
    }
}
