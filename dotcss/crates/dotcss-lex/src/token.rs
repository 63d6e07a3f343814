//! Token definitions for the dotcss scanner.
//!
//! A [`Token`] is a [`TokenKind`] tag, the [`Span`] of source text it covers,
//! and, for the kinds that carry semantic content, a borrowed payload.

use std::fmt;

use dotcss_util::Span;

/// The kind of a scanned token.
///
/// A few kinds exist only so downstream consumers can share one taxonomy:
/// the scanner itself never produces [`TokenKind::BadString`],
/// [`TokenKind::EscapedJavaScript`], [`TokenKind::BadEscapedJavaScript`] or
/// [`TokenKind::SingleLineComment`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `color`, `-moz-box`, `--custom`, `\E9motion`
    Ident,
    /// `@media`, `@import`
    AtKeyword,
    /// `"text"` or `'text'`
    String,
    /// An unterminated string (never produced by the scanner)
    BadString,
    /// The bare contents of `url(...)`
    UnquotedString,
    /// `#fff`, `#main`
    Hash,
    /// `12`, `1.5`, `.5`
    Num,
    /// `100%`, also `2fr`
    Percentage,
    /// A number followed by an unknown unit, e.g. `3foo`
    Dimension,
    /// `+0025-00FF`, `+4??`
    UnicodeRange,
    /// `<!--`
    Cdo,
    /// `-->`
    Cdc,
    /// `:`
    Colon,
    /// `;`
    SemiColon,
    /// `{`
    CurlyL,
    /// `}`
    CurlyR,
    /// `(`
    ParenthesisL,
    /// `)`
    ParenthesisR,
    /// `[`
    BracketL,
    /// `]`
    BracketR,
    /// A run of spaces, tabs and line breaks
    Whitespace,
    /// `~=`
    Includes,
    /// `|=`
    Dashmatch,
    /// `*=`
    SubstringOperator,
    /// `^=`
    PrefixOperator,
    /// `$=`
    SuffixOperator,
    /// Any single character no other rule matched
    Delim,
    /// `3em`
    Ems,
    /// `3ex`
    Exs,
    /// `px`, `cm`, `mm`, `in`, `pt`, `pc`
    Length,
    /// `deg`, `rad`, `grad`
    Angle,
    /// `ms`, `s`
    Time,
    /// `hz`, `khz`
    Freq,
    /// `!`
    Exclamation,
    /// `dpi`, `dpcm`
    Resolution,
    /// `,`
    Comma,
    /// `@charset`, matched case-insensitively
    Charset,
    /// Embedded script content (never produced by the scanner)
    EscapedJavaScript,
    /// Malformed embedded script content (never produced by the scanner)
    BadEscapedJavaScript,
    /// `/* ... */`
    Comment,
    /// `// ...` (never produced by the scanner)
    SingleLineComment,
    /// End of input
    Eof,
}

impl TokenKind {
    /// The display name of this kind, e.g. `"AtKeyword"`.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Ident => "Ident",
            TokenKind::AtKeyword => "AtKeyword",
            TokenKind::String => "String",
            TokenKind::BadString => "BadString",
            TokenKind::UnquotedString => "UnquotedString",
            TokenKind::Hash => "Hash",
            TokenKind::Num => "Num",
            TokenKind::Percentage => "Percentage",
            TokenKind::Dimension => "Dimension",
            TokenKind::UnicodeRange => "UnicodeRange",
            TokenKind::Cdo => "CDO",
            TokenKind::Cdc => "CDC",
            TokenKind::Colon => "Colon",
            TokenKind::SemiColon => "SemiColon",
            TokenKind::CurlyL => "CurlyL",
            TokenKind::CurlyR => "CurlyR",
            TokenKind::ParenthesisL => "ParenthesisL",
            TokenKind::ParenthesisR => "ParenthesisR",
            TokenKind::BracketL => "BracketL",
            TokenKind::BracketR => "BracketR",
            TokenKind::Whitespace => "Whitespace",
            TokenKind::Includes => "Includes",
            TokenKind::Dashmatch => "Dashmatch",
            TokenKind::SubstringOperator => "SubstringOperator",
            TokenKind::PrefixOperator => "PrefixOperator",
            TokenKind::SuffixOperator => "SuffixOperator",
            TokenKind::Delim => "Delim",
            TokenKind::Ems => "EMS",
            TokenKind::Exs => "EXS",
            TokenKind::Length => "Length",
            TokenKind::Angle => "Angle",
            TokenKind::Time => "Time",
            TokenKind::Freq => "Freq",
            TokenKind::Exclamation => "Exclamation",
            TokenKind::Resolution => "Resolution",
            TokenKind::Comma => "Comma",
            TokenKind::Charset => "Charset",
            TokenKind::EscapedJavaScript => "EscapedJavaScript",
            TokenKind::BadEscapedJavaScript => "BadEscapedJavaScript",
            TokenKind::Comment => "Comment",
            TokenKind::SingleLineComment => "SingleLineComment",
            TokenKind::Eof => "EOF",
        }
    }

    /// Whether tokens of this kind carry a [`Token::value`].
    pub fn has_payload(self) -> bool {
        matches!(
            self,
            TokenKind::Ident
                | TokenKind::AtKeyword
                | TokenKind::Charset
                | TokenKind::Hash
                | TokenKind::String
                | TokenKind::UnquotedString
        )
    }

    /// Whitespace and comments.
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::Comment | TokenKind::SingleLineComment
        )
    }

    /// Numbers followed by a unit, including percentages.
    pub fn is_dimension(self) -> bool {
        matches!(
            self,
            TokenKind::Percentage
                | TokenKind::Dimension
                | TokenKind::Ems
                | TokenKind::Exs
                | TokenKind::Length
                | TokenKind::Angle
                | TokenKind::Time
                | TokenKind::Freq
                | TokenKind::Resolution
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const UNITS: &[(&str, TokenKind)] = &[
    ("em", TokenKind::Ems),
    ("ex", TokenKind::Exs),
    ("px", TokenKind::Length),
    ("cm", TokenKind::Length),
    ("mm", TokenKind::Length),
    ("in", TokenKind::Length),
    ("pt", TokenKind::Length),
    ("pc", TokenKind::Length),
    ("deg", TokenKind::Angle),
    ("rad", TokenKind::Angle),
    ("grad", TokenKind::Angle),
    ("ms", TokenKind::Time),
    ("s", TokenKind::Time),
    ("hz", TokenKind::Freq),
    ("khz", TokenKind::Freq),
    ("dpi", TokenKind::Resolution),
    ("dpcm", TokenKind::Resolution),
    ("fr", TokenKind::Percentage),
];

/// Classifies the unit identifier that follows a number.
///
/// The lookup ignores ASCII case. Unknown units give [`TokenKind::Dimension`].
///
/// # Example
///
/// ```
/// use dotcss_lex::token::{unit_kind, TokenKind};
///
/// assert_eq!(unit_kind("PX"), TokenKind::Length);
/// assert_eq!(unit_kind("kHz"), TokenKind::Freq);
/// assert_eq!(unit_kind("vw"), TokenKind::Dimension);
/// ```
pub fn unit_kind(unit: &str) -> TokenKind {
    UNITS
        .iter()
        .find(|(name, _)| unit.eq_ignore_ascii_case(name))
        .map_or(TokenKind::Dimension, |&(_, kind)| kind)
}

/// A token scanned from stylesheet source.
///
/// Tokens borrow their payload from the source buffer, so they are cheap to
/// copy and never allocate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token<'a> {
    /// What kind of token this is.
    pub kind: TokenKind,
    /// The half-open byte range this token covers.
    pub span: Span,
    /// The literal payload, present only for kinds where
    /// [`TokenKind::has_payload`] is true.
    pub value: Option<&'a str>,
}

impl<'a> Token<'a> {
    /// Creates a token without a payload.
    #[inline]
    pub fn new(kind: TokenKind, start: usize, end: usize) -> Self {
        Self {
            kind,
            span: Span::new(start, end),
            value: None,
        }
    }

    /// Creates a token carrying `value` as its payload.
    #[inline]
    pub fn with_value(kind: TokenKind, start: usize, end: usize, value: &'a str) -> Self {
        Self {
            kind,
            span: Span::new(start, end),
            value: Some(value),
        }
    }

    /// Returns the source text this token covers.
    ///
    /// # Example
    ///
    /// ```
    /// use dotcss_lex::{Scanner, TokenKind};
    ///
    /// let source = "4em";
    /// let token = Scanner::new(source).next_token();
    /// assert_eq!(token.kind, TokenKind::Ems);
    /// assert_eq!(token.lexeme(source), "4em");
    /// ```
    #[inline]
    pub fn lexeme<'s>(&self, source: &'s str) -> &'s str {
        source.get(self.span.range()).unwrap_or("")
    }

    /// Returns true for the end-of-input token.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Some(value) => write!(f, "{}({:?})", self.kind, value),
            None => write!(f, "{}", self.kind),
        }
    }
}
