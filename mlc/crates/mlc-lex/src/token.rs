//! Token definitions for the MLC lexer.

use std::fmt;

use mlc_util::{Span, TableKind, KEYWORDS};

/// The category of a scanned token
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Reserved word from the keyword table
    Keyword,
    /// User identifier
    Identifier,
    /// Operator or punctuation from the separator table
    Separator,
    /// Numeric literal, valid or not
    Number,
    /// Unrecognized input; reported, never referenced in the output
    Error,
}

impl TokenKind {
    /// The table a token of this kind is referenced through
    ///
    /// # Example
    ///
    /// ```
    /// use mlc_lex::TokenKind;
    /// use mlc_util::TableKind;
    ///
    /// assert_eq!(TokenKind::Number.table_kind(), Some(TableKind::Number));
    /// assert_eq!(TokenKind::Error.table_kind(), None);
    /// ```
    pub const fn table_kind(self) -> Option<TableKind> {
        match self {
            TokenKind::Keyword => Some(TableKind::Keyword),
            TokenKind::Identifier => Some(TableKind::Identifier),
            TokenKind::Separator => Some(TableKind::Separator),
            TokenKind::Number => Some(TableKind::Number),
            TokenKind::Error => None,
        }
    }
}

/// A classified unit of source text
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// Token category
    pub kind: TokenKind,
    /// The exact text matched
    pub lexeme: String,
    /// Where the token starts
    pub span: Span,
}

impl Token {
    /// Create a new token
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }

    /// Line the token is on (1-based)
    #[inline]
    pub fn line(&self) -> u32 {
        self.span.line
    }

    /// Column the token starts at (1-based)
    #[inline]
    pub fn column(&self) -> u32 {
        self.span.column
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({}) at {}", self.kind, self.lexeme, self.span)
    }
}

/// Looks up an identifier-shaped lexeme in the keyword table.
///
/// Matching is case-sensitive.
///
/// # Example
///
/// ```
/// use mlc_lex::keyword_from_ident;
///
/// assert_eq!(keyword_from_ident("begin"), Some(1));
/// assert_eq!(keyword_from_ident("Begin"), None);
/// ```
pub fn keyword_from_ident(ident: &str) -> Option<usize> {
    KEYWORDS.iter().position(|keyword| *keyword == ident)
}
