//! Identifier and keyword lexing.

use crate::token::{keyword_from_ident, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Identifiers start with an ASCII letter followed by letters or digits.
    /// The text is then checked against the keyword table, case-sensitively.
    pub fn lex_identifier(&mut self) -> TokenKind {
        self.cursor.advance();
        while self.cursor.current_char().is_ascii_alphanumeric() {
            self.cursor.advance();
        }

        match keyword_from_ident(self.lexeme()) {
            Some(_) => TokenKind::Keyword,
            None => TokenKind::Identifier,
        }
    }
}
