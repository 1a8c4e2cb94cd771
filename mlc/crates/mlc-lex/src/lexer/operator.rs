//! Separator lexing.
//!
//! Handles the single-character separators, the two-character
//! comparisons `<=`, `<>` and `>=`, the dot (which may also start a number)
//! and the slash (which may also open a block comment).

use mlc_util::DiagnosticKind;

use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a token starting with a separator character.
    ///
    /// Returns `None` when the slash turned out to open a block comment; the
    /// lexer is then in [`ScanState::InBlockComment`](crate::ScanState).
    pub fn lex_separator(&mut self) -> Option<TokenKind> {
        match self.cursor.current_char() {
            '+' | '-' | '*' | '=' | ';' | '(' | ')' | ':' | ',' => {
                self.cursor.advance();
                Some(TokenKind::Separator)
            }
            '<' => Some(self.lex_less()),
            '>' => Some(self.lex_greater()),
            '/' => self.lex_slash(),
            '.' => Some(self.lex_dot()),
            _ => {
                self.cursor.advance();
                self.report_undefined(DiagnosticKind::UnrecognizedCharacter);
                Some(TokenKind::Error)
            }
        }
    }

    /// Handles: `<`, `<=`, `<>`
    fn lex_less(&mut self) -> TokenKind {
        self.cursor.advance();
        if !self.cursor.match_char('=') {
            self.cursor.match_char('>');
        }
        TokenKind::Separator
    }

    /// Handles: `>`, `>=`
    fn lex_greater(&mut self) -> TokenKind {
        self.cursor.advance();
        self.cursor.match_char('=');
        TokenKind::Separator
    }

    /// Handles: `/`, `/*`
    fn lex_slash(&mut self) -> Option<TokenKind> {
        self.cursor.advance();
        if self.cursor.match_char('*') {
            self.open_block_comment();
            return None;
        }
        Some(TokenKind::Separator)
    }

    /// Handles: `.` and numbers written as `.digits`
    fn lex_dot(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.current_char().is_ascii_digit() {
            return self.lex_number();
        }
        TokenKind::Separator
    }
}
