//! Number literal lexing.
//!
//! Numbers are consumed greedily first and validated afterwards, so a
//! malformed literal still comes out as a single `Number` token.

use mlc_util::DiagnosticKind;

use crate::char_class::is_number_continue;
use crate::number_format::is_valid_number;
use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a number literal.
    ///
    /// Consumes digits, hex letters and dots, then at most one `H`/`O`
    /// suffix. A trailing `E`/`e` followed by a sign and a digit extends the
    /// literal with an exponent; a sign without a digit after it is left in
    /// the input.
    ///
    /// Also used after a leading `.` has been consumed, so `.5` is lexed as
    /// one literal.
    pub fn lex_number(&mut self) -> TokenKind {
        self.eat_number_body();

        if matches!(self.cursor.current_char(), 'H' | 'h' | 'O' | 'o') {
            self.cursor.advance();
        }

        if matches!(self.lexeme().chars().last(), Some('E' | 'e'))
            && matches!(self.cursor.current_char(), '+' | '-')
        {
            self.cursor.advance();
            if self.cursor.current_char().is_ascii_digit() {
                self.eat_number_body();
            } else {
                self.cursor.retreat();
            }
        }

        if !is_valid_number(self.lexeme()) {
            self.report_undefined(DiagnosticKind::MalformedNumericLiteral);
        }

        TokenKind::Number
    }

    fn eat_number_body(&mut self) {
        while is_number_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }
    }
}
