//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, the cross-line scan state
//! and token dispatch.

use mlc_util::{DiagnosticKind, Handler, Span};

use crate::char_class::{classify, CharClass};
use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

/// Automaton mode carried from one line to the next.
///
/// A block comment may span several lines, so the lexer for line `n + 1`
/// must start in whatever mode the lexer for line `n` finished in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScanState {
    /// Ordinary tokenization
    #[default]
    Normal,
    /// Inside `/* ... */`, looking for the closing `*/`
    InBlockComment,
}

/// Lexer for one line of MLC source.
///
/// The lexer is constructed per line with the line number and the
/// [`ScanState`] the previous line ended in. Lexical errors are recorded in
/// the handler and never stop the scan.
pub struct Lexer<'a> {
    /// Character cursor over the line.
    pub(super) cursor: Cursor<'a>,

    /// Error handler for reporting lexical errors.
    pub(super) handler: &'a mut Handler,

    /// Line number of the text being scanned (1-based).
    pub(super) line: u32,

    /// Current automaton mode.
    pub(super) state: ScanState,

    /// Byte offset where the current token starts.
    pub(super) token_start: usize,

    /// Column where the current token starts (1-based).
    pub(super) token_start_column: u32,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer for `source`, which is line `line` of the input.
    ///
    /// # Example
    ///
    /// ```
    /// use mlc_lex::{Lexer, ScanState, TokenKind};
    /// use mlc_util::Handler;
    ///
    /// let mut handler = Handler::new();
    /// let mut lexer = Lexer::new("var x", 1, ScanState::Normal, &mut handler);
    ///
    /// assert_eq!(lexer.next_token().map(|t| t.kind), Some(TokenKind::Keyword));
    /// assert_eq!(lexer.next_token().map(|t| t.kind), Some(TokenKind::Identifier));
    /// assert_eq!(lexer.next_token(), None);
    /// ```
    pub fn new(source: &'a str, line: u32, state: ScanState, handler: &'a mut Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            line,
            state,
            token_start: 0,
            token_start_column: 1,
        }
    }

    /// Returns the next token on the line, or `None` once the line is
    /// exhausted.
    ///
    /// Leading spaces are skipped. Comment text is consumed without
    /// producing tokens; if the line ends inside a comment, [`state`]
    /// reports [`ScanState::InBlockComment`].
    ///
    /// [`state`]: Lexer::state
    pub fn next_token(&mut self) -> Option<Token> {
        loop {
            if self.state == ScanState::InBlockComment && !self.skip_block_comment() {
                return None;
            }

            self.cursor.skip_spaces();
            if self.cursor.is_at_end() {
                return None;
            }

            self.token_start = self.cursor.position();
            self.token_start_column = self.cursor.column();

            let kind = match classify(self.cursor.current_char()) {
                CharClass::Digit => Some(self.lex_number()),
                CharClass::Letter => Some(self.lex_identifier()),
                CharClass::Separator => self.lex_separator(),
                CharClass::Invalid => Some(self.lex_invalid()),
            };

            // `None` means a comment was opened; keep going on this line.
            if let Some(kind) = kind {
                return Some(Token::new(kind, self.lexeme(), self.token_span()));
            }
        }
    }

    /// Consumes an unrecognized character as an error token.
    fn lex_invalid(&mut self) -> TokenKind {
        self.cursor.advance();
        self.report_undefined(DiagnosticKind::UnrecognizedCharacter);
        TokenKind::Error
    }

    /// Records `'<lexeme>' undefined identifier` at the current token.
    pub(super) fn report_undefined(&mut self, kind: DiagnosticKind) {
        let message = format!("'{}' undefined identifier", self.lexeme());
        self.report_error(kind, message);
    }

    /// Reports a lexical error at the current token position.
    pub fn report_error(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        let span = self.token_span();
        self.handler.record(kind, span, message);
    }

    /// Text of the current token so far.
    pub(super) fn lexeme(&self) -> &'a str {
        self.cursor.slice_from(self.token_start)
    }

    fn token_span(&self) -> Span {
        Span::new(self.line, self.token_start_column)
    }

    /// Returns the line number being scanned.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current automaton mode.
    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Consumes the lexer, returning the mode to start the next line in.
    pub fn finish(self) -> ScanState {
        self.state
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

/// Scans one whole line.
///
/// Returns the tokens in source order together with the mode the next line
/// must be scanned in.
///
/// # Example
///
/// ```
/// use mlc_lex::{scan_line, ScanState};
/// use mlc_util::Handler;
///
/// let mut handler = Handler::new();
/// let (tokens, state) = scan_line("x := 1 /* note", 1, ScanState::Normal, &mut handler);
///
/// let lexemes: Vec<_> = tokens.iter().map(|t| t.lexeme.as_str()).collect();
/// assert_eq!(lexemes, vec!["x", ":", "=", "1"]);
/// assert_eq!(state, ScanState::InBlockComment);
/// ```
pub fn scan_line(
    source: &str,
    line: u32,
    state: ScanState,
    handler: &mut Handler,
) -> (Vec<Token>, ScanState) {
    let mut lexer = Lexer::new(source, line, state, handler);
    let tokens = lexer.by_ref().collect();
    (tokens, lexer.finish())
}
