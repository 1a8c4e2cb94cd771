//! Comment lexing.
//!
//! This module handles skipping block comments. Comments do not nest and may
//! span lines; the closing `*/` must appear on a single line.

use crate::lexer::ScanState;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Enters comment mode after `/*` has been consumed.
    pub(super) fn open_block_comment(&mut self) {
        tracing::trace!(line = self.line, column = self.token_start_column, "block comment opened");
        self.state = ScanState::InBlockComment;
    }

    /// Skips comment text up to and including the next `*/`.
    ///
    /// Returns `true` if the comment closed on this line, in which case the
    /// lexer is back in [`ScanState::Normal`]. Otherwise the rest of the
    /// line is consumed and `false` is returned.
    pub fn skip_block_comment(&mut self) -> bool {
        while !self.cursor.is_at_end() {
            if self.cursor.current_char() == '*' && self.cursor.peek_char(1) == '/' {
                self.cursor.advance();
                self.cursor.advance();
                self.state = ScanState::Normal;
                tracing::trace!(line = self.line, column = self.cursor.column(), "block comment closed");
                return true;
            }
            self.cursor.advance();
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use crate::{scan_line, ScanState, Token};
    use mlc_util::Handler;

    fn scan(source: &str, state: ScanState) -> (Vec<String>, ScanState, Handler) {
        let mut handler = Handler::new();
        let (tokens, state) = scan_line(source, 1, state, &mut handler);
        let lexemes = tokens.into_iter().map(|t: Token| t.lexeme).collect();
        (lexemes, state, handler)
    }

    #[test]
    fn test_comment_on_one_line() {
        let (lexemes, state, _) = scan("a /* note */ b", ScanState::Normal);
        assert_eq!(lexemes, vec!["a", "b"]);
        assert_eq!(state, ScanState::Normal);
    }

    #[test]
    fn test_comment_left_open() {
        let (lexemes, state, _) = scan("a /* note", ScanState::Normal);
        assert_eq!(lexemes, vec!["a"]);
        assert_eq!(state, ScanState::InBlockComment);
    }

    #[test]
    fn test_comment_closed_on_later_line() {
        let (lexemes, state, _) = scan("still comment */ c", ScanState::InBlockComment);
        assert_eq!(lexemes, vec!["c"]);
        assert_eq!(state, ScanState::Normal);
    }

    #[test]
    fn test_whole_line_inside_comment() {
        let (lexemes, state, handler) = scan("x := # 1F", ScanState::InBlockComment);
        assert!(lexemes.is_empty());
        assert_eq!(state, ScanState::InBlockComment);
        assert!(!handler.has_errors());
    }

    #[test]
    fn test_comments_do_not_nest() {
        let (lexemes, state, _) = scan("/* a /* b */ c */", ScanState::Normal);
        assert_eq!(lexemes, vec!["c", "*", "/"]);
        assert_eq!(state, ScanState::Normal);
    }

    #[test]
    fn test_slash_star_slash_stays_open() {
        let (lexemes, state, _) = scan("/*/", ScanState::Normal);
        assert!(lexemes.is_empty());
        assert_eq!(state, ScanState::InBlockComment);
    }

    #[test]
    fn test_closing_split_across_lines_does_not_close() {
        let mut handler = Handler::new();
        let (_, state) = scan_line("/* a *", 1, ScanState::Normal, &mut handler);
        assert_eq!(state, ScanState::InBlockComment);
        let (tokens, state) = scan_line("/ b", 2, state, &mut handler);
        assert!(tokens.is_empty());
        assert_eq!(state, ScanState::InBlockComment);
    }

    #[test]
    fn test_several_comments_on_one_line() {
        let (lexemes, state, _) = scan("/*1*/ a /*2*/ b /*3", ScanState::Normal);
        assert_eq!(lexemes, vec!["a", "b"]);
        assert_eq!(state, ScanState::InBlockComment);
    }

    #[test]
    fn test_token_directly_after_close() {
        let (lexemes, _, _) = scan("*/x", ScanState::InBlockComment);
        assert_eq!(lexemes, vec!["x"]);
    }
}
