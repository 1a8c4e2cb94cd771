//! mlc-lex - Lexical Analyzer for the MLC Teaching Language
//!
//! This crate turns MLC source text into tokens, one line at a time. The
//! only state carried between lines is the [`ScanState`], which records
//! whether the previous line ended inside a block comment.
//!
//! # Example Usage
//!
//! ```
//! use mlc_util::Handler;
//! use mlc_lex::{scan_line, ScanState, TokenKind};
//!
//! let mut handler = Handler::new();
//! let mut state = ScanState::Normal;
//!
//! for (index, line) in "program p; /* multi\nline */ begin end.".lines().enumerate() {
//!     let (tokens, next) = scan_line(line, index as u32 + 1, state, &mut handler);
//!     for token in &tokens {
//!         println!("{token}");
//!     }
//!     state = next;
//! }
//!
//! assert!(!handler.has_errors());
//! assert_eq!(state, ScanState::Normal);
//! ```
//!
//! # Module Structure
//!
//! - [`char_class`] - character classification
//! - [`cursor`] - character cursor over a single line
//! - [`lexer`] - the per-line lexer and the cross-line [`ScanState`]
//! - [`number_format`] - the five numeric literal grammars
//! - [`token`] - token type definitions
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `program begin end var true false ass if else then for to do while read
//! write int float bool and or not`. Matching is case-sensitive.
//!
//! ## Identifiers
//!
//! An ASCII letter followed by ASCII letters or digits.
//!
//! ## Numbers
//!
//! - **Binary**: `101B`
//! - **Octal**: `17O`
//! - **Decimal**: `42`, `42D`
//! - **Hexadecimal**: `0FFH`, `9ach`
//! - **Float**: `3.14`, `.5`, `1E5`, `2.5e-3`
//!
//! Suffixes are case-insensitive.
//!
//! ## Separators
//!
//! `<> = < <= > >= + - * / ; , : ( ) .`
//!
//! ## Comments
//!
//! `/* ... */`, possibly spanning several lines. Comments do not nest.
//!
//! # Error Handling
//!
//! Lexical errors are reported through [`mlc_util::Handler`] and never stop
//! the scan:
//!
//! - Characters that start no token become [`TokenKind::Error`] tokens
//! - Numbers that match none of the grammars stay [`TokenKind::Number`]
//!   tokens but are reported

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod char_class;
pub mod cursor;
pub mod lexer;
pub mod number_format;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use char_class::{classify, CharClass};
pub use cursor::Cursor;
pub use lexer::{scan_line, Lexer, ScanState};
pub use number_format::{classify_number, is_valid_number, NumberFormat};
pub use token::{keyword_from_ident, Token, TokenKind};
