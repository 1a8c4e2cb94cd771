//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Lexer struct, scan state and dispatch
//! - `identifier` - Identifier and keyword lexing
//! - `number` - Number literal lexing
//! - `operator` - Separator lexing
//! - `comment` - Block comment skipping

mod comment;
mod core;
mod identifier;
mod number;
mod operator;

pub use self::core::{scan_line, Lexer, ScanState};
