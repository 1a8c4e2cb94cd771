//! Core error types for mlc-util crate
//!
//! This module defines error types used throughout the util crate.

use thiserror::Error;

use crate::table::TableKind;

/// Error type for symbol table operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    /// A lookup in a fixed table did not find the lexeme
    #[error("'{lexeme}' is not an entry of the {kind} table")]
    UnknownEntry {
        /// The table that was searched
        kind: TableKind,
        /// The lexeme that was looked up
        lexeme: String,
    },

    /// An index does not refer to any entry of the table
    #[error("index {index} is out of range for the {kind} table")]
    IndexOutOfRange {
        /// The table that was indexed
        kind: TableKind,
        /// The offending index
        index: usize,
    },
}

/// Result type alias for table operations
pub type TableResult<T> = std::result::Result<T, TableError>;
