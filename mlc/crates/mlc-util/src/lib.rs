//! mlc-util - Core Utilities and Foundation Types
//!
//! Shared building blocks for the MLC front end:
//!
//! - [`span`] - line/column positions attached to tokens and diagnostics
//! - [`diagnostic`] - the error collector ([`Handler`]) and diagnostic records
//! - [`table`] - the four symbol tables referenced by the analyzer output
//! - [`error`] - error types for table operations
//!
//! # Example
//!
//! ```
//! use mlc_util::{Handler, DiagnosticKind, Span, SymbolTables, TableKind};
//!
//! let mut tables = SymbolTables::new();
//! assert_eq!(tables.lookup_or_insert(TableKind::Identifier, "x").unwrap(), 0);
//! assert_eq!(tables.lookup_or_insert(TableKind::Keyword, "begin").unwrap(), 1);
//!
//! let mut handler = Handler::new();
//! handler.record(DiagnosticKind::UnrecognizedCharacter, Span::new(1, 3), "'#' undefined identifier");
//! assert!(handler.has_errors());
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;
pub mod table;

pub use diagnostic::{Diagnostic, DiagnosticCode, DiagnosticKind, Handler};
pub use error::{TableError, TableResult};
pub use span::Span;
pub use table::{FixedTable, SymbolTable, SymbolTables, TableKind, KEYWORDS, SEPARATORS};
