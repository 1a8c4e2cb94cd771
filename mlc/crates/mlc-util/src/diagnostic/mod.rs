//! Diagnostic module - Error reporting infrastructure.
//!
//! Lexical errors never stop a scan. They are recorded in a [`Handler`] and
//! the driver decides what to do once the whole input has been read.
//!
//! # Examples
//!
//! ```
//! use mlc_util::diagnostic::{DiagnosticKind, Handler};
//! use mlc_util::Span;
//!
//! let mut handler = Handler::new();
//! handler.record(DiagnosticKind::MalformedNumericLiteral, Span::new(2, 5), "'1F' undefined identifier");
//!
//! assert!(handler.has_errors());
//! assert_eq!(
//!     handler.diagnostics()[0].to_string(),
//!     "Error at [2,5]: '1F' undefined identifier"
//! );
//! ```

mod codes;

pub use codes::DiagnosticCode;

use crate::Span;
use std::fmt;

/// The kinds of lexical error the scanner can report
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// A numeric lexeme that matches none of the literal grammars
    MalformedNumericLiteral,
    /// A character that is neither letter, digit nor separator
    UnrecognizedCharacter,
}

impl DiagnosticKind {
    /// Returns the diagnostic code for this kind
    ///
    /// # Examples
    ///
    /// ```
    /// use mlc_util::diagnostic::{DiagnosticCode, DiagnosticKind};
    ///
    /// assert_eq!(
    ///     DiagnosticKind::UnrecognizedCharacter.code(),
    ///     DiagnosticCode::E_LEXER_UNEXPECTED_CHAR
    /// );
    /// ```
    pub const fn code(self) -> DiagnosticCode {
        match self {
            DiagnosticKind::MalformedNumericLiteral => DiagnosticCode::E_LEXER_INVALID_NUMBER,
            DiagnosticKind::UnrecognizedCharacter => DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
        }
    }
}

/// A positioned, non-fatal error message
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// What went wrong
    pub kind: DiagnosticKind,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(kind: DiagnosticKind, span: Span, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            span,
        }
    }

    /// Returns the diagnostic code of this diagnostic's kind
    #[inline]
    pub fn code(&self) -> DiagnosticCode {
        self.kind.code()
    }

    /// Line number the diagnostic points at
    #[inline]
    pub fn line(&self) -> u32 {
        self.span.line
    }

    /// Column number the diagnostic points at
    #[inline]
    pub fn column(&self) -> u32 {
        self.span.column
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error at {}: {}", self.span, self.message)
    }
}

/// Handler for collecting diagnostics
///
/// Recording is append-only: diagnostics are kept in the order they were
/// reported and are never discarded.
///
/// # Examples
///
/// ```
/// use mlc_util::diagnostic::{DiagnosticKind, Handler};
/// use mlc_util::Span;
///
/// let mut handler = Handler::new();
/// assert!(!handler.has_errors());
///
/// handler.record(DiagnosticKind::UnrecognizedCharacter, Span::new(1, 1), "'#' undefined identifier");
/// assert_eq!(handler.error_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Handler {
    /// Collected diagnostics
    diagnostics: Vec<Diagnostic>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    /// Record a diagnostic at the given location
    pub fn record(&mut self, kind: DiagnosticKind, span: Span, message: impl Into<String>) {
        self.emit_diagnostic(Diagnostic::new(kind, span, message));
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Check if any diagnostics have been recorded
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Get the number of recorded diagnostics
    pub fn error_count(&self) -> usize {
        self.diagnostics.len()
    }

    /// Get all diagnostics in reporting order
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Iterate over the diagnostics in reporting order
    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.diagnostics.iter()
    }

    /// Number of recorded diagnostics of the given kind
    pub fn count_of(&self, kind: DiagnosticKind) -> usize {
        self.diagnostics.iter().filter(|d| d.kind == kind).count()
    }
}

impl<'a> IntoIterator for &'a Handler {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
