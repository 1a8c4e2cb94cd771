//! Span module - Source location tracking.
//!
//! Source is scanned one line at a time, so a location is just a 1-based
//! line and column.
//!
//! # Examples
//!
//! ```
//! use mlc_util::span::Span;
//!
//! let span = Span::new(3, 7);
//! assert_eq!(span.to_string(), "[3,7]");
//! ```

use std::fmt;

/// Source location of a token or diagnostic
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
}

impl Span {
    /// Dummy span for testing
    pub const DUMMY: Span = Span { line: 0, column: 0 };

    /// Create a new span
    ///
    /// # Examples
    ///
    /// ```
    /// use mlc_util::span::Span;
    ///
    /// let span = Span::new(1, 5);
    /// assert_eq!(span.line, 1);
    /// assert_eq!(span.column, 5);
    /// ```
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.line, self.column)
    }
}
