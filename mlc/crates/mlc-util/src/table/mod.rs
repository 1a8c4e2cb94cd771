//! Symbol tables referenced by the analyzer output.
//!
//! Every emitted token is a reference `(table, index)` into one of four
//! tables. Keywords and separators are fixed lists; numbers and identifiers
//! are interned as they are first seen.
//!
//! # Examples
//!
//! ```
//! use mlc_util::table::{SymbolTables, TableKind};
//!
//! let mut tables = SymbolTables::new();
//! assert_eq!(tables.lookup_or_insert(TableKind::Separator, "<=").unwrap(), 12);
//! assert_eq!(tables.lookup_or_insert(TableKind::Number, "42").unwrap(), 0);
//! assert_eq!(tables.resolve(TableKind::Number, 0), Some("42"));
//! ```

mod symbol_table;

pub use symbol_table::{FixedTable, SymbolTable};

use std::fmt;

use crate::error::{TableError, TableResult};

/// Reserved words, in table order
pub const KEYWORDS: [&str; 22] = [
    "program", "begin", "end", "var", "true", "false", "ass", "if", "else", "then", "for", "to",
    "do", "while", "read", "write", "int", "float", "bool", "and", "or", "not",
];

/// Separators, in table order
pub const SEPARATORS: [&str; 16] = [
    "+", "-", "=", "<", ">", "*", "/", "(", ")", ";", ".", ":", "<=", ">=", "<>", ",",
];

/// Which table a token reference points into
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TableKind {
    /// Reserved words
    Keyword = 1,
    /// Operators and punctuation
    Separator = 2,
    /// Numeric literals
    Number = 3,
    /// User identifiers
    Identifier = 4,
}

impl TableKind {
    /// All tables, in code order
    pub const ALL: [TableKind; 4] = [
        TableKind::Keyword,
        TableKind::Separator,
        TableKind::Number,
        TableKind::Identifier,
    ];

    /// Numeric code used in the analyzer output
    ///
    /// # Examples
    ///
    /// ```
    /// use mlc_util::table::TableKind;
    ///
    /// assert_eq!(TableKind::Keyword.code(), 1);
    /// assert_eq!(TableKind::Identifier.code(), 4);
    /// ```
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Lowercase name of the table
    pub const fn name(self) -> &'static str {
        match self {
            TableKind::Keyword => "keyword",
            TableKind::Separator => "separator",
            TableKind::Number => "number",
            TableKind::Identifier => "identifier",
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The four tables of one scan run
#[derive(Clone, Debug)]
pub struct SymbolTables {
    keywords: FixedTable,
    separators: FixedTable,
    numbers: SymbolTable,
    identifiers: SymbolTable,
}

impl SymbolTables {
    /// Fixed tables populated, dynamic tables empty
    pub fn new() -> Self {
        Self {
            keywords: FixedTable::new(&KEYWORDS),
            separators: FixedTable::new(&SEPARATORS),
            numbers: SymbolTable::new(),
            identifiers: SymbolTable::new(),
        }
    }

    /// Index of `lexeme` in the `kind` table
    ///
    /// Dynamic tables append the lexeme on first sight. Fixed tables are
    /// read-only, so a miss there is an error.
    pub fn lookup_or_insert(&mut self, kind: TableKind, lexeme: &str) -> TableResult<usize> {
        match kind {
            TableKind::Keyword => Self::fixed_lookup(&self.keywords, kind, lexeme),
            TableKind::Separator => Self::fixed_lookup(&self.separators, kind, lexeme),
            TableKind::Number => Ok(self.numbers.lookup_or_insert(lexeme)),
            TableKind::Identifier => Ok(self.identifiers.lookup_or_insert(lexeme)),
        }
    }

    fn fixed_lookup(table: &FixedTable, kind: TableKind, lexeme: &str) -> TableResult<usize> {
        table.index_of(lexeme).ok_or_else(|| TableError::UnknownEntry {
            kind,
            lexeme: lexeme.to_owned(),
        })
    }

    /// Index of `lexeme` in the `kind` table without inserting
    pub fn index_of(&self, kind: TableKind, lexeme: &str) -> Option<usize> {
        match kind {
            TableKind::Keyword => self.keywords.index_of(lexeme),
            TableKind::Separator => self.separators.index_of(lexeme),
            TableKind::Number => self.numbers.index_of(lexeme),
            TableKind::Identifier => self.identifiers.index_of(lexeme),
        }
    }

    /// Lexeme stored at `index` of the `kind` table
    pub fn resolve(&self, kind: TableKind, index: usize) -> Option<&str> {
        match kind {
            TableKind::Keyword => self.keywords.get(index),
            TableKind::Separator => self.separators.get(index),
            TableKind::Number => self.numbers.get(index),
            TableKind::Identifier => self.identifiers.get(index),
        }
    }

    /// Like [`resolve`](Self::resolve), but a miss is an error
    pub fn try_resolve(&self, kind: TableKind, index: usize) -> TableResult<&str> {
        self.resolve(kind, index)
            .ok_or(TableError::IndexOutOfRange { kind, index })
    }

    /// The keyword table
    pub fn keywords(&self) -> &FixedTable {
        &self.keywords
    }

    /// The separator table
    pub fn separators(&self) -> &FixedTable {
        &self.separators
    }

    /// The number table
    pub fn numbers(&self) -> &SymbolTable {
        &self.numbers
    }

    /// The identifier table
    pub fn identifiers(&self) -> &SymbolTable {
        &self.identifiers
    }
}

impl Default for SymbolTables {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_order() {
        let tables = SymbolTables::new();
        assert_eq!(tables.index_of(TableKind::Keyword, "program"), Some(0));
        assert_eq!(tables.index_of(TableKind::Keyword, "begin"), Some(1));
        assert_eq!(tables.index_of(TableKind::Keyword, "not"), Some(21));
        assert_eq!(tables.keywords().len(), 22);
    }

    #[test]
    fn test_separator_order() {
        let tables = SymbolTables::new();
        assert_eq!(tables.index_of(TableKind::Separator, "+"), Some(0));
        assert_eq!(tables.index_of(TableKind::Separator, "."), Some(10));
        assert_eq!(tables.index_of(TableKind::Separator, "<="), Some(12));
        assert_eq!(tables.index_of(TableKind::Separator, ">="), Some(13));
        assert_eq!(tables.index_of(TableKind::Separator, "<>"), Some(14));
        assert_eq!(tables.index_of(TableKind::Separator, ","), Some(15));
        assert_eq!(tables.separators().len(), 16);
    }

    #[test]
    fn test_fixed_tables_are_read_only() {
        let mut tables = SymbolTables::new();
        let err = tables
            .lookup_or_insert(TableKind::Keyword, "x")
            .unwrap_err();
        assert_eq!(
            err,
            TableError::UnknownEntry {
                kind: TableKind::Keyword,
                lexeme: "x".to_string()
            }
        );
        assert_eq!(tables.keywords().len(), 22);
    }

    #[test]
    fn test_dynamic_tables_are_independent() {
        let mut tables = SymbolTables::new();
        assert_eq!(tables.lookup_or_insert(TableKind::Number, "1").unwrap(), 0);
        assert_eq!(tables.lookup_or_insert(TableKind::Identifier, "a").unwrap(), 0);
        assert_eq!(tables.lookup_or_insert(TableKind::Number, "2").unwrap(), 1);
        assert_eq!(tables.lookup_or_insert(TableKind::Number, "1").unwrap(), 0);
        assert_eq!(tables.numbers().len(), 2);
        assert_eq!(tables.identifiers().len(), 1);
    }

    #[test]
    fn test_resolve() {
        let mut tables = SymbolTables::new();
        tables.lookup_or_insert(TableKind::Identifier, "count").unwrap();
        assert_eq!(tables.resolve(TableKind::Keyword, 2), Some("end"));
        assert_eq!(tables.resolve(TableKind::Separator, 14), Some("<>"));
        assert_eq!(tables.resolve(TableKind::Identifier, 0), Some("count"));
        assert_eq!(tables.resolve(TableKind::Identifier, 1), None);
        assert_eq!(
            tables.try_resolve(TableKind::Number, 0),
            Err(TableError::IndexOutOfRange {
                kind: TableKind::Number,
                index: 0
            })
        );
    }
}
