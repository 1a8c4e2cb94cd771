//! Fixed and dynamic symbol tables.
//!
//! - [`FixedTable`] - read-only list set up once (keywords, separators)
//! - [`SymbolTable`] - append-only interner for numbers and identifiers
//!
//! Both hand out plain positional indices. An index, once assigned, never
//! changes.

use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;

/// A read-only table whose index is the position in a static list
#[derive(Clone, Copy, Debug)]
pub struct FixedTable {
    entries: &'static [&'static str],
}

impl FixedTable {
    /// Wrap a static list of entries
    pub const fn new(entries: &'static [&'static str]) -> Self {
        Self { entries }
    }

    /// Position of `lexeme` in the table
    pub fn index_of(&self, lexeme: &str) -> Option<usize> {
        self.entries.iter().position(|entry| *entry == lexeme)
    }

    /// Entry at `index`
    pub fn get(&self, index: usize) -> Option<&'static str> {
        self.entries.get(index).copied()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in index order
    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().copied()
    }
}

/// An append-only table of unique strings
///
/// Lookups hash the lexeme; insertion order is kept alongside so the
/// position of an entry is its index.
///
/// # Examples
///
/// ```
/// use mlc_util::table::SymbolTable;
///
/// let mut table = SymbolTable::new();
/// assert_eq!(table.lookup_or_insert("x"), 0);
/// assert_eq!(table.lookup_or_insert("y"), 1);
/// assert_eq!(table.lookup_or_insert("x"), 0);
/// assert_eq!(table.iter().collect::<Vec<_>>(), vec!["x", "y"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SymbolTable {
    entries: IndexSet<String, FxBuildHasher>,
}

impl SymbolTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of `lexeme`, appending it first if it was never seen
    pub fn lookup_or_insert(&mut self, lexeme: &str) -> usize {
        if let Some(index) = self.entries.get_index_of(lexeme) {
            return index;
        }
        self.entries.insert_full(lexeme.to_owned()).0
    }

    /// Index of `lexeme` without inserting it
    pub fn index_of(&self, lexeme: &str) -> Option<usize> {
        self.entries.get_index_of(lexeme)
    }

    /// Entry at `index`
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get_index(index).map(String::as_str)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been interned yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(String::as_str)
    }
}
