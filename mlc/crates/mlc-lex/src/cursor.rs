//! Character cursor for traversing one source line.
//!
//! Source is fed to the lexer a line at a time, so the cursor only tracks a
//! byte position and a 1-based column. It handles UTF-8 correctly: anything
//! outside ASCII is still a single character, it just never classifies as a
//! letter or digit.

/// A cursor over a single line of source text.
///
/// # Example
///
/// ```
/// use mlc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("var x");
///
/// assert_eq!(cursor.current_char(), 'v');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), 'a');
/// assert_eq!(cursor.column(), 2);
/// ```
pub struct Cursor<'a> {
    /// The line being traversed.
    source: &'a str,

    /// Current byte position in the line.
    position: usize,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            column: 1,
        }
    }

    /// Returns the current character, or `'\0'` at the end of the line.
    ///
    /// # Example
    ///
    /// ```
    /// use mlc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("a");
    /// assert_eq!(cursor.current_char(), 'a');
    /// cursor.advance();
    /// assert_eq!(cursor.current_char(), '\0');
    /// ```
    #[inline]
    pub fn current_char(&self) -> char {
        self.peek_char(0)
    }

    /// Returns the character `offset` characters ahead of the current one.
    ///
    /// # Example
    ///
    /// ```
    /// use mlc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("*/");
    /// assert_eq!(cursor.peek_char(1), '/');
    /// assert_eq!(cursor.peek_char(2), '\0');
    /// ```
    pub fn peek_char(&self, offset: usize) -> char {
        if self.position >= self.source.len() {
            return '\0';
        }

        // Fast path for ASCII (most common case)
        if offset == 0 {
            let b = self.source.as_bytes()[self.position];
            if b < 128 {
                return b as char;
            }
        }

        self.source[self.position..]
            .chars()
            .nth(offset)
            .unwrap_or('\0')
    }

    /// Advances the cursor to the next character.
    ///
    /// Does nothing if already at the end.
    #[inline]
    pub fn advance(&mut self) {
        if let Some(c) = self.source[self.position..].chars().next() {
            self.position += c.len_utf8();
            self.column += 1;
        }
    }

    /// Steps back over the previously consumed character.
    ///
    /// Does nothing at the start of the line.
    ///
    /// # Example
    ///
    /// ```
    /// use mlc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("e+");
    /// cursor.advance();
    /// cursor.advance();
    /// cursor.retreat();
    /// assert_eq!(cursor.current_char(), '+');
    /// assert_eq!(cursor.column(), 2);
    /// ```
    pub fn retreat(&mut self) {
        if let Some(c) = self.source[..self.position].chars().next_back() {
            self.position -= c.len_utf8();
            self.column -= 1;
        }
    }

    /// Matches and consumes the expected character if present.
    ///
    /// # Example
    ///
    /// ```
    /// use mlc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("=>");
    /// assert!(cursor.match_char('='));
    /// assert!(!cursor.match_char('='));
    /// assert_eq!(cursor.current_char(), '>');
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if !self.is_at_end() && self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Skips literal space characters. Tabs are left in place.
    pub fn skip_spaces(&mut self) {
        while self.current_char() == ' ' {
            self.advance();
        }
    }

    /// Returns true if the whole line has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte position in the line.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the text from `start` up to the current position.
    ///
    /// # Example
    ///
    /// ```
    /// use mlc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("begin end");
    /// let start = cursor.position();
    /// for _ in 0..5 {
    ///     cursor.advance();
    /// }
    /// assert_eq!(cursor.slice_from(start), "begin");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }
}
