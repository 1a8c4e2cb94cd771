//! Character classification for the MLC lexer.
//!
//! The lexer dispatches on the class of the first character of a token.
//! Only ASCII letters and digits are recognized; everything else that is not
//! a separator character is invalid.

/// The class of a source character
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// ASCII letter: `a-z`, `A-Z`
    Letter,
    /// ASCII digit: `0-9`
    Digit,
    /// One of `+ - = < > * / ( ) ; . : ,`
    Separator,
    /// Anything else
    Invalid,
}

/// Classifies a character.
///
/// # Example
///
/// ```
/// use mlc_lex::char_class::{classify, CharClass};
///
/// assert_eq!(classify('q'), CharClass::Letter);
/// assert_eq!(classify('7'), CharClass::Digit);
/// assert_eq!(classify(';'), CharClass::Separator);
/// assert_eq!(classify('#'), CharClass::Invalid);
/// assert_eq!(classify('α'), CharClass::Invalid);
/// ```
pub fn classify(c: char) -> CharClass {
    if c.is_ascii_digit() {
        CharClass::Digit
    } else if c.is_ascii_alphabetic() {
        CharClass::Letter
    } else if is_separator(c) {
        CharClass::Separator
    } else {
        CharClass::Invalid
    }
}

/// Checks if a character can start a separator.
pub fn is_separator(c: char) -> bool {
    matches!(
        c,
        '+' | '-' | '=' | '<' | '>' | '/' | '*' | ';' | '.' | '(' | ')' | ':' | ','
    )
}

/// Checks if a character is a hexadecimal letter (`A-F`, `a-f`).
///
/// # Example
///
/// ```
/// use mlc_lex::char_class::is_hex_letter;
///
/// assert!(is_hex_letter('b'));
/// assert!(is_hex_letter('E'));
/// assert!(!is_hex_letter('g'));
/// assert!(!is_hex_letter('1'));
/// ```
#[inline]
pub fn is_hex_letter(c: char) -> bool {
    matches!(c, 'A'..='F' | 'a'..='f')
}

/// Checks if a character may continue a numeric lexeme: a digit, a hex
/// letter or a dot.
#[inline]
pub fn is_number_continue(c: char) -> bool {
    c.is_ascii_digit() || is_hex_letter(c) || c == '.'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_separator_char() {
        for c in "+-=<>*/();.:,".chars() {
            assert_eq!(classify(c), CharClass::Separator, "{c:?}");
        }
    }

    #[test]
    fn test_whitespace_is_invalid() {
        assert_eq!(classify(' '), CharClass::Invalid);
        assert_eq!(classify('\t'), CharClass::Invalid);
        assert_eq!(classify('\r'), CharClass::Invalid);
    }

    #[test]
    fn test_common_non_separators() {
        for c in "#$%&!?@[]{}\"'_~^|\\".chars() {
            assert_eq!(classify(c), CharClass::Invalid, "{c:?}");
        }
    }

    #[test]
    fn test_number_continue() {
        assert!(is_number_continue('0'));
        assert!(is_number_continue('f'));
        assert!(is_number_continue('.'));
        assert!(!is_number_continue('h'));
        assert!(!is_number_continue('o'));
        assert!(!is_number_continue('+'));
    }
}
