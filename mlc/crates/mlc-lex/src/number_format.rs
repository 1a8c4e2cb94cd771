//! Numeric literal grammars.
//!
//! The lexer assembles numeric lexemes greedily and checks them here
//! afterwards. A lexeme is valid when it matches at least one of:
//!
//! | format      | grammar                                           |
//! |-------------|---------------------------------------------------|
//! | binary      | `[01]+[Bb]`                                       |
//! | octal       | `[0-7]+[Oo]`                                      |
//! | decimal     | `[0-9]+[Dd]?`                                     |
//! | hexadecimal | `[0-9A-Fa-f]+[Hh]`, body holds a hex letter       |
//! | float       | `\.[0-9]+(exp)?` or `[0-9]+(\.[0-9]+)?(exp)?`     |
//!
//! where `exp` is `[Ee][+-]?[0-9]+`.
//!
//! Each grammar is a hand-written matcher over the lexeme's bytes.

use std::fmt;

use crate::char_class::is_hex_letter;

/// The five literal formats
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumberFormat {
    /// `101B`
    Binary,
    /// `17O`
    Octal,
    /// `42` or `42D`
    Decimal,
    /// `1FH`
    Hexadecimal,
    /// `3.14`, `.5`, `1.5E-3`
    Float,
}

impl NumberFormat {
    /// All formats, in the order [`classify_number`] tries them
    pub const ALL: [NumberFormat; 5] = [
        NumberFormat::Binary,
        NumberFormat::Octal,
        NumberFormat::Decimal,
        NumberFormat::Hexadecimal,
        NumberFormat::Float,
    ];

    /// Checks `lexeme` against this format's grammar.
    ///
    /// # Example
    ///
    /// ```
    /// use mlc_lex::number_format::NumberFormat;
    ///
    /// assert!(NumberFormat::Binary.matches("101B"));
    /// assert!(!NumberFormat::Binary.matches("102B"));
    /// assert!(NumberFormat::Float.matches(".5"));
    /// ```
    pub fn matches(self, lexeme: &str) -> bool {
        let bytes = lexeme.as_bytes();
        match self {
            NumberFormat::Binary => suffixed(bytes, b"Bb", |b| matches!(b, b'0' | b'1')),
            NumberFormat::Octal => suffixed(bytes, b"Oo", |b| matches!(b, b'0'..=b'7')),
            NumberFormat::Decimal => is_decimal(bytes),
            NumberFormat::Hexadecimal => is_hexadecimal(bytes),
            NumberFormat::Float => is_float(bytes),
        }
    }

    /// Lowercase name of the format
    pub const fn name(self) -> &'static str {
        match self {
            NumberFormat::Binary => "binary",
            NumberFormat::Octal => "octal",
            NumberFormat::Decimal => "decimal",
            NumberFormat::Hexadecimal => "hexadecimal",
            NumberFormat::Float => "float",
        }
    }
}

impl fmt::Display for NumberFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns the first format `lexeme` matches, if any.
///
/// Some lexemes match several formats (`101` is decimal and float); the
/// first in [`NumberFormat::ALL`] order wins.
///
/// # Example
///
/// ```
/// use mlc_lex::number_format::{classify_number, NumberFormat};
///
/// assert_eq!(classify_number("777O"), Some(NumberFormat::Octal));
/// assert_eq!(classify_number("12"), Some(NumberFormat::Decimal));
/// assert_eq!(classify_number("9Z"), None);
/// ```
pub fn classify_number(lexeme: &str) -> Option<NumberFormat> {
    NumberFormat::ALL
        .into_iter()
        .find(|format| format.matches(lexeme))
}

/// Returns true if `lexeme` matches any of the five grammars.
pub fn is_valid_number(lexeme: &str) -> bool {
    classify_number(lexeme).is_some()
}

/// Length of the longest prefix of `bytes` whose bytes satisfy `pred`.
fn run_len(bytes: &[u8], pred: impl Fn(u8) -> bool) -> usize {
    bytes.iter().take_while(|&&b| pred(b)).count()
}

/// `body+ suffix`, where suffix is one of `suffixes`.
fn suffixed(bytes: &[u8], suffixes: &[u8], body: impl Fn(u8) -> bool) -> bool {
    match bytes.split_last() {
        Some((last, rest)) => {
            suffixes.contains(last) && !rest.is_empty() && rest.iter().all(|&b| body(b))
        }
        None => false,
    }
}

fn is_decimal(bytes: &[u8]) -> bool {
    let digits = match bytes.last() {
        Some(b'D' | b'd') => &bytes[..bytes.len() - 1],
        _ => bytes,
    };
    !digits.is_empty() && digits.iter().all(u8::is_ascii_digit)
}

fn is_hexadecimal(bytes: &[u8]) -> bool {
    suffixed(bytes, b"Hh", |b| b.is_ascii_hexdigit())
        && bytes[..bytes.len() - 1]
            .iter()
            .any(|&b| is_hex_letter(b as char))
}

fn is_float(bytes: &[u8]) -> bool {
    let mut rest = bytes;

    if let Some(after_dot) = rest.strip_prefix(b".") {
        // `.digits`
        let n = run_len(after_dot, |b| b.is_ascii_digit());
        if n == 0 {
            return false;
        }
        rest = &after_dot[n..];
    } else {
        // `digits(.digits)?`
        let n = run_len(rest, |b| b.is_ascii_digit());
        if n == 0 {
            return false;
        }
        rest = &rest[n..];
        if let Some(after_dot) = rest.strip_prefix(b".") {
            let n = run_len(after_dot, |b| b.is_ascii_digit());
            if n == 0 {
                return false;
            }
            rest = &after_dot[n..];
        }
    }

    rest.is_empty() || is_exponent(rest)
}

/// `[Ee][+-]?[0-9]+`, covering all of `bytes`.
fn is_exponent(bytes: &[u8]) -> bool {
    let Some(rest) = bytes
        .strip_prefix(b"E")
        .or_else(|| bytes.strip_prefix(b"e"))
    else {
        return false;
    };
    let digits = match rest.first() {
        Some(b'+' | b'-') => &rest[1..],
        _ => rest,
    };
    !digits.is_empty() && digits.iter().all(u8::is_ascii_digit)
}
