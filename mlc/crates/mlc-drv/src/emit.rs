//! Artifact writers.
//!
//! The result artifact is consumed by a downstream parser that splits each
//! line on whitespace, so every item is followed by a single space.

use std::io::{self, Write};

use mlc_util::TableKind;

use crate::Analysis;

/// Writes the result artifact: number table, identifier table, then the
/// token references, one line each.
///
/// # Example
///
/// ```
/// let analysis = mlc_drv::analyze_source("x := 10").unwrap();
/// let mut out = Vec::new();
/// mlc_drv::emit::write_result(&analysis, &mut out).unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), "10 \nx \n1,4,0 1,2,11 1,2,2 1,3,0 \n");
/// ```
pub fn write_result<W: Write>(analysis: &Analysis, mut out: W) -> io::Result<()> {
    let tables = analysis.tables();

    for number in tables.numbers().iter() {
        write!(out, "{number} ")?;
    }
    writeln!(out)?;

    for ident in tables.identifiers().iter() {
        write!(out, "{ident} ")?;
    }
    writeln!(out)?;

    for token in analysis.token_refs() {
        write!(out, "{token} ")?;
    }
    writeln!(out)?;

    out.flush()
}

/// Writes the human-readable log artifact.
pub fn write_log<W: Write>(analysis: &Analysis, mut out: W) -> io::Result<()> {
    let tables = analysis.tables();

    writeln!(out, "[Identificators]")?;
    for (index, ident) in tables.identifiers().iter().enumerate() {
        writeln!(out, "{index}: {ident}")?;
    }

    writeln!(out)?;
    writeln!(out, "[Numbers]")?;
    for (index, number) in tables.numbers().iter().enumerate() {
        writeln!(out, "{index}: {number}")?;
    }

    writeln!(out)?;
    writeln!(out, "[Tokens]")?;
    for token in analysis.token_refs() {
        let lexeme = tables
            .try_resolve(token.kind, token.index)
            .map_err(io::Error::other)?;
        writeln!(out, "({},{}) : {lexeme}", token.kind.code(), token.index)?;
    }

    out.flush()
}

/// Counts the references into each table, in [`TableKind::ALL`] order.
pub fn table_usage(analysis: &Analysis) -> [(TableKind, usize); 4] {
    TableKind::ALL.map(|kind| {
        let count = analysis
            .token_refs()
            .iter()
            .filter(|token| token.kind == kind)
            .count();
        (kind, count)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze_source;

    fn result_text(source: &str) -> String {
        let analysis = analyze_source(source).unwrap();
        let mut out = Vec::new();
        write_result(&analysis, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn log_text(source: &str) -> String {
        let analysis = analyze_source(source).unwrap();
        let mut out = Vec::new();
        write_log(&analysis, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_empty_source() {
        assert_eq!(result_text(""), "\n\n\n");
        assert_eq!(log_text(""), "[Identificators]\n\n[Numbers]\n\n[Tokens]\n");
    }

    #[test]
    fn test_result_lines() {
        let text = result_text("var a, b: int;\nb := 5 + a + 5");
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "5 ");
        assert_eq!(lines[1], "a b ");
        assert!(lines[2].starts_with("1,1,3 1,4,0 1,2,15 1,4,1 1,2,11 1,1,16 1,2,9 "));
        assert!(lines[2].ends_with("2,3,0 2,2,0 2,4,0 2,2,0 2,3,0 "));
    }

    #[test]
    fn test_result_splits_on_whitespace() {
        let text = result_text("begin x end");
        let triples: Vec<Vec<usize>> = text
            .lines()
            .nth(2)
            .unwrap()
            .split_whitespace()
            .map(|t| t.split(',').map(|n| n.parse().unwrap()).collect())
            .collect();
        assert_eq!(triples, vec![vec![1, 1, 1], vec![1, 4, 0], vec![1, 1, 2]]);
    }

    #[test]
    fn test_log_sections() {
        let log = log_text("x := 1.5;\ny := x");
        assert_eq!(
            log,
            "[Identificators]\n\
             0: x\n\
             1: y\n\
             \n\
             [Numbers]\n\
             0: 1.5\n\
             \n\
             [Tokens]\n\
             (4,0) : x\n\
             (2,11) : :\n\
             (2,2) : =\n\
             (3,0) : 1.5\n\
             (2,9) : ;\n\
             (4,1) : y\n\
             (2,11) : :\n\
             (2,2) : =\n\
             (4,0) : x\n"
        );
    }

    #[test]
    fn test_table_usage() {
        let analysis = analyze_source("begin x := 1 end").unwrap();
        assert_eq!(
            table_usage(&analysis),
            [
                (TableKind::Keyword, 2),
                (TableKind::Separator, 2),
                (TableKind::Number, 1),
                (TableKind::Identifier, 1),
            ]
        );
    }
}
