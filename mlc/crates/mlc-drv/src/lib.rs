//! mlc-drv - Lexical Analyzer Driver
//!
//! Runs the scanner over a whole source file, interns every token into the
//! [`SymbolTables`] and produces the ordered stream of token references the
//! downstream parser consumes.
//!
//! A run is all-or-nothing: if the scan recorded any diagnostic, no artifact
//! is written.
//!
//! # Example
//!
//! ```
//! use mlc_drv::analyze_source;
//! use mlc_util::TableKind;
//!
//! let analysis = analyze_source("begin\n  x := x + 1\nend").unwrap();
//!
//! assert!(!analysis.has_errors());
//! assert_eq!(analysis.tables().identifiers().len(), 1);
//! assert_eq!(analysis.token_refs()[0].kind, TableKind::Keyword);
//! assert_eq!(analysis.token_refs()[1].to_string(), "2,4,0");
//! ```

pub mod config;
pub mod emit;
pub mod error;

use std::fmt;
use std::path::Path;

use mlc_lex::{scan_line, ScanState, Token};
use mlc_util::{Diagnostic, Handler, SymbolTables, TableKind};
use tracing::{debug, info};

pub use config::Config;
pub use error::{DriverError, Result};

/// One entry of the analyzer output: `line,table,index`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TokenRef {
    /// Line the token appeared on (1-based)
    pub line: u32,
    /// Table the token was interned into
    pub kind: TableKind,
    /// Position in that table
    pub index: usize,
}

impl TokenRef {
    /// Creates a token reference.
    pub const fn new(line: u32, kind: TableKind, index: usize) -> Self {
        Self { line, kind, index }
    }
}

impl fmt::Display for TokenRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.line, self.kind.code(), self.index)
    }
}

/// Everything a scan run produced.
#[derive(Debug, Default)]
pub struct Analysis {
    tables: SymbolTables,
    token_refs: Vec<TokenRef>,
    handler: Handler,
    end_state: ScanState,
}

impl Analysis {
    /// The symbol tables after the scan.
    pub fn tables(&self) -> &SymbolTables {
        &self.tables
    }

    /// Token references in source order.
    pub fn token_refs(&self) -> &[TokenRef] {
        &self.token_refs
    }

    /// Diagnostics in reporting order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        self.handler.diagnostics()
    }

    /// Returns true if the scan recorded any diagnostic.
    pub fn has_errors(&self) -> bool {
        self.handler.has_errors()
    }

    /// Fails with [`DriverError::LexicalErrors`] if any diagnostic was
    /// recorded.
    pub fn ensure_clean(&self) -> Result<()> {
        if self.has_errors() {
            return Err(DriverError::LexicalErrors(self.handler.error_count()));
        }
        Ok(())
    }

    /// Mode the scanner was in after the last line.
    ///
    /// [`ScanState::InBlockComment`] means the input ended inside an
    /// unterminated comment, which is not an error.
    pub fn end_state(&self) -> ScanState {
        self.end_state
    }

    fn record(&mut self, token: &Token) -> Result<()> {
        // Error tokens are reported through the handler only.
        let Some(kind) = token.kind.table_kind() else {
            return Ok(());
        };
        let index = self.tables.lookup_or_insert(kind, &token.lexeme)?;
        self.token_refs.push(TokenRef::new(token.line(), kind, index));
        Ok(())
    }
}

/// Scans `source` line by line.
///
/// Lines are numbered from 1. `\n` and `\r\n` both end a line. The block
/// comment state is carried from each line into the next.
pub fn analyze_source(source: &str) -> Result<Analysis> {
    let mut analysis = Analysis::default();
    let mut state = ScanState::Normal;

    for (line, text) in (1u32..).zip(source.lines()) {
        let (tokens, next) = scan_line(text, line, state, &mut analysis.handler);
        debug!(line, tokens = tokens.len(), state = ?next, "scanned line");
        for token in &tokens {
            analysis.record(token)?;
        }
        state = next;
    }

    if state == ScanState::InBlockComment {
        debug!("input ends inside a block comment");
    }
    analysis.end_state = state;

    for diagnostic in analysis.diagnostics() {
        debug!(code = %diagnostic.code(), "{diagnostic}");
    }

    Ok(analysis)
}

/// Reads and scans the file at `path`.
///
/// Bytes that are not valid UTF-8 are decoded as U+FFFD, so they are
/// skipped inside comments and reported as unrecognized characters
/// elsewhere.
pub fn analyze_file(path: &Path) -> Result<Analysis> {
    let bytes = std::fs::read(path).map_err(|e| DriverError::io(path, e))?;
    analyze_source(&String::from_utf8_lossy(&bytes))
}

/// A configured analyzer run.
#[derive(Debug, Clone, Default)]
pub struct Session {
    config: Config,
}

impl Session {
    /// Creates a session with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// The session configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Scans the file at `input`.
    pub fn analyze(&self, input: &Path) -> Result<Analysis> {
        info!(input = %input.display(), "analyzing");
        let analysis = analyze_file(input)?;
        info!(
            tokens = analysis.token_refs().len(),
            identifiers = analysis.tables().identifiers().len(),
            numbers = analysis.tables().numbers().len(),
            errors = analysis.diagnostics().len(),
            "analysis finished"
        );
        Ok(analysis)
    }

    /// Writes the result artifact to `output` and the log artifact to the
    /// configured log file.
    ///
    /// Refuses to write anything if the analysis has diagnostics. If the log
    /// cannot be written, the result file is removed again.
    pub fn emit(&self, analysis: &Analysis, output: &Path) -> Result<()> {
        analysis.ensure_clean()?;
        let log_file = &self.config.log_file;

        let result = render(output, |out| emit::write_result(analysis, out))?;
        let log = render(log_file, |out| emit::write_log(analysis, out))?;

        std::fs::write(output, result).map_err(|e| DriverError::io(output, e))?;
        if let Err(e) = std::fs::write(log_file, log) {
            let _ = std::fs::remove_file(output);
            return Err(DriverError::io(log_file, e));
        }

        for (kind, count) in emit::table_usage(analysis) {
            debug!(table = %kind, count, "token references");
        }
        info!(
            output = %output.display(),
            log = %self.config.log_file.display(),
            "artifacts written"
        );
        Ok(())
    }

    /// Scans `input` and, if it is clean, writes both artifacts.
    pub fn run(&self, input: &Path, output: &Path) -> Result<Analysis> {
        let analysis = self.analyze(input)?;
        if !analysis.has_errors() {
            self.emit(&analysis, output)?;
        }
        Ok(analysis)
    }
}

fn render<F>(path: &Path, write: F) -> Result<Vec<u8>>
where
    F: FnOnce(&mut Vec<u8>) -> std::io::Result<()>,
{
    let mut out = Vec::new();
    write(&mut out).map_err(|e| DriverError::io(path, e))?;
    Ok(out)
}
