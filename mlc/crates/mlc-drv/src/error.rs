//! Error types for the MLC driver.
//!
//! Lexical problems in the analyzed source are diagnostics, not errors; they
//! only surface here as [`DriverError::LexicalErrors`] once a run decides not
//! to write its artifacts.

use std::path::PathBuf;

use mlc_util::TableError;
use thiserror::Error;

/// Main error type for the driver.
#[derive(Error, Debug)]
pub enum DriverError {
    /// Reading the input or writing an artifact failed.
    #[error("cannot access '{}'", .path.display())]
    Io {
        /// File that could not be read or written
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The configuration file is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A token could not be interned.
    #[error(transparent)]
    Table(#[from] TableError),

    /// The scan recorded diagnostics, so no artifacts were written.
    #[error("{0} lexical error(s) found")]
    LexicalErrors(usize),
}

impl DriverError {
    /// Wraps an I/O error together with the path it concerns.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DriverError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias using DriverError.
pub type Result<T> = std::result::Result<T, DriverError>;
