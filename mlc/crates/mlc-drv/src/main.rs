//! mlc-lex - command line front end for the MLC lexical analyzer.
//!
//! Scans one source file and writes the result artifact plus the log
//! artifact. Any lexical error is printed to stderr and leaves both
//! artifacts unwritten.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use mlc_drv::{Config, DriverError, Session};

/// MLC lexical analyzer
///
/// Writes the number table, the identifier table and the token stream of
/// INPUT to OUTPUT.
#[derive(Parser, Debug)]
#[command(name = "mlc-lex")]
#[command(author = "MLC Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lexical analyzer for the MLC teaching language", long_about = None)]
struct Cli {
    /// Source file to analyze
    input: PathBuf,

    /// Result file (tables and token stream)
    output: PathBuf,

    /// Log file (default: from config, else lexer.logs)
    #[arg(short, long)]
    log_file: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, env = "MLC_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, env = "MLC_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, env = "MLC_NO_COLOR")]
    no_color: bool,
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = load_config(cli.config.as_deref())?.with_overrides(cli.log_file, cli.verbose);

    init_logging(config.verbose, cli.no_color)?;

    let session = Session::new(config);
    let analysis = session
        .run(&cli.input, &cli.output)
        .with_context(|| format!("failed to process '{}'", cli.input.display()))?;

    if let Err(err) = analysis.ensure_clean() {
        for diagnostic in analysis.diagnostics() {
            eprintln!("{diagnostic}");
        }
        tracing::debug!("{err}; no artifacts written");
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the verbosity flag.
fn init_logging(verbose: bool, no_color: bool) -> Result<(), DriverError> {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| DriverError::Config(format!("Failed to initialize logging: {}", e)))
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> Result<Config, DriverError> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}
