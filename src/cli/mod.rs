//! CLI module for the Blang frontend
//!
//! This module provides the command-line interface.
//!
//! ## Modes
//!
//! - `blang FILE` - Parse and print the syntax tree outline
//! - `blang --lex FILE` - Print the token stream
//! - `blang --parse FILE` - Parse and print the program fully parenthesized
//!
//! Any mode can read inline source with `-c CODE` instead of a file.
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{ArgGroup, Parser};

use crate::format::FormatConfig;
use commands::SourceInput;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Tokenizer and parser for the Blang expression language
#[derive(Parser, Debug)]
#[command(name = "blang")]
#[command(version = VERSION)]
#[command(about = "Tokenizer and parser for the Blang expression language", long_about = None)]
#[command(group(ArgGroup::new("source").required(true).args(["file", "code"])))]
pub struct Cli {
    /// Source file to read
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Read source from CODE instead of a file
    #[arg(short = 'c', long = "command", value_name = "CODE")]
    pub code: Option<String>,

    /// Print the token stream instead of the syntax tree
    #[arg(long = "lex", conflicts_with = "parse")]
    pub lex: bool,

    /// Print the parsed program as fully parenthesized source
    #[arg(long = "parse")]
    pub parse: bool,

    /// Spaces per level in the syntax tree outline
    #[arg(long = "indent", value_name = "N", default_value_t = 2)]
    pub indent: usize,

    /// Annotate syntax tree nodes with their source positions
    #[arg(long = "positions")]
    pub positions: bool,
}

impl Cli {
    /// Where to read source from.
    ///
    /// The `source` argument group admits exactly one of FILE and `-c` when parsing arguments;
    /// a `Cli` built by hand with both or neither is rejected here.
    fn source(&self) -> CliResult<SourceInput> {
        match (&self.file, &self.code) {
            (Some(file), None) => Ok(SourceInput::File(file.clone())),
            (None, Some(code)) => Ok(SourceInput::Inline(code.clone())),
            _ => Err(CliError::failure("Error: expected exactly one of FILE or -c CODE")),
        }
    }

    fn format_config(&self) -> FormatConfig {
        FormatConfig::new()
            .with_indent_width(self.indent)
            .with_positions(self.positions)
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprint!("{}", e.message);
                if !e.message.ends_with('\n') {
                    eprintln!();
                }
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    let input = cli.source()?;
    tracing::debug!(source = %input.name(), lex = cli.lex, parse = cli.parse, "starting");

    if cli.lex {
        commands::lex(&input)
    } else if cli.parse {
        commands::parse(&input)
    } else {
        commands::dump_tree(&input, &cli.format_config())
    }
}

// ============================================================================
// Tests
// ============================================================================
