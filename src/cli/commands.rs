//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.
//!
//! Files are streamed into the lexer rather than read up front; the full text is only
//! read back when an error has to be rendered against it.

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use crate::format::{FormatConfig, Formatter, format_token};
use crate::frontend::diagnostics::{self, SyntaxError};
use crate::frontend::lexer::Lexer;
use crate::frontend::parser;

use super::{CliError, CliResult, ExitCode};

/// Maximum source file size (10 MiB).
const MAX_SOURCE_SIZE: u64 = 10 * 1024 * 1024;

/// Where a command reads its source from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceInput {
    /// A source file on disk.
    File(PathBuf),
    /// Source passed inline with `-c`.
    Inline(String),
}

impl SourceInput {
    /// Name used in diagnostics.
    pub fn name(&self) -> String {
        match self {
            SourceInput::File(path) => path.display().to_string(),
            SourceInput::Inline(_) => "<command>".to_string(),
        }
    }

    /// Open the source as a buffered stream.
    ///
    /// ## Errors
    /// Returns an error if:
    /// - The file cannot be accessed or opened
    /// - The file exceeds `MAX_SOURCE_SIZE`
    pub fn open(&self) -> CliResult<Box<dyn BufRead + '_>> {
        match self {
            SourceInput::Inline(code) => Ok(Box::new(code.as_bytes())),
            SourceInput::File(path) => {
                let metadata = fs::metadata(path)
                    .map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", path.display(), e)))?;

                if metadata.len() > MAX_SOURCE_SIZE {
                    return Err(CliError::failure(format!(
                        "Source file '{}' is too large ({} bytes, max {} bytes)",
                        path.display(),
                        metadata.len(),
                        MAX_SOURCE_SIZE
                    )));
                }

                let file = File::open(path)
                    .map_err(|e| CliError::failure(format!("Error opening file '{}': {}", path.display(), e)))?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }

    /// Full source text, for rendering diagnostics.
    ///
    /// Falls back to an empty string if a file can no longer be read; the error location is
    /// still reported, just without the source line.
    fn text(&self) -> String {
        match self {
            SourceInput::Inline(code) => code.clone(),
            SourceInput::File(path) => fs::read_to_string(path).unwrap_or_default(),
        }
    }

    /// Convert a syntax error into a CLI error rendered against this source.
    fn syntax_error(&self, error: &SyntaxError) -> CliError {
        CliError::failure(diagnostics::format_error(&self.name(), &self.text(), error))
    }
}

/// Tokenize and display the token stream.
pub fn lex(input: &SourceInput) -> CliResult<ExitCode> {
    let lexer = Lexer::new(input.open()?);
    for token in lexer {
        let token = token.map_err(|e| input.syntax_error(&e))?;
        if token.is_eof() {
            break;
        }
        println!("{}", format_token(&token));
    }
    Ok(ExitCode::SUCCESS)
}

/// Parse and display the program as fully parenthesized source.
pub fn parse(input: &SourceInput) -> CliResult<ExitCode> {
    let ast = parser::parse(Lexer::new(input.open()?)).map_err(|e| input.syntax_error(&e))?;
    print!("{}", ast);
    Ok(ExitCode::SUCCESS)
}

/// Parse and display the syntax tree outline.
pub fn dump_tree(input: &SourceInput, config: &FormatConfig) -> CliResult<ExitCode> {
    let ast = parser::parse(Lexer::new(input.open()?)).map_err(|e| input.syntax_error(&e))?;
    print!("{}", Formatter::new(config.clone()).format(&ast));
    Ok(ExitCode::SUCCESS)
}
