//! Blang Compiler Frontend
//!
//! This module gathers the frontend components:
//! - `lexer`: tokenization of source code
//! - `parser`: parsing tokens into a syntax tree
//! - `ast`: syntax tree definitions
//! - `diagnostics`: syntax errors and their rendering against source text

// Syntax components are provided by the blang_syntax crate.
pub use blang_syntax::{ast, lexer, parser, token_helpers};

// Error rendering needs source text and file names, so it lives with the driver.
pub mod diagnostics;
