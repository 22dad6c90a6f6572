#![forbid(unsafe_code)]
//! Blang expression language frontend
//!
//! Blang is a toy language of assignments and integer arithmetic. This crate provides the
//! command-line driver around the `blang_syntax` frontend: reading sources, printing token
//! streams and syntax trees, and rendering syntax errors.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module
//!   enforces `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod format;
pub mod frontend;

pub use frontend::ast;
pub use frontend::diagnostics;
pub use frontend::lexer;
pub use frontend::parser;

pub use format::{FormatConfig, format_infix, format_source, format_source_with_config, format_tokens};
