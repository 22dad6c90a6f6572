//! Syntax frontend for the Blang expression language: lexer, parser, AST, diagnostics.
//!
//! Blang programs are sequences of statements of the form `name = expr;` or `expr;`, where `expr` is
//! integer arithmetic over literals and identifiers with `+ - * /` and parentheses.
//!
//! ## Notes
//! - This crate is “syntax-only”: it does no name resolution, evaluation, or code generation.
//! - Tokens are pulled on demand from any `BufRead`, so sources need not be loaded into memory first.
//! - Errors are terminal: the first [`diagnostics::SyntaxError`] ends lexing or parsing.
//!
//! ## Examples
//! ```rust
//! use blang_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("x = 1;").unwrap();
//! assert_eq!(tokens.len(), 5);
//!
//! let program = parser::parse(lexer::Lexer::from_source("x = 1;")).unwrap();
//! assert_eq!(program.children().len(), 1);
//! ```

#![forbid(unsafe_code)]

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;
