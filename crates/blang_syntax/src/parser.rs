//! Parser for the Blang expression language
//!
//! Pulls tokens one at a time from a [`Lexer`] and builds a [`Node`] tree by recursive descent:
//!
//! ```text
//! program    := statement* EndOfInput
//! statement  := Identifier Assign expr Semicolon
//!             | expr Semicolon
//! expr       := term ((Plus | Minus) term)*
//! term       := factor ((Star | Slash) factor)*
//! factor     := IntegerLiteral | Identifier | LeftParen expr RightParen
//! ```
//!
//! ## Examples
//!
//! ```rust
//! use blang_syntax::parser;
//!
//! let program = parser::parse_source("x = 1 + 2 * 3;").unwrap();
//! assert_eq!(program.children().len(), 1);
//! assert_eq!(program.to_string(), "x = (1 + (2 * 3));\n");
//! ```

use std::io::BufRead;

use crate::ast::Node;
use crate::diagnostics::SyntaxError;
use crate::lexer::{Lexer, Token, TokenKind};

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while keeping
// each grammar layer in its own file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
