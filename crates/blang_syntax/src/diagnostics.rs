//! Syntax errors for Blang.
//!
//! Both kinds of failure are terminal: the lexer and parser stop at the first error and no partial result
//! is returned.

use std::io;

use miette::Diagnostic;
use thiserror::Error;

use crate::lexer::{Position, Token, TokenKind};

/// Error produced while tokenizing or parsing.
#[derive(Debug, Error, Diagnostic)]
pub enum SyntaxError {
    /// The underlying input failed for a reason other than ordinary exhaustion.
    #[error("failed to read source: {0}")]
    #[diagnostic(code(blang::syntax::stream))]
    Stream(#[from] io::Error),

    /// The current token does not satisfy the production being parsed.
    #[error("expected {} at {position}, found {found} ({literal:?})", describe_expected(.expected))]
    #[diagnostic(
        code(blang::syntax::grammar),
        help("every statement has the form `name = expr;` or `expr;`")
    )]
    Grammar {
        expected: Vec<TokenKind>,
        found: TokenKind,
        literal: String,
        position: Position,
    },

    /// Parentheses nest deeper than the parser accepts.
    #[error("parentheses nested deeper than {limit} levels at {position}")]
    #[diagnostic(
        code(blang::syntax::nesting),
        help("split the expression across several assignments")
    )]
    NestingTooDeep { limit: usize, position: Position },
}

impl SyntaxError {
    /// Build a grammar violation for `found`, which matched none of `expected`.
    pub fn unexpected(expected: &[TokenKind], found: &Token) -> Self {
        SyntaxError::Grammar {
            expected: expected.to_vec(),
            found: found.kind,
            literal: found.literal.clone(),
            position: found.position,
        }
    }

    /// Source position of the error, if it has one.
    pub fn position(&self) -> Option<Position> {
        match self {
            SyntaxError::Stream(_) => None,
            SyntaxError::Grammar { position, .. } | SyntaxError::NestingTooDeep { position, .. } => {
                Some(*position)
            }
        }
    }
}

fn describe_expected(kinds: &[TokenKind]) -> String {
    match kinds {
        [] => "nothing".to_string(),
        [only] => only.to_string(),
        [init @ .., last] => {
            let init: Vec<String> = init.iter().map(ToString::to_string).collect();
            format!("{} or {}", init.join(", "), last)
        }
    }
}
