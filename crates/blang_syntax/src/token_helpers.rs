//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These helpers exist to reduce repetitive `matches!(...)` at call sites, mostly in the parser's
//! precedence loops.

use crate::lexer::{Token, TokenKind};

impl TokenKind {
    /// Return `true` for the additive operators `+` and `-`.
    pub fn is_additive(self) -> bool {
        matches!(self, TokenKind::Plus | TokenKind::Minus)
    }

    /// Return `true` for the multiplicative operators `*` and `/`.
    pub fn is_multiplicative(self) -> bool {
        matches!(self, TokenKind::Star | TokenKind::Slash)
    }

    /// Return `true` for any arithmetic binary operator.
    pub fn is_binary_operator(self) -> bool {
        self.is_additive() || self.is_multiplicative()
    }

    /// Return `true` if a token of this kind can begin a factor.
    pub fn starts_factor(self) -> bool {
        matches!(
            self,
            TokenKind::IntegerLiteral | TokenKind::Identifier | TokenKind::LeftParen
        )
    }
}

impl Token {
    /// Convenience wrapper for `self.kind == TokenKind::EndOfInput`.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}
