//! Token types for the Blang lexer.
//!
//! Token kinds form a closed set; every kind has a stable display name used by token listings and
//! diagnostics (see [`TokenKind::name`]).

use std::fmt;

// ============================================================================
// POSITIONS
// ============================================================================

/// Line/column location of the first character of a token.
///
/// Lines start at 1. Columns count consumed characters on the current line, so the first character of a
/// line is column 1 and a freshly started line sits at column 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self { line: 1, column: 0 }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the lexer.
///
/// ## Notes
/// - `Program` is never produced by the lexer; it only labels the synthetic AST root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ========== Special ==========
    EndOfInput,
    Illegal,

    // ========== Identifiers and Literals ==========
    Identifier,
    IntegerLiteral,

    // ========== Operators and punctuation ==========
    Semicolon,
    Plus,
    Minus,
    Star,
    Slash,
    Assign,
    LeftParen,
    RightParen,

    // ========== AST only ==========
    Program,
}

impl TokenKind {
    /// Display name used in token listings, AST dumps and error messages.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::EndOfInput => "EOF",
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Identifier => "IDENT",
            TokenKind::IntegerLiteral => "INT",
            TokenKind::Semicolon => ";",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Assign => "=",
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::Program => "PROGRAM",
        }
    }

    /// Map a single-character operator or punctuation symbol to its kind.
    pub fn from_symbol(c: char) -> Option<TokenKind> {
        match c {
            ';' => Some(TokenKind::Semicolon),
            '+' => Some(TokenKind::Plus),
            '-' => Some(TokenKind::Minus),
            '*' => Some(TokenKind::Star),
            '/' => Some(TokenKind::Slash),
            '=' => Some(TokenKind::Assign),
            '(' => Some(TokenKind::LeftParen),
            ')' => Some(TokenKind::RightParen),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A token with its kind, matched text and starting position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub position: Position,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, literal: impl Into<String>, position: Position) -> Self {
        Self {
            kind,
            literal: literal.into(),
            position,
        }
    }

    /// The zero-width end-of-input token at `position`.
    pub fn eof(position: Position) -> Self {
        Self::new(TokenKind::EndOfInput, String::new(), position)
    }
}
