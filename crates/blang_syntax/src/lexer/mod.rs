//! Lexer for the Blang expression language
//!
//! Pulls characters from any [`BufRead`] and produces tokens on demand:
//! - Identifiers (maximal runs of alphabetic characters)
//! - Integer literals (maximal runs of ASCII digits)
//! - Single-character operators and punctuation (`; + - * / = ( )`)
//! - `Illegal` tokens for any other non-whitespace character
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token, Position)
//! - `reader` - UTF-8 character reader with one character of push-back

mod reader;
pub mod tokens;

pub use tokens::{Position, Token, TokenKind};

use std::io::BufRead;

use crate::diagnostics::SyntaxError;
use reader::CharReader;

// ============================================================================
// LEXER STATE
// ----------------------------------------------------------------------------
// Every character read advances the column, including one that is pushed back
// afterwards; pushing back rewinds the column so the next token starts where
// the pushed-back character sits.
// ============================================================================

/// Lexer for Blang source code.
///
/// Once the input is exhausted, every further call to [`Lexer::next_token`] returns a
/// [`TokenKind::EndOfInput`] token.
pub struct Lexer<R> {
    reader: CharReader<R>,
    pos: Position,
    /// Set once the iterator has yielded end of input or an error.
    fused: bool,
}

impl<R: BufRead> Lexer<R> {
    /// Create a new lexer reading from `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            reader: CharReader::new(reader),
            pos: Position::default(),
            fused: false,
        }
    }

    /// Current position of the lexer.
    pub fn position(&self) -> Position {
        self.pos
    }

    /// Produce the next token.
    ///
    /// ## Errors
    /// Returns [`SyntaxError::Stream`] if the underlying reader fails or yields malformed UTF-8.
    pub fn next_token(&mut self) -> Result<Token, SyntaxError> {
        let token = self.scan_token()?;
        tracing::trace!(kind = %token.kind, literal = %token.literal, position = %token.position, "token");
        Ok(token)
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) -> Result<Token, SyntaxError> {
        loop {
            let Some(c) = self.reader.read_char()? else {
                return Ok(Token::eof(self.pos));
            };
            self.pos.column += 1;

            if c == '\n' {
                self.new_line();
                continue;
            }

            if let Some(kind) = TokenKind::from_symbol(c) {
                return Ok(Token::new(kind, c.to_string(), self.pos));
            }

            if c.is_whitespace() {
                continue;
            }

            if c.is_ascii_digit() {
                let start = self.pos;
                self.backup(c);
                let literal = self.scan_while(|c| c.is_ascii_digit())?;
                return Ok(Token::new(TokenKind::IntegerLiteral, literal, start));
            }

            if c.is_alphabetic() {
                let start = self.pos;
                self.backup(c);
                let literal = self.scan_while(char::is_alphabetic)?;
                return Ok(Token::new(TokenKind::Identifier, literal, start));
            }

            return Ok(Token::new(TokenKind::Illegal, c.to_string(), self.pos));
        }
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn new_line(&mut self) {
        self.pos.line += 1;
        self.pos.column = 0;
    }

    fn backup(&mut self, c: char) {
        self.reader.unread(c);
        self.pos.column -= 1;
    }

    /// Consume the maximal run of characters accepted by `accept`.
    ///
    /// The first rejected character is pushed back for the next token.
    fn scan_while(&mut self, accept: fn(char) -> bool) -> Result<String, SyntaxError> {
        let mut literal = String::new();
        while let Some(c) = self.reader.read_char()? {
            self.pos.column += 1;
            if accept(c) {
                literal.push(c);
            } else {
                self.backup(c);
                break;
            }
        }
        Ok(literal)
    }
}

impl<'a> Lexer<&'a [u8]> {
    /// Create a lexer over an in-memory source string.
    pub fn from_source(source: &'a str) -> Self {
        Self::new(source.as_bytes())
    }
}

/// Yields each token once, ending after the end-of-input token or the first error.
impl<R: BufRead> Iterator for Lexer<R> {
    type Item = Result<Token, SyntaxError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.fused {
            return None;
        }
        let result = self.next_token();
        self.fused = match &result {
            Ok(token) => token.kind == TokenKind::EndOfInput,
            Err(_) => true,
        };
        Some(result)
    }
}

/// Convenience function to lex a source string.
///
/// The returned tokens always end with a single [`TokenKind::EndOfInput`] token.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, SyntaxError> {
    Lexer::from_source(source).collect()
}

// ============================================================================
// TESTS
// ============================================================================
