// Parser core type and entrypoint.
//
// This chunk defines the `Parser` type and its top-level `parse()` entrypoint. It is
// `include!`'d into `crate::parser` to keep all parser methods in a single module.

/// Deepest parenthesis nesting accepted inside one expression.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Parser state.
///
/// ## Notes
/// - The state is the current token and the open parenthesis depth; there is no backtracking.
/// - Parsing stops at the first error. No partial tree is returned.
pub struct Parser<R> {
    lexer: Lexer<R>,
    current: Token,
    depth: usize,
}

impl<R: BufRead> Parser<R> {
    /// Create a new parser, priming it with the first token of `lexer`.
    ///
    /// ## Errors
    /// Returns [`SyntaxError::Stream`] if reading the first token fails.
    pub fn new(mut lexer: Lexer<R>) -> Result<Self, SyntaxError> {
        let current = lexer.next_token()?;
        Ok(Self {
            lexer,
            current,
            depth: 0,
        })
    }

    /// Parse every statement up to end of input into a `Program` [`Node`].
    ///
    /// ## Errors
    /// Returns the first [`SyntaxError`] encountered.
    pub fn parse(mut self) -> Result<Node, SyntaxError> {
        let mut statements = Vec::new();
        while !self.current.is_eof() {
            statements.push(self.statement()?);
        }
        Ok(Node::program(statements))
    }
}
