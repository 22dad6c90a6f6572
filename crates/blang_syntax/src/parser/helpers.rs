/// Token-stream helpers.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Peeking/consuming tokens (`check`, `advance`)
/// - Expecting a token kind (`expect`)
/// - Building grammar violations (`unexpected`)
impl<R: BufRead> Parser<R> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return `true` if the current token is of kind `kind`.
    fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    /// Pull the next token from the lexer and return the token we just consumed.
    fn advance(&mut self) -> Result<Token, SyntaxError> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    /// Consume the current token if it is of kind `kind`, otherwise fail.
    fn expect(&mut self, kind: TokenKind) -> Result<Token, SyntaxError> {
        if self.check(kind) {
            self.advance()
        } else {
            Err(self.unexpected(&[kind]))
        }
    }

    /// Grammar violation at the current token.
    fn unexpected(&self, expected: &[TokenKind]) -> SyntaxError {
        SyntaxError::unexpected(expected, &self.current)
    }
}
