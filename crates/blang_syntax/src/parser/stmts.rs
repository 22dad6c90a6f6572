/// Statement parsing.
///
/// A statement is either an assignment `name = expr;` or a bare expression `expr;`.
impl<R: BufRead> Parser<R> {
    // ========================================================================
    // Statements
    // ========================================================================

    fn statement(&mut self) -> Result<Node, SyntaxError> {
        let node = if self.check(TokenKind::Identifier) {
            // A leading identifier is either an assignment target or the first factor of an
            // expression; one more token decides.
            let ident = Node::leaf(self.advance()?);
            if self.check(TokenKind::Assign) {
                let op = self.advance()?;
                let value = self.expression()?;
                Node::binary(op, ident, value)
            } else {
                let term = self.term_from(ident)?;
                self.expression_from(term)?
            }
        } else {
            self.expression()?
        };

        self.expect(TokenKind::Semicolon)?;
        tracing::debug!(kind = %node.kind(), position = %node.position(), "parsed statement");
        Ok(node)
    }
}
