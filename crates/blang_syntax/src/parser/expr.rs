/// Expression parsing methods.
///
/// This chunk implements the expression grammar as a two-level precedence ladder:
/// additive (`+ -`) → multiplicative (`* /`) → factor.
///
/// ## Notes
/// - Both operator levels are left-associative: each loop iteration wraps the tree built so far
///   as the left operand of a new binary node.
/// - Parenthesized expressions recurse, so their depth is capped at [`MAX_NESTING_DEPTH`].
/// - The `*_from` variants continue a level from an operand that was already parsed, which is how
///   statements resume an expression after looking past a leading identifier.
impl<R: BufRead> Parser<R> {
    // ========================================================================
    // Expressions
    // ========================================================================

    fn expression(&mut self) -> Result<Node, SyntaxError> {
        let term = self.term()?;
        self.expression_from(term)
    }

    fn expression_from(&mut self, mut left: Node) -> Result<Node, SyntaxError> {
        while self.current.kind.is_additive() {
            let op = self.advance()?;
            let right = self.term()?;
            left = Node::binary(op, left, right);
        }
        Ok(left)
    }

    fn term(&mut self) -> Result<Node, SyntaxError> {
        let factor = self.factor()?;
        self.term_from(factor)
    }

    fn term_from(&mut self, mut left: Node) -> Result<Node, SyntaxError> {
        while self.current.kind.is_multiplicative() {
            let op = self.advance()?;
            let right = self.factor()?;
            left = Node::binary(op, left, right);
        }
        Ok(left)
    }

    fn factor(&mut self) -> Result<Node, SyntaxError> {
        if !self.current.kind.starts_factor() {
            return Err(self.unexpected(&[
                TokenKind::IntegerLiteral,
                TokenKind::Identifier,
                TokenKind::LeftParen,
            ]));
        }

        if self.check(TokenKind::LeftParen) {
            let open = self.advance()?;
            if self.depth == MAX_NESTING_DEPTH {
                return Err(SyntaxError::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                    position: open.position,
                });
            }
            self.depth += 1;
            let inner = self.expression()?;
            self.expect(TokenKind::RightParen)?;
            self.depth -= 1;
            Ok(inner)
        } else {
            Ok(Node::leaf(self.advance()?))
        }
    }
}
