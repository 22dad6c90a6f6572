//! Abstract Syntax Tree definitions for Blang
//!
//! The tree is untyped: every node carries a [`TokenKind`], the literal text of the token it was built
//! from, and its children. Node constructors enforce arity, so a node's kind always determines how many
//! children it has:
//!
//! | kind                                   | children                  |
//! |----------------------------------------|---------------------------|
//! | `Program`                              | one per statement         |
//! | `Assign`, `Plus`, `Minus`, `Star`, `Slash` | exactly two (left, right) |
//! | `Identifier`, `IntegerLiteral`         | none                      |
//!
//! Same-precedence chains build left-deep trees as tall as the statement is long, so dropping,
//! comparing and rendering walk the tree with an explicit stack rather than by recursion.

use std::fmt;

use crate::lexer::{Position, Token, TokenKind};

/// Literal carried by the synthetic program root.
pub const PROGRAM_LITERAL: &str = "program";

/// A node of the syntax tree.
#[derive(Debug, Clone)]
pub struct Node {
    kind: TokenKind,
    literal: String,
    position: Position,
    children: Vec<Node>,
}

impl Node {
    /// Build a leaf (`Identifier` or `IntegerLiteral`) from its token.
    pub fn leaf(token: Token) -> Self {
        debug_assert!(matches!(token.kind, TokenKind::Identifier | TokenKind::IntegerLiteral));
        Self {
            kind: token.kind,
            literal: token.literal,
            position: token.position,
            children: Vec::new(),
        }
    }

    /// Build a binary node (an arithmetic operator or `Assign`) from its operator token.
    pub fn binary(op: Token, left: Node, right: Node) -> Self {
        debug_assert!(op.kind.is_binary_operator() || op.kind == TokenKind::Assign);
        Self {
            kind: op.kind,
            literal: op.literal,
            position: op.position,
            children: vec![left, right],
        }
    }

    /// Build the program root over its statements, in source order.
    pub fn program(statements: Vec<Node>) -> Self {
        Self {
            kind: TokenKind::Program,
            literal: PROGRAM_LITERAL.to_string(),
            position: Position::default(),
            children: statements,
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn literal(&self) -> &str {
        &self.literal
    }

    /// Position of the token this node was built from.
    pub fn position(&self) -> Position {
        self.position
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Left and right operands of a binary or assignment node.
    pub fn operands(&self) -> Option<(&Node, &Node)> {
        match self.children.as_slice() {
            [left, right] if self.kind != TokenKind::Program => Some((left, right)),
            _ => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty() && self.kind != TokenKind::Program
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        let mut pairs = vec![(self, other)];
        while let Some((a, b)) = pairs.pop() {
            if a.kind != b.kind
                || a.position != b.position
                || a.literal != b.literal
                || a.children.len() != b.children.len()
            {
                return false;
            }
            pairs.extend(a.children.iter().zip(&b.children));
        }
        true
    }
}

impl Eq for Node {}

/// Pending output while rendering: either a subtree or literal text.
enum Piece<'a> {
    Node(&'a Node),
    Text(&'a str),
}

/// Renders the tree as source text with every binary operation parenthesized.
///
/// A program renders one statement per line, each terminated by `;`. The output re-parses to a tree
/// that evaluates identically.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Pieces are pushed in reverse so they pop in output order.
        let mut work = vec![Piece::Node(self)];
        while let Some(piece) = work.pop() {
            let node = match piece {
                Piece::Text(text) => {
                    f.write_str(text)?;
                    continue;
                }
                Piece::Node(node) => node,
            };

            if node.kind == TokenKind::Program {
                for statement in node.children.iter().rev() {
                    work.push(Piece::Text(";\n"));
                    work.push(Piece::Node(statement));
                }
                continue;
            }

            match (node.kind, node.operands()) {
                (TokenKind::Assign, Some((target, value))) => {
                    work.extend([Piece::Node(value), Piece::Text(" = "), Piece::Node(target)]);
                }
                (_, Some((left, right))) => work.extend([
                    Piece::Text(")"),
                    Piece::Node(right),
                    Piece::Text(" "),
                    Piece::Text(&node.literal),
                    Piece::Text(" "),
                    Piece::Node(left),
                    Piece::Text("("),
                ]),
                (_, None) => f.write_str(&node.literal)?,
            }
        }
        Ok(())
    }
}
