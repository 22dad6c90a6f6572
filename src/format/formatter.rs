//! Tree and token formatting.
//!
//! Walks the syntax tree and emits one line per node, children indented below their parent:
//!
//! ```text
//! PROGRAM ("program")
//!   = ("=")
//!     IDENT ("x")
//!     INT ("1")
//! ```

use std::fmt::Write;

use super::config::FormatConfig;
use crate::frontend::ast::Node;
use crate::frontend::lexer::Token;

/// Formatter that renders a syntax tree as an indented outline
pub struct Formatter {
    config: FormatConfig,
}

impl Formatter {
    /// Create a new formatter with the given config
    pub fn new(config: FormatConfig) -> Self {
        Self { config }
    }

    /// Format a tree and return the outline
    ///
    /// Nodes are visited in pre-order from an explicit stack, so tree height is not limited by the
    /// call stack.
    pub fn format(&self, root: &Node) -> String {
        let mut out = String::new();
        let mut pending = vec![(root, 0usize)];
        while let Some((node, depth)) = pending.pop() {
            self.write_line(&mut out, node, depth);
            pending.extend(node.children().iter().rev().map(|child| (child, depth + 1)));
        }
        out
    }

    fn write_line(&self, out: &mut String, node: &Node, depth: usize) {
        let width = depth * self.config.indent_width;
        // Writing into a String cannot fail.
        let _ = write!(out, "{:width$}{} ({:?})", "", node.kind(), node.literal());
        if self.config.show_positions {
            let _ = write!(out, " @ {}", node.position());
        }
        out.push('\n');
    }
}

/// Format one token as `line:column<TAB>KIND<TAB>literal`.
pub fn format_token(token: &Token) -> String {
    format!("{}\t{}\t{}", token.position, token.kind, token.literal)
}
