//! Output formatting for Blang token streams and syntax trees
//!
//! Three renderings are available:
//! - token listings, one `line:column<TAB>KIND<TAB>literal` line per token
//! - tree outlines, one `KIND ("literal")` line per node, indented by depth
//! - fully parenthesized source (the [`Node`](crate::ast::Node) `Display` impl)

mod config;
mod formatter;

pub use config::FormatConfig;
pub use formatter::{Formatter, format_token};

use crate::frontend::diagnostics::SyntaxError;
use crate::frontend::{lexer, parser};

/// Render the token listing of `source`, excluding the end-of-input token.
pub fn format_tokens(source: &str) -> Result<String, SyntaxError> {
    let mut out = String::new();
    for token in lexer::lex(source)? {
        if token.is_eof() {
            break;
        }
        out.push_str(&format_token(&token));
        out.push('\n');
    }
    Ok(out)
}

/// Parse `source` and render its tree outline with default settings
pub fn format_source(source: &str) -> Result<String, SyntaxError> {
    format_source_with_config(source, FormatConfig::default())
}

/// Parse `source` and render its tree outline with a custom configuration
pub fn format_source_with_config(source: &str, config: FormatConfig) -> Result<String, SyntaxError> {
    let ast = parser::parse_source(source)?;
    Ok(Formatter::new(config).format(&ast))
}

/// Parse `source` and render it back as fully parenthesized source
pub fn format_infix(source: &str) -> Result<String, SyntaxError> {
    Ok(parser::parse_source(source)?.to_string())
}
