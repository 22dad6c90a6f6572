//! Diagnostics and error reporting for Blang
//!
//! Renders [`SyntaxError`]s with the offending source line and a caret under the reported column.

pub use blang_syntax::diagnostics::SyntaxError;

/// Format an error with source context.
///
/// ```text
/// syntax error: expected ; at 1:5, found EOF ("")
///   --> main.bl:1:5
///    |
///  1 | 1 + 2
///    |     ^
/// ```
pub fn format_error(file_name: &str, source: &str, error: &SyntaxError) -> String {
    let Some(position) = error.position() else {
        return format!("error: {file_name}: {error}\n");
    };

    let mut out = format!("syntax error: {error}\n");
    out.push_str(&format!("  --> {file_name}:{}:{}\n", position.line, position.column));

    let line_text = source.lines().nth(position.line.saturating_sub(1)).unwrap_or("");
    let width = position.line.to_string().len();
    out.push_str(&format!("  {:>width$} |\n", ""));
    out.push_str(&format!("  {:>width$} | {}\n", position.line, line_text));
    out.push_str(&format!("  {:>width$} | {}^\n", "", caret_padding(line_text, position.column)));
    out
}

/// Blank out the first `column - 1` characters of `line`. Tabs are kept as tabs.
fn caret_padding(line: &str, column: usize) -> String {
    line.chars()
        .map(|c| if c == '\t' { '\t' } else { ' ' })
        .chain(std::iter::repeat(' '))
        .take(column.saturating_sub(1))
        .collect()
}
