/// Parse everything `lexer` produces into a `Program` [`Node`].
///
/// This is the main public entrypoint for parsing.
///
/// ## Errors
/// Returns the first [`SyntaxError`] encountered, either from the lexer's input stream or from the
/// grammar.
#[tracing::instrument(skip_all)]
pub fn parse<R: BufRead>(lexer: Lexer<R>) -> Result<Node, SyntaxError> {
    let program = Parser::new(lexer)?.parse()?;
    tracing::debug!(statement_count = program.children().len(), "parsed program");
    Ok(program)
}

/// Parse an in-memory source string.
///
/// This is a shorthand for `parse(Lexer::from_source(source))`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse_source(source: &str) -> Result<Node, SyntaxError> {
    parse(Lexer::from_source(source))
}
