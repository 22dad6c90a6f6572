#[cfg(test)]
/// Parser unit tests.
///
/// These tests cover tree shape (precedence, associativity, the assignment/expression split) and
/// the exact grammar violation reported for malformed input.
mod tests {
    use super::*;
    use crate::lexer::Position;
    use std::io::{self, BufReader, Read};

    fn parse_ok(source: &str) -> Node {
        parse_source(source).unwrap_or_else(|e| panic!("parse({source:?}) failed: {e}"))
    }

    fn grammar_error(source: &str) -> (Vec<TokenKind>, TokenKind, String, Position) {
        match parse_source(source) {
            Err(SyntaxError::Grammar {
                expected,
                found,
                literal,
                position,
            }) => (expected, found, literal, position),
            other => panic!("expected grammar violation for {source:?}, got {other:?}"),
        }
    }

    fn single_statement(source: &str) -> Node {
        let program = parse_ok(source);
        assert_eq!(program.children().len(), 1, "expected one statement in {source:?}");
        program.children()[0].clone()
    }

    #[test]
    fn test_assignment_with_precedence() {
        let program = parse_ok("x = 1 + 2 * 3;");
        assert_eq!(program.kind(), TokenKind::Program);
        assert_eq!(program.literal(), "program");
        assert_eq!(program.children().len(), 1);

        let assign = &program.children()[0];
        assert_eq!(assign.kind(), TokenKind::Assign);
        let (target, value) = assign.operands().unwrap();
        assert_eq!((target.kind(), target.literal()), (TokenKind::Identifier, "x"));
        assert_eq!(value.kind(), TokenKind::Plus);

        let (one, product) = value.operands().unwrap();
        assert_eq!(one.literal(), "1");
        assert_eq!(product.kind(), TokenKind::Star);
        assert_eq!(product.to_string(), "(2 * 3)");
    }

    #[test]
    fn test_subtraction_is_left_associative() {
        let stmt = single_statement("1 - 2 - 3;");
        assert_eq!(stmt.kind(), TokenKind::Minus);
        let (left, right) = stmt.operands().unwrap();
        assert_eq!(left.kind(), TokenKind::Minus);
        assert_eq!(right.literal(), "3");
        assert_eq!(stmt.to_string(), "((1 - 2) - 3)");
    }

    #[test]
    fn test_division_is_left_associative() {
        assert_eq!(single_statement("8 / 4 / 2;").to_string(), "((8 / 4) / 2)");
        assert_eq!(single_statement("a * b / c;").to_string(), "((a * b) / c)");
    }

    #[test]
    fn test_parentheses_override_precedence() {
        assert_eq!(single_statement("(1 + 2) * 3;").to_string(), "((1 + 2) * 3)");
        assert_eq!(single_statement("((7));").to_string(), "7");
    }

    #[test]
    fn test_bare_identifier_statement() {
        let stmt = single_statement("x;");
        assert!(stmt.is_leaf());
        assert_eq!((stmt.kind(), stmt.literal()), (TokenKind::Identifier, "x"));
    }

    #[test]
    fn test_leading_identifier_continues_additive_expression() {
        assert_eq!(single_statement("x + 1 * y;").to_string(), "(x + (1 * y))");
    }

    #[test]
    fn test_leading_identifier_continues_multiplicative_expression() {
        // A bare leading identifier parses exactly like a parenthesized one.
        assert_eq!(single_statement("x * 2;").to_string(), single_statement("(x) * 2;").to_string());
        assert_eq!(single_statement("x * 2;").kind(), TokenKind::Star);
        assert_eq!(single_statement("x * 2 + 1;").to_string(), "((x * 2) + 1)");
        assert_eq!(single_statement("x / y - z * w;").to_string(), "((x / y) - (z * w))");
    }

    #[test]
    fn test_assignment_value_is_full_expression() {
        assert_eq!(single_statement("y = (a + b) * c - d;").to_string(), "y = (((a + b) * c) - d)");
    }

    #[test]
    fn test_multiple_statements_in_order() {
        let program = parse_ok("a = 1;\nb = a * 2 + 3 / c;\n(a + b) - 4;\n");
        insta::assert_snapshot!(program.to_string(), @r"
        a = 1;
        b = ((a * 2) + (3 / c));
        ((a + b) - 4);
        ");
    }

    #[test]
    fn test_node_positions() {
        let program = parse_ok("x = 1;\n  y + 2;");
        let assign = &program.children()[0];
        assert_eq!(assign.position(), Position::new(1, 3));
        let (target, _) = assign.operands().unwrap();
        assert_eq!(target.position(), Position::new(1, 1));
        assert_eq!(program.children()[1].position(), Position::new(2, 5));
    }

    #[test]
    fn test_empty_program() {
        assert!(parse_ok("").children().is_empty());
        assert!(parse_ok("  \n\t\n").children().is_empty());
    }

    #[test]
    fn test_missing_semicolon_at_end_of_input() {
        let (expected, found, literal, position) = grammar_error("1 + 2");
        assert_eq!(expected, vec![TokenKind::Semicolon]);
        assert_eq!(found, TokenKind::EndOfInput);
        assert_eq!(literal, "");
        assert_eq!(position, Position::new(1, 5));
    }

    #[test]
    fn test_unbalanced_parenthesis() {
        let (expected, found, literal, position) = grammar_error("(1 + 2;");
        assert_eq!(expected, vec![TokenKind::RightParen]);
        assert_eq!(found, TokenKind::Semicolon);
        assert_eq!(literal, ";");
        assert_eq!(position, Position::new(1, 7));
    }

    #[test]
    fn test_unexpected_token_in_factor() {
        let (expected, found, _, _) = grammar_error("= 1;");
        assert_eq!(
            expected,
            vec![TokenKind::IntegerLiteral, TokenKind::Identifier, TokenKind::LeftParen]
        );
        assert_eq!(found, TokenKind::Assign);

        let (_, found, _, position) = grammar_error("x = ;");
        assert_eq!(found, TokenKind::Semicolon);
        assert_eq!(position, Position::new(1, 5));

        let (_, found, _, _) = grammar_error("1 + ;");
        assert_eq!(found, TokenKind::Semicolon);
    }

    #[test]
    fn test_illegal_token_is_rejected() {
        let (expected, found, literal, position) = grammar_error("1 @ 2;");
        assert_eq!(expected, vec![TokenKind::Semicolon]);
        assert_eq!(found, TokenKind::Illegal);
        assert_eq!(literal, "@");
        assert_eq!(position, Position::new(1, 3));
    }

    #[test]
    fn test_chained_assignment_is_rejected() {
        let (expected, found, _, _) = grammar_error("x = y = 1;");
        assert_eq!(expected, vec![TokenKind::Semicolon]);
        assert_eq!(found, TokenKind::Assign);
    }

    #[test]
    fn test_stray_closing_paren_is_rejected() {
        let (expected, found, _, _) = grammar_error("1);");
        assert_eq!(expected, vec![TokenKind::Semicolon]);
        assert_eq!(found, TokenKind::RightParen);
    }

    #[test]
    fn test_error_after_valid_statements_returns_no_tree() {
        assert!(parse_source("a = 1; b = 2; c").is_err());
    }

    #[test]
    fn test_long_flat_chain() {
        let operators = 1_000_000;
        let source = format!("1{};", "+1".repeat(operators));
        let program = parse_ok(&source);
        let stmt = &program.children()[0];
        assert_eq!(stmt.kind(), TokenKind::Plus);
        assert_eq!(stmt.operands().unwrap().1.position(), Position::new(1, 2 * operators + 1));

        let rendered = program.to_string();
        assert_eq!(rendered.len(), 6 * operators + 1 + ";\n".len());
        assert!(rendered.ends_with(" + 1) + 1);\n"));
    }

    #[test]
    fn test_nesting_at_limit_parses() {
        let source = format!("{}7{};", "(".repeat(MAX_NESTING_DEPTH), ")".repeat(MAX_NESTING_DEPTH));
        assert_eq!(single_statement(&source).to_string(), "7");
    }

    #[test]
    fn test_deep_nesting_is_rejected() {
        let depth = 200_000;
        let source = format!("x = {}1{};", "(".repeat(depth), ")".repeat(depth));
        match parse_source(&source) {
            Err(SyntaxError::NestingTooDeep { limit, position }) => {
                assert_eq!(limit, MAX_NESTING_DEPTH);
                assert_eq!(position, Position::new(1, 4 + MAX_NESTING_DEPTH + 1));
            }
            other => panic!("expected nesting error, got {other:?}"),
        }
    }

    #[test]
    fn test_stream_error_while_priming() {
        struct FailingReader;

        impl Read for FailingReader {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::other("unplugged"))
            }
        }

        let lexer = Lexer::new(BufReader::new(FailingReader));
        assert!(matches!(Parser::new(lexer), Err(SyntaxError::Stream(_))));
    }

    #[test]
    fn test_stream_error_mid_statement() {
        let lexer = Lexer::new(&b"x = 1 + \xFF;"[..]);
        assert!(matches!(parse(lexer), Err(SyntaxError::Stream(_))));
    }
}
