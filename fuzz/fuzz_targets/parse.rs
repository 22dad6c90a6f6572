#![no_main]

use blang::lexer::Lexer;
use blang::parser;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Raw bytes go straight to the streaming lexer; invalid UTF-8 must surface as an error.
    let _ = parser::parse(Lexer::new(data));

    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(ast) = parser::parse_source(s) {
            // The parenthesized rendering of a valid program must itself parse.
            let rendered = ast.to_string();
            assert!(parser::parse_source(&rendered).is_ok(), "rendering did not reparse: {rendered:?}");
        }
    }
});
