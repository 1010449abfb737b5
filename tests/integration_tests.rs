//! Integration tests for end-to-end lexing.
//!
//! These tests run whole RAT25F programs through the tokenizer the same way
//! the driver does: pull tokens until the EndOfInput sentinel, dropping
//! Comment tokens from the significant stream.

use rat25f::lexer::{
    lexer::tokenize,
    tokens::{Token, TokenKind},
};

fn significant_tokens(source: &str) -> Vec<Token> {
    tokenize(source)
        .take_while(|token| token.kind != TokenKind::EndOfInput)
        .filter(|token| token.kind != TokenKind::Comment)
        .collect()
}

#[test]
fn test_lex_small_program() {
    let source = r#"
        /* convert a temperature */
        function convert(fahr: int)
        {
            return 5 * (fahr - 32) / 9;
        }

        // entry point
        {
            int low; int high;
            low = 0;
            high = 300.5;
            while (low <= high) do
                write(convert(low));
                low = low + 1;
            od
        }
    "#;

    let tokens = significant_tokens(source);

    // Comments are gone, everything else is classified.
    assert!(tokens.iter().all(|t| t.kind != TokenKind::Comment));
    assert!(tokens.iter().all(|t| t.kind != TokenKind::Unknown));

    assert_eq!(tokens[0].kind, TokenKind::Keyword);
    assert_eq!(tokens[0].lexeme, "function");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].lexeme, "convert");

    let reals: Vec<_> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Real)
        .collect();
    assert_eq!(reals.len(), 1);
    assert_eq!(reals[0].lexeme, "300.5");

    let keywords: Vec<_> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Keyword)
        .map(|t| t.lexeme.as_str())
        .collect();
    assert!(keywords.contains(&"while"));
    assert!(keywords.contains(&"do"));
    assert!(keywords.contains(&"od"));
    assert!(keywords.contains(&"return"));
}

#[test]
fn test_stream_always_ends_with_eof_sentinel() {
    for source in ["", "   ", "x", "0123", "\"open", "/* open"] {
        let tokens: Vec<Token> = tokenize(source).collect();
        let last = tokens.last().unwrap();
        assert_eq!(last.kind, TokenKind::EndOfInput);
        assert_eq!(last.lexeme, "");
        // The sentinel appears exactly once.
        let eofs = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::EndOfInput)
            .count();
        assert_eq!(eofs, 1);
    }
}

#[test]
fn test_fresh_runs_are_identical() {
    let source = "if (count != 0) then count = count - 1; else read(count); fi";

    let first: Vec<Token> = tokenize(source).collect();
    let second: Vec<Token> = tokenize(source).collect();

    assert_eq!(first, second);
}

#[test]
fn test_malformed_input_never_aborts() {
    // Every character lexes as *something*; anomalies come back as tokens,
    // not failures.
    let source = "@ $ ~ ` 3. 0. \"dangling\n & |";
    let tokens: Vec<Token> = tokenize(source).collect();

    assert_eq!(tokens.last().unwrap().kind, TokenKind::EndOfInput);
    let unknowns = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Unknown)
        .count();
    assert_eq!(unknowns, 8); // @ $ ~ ` . . & |
}
