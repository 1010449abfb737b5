//! Utility macros for the lexer.
//!
//! This module defines the `MK_TOKEN!` helper macro used to construct Token
//! instances throughout the tokenizer, reducing boilerplate at every commit
//! site in the dispatch loop.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - The exact matched source text
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Integer, "42".to_string());
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr) => {
        Token {
            kind: $kind,
            lexeme: $lexeme,
        }
    };
}
