#![allow(clippy::module_inception)]

//! Lexical analyzer for the RAT25F language.
//!
//! The crate exposes a single tokenizer engine: feed it source text and pull
//! classified tokens out one at a time with [`lexer::lexer::Lexer`], or
//! iterate over the whole stream with [`lexer::lexer::tokenize`]. Comments
//! are emitted like any other token so callers decide whether to keep them;
//! the bundled driver binary drops them before writing its token table.

pub mod errors;
pub mod lexer;
pub mod macros;
