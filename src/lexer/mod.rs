//! Lexical analysis module for the RAT25F language.
//!
//! This module contains the tokenizer that converts source text into a
//! stream of classified tokens. It handles:
//!
//! - Longest-match dispatch over per-pattern DFA recognizers
//! - Recognition of keywords, identifiers, numeric literals, strings,
//!   operators and separators
//! - Line and block comments (emitted as Comment tokens, filtered by the
//!   driver)
//! - Whitespace skipping and a single-character Unknown fallback

pub mod lexer;
pub mod tokens;
