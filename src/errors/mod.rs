//! Error types for the driver binary.
//!
//! The tokenizer engine itself has no error type: malformed input is
//! represented as data (Unknown tokens, unterminated string and comment
//! lexemes) and lexing always runs to completion. The variants here cover
//! the driver's concerns only: command-line usage and file I/O.

pub mod errors;
