use crate::MK_TOKEN;

use super::tokens::{Token, TokenKind, KEYWORDS, MULTI_CHAR_OPS, SEPARATORS, SINGLE_CHAR_OPS};

/// The tokenizer engine: a cursor over an immutable character buffer plus a
/// set of recognizers tried in fixed priority order.
///
/// Each recognizer scans from the current cursor position without moving it
/// and reports how many characters it would consume (or that it does not
/// match); only the dispatch loop in [`Lexer::next_token`] commits a match
/// and advances the cursor. A failed attempt therefore needs no rollback.
#[derive(Clone)]
pub struct Lexer {
    chars: Vec<char>,
    pos: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        Lexer {
            chars: source.chars().collect(),
            pos: 0,
        }
    }

    /// Character at `pos + offset`, or None past end-of-input. Never panics.
    pub fn peek(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek(0) {
            if !ch.is_whitespace() {
                break;
            }
            self.advance_n(1);
        }
    }

    /// Slices the next `len` characters into a token of the given kind and
    /// advances the cursor past them.
    fn commit(&mut self, kind: TokenKind, len: usize) -> Token {
        let lexeme: String = self.chars[self.pos..self.pos + len].iter().collect();
        self.advance_n(len);
        MK_TOKEN!(kind, lexeme)
    }

    /// COMMENT DFA:
    ///   `//` consumes through end-of-line (newline not consumed) or EOF.
    ///   `/*` consumes through the closing `*/` inclusive; an unterminated
    ///   block comment swallows the rest of the buffer and still matches.
    fn scan_comment(&self) -> Option<usize> {
        if self.peek(0) == Some('/') && self.peek(1) == Some('/') {
            let mut len = 2;
            while let Some(ch) = self.peek(len) {
                if ch == '\n' {
                    break;
                }
                len += 1;
            }
            return Some(len);
        }

        if self.peek(0) == Some('/') && self.peek(1) == Some('*') {
            let mut len = 2;
            loop {
                if self.peek(len).is_none() {
                    return Some(len);
                }
                if self.peek(len) == Some('*') && self.peek(len + 1) == Some('/') {
                    return Some(len + 2);
                }
                len += 1;
            }
        }

        None
    }

    /// REAL DFA:
    ///   Regex: [0-9]+ '.' [0-9]+ ( [eE] [+-]? [0-9]+ )?
    ///   At least one digit is required on each side of the dot, and the
    ///   exponent suffix is all-or-nothing: `1.2e` matches nothing at all.
    fn scan_real(&self) -> Option<usize> {
        let mut len = 0;

        if !self.peek(0).is_some_and(|ch| ch.is_ascii_digit()) {
            return None;
        }
        while self.peek(len).is_some_and(|ch| ch.is_ascii_digit()) {
            len += 1;
        }

        if self.peek(len) != Some('.') {
            return None;
        }
        len += 1;

        if !self.peek(len).is_some_and(|ch| ch.is_ascii_digit()) {
            return None;
        }
        while self.peek(len).is_some_and(|ch| ch.is_ascii_digit()) {
            len += 1;
        }

        if self.peek(len) == Some('e') || self.peek(len) == Some('E') {
            len += 1;
            if self.peek(len) == Some('+') || self.peek(len) == Some('-') {
                len += 1;
            }
            if !self.peek(len).is_some_and(|ch| ch.is_ascii_digit()) {
                return None;
            }
            while self.peek(len).is_some_and(|ch| ch.is_ascii_digit()) {
                len += 1;
            }
        }

        Some(len)
    }

    /// INTEGER DFA:
    ///   Regex: 0 | [1-9][0-9]*
    ///   A match immediately followed by a real-number tail (a dot with a
    ///   digit after it) is discarded so the real recognizer owns the whole
    ///   number. A literal `0` never absorbs following digits: `0123` lexes
    ///   as `0` then `123`, each under this rule independently.
    fn scan_integer(&self) -> Option<usize> {
        let first = self.peek(0)?;
        if !first.is_ascii_digit() {
            return None;
        }

        let len = if first == '0' {
            1
        } else {
            let mut len = 1;
            while self.peek(len).is_some_and(|ch| ch.is_ascii_digit()) {
                len += 1;
            }
            len
        };

        if self.peek(len) == Some('.') && self.peek(len + 1).is_some_and(|ch| ch.is_ascii_digit()) {
            return None;
        }

        Some(len)
    }

    /// IDENTIFIER DFA:
    ///   State S0: letter -> S1, anything else rejects
    ///   State S1: letter, digit or '_' stays in S1 (accepting)
    /// The maximal run is then looked up in the keyword set; a hit
    /// reclassifies the token as Keyword.
    fn scan_identifier(&self) -> Option<(TokenKind, usize)> {
        if !self.peek(0).is_some_and(|ch| ch.is_alphabetic()) {
            return None;
        }

        let mut len = 1;
        while self
            .peek(len)
            .is_some_and(|ch| ch.is_alphanumeric() || ch == '_')
        {
            len += 1;
        }

        let lexeme: String = self.chars[self.pos..self.pos + len].iter().collect();
        if KEYWORDS.contains(lexeme.as_str()) {
            Some((TokenKind::Keyword, len))
        } else {
            Some((TokenKind::Identifier, len))
        }
    }

    /// STRING DFA: opens on `"`, consumes until a closing quote (included in
    /// the match) or a newline (not consumed, no closing quote) or EOF.
    /// Unterminated strings still match; they are incomplete text, not
    /// lexical errors.
    fn scan_string(&self) -> Option<usize> {
        if self.peek(0) != Some('"') {
            return None;
        }

        let mut len = 1;
        loop {
            match self.peek(len) {
                None | Some('\n') => return Some(len),
                Some('"') => return Some(len + 1),
                Some(_) => len += 1,
            }
        }
    }

    /// Two-character operators are checked before single-character ones so
    /// `==` never splits into two `=` tokens (maximal munch), then the
    /// separator set.
    fn scan_operator_or_separator(&self) -> Option<(TokenKind, usize)> {
        if let (Some(first), Some(second)) = (self.peek(0), self.peek(1)) {
            let two: String = [first, second].iter().collect();
            if MULTI_CHAR_OPS.contains(two.as_str()) {
                return Some((TokenKind::Operator, 2));
            }
        }

        let ch = self.peek(0)?;
        if SINGLE_CHAR_OPS.contains(&ch) {
            return Some((TokenKind::Operator, 1));
        }
        if SEPARATORS.contains(&ch) {
            return Some((TokenKind::Separator, 1));
        }

        None
    }

    /// Produces the next token. Whitespace is skipped, comments are returned
    /// as Comment tokens, and once the buffer is exhausted every further call
    /// returns EndOfInput with an empty lexeme.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        if let Some(len) = self.scan_comment() {
            return self.commit(TokenKind::Comment, len);
        }

        if self.at_eof() {
            return MK_TOKEN!(TokenKind::EndOfInput, String::new());
        }

        if let Some(len) = self.scan_real() {
            return self.commit(TokenKind::Real, len);
        }
        if let Some(len) = self.scan_integer() {
            return self.commit(TokenKind::Integer, len);
        }
        if let Some((kind, len)) = self.scan_identifier() {
            return self.commit(kind, len);
        }
        if let Some(len) = self.scan_string() {
            return self.commit(TokenKind::String, len);
        }
        if let Some((kind, len)) = self.scan_operator_or_separator() {
            return self.commit(kind, len);
        }

        self.commit(TokenKind::Unknown, 1)
    }
}

/// Lazily lexes `source` into a finite token stream ending with the
/// EndOfInput sentinel (inclusive).
pub fn tokenize(source: &str) -> Tokens {
    Tokens {
        lexer: Lexer::new(source),
        done: false,
    }
}

/// Iterator over the tokens of one source buffer. Yields EndOfInput exactly
/// once and then terminates.
pub struct Tokens {
    lexer: Lexer,
    done: bool,
}

impl Iterator for Tokens {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.done {
            return None;
        }

        let token = self.lexer.next_token();
        if token.kind == TokenKind::EndOfInput {
            self.done = true;
        }
        Some(token)
    }
}
