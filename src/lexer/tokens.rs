use lazy_static::lazy_static;
use std::{collections::HashSet, fmt::Display};

lazy_static! {
    pub static ref KEYWORDS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("while");
        set.insert("if");
        set.insert("else");
        set.insert("for");
        set.insert("int");
        set.insert("float");
        set.insert("bool");
        set.insert("true");
        set.insert("false");
        set.insert("function");
        set.insert("return");
        set.insert("read");
        set.insert("write");
        set.insert("then");
        set.insert("fi");
        set.insert("do");
        set.insert("od");
        set
    };
    pub static ref MULTI_CHAR_OPS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("<=");
        set.insert(">=");
        set.insert("==");
        set.insert("!=");
        set.insert("&&");
        set.insert("||");
        set
    };
    pub static ref SINGLE_CHAR_OPS: HashSet<char> = {
        let mut set = HashSet::new();
        for op in ['+', '-', '*', '/', '%', '=', '<', '>', '!'] {
            set.insert(op);
        }
        set
    };
    pub static ref SEPARATORS: HashSet<char> = {
        let mut set = HashSet::new();
        for sep in ['(', ')', '{', '}', '[', ']', ',', ';', ':'] {
            set.insert(sep);
        }
        set
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Keyword,
    Identifier,
    Integer,
    Real,
    Operator,
    Separator,
    String,
    Comment,
    EndOfInput,
    Unknown,
}

impl TokenKind {
    /// Lowercase column name used by the driver's token table.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Identifier => "identifier",
            TokenKind::Integer => "integer",
            TokenKind::Real => "real",
            TokenKind::Operator => "operator",
            TokenKind::Separator => "separator",
            TokenKind::String => "string",
            TokenKind::Comment => "comment",
            TokenKind::EndOfInput => "eof",
            TokenKind::Unknown => "unknown",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

/// A classified piece of source text. The lexeme is the exact substring that
/// was matched; no case folding or numeric parsing happens at this layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.kind, self.lexeme)
    }
}
