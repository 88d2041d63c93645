use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("def", TokenKind::Def);
        map.insert("extern", TokenKind::Extern);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("let", TokenKind::Let);
        map.insert("return", TokenKind::Return);
        map.insert("true", TokenKind::Bool);
        map.insert("false", TokenKind::Bool);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Eof,
    Def,
    Extern,
    If,
    Else,
    Identifier,
    Int,
    Float,
    Bool,
    Let,
    Return,
    /// Arithmetic and comparison operators
    Op,
    /// Any other single character, mostly punctuation
    Misc,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
}

impl Token {
    pub fn is_misc(&self, value: &str) -> bool {
        self.kind == TokenKind::Misc && self.value == value
    }

    pub fn is_op(&self, value: &str) -> bool {
        self.kind == TokenKind::Op && self.value == value
    }

    /// Text used when the token shows up in an error message.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Eof => String::from("end of input"),
            _ => self.value.clone(),
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.kind, self.value)
    }
}
