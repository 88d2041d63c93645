use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::MK_TOKEN;

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// Turns the text matched by a pattern into a token, or `None` to skip it.
pub type PatternHandler = fn(&str) -> Option<Token>;

pub struct LexerPattern {
    regex: Regex,
    handler: PatternHandler,
}

lazy_static! {
    // Tried in order; every regex is anchored at the current position.
    static ref PATTERNS: Vec<LexerPattern> = vec![
        LexerPattern { regex: Regex::new(r"^\s+").unwrap(), handler: skip_handler },
        LexerPattern { regex: Regex::new(r"^#[^\r\n]*").unwrap(), handler: skip_handler },
        LexerPattern { regex: Regex::new(r"^[a-zA-Z][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
        LexerPattern { regex: Regex::new(r"^[0-9.]+").unwrap(), handler: number_handler },
    ];

    /// Operator prefix -> characters allowed to extend it.
    pub static ref OPERATOR_DFA: HashMap<&'static str, HashSet<char>> = {
        let mut map = HashMap::new();
        map.insert("<", HashSet::from(['=']));
        map.insert(">", HashSet::from(['=']));
        map.insert("=", HashSet::from(['=']));
        map.insert("!", HashSet::from(['=']));
        map.insert("+", HashSet::new());
        map.insert("-", HashSet::new());
        map.insert("*", HashSet::new());
        map.insert("/", HashSet::new());
        map.insert("%", HashSet::new());
        map
    };

    /// Accepting states of the operator DFA. A prefix that stops anywhere
    /// else (a lone `=` or `!`) is punctuation.
    pub static ref OPERATORS: HashSet<&'static str> = HashSet::from([
        "<", "<=", ">", ">=", "==", "!=", "+", "-", "*", "/", "%",
    ]);
}

/// Pull-based tokenizer over a complete source string.
///
/// Each call to [`Lexer::get_token`] produces exactly one token. Once the
/// input is exhausted every further call yields an `Eof` token.
#[derive(Debug, Clone)]
pub struct Lexer {
    source: String,
    pos: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        Lexer {
            source: String::from(source),
            pos: 0,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Rewinds to the beginning of the source.
    pub fn reset(&mut self) {
        self.pos = 0;
    }

    pub fn get_token(&mut self) -> Token {
        let token = self.next_token();
        trace!(kind = %token.kind, value = %token.value, "lexed token");
        token
    }

    fn next_token(&mut self) -> Token {
        'scan: while !self.at_eof() {
            for pattern in PATTERNS.iter() {
                let matched = match pattern.regex.find(self.remainder()) {
                    Some(found) => found.as_str().to_string(),
                    None => continue,
                };
                self.advance_n(matched.len());

                match (pattern.handler)(&matched) {
                    Some(token) => return token,
                    None => continue 'scan,
                }
            }

            return self.operator_handler();
        }

        MK_TOKEN!(TokenKind::Eof, "")
    }

    fn operator_handler(&mut self) -> Token {
        let first = match self.at() {
            Some(c) => c,
            None => return MK_TOKEN!(TokenKind::Eof, ""),
        };
        self.advance_n(first.len_utf8());

        let mut operator = first.to_string();
        if !OPERATOR_DFA.contains_key(operator.as_str()) {
            return MK_TOKEN!(TokenKind::Misc, operator);
        }

        while let Some(next) = self.at() {
            match OPERATOR_DFA.get(operator.as_str()) {
                Some(allowed) if allowed.contains(&next) => {
                    operator.push(next);
                    self.advance_n(next.len_utf8());
                }
                _ => break,
            }
        }

        if OPERATORS.contains(operator.as_str()) {
            MK_TOKEN!(TokenKind::Op, operator)
        } else {
            MK_TOKEN!(TokenKind::Misc, operator)
        }
    }
}

fn skip_handler(_matched: &str) -> Option<Token> {
    None
}

fn symbol_handler(matched: &str) -> Option<Token> {
    let kind = RESERVED_LOOKUP
        .get(matched)
        .copied()
        .unwrap_or(TokenKind::Identifier);

    Some(MK_TOKEN!(kind, matched))
}

// Several dots are let through here; the parser rejects the literal.
fn number_handler(matched: &str) -> Option<Token> {
    if matched.contains('.') {
        Some(MK_TOKEN!(TokenKind::Float, matched))
    } else {
        Some(MK_TOKEN!(TokenKind::Int, matched))
    }
}

/// Collects every token of `source`, ending with the first `Eof`.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lexer.get_token();
        let at_end = token.kind == TokenKind::Eof;
        tokens.push(token);

        if at_end {
            return tokens;
        }
    }
}
