//! Parser state and entry points.
//!
//! The parser owns its [`Lexer`] and keeps exactly one token of lookahead.
//! The grammar itself lives in free functions (`expr`, `stmt`, `decl`) that
//! take the parser as an explicit `&mut` context.

use std::mem;

use crate::{
    ast::{ast::Decl, declarations::Module},
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
};

use super::{decl::parse_all, lookups::binop_precedence};

/// Deepest nesting of parentheses, unary operators, call arguments, blocks
/// and else-if chains the parser accepts.
pub const MAX_NESTING_DEPTH: usize = 256;

pub struct Parser {
    lexer: Lexer,
    current_token: Token,
    depth: usize,
}

impl Parser {
    /// Creates a parser over `code`, already positioned on the first token.
    pub fn new(code: &str) -> Self {
        let mut lexer = Lexer::new(code);
        let current_token = lexer.get_token();

        Parser {
            lexer,
            current_token,
            depth: 0,
        }
    }

    pub fn current_token(&self) -> &Token {
        &self.current_token
    }

    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token.kind
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> Token {
        let next = self.lexer.get_token();
        mem::replace(&mut self.current_token, next)
    }

    /// Consumes a token of `expected_kind`, or fails naming `expected`.
    pub fn expect(&mut self, expected_kind: TokenKind, expected: &str) -> Result<Token, Error> {
        if self.current_token.kind != expected_kind {
            return Err(self.unexpected(expected));
        }

        Ok(self.advance())
    }

    /// Consumes the punctuation token `value`.
    pub fn expect_misc(&mut self, value: &str) -> Result<Token, Error> {
        if !self.current_token.is_misc(value) {
            return Err(self.unexpected(value));
        }

        Ok(self.advance())
    }

    /// Runs `parse_fn` one nesting level deeper.
    pub fn nested<T>(&mut self, parse_fn: fn(&mut Parser) -> Result<T, Error>) -> Result<T, Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Error::new(ErrorImpl::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
            }));
        }

        self.depth += 1;
        let result = parse_fn(self);
        self.depth -= 1;
        result
    }

    /// Builds the syntax error for the current token.
    pub fn unexpected(&self, expected: &str) -> Error {
        Error::new(ErrorImpl::UnexpectedToken {
            expected: String::from(expected),
            found: self.current_token.describe(),
        })
    }

    /// Precedence of the current token as a binary operator, -1 if it is not one.
    pub fn get_precedence(&self) -> i32 {
        match self.current_token.kind {
            TokenKind::Op => binop_precedence(&self.current_token.value),
            _ => -1,
        }
    }
}

/// Parses every declaration in `code`.
pub fn parse(code: &str) -> Result<Vec<Decl>, Error> {
    let mut parser = Parser::new(code);
    parse_all(&mut parser)
}

/// Parses `code` into a module called `name`.
pub fn parse_module(name: &str, code: &str) -> Result<Module, Error> {
    Ok(Module::new(name, parse(code)?))
}
