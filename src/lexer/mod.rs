//! Lexical analysis module for the compiler.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into tokens for parsing, one token per request. It handles:
//!
//! - Recognition of keywords, identifiers and numeric literals using regex patterns
//! - Multi-character operators through a small DFA
//! - Comments and whitespace handling
//! - Degrading anything unrecognised to `Misc` tokens instead of failing

pub mod lexer;
pub mod tokens;
