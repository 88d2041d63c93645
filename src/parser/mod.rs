//! Parser module for building the Abstract Syntax Tree (AST).
//!
//! A recursive-descent parser with one token of lookahead and no
//! backtracking. Expressions are parsed by precedence climbing over the
//! binary operator table in [`lookups`]. The first structural mismatch
//! aborts the parse with a syntax error.

pub mod decl;
pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
