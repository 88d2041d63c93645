//! Error types and error handling for the compiler.
//!
//! This module defines the error type shared by every stage. It includes:
//!
//! - A single `Error` value carried through `Result` by the parser and
//!   the type annotator
//! - Specific error variants for each fault, grouped into categories
//! - Messages prefixed with their category so drivers can report them as-is

pub mod errors;

#[cfg(test)]
mod tests;
