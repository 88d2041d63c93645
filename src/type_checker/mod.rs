//! Type annotation pass.
//!
//! A single forward pass that records a type name on every expression node
//! and checks statements against the declared types:
//!
//! - Variables must be declared by `let` or as a parameter of the current function
//! - Operators and calls resolve against registered overloads by exact argument types
//! - Assignments, conditions and returns must match their expected type
//!
//! The first fault aborts the pass.

pub mod type_checker;
pub mod types;
