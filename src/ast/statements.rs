use std::slice::{Iter, IterMut};

use super::ast::{Expr, Stmt};

/// Variable name a bare call statement is assigned to.
///
/// Identifiers must start with a letter, so no user variable can be named this.
pub const DISCARD_NAME: &str = "_";

/// Let Statement
/// Declares a variable with an explicit type name. There is no initializer.
#[derive(Debug, PartialEq)]
pub struct LetStmt {
    pub var_name: String,
    pub var_type: String,
}

/// Assignment Statement
/// Assigns an expression to a variable. Call statements are stored as an
/// assignment to [`DISCARD_NAME`].
#[derive(Debug, PartialEq)]
pub struct AssignmentStmt {
    pub var_name: String,
    pub assign_expr: Expr,
}

impl AssignmentStmt {
    pub fn is_discarded(&self) -> bool {
        self.var_name == DISCARD_NAME
    }
}

/// If Statement
/// Both branches are always present. An `else if` chain stores the nested
/// if statement directly as the else branch.
#[derive(Debug, PartialEq)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_stmt: Stmt,
    pub else_stmt: Stmt,
}

#[derive(Debug, PartialEq)]
pub struct ReturnStmt {
    pub return_expr: Expr,
}

/// Compound Statement
/// A braced sequence of statements. It does not open a new scope.
#[derive(Debug, PartialEq, Default)]
pub struct CompoundStmt {
    pub stmts: Vec<Stmt>,
}

impl CompoundStmt {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.stmts.iter()
    }
    pub fn iter_mut(&mut self) -> IterMut<'_, Stmt> {
        self.stmts.iter_mut()
    }
}
