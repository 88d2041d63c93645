//! Structural equality that ignores type tags.
//!
//! The derived `PartialEq` on the node types also compares annotations, so
//! an annotated tree never equals a freshly parsed one. These functions
//! compare shape and values only.

use super::{
    ast::{Decl, Expr, Stmt},
    declarations::{FunctionDecl, Module},
};

pub fn expr_equals(expr1: &Expr, expr2: &Expr) -> bool {
    match (expr1, expr2) {
        (Expr::Int(node1), Expr::Int(node2)) => node1.value == node2.value,
        (Expr::Float(node1), Expr::Float(node2)) => node1.value == node2.value,
        (Expr::Bool(node1), Expr::Bool(node2)) => node1.value == node2.value,
        (Expr::Variable(node1), Expr::Variable(node2)) => node1.name == node2.name,
        (Expr::Unary(node1), Expr::Unary(node2)) => {
            node1.operator == node2.operator && expr_equals(&node1.operand, &node2.operand)
        }
        (Expr::Binary(node1), Expr::Binary(node2)) => {
            node1.operator == node2.operator
                && expr_equals(&node1.lhs, &node2.lhs)
                && expr_equals(&node1.rhs, &node2.rhs)
        }
        (Expr::Call(node1), Expr::Call(node2)) => {
            node1.callee == node2.callee
                && node1.args.len() == node2.args.len()
                && node1
                    .args
                    .iter()
                    .zip(node2.args.iter())
                    .all(|(arg1, arg2)| expr_equals(arg1, arg2))
        }
        _ => false,
    }
}

pub fn stmt_equals(stmt1: &Stmt, stmt2: &Stmt) -> bool {
    match (stmt1, stmt2) {
        (Stmt::Let(node1), Stmt::Let(node2)) => node1 == node2,
        (Stmt::Assignment(node1), Stmt::Assignment(node2)) => {
            node1.var_name == node2.var_name
                && expr_equals(&node1.assign_expr, &node2.assign_expr)
        }
        (Stmt::If(node1), Stmt::If(node2)) => {
            expr_equals(&node1.condition, &node2.condition)
                && stmt_equals(&node1.then_stmt, &node2.then_stmt)
                && stmt_equals(&node1.else_stmt, &node2.else_stmt)
        }
        (Stmt::Return(node1), Stmt::Return(node2)) => {
            expr_equals(&node1.return_expr, &node2.return_expr)
        }
        (Stmt::Compound(node1), Stmt::Compound(node2)) => {
            node1.stmts.len() == node2.stmts.len()
                && node1
                    .iter()
                    .zip(node2.iter())
                    .all(|(inner1, inner2)| stmt_equals(inner1, inner2))
        }
        _ => false,
    }
}

pub fn function_equals(function1: &FunctionDecl, function2: &FunctionDecl) -> bool {
    function1.proto == function2.proto
        && match (&function1.func_body, &function2.func_body) {
            (Some(body1), Some(body2)) => stmt_equals(body1, body2),
            (None, None) => true,
            _ => false,
        }
}

pub fn decl_equals(decl1: &Decl, decl2: &Decl) -> bool {
    match (decl1, decl2) {
        (Decl::Function(function1), Decl::Function(function2)) => {
            function_equals(function1, function2)
        }
    }
}

pub fn module_equals(module1: &Module, module2: &Module) -> bool {
    module1.name == module2.name
        && module1.decls.len() == module2.decls.len()
        && module1
            .decls
            .iter()
            .zip(module2.decls.iter())
            .all(|(decl1, decl2)| decl_equals(decl1, decl2))
}
