//! AST dump in the `BinaryExpr(+, Variable(a), Literal(1, int))` style.
//!
//! The dump shows the shape of the tree, not source text; see
//! [`super::source`] for output that can be parsed again.

use super::{
    ast::{Decl, Expr, Stmt},
    declarations::{FunctionDecl, Module, Prototype},
};

pub fn dump_expr(expr: &Expr) -> String {
    match expr {
        Expr::Int(node) => format!("Literal({}, int)", node.value),
        Expr::Float(node) => format!("Literal({}, float)", node.value),
        Expr::Bool(node) => format!("Literal({}, bool)", node.value),
        Expr::Variable(node) => format!("Variable({})", node.name),
        Expr::Unary(node) => format!("UnaryExpr({}, {})", node.operator, dump_expr(&node.operand)),
        Expr::Binary(node) => format!(
            "BinaryExpr({}, {}, {})",
            node.operator,
            dump_expr(&node.lhs),
            dump_expr(&node.rhs)
        ),
        Expr::Call(node) => format!(
            "CallExpr({}, [{}])",
            node.callee,
            join(node.args.iter().map(dump_expr))
        ),
    }
}

pub fn dump_stmt(stmt: &Stmt) -> String {
    match stmt {
        Stmt::Let(node) => format!("Let({}, {})", node.var_name, node.var_type),
        Stmt::Assignment(node) => {
            format!("Assign({}, {})", node.var_name, dump_expr(&node.assign_expr))
        }
        Stmt::If(node) => format!(
            "If({}, {}, {})",
            dump_expr(&node.condition),
            dump_stmt(&node.then_stmt),
            dump_stmt(&node.else_stmt)
        ),
        Stmt::Return(node) => format!("Return({})", dump_expr(&node.return_expr)),
        Stmt::Compound(node) => format!("Compound([{}])", join(node.iter().map(dump_stmt))),
    }
}

pub fn dump_proto(proto: &Prototype) -> String {
    format!(
        "Prototype({}, [{}], {})",
        proto.name,
        join(
            proto
                .args
                .iter()
                .map(|(arg_name, arg_type)| format!("Arg({}, {})", arg_name, arg_type))
        ),
        proto.return_type
    )
}

pub fn dump_function(function: &FunctionDecl) -> String {
    match &function.func_body {
        Some(body) => format!("Func({}, {})", dump_proto(&function.proto), dump_stmt(body)),
        None => format!("Func({})", dump_proto(&function.proto)),
    }
}

pub fn dump_decl(decl: &Decl) -> String {
    match decl {
        Decl::Function(function) => dump_function(function),
    }
}

/// One declaration per line.
pub fn dump_module(module: &Module) -> String {
    module
        .decls
        .iter()
        .map(dump_decl)
        .collect::<Vec<String>>()
        .join("\n")
}

fn join(items: impl Iterator<Item = String>) -> String {
    items.collect::<Vec<String>>().join(", ")
}
