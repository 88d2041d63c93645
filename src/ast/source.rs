//! Re-serialises the AST as stapl source text.
//!
//! Parsing the output yields a tree that is structurally equal to the one
//! printed. Binary operands that are themselves binary expressions are
//! always parenthesised, so the printed text does not depend on the
//! precedence table.

use std::fmt::{Display, Formatter, Result};

use super::{
    ast::{Decl, Expr, Stmt},
    declarations::{FunctionDecl, Module, Prototype},
};

const INDENT: &str = "  ";

// Keeps a decimal point so the lexer reads the literal back as a float.
fn format_float(value: f64) -> String {
    let text = value.to_string();
    if text.contains('.') || !value.is_finite() {
        text
    } else {
        format!("{}.0", text)
    }
}

fn write_operand(f: &mut Formatter<'_>, operand: &Expr) -> Result {
    match operand {
        Expr::Binary(_) => write!(f, "({})", operand),
        _ => write!(f, "{}", operand),
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Expr::Int(node) => write!(f, "{}", node.value),
            Expr::Float(node) => write!(f, "{}", format_float(node.value)),
            Expr::Bool(node) => write!(f, "{}", node.value),
            Expr::Variable(node) => write!(f, "{}", node.name),
            Expr::Unary(node) => {
                write!(f, "{}", node.operator)?;
                write_operand(f, &node.operand)
            }
            Expr::Binary(node) => {
                write_operand(f, &node.lhs)?;
                write!(f, " {} ", node.operator)?;
                write_operand(f, &node.rhs)
            }
            Expr::Call(node) => {
                write!(f, "{}(", node.callee)?;
                for (i, arg) in node.args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
        }
    }
}

// Writes a branch or body; anything but a compound is wrapped in braces.
fn write_block(f: &mut Formatter<'_>, stmt: &Stmt, depth: usize) -> Result {
    match stmt {
        Stmt::Compound(_) => write_stmt(f, stmt, depth),
        _ => {
            writeln!(f, "{{")?;
            write!(f, "{}", INDENT.repeat(depth + 1))?;
            write_stmt(f, stmt, depth + 1)?;
            write!(f, "\n{}}}", INDENT.repeat(depth))
        }
    }
}

fn write_stmt(f: &mut Formatter<'_>, stmt: &Stmt, depth: usize) -> Result {
    match stmt {
        Stmt::Let(node) => write!(f, "let {}: {}", node.var_name, node.var_type),
        Stmt::Assignment(node) => match &node.assign_expr {
            Expr::Call(_) if node.is_discarded() => write!(f, "{}", node.assign_expr),
            _ => write!(f, "{} = {}", node.var_name, node.assign_expr),
        },
        Stmt::If(node) => {
            write!(f, "if {} ", node.condition)?;
            write_block(f, &node.then_stmt, depth)?;
            write!(f, " else ")?;
            match &node.else_stmt {
                Stmt::If(_) => write_stmt(f, &node.else_stmt, depth),
                _ => write_block(f, &node.else_stmt, depth),
            }
        }
        Stmt::Return(node) => write!(f, "return {}", node.return_expr),
        Stmt::Compound(node) => {
            write!(f, "{{")?;
            for inner in node.iter() {
                write!(f, "\n{}", INDENT.repeat(depth + 1))?;
                write_stmt(f, inner, depth + 1)?;
            }
            if !node.stmts.is_empty() {
                write!(f, "\n{}", INDENT.repeat(depth))?;
            }
            write!(f, "}}")
        }
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write_stmt(f, self, 0)
    }
}

impl Display for Prototype {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}(", self.name)?;
        for (i, (arg_name, arg_type)) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", arg_name, arg_type)?;
        }
        write!(f, "): {}", self.return_type)
    }
}

impl Display for FunctionDecl {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match &self.func_body {
            Some(body) => {
                write!(f, "def {} ", self.proto)?;
                write_block(f, body, 0)
            }
            None => write!(f, "extern {}", self.proto),
        }
    }
}

impl Display for Decl {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Decl::Function(function) => write!(f, "{}", function),
        }
    }
}

impl Display for Module {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for (i, decl) in self.decls.iter().enumerate() {
            if i > 0 {
                write!(f, "\n\n")?;
            }
            write!(f, "{}", decl)?;
        }
        Ok(())
    }
}
