use super::{ast::Expr, types::TypeTag};

// LITERALS

/// Integer Expression
/// Represents an integer literal in the AST.
#[derive(Debug, PartialEq)]
pub struct IntExpr {
    pub value: i32,
    pub expr_type: TypeTag,
}

impl IntExpr {
    pub fn new(value: i32) -> Self {
        IntExpr {
            value,
            expr_type: TypeTag::unset(),
        }
    }
}

/// Float Expression
/// Represents a floating-point literal in the AST.
#[derive(Debug, PartialEq)]
pub struct FloatExpr {
    pub value: f64,
    pub expr_type: TypeTag,
}

impl FloatExpr {
    pub fn new(value: f64) -> Self {
        FloatExpr {
            value,
            expr_type: TypeTag::unset(),
        }
    }
}

/// Bool Expression
/// Represents `true` or `false` in the AST.
#[derive(Debug, PartialEq)]
pub struct BoolExpr {
    pub value: bool,
    pub expr_type: TypeTag,
}

impl BoolExpr {
    pub fn new(value: bool) -> Self {
        BoolExpr {
            value,
            expr_type: TypeTag::unset(),
        }
    }
}

/// Variable Expression
/// Represents a reference to a parameter or a `let`-declared variable.
#[derive(Debug, PartialEq)]
pub struct VariableExpr {
    pub name: String,
    pub expr_type: TypeTag,
}

impl VariableExpr {
    pub fn new(name: &str) -> Self {
        VariableExpr {
            name: String::from(name),
            expr_type: TypeTag::unset(),
        }
    }
}

// COMPLEX

/// Unary Expression
/// Represents a prefix operator applied to a single operand.
#[derive(Debug, PartialEq)]
pub struct UnaryExpr {
    pub operator: String,
    pub operand: Expr,
    pub expr_type: TypeTag,
}

/// Binary Expression
/// Represents an arithmetic or comparison operation between two expressions.
#[derive(Debug, PartialEq)]
pub struct BinaryExpr {
    pub operator: String,
    pub lhs: Expr,
    pub rhs: Expr,
    pub expr_type: TypeTag,
}

/// Call Expression
/// Represents a call of a named function with its arguments in order.
#[derive(Debug, PartialEq)]
pub struct CallExpr {
    pub callee: String,
    pub args: Vec<Expr>,
    pub expr_type: TypeTag,
}
