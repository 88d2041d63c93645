use super::{
    declarations::FunctionDecl,
    expressions::{BinaryExpr, BoolExpr, CallExpr, FloatExpr, IntExpr, UnaryExpr, VariableExpr},
    statements::{AssignmentStmt, CompoundStmt, IfStmt, LetStmt, ReturnStmt, DISCARD_NAME},
    types::TypeTag,
};

/// Expression node.
///
/// Recursive alternatives own their children through a `Box`, so every
/// expression tree is a strict tree with a single owner per node.
#[derive(Debug, PartialEq)]
pub enum Expr {
    Int(IntExpr),
    Float(FloatExpr),
    Bool(BoolExpr),
    Variable(VariableExpr),
    Unary(Box<UnaryExpr>),
    Binary(Box<BinaryExpr>),
    Call(Box<CallExpr>),
}

impl Expr {
    pub fn int(value: i32) -> Self {
        Expr::Int(IntExpr::new(value))
    }

    pub fn float(value: f64) -> Self {
        Expr::Float(FloatExpr::new(value))
    }

    pub fn bool(value: bool) -> Self {
        Expr::Bool(BoolExpr::new(value))
    }

    pub fn variable(name: &str) -> Self {
        Expr::Variable(VariableExpr::new(name))
    }

    pub fn unary(operator: &str, operand: Expr) -> Self {
        Expr::Unary(Box::new(UnaryExpr {
            operator: String::from(operator),
            operand,
            expr_type: TypeTag::unset(),
        }))
    }

    pub fn binary(operator: &str, lhs: Expr, rhs: Expr) -> Self {
        Expr::Binary(Box::new(BinaryExpr {
            operator: String::from(operator),
            lhs,
            rhs,
            expr_type: TypeTag::unset(),
        }))
    }

    pub fn call(callee: &str, args: Vec<Expr>) -> Self {
        Expr::Call(Box::new(CallExpr {
            callee: String::from(callee),
            args,
            expr_type: TypeTag::unset(),
        }))
    }

    pub fn type_tag(&self) -> &TypeTag {
        match self {
            Expr::Int(node) => &node.expr_type,
            Expr::Float(node) => &node.expr_type,
            Expr::Bool(node) => &node.expr_type,
            Expr::Variable(node) => &node.expr_type,
            Expr::Unary(node) => &node.expr_type,
            Expr::Binary(node) => &node.expr_type,
            Expr::Call(node) => &node.expr_type,
        }
    }

    /// The annotated type name, if the annotator has visited this node.
    pub fn get_type(&self) -> Option<&str> {
        self.type_tag().get()
    }
}

/// Statement node.
#[derive(Debug, PartialEq)]
pub enum Stmt {
    Let(LetStmt),
    Assignment(AssignmentStmt),
    If(Box<IfStmt>),
    Return(ReturnStmt),
    Compound(Box<CompoundStmt>),
}

impl Stmt {
    pub fn let_stmt(var_name: &str, var_type: &str) -> Self {
        Stmt::Let(LetStmt {
            var_name: String::from(var_name),
            var_type: String::from(var_type),
        })
    }

    pub fn assignment(var_name: &str, assign_expr: Expr) -> Self {
        Stmt::Assignment(AssignmentStmt {
            var_name: String::from(var_name),
            assign_expr,
        })
    }

    /// A call whose result is thrown away.
    pub fn call(callee: &str, args: Vec<Expr>) -> Self {
        Stmt::assignment(DISCARD_NAME, Expr::call(callee, args))
    }

    pub fn if_stmt(condition: Expr, then_stmt: Stmt, else_stmt: Stmt) -> Self {
        Stmt::If(Box::new(IfStmt {
            condition,
            then_stmt,
            else_stmt,
        }))
    }

    pub fn return_stmt(return_expr: Expr) -> Self {
        Stmt::Return(ReturnStmt { return_expr })
    }

    pub fn compound(stmts: Vec<Stmt>) -> Self {
        Stmt::Compound(Box::new(CompoundStmt { stmts }))
    }
}

/// Top-level declaration node. Functions are the only declarations.
#[derive(Debug, PartialEq)]
pub enum Decl {
    Function(FunctionDecl),
}

impl Decl {
    pub fn name(&self) -> &str {
        match self {
            Decl::Function(function) => &function.proto.name,
        }
    }
}
