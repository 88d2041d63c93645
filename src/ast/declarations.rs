use super::ast::{Decl, Stmt};

/// Function prototype: name, ordered `(name, type)` parameters and return type.
#[derive(Debug, PartialEq, Clone)]
pub struct Prototype {
    pub name: String,
    pub args: Vec<(String, String)>,
    pub return_type: String,
}

impl Prototype {
    pub fn new(name: &str, args: &[(&str, &str)], return_type: &str) -> Self {
        Prototype {
            name: String::from(name),
            args: args
                .iter()
                .map(|(arg_name, arg_type)| (String::from(*arg_name), String::from(*arg_type)))
                .collect(),
            return_type: String::from(return_type),
        }
    }

    pub fn arg_types(&self) -> Vec<String> {
        self.args.iter().map(|(_, arg_type)| arg_type.clone()).collect()
    }
}

/// Function Declaration
/// A `def` carries a compound body; an `extern` has none.
#[derive(Debug, PartialEq)]
pub struct FunctionDecl {
    pub proto: Prototype,
    pub func_body: Option<Stmt>,
}

impl FunctionDecl {
    pub fn new(proto: Prototype, func_body: Stmt) -> Self {
        FunctionDecl {
            proto,
            func_body: Some(func_body),
        }
    }

    pub fn new_extern(proto: Prototype) -> Self {
        FunctionDecl {
            proto,
            func_body: None,
        }
    }

    pub fn is_extern(&self) -> bool {
        self.func_body.is_none()
    }
}

/// A named, ordered list of top-level declarations.
#[derive(Debug, PartialEq)]
pub struct Module {
    pub name: String,
    pub decls: Vec<Decl>,
}

impl Module {
    pub fn new(name: &str, decls: Vec<Decl>) -> Self {
        Module {
            name: String::from(name),
            decls,
        }
    }
}
