use std::{collections::HashMap, fmt::Display};

pub const INT: &str = "int";
pub const FLOAT: &str = "float";
pub const BOOL: &str = "bool";

/// One overload of a function or operator: argument types and return type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncTypeInfo {
    pub arg_types: Vec<String>,
    pub return_type: String,
}

impl FuncTypeInfo {
    pub fn new(arg_types: &[&str], return_type: &str) -> Self {
        FuncTypeInfo {
            arg_types: arg_types.iter().map(|arg_type| String::from(*arg_type)).collect(),
            return_type: String::from(return_type),
        }
    }

    pub fn accepts(&self, arg_types: &[String]) -> bool {
        self.arg_types == arg_types
    }
}

impl Display for FuncTypeInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}) -> {}", format_arg_types(&self.arg_types), self.return_type)
    }
}

pub fn format_arg_types(arg_types: &[String]) -> String {
    arg_types.join(", ")
}

/// Overloads every annotator starts with: arithmetic, comparison and unary minus.
pub fn builtin_function_types() -> HashMap<String, Vec<FuncTypeInfo>> {
    let mut map = HashMap::new();

    for operator in ["+", "-", "*", "/"] {
        map.insert(
            String::from(operator),
            vec![
                FuncTypeInfo::new(&[INT, INT], INT),
                FuncTypeInfo::new(&[FLOAT, FLOAT], FLOAT),
            ],
        );
    }
    map.insert(String::from("%"), vec![FuncTypeInfo::new(&[INT, INT], INT)]);

    for operator in ["==", "!=", "<", ">", "<=", ">="] {
        map.insert(
            String::from(operator),
            vec![
                FuncTypeInfo::new(&[INT, INT], BOOL),
                FuncTypeInfo::new(&[FLOAT, FLOAT], BOOL),
                FuncTypeInfo::new(&[BOOL, BOOL], BOOL),
            ],
        );
    }

    // Unary minus shares the "-" entry; the argument count tells it apart.
    if let Some(minus) = map.get_mut("-") {
        minus.push(FuncTypeInfo::new(&[INT], INT));
        minus.push(FuncTypeInfo::new(&[FLOAT], FLOAT));
    }

    map
}
