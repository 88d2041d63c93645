use std::collections::HashMap;

use tracing::debug;

use crate::{
    ast::{
        ast::{Decl, Expr, Stmt},
        declarations::{FunctionDecl, Module},
    },
    errors::errors::{Error, ErrorImpl},
};

use super::types::{builtin_function_types, format_arg_types, FuncTypeInfo, BOOL, FLOAT, INT};

/// Annotation context.
///
/// Variables live in one flat table per function, cleared at the start of
/// each function declaration. Overloads of functions and operators persist
/// across the whole module.
#[derive(Debug)]
pub struct TypeAnnotator {
    variable_types: HashMap<String, String>,
    function_types: HashMap<String, Vec<FuncTypeInfo>>,
    /// Name and return type of the function whose body is being annotated.
    current_function: Option<(String, String)>,
}

impl Default for TypeAnnotator {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeAnnotator {
    pub fn new() -> Self {
        TypeAnnotator {
            variable_types: HashMap::new(),
            function_types: builtin_function_types(),
            current_function: None,
        }
    }

    /// Declares `name`, replacing any earlier declaration in the same function.
    pub fn declare_variable(&mut self, name: &str, var_type: &str) {
        self.variable_types
            .insert(String::from(name), String::from(var_type));
    }

    pub fn declare_parameter(&mut self, function: &str, name: &str, var_type: &str) -> Result<(), Error> {
        if self.variable_types.contains_key(name) {
            return Err(Error::new(ErrorImpl::ParameterRedefinition {
                function: String::from(function),
                parameter: String::from(name),
            }));
        }

        self.declare_variable(name, var_type);
        Ok(())
    }

    pub fn fetch_variable_type(&self, name: &str) -> Result<String, Error> {
        self.variable_types.get(name).cloned().ok_or_else(|| {
            Error::new(ErrorImpl::VariableNotDeclared {
                variable: String::from(name),
            })
        })
    }

    pub fn clear_variables(&mut self) {
        self.variable_types.clear();
    }

    /// Adds an overload of `name`.
    ///
    /// Redeclaring an existing argument tuple with the same return type is a
    /// no-op; with a different return type it is a conflict.
    pub fn register_function(&mut self, name: &str, arg_types: Vec<String>, return_type: &str) -> Result<(), Error> {
        let overloads = self.function_types.entry(String::from(name)).or_default();

        if let Some(existing) = overloads.iter().find(|overload| overload.accepts(&arg_types)) {
            if existing.return_type == return_type {
                return Ok(());
            }

            return Err(Error::new(ErrorImpl::ConflictingOverload {
                function: String::from(name),
                arg_types: format_arg_types(&arg_types),
                existing: existing.return_type.clone(),
                received: String::from(return_type),
            }));
        }

        let overload = FuncTypeInfo {
            arg_types,
            return_type: String::from(return_type),
        };
        debug!(function = name, signature = %overload, "registered overload");
        overloads.push(overload);

        Ok(())
    }

    pub fn get_overloads(&self, name: &str) -> Option<&[FuncTypeInfo]> {
        self.function_types.get(name).map(|overloads| overloads.as_slice())
    }

    /// Return type of the first overload of `name` taking exactly `arg_types`.
    pub fn resolve_overload(&self, name: &str, arg_types: &[String]) -> Result<String, Error> {
        let overloads = self.get_overloads(name).ok_or_else(|| {
            Error::new(ErrorImpl::FunctionNotDeclared {
                function: String::from(name),
            })
        })?;

        overloads
            .iter()
            .find(|overload| overload.accepts(arg_types))
            .map(|overload| overload.return_type.clone())
            .ok_or_else(|| {
                Error::new(ErrorImpl::NoMatchingOverload {
                    function: String::from(name),
                    arg_types: format_arg_types(arg_types),
                })
            })
    }
}

/// Annotates `expr` and its children, returning its type.
///
/// Unary, binary and call expressions keep their first annotation; visiting
/// them again returns the stored type without descending.
pub fn annotate_expr(annotator: &mut TypeAnnotator, expr: &mut Expr) -> Result<String, Error> {
    match expr {
        Expr::Int(node) => Ok(node.expr_type.set(INT).to_string()),
        Expr::Float(node) => Ok(node.expr_type.set(FLOAT).to_string()),
        Expr::Bool(node) => Ok(node.expr_type.set(BOOL).to_string()),
        Expr::Variable(node) => {
            let var_type = annotator.fetch_variable_type(&node.name)?;
            Ok(node.expr_type.set(&var_type).to_string())
        }
        Expr::Unary(node) => {
            if let Some(cached) = node.expr_type.get() {
                debug!(operator = %node.operator, cached, "reusing annotated type");
                return Ok(cached.to_string());
            }

            let operand_type = annotate_expr(annotator, &mut node.operand)?;
            let return_type = annotator.resolve_overload(&node.operator, &[operand_type])?;
            Ok(node.expr_type.set(&return_type).to_string())
        }
        Expr::Binary(node) => {
            if let Some(cached) = node.expr_type.get() {
                debug!(operator = %node.operator, cached, "reusing annotated type");
                return Ok(cached.to_string());
            }

            let lhs_type = annotate_expr(annotator, &mut node.lhs)?;
            let rhs_type = annotate_expr(annotator, &mut node.rhs)?;
            let return_type = annotator.resolve_overload(&node.operator, &[lhs_type, rhs_type])?;
            Ok(node.expr_type.set(&return_type).to_string())
        }
        Expr::Call(node) => {
            if let Some(cached) = node.expr_type.get() {
                debug!(callee = %node.callee, cached, "reusing annotated type");
                return Ok(cached.to_string());
            }

            let mut arg_types = vec![];
            for arg in node.args.iter_mut() {
                arg_types.push(annotate_expr(annotator, arg)?);
            }
            let return_type = annotator.resolve_overload(&node.callee, &arg_types)?;
            Ok(node.expr_type.set(&return_type).to_string())
        }
    }
}

pub fn annotate_stmt(annotator: &mut TypeAnnotator, stmt: &mut Stmt) -> Result<(), Error> {
    match stmt {
        Stmt::Let(node) => {
            annotator.declare_variable(&node.var_name, &node.var_type);
            Ok(())
        }
        Stmt::Assignment(node) => {
            let rhs_type = annotate_expr(annotator, &mut node.assign_expr)?;
            if node.is_discarded() {
                return Ok(());
            }

            let var_type = annotator.fetch_variable_type(&node.var_name)?;
            if rhs_type != var_type {
                return Err(Error::new(ErrorImpl::AssignmentTypeMismatch {
                    variable: node.var_name.clone(),
                    expected: var_type,
                    received: rhs_type,
                }));
            }
            Ok(())
        }
        Stmt::If(node) => {
            let condition_type = annotate_expr(annotator, &mut node.condition)?;
            if condition_type != BOOL {
                return Err(Error::new(ErrorImpl::ConditionNotBool {
                    received: condition_type,
                }));
            }

            annotate_stmt(annotator, &mut node.then_stmt)?;
            annotate_stmt(annotator, &mut node.else_stmt)
        }
        Stmt::Return(node) => {
            let return_type = annotate_expr(annotator, &mut node.return_expr)?;

            match &annotator.current_function {
                Some((function, expected)) if *expected != return_type => {
                    Err(Error::new(ErrorImpl::ReturnTypeMismatch {
                        function: function.clone(),
                        expected: expected.clone(),
                        received: return_type,
                    }))
                }
                _ => Ok(()),
            }
        }
        Stmt::Compound(node) => {
            for inner in node.iter_mut() {
                annotate_stmt(annotator, inner)?;
            }
            Ok(())
        }
    }
}

/// Registers the function's overload, then annotates its body with only
/// the parameters in scope.
pub fn annotate_function(annotator: &mut TypeAnnotator, function: &mut FunctionDecl) -> Result<(), Error> {
    let proto = &function.proto;
    debug!(function = %proto.name, is_extern = function.is_extern(), "annotating function");

    annotator.clear_variables();
    for (arg_name, arg_type) in proto.args.iter() {
        annotator.declare_parameter(&proto.name, arg_name, arg_type)?;
    }
    annotator.register_function(&proto.name, proto.arg_types(), &proto.return_type)?;

    if let Some(body) = function.func_body.as_mut() {
        annotator.current_function = Some((proto.name.clone(), proto.return_type.clone()));
        let result = annotate_stmt(annotator, body);
        annotator.current_function = None;
        result?;
    }

    Ok(())
}

pub fn annotate_decl(annotator: &mut TypeAnnotator, decl: &mut Decl) -> Result<(), Error> {
    match decl {
        Decl::Function(function) => annotate_function(annotator, function),
    }
}

/// Annotates every declaration in order, stopping at the first fault.
pub fn annotate_module(annotator: &mut TypeAnnotator, module: &mut Module) -> Result<(), Error> {
    for decl in module.decls.iter_mut() {
        annotate_decl(annotator, decl)?;
    }

    Ok(())
}
