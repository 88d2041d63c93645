use std::fmt::Display;

use thiserror::Error;

/// A compilation failure.
///
/// Every stage stops at the first fault it detects and hands one of these
/// back to the caller, so there is never more than one error per run.
#[derive(Error, Debug, Clone, PartialEq)]
#[error(transparent)]
pub struct Error {
    internal_error: ErrorImpl,
}

impl Error {
    pub fn new(error_impl: ErrorImpl) -> Self {
        Error {
            internal_error: error_impl,
        }
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::InvalidLiteral { .. } => "InvalidLiteral",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
            ErrorImpl::VariableNotDeclared { .. } => "VariableNotDeclared",
            ErrorImpl::FunctionNotDeclared { .. } => "FunctionNotDeclared",
            ErrorImpl::NoMatchingOverload { .. } => "NoMatchingOverload",
            ErrorImpl::AssignmentTypeMismatch { .. } => "AssignmentTypeMismatch",
            ErrorImpl::ConditionNotBool { .. } => "ConditionNotBool",
            ErrorImpl::ReturnTypeMismatch { .. } => "ReturnTypeMismatch",
            ErrorImpl::ParameterRedefinition { .. } => "ParameterRedefinition",
            ErrorImpl::ConflictingOverload { .. } => "ConflictingOverload",
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. }
            | ErrorImpl::InvalidLiteral { .. }
            | ErrorImpl::NestingTooDeep { .. } => ErrorCategory::Syntax,
            ErrorImpl::VariableNotDeclared { .. } => ErrorCategory::UnresolvedReference,
            ErrorImpl::FunctionNotDeclared { .. } | ErrorImpl::NoMatchingOverload { .. } => {
                ErrorCategory::OverloadResolution
            }
            ErrorImpl::AssignmentTypeMismatch { .. }
            | ErrorImpl::ConditionNotBool { .. }
            | ErrorImpl::ReturnTypeMismatch { .. } => ErrorCategory::TypeMismatch,
            ErrorImpl::ParameterRedefinition { .. } | ErrorImpl::ConflictingOverload { .. } => {
                ErrorCategory::DeclarationConflict
            }
        }
    }
}

impl From<ErrorImpl> for Error {
    fn from(error_impl: ErrorImpl) -> Self {
        Error::new(error_impl)
    }
}

/// The fault families a compilation can stop on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Syntax,
    UnresolvedReference,
    OverloadResolution,
    TypeMismatch,
    DeclarationConflict,
}

impl Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::Syntax => write!(f, "syntax error"),
            ErrorCategory::UnresolvedReference => write!(f, "unresolved reference"),
            ErrorCategory::OverloadResolution => write!(f, "overload resolution failure"),
            ErrorCategory::TypeMismatch => write!(f, "type mismatch"),
            ErrorCategory::DeclarationConflict => write!(f, "declaration conflict"),
        }
    }
}

// Messages begin with the category name so callers can match on the prefix.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("syntax error: expected {expected}, found {found:?}")]
    UnexpectedToken { expected: String, found: String },
    #[error("syntax error: invalid {kind} literal {literal:?}")]
    InvalidLiteral { kind: String, literal: String },
    #[error("syntax error: nesting deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
    #[error("unresolved reference: variable {variable:?} not declared")]
    VariableNotDeclared { variable: String },
    #[error("overload resolution failure: no function or operator named {function:?}")]
    FunctionNotDeclared { function: String },
    #[error("overload resolution failure: no overload of {function:?} accepts ({arg_types})")]
    NoMatchingOverload { function: String, arg_types: String },
    #[error("type mismatch: variable {variable:?} is {expected} but rhs is {received}")]
    AssignmentTypeMismatch {
        variable: String,
        expected: String,
        received: String,
    },
    #[error("type mismatch: condition must be bool but is {received}")]
    ConditionNotBool { received: String },
    #[error("type mismatch: {function:?} returns {expected} but return value is {received}")]
    ReturnTypeMismatch {
        function: String,
        expected: String,
        received: String,
    },
    #[error("declaration conflict: redefinition of argument {parameter:?} in {function:?}")]
    ParameterRedefinition { function: String, parameter: String },
    #[error("declaration conflict: overload {function:?}({arg_types}) already returns {existing}, redeclared as {received}")]
    ConflictingOverload {
        function: String,
        arg_types: String,
        existing: String,
        received: String,
    },
}
