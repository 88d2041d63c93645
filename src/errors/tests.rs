//! Unit tests for error handling.
//!
//! This module contains tests for error names, categories and messages.

use crate::errors::errors::{Error, ErrorCategory, ErrorImpl};

#[test]
fn test_unexpected_token_error() {
    let error = Error::new(ErrorImpl::UnexpectedToken {
        expected: String::from(")"),
        found: String::from("}"),
    });

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.category(), ErrorCategory::Syntax);
    assert_eq!(error.to_string(), "syntax error: expected ), found \"}\"");
}

#[test]
fn test_invalid_literal_error() {
    let error = Error::new(ErrorImpl::InvalidLiteral {
        kind: String::from("float"),
        literal: String::from("1.2.3"),
    });

    assert_eq!(error.get_error_name(), "InvalidLiteral");
    assert_eq!(error.category(), ErrorCategory::Syntax);
}

#[test]
fn test_nesting_too_deep_error() {
    let error = Error::new(ErrorImpl::NestingTooDeep { limit: 256 });

    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert_eq!(error.category(), ErrorCategory::Syntax);
    assert_eq!(error.to_string(), "syntax error: nesting deeper than 256 levels");
}

#[test]
fn test_variable_not_declared_error() {
    let error = Error::new(ErrorImpl::VariableNotDeclared {
        variable: String::from("y"),
    });

    assert_eq!(error.get_error_name(), "VariableNotDeclared");
    assert_eq!(error.category(), ErrorCategory::UnresolvedReference);
    assert!(error.to_string().starts_with("unresolved reference:"));
}

#[test]
fn test_overload_errors() {
    let missing = Error::new(ErrorImpl::FunctionNotDeclared {
        function: String::from("f"),
    });
    let mismatch = Error::new(ErrorImpl::NoMatchingOverload {
        function: String::from("+"),
        arg_types: String::from("int, float"),
    });

    assert_eq!(missing.category(), ErrorCategory::OverloadResolution);
    assert_eq!(mismatch.category(), ErrorCategory::OverloadResolution);
    assert_eq!(
        mismatch.to_string(),
        "overload resolution failure: no overload of \"+\" accepts (int, float)"
    );
}

#[test]
fn test_type_mismatch_errors() {
    let assignment = Error::new(ErrorImpl::AssignmentTypeMismatch {
        variable: String::from("x"),
        expected: String::from("int"),
        received: String::from("float"),
    });
    let condition = Error::new(ErrorImpl::ConditionNotBool {
        received: String::from("int"),
    });
    let ret = Error::new(ErrorImpl::ReturnTypeMismatch {
        function: String::from("f"),
        expected: String::from("int"),
        received: String::from("bool"),
    });

    for error in [&assignment, &condition, &ret] {
        assert_eq!(error.category(), ErrorCategory::TypeMismatch);
        assert!(error.to_string().starts_with("type mismatch:"));
    }
    assert_eq!(
        condition.to_string(),
        "type mismatch: condition must be bool but is int"
    );
}

#[test]
fn test_declaration_conflict_errors() {
    let parameter = Error::new(ErrorImpl::ParameterRedefinition {
        function: String::from("f"),
        parameter: String::from("x"),
    });
    let overload = Error::new(ErrorImpl::ConflictingOverload {
        function: String::from("f"),
        arg_types: String::from("int"),
        existing: String::from("int"),
        received: String::from("float"),
    });

    assert_eq!(parameter.get_error_name(), "ParameterRedefinition");
    assert_eq!(parameter.category(), ErrorCategory::DeclarationConflict);
    assert_eq!(overload.category(), ErrorCategory::DeclarationConflict);
}

#[test]
fn test_error_from_impl() {
    let error: Error = ErrorImpl::VariableNotDeclared {
        variable: String::from("x"),
    }
    .into();

    assert!(matches!(
        error.get_internal_error(),
        ErrorImpl::VariableNotDeclared { .. }
    ));
}

#[test]
fn test_category_display() {
    assert_eq!(ErrorCategory::Syntax.to_string(), "syntax error");
    assert_eq!(
        ErrorCategory::DeclarationConflict.to_string(),
        "declaration conflict"
    );
}
