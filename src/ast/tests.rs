//! Unit tests for the AST module.
//!
//! This module contains tests for:
//! - Type tags
//! - The tree dump
//! - Source re-serialisation
//! - Structural comparison

use insta::assert_snapshot;

use super::{
    ast::{Decl, Expr, Stmt},
    comparator::{decl_equals, expr_equals, module_equals, stmt_equals},
    declarations::{FunctionDecl, Module, Prototype},
    printer::{dump_decl, dump_expr, dump_module, dump_stmt},
    types::TypeTag,
};

fn add_function() -> Decl {
    Decl::Function(FunctionDecl::new(
        Prototype::new("add", &[("x", "int"), ("y", "int")], "int"),
        Stmt::compound(vec![Stmt::return_stmt(Expr::binary(
            "+",
            Expr::variable("x"),
            Expr::variable("y"),
        ))]),
    ))
}

#[test]
fn test_type_tag_is_set_once() {
    let mut tag = TypeTag::unset();
    assert_eq!(tag.get(), None);

    assert_eq!(tag.set("int"), "int");
    assert_eq!(tag.set("float"), "int");
    assert_eq!(tag.get(), Some("int"));
}

#[test]
fn test_new_expressions_are_unannotated() {
    let expr = Expr::call("f", vec![Expr::int(1), Expr::unary("-", Expr::float(2.5))]);

    assert_eq!(expr.get_type(), None);
    if let Expr::Call(call) = &expr {
        assert!(call.args.iter().all(|arg| arg.type_tag().get().is_none()));
    } else {
        panic!("expected call expression");
    }
}

#[test]
fn test_dump_literals() {
    assert_snapshot!(dump_expr(&Expr::int(42)), @"Literal(42, int)");
    assert_snapshot!(dump_expr(&Expr::float(2.5)), @"Literal(2.5, float)");
    assert_snapshot!(dump_expr(&Expr::bool(true)), @"Literal(true, bool)");
    assert_snapshot!(dump_expr(&Expr::variable("x")), @"Variable(x)");
}

#[test]
fn test_dump_compound_expressions() {
    let expr = Expr::binary(
        "*",
        Expr::unary("-", Expr::variable("a")),
        Expr::call("f", vec![Expr::int(1), Expr::variable("b")]),
    );

    assert_snapshot!(
        dump_expr(&expr),
        @"BinaryExpr(*, UnaryExpr(-, Variable(a)), CallExpr(f, [Literal(1, int), Variable(b)]))"
    );
}

#[test]
fn test_dump_statements() {
    let stmt = Stmt::if_stmt(
        Expr::binary("<", Expr::variable("x"), Expr::int(0)),
        Stmt::compound(vec![Stmt::let_stmt("y", "int"), Stmt::assignment("y", Expr::int(1))]),
        Stmt::compound(vec![]),
    );

    assert_snapshot!(
        dump_stmt(&stmt),
        @"If(BinaryExpr(<, Variable(x), Literal(0, int)), Compound([Let(y, int), Assign(y, Literal(1, int))]), Compound([]))"
    );
}

#[test]
fn test_dump_declarations() {
    let extern_decl = Decl::Function(FunctionDecl::new_extern(Prototype::new(
        "print",
        &[("value", "int")],
        "void",
    )));

    assert_snapshot!(dump_decl(&extern_decl), @"Func(Prototype(print, [Arg(value, int)], void))");
    assert_snapshot!(
        dump_decl(&add_function()),
        @"Func(Prototype(add, [Arg(x, int), Arg(y, int)], int), Compound([Return(BinaryExpr(+, Variable(x), Variable(y)))]))"
    );

    let module = Module::new("main", vec![extern_decl, add_function()]);
    assert_eq!(dump_module(&module).lines().count(), 2);
}

#[test]
fn test_source_expressions() {
    let expr = Expr::binary(
        "-",
        Expr::binary("+", Expr::variable("a"), Expr::float(1.0)),
        Expr::binary("*", Expr::variable("b"), Expr::unary("-", Expr::variable("c"))),
    );

    assert_eq!(expr.to_string(), "(a + 1.0) - (b * -c)");
    assert_eq!(
        Expr::call("f", vec![Expr::int(42), Expr::bool(false)]).to_string(),
        "f(42, false)"
    );
    assert_eq!(Expr::call("g", vec![]).to_string(), "g()");
    assert_eq!(Expr::float(2.71828).to_string(), "2.71828");
}

#[test]
fn test_source_statements() {
    assert_eq!(Stmt::let_stmt("x", "int").to_string(), "let x: int");
    assert_eq!(
        Stmt::assignment("x", Expr::int(1)).to_string(),
        "x = 1"
    );
    assert_eq!(
        Stmt::call("h", vec![Expr::variable("x")]).to_string(),
        "h(x)"
    );
    assert_eq!(Stmt::compound(vec![]).to_string(), "{}");
}

#[test]
fn test_source_else_if_chain() {
    let stmt = Stmt::if_stmt(
        Expr::binary("==", Expr::variable("x"), Expr::variable("y")),
        Stmt::compound(vec![Stmt::assignment("z", Expr::int(42))]),
        Stmt::if_stmt(
            Expr::binary(">", Expr::variable("x"), Expr::variable("y")),
            Stmt::compound(vec![Stmt::assignment("z", Expr::int(1))]),
            Stmt::compound(vec![]),
        ),
    );

    assert_eq!(
        stmt.to_string(),
        "if x == y {\n  z = 42\n} else if x > y {\n  z = 1\n} else {}"
    );
}

#[test]
fn test_source_function_declarations() {
    assert_eq!(
        add_function().to_string(),
        "def add(x: int, y: int): int {\n  return x + y\n}"
    );

    let nested = Decl::Function(FunctionDecl::new(
        Prototype::new("f", &[], "void"),
        Stmt::compound(vec![Stmt::if_stmt(
            Expr::bool(true),
            Stmt::compound(vec![Stmt::call("g", vec![])]),
            Stmt::compound(vec![]),
        )]),
    ));
    assert_eq!(
        nested.to_string(),
        "def f(): void {\n  if true {\n    g()\n  } else {}\n}"
    );

    let extern_decl = Decl::Function(FunctionDecl::new_extern(Prototype::new(
        "print",
        &[("value", "float")],
        "void",
    )));
    assert_eq!(extern_decl.to_string(), "extern print(value: float): void");
}

#[test]
fn test_comparator_ignores_type_tags() {
    let plain = Expr::binary("+", Expr::int(1), Expr::int(2));
    let mut annotated = Expr::binary("+", Expr::int(1), Expr::int(2));
    if let Expr::Binary(binary) = &mut annotated {
        binary.expr_type.set("int");
    }

    assert_ne!(plain, annotated);
    assert!(expr_equals(&plain, &annotated));
}

#[test]
fn test_comparator_detects_differences() {
    assert!(!expr_equals(&Expr::int(1), &Expr::float(1.0)));
    assert!(!expr_equals(
        &Expr::call("f", vec![Expr::int(1)]),
        &Expr::call("f", vec![Expr::int(1), Expr::int(2)])
    ));
    assert!(!expr_equals(
        &Expr::binary("+", Expr::variable("a"), Expr::variable("b")),
        &Expr::binary("-", Expr::variable("a"), Expr::variable("b"))
    ));
    assert!(!stmt_equals(
        &Stmt::let_stmt("x", "int"),
        &Stmt::let_stmt("x", "float")
    ));
    assert!(!stmt_equals(
        &Stmt::compound(vec![]),
        &Stmt::compound(vec![Stmt::return_stmt(Expr::int(0))])
    ));
}

#[test]
fn test_comparator_declarations() {
    let extern_decl = Decl::Function(FunctionDecl::new_extern(Prototype::new(
        "add",
        &[("x", "int"), ("y", "int")],
        "int",
    )));

    assert!(decl_equals(&add_function(), &add_function()));
    assert!(!decl_equals(&add_function(), &extern_decl));
    assert!(module_equals(
        &Module::new("m", vec![add_function()]),
        &Module::new("m", vec![add_function()])
    ));
    assert!(!module_equals(
        &Module::new("m", vec![add_function()]),
        &Module::new("n", vec![add_function()])
    ));
}

#[test]
fn test_prototype_helpers() {
    let proto = Prototype::new("f", &[("a", "int"), ("b", "float")], "bool");

    assert_eq!(proto.arg_types(), vec!["int", "float"]);
    assert_eq!(proto.to_string(), "f(a: int, b: float): bool");
    assert!(FunctionDecl::new_extern(proto.clone()).is_extern());
    assert_eq!(Decl::Function(FunctionDecl::new_extern(proto)).name(), "f");
}
