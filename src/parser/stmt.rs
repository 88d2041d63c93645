use crate::{
    ast::ast::Stmt,
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{
    expr::{parse_call_arg_list, parse_expr},
    parser::Parser,
};

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    match parser.current_token_kind() {
        TokenKind::Let => parse_let(parser),
        TokenKind::Identifier => parse_assign_or_call(parser),
        TokenKind::If => parse_if(parser),
        TokenKind::Return => parse_return(parser),
        TokenKind::Misc if parser.current_token().is_misc("{") => parse_compound(parser),
        _ => Err(parser.unexpected("statement")),
    }
}

pub fn parse_let(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.expect(TokenKind::Let, "let")?;
    let var_name = parser.expect(TokenKind::Identifier, "variable name")?.value;
    parser.expect_misc(":")?;
    let var_type = parser.expect(TokenKind::Identifier, "type name")?.value;

    Ok(Stmt::let_stmt(&var_name, &var_type))
}

/// `x = expr`, or a bare call `f(...)` which becomes an assignment to the
/// discard name.
pub fn parse_assign_or_call(parser: &mut Parser) -> Result<Stmt, Error> {
    let name = parser.expect(TokenKind::Identifier, "identifier")?.value;

    if parser.current_token().is_misc("=") {
        parser.advance();
        let assign_expr = parse_expr(parser)?;
        return Ok(Stmt::assignment(&name, assign_expr));
    }

    if parser.current_token().is_misc("(") {
        parser.advance();
        let args = parse_call_arg_list(parser)?;
        return Ok(Stmt::call(&name, args));
    }

    Err(parser.unexpected("assignment or function call"))
}

/// The else branch is mandatory. `else if` nests the inner if statement
/// directly as the else branch.
pub fn parse_if(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.expect(TokenKind::If, "if")?;
    let condition = parse_expr(parser)?;
    let then_stmt = parse_compound(parser)?;

    parser.expect(TokenKind::Else, "else")?;
    let else_stmt = match parser.current_token_kind() {
        TokenKind::If => parser.nested(parse_if)?,
        _ => parse_compound(parser)?,
    };

    Ok(Stmt::if_stmt(condition, then_stmt, else_stmt))
}

pub fn parse_return(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.expect(TokenKind::Return, "return")?;
    let return_expr = parse_expr(parser)?;

    Ok(Stmt::return_stmt(return_expr))
}

pub fn parse_compound(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.expect_misc("{")?;

    let mut stmts = vec![];
    while !parser.current_token().is_misc("}") {
        if parser.current_token_kind() == TokenKind::Eof {
            return Err(parser.unexpected("}"));
        }
        stmts.push(parser.nested(parse_stmt)?);
    }

    parser.advance();
    Ok(Stmt::compound(stmts))
}
