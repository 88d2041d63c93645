use crate::{
    ast::{
        ast::Expr,
        expressions::{BoolExpr, FloatExpr, IntExpr},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

fn invalid_literal(kind: &str, literal: &str) -> Error {
    Error::new(ErrorImpl::InvalidLiteral {
        kind: String::from(kind),
        literal: String::from(literal),
    })
}

pub fn parse_int(parser: &mut Parser) -> Result<IntExpr, Error> {
    let token = parser.expect(TokenKind::Int, "integer literal")?;
    let value = token
        .value
        .parse::<i32>()
        .map_err(|_| invalid_literal("int", &token.value))?;

    Ok(IntExpr::new(value))
}

pub fn parse_float(parser: &mut Parser) -> Result<FloatExpr, Error> {
    let token = parser.expect(TokenKind::Float, "float literal")?;
    // Out-of-range text parses to infinity instead of failing.
    match token.value.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(FloatExpr::new(value)),
        _ => Err(invalid_literal("float", &token.value)),
    }
}

pub fn parse_bool(parser: &mut Parser) -> Result<BoolExpr, Error> {
    let token = parser.expect(TokenKind::Bool, "bool literal")?;
    match token.value.as_str() {
        "true" => Ok(BoolExpr::new(true)),
        "false" => Ok(BoolExpr::new(false)),
        _ => Err(invalid_literal("bool", &token.value)),
    }
}

/// Parses a full expression: a primary followed by any binary operators.
pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let lhs = parse_primary(parser)?;
    parse_binop_rhs(parser, 0, lhs)
}

pub fn parse_paren_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.expect_misc("(")?;
    let expr = parser.nested(parse_expr)?;
    parser.expect_misc(")")?;

    Ok(expr)
}

pub fn parse_primary(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        TokenKind::Identifier => parse_identifier_or_call(parser),
        TokenKind::Int => Ok(Expr::Int(parse_int(parser)?)),
        TokenKind::Float => Ok(Expr::Float(parse_float(parser)?)),
        TokenKind::Bool => Ok(Expr::Bool(parse_bool(parser)?)),
        TokenKind::Misc if parser.current_token().is_misc("(") => parse_paren_expr(parser),
        TokenKind::Op if parser.current_token().is_op("-") => parse_unary(parser),
        _ => Err(parser.unexpected("expression")),
    }
}

/// Prefix `-`. The operand is a primary, so `-a * b` is `(-a) * b`.
pub fn parse_unary(parser: &mut Parser) -> Result<Expr, Error> {
    let operator = parser.expect(TokenKind::Op, "unary operator")?;
    let operand = parser.nested(parse_primary)?;

    Ok(Expr::unary(&operator.value, operand))
}

/// Precedence climbing over the operators that bind at least `expr_prec`.
///
/// Operators of equal precedence fold to the left. The right operand only
/// recurses when the operator after it binds strictly tighter than the one
/// just consumed.
pub fn parse_binop_rhs(parser: &mut Parser, expr_prec: i32, lhs: Expr) -> Result<Expr, Error> {
    let mut lhs = lhs;

    loop {
        let token_prec = parser.get_precedence();
        if token_prec < expr_prec {
            return Ok(lhs);
        }

        let operator = parser.advance();
        let mut rhs = parse_primary(parser)?;

        let next_prec = parser.get_precedence();
        if token_prec < next_prec {
            rhs = parse_binop_rhs(parser, token_prec + 1, rhs)?;
        }

        lhs = Expr::binary(&operator.value, lhs, rhs);
    }
}

/// Parses the arguments of a call whose `(` was already consumed, through the closing `)`.
pub fn parse_call_arg_list(parser: &mut Parser) -> Result<Vec<Expr>, Error> {
    let mut args = vec![];

    if !parser.current_token().is_misc(")") {
        loop {
            args.push(parser.nested(parse_expr)?);

            if parser.current_token().is_misc(")") {
                break;
            }
            if !parser.current_token().is_misc(",") {
                return Err(parser.unexpected(") or , in arg list"));
            }
            parser.advance();
        }
    }

    parser.expect_misc(")")?;
    Ok(args)
}

pub fn parse_identifier_or_call(parser: &mut Parser) -> Result<Expr, Error> {
    let identifier = parser.expect(TokenKind::Identifier, "identifier")?;

    if !parser.current_token().is_misc("(") {
        return Ok(Expr::variable(&identifier.value));
    }

    parser.advance();
    let args = parse_call_arg_list(parser)?;
    Ok(Expr::call(&identifier.value, args))
}
