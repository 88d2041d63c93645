use tracing::debug;

use crate::{
    ast::{
        ast::Decl,
        declarations::{FunctionDecl, Prototype},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{parser::Parser, stmt::parse_compound};

/// `name(arg: type, ...): type`
pub fn parse_proto(parser: &mut Parser) -> Result<Prototype, Error> {
    let name = parser.expect(TokenKind::Identifier, "function name")?.value;
    parser.expect_misc("(")?;

    let mut args = vec![];
    if !parser.current_token().is_misc(")") {
        loop {
            let arg_name = parser.expect(TokenKind::Identifier, "argument name")?.value;
            parser.expect_misc(":")?;
            let arg_type = parser.expect(TokenKind::Identifier, "argument type")?.value;
            args.push((arg_name, arg_type));

            if !parser.current_token().is_misc(",") {
                break;
            }
            parser.advance();
        }
    }

    parser.expect_misc(")")?;
    parser.expect_misc(":")?;
    let return_type = parser.expect(TokenKind::Identifier, "return type")?.value;

    Ok(Prototype {
        name,
        args,
        return_type,
    })
}

pub fn parse_def(parser: &mut Parser) -> Result<FunctionDecl, Error> {
    parser.expect(TokenKind::Def, "def")?;
    let proto = parse_proto(parser)?;
    let body = parse_compound(parser)?;

    Ok(FunctionDecl::new(proto, body))
}

pub fn parse_extern(parser: &mut Parser) -> Result<FunctionDecl, Error> {
    parser.expect(TokenKind::Extern, "extern")?;
    let proto = parse_proto(parser)?;

    Ok(FunctionDecl::new_extern(proto))
}

/// Parses declarations until the end of input.
pub fn parse_all(parser: &mut Parser) -> Result<Vec<Decl>, Error> {
    let mut decls = vec![];

    loop {
        let function = match parser.current_token_kind() {
            TokenKind::Eof => return Ok(decls),
            TokenKind::Def => parse_def(parser)?,
            TokenKind::Extern => parse_extern(parser)?,
            _ => return Err(parser.unexpected("declaration")),
        };

        debug!(
            function = %function.proto.name,
            is_extern = function.is_extern(),
            "parsed declaration"
        );
        decls.push(Decl::Function(function));
    }
}
