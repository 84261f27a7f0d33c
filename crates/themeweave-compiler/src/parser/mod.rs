//! Recursive descent parser for theme code.
//!
//! Accepts the subset of JavaScript expression syntax that can appear in a
//! theme override: literals, object and array literals, member access,
//! calls, operators, template literals and arrow functions. Anything
//! outside that subset is a [`ParseError`] with a byte span.

mod atoms;
mod error;
mod expr;
mod patterns;
mod stream;
mod template;


pub use error::{ParseError, ParseErrorKind};

/// Deepest expression nesting the parser accepts. Sits above the
/// validator's default depth limit so that limit reports first on
/// realistic input.
pub const MAX_NESTING_DEPTH: usize = 100;

use crate::ast::{DeclarationKind, Expr, Program, Statement};
use crate::lexer::{self, Token};
use stream::TokenStream;

/// Parse a sequence of statements.
pub fn parse_program(source: &str) -> Result<Program, ParseError> {
    let tokens = lexer::tokenize(source).map_err(ParseError::invalid_token)?;
    let mut stream = TokenStream::new(&tokens, source.len());
    let mut body = Vec::new();

    while !stream.at_end() {
        if stream.eat(&Token::Semicolon) {
            continue;
        }
        body.push(parse_statement(&mut stream)?);
    }

    Ok(Program { body })
}

/// Parse `source` as exactly one expression.
pub fn parse_expression(source: &str) -> Result<Expr, ParseError> {
    let tokens = lexer::tokenize(source).map_err(ParseError::invalid_token)?;
    let mut stream = TokenStream::new(&tokens, source.len());
    let expr = expr::parse_expression(&mut stream)?;
    if !stream.at_end() {
        return Err(ParseError::unexpected_token(
            stream.peek(),
            "after expression",
            stream.current_span(),
        ));
    }
    Ok(expr)
}

fn parse_statement(stream: &mut TokenStream) -> Result<Statement, ParseError> {
    let start = stream.current_pos();
    let kind = match stream.peek() {
        Some(Token::Const) => Some(DeclarationKind::Const),
        Some(Token::Let) => Some(DeclarationKind::Let),
        Some(Token::Var) => Some(DeclarationKind::Var),
        _ => None,
    };

    let statement = match kind {
        Some(kind) => {
            stream.advance();
            let name = match stream.advance() {
                Some(Token::Ident(name)) => name.clone(),
                other => {
                    return Err(ParseError::unexpected_token(
                        other,
                        "in declaration",
                        stream.span_from(start),
                    ))
                }
            };
            skip_type_annotation(stream)?;
            let init = if stream.eat(&Token::Assign) {
                Some(expr::parse_expression(stream)?)
            } else {
                None
            };
            stream.eat(&Token::Semicolon);
            Statement::Declaration {
                kind,
                name,
                init,
                span: stream.span_from(start),
            }
        }
        None => {
            let expr = expr::parse_expression(stream)?;
            stream.eat(&Token::Semicolon);
            Statement::Expression {
                expr,
                span: stream.span_from(start),
            }
        }
    };
    Ok(statement)
}

/// Skip a `: Type` annotation up to the `=` of the initializer.
fn skip_type_annotation(stream: &mut TokenStream) -> Result<(), ParseError> {
    if !stream.eat(&Token::Colon) {
        return Ok(());
    }
    let mut depth = 0usize;
    loop {
        match stream.peek() {
            Some(Token::Assign) | Some(Token::Semicolon) if depth == 0 => return Ok(()),
            Some(Token::Lt) | Some(Token::LBracket) | Some(Token::LParen) | Some(Token::LBrace) => {
                depth += 1
            }
            Some(Token::Gt) | Some(Token::RBracket) | Some(Token::RParen) | Some(Token::RBrace) => {
                depth = depth.saturating_sub(1)
            }
            Some(_) => {}
            None => return Ok(()),
        }
        stream.advance();
    }
}
