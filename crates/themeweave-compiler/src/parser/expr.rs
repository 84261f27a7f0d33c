//! Operator-level expression parsing: assignment, conditional, binary
//! precedence climbing, unary and postfix chains.

use super::{atoms, ParseError, TokenStream};
use crate::ast::{Argument, BinaryOp, Expr, ExprKind, MemberProperty, UnaryOp};
use crate::lexer::Token;

pub(super) fn parse_expression(stream: &mut TokenStream) -> Result<Expr, ParseError> {
    parse_assignment(stream)
}

pub(super) fn parse_assignment(stream: &mut TokenStream) -> Result<Expr, ParseError> {
    stream.enter()?;
    let result = parse_assignment_inner(stream);
    stream.exit();
    result
}

fn parse_assignment_inner(stream: &mut TokenStream) -> Result<Expr, ParseError> {
    let start = stream.current_pos();

    // `x => body`
    if let (Some(Token::Ident(name)), Some(Token::Arrow)) = (stream.peek(), stream.peek_nth(1)) {
        let param = crate::ast::Pattern::Identifier(name.clone());
        stream.advance();
        return atoms::parse_arrow_tail(stream, start, vec![param]);
    }

    let target = parse_conditional(stream)?;
    if stream.eat(&Token::Assign) {
        let value = parse_assignment(stream)?;
        return Ok(Expr::new(
            ExprKind::Assignment {
                target: Box::new(target),
                value: Box::new(value),
            },
            stream.span_from(start),
        ));
    }
    Ok(target)
}

fn parse_conditional(stream: &mut TokenStream) -> Result<Expr, ParseError> {
    let start = stream.current_pos();
    let test = parse_binary(stream, 1)?;
    if !stream.eat(&Token::Question) {
        return Ok(test);
    }
    let consequent = parse_assignment(stream)?;
    stream.expect(Token::Colon)?;
    let alternate = parse_assignment(stream)?;
    Ok(Expr::new(
        ExprKind::Conditional {
            test: Box::new(test),
            consequent: Box::new(consequent),
            alternate: Box::new(alternate),
        },
        stream.span_from(start),
    ))
}

fn binary_op(token: &Token) -> Option<(BinaryOp, u8)> {
    let op = match token {
        Token::Nullish => (BinaryOp::Nullish, 1),
        Token::OrOr => (BinaryOp::Or, 2),
        Token::AndAnd => (BinaryOp::And, 3),
        Token::EqEq => (BinaryOp::Eq, 4),
        Token::NotEq => (BinaryOp::NotEq, 4),
        Token::EqEqEq => (BinaryOp::StrictEq, 4),
        Token::NotEqEq => (BinaryOp::StrictNotEq, 4),
        Token::Lt => (BinaryOp::Lt, 5),
        Token::LtEq => (BinaryOp::LtEq, 5),
        Token::Gt => (BinaryOp::Gt, 5),
        Token::GtEq => (BinaryOp::GtEq, 5),
        Token::Plus => (BinaryOp::Add, 6),
        Token::Minus => (BinaryOp::Sub, 6),
        Token::Star => (BinaryOp::Mul, 7),
        Token::Slash => (BinaryOp::Div, 7),
        Token::Percent => (BinaryOp::Rem, 7),
        _ => return None,
    };
    Some(op)
}

fn parse_binary(stream: &mut TokenStream, min_prec: u8) -> Result<Expr, ParseError> {
    let start = stream.current_pos();
    let mut left = parse_unary(stream)?;

    while let Some((op, prec)) = stream.peek().and_then(binary_op) {
        if prec < min_prec {
            break;
        }
        stream.advance();
        let right = parse_binary(stream, prec + 1)?;
        left = Expr::new(
            ExprKind::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
            stream.span_from(start),
        );
    }
    Ok(left)
}

fn parse_unary(stream: &mut TokenStream) -> Result<Expr, ParseError> {
    let start = stream.current_pos();
    let op = match stream.peek() {
        Some(Token::Plus) => UnaryOp::Plus,
        Some(Token::Minus) => UnaryOp::Minus,
        Some(Token::Bang) => UnaryOp::Not,
        Some(Token::Tilde) => UnaryOp::BitNot,
        Some(Token::Typeof) => UnaryOp::Typeof,
        Some(Token::Void) => UnaryOp::Void,
        Some(Token::Delete) => UnaryOp::Delete,
        _ => return parse_postfix(stream),
    };
    stream.advance();
    stream.enter()?;
    let argument = parse_unary(stream);
    stream.exit();
    let argument = argument?;
    Ok(Expr::new(
        ExprKind::Unary {
            op,
            argument: Box::new(argument),
        },
        stream.span_from(start),
    ))
}

fn parse_postfix(stream: &mut TokenStream) -> Result<Expr, ParseError> {
    let start = stream.current_pos();
    let mut expr = if stream.eat(&Token::New) {
        let callee = parse_member_chain(stream)?;
        let arguments = if stream.check(&Token::LParen) {
            parse_arguments(stream)?
        } else {
            Vec::new()
        };
        Expr::new(
            ExprKind::New {
                callee: Box::new(callee),
                arguments,
            },
            stream.span_from(start),
        )
    } else {
        atoms::parse_primary(stream)?
    };

    loop {
        expr = match stream.peek() {
            Some(Token::Dot) => {
                stream.advance();
                let name = parse_property_name(stream)?;
                member(expr, MemberProperty::Named(name), false, stream.span_from(start))
            }
            Some(Token::LBracket) => {
                stream.advance();
                let property = parse_expression(stream)?;
                stream.expect(Token::RBracket)?;
                member(
                    expr,
                    MemberProperty::Computed(Box::new(property)),
                    false,
                    stream.span_from(start),
                )
            }
            Some(Token::QuestionDot) => {
                stream.advance();
                match stream.peek() {
                    Some(Token::LParen) => {
                        let arguments = parse_arguments(stream)?;
                        call(expr, arguments, true, stream.span_from(start))
                    }
                    Some(Token::LBracket) => {
                        stream.advance();
                        let property = parse_expression(stream)?;
                        stream.expect(Token::RBracket)?;
                        member(
                            expr,
                            MemberProperty::Computed(Box::new(property)),
                            true,
                            stream.span_from(start),
                        )
                    }
                    _ => {
                        let name = parse_property_name(stream)?;
                        member(expr, MemberProperty::Named(name), true, stream.span_from(start))
                    }
                }
            }
            Some(Token::LParen) => {
                let arguments = parse_arguments(stream)?;
                call(expr, arguments, false, stream.span_from(start))
            }
            _ => return Ok(expr),
        };
    }
}

/// Member chain without calls, used for the callee of `new`.
fn parse_member_chain(stream: &mut TokenStream) -> Result<Expr, ParseError> {
    let start = stream.current_pos();
    let mut expr = atoms::parse_primary(stream)?;
    while stream.eat(&Token::Dot) {
        let name = parse_property_name(stream)?;
        expr = member(expr, MemberProperty::Named(name), false, stream.span_from(start));
    }
    Ok(expr)
}

fn parse_property_name(stream: &mut TokenStream) -> Result<String, ParseError> {
    let span = stream.current_span();
    match stream.advance() {
        Some(token) => match token.as_property_name() {
            Some(name) => Ok(name.to_string()),
            None => Err(ParseError::unexpected_token(
                Some(token),
                "after '.'",
                span,
            )),
        },
        None => Err(ParseError::unexpected_token(None, "after '.'", span)),
    }
}

pub(super) fn parse_arguments(stream: &mut TokenStream) -> Result<Vec<Argument>, ParseError> {
    stream.expect(Token::LParen)?;
    let mut arguments = Vec::new();
    while !stream.check(&Token::RParen) {
        if stream.eat(&Token::Ellipsis) {
            arguments.push(Argument::Spread(parse_assignment(stream)?));
        } else {
            arguments.push(Argument::Expr(parse_assignment(stream)?));
        }
        if !stream.eat(&Token::Comma) {
            break;
        }
    }
    stream.expect(Token::RParen)?;
    Ok(arguments)
}

fn member(object: Expr, property: MemberProperty, optional: bool, span: crate::ast::Span) -> Expr {
    Expr::new(
        ExprKind::Member {
            object: Box::new(object),
            property,
            optional,
        },
        span,
    )
}

fn call(callee: Expr, arguments: Vec<Argument>, optional: bool, span: crate::ast::Span) -> Expr {
    Expr::new(
        ExprKind::Call {
            callee: Box::new(callee),
            arguments,
            optional,
        },
        span,
    )
}
