//! Primary expressions: literals, identifiers, object and array literals,
//! template literals, parenthesized expressions and function literals.

use super::expr::{parse_assignment, parse_expression};
use super::{patterns, template, ParseError, TokenStream};
use crate::ast::{
    ArrayElement, ArrowBody, ArrowFunction, Expr, ExprKind, FunctionExpr, Pattern, Property,
    PropertyKey,
};
use crate::lexer::Token;

pub(super) fn parse_primary(stream: &mut TokenStream) -> Result<Expr, ParseError> {
    let start = stream.current_pos();
    let span = stream.current_span();

    let kind = match stream.peek() {
        Some(Token::Null) => ExprKind::Null,
        Some(Token::True) => ExprKind::Bool(true),
        Some(Token::False) => ExprKind::Bool(false),
        Some(Token::Number(n)) => ExprKind::Number(*n),
        Some(Token::String(s)) => ExprKind::String(s.clone()),
        Some(Token::Ident(name)) => ExprKind::Identifier(name.clone()),
        Some(Token::Template(raw)) => {
            ExprKind::Template(template::parse_template(raw, span.start + 1, stream.depth())?)
        }
        Some(Token::LBrace) => return parse_object(stream),
        Some(Token::LBracket) => return parse_array(stream),
        Some(Token::LParen) => return parse_parenthesized(stream),
        Some(Token::Function) => return parse_function(stream),
        other => {
            return Err(ParseError::unexpected_token(
                other,
                "in expression",
                span,
            ))
        }
    };
    stream.advance();
    Ok(Expr::new(kind, stream.span_from(start)))
}

fn parse_object(stream: &mut TokenStream) -> Result<Expr, ParseError> {
    let start = stream.current_pos();
    stream.expect(Token::LBrace)?;
    let mut properties = Vec::new();

    while !stream.check(&Token::RBrace) {
        properties.push(parse_property(stream)?);
        if !stream.eat(&Token::Comma) {
            break;
        }
    }
    stream.expect(Token::RBrace)?;

    Ok(Expr::new(ExprKind::Object(properties), stream.span_from(start)))
}

fn parse_property(stream: &mut TokenStream) -> Result<Property, ParseError> {
    let start = stream.current_pos();

    if stream.eat(&Token::Ellipsis) {
        let argument = parse_assignment(stream)?;
        return Ok(Property::Spread {
            argument,
            span: stream.span_from(start),
        });
    }

    let key_span = stream.current_span();
    let key = match stream.peek() {
        Some(Token::String(s)) => {
            stream.advance();
            PropertyKey::String(s.clone())
        }
        Some(Token::Number(n)) => {
            stream.advance();
            PropertyKey::Number(*n)
        }
        Some(Token::LBracket) => {
            stream.advance();
            let expr = parse_assignment(stream)?;
            stream.expect(Token::RBracket)?;
            PropertyKey::Computed(Box::new(expr))
        }
        Some(token) => match token.as_property_name() {
            Some(name) => {
                stream.advance();
                PropertyKey::Identifier(name.to_string())
            }
            None => {
                return Err(ParseError::unexpected_token(
                    Some(token),
                    "in object literal",
                    key_span,
                ))
            }
        },
        None => {
            return Err(ParseError::unexpected_token(
                None,
                "in object literal",
                key_span,
            ))
        }
    };

    match stream.peek() {
        Some(Token::Colon) => {
            stream.advance();
            let value = parse_assignment(stream)?;
            Ok(Property::KeyValue {
                key,
                value,
                shorthand: false,
                span: stream.span_from(start),
            })
        }
        Some(Token::LParen) => {
            patterns::parse_params(stream)?;
            stream.skip_block()?;
            Ok(Property::Method {
                key,
                span: stream.span_from(start),
            })
        }
        _ => {
            let PropertyKey::Identifier(name) = &key else {
                return Err(ParseError::expected_token(
                    &Token::Colon,
                    stream.peek(),
                    stream.current_span(),
                ));
            };
            let ident = Expr::new(ExprKind::Identifier(name.clone()), key_span);
            // `{ a = 1 }` is only meaningful as a destructuring pattern.
            let value = if stream.eat(&Token::Assign) {
                let default = parse_assignment(stream)?;
                Expr::new(
                    ExprKind::Assignment {
                        target: Box::new(ident),
                        value: Box::new(default),
                    },
                    stream.span_from(start),
                )
            } else if matches!(stream.peek(), Some(Token::Comma) | Some(Token::RBrace)) {
                ident
            } else {
                return Err(ParseError::expected_token(
                    &Token::Colon,
                    stream.peek(),
                    stream.current_span(),
                ));
            };
            Ok(Property::KeyValue {
                key,
                value,
                shorthand: true,
                span: stream.span_from(start),
            })
        }
    }
}

fn parse_array(stream: &mut TokenStream) -> Result<Expr, ParseError> {
    let start = stream.current_pos();
    stream.expect(Token::LBracket)?;
    let mut elements = Vec::new();

    loop {
        match stream.peek() {
            Some(Token::RBracket) => break,
            Some(Token::Comma) => {
                elements.push(ArrayElement::Hole(stream.current_span()));
                stream.advance();
                continue;
            }
            Some(Token::Ellipsis) => {
                stream.advance();
                elements.push(ArrayElement::Spread(parse_assignment(stream)?));
            }
            _ => elements.push(ArrayElement::Expr(parse_assignment(stream)?)),
        }
        if !stream.eat(&Token::Comma) {
            break;
        }
    }
    stream.expect(Token::RBracket)?;

    Ok(Expr::new(ExprKind::Array(elements), stream.span_from(start)))
}

/// `( expr )` or the parameter list of an arrow function.
fn parse_parenthesized(stream: &mut TokenStream) -> Result<Expr, ParseError> {
    let start = stream.current_pos();
    stream.expect(Token::LParen)?;

    let mut items = Vec::new();
    while !stream.check(&Token::RParen) {
        let rest = stream.eat(&Token::Ellipsis);
        items.push((rest, parse_assignment(stream)?));
        if !stream.eat(&Token::Comma) {
            break;
        }
    }
    stream.expect(Token::RParen)?;

    if stream.check(&Token::Arrow) {
        let params = items
            .into_iter()
            .map(|(rest, expr)| {
                let pattern = patterns::expr_to_pattern(expr)?;
                Ok(if rest {
                    Pattern::Rest(Box::new(pattern))
                } else {
                    pattern
                })
            })
            .collect::<Result<Vec<_>, ParseError>>()?;
        return parse_arrow_tail(stream, start, params);
    }

    match items.len() {
        1 if !items[0].0 => {
            let (_, expr) = items.remove(0);
            Ok(expr)
        }
        0 => Err(ParseError::invalid_syntax(
            "empty parentheses are only valid before '=>'",
            stream.span_from(start),
        )),
        _ => Err(ParseError::invalid_syntax(
            "sequence expressions are not supported",
            stream.span_from(start),
        )),
    }
}

/// Parse `=> body` once the parameters are known.
pub(super) fn parse_arrow_tail(
    stream: &mut TokenStream,
    start: usize,
    params: Vec<Pattern>,
) -> Result<Expr, ParseError> {
    stream.expect(Token::Arrow)?;
    let body = if stream.check(&Token::LBrace) {
        ArrowBody::Block(stream.skip_block()?)
    } else {
        ArrowBody::Expression(Box::new(parse_expression(stream)?))
    };
    Ok(Expr::new(
        ExprKind::Arrow(ArrowFunction { params, body }),
        stream.span_from(start),
    ))
}

fn parse_function(stream: &mut TokenStream) -> Result<Expr, ParseError> {
    let start = stream.current_pos();
    stream.expect(Token::Function)?;
    let name = match stream.peek() {
        Some(Token::Ident(name)) => {
            stream.advance();
            Some(name.clone())
        }
        _ => None,
    };
    let params = patterns::parse_params(stream)?;
    let body = stream.skip_block()?;
    Ok(Expr::new(
        ExprKind::Function(FunctionExpr { name, params, body }),
        stream.span_from(start),
    ))
}
