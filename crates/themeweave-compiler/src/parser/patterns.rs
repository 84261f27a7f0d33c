//! Destructuring patterns for function parameters.
//!
//! Arrow parameters are first parsed as expressions (the parenthesized
//! form is ambiguous until `=>` is seen) and converted here.

use super::expr::parse_assignment;
use super::{ParseError, TokenStream};
use crate::ast::{ArrayElement, Expr, ExprKind, ObjectPatternProperty, Pattern, Property};
use crate::lexer::Token;

/// Parse a parenthesized formal parameter list.
pub(super) fn parse_params(stream: &mut TokenStream) -> Result<Vec<Pattern>, ParseError> {
    stream.expect(Token::LParen)?;
    let mut params = Vec::new();
    while !stream.check(&Token::RParen) {
        let rest = stream.eat(&Token::Ellipsis);
        let pattern = expr_to_pattern(parse_assignment(stream)?)?;
        params.push(if rest {
            Pattern::Rest(Box::new(pattern))
        } else {
            pattern
        });
        if !stream.eat(&Token::Comma) {
            break;
        }
    }
    stream.expect(Token::RParen)?;
    Ok(params)
}

pub(super) fn expr_to_pattern(expr: Expr) -> Result<Pattern, ParseError> {
    match expr.kind {
        ExprKind::Identifier(name) => Ok(Pattern::Identifier(name)),
        ExprKind::Object(properties) => {
            let mut converted = Vec::with_capacity(properties.len());
            for property in properties {
                converted.push(match property {
                    Property::KeyValue { key, value, .. } => ObjectPatternProperty::Property {
                        key,
                        value: expr_to_pattern(value)?,
                    },
                    Property::Spread { argument, .. } => {
                        ObjectPatternProperty::Rest(expr_to_pattern(argument)?)
                    }
                    Property::Method { span, .. } => {
                        return Err(ParseError::invalid_syntax(
                            "method is not valid in a parameter pattern",
                            span,
                        ))
                    }
                });
            }
            Ok(Pattern::Object(converted))
        }
        ExprKind::Array(elements) => {
            let mut converted = Vec::with_capacity(elements.len());
            for element in elements {
                converted.push(match element {
                    ArrayElement::Expr(e) => Some(expr_to_pattern(e)?),
                    ArrayElement::Spread(e) => Some(Pattern::Rest(Box::new(expr_to_pattern(e)?))),
                    ArrayElement::Hole(_) => None,
                });
            }
            Ok(Pattern::Array(converted))
        }
        ExprKind::Assignment { target, value } => Ok(Pattern::Default {
            target: Box::new(expr_to_pattern(*target)?),
            default: value,
        }),
        other => Err(ParseError::invalid_syntax(
            format!("{} is not a valid parameter", other.type_name()),
            expr.span,
        )),
    }
}
