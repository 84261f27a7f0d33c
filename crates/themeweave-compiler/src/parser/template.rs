//! Template literal splitting: cooked text segments plus `${...}`
//! expressions parsed with spans relative to the enclosing source.

use super::{expr, ParseError, TokenStream};
use crate::ast::TemplateLiteral;
use crate::lexer;

/// Parse the raw text between backticks. `base` is the byte offset of
/// `raw` in the parsed source; `depth` is the nesting level the literal
/// sits at.
pub(super) fn parse_template(
    raw: &str,
    base: usize,
    depth: usize,
) -> Result<TemplateLiteral, ParseError> {
    let bytes = raw.as_bytes();
    let mut quasis = Vec::new();
    let mut expressions = Vec::new();
    let mut segment_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'$' if bytes.get(i + 1) == Some(&b'{') => {
                quasis.push(cook(&raw[segment_start..i]));
                let expr_start = i + 2;
                let expr_end = find_closing_brace(bytes, expr_start).ok_or_else(|| {
                    ParseError::invalid_syntax(
                        "unterminated '${' in template literal",
                        base + i..base + raw.len(),
                    )
                })?;
                expressions.push(parse_embedded(&raw[expr_start..expr_end], base + expr_start, depth)?);
                i = expr_end + 1;
                segment_start = i;
            }
            _ => i += 1,
        }
    }
    quasis.push(cook(&raw[segment_start.min(raw.len())..]));

    Ok(TemplateLiteral {
        quasis,
        expressions,
    })
}

fn cook(segment: &str) -> String {
    lexer::unescape(segment).unwrap_or_else(|| segment.to_string())
}

/// Index of the `}` closing an embedded expression that starts at `from`.
fn find_closing_brace(bytes: &[u8], from: usize) -> Option<usize> {
    let mut depth = 1usize;
    let mut quote: Option<u8> = None;
    let mut i = from;
    while i < bytes.len() {
        let b = bytes[i];
        match quote {
            Some(q) => {
                if b == b'\\' {
                    i += 1;
                } else if b == q {
                    quote = None;
                }
            }
            None => match b {
                b'\'' | b'"' => quote = Some(b),
                b'{' => depth += 1,
                b'}' => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(i);
                    }
                }
                _ => {}
            },
        }
        i += 1;
    }
    None
}

fn parse_embedded(
    text: &str,
    offset: usize,
    depth: usize,
) -> Result<crate::ast::Expr, ParseError> {
    let mut tokens = lexer::tokenize(text)
        .map_err(|span| ParseError::invalid_token(span).shifted(offset))?;
    for (_, span) in tokens.iter_mut() {
        *span = span.start + offset..span.end + offset;
    }
    let mut stream = TokenStream::new(&tokens, offset + text.len()).at_depth(depth);
    if stream.at_end() {
        return Err(ParseError::invalid_syntax(
            "empty '${}' in template literal",
            offset..offset,
        ));
    }
    let expr = expr::parse_expression(&mut stream)?;
    if !stream.at_end() {
        return Err(ParseError::unexpected_token(
            stream.peek(),
            "in template expression",
            stream.current_span(),
        ));
    }
    Ok(expr)
}

