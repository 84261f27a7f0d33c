//! Parse error types.

use crate::ast::Span;
use crate::lexer::Token;
use std::fmt;

/// Parse error with source location.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// Byte range in the parsed text.
    pub span: Span,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Input the lexer could not turn into a token.
    InvalidToken,
    /// A token other than the expected one.
    UnexpectedToken,
    /// Input ended while a construct was still open.
    UnexpectedEof,
    /// Tokens are present but form a construct this dialect rejects.
    InvalidSyntax,
}

impl ParseError {
    pub fn invalid_token(span: Span) -> Self {
        Self {
            kind: ParseErrorKind::InvalidToken,
            span,
            message: "unexpected character".into(),
        }
    }

    pub fn expected_token(expected: &Token, found: Option<&Token>, span: Span) -> Self {
        match found {
            Some(token) => Self {
                kind: ParseErrorKind::UnexpectedToken,
                span,
                message: format!("expected {expected}, found {token}"),
            },
            None => Self {
                kind: ParseErrorKind::UnexpectedEof,
                span,
                message: format!("expected {expected}, found end of input"),
            },
        }
    }

    pub fn unexpected_token(found: Option<&Token>, context: &str, span: Span) -> Self {
        match found {
            Some(token) => Self {
                kind: ParseErrorKind::UnexpectedToken,
                span,
                message: format!("unexpected {token} {context}"),
            },
            None => Self {
                kind: ParseErrorKind::UnexpectedEof,
                span,
                message: format!("unexpected end of input {context}"),
            },
        }
    }

    pub fn invalid_syntax(message: impl Into<String>, span: Span) -> Self {
        Self {
            kind: ParseErrorKind::InvalidSyntax,
            span,
            message: message.into(),
        }
    }

    /// Move the span by `offset` bytes, for text parsed out of a larger
    /// source.
    pub fn shifted(mut self, offset: usize) -> Self {
        self.span = self.span.start + offset..self.span.end + offset;
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {:?}", self.message, self.span)
    }
}

impl std::error::Error for ParseError {}
