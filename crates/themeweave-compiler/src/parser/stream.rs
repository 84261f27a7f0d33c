//! Token stream wrapper for the recursive descent parser.

use super::{ParseError, MAX_NESTING_DEPTH};
use crate::ast::Span;
use crate::lexer::Token;
use std::mem::discriminant;
use std::ops::Range;

/// Token stream with lookahead and span tracking.
pub struct TokenStream<'src> {
    tokens: &'src [(Token, Range<usize>)],
    pos: usize,
    /// Byte offset reported for errors at end of input.
    eof: usize,
    /// Open nesting levels, bounded by [`MAX_NESTING_DEPTH`].
    depth: usize,
}

impl<'src> TokenStream<'src> {
    pub fn new(tokens: &'src [(Token, Range<usize>)], eof: usize) -> Self {
        Self {
            tokens,
            pos: 0,
            eof,
            depth: 0,
        }
    }

    /// Start counting nesting from `depth`, for text embedded in an
    /// already nested construct.
    pub fn at_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Open one nesting level. Fails once [`MAX_NESTING_DEPTH`] levels are
    /// open, so hostile input cannot exhaust the stack.
    pub fn enter(&mut self) -> Result<(), ParseError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ParseError::invalid_syntax(
                format!("nesting too deep (more than {MAX_NESTING_DEPTH} levels)"),
                self.current_span(),
            ));
        }
        self.depth += 1;
        Ok(())
    }

    pub fn exit(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn peek(&self) -> Option<&'src Token> {
        self.tokens.get(self.pos).map(|(tok, _)| tok)
    }

    pub fn peek_nth(&self, n: usize) -> Option<&'src Token> {
        self.tokens.get(self.pos + n).map(|(tok, _)| tok)
    }

    pub fn advance(&mut self) -> Option<&'src Token> {
        let token = self.tokens.get(self.pos).map(|(tok, _)| tok);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Check whether the current token has the same variant as `expected`.
    pub fn check(&self, expected: &Token) -> bool {
        matches!(self.peek(), Some(t) if discriminant(t) == discriminant(expected))
    }

    /// Consume the current token if it matches.
    pub fn eat(&mut self, expected: &Token) -> bool {
        if self.check(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    pub fn expect(&mut self, expected: Token) -> Result<Span, ParseError> {
        if self.check(&expected) {
            let span = self.current_span();
            self.pos += 1;
            Ok(span)
        } else {
            Err(ParseError::expected_token(
                &expected,
                self.peek(),
                self.current_span(),
            ))
        }
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub fn current_pos(&self) -> usize {
        self.pos
    }

    /// Byte offset where the token at `pos` starts.
    pub fn start_of(&self, pos: usize) -> usize {
        self.tokens
            .get(pos)
            .map(|(_, span)| span.start)
            .unwrap_or(self.eof)
    }

    /// Span from the token at `start` through the last consumed token.
    pub fn span_from(&self, start: usize) -> Span {
        let start_byte = self.start_of(start);
        let end_byte = if self.pos > start {
            self.tokens
                .get(self.pos - 1)
                .map(|(_, span)| span.end)
                .unwrap_or(self.eof)
        } else {
            start_byte
        };
        start_byte..end_byte
    }

    /// Span of the current token, or an empty span at end of input.
    pub fn current_span(&self) -> Span {
        match self.tokens.get(self.pos) {
            Some((_, span)) => span.clone(),
            None => self.eof..self.eof,
        }
    }

    /// Skip a balanced `{ ... }` block, returning its span. The current
    /// token must be `{`.
    pub fn skip_block(&mut self) -> Result<Span, ParseError> {
        let start = self.pos;
        self.expect(Token::LBrace)?;
        let mut depth = 1usize;
        while depth > 0 {
            match self.advance() {
                Some(Token::LBrace) => depth += 1,
                Some(Token::RBrace) => depth -= 1,
                Some(_) => {}
                None => {
                    return Err(ParseError::expected_token(
                        &Token::RBrace,
                        None,
                        self.current_span(),
                    ))
                }
            }
        }
        Ok(self.span_from(start))
    }
}
