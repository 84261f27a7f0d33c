//! Diagnostic collection with span to line/column mapping.

use super::ValidationResult;
use crate::ast::Span;
use crate::source::LineIndex;
use themeweave_common::Diagnostic;

pub(super) struct Report<'a> {
    index: LineIndex<'a>,
    /// Offset of the parsed text inside the original source.
    offset: usize,
    errors: Vec<Diagnostic>,
    warnings: Vec<Diagnostic>,
}

impl<'a> Report<'a> {
    pub(super) fn new(index: LineIndex<'a>, offset: usize) -> Self {
        Self {
            index,
            offset,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    fn position(&self, span: &Span) -> (Option<usize>, Option<usize>) {
        let (line, column) = self.index.position(self.offset + span.start);
        (Some(line), Some(column))
    }

    pub(super) fn error(&mut self, message: impl Into<String>, span: &Span) {
        let (line, column) = self.position(span);
        self.errors.push(Diagnostic::error(message, line, column));
    }

    pub(super) fn warning(&mut self, message: impl Into<String>, span: &Span) {
        let (line, column) = self.position(span);
        self.warnings.push(Diagnostic::warning(message, line, column));
    }

    pub(super) fn finish(self) -> ValidationResult {
        ValidationResult {
            valid: self.errors.is_empty(),
            errors: self.errors,
            warnings: self.warnings,
        }
    }
}
