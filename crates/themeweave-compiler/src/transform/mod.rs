//! Lowering of theme code into the DSL.
//!
//! The transformer is best-effort: anything it does not understand becomes
//! a warning plus a neutral value, and the rest of the document is still
//! lowered. It is NOT a safety check. Untrusted code must pass
//! [`crate::validation::validate`] first; [`crate::pipeline::apply`]
//! enforces that order.

mod calls;
mod lower;

#[cfg(test)]
mod tests;

use crate::ast::{ExprKind, Statement};
use crate::dsl::ThemeDsl;
use crate::parser;
use crate::source::{unwrap_source, LineIndex};

/// A lowered value together with the warnings raised while producing it.
#[derive(Debug, Clone, PartialEq)]
pub struct Lowered<T> {
    pub value: T,
    pub warnings: Vec<String>,
}

impl<T> Lowered<T> {
    pub fn clean(value: T) -> Self {
        Self {
            value,
            warnings: Vec::new(),
        }
    }

    pub fn warn(value: T, warning: impl Into<String>) -> Self {
        Self {
            value,
            warnings: vec![warning.into()],
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Lowered<U> {
        Lowered {
            value: f(self.value),
            warnings: self.warnings,
        }
    }

    /// Move the warnings into `warnings` and return the value.
    pub fn unpack(self, warnings: &mut Vec<String>) -> T {
        warnings.extend(self.warnings);
        self.value
    }
}

/// Result of [`transform_code_to_dsl`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransformOutput {
    pub dsl: ThemeDsl,
    /// Set when nothing could be lowered at all.
    pub error: Option<String>,
    pub warnings: Vec<String>,
}

impl TransformOutput {
    fn failed(error: String) -> Self {
        Self {
            error: Some(error),
            ..Default::default()
        }
    }
}

/// Lower theme code into a [`ThemeDsl`]. Never panics; malformed input
/// yields an empty DSL and an `error`.
pub fn transform_code_to_dsl(source: &str) -> TransformOutput {
    if source.trim().is_empty() {
        return TransformOutput::default();
    }

    let body = unwrap_source(source);
    let program = match parser::parse_program(body.text) {
        Ok(program) => program,
        Err(e) => {
            let (line, column) = LineIndex::new(source).position(body.offset + e.span.start);
            return TransformOutput::failed(format!(
                "Syntax error at line {line}, column {column}: {}",
                e.message
            ));
        }
    };

    let properties = match program.body.as_slice() {
        [Statement::Expression { expr, .. }] => match &expr.kind {
            ExprKind::Object(properties) => properties,
            other => {
                return TransformOutput::failed(format!(
                    "Theme code must be an object literal, found {}",
                    other.type_name()
                ))
            }
        },
        _ => {
            return TransformOutput::failed(
                "Theme code must be a single object literal expression".into(),
            )
        }
    };

    let lowered = lower::lower_object(properties);
    tracing::debug!(
        keys = lowered.value.len(),
        warnings = lowered.warnings.len(),
        "transformed theme code"
    );
    TransformOutput {
        dsl: ThemeDsl::from(lowered.value),
        error: None,
        warnings: lowered.warnings,
    }
}
