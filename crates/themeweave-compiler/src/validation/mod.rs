//! Sandbox validation of theme code.
//!
//! Parses the source and walks the syntax tree, collecting every policy
//! violation (unknown sections, dangerous keys, disallowed expressions,
//! malformed colors) into a [`ValidationResult`]. The transformer must
//! only run on code this module accepts.

mod budget;
mod components;
mod keys;
mod report;
mod scan;
mod values;


pub use budget::ValidationLimits;
pub use keys::{DANGEROUS_KEYS, RESERVED_KEYS, SAFE_HELPERS, TOP_LEVEL_KEYS};

use serde::{Deserialize, Serialize};
use themeweave_common::Diagnostic;

use crate::ast::{ExprKind, Property, Statement};
use crate::parser;
use crate::source::{unwrap_source, LineIndex};
use budget::Budget;
use report::Report;
use values::ValueContext;

/// Outcome of validating one source text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<Diagnostic>,
    pub warnings: Vec<Diagnostic>,
}

/// Validate theme code with the default limits.
pub fn validate(source: &str) -> ValidationResult {
    validate_with_limits(source, &ValidationLimits::default())
}

/// Validate theme code, bounding the walk by `limits`.
pub fn validate_with_limits(source: &str, limits: &ValidationLimits) -> ValidationResult {
    if source.trim().is_empty() {
        return ValidationResult {
            valid: true,
            ..Default::default()
        };
    }

    let body = unwrap_source(source);
    let mut validator = Validator {
        report: Report::new(LineIndex::new(source), body.offset),
        budget: Budget::new(limits),
    };

    match parser::parse_program(body.text) {
        Ok(program) => validator.check_program(&program.body),
        Err(e) => validator
            .report
            .error(format!("Syntax error: {}", e.message), &e.span),
    }

    let result = validator.report.finish();
    tracing::debug!(
        errors = result.errors.len(),
        warnings = result.warnings.len(),
        "validated theme code"
    );
    result
}

pub(crate) struct Validator<'a> {
    report: Report<'a>,
    budget: Budget,
}

impl Validator<'_> {
    fn check_program(&mut self, body: &[Statement]) {
        let statement = match body {
            [single] => single,
            [] => {
                self.report
                    .error("Theme code must contain an object literal", &(0..0));
                return;
            }
            [_, second, ..] => {
                self.report.error(
                    "Theme code must be a single object literal expression",
                    second.span(),
                );
                return;
            }
        };

        let expr = match statement {
            Statement::Expression { expr, .. } => expr,
            Statement::Declaration { span, .. } => {
                self.report.error(
                    "Expected an object literal, found a variable declaration",
                    span,
                );
                return;
            }
        };

        match &expr.kind {
            ExprKind::Object(properties) => self.check_top_level(properties),
            other => self.report.error(
                format!(
                    "Theme code must be an object literal, found {}",
                    other.type_name()
                ),
                &expr.span,
            ),
        }
    }

    fn check_top_level(&mut self, properties: &[Property]) {
        for property in properties {
            if self.budget.is_exhausted() {
                return;
            }
            match property {
                Property::KeyValue {
                    key, value, span, ..
                } => {
                    let Some(name) = key.name() else {
                        self.reject_computed_key(
                            key,
                            "Computed keys are not allowed at the top level",
                            span,
                        );
                        self.scan(value, 1);
                        continue;
                    };
                    if keys::is_dangerous(&name) {
                        self.report
                            .error(format!("Dangerous key \"{name}\" is not allowed"), span);
                        continue;
                    }
                    if !TOP_LEVEL_KEYS.contains(&name.as_str()) {
                        self.report.error(
                            format!(
                                "Unknown theme key \"{name}\". Allowed keys: {}",
                                TOP_LEVEL_KEYS.join(", ")
                            ),
                            span,
                        );
                        self.scan(value, 1);
                        continue;
                    }
                    if name == "components" {
                        self.check_components(value, 1);
                    } else {
                        let ctx = ValueContext::section(&name);
                        self.check_value(value, &ctx, 1);
                    }
                }
                Property::Spread { argument, span } => {
                    self.report.warning(
                        "Spread syntax at the top level is ambiguous; spread values are not merged",
                        span,
                    );
                    self.scan(argument, 1);
                }
                Property::Method { span, .. } => {
                    self.report
                        .error("Methods are not allowed in theme objects", span);
                }
            }
        }
    }
}
