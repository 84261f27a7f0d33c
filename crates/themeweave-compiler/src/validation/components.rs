//! Structural checks for the `components` section.

use super::values::ValueContext;
use super::Validator;
use crate::ast::{ArrayElement, Expr, ExprKind, Property, PropertyKey};

impl Validator<'_> {
    pub(super) fn check_components(&mut self, value: &Expr, depth: usize) {
        if !self.enter(depth, &value.span) {
            return;
        }
        let ExprKind::Object(entries) = &value.kind else {
            self.report
                .error("\"components\" must be an object", &value.span);
            self.scan(value, depth + 1);
            return;
        };

        for entry in entries {
            let Some((name, value)) = self.entry(entry, depth + 1) else {
                continue;
            };
            match &value.kind {
                ExprKind::Object(_) => self.check_component(value, depth + 1),
                ExprKind::Arrow(_) => self.check_value(value, &ValueContext::style(), depth + 1),
                _ => {
                    self.report.error(
                        format!("Component \"{name}\" must be an object"),
                        &value.span,
                    );
                    self.scan(value, depth + 1);
                }
            }
        }
    }

    fn check_component(&mut self, component: &Expr, depth: usize) {
        if !self.enter(depth, &component.span) {
            return;
        }
        let ExprKind::Object(entries) = &component.kind else {
            return;
        };

        for entry in entries {
            let Some((name, value)) = self.entry(entry, depth + 1) else {
                continue;
            };
            match name.as_str() {
                "styleOverrides" => {
                    if matches!(value.kind, ExprKind::Object(_)) {
                        self.check_value(value, &ValueContext::style(), depth + 1);
                    } else {
                        self.report
                            .error("\"styleOverrides\" must be an object", &value.span);
                        self.scan(value, depth + 1);
                    }
                }
                "variants" => self.check_variants(value, depth + 1),
                "defaultProps" => self.check_value(value, &ValueContext::plain(), depth + 1),
                _ => self.check_value(value, &ValueContext::style(), depth + 1),
            }
        }
    }

    fn check_variants(&mut self, value: &Expr, depth: usize) {
        if !self.enter(depth, &value.span) {
            return;
        }
        let ExprKind::Array(variants) = &value.kind else {
            self.report
                .error("\"variants\" must be an array", &value.span);
            self.scan(value, depth + 1);
            return;
        };

        for variant in variants {
            let variant = match variant {
                ArrayElement::Expr(variant) => variant,
                ArrayElement::Spread(spread) => {
                    self.report
                        .error("Spread syntax is not allowed in variants", &spread.span);
                    self.scan(spread, depth + 1);
                    continue;
                }
                ArrayElement::Hole(_) => continue,
            };
            let ExprKind::Object(entries) = &variant.kind else {
                self.report
                    .error("Each variant must be an object", &variant.span);
                self.scan(variant, depth + 1);
                continue;
            };
            if !self.enter(depth + 1, &variant.span) {
                return;
            }
            for entry in entries {
                let Some((name, value)) = self.entry(entry, depth + 2) else {
                    continue;
                };
                let ctx = if name == "props" {
                    ValueContext::plain()
                } else {
                    ValueContext::style()
                };
                self.check_value(value, &ctx, depth + 2);
            }
        }
    }

    /// Static name and value of an entry inside the components tree.
    /// Everything else is reported and skipped.
    fn entry<'e>(&mut self, property: &'e Property, depth: usize) -> Option<(String, &'e Expr)> {
        match property {
            Property::KeyValue {
                key, value, span, ..
            } => {
                if let PropertyKey::Computed(key_expr) = key {
                    self.reject_computed_key(
                        key,
                        "Computed keys are not allowed in components",
                        span,
                    );
                    self.scan(key_expr, depth);
                    self.scan(value, depth);
                    return None;
                }
                let name = key.name()?;
                if !self.check_key_name(&name, span) {
                    return None;
                }
                Some((name, value))
            }
            Property::Spread { argument, span } => {
                self.report
                    .error("Spread syntax is not allowed in components", span);
                self.scan(argument, depth);
                None
            }
            Property::Method { span, .. } => {
                self.report
                    .error("Methods are not allowed in theme objects", span);
                None
            }
        }
    }
}
