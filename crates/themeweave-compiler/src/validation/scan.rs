//! Lenient walk used where a subtree is already rejected or not checked
//! structurally: it only looks for dangerous keys.

use super::keys;
use super::Validator;
use crate::ast::{
    Argument, ArrayElement, ArrowBody, Expr, ExprKind, MemberProperty, ObjectPatternProperty,
    Pattern, Property, PropertyKey,
};

impl Validator<'_> {
    pub(super) fn scan(&mut self, expr: &Expr, depth: usize) {
        if !self.enter(depth, &expr.span) {
            return;
        }
        let depth = depth + 1;

        match &expr.kind {
            ExprKind::Null
            | ExprKind::Bool(_)
            | ExprKind::Number(_)
            | ExprKind::String(_)
            | ExprKind::Identifier(_)
            | ExprKind::Function(_) => {}
            ExprKind::Template(template) => {
                for embedded in &template.expressions {
                    self.scan(embedded, depth);
                }
            }
            ExprKind::Array(elements) => {
                for element in elements {
                    if let ArrayElement::Expr(item) | ArrayElement::Spread(item) = element {
                        self.scan(item, depth);
                    }
                }
            }
            ExprKind::Object(properties) => {
                for property in properties {
                    match property {
                        Property::KeyValue {
                            key, value, span, ..
                        } => {
                            if let Some(name) = keys::static_key(key) {
                                if keys::is_dangerous(&name) {
                                    self.report.error(
                                        format!("Dangerous key \"{name}\" is not allowed"),
                                        span,
                                    );
                                }
                            }
                            if let PropertyKey::Computed(key_expr) = key {
                                self.scan(key_expr, depth);
                            }
                            self.scan(value, depth);
                        }
                        Property::Spread { argument, .. } => self.scan(argument, depth),
                        Property::Method { key, span } => {
                            if let Some(name) = keys::static_key(key) {
                                if keys::is_dangerous(&name) {
                                    self.report.error(
                                        format!("Dangerous key \"{name}\" is not allowed"),
                                        span,
                                    );
                                }
                            }
                        }
                    }
                }
            }
            ExprKind::Member {
                object, property, ..
            } => {
                self.scan(object, depth);
                match property {
                    MemberProperty::Named(name) if keys::is_dangerous(name) => {
                        self.report.error(
                            format!("Dangerous key \"{name}\" is not allowed"),
                            &expr.span,
                        );
                    }
                    MemberProperty::Named(_) => {}
                    MemberProperty::Computed(key) => self.scan(key, depth),
                }
            }
            ExprKind::Call {
                callee, arguments, ..
            }
            | ExprKind::New { callee, arguments } => {
                self.scan(callee, depth);
                for argument in arguments {
                    let (Argument::Expr(arg) | Argument::Spread(arg)) = argument;
                    self.scan(arg, depth);
                }
            }
            ExprKind::Unary { argument, .. } => self.scan(argument, depth),
            ExprKind::Binary { left, right, .. } => {
                self.scan(left, depth);
                self.scan(right, depth);
            }
            ExprKind::Conditional {
                test,
                consequent,
                alternate,
            } => {
                self.scan(test, depth);
                self.scan(consequent, depth);
                self.scan(alternate, depth);
            }
            ExprKind::Assignment { target, value } => {
                self.scan(target, depth);
                self.scan(value, depth);
            }
            ExprKind::Arrow(function) => {
                for param in &function.params {
                    self.scan_pattern(param, depth);
                }
                if let ArrowBody::Expression(body) = &function.body {
                    self.scan(body, depth);
                }
            }
        }
    }

    fn scan_pattern(&mut self, pattern: &Pattern, depth: usize) {
        match pattern {
            Pattern::Identifier(_) => {}
            Pattern::Object(properties) => {
                for property in properties {
                    match property {
                        ObjectPatternProperty::Property { value, .. } => {
                            self.scan_pattern(value, depth)
                        }
                        ObjectPatternProperty::Rest(rest) => self.scan_pattern(rest, depth),
                    }
                }
            }
            Pattern::Array(items) => {
                for item in items.iter().flatten() {
                    self.scan_pattern(item, depth);
                }
            }
            Pattern::Rest(inner) => self.scan_pattern(inner, depth),
            Pattern::Default { target, default } => {
                self.scan_pattern(target, depth);
                self.scan(default, depth);
            }
        }
    }
}
