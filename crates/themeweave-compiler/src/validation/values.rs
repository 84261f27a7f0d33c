//! Strict per-node walk over value positions.

use super::budget::Entry;
use super::keys;
use super::Validator;
use crate::ast::{Argument, ArrayElement, Expr, ExprKind, Property, PropertyKey, Span, UnaryOp};
use crate::colors::validate_color;

/// Where in the theme a value sits, as far as the checks care.
#[derive(Debug, Clone, Copy)]
pub(super) struct ValueContext<'k> {
    in_palette: bool,
    key: Option<&'k str>,
    check_colors: bool,
}

impl<'k> ValueContext<'k> {
    /// Context for the value of a top-level section.
    pub(super) fn section(name: &'k str) -> Self {
        Self {
            in_palette: name == "palette",
            key: None,
            check_colors: true,
        }
    }

    /// Context without color checks, for component props and call arguments.
    pub(super) fn plain() -> Self {
        Self {
            in_palette: false,
            key: None,
            check_colors: false,
        }
    }

    /// Context for style objects, where only color-named keys hold colors.
    pub(super) fn style() -> Self {
        Self {
            in_palette: false,
            key: None,
            check_colors: true,
        }
    }

    fn child(&self, key: &'k str) -> Self {
        Self {
            key: Some(key),
            ..*self
        }
    }

    fn expects_color(&self) -> bool {
        self.check_colors
            && self
                .key
                .is_some_and(|key| keys::is_color_key(key, self.in_palette))
    }
}

impl Validator<'_> {
    /// Count a node against the limits. Returns false when the walk must
    /// stop here.
    pub(super) fn enter(&mut self, depth: usize, span: &Span) -> bool {
        match self.budget.enter(depth) {
            Entry::Allowed => true,
            Entry::JustExhausted => {
                let limits = *self.budget.limits();
                self.report.error(
                    format!(
                        "Theme code is too complex (max depth {}, max nodes {}); validation stopped here",
                        limits.max_depth, limits.max_nodes
                    ),
                    span,
                );
                false
            }
            Entry::Refused => false,
        }
    }

    pub(super) fn check_value(&mut self, expr: &Expr, ctx: &ValueContext<'_>, depth: usize) {
        if !self.enter(depth, &expr.span) {
            return;
        }

        match &expr.kind {
            ExprKind::Null | ExprKind::Bool(_) => {}
            ExprKind::Number(n) => self.check_number(*n, &expr.span),
            ExprKind::String(s) => {
                if ctx.expects_color() {
                    self.check_color(s, &expr.span);
                }
            }
            ExprKind::Template(template) => {
                for embedded in &template.expressions {
                    if !self.check_theme_reference(embedded) {
                        self.report.error(
                            "Template literals may only embed theme.* references",
                            &embedded.span,
                        );
                    }
                }
                if template.expressions.is_empty() && ctx.expects_color() {
                    let text = template.quasis.concat();
                    self.check_color(&text, &expr.span);
                }
            }
            ExprKind::Identifier(name) => {
                if name != "undefined" {
                    self.report.error(
                        format!(
                            "Identifier \"{name}\" is not allowed here; reference theme values through theme.*"
                        ),
                        &expr.span,
                    );
                }
            }
            ExprKind::Array(elements) => {
                for element in elements {
                    match element {
                        ArrayElement::Expr(item) => self.check_value(item, ctx, depth + 1),
                        ArrayElement::Spread(item) => {
                            self.report
                                .error("Spread syntax is not allowed in arrays", &item.span);
                            self.scan(item, depth + 1);
                        }
                        ArrayElement::Hole(_) => {}
                    }
                }
            }
            ExprKind::Object(properties) => self.check_object(properties, ctx, depth),
            ExprKind::Member { .. } => {
                if !self.check_theme_reference(expr) {
                    self.report.error(
                        "Member expressions must be static references rooted at theme",
                        &expr.span,
                    );
                }
            }
            ExprKind::Call {
                callee, arguments, ..
            } => self.check_call(callee, arguments, &expr.span, depth),
            ExprKind::Unary { op, argument } => match (op, &argument.kind) {
                (UnaryOp::Plus | UnaryOp::Minus, ExprKind::Number(n)) => {
                    self.check_number(*n, &expr.span)
                }
                _ => self.report.error(
                    "Unary operators are only allowed as a sign on numbers",
                    &expr.span,
                ),
            },
            ExprKind::Arrow(function) => match function.theme_style_body() {
                Some(body) => self.check_value(body, &ValueContext::style(), depth + 1),
                None => self.report.error(
                    "Functions must have the form ({ theme }) => ({ ... })",
                    &expr.span,
                ),
            },
            ExprKind::Function(_) => self.report.error(
                "Function expressions are not allowed; use ({ theme }) => ({ ... })",
                &expr.span,
            ),
            other => {
                self.report.error(
                    format!("Unsupported expression type: {}", other.type_name()),
                    &expr.span,
                );
                self.scan(expr, depth);
            }
        }
    }

    fn check_number(&mut self, n: f64, span: &Span) {
        if !n.is_finite() {
            self.report.error("Number literal is out of range", span);
        }
    }

    /// Report a static key that may not appear in theme objects. Returns
    /// whether the key is usable.
    pub(super) fn check_key_name(&mut self, name: &str, span: &Span) -> bool {
        if keys::is_dangerous(name) {
            self.report
                .error(format!("Dangerous key \"{name}\" is not allowed"), span);
            return false;
        }
        if keys::is_reserved(name) {
            self.report.error(
                format!("Key \"{name}\" is reserved for DSL placeholders"),
                span,
            );
            return false;
        }
        true
    }

    /// Report a computed key that is not a breakpoint query, naming it
    /// when it spells a dangerous key.
    pub(super) fn reject_computed_key(&mut self, key: &PropertyKey, message: &str, span: &Span) {
        match keys::static_key(key) {
            Some(name) if keys::is_dangerous(&name) => self
                .report
                .error(format!("Dangerous key \"{name}\" is not allowed"), span),
            _ => self.report.error(message, span),
        }
    }

    pub(super) fn check_object(
        &mut self,
        properties: &[Property],
        ctx: &ValueContext<'_>,
        depth: usize,
    ) {
        for property in properties {
            match property {
                Property::KeyValue {
                    key, value, span, ..
                } => match key {
                    PropertyKey::Computed(key_expr) => {
                        if keys::breakpoint_direction(key_expr).is_some() {
                            self.check_value(key_expr, &ValueContext::plain(), depth + 1);
                            self.check_value(value, &ctx.child("@media"), depth + 1);
                        } else {
                            self.reject_computed_key(
                                key,
                                "Computed keys are only allowed for theme.breakpoints queries",
                                span,
                            );
                            self.scan(key_expr, depth + 1);
                            self.scan(value, depth + 1);
                        }
                    }
                    _ => {
                        let Some(name) = key.name() else { continue };
                        if !self.check_key_name(&name, span) {
                            continue;
                        }
                        self.check_value(value, &ctx.child(&name), depth + 1);
                    }
                },
                Property::Spread { argument, span } => {
                    self.report
                        .error("Spread syntax is not allowed in theme values", span);
                    self.scan(argument, depth + 1);
                }
                Property::Method { span, .. } => {
                    self.report
                        .error("Methods are not allowed in theme objects", span);
                }
            }
        }
    }

    fn check_call(&mut self, callee: &Expr, arguments: &[Argument], span: &Span, depth: usize) {
        let helper = match &callee.kind {
            ExprKind::Identifier(name) if keys::is_safe_helper(name) => Some(name.as_str()),
            _ if self.check_theme_reference(callee) => None,
            ExprKind::Identifier(name) => {
                self.report.error(
                    format!(
                        "Function \"{name}\" is not allowed. Allowed helpers: {}",
                        keys::SAFE_HELPERS.join(", ")
                    ),
                    span,
                );
                return self.scan_call(callee, arguments, depth);
            }
            _ => {
                self.report.error(
                    "Only theme.* methods and whitelisted helpers may be called",
                    span,
                );
                return self.scan_call(callee, arguments, depth);
            }
        };

        for (index, argument) in arguments.iter().enumerate() {
            match argument {
                Argument::Expr(arg) => {
                    let ctx = match helper {
                        Some(name) if helper_takes_color(name, index) => ValueContext {
                            in_palette: false,
                            key: Some("color"),
                            check_colors: true,
                        },
                        _ => ValueContext::plain(),
                    };
                    self.check_value(arg, &ctx, depth + 1);
                }
                Argument::Spread(arg) => {
                    self.report
                        .error("Spread arguments are not allowed", &arg.span);
                    self.scan(arg, depth + 1);
                }
            }
        }
    }

    fn scan_call(&mut self, callee: &Expr, arguments: &[Argument], depth: usize) {
        self.scan(callee, depth + 1);
        for argument in arguments {
            let (Argument::Expr(arg) | Argument::Spread(arg)) = argument;
            self.scan(arg, depth + 1);
        }
    }

    /// True for a static `theme.*` chain; reports dangerous segments.
    fn check_theme_reference(&mut self, expr: &Expr) -> bool {
        if !expr.is_theme_reference() {
            return false;
        }
        if let Some(path) = expr.member_path() {
            if let Some(segment) = keys::dangerous_segment(&path) {
                self.report.error(
                    format!("Dangerous key \"{segment}\" is not allowed"),
                    &expr.span,
                );
            }
        }
        true
    }

    fn check_color(&mut self, value: &str, span: &Span) {
        if !validate_color(value) {
            self.report.error(
                format!(
                    "Invalid color \"{value}\"; use #hex, rgb(), rgba(), hsl(), hsla() or color()"
                ),
                span,
            );
        }
    }
}

/// Whether argument `index` of a helper is a color.
fn helper_takes_color(name: &str, index: usize) -> bool {
    match name {
        "getContrastRatio" => index < 2,
        _ => index == 0,
    }
}
