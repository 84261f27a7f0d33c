//! Lowering of call expressions: spacing, breakpoints and color helpers.

use super::lower::lower_expr;
use super::Lowered;
use crate::ast::{Argument, Expr, ExprKind, UnaryOp};
use crate::dsl::{BreakpointDirection, DslValue, Placeholder};
use crate::validation::SAFE_HELPERS;

pub(super) fn lower_call(callee: &Expr, arguments: &[Argument]) -> Lowered<DslValue> {
    if let ExprKind::Identifier(name) = &callee.kind {
        if SAFE_HELPERS.contains(&name.as_str()) {
            return lower_helper(name, arguments);
        }
        return Lowered::warn(
            DslValue::empty_string(),
            format!("Call to \"{name}\" is not supported; replaced with ''"),
        );
    }

    let path = callee
        .is_theme_reference()
        .then(|| callee.member_path())
        .flatten()
        .unwrap_or_default();
    let segments: Vec<&str> = path.iter().map(String::as_str).collect();
    match segments.as_slice() {
        ["theme", "spacing"] => lower_spacing(arguments),
        ["theme", "breakpoints", method] => lower_breakpoint(method, arguments),
        _ => Lowered::warn(
            DslValue::empty_string(),
            "Unsupported call expression replaced with ''",
        ),
    }
}

fn lower_spacing(arguments: &[Argument]) -> Lowered<DslValue> {
    let args: Option<Vec<f64>> = arguments.iter().map(numeric_literal).collect();
    match args {
        Some(args) if !args.is_empty() => Lowered::clean(Placeholder::Spacing { args }.into()),
        _ => Lowered::warn(
            Placeholder::Spacing { args: vec![1.0] }.into(),
            "theme.spacing expects numeric literal arguments; using theme.spacing(1)",
        ),
    }
}

fn lower_breakpoint(method: &str, arguments: &[Argument]) -> Lowered<DslValue> {
    let Some(direction) = BreakpointDirection::parse(method) else {
        return Lowered::warn(
            DslValue::empty_string(),
            format!("Unknown breakpoint method \"{method}\"; replaced with ''"),
        );
    };

    let names: Vec<Option<&str>> = arguments.iter().map(string_literal).collect();
    let breakpoint = match names.first() {
        Some(Some(name)) => name.to_string(),
        _ => {
            return Lowered::warn(
                DslValue::empty_string(),
                format!("theme.breakpoints.{method} expects a breakpoint name; replaced with ''"),
            )
        }
    };

    let end_breakpoint = match (direction, names.get(1)) {
        (BreakpointDirection::Between, Some(Some(end))) => Some(end.to_string()),
        (BreakpointDirection::Between, _) => {
            return Lowered::warn(
                DslValue::empty_string(),
                "theme.breakpoints.between expects two breakpoint names; replaced with ''",
            )
        }
        _ => None,
    };

    Lowered::clean(
        Placeholder::Breakpoint {
            breakpoint,
            direction,
            end_breakpoint,
        }
        .into(),
    )
}

fn lower_helper(name: &str, arguments: &[Argument]) -> Lowered<DslValue> {
    let mut warnings = Vec::new();
    let mut args = Vec::with_capacity(arguments.len());
    for argument in arguments {
        match argument {
            Argument::Expr(arg) => args.push(lower_expr(arg).unpack(&mut warnings)),
            Argument::Spread(_) => {
                warnings.push(format!("Spread argument to {name}() ignored"));
            }
        }
    }
    Lowered {
        value: Placeholder::Helper {
            name: name.to_string(),
            args,
        }
        .into(),
        warnings,
    }
}

/// A number literal, optionally signed.
fn numeric_literal(argument: &Argument) -> Option<f64> {
    let Argument::Expr(expr) = argument else {
        return None;
    };
    let n = match &expr.kind {
        ExprKind::Number(n) => *n,
        ExprKind::Unary { op, argument } => match (op, &argument.kind) {
            (UnaryOp::Minus, ExprKind::Number(n)) => -n,
            (UnaryOp::Plus, ExprKind::Number(n)) => *n,
            _ => return None,
        },
        _ => return None,
    };
    n.is_finite().then_some(n)
}

fn string_literal(argument: &Argument) -> Option<&str> {
    match argument {
        Argument::Expr(Expr {
            kind: ExprKind::String(s),
            ..
        }) => Some(s),
        _ => None,
    }
}
