//! Resolution of DSL placeholders against a runtime theme.
//!
//! Resolution is pure: the same DSL and context always produce the same
//! tree. Lookups that miss (unknown token paths, unknown breakpoints,
//! failing helpers) resolve to nothing; the enclosing object simply omits
//! the key.

mod breakpoints;
mod helpers;

#[cfg(test)]
mod tests;

pub use breakpoints::{media_query, BreakpointTable, DEFAULT_BREAKPOINTS};
pub use helpers::apply_helper;

use serde_json::{Map, Number, Value};
use themeweave_common::ColorScheme;
use tracing::warn;

use crate::ast::format_number;
use crate::dsl::{DslObject, DslValue, Placeholder, ThemeDsl};
use crate::merge::get_path;

/// Runtime inputs for resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolutionContext {
    /// Base theme for the active scheme.
    pub template: Value,
    pub color_scheme: ColorScheme,
    /// Pixels per spacing unit.
    pub spacing_factor: f64,
}

impl ResolutionContext {
    pub fn new(template: Value, color_scheme: ColorScheme, spacing_factor: f64) -> Self {
        Self {
            template,
            color_scheme,
            spacing_factor,
        }
    }
}

/// Resolve a whole DSL document into a placeholder-free object.
pub fn resolve(dsl: &ThemeDsl, ctx: &ResolutionContext) -> Value {
    Value::Object(resolve_object(dsl.root(), ctx))
}

/// Resolve one DSL value. `None` means undefined.
pub fn resolve_value(value: &DslValue, ctx: &ResolutionContext) -> Option<Value> {
    match value {
        DslValue::Null => Some(Value::Null),
        DslValue::Bool(b) => Some(Value::Bool(*b)),
        DslValue::Number(n) => Some(number(*n)),
        DslValue::String(s) => Some(Value::String(s.clone())),
        DslValue::Array(items) => Some(Value::Array(
            items
                .iter()
                .map(|item| resolve_value(item, ctx).unwrap_or(Value::Null))
                .collect(),
        )),
        DslValue::Object(object) => Some(Value::Object(resolve_object(object, ctx))),
        DslValue::Placeholder(placeholder) => resolve_placeholder(placeholder, ctx),
    }
}

fn resolve_object(object: &DslObject, ctx: &ResolutionContext) -> Map<String, Value> {
    object
        .iter()
        .filter_map(|(key, value)| resolve_value(value, ctx).map(|v| (key.clone(), v)))
        .collect()
}

fn resolve_placeholder(placeholder: &Placeholder, ctx: &ResolutionContext) -> Option<Value> {
    match placeholder {
        Placeholder::Spacing { args } => Some(spacing(args, ctx.spacing_factor)),
        Placeholder::Breakpoint {
            breakpoint,
            direction,
            end_breakpoint,
        } => {
            let table = BreakpointTable::from_template(&ctx.template);
            let query = media_query(&table, breakpoint, *direction, end_breakpoint.as_deref());
            if query.is_none() {
                warn!("unknown breakpoint in theme.breakpoints.{direction}('{breakpoint}')");
            }
            query.map(Value::String)
        }
        Placeholder::Helper { name, args } => {
            let args: Vec<Value> = args
                .iter()
                .map(|arg| resolve_value(arg, ctx).unwrap_or(Value::Null))
                .collect();
            match apply_helper(name, &args) {
                Ok(value) => Some(value),
                Err(e) => {
                    warn!("{name}() could not be resolved: {e}");
                    None
                }
            }
        }
        Placeholder::Token { path } => get_path(&ctx.template, path).cloned(),
        // The body's token references already read from the template.
        Placeholder::Function { body, .. } => resolve_value(body, ctx),
    }
}

/// `theme.spacing`: one argument gives a number, several give a CSS
/// shorthand string.
fn spacing(args: &[f64], factor: f64) -> Value {
    match args {
        [] => number(factor),
        [single] => number(single * factor),
        many => Value::String(
            many.iter()
                .map(|n| format!("{}px", format_number(n * factor)))
                .collect::<Vec<_>>()
                .join(" "),
        ),
    }
}

/// JSON number, integral when possible. Non-finite values become null.
pub(crate) fn number(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 {
        Value::Number(Number::from(n as i64))
    } else {
        Number::from_f64(n).map(Value::Number).unwrap_or(Value::Null)
    }
}
