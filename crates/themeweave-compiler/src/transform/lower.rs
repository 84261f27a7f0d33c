use super::calls::lower_call;
use super::Lowered;
use crate::ast::{
    ArrayElement, ArrowBody, ArrowFunction, Expr, ExprKind, ObjectPatternProperty, Pattern,
    Property, PropertyKey, UnaryOp,
};
use crate::dsl::{DslObject, DslValue, Placeholder};
use crate::merge::escape_key;
use crate::validation::{DANGEROUS_KEYS, RESERVED_KEYS};

pub(super) fn lower_expr(expr: &Expr) -> Lowered<DslValue> {
    match &expr.kind {
        ExprKind::Null => Lowered::clean(DslValue::Null),
        ExprKind::Bool(b) => Lowered::clean(DslValue::Bool(*b)),
        ExprKind::Number(n) => lower_number(*n),
        ExprKind::String(s) => Lowered::clean(DslValue::String(s.clone())),
        ExprKind::Template(template) => {
            let text = DslValue::String(template.quasis.concat());
            if template.expressions.is_empty() {
                Lowered::clean(text)
            } else {
                Lowered::warn(
                    text,
                    "Template literal with embedded expressions was reduced to its text",
                )
            }
        }
        ExprKind::Identifier(name) if name == "undefined" => Lowered::clean(DslValue::Null),
        ExprKind::Array(elements) => lower_array(elements),
        ExprKind::Object(properties) => lower_object(properties).map(DslValue::Object),
        ExprKind::Member { .. } => lower_member(expr),
        ExprKind::Call {
            callee, arguments, ..
        } => lower_call(callee, arguments),
        ExprKind::Unary { op, argument } => match (op, &argument.kind) {
            (UnaryOp::Minus, ExprKind::Number(n)) => lower_number(-n),
            (UnaryOp::Plus, ExprKind::Number(n)) => lower_number(*n),
            _ => Lowered::warn(
                DslValue::Number(0.0),
                "Unsupported unary expression replaced with 0",
            ),
        },
        ExprKind::Arrow(function) => lower_arrow(function),
        ExprKind::Function(_) => Lowered::warn(
            DslValue::empty_object(),
            "Function expressions are not supported; replaced with {}",
        ),
        other => Lowered::warn(
            DslValue::empty_string(),
            format!("Unsupported expression type {}", other.type_name()),
        ),
    }
}

/// JSON has no infinity, so out-of-range literals would persist as null.
fn lower_number(n: f64) -> Lowered<DslValue> {
    if n.is_finite() {
        Lowered::clean(DslValue::Number(n))
    } else {
        Lowered::warn(
            DslValue::Number(0.0),
            "Number literal is out of range; replaced with 0",
        )
    }
}

pub(super) fn lower_object(properties: &[Property]) -> Lowered<DslObject> {
    let mut warnings = Vec::new();
    let mut object = DslObject::new();

    for property in properties {
        match property {
            Property::KeyValue { key, value, .. } => {
                let key = match key {
                    PropertyKey::Computed(key_expr) => {
                        let key = lower_expr(key_expr).unpack(&mut warnings);
                        match key.as_placeholder().and_then(Placeholder::media_key) {
                            Some(media) => media,
                            None => {
                                warnings.push(
                                    "Computed key is not a theme.breakpoints query; property dropped"
                                        .into(),
                                );
                                continue;
                            }
                        }
                    }
                    static_key => match static_key.name() {
                        Some(name) => name,
                        None => continue,
                    },
                };
                if DANGEROUS_KEYS.contains(&key.as_str()) {
                    warnings.push(format!("Dangerous key \"{key}\" dropped"));
                    continue;
                }
                if RESERVED_KEYS.contains(&key.as_str()) {
                    warnings.push(format!("Reserved key \"{key}\" dropped"));
                    continue;
                }
                let value = lower_expr(value).unpack(&mut warnings);
                object.insert(key, value);
            }
            Property::Spread { .. } => {
                warnings.push("Spread syntax is not supported; spread ignored".into());
            }
            Property::Method { key, .. } => {
                let name = key.name().unwrap_or_default();
                warnings.push(format!("Method \"{name}\" is not supported; property dropped"));
            }
        }
    }

    Lowered {
        value: object,
        warnings,
    }
}

fn lower_array(elements: &[ArrayElement]) -> Lowered<DslValue> {
    let mut warnings = Vec::new();
    let mut items = Vec::with_capacity(elements.len());
    for element in elements {
        match element {
            ArrayElement::Expr(item) => items.push(lower_expr(item).unpack(&mut warnings)),
            ArrayElement::Spread(_) => {
                warnings.push("Spread syntax is not supported; spread ignored".into())
            }
            ArrayElement::Hole(_) => items.push(DslValue::Null),
        }
    }
    Lowered {
        value: DslValue::Array(items),
        warnings,
    }
}

fn lower_member(expr: &Expr) -> Lowered<DslValue> {
    match expr.member_path() {
        Some(path) if expr.is_theme_reference() => Lowered::clean(
            Placeholder::Token {
                path: path[1..]
                    .iter()
                    .map(|segment| escape_key(segment))
                    .collect::<Vec<_>>()
                    .join("."),
            }
            .into(),
        ),
        _ => Lowered::warn(
            DslValue::empty_string(),
            "Only static theme.* references are supported; member expression replaced with ''",
        ),
    }
}

fn lower_arrow(function: &ArrowFunction) -> Lowered<DslValue> {
    if let Some(body) = function.theme_style_body() {
        return lower_expr(body).map(|body| {
            Placeholder::Function {
                params: vec!["theme".into()],
                body: Box::new(body),
            }
            .into()
        });
    }

    let ArrowBody::Expression(body) = &function.body else {
        return Lowered::warn(
            DslValue::empty_object(),
            "Block-bodied functions are not supported; replaced with {}",
        );
    };

    let mut warnings = vec!["Functions should have the form ({ theme }) => ({ ... })".to_string()];
    let mut params = Vec::new();
    for pattern in &function.params {
        bound_names(pattern, &mut params);
    }
    let body = lower_expr(body).unpack(&mut warnings);
    Lowered {
        value: Placeholder::Function {
            params,
            body: Box::new(body),
        }
        .into(),
        warnings,
    }
}

/// Names bound by a parameter pattern, in source order.
fn bound_names(pattern: &Pattern, names: &mut Vec<String>) {
    match pattern {
        Pattern::Identifier(name) => names.push(name.clone()),
        Pattern::Object(properties) => {
            for property in properties {
                match property {
                    ObjectPatternProperty::Property { value, .. } => bound_names(value, names),
                    ObjectPatternProperty::Rest(rest) => bound_names(rest, names),
                }
            }
        }
        Pattern::Array(items) => {
            for item in items.iter().flatten() {
                bound_names(item, names);
            }
        }
        Pattern::Rest(inner) => bound_names(inner, names),
        Pattern::Default { target, .. } => bound_names(target, names),
    }
}
