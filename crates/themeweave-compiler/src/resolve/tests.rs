use super::*;
use crate::dsl::{BreakpointDirection, DslObject};
use crate::transform::transform_code_to_dsl;
use serde_json::json;

fn ctx(template: Value) -> ResolutionContext {
    ResolutionContext::new(template, ColorScheme::Light, 8.0)
}

fn dsl(source: &str) -> ThemeDsl {
    let output = transform_code_to_dsl(source);
    assert_eq!(output.error, None);
    output.dsl
}

fn breakpoint(name: &str, direction: BreakpointDirection, end: Option<&str>) -> DslValue {
    Placeholder::Breakpoint {
        breakpoint: name.into(),
        direction,
        end_breakpoint: end.map(String::from),
    }
    .into()
}

#[test]
fn spacing_multiplies_factor() {
    let dsl = ThemeDsl::from_json(r#"{ "margin": { "__type": "spacing", "args": [2] } }"#).unwrap();
    assert_eq!(resolve(&dsl, &ctx(json!({}))), json!({ "margin": 16 }));
}

#[test]
fn spacing_with_several_arguments_is_shorthand() {
    let value: DslValue = Placeholder::Spacing {
        args: vec![1.0, 2.0, 0.5],
    }
    .into();
    assert_eq!(
        resolve_value(&value, &ctx(json!({}))),
        Some(json!("8px 16px 4px"))
    );
}

#[test]
fn fractional_spacing_stays_numeric() {
    let value: DslValue = Placeholder::Spacing { args: vec![0.5] }.into();
    let resolved = resolve_value(&value, &ResolutionContext::new(json!({}), ColorScheme::Light, 5.0));
    assert_eq!(resolved, Some(json!(2.5)));
}

#[test]
fn tokens_read_from_template() {
    let template = json!({ "palette": { "primary": { "main": "#1976d2" } }, "shadows": ["none", "0 1px 2px"] });
    let dsl = dsl("{ a: theme.palette.primary.main, b: theme.shadows[1] }");
    assert_eq!(
        resolve(&dsl, &ctx(template)),
        json!({ "a": "#1976d2", "b": "0 1px 2px" })
    );
}

#[test]
fn missing_token_is_undefined() {
    let dsl = dsl("{ a: theme.palette.nothing.here, b: [theme.nope], c: 1 }");
    assert_eq!(resolve(&dsl, &ctx(json!({}))), json!({ "b": [null], "c": 1 }));
}

#[test]
fn breakpoint_queries_use_default_table() {
    let table = BreakpointTable::default();
    let c = ctx(json!({}));
    assert_eq!(
        resolve_value(&breakpoint("md", BreakpointDirection::Up, None), &c),
        Some(json!("@media (min-width:900px)"))
    );
    assert_eq!(
        resolve_value(&breakpoint("sm", BreakpointDirection::Down, None), &c),
        Some(json!("@media (max-width:599.95px)"))
    );
    assert_eq!(
        media_query(&table, "sm", BreakpointDirection::Between, Some("lg")).as_deref(),
        Some("@media (min-width:600px) and (max-width:1199.95px)")
    );
    assert_eq!(
        media_query(&table, "md", BreakpointDirection::Only, None).as_deref(),
        Some("@media (min-width:900px) and (max-width:1199.95px)")
    );
    assert_eq!(
        media_query(&table, "xl", BreakpointDirection::Only, None).as_deref(),
        Some("@media (min-width:1536px)")
    );
}

#[test]
fn breakpoint_values_come_from_template() {
    let template = json!({ "breakpoints": { "values": { "mobile": 0, "tablet": 640, "desktop": 1024 } } });
    let c = ctx(template);
    assert_eq!(
        resolve_value(&breakpoint("tablet", BreakpointDirection::Only, None), &c),
        Some(json!("@media (min-width:640px) and (max-width:1023.95px)"))
    );
    assert_eq!(resolve_value(&breakpoint("md", BreakpointDirection::Up, None), &c), None);
}

#[test]
fn unknown_between_end_is_undefined() {
    let table = BreakpointTable::default();
    assert_eq!(
        media_query(&table, "sm", BreakpointDirection::Between, Some("huge")),
        None
    );
    assert_eq!(media_query(&table, "sm", BreakpointDirection::Between, None), None);
}

#[test]
fn helpers_apply_to_resolved_arguments() {
    let template = json!({ "palette": { "primary": { "main": "#ffffff" } } });
    let dsl = dsl("{ a: alpha(theme.palette.primary.main, 0.5), b: darken('#fff', 0.5), c: emphasize('#000') }");
    assert_eq!(
        resolve(&dsl, &ctx(template)),
        json!({
            "a": "rgba(255, 255, 255, 0.5)",
            "b": "rgb(127, 127, 127)",
            "c": "rgb(38, 38, 38)"
        })
    );
}

#[test]
fn contrast_ratio_is_numeric() {
    let value = apply_helper("getContrastRatio", &[json!("#000"), json!("#fff")]).unwrap();
    assert!((value.as_f64().unwrap() - 21.0).abs() < 1e-9);
}

#[test]
fn failing_helper_is_undefined() {
    let dsl = dsl("{ a: alpha('red', 0.5), b: lighten(theme.missing, 0.1), c: 'kept' }");
    assert_eq!(resolve(&dsl, &ctx(json!({}))), json!({ "c": "kept" }));
    assert!(apply_helper("eval", &[]).is_err());
}

#[test]
fn function_placeholder_resolves_body() {
    let dsl = dsl(
        "{ components: { MuiButton: { styleOverrides: { root: ({ theme }) => ({ padding: theme.spacing(1), color: theme.palette.text.primary }) } } } }",
    );
    let template = json!({ "palette": { "text": { "primary": "rgba(0, 0, 0, 0.87)" } } });
    assert_eq!(
        resolve(&dsl, &ctx(template)),
        json!({
            "components": { "MuiButton": { "styleOverrides": { "root": {
                "padding": 8,
                "color": "rgba(0, 0, 0, 0.87)"
            } } } }
        })
    );
}

#[test]
fn media_keys_pass_through() {
    let dsl = dsl("{ root: { [theme.breakpoints.up('md')]: { padding: theme.spacing(2) } } }");
    assert_eq!(
        resolve(&dsl, &ctx(json!({}))),
        json!({ "root": { "@media-up-md": { "padding": 16 } } })
    );
}

#[test]
fn plain_values_resolve_structurally() {
    let mut object = DslObject::new();
    object.insert("n".into(), DslValue::Null);
    object.insert("list".into(), DslValue::Array(vec![DslValue::Bool(false), "x".into()]));
    let dsl = ThemeDsl::from(object);
    assert_eq!(
        resolve(&dsl, &ctx(json!({}))),
        json!({ "n": null, "list": [false, "x"] })
    );
}

#[test]
fn number_normalization() {
    assert_eq!(number(16.0), json!(16));
    assert_eq!(number(0.5), json!(0.5));
    assert_eq!(number(f64::NAN), Value::Null);
}
