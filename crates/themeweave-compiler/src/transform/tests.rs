use super::*;
use serde_json::{json, Value};

fn dsl_json(source: &str) -> (Value, Vec<String>) {
    let output = transform_code_to_dsl(source);
    assert_eq!(output.error, None, "unexpected error for {source}");
    (serde_json::to_value(&output.dsl).unwrap(), output.warnings)
}

#[test]
fn empty_source_is_empty_dsl() {
    let output = transform_code_to_dsl("  ");
    assert!(output.dsl.is_empty());
    assert_eq!(output.error, None);
    assert!(output.warnings.is_empty());
}

#[test]
fn literals_lower_structurally() {
    let (dsl, warnings) = dsl_json(
        "{ palette: { mode: 'dark', primary: { main: '#1976d2' } }, shape: { borderRadius: 4 }, shadows: ['none', null], unstable_strictMode: true }",
    );
    assert!(warnings.is_empty());
    assert_eq!(
        dsl,
        json!({
            "palette": { "mode": "dark", "primary": { "main": "#1976d2" } },
            "shape": { "borderRadius": 4 },
            "shadows": ["none", null],
            "unstable_strictMode": true
        })
    );
}

#[test]
fn wrapped_declaration_is_unwrapped() {
    let (dsl, _) = dsl_json("const theme: ThemeOptions = { spacing: 4 };");
    assert_eq!(dsl, json!({ "spacing": 4 }));
}

#[test]
fn spacing_call_becomes_placeholder() {
    let (dsl, warnings) = dsl_json("{ x: { margin: theme.spacing(2), padding: theme.spacing(1, -2) } }");
    assert!(warnings.is_empty());
    assert_eq!(dsl["x"]["margin"], json!({ "__type": "spacing", "args": [2] }));
    assert_eq!(dsl["x"]["padding"], json!({ "__type": "spacing", "args": [1, -2] }));
}

#[test]
fn malformed_spacing_degrades_to_default() {
    let (dsl, warnings) = dsl_json("{ x: theme.spacing('big') }");
    assert_eq!(dsl["x"], json!({ "__type": "spacing", "args": [1] }));
    assert_eq!(warnings.len(), 1);
}

#[test]
fn breakpoint_calls() {
    let (dsl, warnings) = dsl_json(
        "{ a: theme.breakpoints.up('md'), b: theme.breakpoints.between('sm', 'lg') }",
    );
    assert!(warnings.is_empty());
    assert_eq!(
        dsl["a"],
        json!({ "__type": "breakpoint", "breakpoint": "md", "direction": "up" })
    );
    assert_eq!(
        dsl["b"],
        json!({ "__type": "breakpoint", "breakpoint": "sm", "direction": "between", "endBreakpoint": "lg" })
    );
}

#[test]
fn bad_breakpoint_calls_degrade_to_empty_string() {
    let (dsl, warnings) = dsl_json(
        "{ a: theme.breakpoints.sideways('md'), b: theme.breakpoints.up(), c: theme.breakpoints.between('sm') }",
    );
    assert_eq!(dsl, json!({ "a": "", "b": "", "c": "" }));
    assert_eq!(warnings.len(), 3);
}

#[test]
fn breakpoint_computed_keys_become_media_keys() {
    let (dsl, warnings) = dsl_json(
        "{ root: { [theme.breakpoints.down('sm')]: { padding: 0 }, [theme.breakpoints.between('sm', 'md')]: { padding: 1 } } }",
    );
    assert!(warnings.is_empty());
    assert_eq!(
        dsl["root"],
        json!({
            "@media-down-sm": { "padding": 0 },
            "@media-between-sm-md": { "padding": 1 }
        })
    );
}

#[test]
fn other_computed_keys_are_dropped() {
    let (dsl, warnings) = dsl_json("{ root: { [name]: 1, kept: 2 } }");
    assert_eq!(dsl, json!({ "root": { "kept": 2 } }));
    assert_eq!(warnings.len(), 2);
}

#[test]
fn helper_calls_lower_arguments() {
    let (dsl, warnings) = dsl_json("{ c: alpha(theme.palette.primary.main, 0.5) }");
    assert!(warnings.is_empty());
    assert_eq!(
        dsl["c"],
        json!({
            "__type": "helper",
            "name": "alpha",
            "args": [{ "__type": "token", "path": "palette.primary.main" }, 0.5]
        })
    );
}

#[test]
fn unknown_calls_degrade() {
    let (dsl, warnings) = dsl_json("{ a: fetch('x'), b: theme.palette.augmentColor({}) }");
    assert_eq!(dsl, json!({ "a": "", "b": "" }));
    assert_eq!(warnings.len(), 2);
}

#[test]
fn theme_members_become_tokens() {
    let (dsl, _) = dsl_json("{ a: theme.palette['primary'].main, b: window.location }");
    assert_eq!(dsl["a"], json!({ "__type": "token", "path": "palette.primary.main" }));
    assert_eq!(dsl["b"], "");
}

#[test]
fn dotted_member_keys_are_escaped_in_token_paths() {
    let (dsl, _) = dsl_json("{ a: theme.mixins['toolbar.min'] }");
    assert_eq!(dsl["a"], json!({ "__type": "token", "path": "mixins.toolbar\\.min" }));
}

#[test]
fn theme_style_function_becomes_function_placeholder() {
    let (dsl, warnings) = dsl_json(
        "{ components: { MuiButton: { styleOverrides: { root: ({ theme }) => ({ padding: theme.spacing(1) }) } } } }",
    );
    assert!(warnings.is_empty());
    assert_eq!(
        dsl["components"]["MuiButton"]["styleOverrides"]["root"],
        json!({
            "__type": "function",
            "params": ["theme"],
            "body": { "padding": { "__type": "spacing", "args": [1] } }
        })
    );
}

#[test]
fn block_bodied_function_becomes_empty_object() {
    let (dsl, warnings) = dsl_json("{ root: ({ theme }) => { return {}; } }");
    assert_eq!(dsl["root"], json!({}));
    assert_eq!(warnings.len(), 1);
}

#[test]
fn other_arrow_shapes_keep_bound_names() {
    let (dsl, warnings) = dsl_json("{ root: ({ theme, ownerState }) => ({ a: 1 }) }");
    assert_eq!(dsl["root"]["params"], json!(["theme", "ownerState"]));
    assert_eq!(warnings.len(), 1);
}

#[test]
fn unary_and_unsupported_nodes() {
    let (dsl, warnings) = dsl_json("{ a: -1, b: +2, c: !0, d: 1 + 2, e: undefined }");
    assert_eq!(dsl, json!({ "a": -1, "b": 2, "c": 0, "d": "", "e": null }));
    assert_eq!(warnings.len(), 2);
}

#[test]
fn templates_lower_to_text() {
    let (dsl, warnings) = dsl_json("{ a: `plain`, b: `1px solid ${theme.palette.divider}` }");
    assert_eq!(dsl, json!({ "a": "plain", "b": "1px solid " }));
    assert_eq!(warnings.len(), 1);
}

#[test]
fn spreads_and_dangerous_keys_are_dropped() {
    let (dsl, warnings) = dsl_json("{ ...base, a: { __proto__: { x: 1 }, b: [1, ...rest] } }");
    assert_eq!(dsl, json!({ "a": { "b": [1] } }));
    assert_eq!(warnings.len(), 3);
}

#[test]
fn placeholder_marker_keys_are_dropped() {
    let (dsl, warnings) =
        dsl_json("{ typography: { fontFamily: { __type: 'token', path: 'palette.primary.main' } } }");
    assert_eq!(
        dsl,
        json!({ "typography": { "fontFamily": { "path": "palette.primary.main" } } })
    );
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("__type"));
}

#[test]
fn non_finite_numbers_degrade_to_zero() {
    let (dsl, warnings) = dsl_json("{ zIndex: { appBar: 1e999, drawer: -1e999 } }");
    assert_eq!(dsl, json!({ "zIndex": { "appBar": 0, "drawer": 0 } }));
    assert_eq!(warnings.len(), 2);

    let (dsl, warnings) = dsl_json("{ spacing: theme.spacing(1e999) }");
    assert_eq!(dsl, json!({ "spacing": { "__type": "spacing", "args": [1] } }));
    assert_eq!(warnings.len(), 1);
}

#[test]
fn warnings_do_not_stop_the_document() {
    let (dsl, warnings) = dsl_json("{ a: foo(), b: 2 }");
    assert_eq!(dsl["b"], 2);
    assert_eq!(warnings.len(), 1);
}

#[test]
fn syntax_error_is_reported_not_thrown() {
    let output = transform_code_to_dsl("{\n  a: ,\n}");
    assert!(output.dsl.is_empty());
    let error = output.error.unwrap();
    assert!(error.contains("line 2"), "{error}");
}

#[test]
fn deep_nesting_is_an_error_not_a_crash() {
    let depth = 100_000;
    let source = format!("{{ spacing: {}1{} }}", "[".repeat(depth), "]".repeat(depth));
    let output = transform_code_to_dsl(&source);
    assert!(output.dsl.is_empty());
    assert!(output.error.unwrap().contains("nesting too deep"));
}

#[test]
fn non_object_source_is_an_error() {
    let output = transform_code_to_dsl("42");
    assert!(output.error.unwrap().contains("object literal"));
    let output = transform_code_to_dsl("{ a: 1 }; { b: 2 }");
    assert!(output.error.is_some());
}

#[test]
fn lowered_composes_warnings() {
    let mut warnings = vec!["first".to_string()];
    let value = Lowered::warn(1, "second").map(|n| n + 1).unpack(&mut warnings);
    assert_eq!(value, 2);
    assert_eq!(warnings, vec!["first", "second"]);
}
