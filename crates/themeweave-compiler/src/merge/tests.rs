use super::*;
use crate::dsl::ThemeDsl;
use crate::resolve::ResolutionContext;
use serde_json::{json, Value};
use themeweave_common::ColorScheme;

fn flat(value: Value) -> FlatMap {
    match value {
        Value::Object(map) => map,
        _ => panic!("expected object"),
    }
}

#[test]
fn flatten_produces_dot_paths() {
    let nested = json!({
        "palette": { "primary": { "main": "#111", "light": "#222" }, "mode": "light" },
        "shadows": ["none", "0 1px"],
        "empty": {}
    });
    assert_eq!(
        Value::Object(flatten(&nested)),
        json!({
            "palette.primary.main": "#111",
            "palette.primary.light": "#222",
            "palette.mode": "light",
            "shadows": ["none", "0 1px"],
            "empty": {}
        })
    );
}

#[test]
fn expand_inverts_flatten() {
    let nested = json!({
        "palette": { "primary": { "main": "#111" }, "contrastThreshold": 3 },
        "typography": { "h1": { "fontSize": "2rem", "fontWeight": 700 } },
        "shadows": ["none", "0 1px"],
        "zIndex": {},
        "direction": "ltr",
        "flag": null
    });
    assert_eq!(expand(&flatten(&nested)), nested);
}

#[test]
fn dotted_keys_survive_flatten_and_expand() {
    let nested = json!({
        "components": {
            "MuiButton": {
                "styleOverrides": {
                    "root": { "&.Mui-disabled": { "opacity": 0.5 }, "a\\b": 1 }
                }
            }
        }
    });
    let flat = flatten(&nested);
    assert!(flat.contains_key("components.MuiButton.styleOverrides.root.&\\.Mui-disabled.opacity"));
    assert_eq!(expand(&flat), nested);
    assert_eq!(
        get_path(&nested, "components.MuiButton.styleOverrides.root.&\\.Mui-disabled.opacity"),
        Some(&json!(0.5))
    );
}

#[test]
fn split_path_unescapes() {
    assert_eq!(split_path("palette.primary.main"), vec!["palette", "primary", "main"]);
    assert_eq!(split_path("root.&\\.Mui-disabled"), vec!["root", "&.Mui-disabled"]);
    assert_eq!(split_path("a\\\\.b"), vec!["a\\", "b"]);
    assert_eq!(split_path(""), vec![""]);
}

#[test]
fn flatten_of_non_object_is_empty() {
    assert!(flatten(&json!([1, 2])).is_empty());
    assert!(flatten(&json!("x")).is_empty());
}

#[test]
fn get_path_walks_objects_and_arrays() {
    let value = json!({ "a": { "b": [10, { "c": true }] } });
    assert_eq!(get_path(&value, "a.b.0"), Some(&json!(10)));
    assert_eq!(get_path(&value, "a.b.1.c"), Some(&json!(true)));
    assert_eq!(get_path(&value, "a.x"), None);
    assert_eq!(get_path(&value, "a.b.9"), None);
    assert_eq!(get_path(&value, ""), Some(&value));
}

#[test]
fn set_path_creates_and_replaces() {
    let mut value = json!({ "a": 1 });
    set_path(&mut value, "b.c.d", json!("x"));
    set_path(&mut value, "a.e", json!(2));
    assert_eq!(value, json!({ "a": { "e": 2 }, "b": { "c": { "d": "x" } } }));
}

#[test]
fn deep_merge_recurses_into_objects_only() {
    let mut base = json!({ "a": { "x": 1, "y": 2 }, "list": [1, 2, 3], "s": "old" });
    deep_merge(
        &mut base,
        json!({ "a": { "y": 3, "z": 4 }, "list": [9], "s": { "now": "object" } }),
    );
    assert_eq!(
        base,
        json!({ "a": { "x": 1, "y": 3, "z": 4 }, "list": [9], "s": { "now": "object" } })
    );
}

#[test]
fn code_overrides_win() {
    let template = json!({ "palette": { "primary": { "main": "#000" } } });
    let scheme = flat(json!({ "palette.primary.main": "#111" }));
    let code = json!({ "palette": { "primary": { "main": "#222" } } });
    let merged = merge(&template, &FlatMap::new(), &scheme, &code);
    assert_eq!(merged["palette"]["primary"]["main"], "#222");
}

#[test]
fn layer_precedence() {
    let template = json!({
        "palette": { "primary": { "main": "#000", "light": "#aaa" } },
        "shape": { "borderRadius": 4 }
    });
    let global = flat(json!({ "palette.primary.main": "#100", "shape.borderRadius": 8 }));
    let scheme = flat(json!({ "palette.primary.main": "#200" }));
    let merged = merge(&template, &global, &scheme, &json!({}));
    assert_eq!(
        merged,
        json!({
            "palette": { "primary": { "main": "#200", "light": "#aaa" } },
            "shape": { "borderRadius": 8 }
        })
    );
}

#[test]
fn scheme_edits_are_limited_to_scoped_sections() {
    let scheme = flat(json!({
        "palette.background.default": "#121212",
        "shadows.1": "none",
        "typography.fontSize": 20
    }));
    let merged = merge(&json!({}), &FlatMap::new(), &scheme, &json!({}));
    assert_eq!(merged["palette"]["background"]["default"], "#121212");
    assert_eq!(merged["shadows"]["1"], "none");
    assert!(merged.get("typography").is_none());
}

#[test]
fn compose_theme_uses_active_scheme_and_code() {
    let layers = EditLayers {
        global: flat(json!({ "shape.borderRadius": 2 })),
        light: flat(json!({ "palette.primary.main": "#111" })),
        dark: flat(json!({ "palette.primary.main": "#eee" })),
    };
    let code = ThemeDsl::from_json(
        r#"{ "components": { "MuiButton": { "styleOverrides": { "root": { "padding": { "__type": "spacing", "args": [1] } } } } } }"#,
    )
    .unwrap();
    let template = json!({ "palette": { "primary": { "main": "#000" } } });

    let dark = ResolutionContext::new(template.clone(), ColorScheme::Dark, 4.0);
    let theme = compose_theme(&layers, Some(&code), &dark);
    assert_eq!(theme["palette"]["primary"]["main"], "#eee");
    assert_eq!(theme["shape"]["borderRadius"], 2);
    assert_eq!(
        theme["components"]["MuiButton"]["styleOverrides"]["root"]["padding"],
        4
    );

    let light = ResolutionContext::new(template, ColorScheme::Light, 4.0);
    let theme = compose_theme(&layers, None, &light);
    assert_eq!(theme["palette"]["primary"]["main"], "#111");
    assert!(theme.get("components").is_none());
}

#[test]
fn edit_layers_deserialize_with_defaults() {
    let layers: EditLayers =
        serde_json::from_str(r##"{ "light": { "palette.primary.main": "#123" } }"##).unwrap();
    assert!(layers.global.is_empty());
    assert_eq!(layers.for_scheme(ColorScheme::Light).len(), 1);
    assert!(layers.for_scheme(ColorScheme::Dark).is_empty());
    assert!(!layers.is_empty());
}
