//! Built-in templates, expressed as resolved theme trees.

use serde_json::{json, Value};
use themeweave_common::ColorScheme;

use crate::resolve::DEFAULT_BREAKPOINTS;

/// Names accepted by [`builtin_template`].
pub const BUILT_IN_TEMPLATES: &[&str] = &["default"];

/// A built-in template for `scheme`, or `None` for an unknown name.
pub fn builtin_template(name: &str, scheme: ColorScheme) -> Option<Value> {
    match name {
        "default" => Some(default_template(scheme)),
        _ => None,
    }
}

fn default_template(scheme: ColorScheme) -> Value {
    let breakpoint_values: serde_json::Map<String, Value> = DEFAULT_BREAKPOINTS
        .iter()
        .map(|(name, width)| (name.to_string(), json!(*width as i64)))
        .collect();

    json!({
        "palette": palette(scheme),
        "typography": typography(),
        "spacing": 8,
        "shape": { "borderRadius": 4 },
        "breakpoints": {
            "keys": DEFAULT_BREAKPOINTS.iter().map(|(name, _)| *name).collect::<Vec<_>>(),
            "values": breakpoint_values,
            "unit": "px",
            "step": 5
        },
        "direction": "ltr",
        "shadows": shadows(),
        "transitions": {
            "easing": {
                "easeInOut": "cubic-bezier(0.4, 0, 0.2, 1)",
                "easeOut": "cubic-bezier(0.0, 0, 0.2, 1)",
                "easeIn": "cubic-bezier(0.4, 0, 1, 1)",
                "sharp": "cubic-bezier(0.4, 0, 0.6, 1)"
            },
            "duration": {
                "shortest": 150,
                "shorter": 200,
                "short": 250,
                "standard": 300,
                "complex": 375,
                "enteringScreen": 225,
                "leavingScreen": 195
            }
        },
        "zIndex": {
            "mobileStepper": 1000,
            "fab": 1050,
            "speedDial": 1050,
            "appBar": 1100,
            "drawer": 1200,
            "modal": 1300,
            "snackbar": 1400,
            "tooltip": 1500
        },
        "mixins": { "toolbar": { "minHeight": 56 } },
        "components": {}
    })
}

fn palette(scheme: ColorScheme) -> Value {
    let mut palette = json!({
        "mode": scheme.as_str(),
        "common": { "black": "#000", "white": "#fff" },
        "contrastThreshold": 3,
        "tonalOffset": 0.2,
        "grey": {
            "50": "#fafafa", "100": "#f5f5f5", "200": "#eeeeee", "300": "#e0e0e0",
            "400": "#bdbdbd", "500": "#9e9e9e", "600": "#757575", "700": "#616161",
            "800": "#424242", "900": "#212121"
        }
    });

    let scheme_colors = match scheme {
        ColorScheme::Light => json!({
            "primary": { "main": "#1976d2", "light": "#42a5f5", "dark": "#1565c0", "contrastText": "#fff" },
            "secondary": { "main": "#9c27b0", "light": "#ba68c8", "dark": "#7b1fa2", "contrastText": "#fff" },
            "error": { "main": "#d32f2f", "light": "#ef5350", "dark": "#c62828", "contrastText": "#fff" },
            "warning": { "main": "#ed6c02", "light": "#ff9800", "dark": "#e65100", "contrastText": "#fff" },
            "info": { "main": "#0288d1", "light": "#03a9f4", "dark": "#01579b", "contrastText": "#fff" },
            "success": { "main": "#2e7d32", "light": "#4caf50", "dark": "#1b5e20", "contrastText": "#fff" },
            "text": {
                "primary": "rgba(0, 0, 0, 0.87)",
                "secondary": "rgba(0, 0, 0, 0.6)",
                "disabled": "rgba(0, 0, 0, 0.38)"
            },
            "divider": "rgba(0, 0, 0, 0.12)",
            "background": { "paper": "#fff", "default": "#fff" },
            "action": {
                "active": "rgba(0, 0, 0, 0.54)",
                "hover": "rgba(0, 0, 0, 0.04)",
                "selected": "rgba(0, 0, 0, 0.08)",
                "disabled": "rgba(0, 0, 0, 0.26)",
                "disabledBackground": "rgba(0, 0, 0, 0.12)",
                "focus": "rgba(0, 0, 0, 0.12)"
            }
        }),
        ColorScheme::Dark => json!({
            "primary": { "main": "#90caf9", "light": "#e3f2fd", "dark": "#42a5f5", "contrastText": "rgba(0, 0, 0, 0.87)" },
            "secondary": { "main": "#ce93d8", "light": "#f3e5f5", "dark": "#ab47bc", "contrastText": "rgba(0, 0, 0, 0.87)" },
            "error": { "main": "#f44336", "light": "#e57373", "dark": "#d32f2f", "contrastText": "#fff" },
            "warning": { "main": "#ffa726", "light": "#ffb74d", "dark": "#f57c00", "contrastText": "rgba(0, 0, 0, 0.87)" },
            "info": { "main": "#29b6f6", "light": "#4fc3f7", "dark": "#0288d1", "contrastText": "rgba(0, 0, 0, 0.87)" },
            "success": { "main": "#66bb6a", "light": "#81c784", "dark": "#388e3c", "contrastText": "rgba(0, 0, 0, 0.87)" },
            "text": {
                "primary": "#fff",
                "secondary": "rgba(255, 255, 255, 0.7)",
                "disabled": "rgba(255, 255, 255, 0.5)"
            },
            "divider": "rgba(255, 255, 255, 0.12)",
            "background": { "paper": "#121212", "default": "#121212" },
            "action": {
                "active": "#fff",
                "hover": "rgba(255, 255, 255, 0.08)",
                "selected": "rgba(255, 255, 255, 0.16)",
                "disabled": "rgba(255, 255, 255, 0.3)",
                "disabledBackground": "rgba(255, 255, 255, 0.12)",
                "focus": "rgba(255, 255, 255, 0.12)"
            }
        }),
    };

    if let (Value::Object(palette), Value::Object(colors)) = (&mut palette, scheme_colors) {
        palette.extend(colors);
    }
    palette
}

fn typography() -> Value {
    let family = r#""Roboto", "Helvetica", "Arial", sans-serif"#;
    let variant = |weight: u32, size: &str, line_height: f64, spacing: &str| {
        json!({
            "fontFamily": family,
            "fontWeight": weight,
            "fontSize": size,
            "lineHeight": line_height,
            "letterSpacing": spacing
        })
    };
    json!({
        "fontFamily": family,
        "fontSize": 14,
        "htmlFontSize": 16,
        "fontWeightLight": 300,
        "fontWeightRegular": 400,
        "fontWeightMedium": 500,
        "fontWeightBold": 700,
        "h1": variant(300, "6rem", 1.167, "-0.01562em"),
        "h2": variant(300, "3.75rem", 1.2, "-0.00833em"),
        "h3": variant(400, "3rem", 1.167, "0em"),
        "h4": variant(400, "2.125rem", 1.235, "0.00735em"),
        "h5": variant(400, "1.5rem", 1.334, "0em"),
        "h6": variant(500, "1.25rem", 1.6, "0.0075em"),
        "subtitle1": variant(400, "1rem", 1.75, "0.00938em"),
        "subtitle2": variant(500, "0.875rem", 1.57, "0.00714em"),
        "body1": variant(400, "1rem", 1.5, "0.00938em"),
        "body2": variant(400, "0.875rem", 1.43, "0.01071em"),
        "button": variant(500, "0.875rem", 1.75, "0.02857em"),
        "caption": variant(400, "0.75rem", 1.66, "0.03333em"),
        "overline": variant(400, "0.75rem", 2.66, "0.08333em")
    })
}

/// Elevation shadows 0..=24.
fn shadows() -> Vec<String> {
    const UMBRA: f64 = 0.2;
    const PENUMBRA: f64 = 0.14;
    const AMBIENT: f64 = 0.12;
    // Ambient, penumbra and umbra layers as (y, blur, spread) triples.
    const LAYERS: [[i32; 9]; 24] = [
        [1, 3, 0, 1, 1, 0, 2, 1, -1],
        [1, 5, 0, 2, 2, 0, 3, 1, -2],
        [1, 8, 0, 3, 4, 0, 3, 3, -2],
        [1, 10, 0, 4, 5, 0, 2, 4, -1],
        [1, 14, 0, 5, 8, 0, 3, 5, -1],
        [1, 18, 0, 6, 10, 0, 3, 5, -1],
        [2, 16, 1, 7, 10, 1, 4, 5, -2],
        [3, 14, 2, 8, 10, 1, 5, 5, -3],
        [3, 16, 2, 9, 12, 1, 5, 6, -3],
        [4, 18, 3, 10, 14, 1, 6, 6, -3],
        [4, 20, 3, 11, 15, 1, 6, 7, -4],
        [5, 22, 4, 12, 17, 2, 7, 8, -4],
        [5, 24, 4, 13, 19, 2, 7, 8, -4],
        [5, 26, 4, 14, 21, 2, 7, 9, -4],
        [6, 28, 5, 15, 22, 2, 8, 9, -5],
        [6, 30, 5, 16, 24, 2, 8, 10, -5],
        [6, 32, 5, 17, 26, 2, 8, 11, -5],
        [7, 34, 6, 18, 28, 2, 9, 11, -5],
        [7, 36, 6, 19, 29, 2, 9, 12, -6],
        [8, 38, 7, 20, 31, 3, 10, 13, -6],
        [8, 40, 7, 21, 33, 3, 10, 13, -6],
        [8, 42, 7, 22, 35, 3, 10, 14, -6],
        [9, 44, 8, 23, 36, 3, 11, 14, -7],
        [9, 46, 8, 24, 38, 3, 11, 15, -7],
    ];

    std::iter::once("none".to_string())
        .chain(LAYERS.iter().map(|l| {
            format!(
                "0px {}px {}px {}px rgba(0,0,0,{UMBRA}),0px {}px {}px {}px rgba(0,0,0,{PENUMBRA}),0px {}px {}px {}px rgba(0,0,0,{AMBIENT})",
                l[6], l[7], l[8], l[3], l[4], l[5], l[0], l[1], l[2]
            )
        }))
        .collect()
}
