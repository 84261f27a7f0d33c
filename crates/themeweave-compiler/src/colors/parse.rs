//! Color string decomposition and recomposition.

use super::ColorError;
use regex::Regex;
use std::sync::LazyLock;
use themeweave_common::Color;

/// Regex for hex color: #RGB, #RGBA, #RRGGBB or #RRGGBBAA.
pub(crate) static HEX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#([0-9a-fA-F]{3,4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap()
});

/// Regex for rgb()/rgba(), comma or space separated, optional alpha.
pub(crate) static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^rgba?\(\s*(\d{1,3}(\.\d+)?%?\s*[,\s]\s*){2}\d{1,3}(\.\d+)?%?\s*([,/]\s*\d*\.?\d+%?\s*)?\)$",
    )
    .unwrap()
});

/// Regex for hsl()/hsla() with an optional angle unit and alpha.
pub(crate) static HSL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^hsla?\(\s*-?\d*\.?\d+(deg|rad|turn)?\s*[,\s]\s*\d*\.?\d+%\s*[,\s]\s*\d*\.?\d+%\s*([,/]\s*\d*\.?\d+%?\s*)?\)$",
    )
    .unwrap()
});

/// Regex for color(<space> c1 c2 c3 [/ alpha]).
pub(crate) static COLOR_FN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^color\(\s*[a-z0-9-]+(\s+-?\d*\.?\d+%?){3}\s*(/\s*\d*\.?\d+%?\s*)?\)$").unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorKind {
    Rgb,
    Rgba,
    Hsl,
    Hsla,
    Color,
}

impl ColorKind {
    fn name(&self) -> &'static str {
        match self {
            ColorKind::Rgb => "rgb",
            ColorKind::Rgba => "rgba",
            ColorKind::Hsl => "hsl",
            ColorKind::Hsla => "hsla",
            ColorKind::Color => "color",
        }
    }

    pub fn is_hsl(&self) -> bool {
        matches!(self, ColorKind::Hsl | ColorKind::Hsla)
    }

    /// The same family with an alpha channel.
    pub fn with_alpha(self) -> Self {
        match self {
            ColorKind::Rgb => ColorKind::Rgba,
            ColorKind::Hsl => ColorKind::Hsla,
            other => other,
        }
    }
}

/// A color split into its function, channel values and alpha.
#[derive(Debug, Clone, PartialEq)]
pub struct DecomposedColor {
    pub kind: ColorKind,
    pub values: [f64; 3],
    pub alpha: Option<f64>,
    /// Color space of a `color()` value, e.g. `display-p3`.
    pub color_space: Option<String>,
}

/// Split a color string into channels.
pub fn decompose_color(color: &str) -> Result<DecomposedColor, ColorError> {
    let color = color.trim();
    if color.starts_with('#') {
        return decompose_hex(color);
    }

    let unsupported = || ColorError::Unsupported(color.to_string());
    let open = color.find('(').ok_or_else(unsupported)?;
    let inner = color[open + 1..].strip_suffix(')').ok_or_else(unsupported)?;
    let kind = match &color[..open] {
        "rgb" => ColorKind::Rgb,
        "rgba" => ColorKind::Rgba,
        "hsl" => ColorKind::Hsl,
        "hsla" => ColorKind::Hsla,
        "color" => ColorKind::Color,
        _ => return Err(unsupported()),
    };

    let mut color_space = None;
    let parts: Vec<&str> = if kind == ColorKind::Color {
        let mut parts = inner.split_whitespace().filter(|p| *p != "/");
        color_space = Some(parts.next().ok_or_else(unsupported)?.to_string());
        parts.collect()
    } else {
        inner
            .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect()
    };
    if parts.len() != 3 && parts.len() != 4 {
        return Err(unsupported());
    }

    let mut values = [0.0; 3];
    for (slot, part) in values.iter_mut().zip(&parts) {
        *slot = parse_float(part).ok_or_else(unsupported)?;
    }
    let alpha = match parts.get(3) {
        Some(part) => Some(parse_float(part.trim_start_matches('/')).ok_or_else(unsupported)?),
        None => None,
    };

    Ok(DecomposedColor {
        kind,
        values,
        alpha,
        color_space,
    })
}

/// Expand a hex color into its `rgb()`/`rgba()` decomposition. Alpha is
/// rounded to three decimals.
fn decompose_hex(color: &str) -> Result<DecomposedColor, ColorError> {
    let parsed = Color::from_hex(color).ok_or_else(|| ColorError::Unsupported(color.to_string()))?;
    let has_alpha = matches!(color.len(), 5 | 9);
    Ok(DecomposedColor {
        kind: if has_alpha {
            ColorKind::Rgba
        } else {
            ColorKind::Rgb
        },
        values: [
            f64::from(parsed.r),
            f64::from(parsed.g),
            f64::from(parsed.b),
        ],
        alpha: has_alpha.then(|| (parsed.alpha_fraction() * 1000.0).round() / 1000.0),
        color_space: None,
    })
}

/// `parseFloat`-style: leading numeric prefix, units ignored.
fn parse_float(part: &str) -> Option<f64> {
    let end = part
        .char_indices()
        .find(|(i, c)| !(c.is_ascii_digit() || *c == '.' || ((*c == '-' || *c == '+') && *i == 0)))
        .map(|(i, _)| i)
        .unwrap_or(part.len());
    part[..end].parse().ok()
}

/// Turn a decomposition back into a CSS color string.
pub fn recompose_color(color: &DecomposedColor) -> String {
    let [a, b, c] = color.values;
    let channels = match color.kind {
        ColorKind::Rgb | ColorKind::Rgba => {
            vec![
                (a.trunc() as i64).to_string(),
                (b.trunc() as i64).to_string(),
                (c.trunc() as i64).to_string(),
            ]
        }
        ColorKind::Hsl | ColorKind::Hsla => {
            vec![format_float(a), format!("{}%", format_float(b)), format!("{}%", format_float(c))]
        }
        ColorKind::Color => vec![format_float(a), format_float(b), format_float(c)],
    };

    if color.kind == ColorKind::Color {
        let space = color.color_space.as_deref().unwrap_or("srgb");
        let mut body = format!("{space} {}", channels.join(" "));
        if let Some(alpha) = color.alpha {
            body.push_str(&format!(" /{}", format_float(alpha)));
        }
        return format!("color({body})");
    }

    let mut parts = channels;
    if let Some(alpha) = color.alpha {
        parts.push(format_float(alpha));
    }
    format!("{}({})", color.kind.name(), parts.join(", "))
}

/// Shortest round-trippable float text, integral values without `.0`.
pub(crate) fn format_float(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
