//! Pure color manipulation: alpha, lighten, darken, emphasize and WCAG
//! contrast.

use super::parse::{decompose_color, recompose_color, ColorKind, DecomposedColor};
use super::ColorError;

fn clamp_unit(value: f64, name: &str) -> f64 {
    if !(0.0..=1.0).contains(&value) {
        tracing::debug!("{name} value {value} clamped to [0, 1]");
    }
    value.clamp(0.0, 1.0)
}

/// Set the alpha channel, converting `rgb`/`hsl` to their alpha forms.
pub fn alpha(color: &str, value: f64) -> Result<String, ColorError> {
    let mut decomposed = decompose_color(color)?;
    decomposed.kind = decomposed.kind.with_alpha();
    decomposed.alpha = Some(clamp_unit(value, "alpha"));
    Ok(recompose_color(&decomposed))
}

/// Darken a color by `coefficient` in `[0, 1]`.
pub fn darken(color: &str, coefficient: f64) -> Result<String, ColorError> {
    let mut decomposed = decompose_color(color)?;
    let coefficient = clamp_unit(coefficient, "darken");
    if decomposed.kind.is_hsl() {
        decomposed.values[2] *= 1.0 - coefficient;
    } else {
        for channel in decomposed.values.iter_mut() {
            *channel *= 1.0 - coefficient;
        }
    }
    Ok(recompose_color(&decomposed))
}

/// Lighten a color by `coefficient` in `[0, 1]`.
pub fn lighten(color: &str, coefficient: f64) -> Result<String, ColorError> {
    let mut decomposed = decompose_color(color)?;
    let coefficient = clamp_unit(coefficient, "lighten");
    match decomposed.kind {
        ColorKind::Hsl | ColorKind::Hsla => {
            decomposed.values[2] += (100.0 - decomposed.values[2]) * coefficient;
        }
        ColorKind::Rgb | ColorKind::Rgba => {
            for channel in decomposed.values.iter_mut() {
                *channel += (255.0 - *channel) * coefficient;
            }
        }
        ColorKind::Color => {
            for channel in decomposed.values.iter_mut() {
                *channel += (1.0 - *channel) * coefficient;
            }
        }
    }
    Ok(recompose_color(&decomposed))
}

/// Darken light colors and lighten dark ones.
pub fn emphasize(color: &str, coefficient: f64) -> Result<String, ColorError> {
    if get_luminance(color)? > 0.5 {
        darken(color, coefficient)
    } else {
        lighten(color, coefficient)
    }
}

/// Relative luminance, rounded to three decimals.
pub fn get_luminance(color: &str) -> Result<f64, ColorError> {
    let decomposed = decompose_color(color)?;
    let (values, normalized) = if decomposed.kind.is_hsl() {
        (hsl_to_rgb(&decomposed).values, false)
    } else {
        (decomposed.values, decomposed.kind == ColorKind::Color)
    };

    let linear = values.map(|channel| {
        let value = if normalized { channel } else { channel / 255.0 };
        if value <= 0.03928 {
            value / 12.92
        } else {
            ((value + 0.055) / 1.055).powf(2.4)
        }
    });
    let luminance = 0.2126 * linear[0] + 0.7152 * linear[1] + 0.0722 * linear[2];
    Ok((luminance * 1000.0).round() / 1000.0)
}

/// WCAG contrast ratio between two colors, in `[1, 21]`.
pub fn get_contrast_ratio(foreground: &str, background: &str) -> Result<f64, ColorError> {
    let lum_a = get_luminance(foreground)?;
    let lum_b = get_luminance(background)?;
    Ok((lum_a.max(lum_b) + 0.05) / (lum_a.min(lum_b) + 0.05))
}

fn hsl_to_rgb(color: &DecomposedColor) -> DecomposedColor {
    let [h, s, l] = color.values;
    let s = s / 100.0;
    let l = l / 100.0;
    let a = s * l.min(1.0 - l);
    let f = |n: f64| {
        let k = (n + h / 30.0).rem_euclid(12.0);
        l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0)
    };
    DecomposedColor {
        kind: if color.alpha.is_some() {
            ColorKind::Rgba
        } else {
            ColorKind::Rgb
        },
        values: [
            (f(0.0) * 255.0).round(),
            (f(8.0) * 255.0).round(),
            (f(4.0) * 255.0).round(),
        ],
        alpha: color.alpha,
        color_space: None,
    }
}
