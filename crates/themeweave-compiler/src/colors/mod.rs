//! Color parsing, validation and the pure color helpers that theme code
//! may call.
//!
//! Accepted color strings: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`,
//! `rgb()`/`rgba()`, `hsl()`/`hsla()` and `color()`.

mod manipulate;
mod parse;


pub use manipulate::{alpha, darken, emphasize, get_contrast_ratio, get_luminance, lighten};
pub use parse::{decompose_color, recompose_color, ColorKind, DecomposedColor};

use parse::{COLOR_FN_RE, HEX_RE, HSL_RE, RGB_RE};

/// Error raised by the color helpers.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ColorError {
    #[error("unsupported color '{0}'")]
    Unsupported(String),

    #[error("{0}")]
    InvalidArgument(String),
}

/// Validate that a string is one of the accepted color syntaxes.
pub fn validate_color(s: &str) -> bool {
    let s = s.trim();
    if s.is_empty() {
        return false;
    }
    if s.starts_with('#') {
        return HEX_RE.is_match(s);
    }
    if s.starts_with("rgb") {
        return RGB_RE.is_match(s);
    }
    if s.starts_with("hsl") {
        return HSL_RE.is_match(s);
    }
    if s.starts_with("color(") {
        return COLOR_FN_RE.is_match(s);
    }
    false
}
