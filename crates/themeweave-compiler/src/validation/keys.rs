//! Key and name whitelists shared by the validation passes.

use regex::Regex;
use std::sync::LazyLock;

use crate::ast::{Expr, ExprKind, PropertyKey};

/// Recognized top-level theme sections.
pub const TOP_LEVEL_KEYS: &[&str] = &[
    "palette",
    "typography",
    "spacing",
    "shape",
    "breakpoints",
    "components",
    "shadows",
    "transitions",
    "mixins",
    "zIndex",
    "direction",
    "unstable_strictMode",
    "unstable_sxConfig",
    "cssVariables",
];

/// Keys that are rejected at any depth.
pub const DANGEROUS_KEYS: &[&str] = &["__proto__", "constructor", "prototype"];

/// Keys the DSL uses to mark placeholders; a user object carrying one
/// would turn into a placeholder when the DSL is reloaded.
pub const RESERVED_KEYS: &[&str] = &["__type"];

/// Pure color functions callable by bare name.
pub const SAFE_HELPERS: &[&str] = &["alpha", "lighten", "darken", "emphasize", "getContrastRatio"];

/// `theme.breakpoints.<method>` names that produce media-query keys.
pub const BREAKPOINT_METHODS: &[&str] = &["up", "down", "only", "between"];

/// Palette keys whose values are not colors.
const NON_COLOR_KEYS: &[&str] = &["mode", "contrastThreshold", "tonalOffset"];

static COLOR_KEY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(colou?r$|^bg(color)?$|^background$|^fill$|^stroke$)").unwrap()
});

pub fn is_dangerous(key: &str) -> bool {
    DANGEROUS_KEYS.contains(&key)
}

pub fn is_reserved(key: &str) -> bool {
    RESERVED_KEYS.contains(&key)
}

/// Key name including string literals written as computed keys.
pub(super) fn static_key(key: &PropertyKey) -> Option<String> {
    match key {
        PropertyKey::Computed(expr) => match &expr.kind {
            ExprKind::String(s) => Some(s.clone()),
            _ => None,
        },
        other => other.name(),
    }
}

pub fn is_safe_helper(name: &str) -> bool {
    SAFE_HELPERS.contains(&name)
}

/// Whether a string under `key` must be a color.
pub(super) fn is_color_key(key: &str, in_palette: bool) -> bool {
    if NON_COLOR_KEYS.contains(&key) {
        return false;
    }
    in_palette || COLOR_KEY_RE.is_match(key)
}

/// First dangerous segment in a static member path, if any.
pub(super) fn dangerous_segment(path: &[String]) -> Option<&str> {
    path.iter()
        .map(String::as_str)
        .find(|segment| is_dangerous(segment))
}

/// The direction of a `theme.breakpoints.<dir>(...)` call.
pub(super) fn breakpoint_direction(expr: &Expr) -> Option<String> {
    let ExprKind::Call { callee, .. } = &expr.kind else {
        return None;
    };
    match callee.member_path()?.as_slice() {
        [root, section, method]
            if root == "theme"
                && section == "breakpoints"
                && BREAKPOINT_METHODS.contains(&method.as_str()) =>
        {
            Some(method.clone())
        }
        _ => None,
    }
}
