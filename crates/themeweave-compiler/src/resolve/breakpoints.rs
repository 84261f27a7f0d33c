//! Media queries for `theme.breakpoints.*` placeholders.

use serde_json::Value;

use crate::ast::format_number;
use crate::dsl::BreakpointDirection;

/// Breakpoint widths used when the template has none.
pub const DEFAULT_BREAKPOINTS: &[(&str, f64)] = &[
    ("xs", 0.0),
    ("sm", 600.0),
    ("md", 900.0),
    ("lg", 1200.0),
    ("xl", 1536.0),
];

/// Breakpoint names and widths, ascending by width.
#[derive(Debug, Clone, PartialEq)]
pub struct BreakpointTable {
    entries: Vec<(String, f64)>,
}

impl Default for BreakpointTable {
    fn default() -> Self {
        Self {
            entries: DEFAULT_BREAKPOINTS
                .iter()
                .map(|(name, width)| (name.to_string(), *width))
                .collect(),
        }
    }
}

impl BreakpointTable {
    /// Read `breakpoints.values` from a template, falling back to the
    /// defaults when absent or empty.
    pub fn from_template(template: &Value) -> Self {
        let Some(values) = template
            .pointer("/breakpoints/values")
            .and_then(Value::as_object)
        else {
            return Self::default();
        };
        let mut entries: Vec<(String, f64)> = values
            .iter()
            .filter_map(|(name, width)| Some((name.clone(), width.as_f64()?)))
            .collect();
        if entries.is_empty() {
            return Self::default();
        }
        entries.sort_by(|a, b| a.1.total_cmp(&b.1));
        Self { entries }
    }

    pub fn width(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, width)| *width)
    }

    /// The next larger breakpoint name.
    pub fn next(&self, name: &str) -> Option<&str> {
        let index = self.entries.iter().position(|(key, _)| key == name)?;
        self.entries.get(index + 1).map(|(key, _)| key.as_str())
    }
}

/// Media query string, or `None` if a breakpoint name is unknown.
pub fn media_query(
    table: &BreakpointTable,
    breakpoint: &str,
    direction: BreakpointDirection,
    end: Option<&str>,
) -> Option<String> {
    let start = table.width(breakpoint)?;
    match direction {
        BreakpointDirection::Up => Some(min_width(start)),
        BreakpointDirection::Down => Some(max_width(start)),
        BreakpointDirection::Between => {
            let end = table.width(end?)?;
            Some(between(start, end))
        }
        BreakpointDirection::Only => match table.next(breakpoint).and_then(|n| table.width(n)) {
            Some(end) => Some(between(start, end)),
            None => Some(min_width(start)),
        },
    }
}

fn min_width(width: f64) -> String {
    format!("@media (min-width:{}px)", format_number(width))
}

fn max_width(width: f64) -> String {
    format!("@media (max-width:{}px)", format_number(width - 0.05))
}

fn between(start: f64, end: f64) -> String {
    format!(
        "@media (min-width:{}px) and (max-width:{}px)",
        format_number(start),
        format_number(end - 0.05)
    )
}
