use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

pub type DslObject = BTreeMap<String, DslValue>;

/// A node of the theme DSL.
///
/// Placeholders are tried before plain objects when deserializing, so an
/// object carrying a known `__type` tag always comes back as a placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DslValue {
    Null,
    Bool(bool),
    Number(#[serde(serialize_with = "serialize_number")] f64),
    String(String),
    Array(Vec<DslValue>),
    Placeholder(Placeholder),
    Object(DslObject),
}

impl DslValue {
    pub fn empty_string() -> Self {
        DslValue::String(String::new())
    }

    pub fn empty_object() -> Self {
        DslValue::Object(DslObject::new())
    }

    pub fn as_placeholder(&self) -> Option<&Placeholder> {
        match self {
            DslValue::Placeholder(placeholder) => Some(placeholder),
            _ => None,
        }
    }
}

impl From<&str> for DslValue {
    fn from(s: &str) -> Self {
        DslValue::String(s.to_string())
    }
}

impl From<f64> for DslValue {
    fn from(n: f64) -> Self {
        DslValue::Number(n)
    }
}

impl From<Placeholder> for DslValue {
    fn from(placeholder: Placeholder) -> Self {
        DslValue::Placeholder(placeholder)
    }
}

/// Integral values are written as JSON integers.
fn serialize_number<S: Serializer>(n: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 {
        serializer.serialize_i64(*n as i64)
    } else {
        serializer.serialize_f64(*n)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreakpointDirection {
    Up,
    Down,
    Only,
    Between,
}

impl BreakpointDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            BreakpointDirection::Up => "up",
            BreakpointDirection::Down => "down",
            BreakpointDirection::Only => "only",
            BreakpointDirection::Between => "between",
        }
    }

    pub fn parse(method: &str) -> Option<Self> {
        match method {
            "up" => Some(BreakpointDirection::Up),
            "down" => Some(BreakpointDirection::Down),
            "only" => Some(BreakpointDirection::Only),
            "between" => Some(BreakpointDirection::Between),
            _ => None,
        }
    }
}

impl fmt::Display for BreakpointDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A constrained expression kept symbolic until resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "__type", rename_all = "camelCase")]
pub enum Placeholder {
    /// `theme.spacing(...)`.
    Spacing {
        #[serde(serialize_with = "serialize_numbers")]
        args: Vec<f64>,
    },
    /// `theme.breakpoints.<direction>(...)`.
    #[serde(rename_all = "camelCase")]
    Breakpoint {
        breakpoint: String,
        direction: BreakpointDirection,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        end_breakpoint: Option<String>,
    },
    /// Call of a whitelisted color helper.
    Helper { name: String, args: Vec<DslValue> },
    /// `theme.<path>` with the `theme.` prefix stripped.
    Token { path: String },
    /// `({ theme }) => ({ ... })`.
    Function { params: Vec<String>, body: Box<DslValue> },
}

fn serialize_numbers<S: Serializer>(args: &[f64], serializer: S) -> Result<S::Ok, S::Error> {
    use serde::ser::SerializeSeq;
    let mut seq = serializer.serialize_seq(Some(args.len()))?;
    for arg in args {
        seq.serialize_element(&DslValue::Number(*arg))?;
    }
    seq.end()
}

impl Placeholder {
    /// The synthetic object key a breakpoint placeholder becomes when used
    /// as a computed key. `None` for other placeholders.
    pub fn media_key(&self) -> Option<String> {
        match self {
            Placeholder::Breakpoint {
                breakpoint,
                direction: BreakpointDirection::Between,
                end_breakpoint: Some(end),
            } => Some(format!("@media-between-{breakpoint}-{end}")),
            Placeholder::Breakpoint {
                breakpoint,
                direction,
                ..
            } => Some(format!("@media-{direction}-{breakpoint}")),
            _ => None,
        }
    }
}
