//! The theme DSL: plain, JSON-serializable data with tagged placeholders
//! for the expression forms that are only resolvable against a runtime
//! theme.

mod value;


pub use value::{BreakpointDirection, DslObject, DslValue, Placeholder};

use serde::{Deserialize, Serialize};

/// Root of a transformed theme override.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeDsl(pub DslObject);

impl ThemeDsl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn root(&self) -> &DslObject {
        &self.0
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl From<DslObject> for ThemeDsl {
    fn from(object: DslObject) -> Self {
        Self(object)
    }
}
