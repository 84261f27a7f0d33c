use serde::{Deserialize, Serialize};
use serde_json::Value;
use themeweave_common::ColorScheme;
use tracing::warn;

use super::paths::{deep_merge, expand, split_path, FlatMap};
use crate::dsl::ThemeDsl;
use crate::resolve::{resolve, ResolutionContext};

/// Top-level sections scheme-specific edits may touch.
pub const SCHEME_SCOPED_KEYS: &[&str] = &["palette", "shadows"];

/// Visual edits, as flat dot-path maps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditLayers {
    /// Scheme-independent edits.
    pub global: FlatMap,
    pub light: FlatMap,
    pub dark: FlatMap,
}

impl EditLayers {
    pub fn for_scheme(&self, scheme: ColorScheme) -> &FlatMap {
        match scheme {
            ColorScheme::Light => &self.light,
            ColorScheme::Dark => &self.dark,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.global.is_empty() && self.light.is_empty() && self.dark.is_empty()
    }
}

/// Merge the layers in precedence order: template, global edits,
/// scheme edits (only [`SCHEME_SCOPED_KEYS`]), then code overrides.
pub fn merge(template: &Value, global: &FlatMap, scheme: &FlatMap, code_overrides: &Value) -> Value {
    let scoped: FlatMap = scheme
        .iter()
        .filter(|(path, _)| {
            let section = split_path(path).into_iter().next().unwrap_or_default();
            let allowed = SCHEME_SCOPED_KEYS.contains(&section.as_str());
            if !allowed {
                warn!("ignoring scheme edit outside palette/shadows: {path}");
            }
            allowed
        })
        .map(|(path, value)| (path.clone(), value.clone()))
        .collect();

    let mut merged = template.clone();
    deep_merge(&mut merged, expand(global));
    deep_merge(&mut merged, expand(&scoped));
    deep_merge(&mut merged, code_overrides.clone());
    merged
}

/// Build the final theme for the context's scheme from the edit layers
/// and optional code overrides.
pub fn compose_theme(layers: &EditLayers, code: Option<&ThemeDsl>, ctx: &ResolutionContext) -> Value {
    let code_overrides = match code {
        Some(dsl) if !dsl.is_empty() => resolve(dsl, ctx),
        _ => Value::Object(Default::default()),
    };
    merge(
        &ctx.template,
        &layers.global,
        layers.for_scheme(ctx.color_scheme),
        &code_overrides,
    )
}
