//! Configuration types. Every section is optional in the file.

use serde::{Deserialize, Serialize};
use themeweave_common::ColorScheme;

use crate::resolve::ResolutionContext;
use crate::validation::ValidationLimits;

/// Root of `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompilerConfig {
    pub limits: ValidationLimits,
    pub resolve: ResolveConfig,
    pub logging: LoggingConfig,
}

/// Defaults for resolving DSL into a theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolveConfig {
    pub spacing_factor: f64,
    pub color_scheme: ColorScheme,
    /// Built-in template name or template file path.
    pub template: String,
}

impl Default for ResolveConfig {
    fn default() -> Self {
        Self {
            spacing_factor: 8.0,
            color_scheme: ColorScheme::Light,
            template: "default".into(),
        }
    }
}

impl ResolveConfig {
    /// Context for these settings over an already loaded template.
    pub fn context(&self, template: serde_json::Value) -> ResolutionContext {
        ResolutionContext::new(template, self.color_scheme, self.spacing_factor)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default tracing filter directive.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}
