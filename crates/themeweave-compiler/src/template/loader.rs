//! Template file resolution and loading.
//!
//! Template files are YAML or JSON documents holding a resolved theme
//! tree. Names without a path separator or extension refer to the
//! built-in catalogue first, then to `<config dir>/themeweave/templates`.

use serde_json::Value;
use std::path::{Path, PathBuf};
use themeweave_common::{ColorScheme, TemplateError};
use tracing::info;

use super::builtin::builtin_template;

fn looks_like_path(name: &str) -> bool {
    name.contains('/')
        || name.contains('\\')
        || [".yaml", ".yml", ".json"]
            .iter()
            .any(|ext| name.ends_with(ext))
}

/// Resolve a template name to a file in the user's template directory.
fn resolve_template_path(name: &str) -> Result<PathBuf, TemplateError> {
    if looks_like_path(name) {
        return Ok(PathBuf::from(name));
    }

    if let Some(config_dir) = dirs::config_dir() {
        let dir = config_dir.join("themeweave").join("templates");
        for ext in ["yaml", "yml", "json"] {
            let candidate = dir.join(format!("{name}.{ext}"));
            if candidate.exists() {
                return Ok(candidate);
            }
        }
    }

    Err(TemplateError::NotFound(name.to_string()))
}

/// Load a template by built-in name or file path.
///
/// A file may hold one tree for both schemes, or `light`/`dark` entries
/// whose matching entry is selected.
pub fn load_template(name_or_path: &str, scheme: ColorScheme) -> Result<Value, TemplateError> {
    if let Some(template) = builtin_template(name_or_path, scheme) {
        return Ok(template);
    }

    let path = resolve_template_path(name_or_path)?;
    let template = load_template_from_path(&path)?;
    match template.get(scheme.as_str()) {
        Some(scoped @ Value::Object(_)) if template.get("palette").is_none() => Ok(scoped.clone()),
        _ => Ok(template),
    }
}

/// Load a template from a YAML or JSON file.
pub fn load_template_from_path(path: &Path) -> Result<Value, TemplateError> {
    if !path.exists() {
        return Err(TemplateError::NotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        TemplateError::ParseError(format!("failed to read {}: {e}", path.display()))
    })?;

    let is_json = path.extension().is_some_and(|ext| ext == "json");
    let template: Value = if is_json {
        serde_json::from_str(&content).map_err(|e| {
            TemplateError::ParseError(format!("failed to parse JSON {}: {e}", path.display()))
        })?
    } else {
        serde_yaml::from_str(&content).map_err(|e| {
            TemplateError::ParseError(format!("failed to parse YAML {}: {e}", path.display()))
        })?
    };

    if !template.is_object() {
        return Err(TemplateError::NotAnObject(type_name(&template)));
    }

    info!("loaded template from {}", path.display());
    Ok(template)
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
