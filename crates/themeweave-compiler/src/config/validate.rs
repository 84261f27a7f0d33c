//! Range checks over a loaded config.

use themeweave_common::ConfigError;

use super::schema::CompilerConfig;
use crate::parser::MAX_NESTING_DEPTH;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &CompilerConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_range(
        &mut errors,
        "limits.max_depth",
        config.limits.max_depth,
        1,
        MAX_NESTING_DEPTH,
    );
    validate_range(
        &mut errors,
        "limits.max_nodes",
        config.limits.max_nodes,
        1,
        1_000_000,
    );

    let factor = config.resolve.spacing_factor;
    if !(factor > 0.0 && factor <= 256.0) {
        errors.push(format!(
            "resolve.spacing_factor = {factor} is out of range (0, 256]"
        ));
    }

    if config.resolve.template.trim().is_empty() {
        errors.push("resolve.template must not be empty".into());
    }

    // Plain level names only; full filter directives are passed through.
    let level = config.logging.level.trim();
    if level.is_empty()
        || (!level.contains('=') && !LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()))
    {
        errors.push(format!(
            "logging.level = \"{level}\" must be one of {}",
            LOG_LEVELS.join(", ")
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

/// Push an error if `value` is outside `[min, max]`.
fn validate_range(errors: &mut Vec<String>, name: &str, value: usize, min: usize, max: usize) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}
