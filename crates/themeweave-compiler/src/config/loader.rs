//! Core TOML config loading: read from path or platform default.

use std::path::Path;
use themeweave_common::ConfigError;
use tracing::info;

use super::paths::default_config_path;
use super::schema::CompilerConfig;
use super::validate::validate;

/// Load config from a specific TOML file path.
///
/// Missing fields take their defaults. The result is validated and every
/// out-of-range value is reported in a single error.
pub fn load_from_path(path: &Path) -> Result<CompilerConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: CompilerConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    validate(&config)?;

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/themeweave/config.toml`
/// On Linux: `~/.config/themeweave/config.toml`
///
/// If the file does not exist, defaults are returned.
pub fn load_default() -> Result<CompilerConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, using defaults", path.display());
            Ok(CompilerConfig::default())
        }
        Err(e) => Err(e),
    }
}
