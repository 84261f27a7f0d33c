//! Compiler configuration: TOML schema, loading and validation.

mod loader;
mod paths;
mod schema;
mod validate;


pub use loader::{load_default, load_from_path};
pub use paths::default_config_path;
pub use schema::{CompilerConfig, LoggingConfig, ResolveConfig};
pub use validate::validate;
