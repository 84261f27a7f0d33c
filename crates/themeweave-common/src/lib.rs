pub mod errors;
pub mod types;

pub use errors::{CompileError, ConfigError, TemplateError, ThemeweaveError};
pub use types::{Color, ColorScheme, Diagnostic, Severity};

pub type Result<T> = std::result::Result<T, ThemeweaveError>;
