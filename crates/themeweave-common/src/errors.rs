use std::path::PathBuf;

use crate::types::Diagnostic;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("template not found: {0}")]
    NotFound(String),

    #[error("template parse error: {0}")]
    ParseError(String),

    #[error("template must be an object, found {0}")]
    NotAnObject(&'static str),
}

#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    #[error("theme code rejected with {} error(s)", .0.len())]
    Rejected(Vec<Diagnostic>),

    #[error("theme code could not be transformed: {0}")]
    TransformFailed(String),

    #[error("invalid DSL document: {0}")]
    InvalidDsl(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ThemeweaveError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Severity;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("limits.max_depth = 0".into());
        assert_eq!(
            err.to_string(),
            "config validation error: limits.max_depth = 0"
        );
    }

    #[test]
    fn template_error_display() {
        let err = TemplateError::NotFound("material-ish".into());
        assert_eq!(err.to_string(), "template not found: material-ish");

        let err = TemplateError::NotAnObject("array");
        assert_eq!(err.to_string(), "template must be an object, found array");
    }

    #[test]
    fn compile_error_counts_rejections() {
        let diagnostics = vec![
            Diagnostic::error("unknown key", Some(1), Some(3)),
            Diagnostic::error("bad color", None, None),
        ];
        let err = CompileError::Rejected(diagnostics);
        assert_eq!(err.to_string(), "theme code rejected with 2 error(s)");
        if let CompileError::Rejected(list) = err {
            assert_eq!(list[0].severity, Severity::Error);
        }
    }

    #[test]
    fn umbrella_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: ThemeweaveError = config_err.into();
        assert!(matches!(err, ThemeweaveError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn umbrella_error_from_compile() {
        let err: ThemeweaveError = CompileError::TransformFailed("boom".into()).into();
        assert!(matches!(err, ThemeweaveError::Compile(_)));
        assert_eq!(err.to_string(), "theme code could not be transformed: boom");
    }

    #[test]
    fn umbrella_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: ThemeweaveError = io_err.into();
        assert!(matches!(err, ThemeweaveError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }
}
