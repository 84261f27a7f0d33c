//! The apply pipeline: validate, then transform.

use themeweave_common::{CompileError, Diagnostic};

use crate::dsl::ThemeDsl;
use crate::transform::transform_code_to_dsl;
use crate::validation::{validate_with_limits, ValidationLimits};

/// A successful apply.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplyOutcome {
    pub dsl: ThemeDsl,
    /// Validator warnings followed by transformer warnings.
    pub warnings: Vec<String>,
}

/// Validate `source` and, only if it is admissible, lower it to DSL.
///
/// This is the entry point for untrusted code: the transformer alone
/// accepts constructs the validator rejects.
pub fn apply(source: &str, limits: &ValidationLimits) -> Result<ApplyOutcome, CompileError> {
    let validation = validate_with_limits(source, limits);
    if !validation.valid {
        tracing::debug!(errors = validation.errors.len(), "apply rejected");
        return Err(CompileError::Rejected(validation.errors));
    }

    let output = transform_code_to_dsl(source);
    if let Some(error) = output.error {
        return Err(CompileError::TransformFailed(error));
    }

    let warnings = validation
        .warnings
        .iter()
        .map(Diagnostic::to_string)
        .chain(output.warnings)
        .collect();
    Ok(ApplyOutcome {
        dsl: output.dsl,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::{resolve, ResolutionContext};
    use serde_json::json;
    use themeweave_common::ColorScheme;

    fn apply_default(source: &str) -> Result<ApplyOutcome, CompileError> {
        apply(source, &ValidationLimits::default())
    }

    #[test]
    fn empty_source_applies_to_empty_dsl() {
        let outcome = apply_default("").unwrap();
        assert!(outcome.dsl.is_empty());
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn rejected_code_never_reaches_the_transformer() {
        // The transformer on its own degrades these to harmless values,
        // so a DSL would come back if the order were not enforced.
        for source in [
            "{ palette: { primary: { main: fetch('https://example.com') } } }",
            "{ constructor: { prototype: 1 } }",
            "{ spacing: process.exit(1) }",
            "{ components: { MuiButton: { styleOverrides: { root: (p) => ({ x: 1 }) } } } }",
        ] {
            assert!(transform_code_to_dsl(source).error.is_none());
            let result = apply_default(source);
            assert!(
                matches!(result, Err(CompileError::Rejected(ref errors)) if !errors.is_empty()),
                "{source} should be rejected"
            );
        }
    }

    #[test]
    fn syntax_errors_are_rejections() {
        let result = apply_default("{ palette: ");
        match result {
            Err(CompileError::Rejected(errors)) => {
                assert_eq!(errors.len(), 1);
                assert!(errors[0].message.starts_with("Syntax error"));
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn warnings_are_carried_through() {
        let outcome = apply_default("{ ...base, palette: { primary: { main: '#fff' } } }").unwrap();
        assert_eq!(outcome.warnings.len(), 2);
        assert!(outcome.warnings[0].contains("warning"));
        assert_eq!(
            serde_json::to_value(&outcome.dsl).unwrap(),
            json!({ "palette": { "primary": { "main": "#fff" } } })
        );
    }

    #[test]
    fn limits_are_honored() {
        let limits = ValidationLimits {
            max_depth: 2,
            ..Default::default()
        };
        let result = apply("{ palette: { primary: { main: '#fff' } } }", &limits);
        assert!(matches!(result, Err(CompileError::Rejected(_))));
    }

    #[test]
    fn end_to_end_style_function() {
        let source = "{ components: { MuiButton: { styleOverrides: { root: ({ theme }) => ({ padding: theme.spacing(1) }) } } } }";
        let outcome = apply_default(source).unwrap();

        let dsl = serde_json::to_value(&outcome.dsl).unwrap();
        let root = &dsl["components"]["MuiButton"]["styleOverrides"]["root"];
        assert_eq!(root["__type"], "function");
        assert_eq!(root["body"]["padding"], json!({ "__type": "spacing", "args": [1] }));

        let ctx = ResolutionContext::new(json!({}), ColorScheme::Light, 8.0);
        assert_eq!(
            resolve(&outcome.dsl, &ctx),
            json!({ "components": { "MuiButton": { "styleOverrides": { "root": { "padding": 8 } } } } })
        );
    }
}
