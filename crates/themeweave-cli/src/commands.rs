//! Subcommand implementations.

use std::path::Path;
use std::process::ExitCode;

use themeweave_common::{CompileError, Diagnostic, ThemeweaveError};
use themeweave_compiler::config::ResolveConfig;
use themeweave_compiler::{
    apply, compose_theme, load_template, validate_with_limits, CompilerConfig, EditLayers,
    ThemeDsl,
};

fn print_diagnostics(file: &Path, diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        eprintln!("{}:{diagnostic}", file.display());
    }
}

pub fn check(file: &Path, json: bool, config: &CompilerConfig) -> Result<ExitCode, ThemeweaveError> {
    let source = std::fs::read_to_string(file)?;
    let result = validate_with_limits(&source, &config.limits);

    if json {
        let out = serde_json::to_string_pretty(&result)
            .map_err(|e| ThemeweaveError::Other(format!("failed to serialize result: {e}")))?;
        println!("{out}");
    } else {
        print_diagnostics(file, &result.errors);
        print_diagnostics(file, &result.warnings);
        if result.valid {
            println!("{}: ok", file.display());
        }
    }

    Ok(if result.valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

pub fn compile(
    file: &Path,
    output: Option<&Path>,
    config: &CompilerConfig,
) -> Result<ExitCode, ThemeweaveError> {
    let source = std::fs::read_to_string(file)?;
    let outcome = match apply(&source, &config.limits) {
        Ok(outcome) => outcome,
        Err(CompileError::Rejected(errors)) => {
            print_diagnostics(file, &errors);
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e.into()),
    };

    for warning in &outcome.warnings {
        tracing::warn!("{}: {warning}", file.display());
    }

    let json = outcome
        .dsl
        .to_json()
        .map_err(|e| ThemeweaveError::Other(format!("failed to serialize DSL: {e}")))?;
    match output {
        Some(path) => {
            std::fs::write(path, json + "\n")?;
            tracing::info!("wrote DSL to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(ExitCode::SUCCESS)
}

pub struct ResolveOptions<'a> {
    pub dsl: &'a Path,
    pub template: Option<&'a str>,
    pub scheme: Option<themeweave_common::ColorScheme>,
    pub spacing: Option<f64>,
    pub edits: Option<&'a Path>,
}

pub fn resolve(options: ResolveOptions<'_>, config: &CompilerConfig) -> Result<ExitCode, ThemeweaveError> {
    let dsl = read_dsl(options.dsl)?;

    let layers = match options.edits {
        Some(path) => {
            let content = std::fs::read_to_string(path)?;
            serde_json::from_str::<EditLayers>(&content).map_err(|e| {
                ThemeweaveError::Other(format!("invalid edits file {}: {e}", path.display()))
            })?
        }
        None => EditLayers::default(),
    };

    let settings = ResolveConfig {
        spacing_factor: options.spacing.unwrap_or(config.resolve.spacing_factor),
        color_scheme: options.scheme.unwrap_or(config.resolve.color_scheme),
        template: options
            .template
            .unwrap_or(&config.resolve.template)
            .to_string(),
    };
    let spacing = settings.spacing_factor;
    if !(spacing > 0.0 && spacing.is_finite()) {
        return Err(ThemeweaveError::Other(format!(
            "spacing must be a positive number, got {spacing}"
        )));
    }
    let template = load_template(&settings.template, settings.color_scheme)?;

    let ctx = settings.context(template);
    let theme = compose_theme(&layers, Some(&dsl), &ctx);
    let out = serde_json::to_string_pretty(&theme)
        .map_err(|e| ThemeweaveError::Other(format!("failed to serialize theme: {e}")))?;
    println!("{out}");
    Ok(ExitCode::SUCCESS)
}

fn read_dsl(path: &Path) -> Result<ThemeDsl, ThemeweaveError> {
    let content = std::fs::read_to_string(path)?;
    ThemeDsl::from_json(&content)
        .map_err(|e| CompileError::InvalidDsl(format!("{}: {e}", path.display())).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_reports_failure_exit_code() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("bad.ts");
        std::fs::write(&bad, "{ notARealKey: 1 }").unwrap();
        let good = dir.path().join("good.ts");
        std::fs::write(&good, "{ palette: { primary: { main: '#fff' } } }").unwrap();

        let config = CompilerConfig::default();
        assert_eq!(check(&bad, false, &config).unwrap(), ExitCode::FAILURE);
        assert_eq!(check(&good, true, &config).unwrap(), ExitCode::SUCCESS);
    }

    #[test]
    fn compile_writes_dsl_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("theme.ts");
        std::fs::write(&source, "const theme = { spacing: 4 };").unwrap();
        let output = dir.path().join("theme.json");

        let code = compile(&source, Some(&output), &CompilerConfig::default()).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
        let dsl = ThemeDsl::from_json(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(
            serde_json::to_value(&dsl).unwrap(),
            serde_json::json!({ "spacing": 4 })
        );
    }

    #[test]
    fn compile_rejects_invalid_code() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("theme.ts");
        std::fs::write(&source, "{ spacing: eval('1') }").unwrap();
        let output = dir.path().join("theme.json");

        let code = compile(&source, Some(&output), &CompilerConfig::default()).unwrap();
        assert_eq!(code, ExitCode::FAILURE);
        assert!(!output.exists());
    }

    #[test]
    fn resolve_rejects_malformed_dsl() {
        let dir = tempfile::tempdir().unwrap();
        let dsl = dir.path().join("dsl.json");
        std::fs::write(&dsl, "[1, 2]").unwrap();
        let options = ResolveOptions {
            dsl: &dsl,
            template: None,
            scheme: None,
            spacing: None,
            edits: None,
        };
        let err = resolve(options, &CompilerConfig::default()).unwrap_err();
        assert!(matches!(err, ThemeweaveError::Compile(CompileError::InvalidDsl(_))));
    }

    #[test]
    fn resolve_rejects_non_positive_spacing() {
        let dir = tempfile::tempdir().unwrap();
        let dsl = dir.path().join("dsl.json");
        std::fs::write(&dsl, "{}").unwrap();
        let options = ResolveOptions {
            dsl: &dsl,
            template: None,
            scheme: None,
            spacing: Some(0.0),
            edits: None,
        };
        let err = resolve(options, &CompilerConfig::default()).unwrap_err();
        assert!(err.to_string().contains("spacing"));
    }

    #[test]
    fn resolve_with_edits() {
        let dir = tempfile::tempdir().unwrap();
        let dsl = dir.path().join("dsl.json");
        std::fs::write(&dsl, r#"{ "spacing": 4 }"#).unwrap();
        let edits = dir.path().join("edits.json");
        std::fs::write(&edits, r##"{ "dark": { "palette.primary.main": "#abcdef" } }"##).unwrap();
        let options = ResolveOptions {
            dsl: &dsl,
            template: Some("default"),
            scheme: Some(themeweave_common::ColorScheme::Dark),
            spacing: Some(4.0),
            edits: Some(&edits),
        };
        let code = resolve(options, &CompilerConfig::default()).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
    }
}
