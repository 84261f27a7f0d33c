//! themeweave: command-line driver for the theme override compiler.

mod cli;
mod commands;

use std::process::ExitCode;

use themeweave_compiler::{config, CompilerConfig};
use tracing_subscriber::EnvFilter;

use crate::cli::Command;
use crate::commands::ResolveOptions;

fn load_config(path: Option<&std::path::Path>) -> Result<CompilerConfig, themeweave_common::ConfigError> {
    match path {
        Some(path) => config::load_from_path(path),
        None => config::load_default(),
    }
}

fn main() -> ExitCode {
    let args = cli::parse();

    // Config first: its logging level is the default filter.
    let config = load_config(args.config.as_deref());

    let log_directive = args
        .log_level
        .clone()
        .or_else(|| config.as_ref().ok().map(|c| c.logging.level.clone()))
        .unwrap_or_else(|| "info".into());
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "info".parse().unwrap()),
            ),
        )
        .init();

    let config = match config {
        Ok(config) => config,
        Err(e) if args.config.is_some() => {
            tracing::error!("{e}");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            tracing::warn!("Config load failed, using defaults: {e}");
            CompilerConfig::default()
        }
    };

    let result = match &args.command {
        Command::Check { file, json } => commands::check(file, *json, &config),
        Command::Compile { file, output } => commands::compile(file, output.as_deref(), &config),
        Command::Resolve {
            dsl,
            template,
            scheme,
            spacing,
            edits,
        } => commands::resolve(
            ResolveOptions {
                dsl,
                template: template.as_deref(),
                scheme: *scheme,
                spacing: *spacing,
                edits: edits.as_deref(),
            },
            &config,
        ),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
