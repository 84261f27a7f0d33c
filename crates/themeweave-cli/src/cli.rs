use clap::{Parser, Subcommand};
use std::path::PathBuf;
use themeweave_common::ColorScheme;

/// themeweave: check, compile and resolve theme override code.
#[derive(Parser, Debug)]
#[command(name = "themeweave", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate theme code and print diagnostics.
    Check {
        /// Theme code file.
        file: PathBuf,

        /// Print the validation result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Validate theme code and lower it to DSL JSON.
    Compile {
        /// Theme code file.
        file: PathBuf,

        /// Write the DSL here instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Resolve a DSL file against a template and edit layers.
    Resolve {
        /// DSL JSON file produced by `compile`.
        dsl: PathBuf,

        /// Built-in template name or template file.
        #[arg(long)]
        template: Option<String>,

        /// Active color scheme (light or dark).
        #[arg(long)]
        scheme: Option<ColorScheme>,

        /// Pixels per spacing unit.
        #[arg(long)]
        spacing: Option<f64>,

        /// JSON file with `global`, `light` and `dark` flat edit maps.
        #[arg(long)]
        edits: Option<PathBuf>,
    },
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_check() {
        let args = Args::try_parse_from(["themeweave", "check", "theme.ts", "--json"]).unwrap();
        assert!(matches!(args.command, Command::Check { json: true, .. }));
    }

    #[test]
    fn parses_resolve_options() {
        let args = Args::try_parse_from([
            "themeweave",
            "--log-level",
            "debug",
            "resolve",
            "dsl.json",
            "--scheme",
            "dark",
            "--spacing",
            "4",
        ])
        .unwrap();
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        match args.command {
            Command::Resolve {
                scheme, spacing, ..
            } => {
                assert_eq!(scheme, Some(ColorScheme::Dark));
                assert_eq!(spacing, Some(4.0));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_scheme() {
        let result = Args::try_parse_from(["themeweave", "resolve", "dsl.json", "--scheme", "sepia"]);
        assert!(result.is_err());
    }

    #[test]
    fn global_config_after_subcommand() {
        let args =
            Args::try_parse_from(["themeweave", "compile", "a.ts", "--config", "c.toml"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("c.toml")));
    }
}
