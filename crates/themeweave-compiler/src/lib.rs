//! Sandboxed compiler for theme override code.
//!
//! Theme code is a JavaScript-style object literal. It is validated
//! against a strict whitelist, lowered to a JSON-serializable DSL, and
//! later resolved against a base template and merged with visual edit
//! layers into the final theme tree.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use themeweave_compiler::{apply, builtin_template, resolve, ResolutionContext, ValidationLimits};
//! use themeweave_common::ColorScheme;
//!
//! let outcome = apply("{ spacing: 4 }", &ValidationLimits::default()).expect("rejected");
//! let template = builtin_template("default", ColorScheme::Light).unwrap();
//! let ctx = ResolutionContext::new(template, ColorScheme::Light, 8.0);
//! println!("{}", resolve(&outcome.dsl, &ctx));
//! ```

pub mod ast;
pub mod colors;
pub mod config;
pub mod dsl;
pub mod lexer;
pub mod merge;
pub mod parser;
pub mod pipeline;
pub mod resolve;
pub mod source;
pub mod template;
pub mod transform;
pub mod validation;

// Re-export core types for convenience
pub use config::CompilerConfig;
pub use dsl::{DslValue, Placeholder, ThemeDsl};
pub use merge::{compose_theme, merge, EditLayers, FlatMap};
pub use pipeline::{apply, ApplyOutcome};
pub use resolve::{resolve, resolve_value, ResolutionContext};
pub use template::{builtin_template, load_template, BUILT_IN_TEMPLATES};
pub use transform::{transform_code_to_dsl, Lowered, TransformOutput};
pub use validation::{validate, validate_with_limits, ValidationLimits, ValidationResult};
