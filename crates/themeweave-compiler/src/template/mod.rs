//! Base theme templates: the built-in catalogue and template files.

mod builtin;
mod loader;


pub use builtin::{builtin_template, BUILT_IN_TEMPLATES};
pub use loader::{load_template, load_template_from_path};
