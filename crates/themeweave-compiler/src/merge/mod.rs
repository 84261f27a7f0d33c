//! Edit layers and their precedence-ordered merge into the final theme.
//!
//! Visual edits are stored as flat dot-path maps
//! (`"palette.primary.main" -> "#111"`); [`expand`] and [`flatten`]
//! convert between that form and nested objects.

mod layers;
mod paths;

#[cfg(test)]
mod tests;

pub use layers::{compose_theme, merge, EditLayers, SCHEME_SCOPED_KEYS};
pub use paths::{
    deep_merge, escape_key, expand, flatten, get_path, set_path, split_path, FlatMap,
};
