//! Dot-path utilities over `serde_json::Value` trees.

use serde_json::{Map, Value};

/// Flat edit map: dot path to leaf value.
pub type FlatMap = Map<String, Value>;

/// Flatten nested objects into dot paths.
///
/// Arrays, primitives and empty objects are leaves. A non-object root
/// flattens to an empty map. Dots and backslashes inside keys are
/// escaped with a backslash, so selectors like `&.Mui-disabled` survive
/// [`expand`].
pub fn flatten(value: &Value) -> FlatMap {
    let mut flat = FlatMap::new();
    if let Value::Object(object) = value {
        flatten_into(object, "", &mut flat);
    }
    flat
}

fn flatten_into(object: &Map<String, Value>, prefix: &str, flat: &mut FlatMap) {
    for (key, value) in object {
        let key = escape_key(key);
        let path = if prefix.is_empty() {
            key
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            Value::Object(child) if !child.is_empty() => flatten_into(child, &path, flat),
            leaf => {
                flat.insert(path, leaf.clone());
            }
        }
    }
}

/// Escape a key for use as one dot-path segment.
pub fn escape_key(key: &str) -> String {
    key.replace('\\', "\\\\").replace('.', "\\.")
}

/// Split a dot path into keys. `\.` is a literal dot and `\\` a literal
/// backslash.
pub fn split_path(path: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut chars = path.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => current.push(chars.next().unwrap_or('\\')),
            '.' => segments.push(std::mem::take(&mut current)),
            other => current.push(other),
        }
    }
    segments.push(current);
    segments
}

/// Build a nested object from a flat map. Later paths win on conflict.
pub fn expand(flat: &FlatMap) -> Value {
    let mut root = Value::Object(Map::new());
    for (path, value) in flat {
        set_path(&mut root, path, value.clone());
    }
    root
}

/// Look up a dot path. Numeric segments index into arrays.
pub fn get_path<'v>(value: &'v Value, path: &str) -> Option<&'v Value> {
    if path.is_empty() {
        return Some(value);
    }
    split_path(path)
        .iter()
        .try_fold(value, |current, segment| match current {
            Value::Object(object) => object.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        })
}

/// Set a dot path, creating intermediate objects and replacing
/// non-object values in the way.
pub fn set_path(root: &mut Value, path: &str, value: Value) {
    let mut current = root;
    let mut segments = split_path(path).into_iter().peekable();
    while let Some(segment) = segments.next() {
        if !current.is_object() {
            *current = Value::Object(Map::new());
        }
        let Value::Object(object) = current else {
            return;
        };
        if segments.peek().is_none() {
            object.insert(segment, value);
            return;
        }
        current = object
            .entry(segment)
            .or_insert_with(|| Value::Object(Map::new()));
    }
}

/// Merge `overlay` into `base`. Objects merge key by key; anything else,
/// arrays included, replaces the base value.
pub fn deep_merge(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base), Value::Object(overlay)) => {
            for (key, value) in overlay {
                match base.get_mut(&key) {
                    Some(existing) => deep_merge(existing, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}
