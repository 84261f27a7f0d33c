//! Source unwrapping and position mapping.
//!
//! Theme code arrives either as a bare object literal or wrapped in a
//! `const theme: ThemeOptions = { ... };` declaration. Both the validator
//! and the transformer parse only the object literal; positions are mapped
//! back to the text the user typed.

use regex::Regex;
use std::sync::LazyLock;

/// Matches `const theme[: Type] = { ... }[;]`, capturing the object literal.
static WRAPPER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^\s*(?:export\s+)?const\s+theme\b[^=]*=\s*(\{.*\})\s*;?\s*$").unwrap()
});

/// The object-literal text to parse and where it sits in the original source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceBody<'a> {
    pub text: &'a str,
    /// Byte offset of `text` within the original source.
    pub offset: usize,
}

/// Extract the object literal from a wrapped declaration, or return the
/// trimmed source.
pub fn unwrap_source(source: &str) -> SourceBody<'_> {
    if let Some(body) = WRAPPER_RE.captures(source).and_then(|caps| caps.get(1)) {
        return SourceBody {
            text: body.as_str(),
            offset: body.start(),
        };
    }
    let trimmed_start = source.len() - source.trim_start().len();
    SourceBody {
        text: source.trim(),
        offset: trimmed_start,
    }
}

/// Maps byte offsets to 1-based line and column numbers.
#[derive(Debug, Clone)]
pub struct LineIndex<'a> {
    source: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    pub fn new(source: &'a str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self {
            source,
            line_starts,
        }
    }

    /// 1-based `(line, column)` of `offset`; columns count characters.
    pub fn position(&self, offset: usize) -> (usize, usize) {
        let offset = offset.min(self.source.len());
        let line = match self.line_starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(next) => next - 1,
        };
        let line_start = self.line_starts[line];
        let column = self
            .source
            .get(line_start..offset)
            .map(|text| text.chars().count())
            .unwrap_or(offset - line_start);
        (line + 1, column + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_object_is_trimmed() {
        let body = unwrap_source("  \n{ palette: {} }\n");
        assert_eq!(body.text, "{ palette: {} }");
        assert_eq!(body.offset, 3);
    }

    #[test]
    fn wrapped_declaration_is_unwrapped() {
        let source = "const theme: ThemeOptions = {\n  palette: {},\n};\n";
        let body = unwrap_source(source);
        assert_eq!(body.text, "{\n  palette: {},\n}");
        assert_eq!(&source[body.offset..body.offset + 1], "{");
    }

    #[test]
    fn wrapped_declaration_without_type_or_semicolon() {
        let body = unwrap_source("const theme = { spacing: 4 }");
        assert_eq!(body.text, "{ spacing: 4 }");
        assert_eq!(body.offset, 14);
    }

    #[test]
    fn other_declarations_are_left_alone() {
        let body = unwrap_source("const other = { a: 1 };");
        assert_eq!(body.text, "const other = { a: 1 };");
    }

    #[test]
    fn line_index_positions() {
        let index = LineIndex::new("ab\ncd\n\nef");
        assert_eq!(index.position(0), (1, 1));
        assert_eq!(index.position(1), (1, 2));
        assert_eq!(index.position(3), (2, 1));
        assert_eq!(index.position(6), (3, 1));
        assert_eq!(index.position(8), (4, 2));
        assert_eq!(index.position(100), (4, 3));
    }

    #[test]
    fn line_index_counts_characters_not_bytes() {
        let index = LineIndex::new("{ é: 1 }");
        // 'é' is two bytes; ':' starts at byte 4 but is the 4th character.
        assert_eq!(index.position(4), (1, 4));
    }
}
