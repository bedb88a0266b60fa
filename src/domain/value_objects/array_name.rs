//! Array name value object
//!
//! The identifier the generated array is declared under. Construction always
//! sanitizes, so an `ArrayName` is a valid identifier in the language it was
//! built for: never a keyword and never the bare `_` pattern.

use std::fmt;
use std::path::Path;

use super::language::Language;

/// Name used when sanitizing leaves nothing behind
pub const FALLBACK_NAME: &str = "asset";

/// A sanitized array identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArrayName(String);

impl ArrayName {
    /// Sanitize a raw name for `language`
    ///
    /// Every character outside `[A-Za-z0-9_]` becomes `_`, a leading digit gets
    /// a `_` prefix, and identifiers are upper-cased for languages that expect
    /// it. An empty input or a lone `_` yields [`FALLBACK_NAME`]; a keyword of
    /// `language` gets a trailing `_`.
    pub fn new(raw: &str, language: Language) -> Self {
        let mut name: String = raw
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
            .collect();

        if name.is_empty() || name == "_" {
            name = FALLBACK_NAME.to_string();
        }
        if name.starts_with(|c: char| c.is_ascii_digit()) {
            name.insert(0, '_');
        }
        if language.uppercase_identifiers() {
            name.make_ascii_uppercase();
        }
        if language.is_reserved(&name) {
            name.push('_');
        }

        Self(name)
    }

    /// Derive a name from the file name of `path` (`ast.das` → `ast_das`)
    pub fn from_path(path: &Path, language: Language) -> Self {
        let raw = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::new(&raw, language)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArrayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ArrayName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
