//! API summary entity
//!
//! Aggregate counts over an extension API description (the JSON document a
//! host engine publishes to describe its classes, enums and constants). No
//! binding code is derived from it; downstream generators consume the summary.

use serde::Serialize;
use serde_json::{Map, Value};

/// Aggregate view of an API description document
///
/// Field order is the serialized order of `api_summary.json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiSummary {
    /// The document's `header` object, copied verbatim (`{}` when absent)
    pub header: Value,
    pub builtin_class_count: usize,
    pub class_count: usize,
    pub global_enum_count: usize,
    pub utility_function_count: usize,
    pub global_constant_count: usize,
    pub singleton_count: usize,
    pub native_structure_count: usize,
    /// Methods declared across `classes` and `builtin_classes`
    pub method_count: usize,
}

/// Why a document could not be summarized
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiShapeError {
    /// The top-level value is not a JSON object
    RootNotObject,
    /// A top-level section exists but is not an array
    SectionNotArray(&'static str),
}

impl std::fmt::Display for ApiShapeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiShapeError::RootNotObject => write!(f, "top-level value must be an object"),
            ApiShapeError::SectionNotArray(key) => write!(f, "'{}' must be an array", key),
        }
    }
}

impl std::error::Error for ApiShapeError {}

impl ApiSummary {
    /// Summarize a parsed API description
    ///
    /// Missing sections count as zero. A `methods` entry that is absent or
    /// not an array contributes nothing to `method_count`.
    pub fn from_document(document: &Value) -> Result<Self, ApiShapeError> {
        let root = document.as_object().ok_or(ApiShapeError::RootNotObject)?;

        let builtin_classes = section(root, "builtin_classes")?;
        let classes = section(root, "classes")?;

        let method_count = builtin_classes
            .iter()
            .chain(classes.iter())
            .filter_map(|class| class.get("methods").and_then(Value::as_array))
            .map(Vec::len)
            .sum();

        Ok(Self {
            header: root
                .get("header")
                .cloned()
                .unwrap_or_else(|| Value::Object(Map::new())),
            builtin_class_count: builtin_classes.len(),
            class_count: classes.len(),
            global_enum_count: section(root, "global_enums")?.len(),
            utility_function_count: section(root, "utility_functions")?.len(),
            global_constant_count: section(root, "global_constants")?.len(),
            singleton_count: section(root, "singletons")?.len(),
            native_structure_count: section(root, "native_structures")?.len(),
            method_count,
        })
    }
}

fn section<'a>(
    root: &'a Map<String, Value>,
    key: &'static str,
) -> Result<&'a [Value], ApiShapeError> {
    match root.get(key) {
        None => Ok(&[][..]),
        Some(Value::Array(items)) => Ok(items.as_slice()),
        Some(_) => Err(ApiShapeError::SectionNotArray(key)),
    }
}
