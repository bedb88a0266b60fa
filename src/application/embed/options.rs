//! Embed options

use std::path::{Path, PathBuf};

use crate::domain::value_objects::{ArrayLayout, ArrayName};

/// Extension appended to the input path when no output is given
pub const DEFAULT_OUTPUT_EXTENSION: &str = "inc";

/// Options for the embed command
#[derive(Debug, Clone, Default)]
pub struct EmbedOptions {
    /// Binary asset to embed
    pub input: PathBuf,
    /// Destination artifact (None = `<input>.inc`)
    pub output: Option<PathBuf>,
    /// Array identifier (None = derived from the input file name)
    pub name: Option<String>,
    pub layout: ArrayLayout,
}

impl EmbedOptions {
    /// Create new embed options for `input`
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            ..Self::default()
        }
    }

    /// Set output path
    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }

    /// Set explicit array name
    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    /// Set layout
    pub fn with_layout(mut self, layout: ArrayLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Where the artifact is written
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_output_path(&self.input))
    }

    /// The sanitized identifier the array is declared under
    pub fn array_name(&self) -> ArrayName {
        match &self.name {
            Some(raw) => ArrayName::new(raw, self.layout.language),
            None => ArrayName::from_path(&self.input, self.layout.language),
        }
    }
}

/// `ast.das` → `ast.das.inc`, keeping the directory
pub fn default_output_path(input: &Path) -> PathBuf {
    let mut path = input.as_os_str().to_owned();
    path.push(".");
    path.push(DEFAULT_OUTPUT_EXTENSION);
    PathBuf::from(path)
}
