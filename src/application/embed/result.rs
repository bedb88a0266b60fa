//! Embed result types

use std::path::PathBuf;

use crate::domain::value_objects::{ArrayName, Language};

/// Summary of a successful embed, surfaced to the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// Artifact that was written
    pub artifact: PathBuf,
    /// Identifier the array was declared under
    pub name: ArrayName,
    pub language: Language,
    /// Bytes embedded
    pub byte_count: usize,
    /// Inner literal lines written
    pub line_count: usize,
}

impl GenerationReport {
    /// File name of the artifact, or the full path when it has none
    pub fn artifact_name(&self) -> String {
        self.artifact
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.artifact.display().to_string())
    }

    /// Human-readable completion line: `Generated ast.das.inc (10 bytes)`
    pub fn message(&self) -> String {
        format!("Generated {} ({} bytes)", self.artifact_name(), self.byte_count)
    }
}
