//! Asset entity - the binary file being embedded
//!
//! An asset is opaque bytes plus the path they were read from. It is created
//! by a single read and never mutated afterwards.

use std::path::{Path, PathBuf};

/// A binary asset read fully into memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    /// Path the bytes were read from
    origin: PathBuf,
    /// Complete file content, in file order
    bytes: Vec<u8>,
}

impl Asset {
    /// Create a new Asset
    pub fn new(origin: impl Into<PathBuf>, bytes: Vec<u8>) -> Self {
        Self {
            origin: origin.into(),
            bytes,
        }
    }

    pub fn origin(&self) -> &Path {
        &self.origin
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// File name of the origin, used to derive the array name and default output
    ///
    /// Falls back to the whole origin when the path has no final component.
    pub fn file_name(&self) -> String {
        self.origin
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.origin.display().to_string())
    }
}
