//! Embed Use Case
//!
//! Read the asset, render it, write the artifact. The read always completes
//! before the destination is touched, so a missing source never creates or
//! truncates an output file.

use std::path::Path;

use tracing::{debug, info};

use crate::domain::entities::Asset;
use crate::domain::ports::FileSystem;
use crate::domain::services::{ArrayEmitter, EmittedArray};
use crate::error::EmbedResult;

use super::options::EmbedOptions;
use super::result::GenerationReport;

/// Embed use case - turns one binary file into one array artifact
pub struct EmbedUseCase<FS>
where
    FS: FileSystem,
{
    fs: FS,
}

impl<FS> EmbedUseCase<FS>
where
    FS: FileSystem,
{
    /// Create a new embed use case
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    /// Read the whole asset at `path`
    pub fn read_asset(&self, path: &Path) -> EmbedResult<Asset> {
        let bytes = self.fs.read_bytes(path)?;
        debug!(path = %path.display(), bytes = bytes.len(), "read asset");
        Ok(Asset::new(path, bytes))
    }

    /// Read and render without writing anything
    pub fn render(&self, options: &EmbedOptions) -> EmbedResult<EmittedArray> {
        let asset = self.read_asset(&options.input)?;
        let emitter = ArrayEmitter::new(options.layout.clone());
        let emitted = emitter.render(&options.array_name(), asset.bytes());
        debug!(
            name = %emitted.name(),
            lines = emitted.line_count(),
            group_size = emitter.layout().group_size(),
            "rendered array"
        );
        Ok(emitted)
    }

    /// Execute the embed: read, render, then a single write of the artifact
    pub fn execute(&self, options: &EmbedOptions) -> EmbedResult<GenerationReport> {
        let emitted = self.render(options)?;
        let artifact = options.output_path();

        self.fs.write(&artifact, emitted.text())?;
        info!(
            artifact = %artifact.display(),
            bytes = emitted.byte_count(),
            language = %options.layout.language,
            "wrote artifact"
        );

        Ok(GenerationReport {
            artifact,
            name: emitted.name().clone(),
            language: options.layout.language,
            byte_count: emitted.byte_count(),
            line_count: emitted.line_count(),
        })
    }
}
