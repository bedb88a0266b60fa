//! Embed Use Case
//!
//! Turns a binary asset into a source-compilable array artifact.
//!
//! This module handles:
//! - Reading the asset in full through the `FileSystem` port
//! - Deriving the array name and output path
//! - Rendering with the configured `ArrayLayout`
//! - Writing the artifact and reporting the byte count

mod options;
mod result;
mod use_case;

pub use options::{default_output_path, EmbedOptions, DEFAULT_OUTPUT_EXTENSION};
pub use result::GenerationReport;
pub use use_case::EmbedUseCase;
