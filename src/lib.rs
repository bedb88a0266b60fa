//! embedgen - build-time asset embedding and API summary generator
//!
//! embedgen turns an arbitrary binary file into a source-compilable byte
//! array so it can be linked into a program without a runtime file
//! dependency, and summarizes extension API descriptions for downstream
//! binding generators.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    ApiSummaryOptions, ApiSummaryReport, ApiSummaryUseCase, EmbedOptions, EmbedUseCase,
    GenerationReport,
};
pub use config::{Config, ConfigWarning};
pub use domain::entities::{ApiSummary, Asset};
pub use domain::ports::FileSystem;
pub use domain::services::{ArrayEmitter, EmittedArray};
pub use domain::value_objects::{ArrayLayout, ArrayName, Language, LiteralFormat};
pub use error::{EmbedError, EmbedResult};
pub use infrastructure::LocalFs;
