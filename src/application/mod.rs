//! Application Layer
//!
//! Use cases that orchestrate the generation flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain rendering rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `EmbedUseCase` - Read a binary asset, render it as an array, write the artifact
//! - `ApiSummaryUseCase` - Count the sections of an API description and write the summary

pub mod api_summary;
pub mod embed;

pub use api_summary::{ApiSummaryOptions, ApiSummaryReport, ApiSummaryUseCase};
pub use embed::{EmbedOptions, EmbedUseCase, GenerationReport};
