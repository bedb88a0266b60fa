//! Use Case Factory
//!
//! Wires use cases to their production infrastructure.

use crate::application::{ApiSummaryUseCase, EmbedUseCase};
use crate::infrastructure::LocalFs;

/// Embed use case backed by the local file system
pub fn create_embed_use_case() -> EmbedUseCase<LocalFs> {
    EmbedUseCase::new(LocalFs::new())
}

/// API summary use case backed by the local file system
pub fn create_api_summary_use_case() -> ApiSummaryUseCase<LocalFs> {
    ApiSummaryUseCase::new(LocalFs::new())
}
