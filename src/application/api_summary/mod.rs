//! API Summary Use Case
//!
//! Scaffold for binding generation: only aggregate counts are produced.

mod options;
mod use_case;

pub use options::{ApiSummaryOptions, DEFAULT_SUMMARY_FILE};
pub use use_case::{ApiSummaryReport, ApiSummaryUseCase};
