//! Domain Entities
//!
//! - `Asset` - A binary file read into memory
//! - `ApiSummary` - Aggregate counts over an API description

mod api_summary;
mod asset;

pub use api_summary::{ApiShapeError, ApiSummary};
pub use asset::Asset;
