//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/NDJSON)
//! - Logging setup
//!
//! ## Usage
//!
//! ```ignore
//! use embedgen::application::EmbedOptions;
//! use embedgen::presentation::factory;
//!
//! let report = factory::create_embed_use_case().execute(&EmbedOptions::new("ast.das"))?;
//! println!("{}", report.message());
//! ```

pub mod cli;
pub mod factory;
pub mod logging;
pub mod output;

pub use factory::{create_api_summary_use_case, create_embed_use_case};
