//! Configuration module for embedgen
//!
//! Precedence:
//! 1. CLI flags (highest priority)
//! 2. Config file given with `--config` (TOML)
//! 3. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::ConfigWarning;
pub use types::{ApiConfig, Config, EmitConfig};
