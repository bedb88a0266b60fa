//! Command handlers for the embedgen binary

pub mod api_summary;
pub mod embed;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::warn;

use embedgen::Config;

/// Load `--config` when given, otherwise built-in defaults
///
/// Unknown keys are reported as warnings and otherwise ignored.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };

    let (config, warnings) = Config::load_with_warnings(path)
        .with_context(|| format!("failed to load config {}", path.display()))?;
    for warning in &warnings {
        warn!("{}", warning);
    }
    Ok(config)
}
