//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::application::api_summary::DEFAULT_SUMMARY_FILE;
use crate::domain::value_objects::{
    ArrayLayout, Language, LiteralFormat, DEFAULT_GROUP_SIZE, DEFAULT_HEX_PREFIX,
};
use crate::error::EmbedResult;

use super::loader::{self, ConfigWarning};

/// Array emission configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmitConfig {
    /// Bytes per inner line
    #[serde(default = "default_group_size")]
    pub group_size: usize,

    #[serde(default)]
    pub language: Language,

    #[serde(default = "default_hex_prefix")]
    pub hex_prefix: String,

    #[serde(default)]
    pub uppercase: bool,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            group_size: default_group_size(),
            language: Language::default(),
            hex_prefix: default_hex_prefix(),
            uppercase: false,
        }
    }
}

fn default_group_size() -> usize {
    DEFAULT_GROUP_SIZE
}

fn default_hex_prefix() -> String {
    DEFAULT_HEX_PREFIX.to_string()
}

/// API summary configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_summary_file")]
    pub summary_file: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            summary_file: default_summary_file(),
        }
    }
}

fn default_summary_file() -> String {
    DEFAULT_SUMMARY_FILE.to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub emit: EmitConfig,

    #[serde(default)]
    pub api: ApiConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> EmbedResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> EmbedResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Emitter layout described by the `[emit]` section
    pub fn layout(&self) -> ArrayLayout {
        ArrayLayout::new()
            .with_group_size(self.emit.group_size)
            .with_language(self.emit.language)
            .with_literal(LiteralFormat::new(
                self.emit.hex_prefix.clone(),
                self.emit.uppercase,
            ))
    }
}
