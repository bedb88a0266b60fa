//! API summary options

use std::path::PathBuf;

/// File written inside the output directory unless configured otherwise
pub const DEFAULT_SUMMARY_FILE: &str = "api_summary.json";

/// Options for the api-summary command
#[derive(Debug, Clone)]
pub struct ApiSummaryOptions {
    /// Extension API description (JSON)
    pub api: PathBuf,
    /// Output folder, created if missing
    pub out_dir: PathBuf,
    /// Summary file name inside `out_dir`
    pub file_name: String,
}

impl ApiSummaryOptions {
    pub fn new(api: impl Into<PathBuf>, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            api: api.into(),
            out_dir: out_dir.into(),
            file_name: DEFAULT_SUMMARY_FILE.to_string(),
        }
    }

    /// Set summary file name
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    pub fn summary_path(&self) -> PathBuf {
        self.out_dir.join(&self.file_name)
    }
}
