//! API Summary Use Case
//!
//! Reads an extension API description, counts its sections, and writes the
//! counts as pretty-printed JSON for a downstream binding generator.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::domain::entities::ApiSummary;
use crate::domain::ports::FileSystem;
use crate::error::{EmbedError, EmbedResult};

use super::options::ApiSummaryOptions;

/// Result of a summary run
#[derive(Debug, Clone, PartialEq)]
pub struct ApiSummaryReport {
    /// Summary file that was written
    pub path: PathBuf,
    pub summary: ApiSummary,
}

impl ApiSummaryReport {
    /// Human-readable completion line
    pub fn message(&self) -> String {
        format!(
            "Generated {} ({} classes, {} builtin classes, {} global enums)",
            self.path.display(),
            self.summary.class_count,
            self.summary.builtin_class_count,
            self.summary.global_enum_count
        )
    }
}

/// API summary use case
pub struct ApiSummaryUseCase<FS>
where
    FS: FileSystem,
{
    fs: FS,
}

impl<FS> ApiSummaryUseCase<FS>
where
    FS: FileSystem,
{
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    /// Parse and summarize the API document without writing anything
    pub fn summarize(&self, options: &ApiSummaryOptions) -> EmbedResult<ApiSummary> {
        let content = self.fs.read_to_string(&options.api)?;
        debug!(path = %options.api.display(), bytes = content.len(), "read API description");

        let invalid = |message: String| EmbedError::InvalidApi {
            path: options.api.clone(),
            message,
        };
        let document: serde_json::Value =
            serde_json::from_str(&content).map_err(|e| invalid(e.to_string()))?;
        ApiSummary::from_document(&document).map_err(|e| invalid(e.to_string()))
    }

    /// Summarize and write `<out_dir>/<file_name>`
    pub fn execute(&self, options: &ApiSummaryOptions) -> EmbedResult<ApiSummaryReport> {
        let summary = self.summarize(options)?;

        self.fs.create_dir_all(&options.out_dir)?;
        let path = options.summary_path();
        let json = serde_json::to_string_pretty(&summary)?;
        self.fs.write(&path, &json)?;
        info!(
            path = %path.display(),
            classes = summary.class_count,
            builtin_classes = summary.builtin_class_count,
            global_enums = summary.global_enum_count,
            "wrote API summary"
        );

        Ok(ApiSummaryReport { path, summary })
    }
}
