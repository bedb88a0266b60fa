//! Output Rendering
//!
//! Text lines for humans, NDJSON events (one JSON object per line) for
//! scripts and build systems.

use std::io::{self, Write};

use serde_json::json;

use crate::application::{ApiSummaryReport, GenerationReport};

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// NDJSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

pub fn embed_event(report: &GenerationReport) -> serde_json::Value {
    json!({
        "event": "complete",
        "command": "embed",
        "artifact": report.artifact.display().to_string(),
        "name": report.name.as_str(),
        "language": report.language,
        "bytes": report.byte_count,
        "lines": report.line_count,
    })
}

pub fn api_summary_event(report: &ApiSummaryReport) -> serde_json::Value {
    json!({
        "event": "complete",
        "command": "api-summary",
        "path": report.path.display().to_string(),
        "summary": report.summary,
    })
}

/// Render the completion of an embed
pub fn render_embed(
    out: &mut impl Write,
    format: OutputFormat,
    report: &GenerationReport,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", report.message()),
        OutputFormat::Json => write_event(out, &embed_event(report)),
    }
}

/// Render the completion of an API summary
pub fn render_api_summary(
    out: &mut impl Write,
    format: OutputFormat,
    report: &ApiSummaryReport,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", report.message()),
        OutputFormat::Json => write_event(out, &api_summary_event(report)),
    }
}
