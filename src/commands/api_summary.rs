use std::path::Path;

use anyhow::{Context, Result};

use embedgen::presentation::factory::create_api_summary_use_case;
use embedgen::presentation::output::{render_api_summary, OutputFormat};
use embedgen::{ApiSummaryOptions, Config};

pub fn cmd_api_summary(
    config: &Config,
    api: &Path,
    out: &Path,
    format: OutputFormat,
) -> Result<()> {
    let options =
        ApiSummaryOptions::new(api, out).with_file_name(config.api.summary_file.clone());

    let report = create_api_summary_use_case()
        .execute(&options)
        .with_context(|| format!("failed to summarize {}", api.display()))?;

    let mut stdout = std::io::stdout().lock();
    render_api_summary(&mut stdout, format, &report)?;
    Ok(())
}
