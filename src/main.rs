//! embedgen CLI - build-time asset embedding
//!
//! Usage: embedgen <COMMAND>
//!
//! Commands:
//!   embed        Embed a binary file as a source-level byte array
//!   api-summary  Summarize an extension API description (JSON)

use anyhow::Result;
use clap::Parser;

use embedgen::presentation::cli::{Cli, Commands};
use embedgen::presentation::logging;
use embedgen::presentation::output::OutputFormat;

mod commands;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = commands::load_config(cli.config.as_deref())?;
    let format = OutputFormat::from_json_flag(cli.json);

    match cli.command {
        Commands::Embed {
            input,
            output,
            name,
            language,
            group_size,
        } => commands::embed::cmd_embed(
            &config,
            commands::embed::EmbedArgs {
                input,
                output,
                name,
                language,
                group_size,
            },
            format,
        ),
        Commands::ApiSummary { api, out } => {
            commands::api_summary::cmd_api_summary(&config, &api, &out, format)
        }
    }
}
