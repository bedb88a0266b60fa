//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --verbose, --config) are inherited by all subcommands
//! - Emit flags override the `[emit]` section of the config file

use std::path::PathBuf;

use crate::domain::value_objects::Language;
use clap::{Parser, Subcommand};

/// embedgen - embed binary assets as source arrays
#[derive(Parser, Debug)]
#[command(name = "embedgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (TOML)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Embed a binary file as a source-level byte array
    Embed {
        /// Binary asset to embed
        input: PathBuf,

        /// Output file (default: <INPUT>.inc)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Array identifier (default: derived from the input file name)
        #[arg(short, long, value_name = "IDENT")]
        name: Option<String>,

        /// Target embedding language
        #[arg(short, long, value_enum)]
        language: Option<Language>,

        /// Bytes per line
        #[arg(short, long, value_name = "N", value_parser = parse_group_size)]
        group_size: Option<usize>,
    },

    /// Summarize an extension API description (JSON)
    ApiSummary {
        /// Path to extension_api.json
        #[arg(long, value_name = "FILE")]
        api: PathBuf,

        /// Output folder
        #[arg(long, value_name = "DIR")]
        out: PathBuf,
    },
}

fn parse_group_size(s: &str) -> Result<usize, String> {
    let n: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a positive integer", s))?;
    if n == 0 {
        return Err("group size must be at least 1".to_string());
    }
    Ok(n)
}
