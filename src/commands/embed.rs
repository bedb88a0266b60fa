use std::path::PathBuf;

use anyhow::{Context, Result};

use embedgen::presentation::factory::create_embed_use_case;
use embedgen::presentation::output::{render_embed, OutputFormat};
use embedgen::{ArrayLayout, Config, EmbedOptions, Language};

/// Flags of `embedgen embed`
#[derive(Debug, Clone)]
pub struct EmbedArgs {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub name: Option<String>,
    pub language: Option<Language>,
    pub group_size: Option<usize>,
}

/// Config layout with any flags applied on top
fn layout_for(config: &Config, args: &EmbedArgs) -> ArrayLayout {
    let mut layout = config.layout();
    if let Some(language) = args.language {
        layout = layout.with_language(language);
    }
    if let Some(group_size) = args.group_size {
        layout = layout.with_group_size(group_size);
    }
    layout
}

pub fn cmd_embed(config: &Config, args: EmbedArgs, format: OutputFormat) -> Result<()> {
    let layout = layout_for(config, &args);
    let options = EmbedOptions::new(args.input)
        .with_output(args.output)
        .with_name(args.name)
        .with_layout(layout);

    let report = create_embed_use_case()
        .execute(&options)
        .with_context(|| format!("failed to embed {}", options.input.display()))?;

    let mut out = std::io::stdout().lock();
    render_embed(&mut out, format, &report)?;
    Ok(())
}
