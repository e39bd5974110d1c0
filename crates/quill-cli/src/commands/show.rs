//! `quill show` command implementation.

use super::CommandContext;
use crate::error::{CliError, CliResult};
use crate::output::render::{render_json, render_text};
use quill_core::Configuration;
use std::collections::HashMap;
use std::path::PathBuf;

/// Execute the `quill show` command
pub async fn execute(
    file: PathBuf,
    json: bool,
    section: Option<String>,
    ctx: &CommandContext,
) -> CliResult<()> {
    let config = super::load(&file).await?;
    let config = match section {
        Some(name) => only_section(config, &name, &file)?,
        None => config,
    };

    let text = if json {
        let mut rendered = render_json(&config)?;
        rendered.push('\n');
        rendered
    } else {
        render_text(&config, ctx.output.colors())
    };

    ctx.output.print(&text);
    Ok(())
}

/// Narrow a configuration down to one section
pub fn only_section(
    config: Configuration,
    name: &str,
    file: &std::path::Path,
) -> CliResult<Configuration> {
    config
        .into_inner()
        .remove_entry(name)
        .map(|entry| Configuration::from(HashMap::from([entry])))
        .ok_or_else(|| CliError::MissingSection {
            section: name.to_string(),
            file: file.display().to_string(),
        })
}
