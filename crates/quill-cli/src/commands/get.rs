//! `quill get` command implementation.

use super::CommandContext;
use crate::error::{CliError, CliResult};
use quill_core::Configuration;
use std::path::{Path, PathBuf};

/// Execute the `quill get` command
pub async fn execute(
    file: PathBuf,
    section: String,
    key: String,
    ctx: &CommandContext,
) -> CliResult<()> {
    let config = super::load(&file).await?;
    let value = lookup(&config, &section, &key, &file)?;
    ctx.output.print(&format!("{}\n", value));
    Ok(())
}

/// Find a value, reporting which part of the path is missing
pub fn lookup<'a>(
    config: &'a Configuration,
    section: &str,
    key: &str,
    file: &Path,
) -> CliResult<&'a str> {
    let entries = config
        .section(section)
        .ok_or_else(|| CliError::MissingSection {
            section: section.to_string(),
            file: file.display().to_string(),
        })?;

    entries
        .get(key)
        .map(String::as_str)
        .ok_or_else(|| CliError::MissingKey {
            section: section.to_string(),
            key: key.to_string(),
            file: file.display().to_string(),
        })
}
