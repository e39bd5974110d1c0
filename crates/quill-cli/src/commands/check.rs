//! `quill check` command implementation.

use super::CommandContext;
use crate::error::CliResult;
use quill_core::Configuration;
use std::path::PathBuf;

/// Execute the `quill check` command
pub async fn execute(file: PathBuf, ctx: &CommandContext) -> CliResult<()> {
    let config = super::load(&file).await?;
    ctx.output.success(&summary(&file, &config));
    Ok(())
}

/// One-line description of a successfully parsed file
pub fn summary(file: &std::path::Path, config: &Configuration) -> String {
    let keys: usize = config.iter().map(|(_, section)| section.len()).sum();
    format!(
        "{} is valid ({} section{}, {} key{})",
        file.display(),
        config.len(),
        if config.len() == 1 { "" } else { "s" },
        keys,
        if keys == 1 { "" } else { "s" },
    )
}
