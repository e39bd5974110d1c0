//! Command implementations and dispatch logic.
//!
//! Each command is an async function taking the shared `CommandContext`.

use tracing::info;

pub mod check;
pub mod get;
pub mod show;


use camino::Utf8Path;
use quill_config::{load_from_file, parse_file};
use quill_core::Configuration;
use std::path::Path;

use crate::error::CliResult;
use crate::{output::OutputHandler, Commands};

/// Shared context for all commands
pub struct CommandContext {
    pub output: OutputHandler,
}

impl CommandContext {
    /// Create a new command context
    pub fn new() -> Self {
        Self {
            output: OutputHandler::new(),
        }
    }
}

/// Dispatch a command to its handler
pub async fn dispatch_command(command: Commands, ctx: &CommandContext) -> CliResult<()> {
    match command {
        Commands::Check { file } => {
            info!("Checking {}", file.display());
            check::execute(file, ctx).await
        },
        Commands::Show { file, json, section } => {
            info!("Showing {} (json: {}, section: {:?})", file.display(), json, section);
            show::execute(file, json, section, ctx).await
        },
        Commands::Get { file, section, key } => {
            info!("Reading [{}] {} from {}", section, key, file.display());
            get::execute(file, section, key, ctx).await
        },
        Commands::Version => show_version(ctx),
    }
}

/// Parse a file, reading asynchronously when the path is UTF-8
pub async fn load(file: &Path) -> CliResult<Configuration> {
    let config = match Utf8Path::from_path(file) {
        Some(path) => load_from_file(path).await?,
        None => parse_file(file)?,
    };
    Ok(config)
}

fn show_version(ctx: &CommandContext) -> CliResult<()> {
    let target = format!("{}-{}", std::env::consts::ARCH, std::env::consts::OS);

    ctx.output.print(&format!("quill v{}\n", env!("CARGO_PKG_VERSION")));
    ctx.output.info(&format!("Built: {}", env!("BUILD_DATE")));
    ctx.output.info(&format!("Target: {}", target));
    Ok(())
}
