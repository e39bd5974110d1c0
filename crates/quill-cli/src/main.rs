//! # quill-cli
//!
//! Command-line front end for the quill INI parser.
//!
//! Sets up logging, parses arguments, and dispatches to the command
//! handlers. Files are only ever read; nothing is written back.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

mod commands;
mod error;
mod output;

use commands::CommandContext;
use error::{CliError, CliResult};
use output::errors::ErrorFormatter;

/// Parse and inspect INI configuration files
#[derive(Parser)]
#[command(name = "quill", version, about = "Parse and inspect INI files")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check that a file parses
    Check {
        file: PathBuf,
    },
    /// Print the parsed configuration
    Show {
        file: PathBuf,
        /// Print as JSON
        #[arg(long)]
        json: bool,
        /// Only print this section
        #[arg(short, long)]
        section: Option<String>,
    },
    /// Print a single value
    Get {
        file: PathBuf,
        section: String,
        key: String,
    },
    /// Show version information
    Version,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose);
    setup_panic_handler();

    debug!("Starting quill v{}", env!("CARGO_PKG_VERSION"));

    match run_cli(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprint!("{}", ErrorFormatter::new().format_error(&err));
            ExitCode::FAILURE
        },
    }
}

fn run_cli(cli: Cli) -> CliResult<()> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(CliError::Runtime)?;

    rt.block_on(async {
        let ctx = CommandContext::new();
        commands::dispatch_command(cli.command, &ctx).await
    })
}

fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!(
            "quill={},quill_config={}",
            level, level
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn setup_panic_handler() {
    std::panic::set_hook(Box::new(|panic_info| {
        tracing::error!("quill encountered an unexpected error: {}", panic_info);
        eprintln!("quill crashed! This is a bug.");
        eprintln!("Error: {}", panic_info);
    }));
}
