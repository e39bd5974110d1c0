//! Errors surfaced by CLI commands

use quill_core::QuillError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Quill(#[from] QuillError),

    #[error("Section '{section}' not found in {file}")]
    MissingSection { section: String, file: String },

    #[error("Key '{key}' not found in section '{section}' of {file}")]
    MissingKey {
        section: String,
        key: String,
        file: String,
    },

    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to create async runtime")]
    Runtime(#[source] std::io::Error),
}

pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get a user-friendly suggestion for fixing this error
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            CliError::Quill(err) => err.suggestion(),
            CliError::MissingSection { .. } => {
                Some("Run 'quill show <FILE>' to list the sections that were parsed")
            },
            CliError::MissingKey { .. } => Some(
                "Keys keep any spaces before '=': `host = x` defines the key \"host \"",
            ),
            _ => None,
        }
    }
}
