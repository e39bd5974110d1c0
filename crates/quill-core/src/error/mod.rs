//! Error types and result aliases for quill operations.
//!
//! Parsing fails in exactly two ways: a line that is neither a section
//! header nor a key-value pair, or a failure of the underlying reader.

use thiserror::Error;

/// Unified error type for all quill operations
#[derive(Error, Debug)]
pub enum QuillError {
    #[error("cannot parse line {line_number}: {line:?}")]
    Parse {
        /// Offending text after comment stripping and trimming
        line: String,
        /// 1-based position in the input
        line_number: usize,
    },

    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for quill operations
pub type QuillResult<T> = Result<T, QuillError>;

impl QuillError {
    /// Create a malformed-line error
    pub fn parse(line: impl Into<String>, line_number: usize) -> Self {
        Self::Parse {
            line: line.into(),
            line_number,
        }
    }

    /// Create an IO error from std::io::Error
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, QuillError::Parse { .. })
    }

    pub fn is_io(&self) -> bool {
        matches!(self, QuillError::Io { .. })
    }

    /// The text of the line that failed to parse
    pub fn line(&self) -> Option<&str> {
        match self {
            QuillError::Parse { line, .. } => Some(line),
            QuillError::Io { .. } => None,
        }
    }

    /// Get a user-friendly suggestion for fixing this error
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            QuillError::Parse { line, .. } if line.starts_with('[') => {
                Some("Section headers must look like `[Name]` with a non-empty name and nothing after `]`")
            },
            QuillError::Parse { .. } => Some(
                "Each line must be a `[Section]` header, a `key = value` pair, blank, or a `;` comment",
            ),
            QuillError::Io { source, .. } if source.kind() == std::io::ErrorKind::InvalidData => {
                Some("The input must be valid UTF-8 text")
            },
            QuillError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound => {
                Some("Check that the file path is spelled correctly")
            },
            QuillError::Io { .. } => None,
        }
    }
}
