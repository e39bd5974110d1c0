//! Error message formatting with actionable suggestions.

use super::colors::ColorSupport;
use crate::error::CliError;
use std::error::Error;

/// Error formatter with suggestions
pub struct ErrorFormatter {
    colors: ColorSupport,
}

impl ErrorFormatter {
    /// Create a new error formatter
    pub fn new() -> Self {
        Self::with_colors(ColorSupport::detect())
    }

    pub fn with_colors(colors: ColorSupport) -> Self {
        Self { colors }
    }

    /// Format an error with context and suggestions
    pub fn format_error(&self, error: &CliError) -> String {
        let mut output = String::new();

        output.push_str(&self.colors.red("error"));
        output.push_str(": ");
        output.push_str(&error.to_string());
        output.push('\n');

        // Source chain, e.g. the OS error behind a failed open
        let mut source = error.source();
        while let Some(err) = source {
            output.push_str(&self.colors.dim("caused by"));
            output.push_str(": ");
            output.push_str(&err.to_string());
            output.push('\n');
            source = err.source();
        }

        if let Some(suggestion) = error.suggestion() {
            output.push_str(&self.colors.dim("help"));
            output.push_str(": ");
            output.push_str(suggestion);
            output.push('\n');
        }

        output
    }
}

impl Default for ErrorFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_core::QuillError;
    use std::io;

    #[test]
    fn test_format_parse_error() {
        let formatter = ErrorFormatter::with_colors(ColorSupport::disabled());
        let err = CliError::from(QuillError::parse("[Bad", 3));

        let text = formatter.format_error(&err);
        assert!(text.starts_with("error: cannot parse line 3: \"[Bad\"\n"));
        assert!(text.contains("help: Section headers"));
        assert!(!text.contains("caused by"));
    }

    #[test]
    fn test_format_io_error_includes_cause() {
        let formatter = ErrorFormatter::with_colors(ColorSupport::disabled());
        let err = CliError::from(QuillError::io(
            "Failed to open app.ini",
            io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        ));

        let text = formatter.format_error(&err);
        assert!(text.contains("error: IO error: Failed to open app.ini"));
        assert!(text.contains("caused by: No such file or directory"));
        assert!(text.contains("help: Check that the file path"));
    }
}
