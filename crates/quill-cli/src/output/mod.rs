//! Terminal output formatting and utilities.
//!
//! Keeps command output consistent: colored status lines on a TTY, plain
//! text otherwise, and rendering of parsed configurations.

pub mod colors;
pub mod errors;
pub mod render;

/// Output handler for consistent terminal formatting
pub struct OutputHandler {
    colors: colors::ColorSupport,
}

impl OutputHandler {
    /// Create a new output handler
    pub fn new() -> Self {
        Self {
            colors: colors::ColorSupport::detect(),
        }
    }

    /// Print raw command output to stdout
    pub fn print(&self, text: &str) {
        print!("{}", text);
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        println!("{}", self.colors.dim(message));
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        println!("{} {}", self.colors.green("✓"), message);
    }

    pub fn colors(&self) -> &colors::ColorSupport {
        &self.colors
    }
}

impl Default for OutputHandler {
    fn default() -> Self {
        Self::new()
    }
}
