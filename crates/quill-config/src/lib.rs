//! INI configuration parsing for quill
//!
//! This crate turns INI text into a `Configuration`: a map of section names
//! to key-value sections. Input can come from any buffered reader, an async
//! reader, or a file on disk.

pub mod file;
pub mod parser;

// Re-export main entry points
pub use file::{load_from_file, parse_file};
pub use parser::{classify_line, parse, parse_async, parse_str, Line};

pub use quill_core::{Configuration, QuillError, Section, DEFAULT_SECTION};

/// Result type for configuration operations
pub type ConfigResult<T> = quill_core::QuillResult<T>;
