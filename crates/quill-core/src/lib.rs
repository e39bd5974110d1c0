//! # quill-core
//!
//! Core types shared across all quill crates.
//!
//! This crate provides:
//! - `Configuration` and `Section`, the two-level result of parsing INI text
//! - `QuillError` enum for unified error handling
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `types`: Parsed configuration data
//! - `error`: Error types and result aliases

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{QuillError, QuillResult};
pub use types::{Configuration, Section, DEFAULT_SECTION};
