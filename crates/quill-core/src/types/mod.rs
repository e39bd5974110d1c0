//! Core data types for parsed INI configuration.
//!
//! - `Configuration`: section name to `Section`
//! - `Section`: key to raw textual value

pub mod configuration;

pub use configuration::{Configuration, Section, DEFAULT_SECTION};
