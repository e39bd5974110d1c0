//! quill benchmarking suite
//!
//! Parser throughput benchmarks plus the input generators they share.

pub mod common;

pub use common::*;
