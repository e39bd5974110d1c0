//! Common utilities for benchmarks

use criterion::Criterion;
use pprof::criterion::{Output, PProfProfiler};

/// Configure criterion with flamegraph profiling support
pub fn criterion_config() -> Criterion {
    Criterion::default()
        .warm_up_time(std::time::Duration::from_secs(3))
        .measurement_time(std::time::Duration::from_secs(10))
        .sample_size(100)
        .with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)))
}

/// Generate INI text with `sections` headers of `keys_per_section` pairs each.
///
/// Every fourth pair carries a trailing comment and a blank line follows
/// each section, so all line kinds are exercised.
pub fn create_ini_content(sections: usize, keys_per_section: usize) -> String {
    let mut content = String::from("; generated benchmark input\nversion = 1\n\n");

    for s in 0..sections {
        content.push_str(&format!("[section_{}]\n", s));
        for k in 0..keys_per_section {
            if k % 4 == 0 {
                content.push_str(&format!("key_{} = value_{}_{} ; note\n", k, s, k));
            } else {
                content.push_str(&format!("key_{}=value_{}_{}\n", k, s, k));
            }
        }
        content.push('\n');
    }

    content
}
