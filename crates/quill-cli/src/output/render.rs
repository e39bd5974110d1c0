//! Rendering parsed configurations for display.
//!
//! Sections and keys are sorted so output is stable across runs. Text
//! output writes `key=value` with the key exactly as parsed, so feeding it
//! back through the parser yields the same configuration.

use super::colors::ColorSupport;
use quill_core::{Configuration, Section};
use std::collections::BTreeMap;

/// Render sections as INI text
pub fn render_text<'a, I>(sections: I, colors: &ColorSupport) -> String
where
    I: IntoIterator<Item = (&'a String, &'a Section)>,
{
    let sorted: BTreeMap<&String, &Section> = sections.into_iter().collect();
    let mut output = String::new();

    for (i, (name, section)) in sorted.into_iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(&colors.cyan(&format!("[{}]", name)));
        output.push('\n');

        let keys: BTreeMap<&String, &String> = section.iter().collect();
        for (key, value) in keys {
            output.push_str(&format!("{}={}\n", key, value));
        }
    }

    output
}

/// Render the whole configuration as pretty JSON with sorted keys
pub fn render_json(config: &Configuration) -> serde_json::Result<String> {
    let sorted: BTreeMap<&String, BTreeMap<&String, &String>> = config
        .iter()
        .map(|(name, section)| (name, section.iter().collect()))
        .collect();
    serde_json::to_string_pretty(&sorted)
}
