//! Parsed INI configuration.
//!
//! A `Configuration` maps section names to `Section`s, and each `Section`
//! maps keys to their raw textual values. Values are never coerced.

use serde::{Deserialize, Serialize};
use std::collections::hash_map;
use std::collections::HashMap;

/// Section name used for key-value lines that precede any `[header]`
pub const DEFAULT_SECTION: &str = "General";

/// Key-value pairs belonging to one section
pub type Section = HashMap<String, String>;

/// Complete result of parsing INI text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Configuration {
    sections: HashMap<String, Section>,
}

impl Configuration {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, creating the section on first write.
    ///
    /// A later insert of the same key in the same section overwrites the
    /// earlier value.
    pub fn insert(
        &mut self,
        section: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.sections
            .entry(section.into())
            .or_default()
            .insert(key.into(), value.into())
    }

    /// Get a section by name
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// Get a single value
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|s| s.get(key))
            .map(String::as_str)
    }

    /// Check if a section has at least one key
    pub fn contains_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// Section names in no particular order
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Number of sections
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Iterate over `(section name, section)` pairs
    pub fn iter(&self) -> hash_map::Iter<'_, String, Section> {
        self.sections.iter()
    }

    /// Consume the configuration, returning the underlying map
    pub fn into_inner(self) -> HashMap<String, Section> {
        self.sections
    }
}

impl From<HashMap<String, Section>> for Configuration {
    fn from(sections: HashMap<String, Section>) -> Self {
        Self { sections }
    }
}

impl<'a> IntoIterator for &'a Configuration {
    type Item = (&'a String, &'a Section);
    type IntoIter = hash_map::Iter<'a, String, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.iter()
    }
}

impl IntoIterator for Configuration {
    type Item = (String, Section);
    type IntoIter = hash_map::IntoIter<String, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.into_iter()
    }
}
