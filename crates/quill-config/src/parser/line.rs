//! Single-line classification.
//!
//! A line is classified after its `;` comment is removed and surrounding
//! whitespace is trimmed. Classification is stateless; tracking the current
//! section is left to the accumulator.

/// What a single input line turned out to be
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// Empty after comment stripping and trimming
    Blank,
    /// `[Name]` header, carrying the name
    Section(&'a str),
    /// `key = value` pair
    KeyValue { key: &'a str, value: &'a str },
    /// Anything else, carrying the stripped and trimmed text
    Invalid(&'a str),
}

/// Remove the first `;` and everything after it, then trim
pub fn strip_comment(raw: &str) -> &str {
    let uncommented = match raw.find(';') {
        Some(pos) => &raw[..pos],
        None => raw,
    };
    uncommented.trim()
}

/// Classify one raw input line
pub fn classify_line(raw: &str) -> Line<'_> {
    let line = strip_comment(raw);

    if line.is_empty() {
        return Line::Blank;
    }

    if let Some(name) = section_name(line) {
        return Line::Section(name);
    }

    match key_value(line) {
        Some((key, value)) => Line::KeyValue { key, value },
        None => Line::Invalid(line),
    }
}

/// Matches `^\[([^\]]+)\]$`
fn section_name(line: &str) -> Option<&str> {
    let inner = line.strip_prefix('[')?.strip_suffix(']')?;
    if inner.is_empty() || inner.contains(']') {
        return None;
    }
    Some(inner)
}

/// Matches `^([^=]+)\s*=\s*(.+)$`.
///
/// The key runs up to the first `=` and keeps any trailing whitespace, since
/// `[^=]+` swallows it before `\s*` gets a chance. Only the whitespace right
/// after `=` is dropped from the value.
fn key_value(line: &str) -> Option<(&str, &str)> {
    let (key, rest) = line.split_once('=')?;
    if key.is_empty() {
        return None;
    }

    let value = rest.trim_start_matches(is_pattern_space);
    if value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// The `\s` class: ASCII space, tab, newline, form feed and carriage return
fn is_pattern_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0C' | '\r')
}
