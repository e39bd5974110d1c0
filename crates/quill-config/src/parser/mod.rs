//! INI text parsing.
//!
//! Input is consumed one line at a time and folded into a `Configuration`:
//!
//! ```text
//! [SectionName]
//! key = value          ; inline comment stripped
//! anotherKey=anotherValue
//! ```
//!
//! Key-value lines before the first header land in `General`. The first
//! line that is neither a header nor a key-value pair aborts the parse.

pub mod line;


use std::io::BufRead;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use quill_core::{Configuration, QuillError, DEFAULT_SECTION};

use crate::ConfigResult;
pub use line::{classify_line, strip_comment, Line};

/// Fold state for a single parse
#[derive(Debug)]
struct Accumulator {
    config: Configuration,
    current_section: String,
    line_number: usize,
}

impl Accumulator {
    fn new() -> Self {
        Self {
            config: Configuration::new(),
            current_section: DEFAULT_SECTION.to_string(),
            line_number: 0,
        }
    }

    fn feed(&mut self, raw: &str) -> ConfigResult<()> {
        self.line_number += 1;

        match classify_line(raw) {
            Line::Blank => {},
            Line::Section(name) => {
                // The section entry itself is created on its first key
                self.current_section = name.to_string();
            },
            Line::KeyValue { key, value } => {
                self.config
                    .insert(self.current_section.as_str(), key, value);
            },
            Line::Invalid(line) => {
                return Err(QuillError::parse(line, self.line_number));
            },
        }

        Ok(())
    }

    fn finish(self) -> Configuration {
        self.config
    }
}

/// Parse INI text from any buffered reader
pub fn parse<R: BufRead>(reader: R) -> ConfigResult<Configuration> {
    let mut acc = Accumulator::new();

    for line in reader.lines() {
        let line = line.map_err(|e| {
            QuillError::io(
                format!("Failed to read line {}", acc.line_number + 1),
                e,
            )
        })?;
        acc.feed(&line)?;
    }

    Ok(acc.finish())
}

/// Parse INI text held in memory
pub fn parse_str(content: &str) -> ConfigResult<Configuration> {
    parse(content.as_bytes())
}

/// Parse INI text from an async buffered reader
pub async fn parse_async<R>(reader: R) -> ConfigResult<Configuration>
where
    R: AsyncBufRead + Unpin,
{
    let mut acc = Accumulator::new();
    let mut lines = reader.lines();

    loop {
        let next = lines.next_line().await.map_err(|e| {
            QuillError::io(
                format!("Failed to read line {}", acc.line_number + 1),
                e,
            )
        })?;

        match next {
            Some(line) => acc.feed(&line)?,
            None => break,
        }
    }

    Ok(acc.finish())
}
