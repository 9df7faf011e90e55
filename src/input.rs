//! Keyword input handling
//!
//! Reads one line per prompt and normalizes it. An empty line ends the
//! session.

use std::io::{self, BufRead};
use thiserror::Error;

/// Errors that can occur while reading a keyword
#[derive(Debug, Error)]
pub enum InputError {
    /// The underlying reader failed (including invalid UTF-8)
    #[error("Failed to read input: {0}")]
    ReadFailed(#[from] io::Error),
}

/// Removes every line feed and carriage return from a line
pub fn normalize_line(line: &str) -> String {
    line.chars().filter(|c| *c != '\n' && *c != '\r').collect()
}

/// Reads the next keyword from the reader
///
/// Blocks until a full line is available. Returns `None` when the normalized
/// line is empty or the reader is exhausted, which ends the session.
pub fn read_keyword<R: BufRead>(reader: &mut R) -> Result<Option<String>, InputError> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    let keyword = normalize_line(&line);
    if keyword.is_empty() {
        Ok(None)
    } else {
        Ok(Some(keyword))
    }
}
