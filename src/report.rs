//! Console output of the search session
//!
//! All writers take a generic `Write` so the exact output can be checked
//! in tests.

use crate::catalog_search::SearchResultItem;
use std::fmt::Display;
use std::io::{self, Write};

const BANNER_TITLE: &str = "Bilibili Anime App Search";
const BANNER_RULE: &str = "---------------------";
const RESULT_HEADER: &str = "Search Result:";
const RESULT_SEPARATOR: &str = "----------------";
const PROMPT: &str = "Keyword -> ";

/// Writes the banner shown once at startup
pub fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", BANNER_TITLE)?;
    writeln!(out, "{}", BANNER_RULE)
}

/// Writes the keyword prompt and flushes it, since it has no newline
pub fn write_prompt<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "{}", PROMPT)?;
    out.flush()
}

/// Writes a result block: header, one line per item, separator
pub fn write_results<W: Write>(out: &mut W, items: &[SearchResultItem]) -> io::Result<()> {
    writeln!(out, "{}", RESULT_HEADER)?;
    for item in items {
        writeln!(out, "({}) {}", item.season_id, item.title)?;
    }
    writeln!(out, "{}", RESULT_SEPARATOR)
}

/// Writes a failure line for a read or search error
pub fn write_failure<W: Write, E: Display>(out: &mut W, error: &E) -> io::Result<()> {
    writeln!(out, "Search failed: {}", error)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(items: &[SearchResultItem]) -> String {
        let mut out = Vec::new();
        write_results(&mut out, items).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_write_results() {
        let items = vec![SearchResultItem {
            season_id: 42,
            title: "Demo Show".to_string(),
            cover: "http://x/y.jpg".to_string(),
        }];
        assert_eq!(render(&items), "Search Result:\n(42) Demo Show\n----------------\n");
    }

    #[test]
    fn test_write_results_empty() {
        assert_eq!(render(&[]), "Search Result:\n----------------\n");
    }

    #[test]
    fn test_write_prompt_and_banner() {
        let mut out = Vec::new();
        write_banner(&mut out).unwrap();
        write_prompt(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Bilibili Anime App Search\n---------------------\nKeyword -> "
        );
    }
}
