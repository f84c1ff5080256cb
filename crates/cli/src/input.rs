//! Reading search values from `--in_file`.

use std::path::Path;

use anyhow::{Context, Result};

/// Newline-delimited values with surrounding whitespace trimmed; blank lines are skipped.
pub fn read_values(path: &Path) -> Result<Vec<String>> {
    let text = read_text(path)?;
    Ok(parse_values(&text))
}

/// Whole file contents, for a raw JSON query.
pub fn read_raw(path: &Path) -> Result<String> {
    read_text(path)
}

fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))
}

fn parse_values(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
