//! Emitting results as pretty JSON to stdout or a file.
//!
//! Responsibilities:
//! - Serialize event arrays, filtered attribute arrays, and counts.
//! - Write files atomically: temp file in the destination directory, then rename.
//!
//! Invariants:
//! - Stdout carries results only; status lines go to stderr.
//! - A failed write leaves no temp file behind and never a partial destination file.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tempfile::NamedTempFile;

use crate::error::OutputWriteError;

/// Serialize `value` as pretty JSON and send it to `out_file` or stdout.
pub fn emit<T: Serialize + ?Sized>(value: &T, out_file: Option<&Path>) -> Result<()> {
    let mut rendered =
        serde_json::to_string_pretty(value).context("Failed to serialize results")?;
    rendered.push('\n');

    match out_file {
        Some(path) => {
            write_to_file(&rendered, path)?;
            eprintln!("Results written to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .and_then(|()| stdout.flush())
                .context("Failed to write results to stdout")?;
        }
    }
    Ok(())
}

/// Write `content` to `path` atomically, creating parent directories as needed.
pub fn write_to_file(content: &str, path: &Path) -> Result<(), OutputWriteError> {
    let wrap = |source| OutputWriteError {
        path: path.to_path_buf(),
        source,
    };

    // A bare file name has an empty parent; use the current directory.
    let parent_dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent_dir).map_err(wrap)?;

    // NamedTempFile removes itself on drop, so every early return cleans up.
    let mut temp_file = NamedTempFile::new_in(parent_dir).map_err(wrap)?;
    temp_file.write_all(content.as_bytes()).map_err(wrap)?;
    temp_file.flush().map_err(wrap)?;
    temp_file.persist(path).map_err(|e| wrap(e.error))?;

    Ok(())
}
