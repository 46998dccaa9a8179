//! File helpers for rewriting Markdown documents.

use std::{fs, path::Path};

use crate::process::refresh_lines;

/// Refresh a file's TOC and headings in place.
///
/// # Errors
/// Returns an error if reading or writing the file fails.
pub fn rewrite(path: &Path) -> std::io::Result<()> {
    let text = fs::read_to_string(path)?;
    let lines: Vec<String> = text.lines().map(str::to_string).collect();
    let refreshed = refresh_lines(&lines);
    fs::write(path, refreshed.join("\n") + "\n")
}
