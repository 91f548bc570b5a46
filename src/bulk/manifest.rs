//! Requirements manifest reading
//!
//! One requirement specifier per line, surrounding whitespace trimmed,
//! blank lines dropped. There is no comment syntax; every other line is an
//! entry, even if pip would later reject it.

use std::path::Path;

use crate::error::{Result, manifest_not_found};

/// Read the ordered entries of the manifest at `path`.
///
/// Fails with `ManifestNotFound` when `path` is not a readable file.
pub fn read_manifest(path: &Path) -> Result<Vec<String>> {
    if !path.is_file() {
        return Err(manifest_not_found(path.display().to_string()));
    }

    let bytes = std::fs::read(path).map_err(|e| {
        tracing::debug!(path = %path.display(), error = %e, "manifest unreadable");
        manifest_not_found(path.display().to_string())
    })?;

    Ok(parse_manifest(&String::from_utf8_lossy(&bytes)))
}

/// Split manifest text into entries
pub fn parse_manifest(content: &str) -> Vec<String> {
    content
        .trim_start_matches('\u{feff}')
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
