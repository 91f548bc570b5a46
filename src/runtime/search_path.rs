//! Extra import directories for the managed interpreter
//!
//! Probes run in a fresh interpreter, so directories discovered after an
//! install (the user site directory) are handed to it through `PYTHONPATH`.
//! Entries are only ever appended.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Ordered, duplicate-free list of directories appended to `sys.path`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPath {
    entries: Vec<PathBuf>,
}

impl SearchPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `dir` is already present, comparing canonical forms
    pub fn contains(&self, dir: &Path) -> bool {
        let wanted = canonical(dir);
        self.entries.iter().any(|entry| canonical(entry) == wanted)
    }

    /// Append `dir` unless present. Returns whether it was added.
    pub fn append(&mut self, dir: impl Into<PathBuf>) -> bool {
        let dir = dir.into();
        if self.contains(&dir) {
            return false;
        }
        self.entries.push(dir);
        true
    }

    /// Value for `PYTHONPATH`: the inherited value followed by our entries.
    ///
    /// Returns `None` when there is nothing to add.
    pub fn to_env(&self, inherited: Option<OsString>) -> Option<OsString> {
        if self.is_empty() {
            return None;
        }

        let mut paths: Vec<PathBuf> = inherited
            .as_deref()
            .map(|value| std::env::split_paths(value).collect())
            .unwrap_or_default();
        paths.extend(self.entries.iter().cloned());

        std::env::join_paths(paths).ok()
    }
}

fn canonical(path: &Path) -> PathBuf {
    dunce::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_append_deduplicates() {
        let mut path = SearchPath::new();
        assert!(path.append("/opt/site"));
        assert!(!path.append("/opt/site"));
        assert_eq!(path.entries().len(), 1);
    }

    #[test]
    fn test_contains_compares_canonical_paths() {
        let temp = TempDir::new().unwrap();
        let site = temp.path().join("site");
        std::fs::create_dir_all(&site).unwrap();

        let mut path = SearchPath::new();
        path.append(&site);
        assert!(path.contains(&temp.path().join("site/../site")));
    }

    #[test]
    fn test_append_keeps_order() {
        let mut path = SearchPath::new();
        path.append("/a");
        path.append("/b");
        assert_eq!(path.entries(), [PathBuf::from("/a"), PathBuf::from("/b")]);
    }

    #[test]
    fn test_to_env_empty_is_none() {
        let path = SearchPath::new();
        assert!(path.is_empty());
        assert_eq!(path.to_env(Some(OsString::from("/x"))), None);
    }

    #[test]
    fn test_to_env_appends_after_inherited() {
        let mut path = SearchPath::new();
        path.append("/user/site");

        let value = path.to_env(Some(OsString::from("/inherited"))).unwrap();
        let parts: Vec<PathBuf> = std::env::split_paths(&value).collect();
        assert_eq!(
            parts,
            [PathBuf::from("/inherited"), PathBuf::from("/user/site")]
        );
    }
}
