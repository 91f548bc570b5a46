//! Installed package inventory
//!
//! Enumerates what the managed interpreter can see right now. Every call to
//! [`EnvironmentInventory::list`] performs one fresh enumeration and returns a
//! self-contained [`InventorySnapshot`]; nothing is cached between calls and
//! the environment is never modified.

mod metadata;
mod snapshot;

pub use metadata::CoreMetadata;
pub use snapshot::InventorySnapshot;

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use walkdir::WalkDir;

use crate::domain::{PackageRecord, normalize_name};
use crate::error::{Result, inventory_unavailable};
use crate::runtime::Runtime;

const DIST_INFO_SUFFIX: &str = ".dist-info";
const EGG_INFO_SUFFIX: &str = ".egg-info";

/// Source of the "installed now" package list
pub trait EnvironmentInventory: Send + Sync {
    fn list(&self) -> Result<InventorySnapshot>;
}

/// Inventory read from `*.dist-info` / `*.egg-info` entries on `sys.path`
pub struct SitePackagesInventory {
    runtime: Arc<dyn Runtime>,
}

impl SitePackagesInventory {
    pub fn new(runtime: Arc<dyn Runtime>) -> Self {
        Self { runtime }
    }
}

impl EnvironmentInventory for SitePackagesInventory {
    fn list(&self) -> Result<InventorySnapshot> {
        let dirs = self.runtime.site_paths()?;
        scan_site_dirs(&dirs)
    }
}

/// Scan `dirs` in order. The first occurrence of a distribution wins, the
/// same way the interpreter resolves it.
pub fn scan_site_dirs(dirs: &[PathBuf]) -> Result<InventorySnapshot> {
    let mut seen = HashSet::new();
    let mut records = Vec::new();

    for dir in dirs {
        if !dir.is_dir() {
            // zip imports and stale entries
            continue;
        }
        tracing::debug!(dir = %dir.display(), "scanning site directory");

        for record in scan_dir(dir)? {
            if seen.insert(normalize_name(record.name())) {
                records.push(record);
            }
        }
    }

    Ok(InventorySnapshot::new(records))
}

fn scan_dir(dir: &Path) -> Result<Vec<PackageRecord>> {
    let mut records = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| inventory_unavailable(dir.display().to_string(), e.to_string()))?;
        let file_name = entry.file_name().to_string_lossy();

        let (stem, metadata_file) = if let Some(stem) = file_name.strip_suffix(DIST_INFO_SUFFIX) {
            (stem, entry.path().join("METADATA"))
        } else if let Some(stem) = file_name.strip_suffix(EGG_INFO_SUFFIX) {
            let path = if entry.file_type().is_dir() {
                entry.path().join("PKG-INFO")
            } else {
                entry.path().to_path_buf()
            };
            (stem, path)
        } else {
            continue;
        };

        // Partial or broken metadata is skipped rather than failing the scan
        let Ok(content) = std::fs::read_to_string(&metadata_file) else {
            tracing::debug!(path = %metadata_file.display(), "unreadable metadata, skipping");
            continue;
        };

        match CoreMetadata::parse(&content).into_record(metadata::version_from_dir_name(stem)) {
            Some(record) => records.push(record),
            None => tracing::debug!(path = %metadata_file.display(), "metadata without name"),
        }
    }

    Ok(records)
}
