//! Test fixtures and fakes shared by unit tests.
//!
//! - temp directories with fake site-packages entries and manifests
//! - [`FakeEnvironment`], a scripted stand-in for the interpreter that
//!   implements [`Runtime`], [`PackageManager`] and [`EnvironmentInventory`]
//!   and records every pip step it is asked to run
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::{FakeEnvironment, create_temp_dir, write_manifest};
//!
//! let env = Arc::new(FakeEnvironment::new().with_importable("requests"));
//! let temp = create_temp_dir();
//! let manifest = write_manifest(temp.path(), &["requests", "", "flask"]);
//! ```

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tempfile::TempDir;

use crate::domain::{PackageRecord, Requirement};
use crate::error::{Result, inventory_unavailable};
use crate::inventory::{EnvironmentInventory, InventorySnapshot};
use crate::runtime::{PackageManager, PipStep, ProcessOutput, Runtime, SearchPath};

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Write `<name>-<version>.dist-info/METADATA` under `site`
pub fn write_dist_info(site: &Path, name: &str, version: &str) -> PathBuf {
    let dir = site.join(format!("{name}-{version}.dist-info"));
    std::fs::create_dir_all(&dir).expect("Failed to create dist-info directory");
    std::fs::write(
        dir.join("METADATA"),
        format!("Metadata-Version: 2.1\nName: {name}\nVersion: {version}\nSummary: {name} for tests\n"),
    )
    .expect("Failed to write METADATA");
    dir
}

/// Write `<name>-<version>.egg-info/PKG-INFO` under `site`
pub fn write_egg_info(site: &Path, name: &str, version: &str) -> PathBuf {
    let dir = site.join(format!("{name}-{version}.egg-info"));
    std::fs::create_dir_all(&dir).expect("Failed to create egg-info directory");
    std::fs::write(
        dir.join("PKG-INFO"),
        format!("Metadata-Version: 1.0\nName: {name}\nVersion: {version}\nLicense: UNKNOWN\n"),
    )
    .expect("Failed to write PKG-INFO");
    dir
}

/// Write a requirements manifest, one line per entry
pub fn write_manifest(dir: &Path, lines: &[&str]) -> PathBuf {
    let path = dir.join("requirements.txt");
    std::fs::write(&path, lines.join("\n")).expect("Failed to write manifest");
    path
}

/// Scripted interpreter environment
#[derive(Default)]
pub struct FakeEnvironment {
    importable: Mutex<HashSet<String>>,
    /// Modules pip installed; importable only once `user_site` is on the search path
    installed_modules: Mutex<HashSet<String>>,
    records: Mutex<Vec<PackageRecord>>,
    site_dirs: Vec<PathBuf>,
    user_site: Option<PathBuf>,
    failing_steps: Vec<PipStep>,
    broken_imports: HashSet<String>,
    spawn_fails: bool,
    inventory_fails: bool,
    calls: Mutex<Vec<PipStep>>,
    probes: Mutex<Vec<String>>,
}

impl FakeEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    /// A module that imports before anything is installed
    #[must_use]
    pub fn with_importable(self, module: &str) -> Self {
        self.importable.lock().unwrap().insert(module.to_string());
        self
    }

    /// A package the inventory reports as installed
    #[must_use]
    pub fn with_installed(self, name: &str, version: &str) -> Self {
        self.records
            .lock()
            .unwrap()
            .push(PackageRecord::new(name, version).unwrap());
        self
    }

    #[must_use]
    pub fn with_site_dir(mut self, dir: &Path) -> Self {
        self.site_dirs.push(dir.to_path_buf());
        self
    }

    /// pip installs into `dir`, which must be on the search path to import
    #[must_use]
    pub fn with_user_site(mut self, dir: &Path) -> Self {
        self.user_site = Some(dir.to_path_buf());
        self
    }

    /// `step` exits with status 1
    #[must_use]
    pub fn with_failing_step(mut self, step: PipStep) -> Self {
        self.failing_steps.push(step);
        self
    }

    /// pip installs `requirement` but its module never imports
    #[must_use]
    pub fn with_broken_import(mut self, requirement: &str) -> Self {
        let module = Requirement::parse(requirement).unwrap().import_name();
        self.broken_imports.insert(module);
        self
    }

    #[must_use]
    pub fn with_spawn_failure(mut self) -> Self {
        self.spawn_fails = true;
        self
    }

    #[must_use]
    pub fn with_inventory_failure(mut self) -> Self {
        self.inventory_fails = true;
        self
    }

    /// pip steps run so far, in order
    pub fn calls(&self) -> Vec<PipStep> {
        self.calls.lock().unwrap().clone()
    }

    /// Modules probed so far, in order
    pub fn probes(&self) -> Vec<String> {
        self.probes.lock().unwrap().clone()
    }
}

impl Runtime for FakeEnvironment {
    fn can_import(&self, module: &str, search_path: &SearchPath) -> bool {
        self.probes.lock().unwrap().push(module.to_string());

        if self.importable.lock().unwrap().contains(module) {
            return true;
        }
        if !self.installed_modules.lock().unwrap().contains(module) {
            return false;
        }
        match &self.user_site {
            Some(dir) => search_path.contains(dir),
            None => true,
        }
    }

    fn user_site_packages(&self) -> Option<PathBuf> {
        self.user_site.clone()
    }

    fn site_paths(&self) -> Result<Vec<PathBuf>> {
        if self.inventory_fails {
            return Err(inventory_unavailable("fake", "permission denied"));
        }
        Ok(self.site_dirs.clone())
    }
}

impl PackageManager for FakeEnvironment {
    fn run(&self, step: &PipStep) -> std::io::Result<ProcessOutput> {
        if self.spawn_fails {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "python: not found",
            ));
        }
        self.calls.lock().unwrap().push(step.clone());

        if self.failing_steps.contains(step) {
            return Ok(ProcessOutput {
                exit_code: Some(1),
                stdout: String::new(),
                stderr: format!("ERROR: simulated failure of {step}\n"),
            });
        }

        match step {
            PipStep::Install(requirement) => {
                let requirement = Requirement::parse(requirement).unwrap();
                let module = requirement.import_name();
                if !self.broken_imports.contains(&module) {
                    self.installed_modules.lock().unwrap().insert(module);
                }
                self.records
                    .lock()
                    .unwrap()
                    .push(PackageRecord::new(requirement.name(), "1.0.0").unwrap());
            }
            PipStep::Uninstall(name) => {
                self.records
                    .lock()
                    .unwrap()
                    .retain(|record| !record.is_named(name));
            }
            PipStep::Bootstrap | PipStep::UpgradeSelf => {}
        }

        Ok(ProcessOutput {
            exit_code: Some(0),
            stdout: format!("{step}: ok\n"),
            stderr: String::new(),
        })
    }
}

impl EnvironmentInventory for FakeEnvironment {
    fn list(&self) -> Result<InventorySnapshot> {
        if self.inventory_fails {
            return Err(inventory_unavailable("fake", "permission denied"));
        }
        Ok(InventorySnapshot::new(self.records.lock().unwrap().clone()))
    }
}
