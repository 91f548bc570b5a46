//! Single-package install and uninstall
//!
//! Both operations are probe-first so that repeated calls degrade to no-ops:
//!
//! ```text
//! install:   probe ─ importable ──────────────────────────────► AlreadyInstalled
//!              └─ absent ─► ensurepip ─► upgrade pip ─► pip install
//!                             └─ extend search path ─► re-probe ─► Installed
//!                                                        └──────► PostInstallImportError
//! uninstall: inventory ─ no match ─► NotInstalled
//!              └─ match ─► pip uninstall -y ─► Removed
//! ```
//!
//! Any non-zero exit along the way fails the call with the captured exit
//! code and stderr. Nothing is retried.

use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::{InstallOutcome, Requirement, UninstallOutcome};
use crate::error::{
    Result, install_subprocess_failed, post_install_import, uninstall_subprocess_failed,
};
use crate::inventory::EnvironmentInventory;
use crate::runtime::{PackageManager, PipStep, Runtime, SearchPath};

/// Drives pip for one package at a time against one environment
pub struct PackageInstaller {
    runtime: Arc<dyn Runtime>,
    manager: Arc<dyn PackageManager>,
    inventory: Arc<dyn EnvironmentInventory>,
    search_path: SearchPath,
}

impl PackageInstaller {
    pub fn new(
        runtime: Arc<dyn Runtime>,
        manager: Arc<dyn PackageManager>,
        inventory: Arc<dyn EnvironmentInventory>,
    ) -> Self {
        Self {
            runtime,
            manager,
            inventory,
            search_path: SearchPath::new(),
        }
    }

    /// Directories appended to the import search path so far
    pub fn search_path(&self) -> &SearchPath {
        &self.search_path
    }

    /// Install `requirement` unless its module already imports
    pub fn install(&mut self, requirement: &str) -> Result<InstallOutcome> {
        let requirement = Requirement::parse(requirement)?;
        let module = requirement.import_name();

        if self.runtime.can_import(&module, &self.search_path) {
            tracing::info!(package = %requirement, "already installed");
            return Ok(InstallOutcome::AlreadyInstalled);
        }

        tracing::info!(package = %requirement, "not found, installing");
        let steps = [
            PipStep::Bootstrap,
            PipStep::UpgradeSelf,
            PipStep::Install(requirement.as_str().to_string()),
        ];
        for step in &steps {
            self.run_install_step(&requirement, step)?;
        }

        let added_path = self.extend_search_path();

        if !self.runtime.can_import(&module, &self.search_path) {
            tracing::warn!(
                package = %requirement,
                module,
                search_path = ?self.search_path.entries(),
                "installed but not importable"
            );
            return Err(post_install_import(requirement.as_str(), module));
        }

        tracing::info!(package = %requirement, "installed successfully");
        Ok(InstallOutcome::Installed { added_path })
    }

    /// Uninstall `name` if the inventory lists it
    pub fn uninstall(&self, name: &str) -> Result<UninstallOutcome> {
        let snapshot = self.inventory.list()?;
        let Some(record) = snapshot.find(name) else {
            tracing::info!(package = name, "not found, skipping uninstall");
            return Ok(UninstallOutcome::NotInstalled);
        };

        let step = PipStep::Uninstall(record.name().to_string());
        let output = self
            .manager
            .run(&step)
            .map_err(|e| uninstall_subprocess_failed(name, None, &e.to_string()))?;
        if !output.success() {
            return Err(uninstall_subprocess_failed(
                name,
                output.exit_code,
                &output.stderr,
            ));
        }

        // The running interpreter keeps its search path; removal is visible
        // after a restart
        tracing::info!(package = record.name(), "uninstalled successfully");
        Ok(UninstallOutcome::Removed)
    }

    fn run_install_step(&self, requirement: &Requirement, step: &PipStep) -> Result<()> {
        let output = self.manager.run(step).map_err(|e| {
            install_subprocess_failed(requirement.as_str(), step.to_string(), None, &e.to_string())
        })?;

        if !output.success() {
            return Err(install_subprocess_failed(
                requirement.as_str(),
                step.to_string(),
                output.exit_code,
                &output.stderr,
            ));
        }
        Ok(())
    }

    /// Append the user site directory to the search path if missing
    fn extend_search_path(&mut self) -> Option<PathBuf> {
        let user_site = self.runtime.user_site_packages()?;
        if !self.search_path.append(user_site.clone()) {
            return None;
        }

        tracing::info!(path = %user_site.display(), "added to import search path");
        Some(user_site)
    }
}
