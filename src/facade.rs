//! Entry point for host applications
//!
//! [`Orchestrator`] maps the five host requests (search, refresh inventory,
//! install, uninstall, bulk job) plus package details onto the engine
//! components and folds every outcome into a [`HostResponse`]: an `ok` flag,
//! a message fit for a status bar, and the payload when there is one.
//! Nothing escapes as an error.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;

use crate::bulk::{BulkJobRunner, BulkJobState};
use crate::config::Settings;
use crate::domain::{InstallOutcome, PackageRecord, UninstallOutcome};
use crate::error::Result;
use crate::installer::PackageInstaller;
use crate::inventory::{EnvironmentInventory, InventorySnapshot, SitePackagesInventory};
use crate::registry::{HttpRegistryClient, RegistryClient};
use crate::runtime::{PackageManager, PythonInterpreter, Runtime};

/// Uniform result handed back to the host
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HostResponse<T> {
    pub ok: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<T>,
}

impl<T> HostResponse<T> {
    fn success(value: T, message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
            value: Some(value),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        let message = message.into();
        tracing::debug!(%message, "operation failed");
        Self {
            ok: false,
            message,
            value: None,
        }
    }
}

/// Composes registry, inventory and installer for one environment
pub struct Orchestrator {
    registry: Arc<dyn RegistryClient>,
    inventory: Arc<dyn EnvironmentInventory>,
    installer: PackageInstaller,
}

impl Orchestrator {
    pub fn new(
        registry: Arc<dyn RegistryClient>,
        runtime: Arc<dyn Runtime>,
        manager: Arc<dyn PackageManager>,
        inventory: Arc<dyn EnvironmentInventory>,
    ) -> Self {
        let installer = PackageInstaller::new(runtime, manager, inventory.clone());
        Self {
            registry,
            inventory,
            installer,
        }
    }

    /// Wire the production components described by `settings`
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let python = Arc::new(PythonInterpreter::new(&settings.python));
        let registry = Arc::new(HttpRegistryClient::new(
            settings.registry_base(),
            Duration::from_secs(settings.timeout_secs),
        )?);
        let inventory = Arc::new(SitePackagesInventory::new(python.clone()));

        Ok(Self::new(registry, python.clone(), python, inventory))
    }

    /// Search the registry
    pub fn search(&self, query: &str) -> HostResponse<Vec<PackageRecord>> {
        match self.registry.search(query) {
            Ok(records) => {
                let message = format!("Found {} packages.", records.len());
                HostResponse::success(records, message)
            }
            Err(e) => HostResponse::failure(format!("Error fetching results: {e}")),
        }
    }

    /// Latest registry metadata for one package
    pub fn package_details(&self, name: &str) -> HostResponse<PackageRecord> {
        match self.registry.fetch(name) {
            Ok(record) => {
                let message = format!("{} {}", record.name(), record.version());
                HostResponse::success(record, message)
            }
            Err(e) => HostResponse::failure(format!("Error fetching {name}: {e}")),
        }
    }

    /// Enumerate installed packages
    pub fn refresh_inventory(&self) -> HostResponse<InventorySnapshot> {
        match self.inventory.list() {
            Ok(snapshot) => {
                let message = format!("Found {} installed packages.", snapshot.len());
                HostResponse::success(snapshot, message)
            }
            Err(e) => HostResponse::failure(format!("Error listing installed packages: {e}")),
        }
    }

    /// Installed packages whose name contains `query`, ignoring case.
    /// An empty query keeps everything.
    pub fn filter_installed(&self, query: &str) -> HostResponse<Vec<PackageRecord>> {
        match self.inventory.list() {
            Ok(snapshot) => {
                let matches: Vec<PackageRecord> =
                    snapshot.filter(query).into_iter().cloned().collect();
                let message = format!("Found {} installed packages.", matches.len());
                HostResponse::success(matches, message)
            }
            Err(e) => HostResponse::failure(format!("Error listing installed packages: {e}")),
        }
    }

    pub fn install(&mut self, name: &str) -> HostResponse<InstallOutcome> {
        match self.installer.install(name) {
            Ok(outcome) => {
                let message = match &outcome {
                    InstallOutcome::AlreadyInstalled => format!("{name} is already installed."),
                    InstallOutcome::Installed { .. } => format!("{name} installed successfully."),
                };
                HostResponse::success(outcome, message)
            }
            Err(e) => HostResponse::failure(format!("Failed to install {name}: {e}")),
        }
    }

    /// Uninstall one package. A package that is not installed is a
    /// successful no-op.
    pub fn uninstall(&mut self, name: &str) -> HostResponse<UninstallOutcome> {
        match self.installer.uninstall(name) {
            Ok(outcome) => {
                let message = match outcome {
                    UninstallOutcome::Removed => format!("{name} uninstalled successfully."),
                    UninstallOutcome::NotInstalled => {
                        format!("Package {name} not found. Skipping uninstall.")
                    }
                };
                HostResponse::success(outcome, message)
            }
            Err(e) => HostResponse::failure(format!("Failed to uninstall {name}: {e}")),
        }
    }

    /// Install every entry of a requirements manifest.
    ///
    /// `ok` is false when any entry failed; the state is returned either way
    /// so the host can show the per-entry summary.
    pub fn run_bulk_job(
        &mut self,
        manifest_path: &Path,
        on_progress: impl FnMut(f64),
    ) -> HostResponse<BulkJobState> {
        let path = manifest_path.display();
        match BulkJobRunner::new(&mut self.installer).run(manifest_path, on_progress) {
            Ok(state) if state.failed() == 0 => {
                let message = format!(
                    "Packages from {path} installed successfully ({} of {}).",
                    state.succeeded(),
                    state.total()
                );
                HostResponse::success(state, message)
            }
            Ok(state) => {
                let message = format!(
                    "Failed to install {} of {} packages from {path}.",
                    state.failed(),
                    state.total()
                );
                tracing::debug!(%message, "bulk job finished with failures");
                HostResponse {
                    ok: false,
                    message,
                    value: Some(state),
                }
            }
            Err(e) => HostResponse::failure(format!("Failed to install packages from {path}: {e}")),
        }
    }
}
