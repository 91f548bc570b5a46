//! Error types and handling for pipdeck
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by failure domain:
//! - [`registry`]: Remote package registry errors
//! - [`inventory`]: Installed-package index errors
//! - [`install`]: Package manager subprocess and import probe errors
//! - [`manifest`]: Bulk manifest errors
//! - [`config`]: Configuration file errors

pub mod config;
pub mod install;
pub mod inventory;
pub mod manifest;
pub mod registry;

pub use config::{parse_failed as config_parse_failed, read_failed as config_read_failed};
pub use install::{
    invalid_package_name, post_install_import, subprocess_failed as install_subprocess_failed,
    uninstall_failed as uninstall_subprocess_failed,
};
pub use inventory::unavailable as inventory_unavailable;
pub use manifest::not_found as manifest_not_found;
pub use registry::{
    parse_failed as registry_parse_failed, timeout as registry_timeout,
    unavailable as registry_unavailable,
};

use std::time::Duration;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for pipdeck operations
#[derive(Error, Diagnostic, Debug)]
pub enum PipdeckError {
    // Registry errors
    #[error("Registry unavailable: {url} ({status})")]
    #[diagnostic(
        code(pipdeck::registry::unavailable),
        help("Check your network connection and the --registry URL")
    )]
    RegistryUnavailable { url: String, status: String },

    #[error("Failed to parse registry response from {url}: {reason}")]
    #[diagnostic(code(pipdeck::registry::parse_error))]
    RegistryParseError { url: String, reason: String },

    #[error("Registry request to {url} timed out after {timeout:?}")]
    #[diagnostic(
        code(pipdeck::registry::timeout),
        help("Raise the timeout with --timeout or PIPDECK_TIMEOUT")
    )]
    RegistryTimeout { url: String, timeout: Duration },

    // Inventory errors
    #[error("Package index unavailable at {path}: {reason}")]
    #[diagnostic(code(pipdeck::inventory::unavailable))]
    InventoryUnavailable { path: String, reason: String },

    // Installer errors
    #[error("Failed to install {package}: `{step}` exited with {exit_code}: {stderr}")]
    #[diagnostic(code(pipdeck::install::subprocess))]
    InstallSubprocessError {
        package: String,
        step: String,
        exit_code: String,
        stderr: String,
    },

    #[error("{package} was installed but module '{module}' cannot be imported")]
    #[diagnostic(
        code(pipdeck::install::post_install_import),
        help("The import name may differ from the distribution name; a restart may also be required")
    )]
    PostInstallImportError { package: String, module: String },

    #[error("Failed to uninstall {package}: pip exited with {exit_code}: {stderr}")]
    #[diagnostic(code(pipdeck::uninstall::subprocess))]
    UninstallSubprocessError {
        package: String,
        exit_code: String,
        stderr: String,
    },

    #[error("Invalid package name: '{input}'")]
    #[diagnostic(
        code(pipdeck::install::invalid_name),
        help("Use a requirement specifier such as `requests` or `requests>=2.31`")
    )]
    InvalidPackageName { input: String },

    // Manifest errors
    #[error("Requirements file not found: {path}")]
    #[diagnostic(code(pipdeck::manifest::not_found))]
    ManifestNotFound { path: String },

    // Configuration errors
    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(pipdeck::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(pipdeck::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(pipdeck::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for PipdeckError {
    fn from(err: std::io::Error) -> Self {
        PipdeckError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for PipdeckError {
    fn from(err: serde_yaml::Error) -> Self {
        PipdeckError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, PipdeckError>;
