//! pipdeck - Python package orchestration
//!
//! Searches a PyPI-compatible registry, installs and uninstalls packages in
//! a Python interpreter's environment, lists what is installed and runs bulk
//! installs from a requirements manifest with progress reporting.
//!
//! Hosts talk to [`facade::Orchestrator`]; every call comes back as a
//! [`facade::HostResponse`] and never as an error.

pub mod bulk;
pub mod config;
pub mod domain;
pub mod error;
pub mod facade;
pub mod installer;
pub mod inventory;
pub mod registry;
pub mod runtime;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_fixtures;
