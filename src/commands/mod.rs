//! Command implementations for pipdeck CLI
//!
//! Each command is a thin wrapper over [`pipdeck::facade::Orchestrator`]:
//! it prints the payload and the status message and reports whether the
//! operation succeeded.

pub mod bulk;
pub mod completions;
pub mod helpers;
pub mod install;
pub mod list;
pub mod search;
pub mod show;
pub mod uninstall;
pub mod version;
