//! Domain models for pipdeck
//!
//! This module contains pure domain objects representing core business entities.
//! These types are free of I/O and carry the invariants the engine relies on.

pub mod outcome;
pub mod package;
pub mod requirement;

pub use outcome::{InstallOutcome, UninstallOutcome};
pub use package::{PackageRecord, normalize_name};
pub use requirement::Requirement;
