//! Terminal states of single-package operations

use std::fmt;
use std::path::PathBuf;

/// Successful terminal state of an install call.
///
/// The failed terminal state is the `Err` side of the installer's `Result`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// The package was importable before anything ran
    AlreadyInstalled,
    /// pip installed the package and it now imports
    Installed {
        /// User site directory appended to the import search path, if any
        added_path: Option<PathBuf>,
    },
}

/// Terminal state of an uninstall call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UninstallOutcome {
    Removed,
    /// The inventory had no matching record, nothing ran
    NotInstalled,
}

impl fmt::Display for InstallOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstallOutcome::AlreadyInstalled => f.write_str("already installed"),
            InstallOutcome::Installed { .. } => f.write_str("installed"),
        }
    }
}

impl fmt::Display for UninstallOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UninstallOutcome::Removed => f.write_str("uninstalled"),
            UninstallOutcome::NotInstalled => f.write_str("not installed"),
        }
    }
}
