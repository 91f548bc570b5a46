//! Interpreter seam
//!
//! Everything pipdeck learns from, or does to, the managed Python
//! environment goes through two traits:
//! - [`Runtime`]: read-only questions (is a module importable, where are the
//!   site directories, where is the user site directory)
//! - [`PackageManager`]: pip invocations that mutate the environment
//!
//! [`PythonInterpreter`] implements both by spawning the configured
//! interpreter. Tests substitute recording fakes.

mod interpreter;
mod search_path;

pub use interpreter::PythonInterpreter;
pub use search_path::SearchPath;

use std::fmt;
use std::path::PathBuf;

use crate::error::Result;

/// Captured result of one external process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Exit code, `None` when terminated by a signal
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// One package manager invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipStep {
    /// `-m ensurepip`
    Bootstrap,
    /// `-m pip install --upgrade pip`
    UpgradeSelf,
    /// `-m pip install <requirement>`
    Install(String),
    /// `-m pip uninstall -y <name>`
    Uninstall(String),
}

impl PipStep {
    /// Interpreter arguments for this step
    pub fn args(&self) -> Vec<String> {
        let args: Vec<&str> = match self {
            PipStep::Bootstrap => vec!["-m", "ensurepip"],
            PipStep::UpgradeSelf => vec!["-m", "pip", "install", "--upgrade", "pip"],
            PipStep::Install(requirement) => vec!["-m", "pip", "install", requirement],
            PipStep::Uninstall(name) => vec!["-m", "pip", "uninstall", "-y", name],
        };
        args.into_iter().map(String::from).collect()
    }
}

impl fmt::Display for PipStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "python {}", self.args().join(" "))
    }
}

/// Read-only view of the managed interpreter
pub trait Runtime: Send + Sync {
    /// Whether `module` imports in a fresh interpreter that sees `search_path`
    fn can_import(&self, module: &str, search_path: &SearchPath) -> bool;

    /// The interpreter's user-level site-packages directory, if it has one
    fn user_site_packages(&self) -> Option<PathBuf>;

    /// Directories on the interpreter's `sys.path`, in resolution order
    fn site_paths(&self) -> Result<Vec<PathBuf>>;
}

/// Mutating package manager invocations
pub trait PackageManager: Send + Sync {
    /// Run one step to completion. `Err` only when the process could not be
    /// spawned; a non-zero exit is reported through [`ProcessOutput`].
    fn run(&self, step: &PipStep) -> std::io::Result<ProcessOutput>;
}
