//! Spawning the managed Python interpreter

use std::path::PathBuf;
use std::process::Command;

use super::{PackageManager, PipStep, ProcessOutput, Runtime, SearchPath};
use crate::error::{Result, inventory_unavailable};

/// Imports the module named by the first argument; exit code is the answer
const PROBE_SCRIPT: &str = "import importlib, sys; importlib.import_module(sys.argv[1])";

/// Prints `sys.path` as a JSON array
const SYS_PATH_SCRIPT: &str = "import json, sys; print(json.dumps(sys.path))";

/// A Python interpreter reached through its executable
#[derive(Debug, Clone)]
pub struct PythonInterpreter {
    executable: PathBuf,
}

impl PythonInterpreter {
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    /// Run the interpreter with `args`, capturing output
    fn exec(&self, args: &[String], search_path: Option<&SearchPath>) -> std::io::Result<ProcessOutput> {
        let mut command = Command::new(&self.executable);
        command.args(args);

        if let Some(python_path) =
            search_path.and_then(|path| path.to_env(std::env::var_os("PYTHONPATH")))
        {
            command.env("PYTHONPATH", python_path);
        }

        tracing::debug!(
            python = %self.executable.display(),
            ?args,
            "spawning interpreter"
        );
        let output = command.output()?;

        let result = ProcessOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        tracing::debug!(exit_code = ?result.exit_code, "interpreter exited");
        Ok(result)
    }
}

impl Runtime for PythonInterpreter {
    fn can_import(&self, module: &str, search_path: &SearchPath) -> bool {
        let args = [
            "-c".to_string(),
            PROBE_SCRIPT.to_string(),
            module.to_string(),
        ];
        match self.exec(&args, Some(search_path)) {
            Ok(output) => output.success(),
            Err(e) => {
                tracing::warn!(module, error = %e, "import probe could not run");
                false
            }
        }
    }

    fn user_site_packages(&self) -> Option<PathBuf> {
        let args = ["-m".to_string(), "site".to_string(), "--user-site".to_string()];
        // `site --user-site` encodes ENABLE_USER_SITE in its exit code but
        // always prints the path
        let output = match self.exec(&args, None) {
            Ok(output) => output,
            Err(e) => {
                tracing::warn!(error = %e, "could not query user site directory");
                return None;
            }
        };

        let path = output.stdout.trim();
        (!path.is_empty()).then(|| PathBuf::from(path))
    }

    fn site_paths(&self) -> Result<Vec<PathBuf>> {
        let interpreter = self.executable.display().to_string();
        let args = ["-c".to_string(), SYS_PATH_SCRIPT.to_string()];

        let output = self
            .exec(&args, None)
            .map_err(|e| inventory_unavailable(&interpreter, e.to_string()))?;
        if !output.success() {
            return Err(inventory_unavailable(&interpreter, output.stderr.trim()));
        }

        parse_sys_path(&output.stdout).map_err(|reason| inventory_unavailable(&interpreter, reason))
    }
}

impl PackageManager for PythonInterpreter {
    fn run(&self, step: &PipStep) -> std::io::Result<ProcessOutput> {
        tracing::info!(%step, "running package manager");
        self.exec(&step.args(), None)
    }
}

/// Parse the JSON `sys.path` dump, dropping the empty (cwd) entry
fn parse_sys_path(stdout: &str) -> std::result::Result<Vec<PathBuf>, String> {
    let entries: Vec<String> = serde_json::from_str(stdout.trim())
        .map_err(|e| format!("unexpected sys.path output: {e}"))?;

    Ok(entries
        .into_iter()
        .filter(|entry| !entry.is_empty())
        .map(PathBuf::from)
        .collect())
}
