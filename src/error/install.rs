//! Installer errors

use super::PipdeckError;

/// Renders a process exit code; none when killed or never started
fn exit_code_text(exit_code: Option<i32>) -> String {
    exit_code.map_or_else(|| "no exit code".to_string(), |code| code.to_string())
}

/// Creates an install subprocess error for the failed step
pub fn subprocess_failed(
    package: impl Into<String>,
    step: impl Into<String>,
    exit_code: Option<i32>,
    stderr: &str,
) -> PipdeckError {
    PipdeckError::InstallSubprocessError {
        package: package.into(),
        step: step.into(),
        exit_code: exit_code_text(exit_code),
        stderr: stderr.trim().to_string(),
    }
}

/// Creates an uninstall subprocess error
pub fn uninstall_failed(
    package: impl Into<String>,
    exit_code: Option<i32>,
    stderr: &str,
) -> PipdeckError {
    PipdeckError::UninstallSubprocessError {
        package: package.into(),
        exit_code: exit_code_text(exit_code),
        stderr: stderr.trim().to_string(),
    }
}

/// Creates a post-install import error
pub fn post_install_import(package: impl Into<String>, module: impl Into<String>) -> PipdeckError {
    PipdeckError::PostInstallImportError {
        package: package.into(),
        module: module.into(),
    }
}

/// Creates an invalid package name error
pub fn invalid_package_name(input: impl Into<String>) -> PipdeckError {
    PipdeckError::InvalidPackageName {
        input: input.into(),
    }
}
