//! Manifest errors

use super::PipdeckError;

/// Creates a manifest not found error
pub fn not_found(path: impl Into<String>) -> PipdeckError {
    PipdeckError::ManifestNotFound { path: path.into() }
}
