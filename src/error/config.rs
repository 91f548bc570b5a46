//! Configuration errors

use super::PipdeckError;

/// Creates a configuration read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> PipdeckError {
    PipdeckError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a configuration parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> PipdeckError {
    PipdeckError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
