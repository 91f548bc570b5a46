//! Registry errors

use std::time::Duration;

use super::PipdeckError;

/// Creates a registry unavailable error (non-success status or connection failure)
pub fn unavailable(url: impl Into<String>, status: impl Into<String>) -> PipdeckError {
    PipdeckError::RegistryUnavailable {
        url: url.into(),
        status: status.into(),
    }
}

/// Creates a registry response parse error
pub fn parse_failed(url: impl Into<String>, reason: impl Into<String>) -> PipdeckError {
    PipdeckError::RegistryParseError {
        url: url.into(),
        reason: reason.into(),
    }
}

/// Creates a registry timeout error
pub fn timeout(url: impl Into<String>, timeout: Duration) -> PipdeckError {
    PipdeckError::RegistryTimeout {
        url: url.into(),
        timeout,
    }
}
