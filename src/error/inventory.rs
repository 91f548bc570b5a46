//! Inventory errors

use super::PipdeckError;

/// Creates an inventory unavailable error
pub fn unavailable(path: impl Into<String>, reason: impl Into<String>) -> PipdeckError {
    PipdeckError::InventoryUnavailable {
        path: path.into(),
        reason: reason.into(),
    }
}
