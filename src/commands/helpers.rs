//! Command helper utilities

use serde::Serialize;

use pipdeck::config::Settings;
use pipdeck::error::{PipdeckError, Result};
use pipdeck::facade::HostResponse;
use pipdeck::ui::display::display_status;

use crate::cli::GlobalArgs;

/// Resolve settings: flags override the environment, which overrides the
/// config file
pub fn load_settings(global: &GlobalArgs) -> Result<Settings> {
    let mut settings = Settings::load(global.config.as_deref())?;
    apply_flags(&mut settings, global);
    Ok(settings)
}

fn apply_flags(settings: &mut Settings, global: &GlobalArgs) {
    if let Some(ref python) = global.python {
        settings.python.clone_from(python);
    }
    if let Some(ref registry) = global.registry {
        settings.registry_url.clone_from(registry);
    }
    if let Some(timeout) = global.timeout {
        settings.timeout_secs = timeout;
    }
}

/// Pretty-print `value` as JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(|e| PipdeckError::IoError {
        message: format!("Failed to serialize output: {e}"),
    })?;
    println!("{json}");
    Ok(())
}

/// Print the status line of `response` unless JSON output was requested
/// and the call succeeded
pub fn report<T>(response: &HostResponse<T>, json: bool) -> bool {
    if !(json && response.ok) {
        display_status(response.ok, &response.message);
    }
    response.ok
}
