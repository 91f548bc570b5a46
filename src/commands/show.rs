//! Show command implementation

use pipdeck::error::Result;
use pipdeck::facade::Orchestrator;
use pipdeck::ui::display::display_record_detailed;

use super::helpers::{print_json, report};
use crate::cli::ShowArgs;

/// Run show command
pub fn run(orchestrator: &Orchestrator, args: ShowArgs) -> Result<bool> {
    let response = orchestrator.package_details(&args.name);

    if let Some(ref record) = response.value {
        if args.json {
            print_json(record)?;
        } else {
            display_record_detailed(record);
        }
        return Ok(true);
    }

    Ok(report(&response, args.json))
}
