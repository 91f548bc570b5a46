//! List command implementation

use pipdeck::error::Result;
use pipdeck::facade::Orchestrator;
use pipdeck::ui::display::display_record_simple;

use super::helpers::{print_json, report};
use crate::cli::ListArgs;

/// Run list command
pub fn run(orchestrator: &Orchestrator, args: ListArgs) -> Result<bool> {
    let response = orchestrator.filter_installed(&args.filter);

    if let Some(ref records) = response.value {
        if args.json {
            print_json(records)?;
        } else if records.is_empty() {
            println!("No packages installed.");
        } else {
            for record in records {
                display_record_simple(record);
            }
        }
    }

    Ok(report(&response, args.json))
}
