//! Uninstall command implementation

use pipdeck::facade::Orchestrator;

use super::helpers::report;
use crate::cli::UninstallArgs;

/// Run uninstall command
pub fn run(orchestrator: &mut Orchestrator, args: &UninstallArgs) -> bool {
    let response = orchestrator.uninstall(&args.name);
    report(&response, false)
}
