//! Install command implementation

use pipdeck::facade::Orchestrator;

use super::helpers::report;
use crate::cli::InstallArgs;

/// Run install command
pub fn run(orchestrator: &mut Orchestrator, args: &InstallArgs) -> bool {
    println!("Installing {}...", args.requirement);
    let response = orchestrator.install(&args.requirement);
    report(&response, false)
}
