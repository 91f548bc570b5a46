//! Bulk command implementation
//!
//! Renders the job's percentage callback through a progress reporter and
//! prints the per-entry outcome list from the finished job's own results.

use pipdeck::facade::Orchestrator;
use pipdeck::ui::display::display_bulk_summary;
use pipdeck::ui::reporter;

use super::helpers::report;
use crate::cli::BulkArgs;

/// Run bulk command
pub fn run(orchestrator: &mut Orchestrator, args: &BulkArgs) -> bool {
    let mut progress = reporter(args.quiet);

    let response =
        orchestrator.run_bulk_job(&args.manifest, |percent| progress.set_percent(percent));

    match response.value {
        Some(ref state) => {
            progress.finish();
            display_bulk_summary(state);
        }
        None => progress.abandon(),
    }
    report(&response, false)
}
