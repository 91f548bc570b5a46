//! Search command implementation

use console::Style;

use pipdeck::config::Settings;
use pipdeck::error::Result;
use pipdeck::facade::Orchestrator;
use pipdeck::ui::display::display_record_simple;

use super::helpers::{print_json, report};
use crate::cli::SearchArgs;

/// Run search command
pub fn run(orchestrator: &Orchestrator, settings: &Settings, args: SearchArgs) -> Result<bool> {
    let response = orchestrator.search(&args.query);
    let page = args.limit.unwrap_or(settings.results_per_page);

    if let Some(ref records) = response.value {
        let shown = page.apply(records);
        if args.json {
            print_json(shown)?;
        } else {
            for record in shown {
                display_record_simple(record);
            }
            if shown.len() < records.len() {
                println!(
                    "{}",
                    Style::new().dim().apply_to(format!(
                        "Showing {} of {} results (use --limit all to see every result)",
                        shown.len(),
                        records.len()
                    ))
                );
            }
        }
    }

    Ok(report(&response, args.json))
}
