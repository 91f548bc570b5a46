//! Display functions for package records and bulk job results

use console::Style;

use crate::bulk::BulkJobState;
use crate::domain::PackageRecord;

macro_rules! display_opt_field {
    ($label:expr, $value:expr) => {
        if let Some(v) = $value {
            println!("  {} {}", Style::new().bold().apply_to($label), v);
        }
    };
}

/// One line per record, summary underneath when present
pub fn display_record_simple(record: &PackageRecord) {
    println!(
        "  {} {}",
        Style::new().bold().yellow().apply_to(record.name()),
        Style::new().dim().apply_to(record.version())
    );
    if let Some(summary) = record.summary() {
        println!("    {summary}");
    }
}

/// Every known field of a record
pub fn display_record_detailed(record: &PackageRecord) {
    println!("{}", Style::new().bold().yellow().apply_to(record.name()));
    println!(
        "  {} {}",
        Style::new().bold().apply_to("Version:"),
        record.version()
    );
    display_opt_field!("Summary:", record.summary());
    display_opt_field!("Author:", record.author());
    display_opt_field!("License:", record.license());
}

/// Per-entry outcome list of a finished bulk job
pub fn display_bulk_summary(state: &BulkJobState) {
    for result in state.results() {
        let (mark, style) = if result.success {
            ("✓", Style::new().green())
        } else {
            ("✗", Style::new().red())
        };
        println!(
            "  {} {} {}",
            style.apply_to(mark),
            Style::new().bold().apply_to(&result.entry),
            Style::new().dim().apply_to(&result.detail)
        );
    }
}

/// Status line for a host response
pub fn display_status(ok: bool, message: &str) {
    if ok {
        println!("{}", Style::new().green().apply_to(message));
    } else {
        eprintln!("{}", Style::new().red().apply_to(message));
    }
}
