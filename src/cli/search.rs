use clap::Parser;

use pipdeck::config::PageSize;

/// Arguments for the search command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Search the registry:\n    pipdeck search requests\n\n\
                  Show every result:\n    pipdeck search flask --limit all\n\n\
                  Machine-readable output:\n    pipdeck search numpy --json")]
pub struct SearchArgs {
    /// Search terms (an empty query returns no results)
    #[arg(default_value = "")]
    pub query: String,

    /// Results to show: a number or `all` (defaults to the configured page size)
    #[arg(long, short = 'n')]
    pub limit: Option<PageSize>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,
}
