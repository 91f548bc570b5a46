use clap::Parser;

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List all installed packages:\n    pipdeck list\n\n\
                  Filter by name:\n    pipdeck list --filter req\n\n\
                  Machine-readable output:\n    pipdeck list --json")]
pub struct ListArgs {
    /// Only show packages whose name contains this text (case-insensitive)
    #[arg(long, short = 'f', default_value = "")]
    pub filter: String,

    /// Print packages as JSON
    #[arg(long)]
    pub json: bool,
}
