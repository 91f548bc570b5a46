use clap::Parser;

/// Arguments for the show command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show package details:\n    pipdeck show flask\n\n\
                  Machine-readable output:\n    pipdeck show flask --json")]
pub struct ShowArgs {
    /// Package name
    pub name: String,

    /// Print details as JSON
    #[arg(long)]
    pub json: bool,
}
