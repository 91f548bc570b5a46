use clap::Parser;
use std::path::PathBuf;

/// Arguments for the bulk command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Install a requirements file:\n    pipdeck bulk requirements.txt\n\n\
                  Without a progress bar:\n    pipdeck bulk requirements.txt --quiet")]
pub struct BulkArgs {
    /// Requirements file: one specifier per line, blank lines ignored
    pub manifest: PathBuf,

    /// Hide the progress bar
    #[arg(long, short = 'q')]
    pub quiet: bool,
}
