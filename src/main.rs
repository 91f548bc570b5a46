//! pipdeck - Python package orchestration
//!
//! Command-line host for the package orchestration engine: search PyPI,
//! inspect, install and uninstall packages, and bulk-install requirements
//! files into a Python interpreter's environment.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pipdeck::error::Result;
use pipdeck::facade::Orchestrator;

mod cli;
mod commands;

use cli::{Cli, Commands};

/// Send logs to stderr; `RUST_LOG` wins over `--verbose`
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<bool> {
    // Commands that need no environment
    match &cli.command {
        Commands::Version => {
            commands::version::run();
            return Ok(true);
        }
        Commands::Completions(args) => return Ok(commands::completions::run(args)),
        _ => {}
    }

    let settings = commands::helpers::load_settings(&cli.global)?;
    let mut orchestrator = Orchestrator::from_settings(&settings)?;

    match cli.command {
        Commands::Search(args) => commands::search::run(&orchestrator, &settings, args),
        Commands::Show(args) => commands::show::run(&orchestrator, args),
        Commands::List(args) => commands::list::run(&orchestrator, args),
        Commands::Install(args) => Ok(commands::install::run(&mut orchestrator, &args)),
        Commands::Uninstall(args) => Ok(commands::uninstall::run(&mut orchestrator, &args)),
        Commands::Bulk(args) => Ok(commands::bulk::run(&mut orchestrator, &args)),
        Commands::Version | Commands::Completions(_) => Ok(true),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.global.verbose);

    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
