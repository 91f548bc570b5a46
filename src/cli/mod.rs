//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - search: Search command arguments
//! - show: Show command arguments
//! - list: List command arguments
//! - install: Install command arguments
//! - uninstall: Uninstall command arguments
//! - bulk: Bulk command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub mod bulk;
pub mod completions;
pub mod install;
pub mod list;
pub mod search;
pub mod show;
pub mod uninstall;

pub use bulk::BulkArgs;
pub use completions::CompletionsArgs;
pub use install::InstallArgs;
pub use list::ListArgs;
pub use search::SearchArgs;
pub use show::ShowArgs;
pub use uninstall::UninstallArgs;

/// pipdeck - Python package orchestration
///
/// Search PyPI and manage the packages of a Python interpreter.
#[derive(Parser, Debug)]
#[command(
    name = "pipdeck",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Search, install and bulk-install Python packages",
    long_about = "pipdeck searches a PyPI-compatible registry and drives pip to install, \
                  uninstall and bulk-install packages into a Python interpreter's environment.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  pipdeck search requests                \x1b[90m# Search the registry\x1b[0m\n   \
                  pipdeck show flask                     \x1b[90m# Show package details\x1b[0m\n   \
                  pipdeck list --filter req              \x1b[90m# List installed packages\x1b[0m\n   \
                  pipdeck install 'requests>=2.31'       \x1b[90m# Install one package\x1b[0m\n   \
                  pipdeck uninstall flask                \x1b[90m# Uninstall one package\x1b[0m\n   \
                  pipdeck bulk requirements.txt          \x1b[90m# Install a manifest\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command
#[derive(Args, Debug, Default)]
pub struct GlobalArgs {
    /// Python interpreter whose environment is managed
    #[arg(long, global = true)]
    pub python: Option<PathBuf>,

    /// Registry base URL
    #[arg(long, global = true)]
    pub registry: Option<String>,

    /// Registry request timeout in seconds
    #[arg(long, global = true, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Configuration file (defaults to <config dir>/pipdeck/config.yaml)
    #[arg(long, short = 'c', global = true, env = "PIPDECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search the package registry
    Search(SearchArgs),

    /// Show registry details for a package
    Show(ShowArgs),

    /// List installed packages
    List(ListArgs),

    /// Install a package
    Install(InstallArgs),

    /// Uninstall a package
    Uninstall(UninstallArgs),

    /// Install every package of a requirements file
    Bulk(BulkArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
