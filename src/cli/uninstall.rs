use clap::Parser;

/// Arguments for the uninstall command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Uninstall a package:\n    pipdeck uninstall flask\n\n\
                  Names match case-insensitively:\n    pipdeck uninstall Flask")]
pub struct UninstallArgs {
    /// Installed package name
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::super::{Cli, Commands};
    use clap::Parser;

    #[test]
    fn test_cli_parsing_uninstall() {
        let cli = Cli::try_parse_from(["pipdeck", "uninstall", "flask"]).unwrap();
        match cli.command {
            Commands::Uninstall(args) => assert_eq!(args.name, "flask"),
            _ => panic!("Expected Uninstall command"),
        }
    }
}
