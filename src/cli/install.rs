use clap::Parser;

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Install a package:\n    pipdeck install requests\n\n\
                  Install with a version specifier:\n    pipdeck install 'requests>=2.31'\n\n\
                  Use a specific interpreter:\n    pipdeck --python /opt/venv/bin/python install flask")]
pub struct InstallArgs {
    /// Requirement specifier, passed to pip verbatim
    pub requirement: String,
}
