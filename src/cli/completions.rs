use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    pipdeck completions bash > ~/.bash_completion.d/pipdeck\n\n\
                  Generate zsh completions:\n    pipdeck completions zsh > ~/.zfunc/_pipdeck\n\n\
                  Generate fish completions:\n    pipdeck completions fish > ~/.config/fish/completions/pipdeck.fish\n\n\
                  Generate PowerShell completions:\n    pipdeck completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
