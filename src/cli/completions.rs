use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    docauthors completions bash > ~/.bash_completion.d/docauthors\n\n\
                  Generate zsh completions:\n    docauthors completions zsh > ~/.zfunc/_docauthors\n\n\
                  Generate fish completions:\n    docauthors completions fish > ~/.config/fish/completions/docauthors.fish\n\n\
                  Generate PowerShell completions:\n    docauthors completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
