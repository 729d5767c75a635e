use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the show command
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Yaml,
    Json,
}

/// Arguments for the show command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show the authors of a post:\n    docauthors show blog/2024-01-01-hello.md\n\n\
                  Show them as JSON:\n    docauthors show blog/hello.md --format json\n\n\
                  Merge in profiles from authors.yml:\n    docauthors show blog/hello.md --resolve")]
pub struct ShowArgs {
    /// Document to inspect
    pub file: PathBuf,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Resolve author keys against the authors map
    #[arg(long)]
    pub resolve: bool,

    /// Front-matter field holding the authors
    #[arg(long, value_name = "NAME")]
    pub field: Option<String>,
}
