use clap::Parser;
use std::path::PathBuf;

/// Arguments for the check command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Check all configured documentation roots:\n    docauthors check\n\n\
                  Check specific directories or files:\n    docauthors check blog docs/intro.md\n\n\
                  Verify author keys against authors.yml:\n    docauthors check --keys\n\n\
                  Check a different front-matter field:\n    docauthors check --field contributors")]
pub struct CheckArgs {
    /// Directories or files to check (defaults to `docs` from docauthors.yaml)
    pub paths: Vec<PathBuf>,

    /// Require every author key to exist in the authors map
    #[arg(long)]
    pub keys: bool,

    /// Front-matter field holding the authors
    #[arg(long, value_name = "NAME")]
    pub field: Option<String>,
}
