//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - check: Check command arguments
//! - show: Show command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod check;
pub mod completions;
pub mod show;

pub use check::CheckArgs;
pub use completions::CompletionsArgs;
pub use show::{OutputFormat, ShowArgs};

/// docauthors - author front matter checker
///
/// Validate and normalize the authors declared in documentation front matter.
#[derive(Parser, Debug)]
#[command(
    name = "docauthors",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Validate author front matter in documentation sites",
    long_about = "docauthors checks the `authors` front matter of Markdown and MDX documents. \
                  Each document may declare an author key, an inline author object, or a list \
                  of them; keys can be resolved against a site-wide authors.yml.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  docauthors check                      \x1b[90m# Check all configured docs\x1b[0m\n   \
                  docauthors check blog --keys          \x1b[90m# Also verify keys against authors.yml\x1b[0m\n   \
                  docauthors show blog/post.md          \x1b[90m# Print normalized authors\x1b[0m\n   \
                  docauthors show blog/post.md -f json  \x1b[90m# ... as JSON\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Workspace directory (defaults to current directory)
    #[arg(long, short = 'w', global = true, env = "DOCAUTHORS_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check author front matter of all documents
    Check(CheckArgs),

    /// Show the normalized authors of a document
    Show(ShowArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
