//! docauthors - author front matter checker
//!
//! Command line entry point; see the library crate for the validator itself.

use clap::Parser;

use docauthors::cli::{Cli, Commands};
use docauthors::{commands, logging};

fn main() {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose);

    let result = match cli.command {
        Commands::Check(args) => commands::check::run(cli.workspace, args),
        Commands::Show(args) => commands::show::run(cli.workspace, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
