//! Version command implementation
//!
//! Prints the version together with the defaults a workspace without
//! `docauthors.yaml` is checked against.

use crate::authors::registry::AUTHORS_MAP_FILE;
use crate::config::{CONFIG_FILE, Config};
use crate::error::Result;

/// Run version command
pub fn run() -> Result<()> {
    print!("{}", version_text());
    Ok(())
}

fn version_text() -> String {
    let defaults = Config::default();
    let docs = defaults
        .docs
        .iter()
        .map(|root| root.display().to_string())
        .collect::<Vec<_>>()
        .join(", ");

    let mut out = format!("docauthors {}\n\n", env!("CARGO_PKG_VERSION"));
    out.push_str("Defaults:\n");
    out.push_str(&format!("  Config file: {CONFIG_FILE}\n"));
    out.push_str(&format!("  Docs roots: {docs}\n"));
    out.push_str(&format!("  Authors field: {}\n", defaults.field));
    out.push_str(&format!("  Authors map: <docs root>/{AUTHORS_MAP_FILE}\n"));
    out.push_str(&format!(
        "  Extensions: {}\n",
        defaults.extensions.join(", ")
    ));
    out.push_str(&format!(
        "\nMinimum Rust version: {}\n",
        env!("CARGO_PKG_RUST_VERSION")
    ));
    out
}
