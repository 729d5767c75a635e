//! Check command implementation
//!
//! Validates the author front matter of every document under the
//! configured (or given) roots and reports each invalid document.

use std::path::{Path, PathBuf};

use console::Style;
use tracing::info;

use crate::cli::CheckArgs;
use crate::commands::helpers::{display_path, load_registry, resolve_workspace_path};
use crate::config::Config;
use crate::discovery::discover_documents;
use crate::document::read_document;
use crate::error::{DocAuthorsError, Result};

/// Outcome of checking a set of documents
#[derive(Debug, Default)]
pub struct CheckReport {
    pub total: usize,
    pub failures: Vec<(PathBuf, DocAuthorsError)>,
}

impl CheckReport {
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Run check command
pub fn run(workspace: Option<PathBuf>, args: CheckArgs) -> Result<()> {
    let workspace_root = resolve_workspace_path(workspace)?;
    let config = Config::load(&workspace_root)?;

    let field = args.field.unwrap_or_else(|| config.field.clone());
    let roots = if args.paths.is_empty() {
        config.doc_roots(&workspace_root)
    } else {
        args.paths.iter().map(|p| workspace_root.join(p)).collect()
    };

    let registry = if args.keys || config.verify_keys {
        Some(load_registry(&config, &workspace_root)?)
    } else {
        None
    };

    let documents = discover_documents(&roots, &config.extensions, &config.exclude)?;
    info!(documents = documents.len(), field = %field, "checking documents");

    let mut report = CheckReport {
        total: documents.len(),
        failures: Vec::new(),
    };
    for path in documents {
        if let Err(e) = read_document(&path, &field, registry.as_ref()) {
            report.failures.push((path, e));
        }
    }

    print_report(&report, &workspace_root);

    if report.is_ok() {
        Ok(())
    } else {
        Err(DocAuthorsError::ValidationFailed {
            invalid: report.failures.len(),
            total: report.total,
        })
    }
}

fn print_report(report: &CheckReport, workspace_root: &Path) {
    let red = Style::new().bold().red();
    let green = Style::new().bold().green();

    for (path, error) in &report.failures {
        println!(
            "{} {}",
            red.apply_to("✗"),
            Style::new().bold().apply_to(display_path(path, workspace_root))
        );
        println!("    {}", failure_message(error));
    }

    let summary = summary_line(report.total, report.failures.len());
    if report.is_ok() {
        println!("{} {}", green.apply_to("✓"), summary);
    } else {
        println!();
        println!("{}", red.apply_to(summary));
    }
}

fn summary_line(total: usize, invalid: usize) -> String {
    let noun = if total == 1 { "document" } else { "documents" };
    format!("Checked {total} {noun}: {invalid} invalid")
}

/// Failure line without the path prefix, which is already printed.
fn failure_message(error: &DocAuthorsError) -> String {
    match error {
        DocAuthorsError::InvalidAuthors { source, .. } => source.to_string(),
        other => other.to_string(),
    }
}
