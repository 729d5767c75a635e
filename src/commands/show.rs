//! Show command implementation
//!
//! Prints the normalized (and optionally resolved) authors of one document.

use std::path::PathBuf;

use console::Style;
use serde::Serialize;

use crate::authors::{AuthorEntry, AuthorInlineRecord};
use crate::cli::{OutputFormat, ShowArgs};
use crate::commands::helpers::{load_registry, resolve_workspace_path};
use crate::config::Config;
use crate::document::{DocumentAuthors, read_document};
use crate::error::{self, Result};

/// Run show command
pub fn run(workspace: Option<PathBuf>, args: ShowArgs) -> Result<()> {
    let workspace_root = resolve_workspace_path(workspace)?;
    let config = Config::load(&workspace_root)?;
    let field = args.field.unwrap_or_else(|| config.field.clone());

    let registry = if args.resolve {
        Some(load_registry(&config, &workspace_root)?)
    } else {
        None
    };

    let document = read_document(
        &workspace_root.join(&args.file),
        &field,
        registry.as_ref(),
    )?;

    print!("{}", render(&document, args.format)?);
    Ok(())
}

/// Render a document's authors in the requested format
pub fn render(document: &DocumentAuthors, format: OutputFormat) -> Result<String> {
    match (format, &document.resolved) {
        (OutputFormat::Text, Some(resolved)) => Ok(render_text_resolved(resolved)),
        (OutputFormat::Text, None) => Ok(render_text(&document.entries)),
        (OutputFormat::Yaml, Some(resolved)) => to_yaml(resolved),
        (OutputFormat::Yaml, None) => to_yaml(&document.entries),
        (OutputFormat::Json, Some(resolved)) => to_json(resolved),
        (OutputFormat::Json, None) => to_json(&document.entries),
    }
}

fn to_yaml<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_yaml::to_string(value).map_err(serialize_failed)
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let json = serde_json::to_string_pretty(value).map_err(serialize_failed)?;
    Ok(format!("{json}\n"))
}

fn serialize_failed(e: impl std::fmt::Display) -> error::DocAuthorsError {
    error::fs::io_error(format!("Failed to serialize authors: {e}"))
}

fn render_text(entries: &[AuthorEntry]) -> String {
    if entries.is_empty() {
        return "No authors declared.\n".to_string();
    }

    let mut out = String::new();
    for entry in entries {
        match entry {
            AuthorEntry::Key(key) => {
                out.push_str(&format!(
                    "  {} {}\n",
                    Style::new().bold().yellow().apply_to(key),
                    Style::new().dim().apply_to("(key)")
                ));
            }
            AuthorEntry::Inline(record) => out.push_str(&record_line(record)),
        }
    }
    out
}

fn render_text_resolved(authors: &[AuthorInlineRecord]) -> String {
    if authors.is_empty() {
        return "No authors declared.\n".to_string();
    }
    authors.iter().map(record_line).collect()
}

fn record_line(record: &AuthorInlineRecord) -> String {
    let mut line = format!(
        "  {}",
        Style::new()
            .bold()
            .yellow()
            .apply_to(record.display_name().unwrap_or_default())
    );
    if let (Some(key), Some(_)) = (&record.key, &record.name) {
        line.push_str(&format!(" ({key})"));
    }
    if let Some(ref title) = record.title {
        line.push_str(&format!(" - {title}"));
    }
    if let Some(ref url) = record.url {
        line.push_str(&format!(" <{url}>"));
    }
    line.push('\n');
    line
}
