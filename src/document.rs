//! Validate the authors of a single document.

use std::path::{Path, PathBuf};

use serde_yaml::Value;
use tracing::debug;

use crate::authors::{self, AuthorEntry, AuthorRegistry, ResolvedAuthor};
use crate::error::{self, Result};
use crate::frontmatter;

/// Authors declared by a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentAuthors {
    pub path: PathBuf,
    pub entries: Vec<AuthorEntry>,
    /// Filled only when a registry was supplied
    pub resolved: Option<Vec<ResolvedAuthor>>,
}

/// Validate the authors declared in `content`.
///
/// Documents without front matter declare no authors. When `registry` is
/// given, every author key must resolve against it.
pub fn check_document(
    path: &Path,
    content: &str,
    field: &str,
    registry: Option<&AuthorRegistry>,
) -> Result<DocumentAuthors> {
    let shown = path.display().to_string();

    let frontmatter = frontmatter::parse_frontmatter(content)
        .map_err(|e| error::frontmatter::parse_failed(shown.as_str(), e.to_string()))?
        .map(|(value, _body)| value)
        .unwrap_or(Value::Null);

    if !(frontmatter.is_null() || frontmatter.is_mapping()) {
        return Err(error::frontmatter::not_mapping(shown.as_str()));
    }

    let entries = authors::validate_field(frontmatter::get_field(&frontmatter, field), field)
        .map_err(|source| error::author::invalid(shown.as_str(), source))?;

    let resolved = registry
        .map(|registry| registry.resolve(&entries))
        .transpose()?;

    debug!(path = %shown, authors = entries.len(), "validated authors");
    Ok(DocumentAuthors {
        path: path.to_path_buf(),
        entries,
        resolved,
    })
}

/// Read a document from disk and validate its authors.
pub fn read_document(
    path: &Path,
    field: &str,
    registry: Option<&AuthorRegistry>,
) -> Result<DocumentAuthors> {
    if !path.is_file() {
        return Err(error::fs::not_found(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)
        .map_err(|e| error::fs::read_failed(path.display().to_string(), e.to_string()))?;
    check_document(path, &content, field, registry)
}
