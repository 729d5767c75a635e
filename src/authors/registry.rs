//! Site-wide author registry (`authors.yml`)
//!
//! Maps author keys to full author profiles so front matter can refer to an
//! author by key instead of repeating the profile on every page.

use std::collections::BTreeMap;
use std::path::Path;

use serde_yaml::Value;
use tracing::debug;

use super::AuthorEntry;
use super::record::{self, AuthorInlineRecord};
use crate::error::{self, Result};

/// File name probed for in documentation roots.
pub const AUTHORS_MAP_FILE: &str = "authors.yml";

/// An entry after its registry profile has been merged in.
pub type ResolvedAuthor = AuthorInlineRecord;

/// Author profiles keyed by author key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorRegistry {
    authors: BTreeMap<String, AuthorInlineRecord>,
}

impl AuthorRegistry {
    /// Parse an authors map from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Self::parse(yaml, "<inline>")
    }

    /// Load an authors map from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                error::fs::not_found(path.display().to_string())
            } else {
                error::fs::read_failed(path.display().to_string(), e.to_string())
            }
        })?;
        let registry = Self::parse(&content, &path.display().to_string())?;
        debug!(path = %path.display(), authors = registry.len(), "loaded authors map");
        Ok(registry)
    }

    fn parse(yaml: &str, origin: &str) -> Result<Self> {
        let value: Value = serde_yaml::from_str(yaml)
            .map_err(|e| error::registry::parse_failed(origin, e.to_string()))?;

        let mapping = match value {
            Value::Null => return Ok(Self::default()),
            Value::Mapping(mapping) => mapping,
            _ => {
                return Err(error::registry::parse_failed(
                    origin,
                    "expected a mapping of author keys to author profiles",
                ));
            }
        };

        let mut authors = BTreeMap::new();
        for (key, profile) in &mapping {
            let key = record::scalar_string(key, "key")
                .map_err(|issue| error::registry::invalid(format!("{key:?}"), issue.to_string()))?;
            let Value::Mapping(fields) = profile else {
                return Err(error::registry::invalid(
                    key,
                    "author profiles must be mappings",
                ));
            };
            let mut author = record::read_fields(fields)
                .map_err(|issue| error::registry::invalid(key.as_str(), issue.to_string()))?;
            author.key = Some(key.clone());
            authors.insert(key, author);
        }

        Ok(Self { authors })
    }

    pub fn get(&self, key: &str) -> Option<&AuthorInlineRecord> {
        self.authors.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.authors.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.authors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.authors.is_empty()
    }

    /// Resolve front-matter entries against the registry.
    ///
    /// Keys must exist in the registry. Inline objects with a key are merged
    /// over the registered profile; inline objects without one pass through.
    pub fn resolve(&self, entries: &[AuthorEntry]) -> Result<Vec<ResolvedAuthor>> {
        entries
            .iter()
            .map(|entry| match entry {
                AuthorEntry::Key(key) => self
                    .get(key)
                    .cloned()
                    .ok_or_else(|| error::author::unknown_key(key.as_str())),
                AuthorEntry::Inline(inline) => match inline.key.as_deref() {
                    Some(key) => self
                        .get(key)
                        .map(|base| inline.merged_over(base))
                        .ok_or_else(|| error::author::unknown_key(key)),
                    None => Ok(inline.clone()),
                },
            })
            .collect()
    }
}
