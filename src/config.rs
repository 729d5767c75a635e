//! Workspace configuration (`docauthors.yaml`)
//!
//! Every field is optional; a workspace without a config file checks `docs/`
//! with the default settings.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;
use wax::Glob;

use crate::authors::DEFAULT_FIELD;
use crate::authors::registry::AUTHORS_MAP_FILE;
use crate::error::{self, Result};

/// Config file name looked up at the workspace root.
pub const CONFIG_FILE: &str = "docauthors.yaml";

/// Workspace configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Documentation roots, relative to the workspace
    pub docs: Vec<PathBuf>,

    /// Authors map; probed as `authors.yml` in each docs root when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authors_map: Option<PathBuf>,

    /// Front-matter field holding the authors
    pub field: String,

    /// Document file extensions, without the dot
    pub extensions: Vec<String>,

    /// Glob patterns (relative to each docs root) to skip
    pub exclude: Vec<String>,

    /// Require every author key to exist in the authors map
    pub verify_keys: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            docs: vec![PathBuf::from("docs")],
            authors_map: None,
            field: DEFAULT_FIELD.to_string(),
            extensions: vec!["md".to_string(), "mdx".to_string()],
            exclude: Vec::new(),
            verify_keys: false,
        }
    }
}

/// Where the authors map comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorsMapLocation {
    /// Set in the config; must exist
    Configured(PathBuf),
    /// Found by probing the docs roots
    Discovered(PathBuf),
}

impl AuthorsMapLocation {
    pub fn path(&self) -> &Path {
        match self {
            AuthorsMapLocation::Configured(path) | AuthorsMapLocation::Discovered(path) => path,
        }
    }
}

impl Config {
    /// Parse configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `docauthors.yaml` from the workspace root, or defaults if absent
    pub fn load(workspace_root: &Path) -> Result<Self> {
        let path = workspace_root.join(CONFIG_FILE);
        if !path.is_file() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|e| error::fs::read_failed(path.display().to_string(), e.to_string()))?;

        let config = Self::from_yaml(&content).map_err(|e| match e {
            error::DocAuthorsError::ConfigParseFailed { reason, .. } => {
                error::config::parse_failed(path.display().to_string(), reason)
            }
            other => other,
        })?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Check settings that deserialize fine but cannot be used
    pub fn validate(&self) -> Result<()> {
        if self.field.trim().is_empty() {
            return Err(error::config::invalid("field must not be empty"));
        }
        if self.extensions.is_empty() {
            return Err(error::config::invalid("extensions must not be empty"));
        }
        if self.docs.is_empty() {
            return Err(error::config::invalid("docs must list at least one root"));
        }
        for pattern in &self.exclude {
            Glob::new(pattern).map_err(|e| {
                error::config::invalid(format!("invalid exclude pattern '{pattern}': {e}"))
            })?;
        }
        Ok(())
    }

    /// Documentation roots resolved against the workspace root
    pub fn doc_roots(&self, workspace_root: &Path) -> Vec<PathBuf> {
        self.docs.iter().map(|d| workspace_root.join(d)).collect()
    }

    /// Locate the authors map, if any
    pub fn authors_map_location(&self, workspace_root: &Path) -> Option<AuthorsMapLocation> {
        if let Some(ref configured) = self.authors_map {
            return Some(AuthorsMapLocation::Configured(
                workspace_root.join(configured),
            ));
        }

        self.doc_roots(workspace_root)
            .into_iter()
            .map(|root| root.join(AUTHORS_MAP_FILE))
            .find(|candidate| candidate.is_file())
            .map(AuthorsMapLocation::Discovered)
    }
}
