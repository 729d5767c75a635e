//! Command helper utilities

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::authors::AuthorRegistry;
use crate::config::{AuthorsMapLocation, Config};
use crate::error::{self, Result};

/// Resolve workspace path from optional argument
///
/// If a workspace path is provided, use it. Otherwise,
/// resolve to the current directory.
pub fn resolve_workspace_path(workspace: Option<PathBuf>) -> Result<PathBuf> {
    match workspace {
        Some(path) => Ok(path),
        None => std::env::current_dir()
            .map_err(|e| error::fs::io_error(format!("Failed to get current directory: {e}"))),
    }
}

/// Load the authors map for the workspace.
///
/// Fails when no authors map can be found; callers only ask for it when
/// keys must be resolved.
pub fn load_registry(config: &Config, workspace_root: &Path) -> Result<AuthorRegistry> {
    match config.authors_map_location(workspace_root) {
        Some(location) => {
            debug!(
                path = %location.path().display(),
                discovered = matches!(location, AuthorsMapLocation::Discovered(_)),
                "using authors map"
            );
            AuthorRegistry::load(location.path())
        }
        None => Err(error::config::invalid(
            "no authors map found; set `authors_map` in docauthors.yaml or add authors.yml to a docs root",
        )),
    }
}

/// Path shown to users: relative to the workspace when possible
pub fn display_path(path: &Path, workspace_root: &Path) -> String {
    path.strip_prefix(workspace_root)
        .unwrap_or(path)
        .display()
        .to_string()
}
