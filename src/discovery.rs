//! Find documents under the configured documentation roots.

use std::path::{Path, PathBuf};

use tracing::{debug, trace, warn};
use walkdir::WalkDir;
use wax::{CandidatePath, Glob, Pattern};

use crate::error::{self, Result};

/// Normalize a path to forward slashes for glob matching
pub fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Collect documents under `roots` whose extension is one of `extensions`,
/// skipping paths (relative to their root) that match an `exclude` glob.
///
/// A root that is a file is returned as-is. The result is sorted and
/// free of duplicates.
pub fn discover_documents(
    roots: &[PathBuf],
    extensions: &[String],
    exclude: &[String],
) -> Result<Vec<PathBuf>> {
    let globs = exclude
        .iter()
        .map(|pattern| {
            Glob::new(pattern).map_err(|e| {
                error::config::invalid(format!("invalid exclude pattern '{pattern}': {e}"))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let mut documents = Vec::new();
    for root in roots {
        if root.is_file() {
            documents.push(root.clone());
            continue;
        }
        if !root.is_dir() {
            return Err(error::fs::not_found(root.display().to_string()));
        }

        for entry in WalkDir::new(root).follow_links(true) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(root = %root.display(), error = %e, "skipping unreadable entry");
                    continue;
                }
            };
            if !entry.file_type().is_file() || !has_extension(entry.path(), extensions) {
                continue;
            }

            let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
            if is_excluded(relative, &globs) {
                trace!(path = %entry.path().display(), "excluded");
                continue;
            }
            documents.push(entry.into_path());
        }
    }

    documents.sort();
    documents.dedup();
    debug!(count = documents.len(), "discovered documents");
    Ok(documents)
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
}

fn is_excluded(relative: &Path, globs: &[Glob<'_>]) -> bool {
    let normalized = to_forward_slashes(relative);
    let candidate = CandidatePath::from(normalized.as_str());
    globs.iter().any(|glob| glob.matched(&candidate).is_some())
}
