//! Common test utilities for docauthors integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// A temporary documentation site for integration tests
pub struct TestWorkspace {
    /// Temporary directory, removed on drop
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new empty test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Write a Markdown document whose front matter contains `authors_yaml`
    pub fn write_doc(&self, path: &str, authors_yaml: &str) {
        self.write_file(
            path,
            &format!("---\ntitle: Test\n{authors_yaml}\n---\n\n# Test\n"),
        );
    }

    /// Write the site-wide authors map
    #[allow(dead_code)]
    pub fn write_authors_map(&self, path: &str) {
        self.write_file(
            path,
            r"
ada:
  name: Ada Lovelace
  title: Analyst
  url: https://example.com/ada
grace:
  name: Grace Hopper
  image_url: /img/grace.png
",
        );
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Command for the real docauthors binary, running inside `workspace`
#[allow(deprecated)]
pub fn docauthors_cmd_for_workspace(workspace: &Path) -> Command {
    let mut cmd = Command::cargo_bin("docauthors").expect("docauthors binary should be built");
    cmd.current_dir(workspace)
        .env_remove("DOCAUTHORS_WORKSPACE")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

/// Command for the real docauthors binary, outside any workspace
#[allow(dead_code)]
pub fn docauthors_cmd() -> Command {
    docauthors_cmd_for_workspace(&std::env::temp_dir())
}
