//! Error types and handling for docauthors
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`author`]: Front-matter author validation errors
//! - [`registry`]: Author registry (authors map) errors
//! - [`frontmatter`]: Front matter parsing errors
//! - [`config`]: Configuration errors
//! - [`fs`]: File system errors

pub mod author;
pub mod config;
pub mod frontmatter;
pub mod fs;
pub mod registry;

pub use author::{AUTHOR_ERROR_TEMPLATE, AuthorIssue, FrontMatterAuthorError};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for docauthors operations
#[derive(Error, Diagnostic, Debug)]
pub enum DocAuthorsError {
    // Author errors
    #[error("{path}: {source}")]
    #[diagnostic(
        code(docauthors::authors::invalid),
        help("Use an author key, an author object, or a list of them")
    )]
    InvalidAuthors {
        path: String,
        source: FrontMatterAuthorError,
    },

    #[error("Author key '{key}' not found in the authors map")]
    #[diagnostic(
        code(docauthors::authors::unknown_key),
        help("Add the author to authors.yml or fix the key in the front matter")
    )]
    UnknownAuthorKey { key: String },

    // Front matter errors
    #[error("Failed to parse front matter in {path}: {reason}")]
    #[diagnostic(code(docauthors::frontmatter::parse_failed))]
    FrontMatterParseFailed { path: String, reason: String },

    #[error("Front matter in {path} is not a mapping")]
    #[diagnostic(
        code(docauthors::frontmatter::not_mapping),
        help("Front matter must be a YAML mapping of field names to values")
    )]
    FrontMatterNotMapping { path: String },

    // Registry errors
    #[error("Failed to parse authors map: {path}: {reason}")]
    #[diagnostic(code(docauthors::registry::parse_failed))]
    RegistryParseFailed { path: String, reason: String },

    #[error("Invalid author '{key}' in authors map: {reason}")]
    #[diagnostic(code(docauthors::registry::invalid))]
    RegistryInvalid { key: String, reason: String },

    // Configuration errors
    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(docauthors::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(docauthors::config::invalid))]
    ConfigInvalid { message: String },

    // File system errors
    #[error("File not found: {path}")]
    #[diagnostic(code(docauthors::fs::not_found))]
    FileNotFound { path: String },

    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(docauthors::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(docauthors::fs::io_error))]
    IoError { message: String },

    // CLI errors
    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(docauthors::cli::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },

    // Check outcome
    #[error("{invalid} of {total} documents have invalid authors")]
    #[diagnostic(code(docauthors::check::failed))]
    ValidationFailed { invalid: usize, total: usize },
}

impl From<std::io::Error> for DocAuthorsError {
    fn from(err: std::io::Error) -> Self {
        DocAuthorsError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for DocAuthorsError {
    fn from(err: serde_yaml::Error) -> Self {
        DocAuthorsError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for DocAuthorsError {
    fn from(err: serde_json::Error) -> Self {
        DocAuthorsError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, DocAuthorsError>;
