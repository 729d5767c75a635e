//! Front-matter author validation errors

use std::fmt;

use miette::Diagnostic;
use thiserror::Error;

use super::DocAuthorsError;

/// Message reported for every author validation failure.
///
/// `{{#label}}` is replaced with the quoted path of the offending field.
pub const AUTHOR_ERROR_TEMPLATE: &str = "{{#label}} does not look like a valid blog post author. Please use an author key or an author object (with a key and/or name).";

/// Why a value was rejected. Shown as diagnostic help, never in the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorIssue {
    /// Object has none of `key`, `name`, `imageURL`
    MissingIdentity,
    /// Field holds something other than a string
    NotAString { field: String },
    /// Field holds an empty string
    EmptyString { field: String },
    /// `url` is not a URI
    InvalidUrl { value: String },
    /// Both `imageURL` and its legacy alias `image_url` are set
    AliasConflict,
    /// Null element inside an authors list
    SparseElement,
    /// Value is neither a string, an object, nor a list of them
    UnsupportedType { found: &'static str },
}

impl fmt::Display for AuthorIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthorIssue::MissingIdentity => {
                write!(f, "author objects need at least one of key, name or imageURL")
            }
            AuthorIssue::NotAString { field } => write!(f, "'{field}' must be a string"),
            AuthorIssue::EmptyString { field } => write!(f, "'{field}' must not be empty"),
            AuthorIssue::InvalidUrl { value } => write!(f, "'{value}' is not a valid url"),
            AuthorIssue::AliasConflict => {
                write!(f, "image_url is an alias of imageURL; set only one of them")
            }
            AuthorIssue::SparseElement => write!(f, "author lists must not contain empty entries"),
            AuthorIssue::UnsupportedType { found } => {
                write!(f, "expected a string or an object, found {found}")
            }
        }
    }
}

/// The single validation error kind for author front matter.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", render(.label))]
pub struct FrontMatterAuthorError {
    /// Path of the offending field, e.g. `authors` or `authors[2]`
    pub label: String,
    pub issue: AuthorIssue,
}

impl FrontMatterAuthorError {
    pub fn new(label: impl Into<String>, issue: AuthorIssue) -> Self {
        Self {
            label: label.into(),
            issue,
        }
    }

    /// Rendered message with the label substituted.
    pub fn message(&self) -> String {
        render(&self.label)
    }
}

fn render(label: &str) -> String {
    AUTHOR_ERROR_TEMPLATE.replace("{{#label}}", &format!("\"{label}\""))
}

impl Diagnostic for FrontMatterAuthorError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("docauthors::authors::invalid"))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(&self.issue))
    }
}

/// Creates an invalid authors error for a document
pub fn invalid(path: impl Into<String>, source: FrontMatterAuthorError) -> DocAuthorsError {
    DocAuthorsError::InvalidAuthors {
        path: path.into(),
        source,
    }
}

/// Creates an unknown author key error
pub fn unknown_key(key: impl Into<String>) -> DocAuthorsError {
    DocAuthorsError::UnknownAuthorKey { key: key.into() }
}
