//! docauthors - author front matter checker
//!
//! Validates the `authors` front matter of documentation pages. A page may
//! declare an author key, an inline author object, or a list of them; see
//! [`authors::validate`]. Keys can be resolved against a site-wide
//! `authors.yml` through [`authors::AuthorRegistry`].

pub mod authors;
pub mod cli;
pub mod commands;
pub mod config;
pub mod discovery;
pub mod document;
pub mod error;
pub mod frontmatter;
pub mod logging;

pub use authors::{AuthorEntry, AuthorInlineRecord, AuthorRegistry, validate, validate_field};
pub use error::{DocAuthorsError, FrontMatterAuthorError, Result};
