//! Front matter errors

use super::DocAuthorsError;

/// Creates a front matter parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> DocAuthorsError {
    DocAuthorsError::FrontMatterParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a front matter not a mapping error
pub fn not_mapping(path: impl Into<String>) -> DocAuthorsError {
    DocAuthorsError::FrontMatterNotMapping { path: path.into() }
}
