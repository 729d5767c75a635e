//! Author registry errors

use super::DocAuthorsError;

/// Creates a registry parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> DocAuthorsError {
    DocAuthorsError::RegistryParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid registry entry error
pub fn invalid(key: impl Into<String>, reason: impl Into<String>) -> DocAuthorsError {
    DocAuthorsError::RegistryInvalid {
        key: key.into(),
        reason: reason.into(),
    }
}
