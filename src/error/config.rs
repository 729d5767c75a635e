//! Configuration errors

use super::DocAuthorsError;

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> DocAuthorsError {
    DocAuthorsError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid config error
pub fn invalid(message: impl Into<String>) -> DocAuthorsError {
    DocAuthorsError::ConfigInvalid {
        message: message.into(),
    }
}
