//! Error types for cast-state

use std::fmt;

/// Result type for cast-state operations
pub type Result<T> = std::result::Result<T, StateError>;

/// Errors raised while building state values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    /// A media item had no content URL
    MissingContentUrl,

    /// A URL could not be parsed
    InvalidUrl(String),
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateError::MissingContentUrl => write!(f, "Media item has no content URL"),
            StateError::InvalidUrl(url) => write!(f, "Invalid URL: {}", url),
        }
    }
}

impl std::error::Error for StateError {}

impl From<url::ParseError> for StateError {
    fn from(err: url::ParseError) -> Self {
        StateError::InvalidUrl(err.to_string())
    }
}
