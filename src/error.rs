//! Error types for the Wordhoard service.
//!
//! All failures are represented by [`WordhoardError`]. Every variant maps onto
//! one of the four [`ErrorKind`] classes that the response encoder turns into a
//! status code.
//!
//! # Examples
//!
//! ```
//! use wordhoard::error::{ErrorKind, WordhoardError, Result};
//!
//! fn parse_limit(raw: &str) -> Result<usize> {
//!     raw.parse()
//!         .map_err(|_| WordhoardError::bad_request(format!("invalid limit: {raw}")))
//! }
//!
//! let err = parse_limit("many").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::BadRequest);
//! ```

use std::io;
use std::sync::Arc;

use thiserror::Error;

/// Classification of an error as seen by callers of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed or missing client input.
    BadRequest,
    /// Well-formed dictionary identifier that is not registered.
    UnknownDictionary,
    /// No such operation.
    NotFound,
    /// Failure while building a dictionary or running a search.
    Internal,
}

/// The main error type for Wordhoard operations.
#[derive(Error, Debug)]
pub enum WordhoardError {
    /// A required parameter is missing or a parameter failed to parse.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The requested dictionary is not in the registry.
    #[error("Unknown dictionary: {0}")]
    UnknownDictionary(String),

    /// The request path does not name an operation.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A caller-supplied regular expression failed to compile.
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Building a word list or search index failed.
    #[error("Build error: {0}")]
    Build(String),

    /// I/O errors (dictionary files, sockets)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Anything else that went wrong inside the service.
    #[error("Internal error: {0}")]
    Internal(String),

    /// One build failure handed to every caller that waited on it.
    #[error(transparent)]
    Shared(Arc<WordhoardError>),
}

/// Result type alias for operations that may fail with WordhoardError.
pub type Result<T> = std::result::Result<T, WordhoardError>;

impl WordhoardError {
    /// Create a new bad request error.
    pub fn bad_request<S: Into<String>>(msg: S) -> Self {
        WordhoardError::BadRequest(msg.into())
    }

    /// Create a new unknown dictionary error.
    pub fn unknown_dictionary<S: Into<String>>(id: S) -> Self {
        WordhoardError::UnknownDictionary(id.into())
    }

    /// Create a new not found error.
    pub fn not_found<S: Into<String>>(path: S) -> Self {
        WordhoardError::NotFound(path.into())
    }

    /// Create a new build error.
    pub fn build<S: Into<String>>(msg: S) -> Self {
        WordhoardError::Build(msg.into())
    }

    /// Create a new internal error.
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        WordhoardError::Internal(msg.into())
    }

    /// Classify this error for the response encoder.
    pub fn kind(&self) -> ErrorKind {
        match self {
            WordhoardError::BadRequest(_) | WordhoardError::Pattern(_) => ErrorKind::BadRequest,
            WordhoardError::UnknownDictionary(_) => ErrorKind::UnknownDictionary,
            WordhoardError::NotFound(_) => ErrorKind::NotFound,
            WordhoardError::Build(_)
            | WordhoardError::Io(_)
            | WordhoardError::Json(_)
            | WordhoardError::Internal(_) => ErrorKind::Internal,
            WordhoardError::Shared(inner) => inner.kind(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = WordhoardError::bad_request("missing parameter: word");
        assert_eq!(error.to_string(), "Bad request: missing parameter: word");

        let error = WordhoardError::unknown_dictionary("notreal");
        assert_eq!(error.to_string(), "Unknown dictionary: notreal");

        let error = WordhoardError::not_found("/nowhere");
        assert_eq!(error.to_string(), "Not found: /nowhere");
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            WordhoardError::bad_request("x").kind(),
            ErrorKind::BadRequest
        );
        assert_eq!(
            WordhoardError::unknown_dictionary("x").kind(),
            ErrorKind::UnknownDictionary
        );
        assert_eq!(WordhoardError::not_found("x").kind(), ErrorKind::NotFound);
        assert_eq!(WordhoardError::build("x").kind(), ErrorKind::Internal);
        assert_eq!(WordhoardError::internal("x").kind(), ErrorKind::Internal);

        let pattern = regex::Regex::new("(").unwrap_err();
        assert_eq!(WordhoardError::from(pattern).kind(), ErrorKind::BadRequest);
    }

    #[test]
    fn test_shared_error_keeps_kind_and_message() {
        let inner = Arc::new(WordhoardError::build("failed to load dictionary en"));
        let shared = WordhoardError::Shared(Arc::clone(&inner));

        assert_eq!(shared.kind(), ErrorKind::Internal);
        assert_eq!(shared.to_string(), inner.to_string());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = WordhoardError::from(io_error);

        match error {
            WordhoardError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
        assert_eq!(
            WordhoardError::from(io::Error::other("disk")).kind(),
            ErrorKind::Internal
        );
    }
}
