//! Error taxonomy for logview-core.
//!
//! Three kinds, all surfaced to the caller unchanged: the core performs no
//! logging, no retries, and no partial degradation.

use thiserror::Error;

/// An input record failed a [`LogRecord`](crate::LogRecord) invariant.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field was empty or missing.
    #[error("field `{0}` must be non-empty")]
    EmptyField(&'static str),

    /// The level is not one of the enumerated values.
    #[error("invalid level `{0}`, expected one of error, warn, info, debug")]
    InvalidLevel(String),

    /// The timestamp is not a valid RFC 3339 date-time.
    #[error("invalid timestamp `{value}`")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// The backing file is missing, unreadable, unwritable, or corrupt.
///
/// A corrupt file is never auto-truncated or reset once it has been
/// successfully created.
#[derive(Debug, Error)]
pub enum StorageError {
    /// An I/O error occurred reading or writing the backing file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file contents could not be serialized or deserialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A filter specification could not be evaluated.
#[derive(Debug, Error)]
pub enum QueryError {
    /// A time-range bound is not a valid RFC 3339 date-time.
    #[error("invalid {which} bound `{value}`")]
    InvalidBound {
        which: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Union of the three error kinds, returned by the boundary operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Query(#[from] QueryError),
}

/// Result type alias for the boundary operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = ValidationError::EmptyField("message");
        assert_eq!(err.to_string(), "field `message` must be non-empty");

        let err = ValidationError::InvalidLevel("fatal".to_string());
        assert_eq!(
            err.to_string(),
            "invalid level `fatal`, expected one of error, warn, info, debug"
        );
    }

    #[test]
    fn io_errors_convert_to_storage() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: StorageError = io.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
