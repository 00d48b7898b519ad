//! Error handling utilities for the daybook application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.
//!
//! Unrecognised date tokens are deliberately absent from this taxonomy: the
//! resolver reports them as `DateResolution::Unresolved` and the caller's
//! `DateParsePolicy` decides whether that becomes an error.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Represents errors that can occur when attempting to lock the journal file.
///
/// # Examples
///
/// Creating a file busy error:
///
/// ```
/// use daybook::errors::LockError;
/// use std::path::PathBuf;
///
/// let error = LockError::FileBusy {
///     path: PathBuf::from("/path/to/journal.json"),
/// };
///
/// assert!(format!("{}", error).contains("in use by another daybook process"));
/// ```
#[derive(Debug, Error)]
pub enum LockError {
    /// Error when the journal is already locked by another process.
    #[error("Journal {path} is in use by another daybook process. Wait for it to finish and try again.")]
    FileBusy {
        /// The path to the journal that is locked
        path: PathBuf,
    },

    /// Error when acquiring the lock fails for a technical reason.
    #[error("Failed to acquire lock for journal {path}: {source}. Please check file permissions and ensure the directory is accessible.")]
    AcquisitionFailed {
        /// The path to the journal that couldn't be locked
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Represents problems with the contents of the journal file.
///
/// A corrupt entry aborts the whole load; no partial journal is ever returned,
/// so a later save cannot silently drop the unreadable entries.
///
/// ```
/// use daybook::errors::StorageError;
///
/// let source = chrono::NaiveDateTime::parse_from_str("yesterday-ish", "%Y-%m-%d, %H:%M")
///     .unwrap_err();
/// let error = StorageError::MalformedTimestamp {
///     index: 3,
///     timestamp: "yesterday-ish".to_string(),
///     source,
/// };
/// assert!(format!("{}", error).contains("entry #3"));
/// ```
#[derive(Debug, Error)]
pub enum StorageError {
    /// A stored timestamp does not follow the canonical `YYYY-MM-DD, HH:MM` format.
    #[error("Stored entry #{index} has malformed timestamp '{timestamp}': {source}. Fix or remove the entry in the journal file.")]
    MalformedTimestamp {
        /// Zero-based position of the entry in the journal file
        index: usize,
        /// The offending timestamp text
        timestamp: String,
        /// The underlying parse error
        #[source]
        source: chrono::ParseError,
    },

    /// The journal file is not a JSON array of entries.
    #[error("Journal file {path} is not a valid journal: {source}")]
    InvalidFormat {
        /// The path of the unreadable journal
        path: PathBuf,
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
    },
}

/// Represents all possible errors that can occur in the daybook application.
///
/// This enum is the central error type used across the application, with variants
/// for different error categories. It uses `thiserror` for deriving the `Error` trait
/// implementation and formatted error messages.
///
/// # Examples
///
/// Creating a configuration error:
/// ```
/// use daybook::errors::AppError;
///
/// let error = AppError::Config("Journal path is empty".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: Journal path is empty");
/// ```
///
/// Converting from an IO error:
/// ```
/// use daybook::errors::AppError;
/// use std::io::{self, ErrorKind};
///
/// let io_error = io::Error::new(ErrorKind::NotFound, "file not found");
/// let app_error: AppError = io_error.into();
///
/// match app_error {
///     AppError::Io(inner) => assert_eq!(inner.kind(), ErrorKind::NotFound),
///     _ => panic!("Expected Io variant"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from filesystem operations.
    ///
    /// This variant automatically converts from `std::io::Error` through the `From` trait.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors in journal logic (e.g., a date the caller refused to guess).
    #[error("Journal logic error: {0}")]
    Journal(String),

    /// Errors related to locking the journal file.
    #[error("File locking error: {0}")]
    Lock(#[from] LockError),

    /// Errors in the persisted journal contents.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Errors while encoding entries as JSON.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
///
/// # Examples
///
/// ```
/// use daybook::errors::{AppResult, AppError};
///
/// fn might_fail() -> AppResult<String> {
///     if false {
///         return Err(AppError::Journal("Something went wrong".to_string()));
///     }
///     Ok("Operation succeeded".to_string())
/// }
/// ```
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    fn timestamp_parse_error() -> chrono::ParseError {
        chrono::NaiveDateTime::parse_from_str("2024-13-45, 99:99", "%Y-%m-%d, %H:%M")
            .expect_err("timestamp should be rejected")
    }

    #[test]
    fn test_io_error_converts_and_keeps_kind() {
        let result: AppResult<String> =
            std::fs::read_to_string("/definitely/not/a/daybook/journal.json").map_err(AppError::from);

        match result {
            Err(AppError::Io(inner)) => assert_eq!(inner.kind(), io::ErrorKind::NotFound),
            other => panic!("Expected AppError::Io, got {:?}", other),
        }
    }

    #[test]
    fn test_messages_name_their_category() {
        let cases = [
            (AppError::Config("Journal path is empty".to_string()), "Configuration error: "),
            (AppError::Journal("'someday' is not a recognised date".to_string()), "Journal logic error: "),
            (
                AppError::Lock(LockError::FileBusy {
                    path: PathBuf::from("/j.json"),
                }),
                "File locking error: ",
            ),
            (
                AppError::Storage(StorageError::MalformedTimestamp {
                    index: 0,
                    timestamp: "x".to_string(),
                    source: timestamp_parse_error(),
                }),
                "Storage error: ",
            ),
        ];

        for (error, prefix) in cases {
            assert!(error.to_string().starts_with(prefix), "{}", error);
        }
    }

    #[test]
    fn test_busy_journal_names_path_and_has_no_source() {
        let error = LockError::FileBusy {
            path: PathBuf::from("/home/me/.daybook/journal.json"),
        };
        assert!(error.to_string().contains("/home/me/.daybook/journal.json"));
        assert!(error.source().is_none());
    }

    #[test]
    fn test_lock_failure_chains_to_io_error() {
        let app_error: AppError = LockError::AcquisitionFailed {
            path: PathBuf::from("/readonly/journal.json"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        }
        .into();

        let lock_error = app_error.source().expect("AppError::Lock should expose the lock error");
        let io_error = lock_error
            .source()
            .and_then(|source| source.downcast_ref::<io::Error>())
            .expect("lock error should expose the io::Error");
        assert_eq!(io_error.kind(), io::ErrorKind::PermissionDenied);
    }

    #[test]
    fn test_malformed_timestamp_points_at_entry() {
        let error = StorageError::MalformedTimestamp {
            index: 7,
            timestamp: "15/04/2023".to_string(),
            source: timestamp_parse_error(),
        };
        let message = error.to_string();
        assert!(message.contains("entry #7"));
        assert!(message.contains("15/04/2023"));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_invalid_format_wraps_json_error() {
        let source = serde_json::from_str::<Vec<u8>>("{not json").unwrap_err();
        let app_error: AppError = StorageError::InvalidFormat {
            path: PathBuf::from("/j.json"),
            source,
        }
        .into();
        assert!(matches!(
            app_error,
            AppError::Storage(StorageError::InvalidFormat { .. })
        ));
    }
}
