//! Error types for the cabin library.
//!
//! This module provides a comprehensive error hierarchy for all operations
//! in the cabin library, using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

use crate::booking::BookingReference;
use crate::seat::SeatId;

/// Result type alias for operations that may fail with a cabin error.
///
/// # Examples
///
/// ```
/// use cabin::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(480)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the cabin library.
///
/// This enum encompasses all possible error conditions that can occur
/// during seat reservation operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A seat identifier did not name a seat in the cabin.
    ///
    /// Unparseable identifiers and well-formed identifiers outside the
    /// cabin layout both report as this variant.
    #[error("seat not found: {id}")]
    SeatNotFound {
        /// The identifier as given by the caller.
        id: String,
    },

    /// An attempt was made to reserve a seat that is already reserved.
    #[error("seat {id} is already reserved")]
    SeatAlreadyReserved {
        /// The seat that is already held.
        id: SeatId,
    },

    /// An attempt was made to release a seat that is not reserved.
    #[error("seat {id} is not reserved")]
    SeatNotReserved {
        /// The seat that is already free.
        id: SeatId,
    },

    /// A booking reference collided with one already in the store.
    #[error("booking reference {reference} already exists")]
    DuplicateReference {
        /// The colliding reference.
        reference: BookingReference,
    },

    /// Reference generation gave up after repeated collisions.
    #[error("could not generate a unique booking reference after {attempts} attempts")]
    ReferenceSpaceExhausted {
        /// The number of generation attempts made.
        attempts: u32,
    },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A database lock timeout occurred.
    #[error("database lock timeout after {seconds}s")]
    LockTimeout {
        /// The number of seconds waited before timing out.
        seconds: u64,
    },

    /// The data directory was not found and auto-initialization is disabled.
    #[error("data directory not found: {}", path.display())]
    DataDirectoryNotFound {
        /// The expected path to the data directory.
        path: PathBuf,
    },

    /// Database corruption was detected.
    #[error("database corruption detected: {details}")]
    DatabaseCorruption {
        /// Details about the corruption.
        details: String,
    },

    /// An unsupported schema version was encountered.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The expected schema version.
        expected: u32,
        /// The schema version found in the database.
        found: u32,
    },
}

// Additional conversions for better ergonomics

impl From<crate::seat::InvalidSeatIdError> for Error {
    fn from(err: crate::seat::InvalidSeatIdError) -> Self {
        Self::SeatNotFound { id: err.input }
    }
}

impl From<crate::booking::ValidationError> for Error {
    fn from(err: crate::booking::ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl Error {
    /// Check if error indicates an unknown seat.
    ///
    /// # Examples
    ///
    /// ```
    /// use cabin::Error;
    ///
    /// let err = Error::SeatNotFound { id: "999Z".to_string() };
    /// assert!(err.is_seat_not_found());
    /// ```
    #[must_use]
    pub fn is_seat_not_found(&self) -> bool {
        matches!(self, Self::SeatNotFound { .. })
    }

    /// Check if error indicates the seat was already held.
    #[must_use]
    pub fn is_already_reserved(&self) -> bool {
        matches!(self, Self::SeatAlreadyReserved { .. })
    }

    /// Check if error indicates a reference collision.
    #[must_use]
    pub fn is_duplicate_reference(&self) -> bool {
        matches!(self, Self::DuplicateReference { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_not_found_error() {
        let err = Error::SeatNotFound {
            id: "999Z".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("seat not found"));
        assert!(display.contains("999Z"));
        assert!(err.is_seat_not_found());
    }

    #[test]
    fn test_seat_already_reserved_error() {
        let id = SeatId::parse("1A").unwrap();
        let err = Error::SeatAlreadyReserved { id };
        let display = format!("{err}");
        assert!(display.contains("1A"));
        assert!(display.contains("already reserved"));
        assert!(err.is_already_reserved());
    }

    #[test]
    fn test_seat_not_reserved_error() {
        let id = SeatId::parse("12C").unwrap();
        let err = Error::SeatNotReserved { id };
        let display = format!("{err}");
        assert!(display.contains("12C"));
        assert!(display.contains("not reserved"));
    }

    #[test]
    fn test_duplicate_reference_error() {
        let reference = BookingReference::new("AB12CD34").unwrap();
        let err = Error::DuplicateReference { reference };
        let display = format!("{err}");
        assert!(display.contains("AB12CD34"));
        assert!(display.contains("already exists"));
        assert!(err.is_duplicate_reference());
    }

    #[test]
    fn test_reference_space_exhausted_error() {
        let err = Error::ReferenceSpaceExhausted { attempts: 64 };
        let display = format!("{err}");
        assert!(display.contains("64"));
        assert!(display.contains("unique booking reference"));
    }

    #[test]
    fn test_validation_error() {
        let err = Error::Validation {
            field: "customer_name".to_string(),
            message: "must be non-empty".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("validation error"));
        assert!(display.contains("customer_name"));
        assert!(display.contains("must be non-empty"));
    }

    #[test]
    fn test_lock_timeout_error() {
        let err = Error::LockTimeout { seconds: 5 };
        let display = format!("{err}");
        assert!(display.contains("lock timeout"));
        assert!(display.contains('5'));
    }

    #[test]
    fn test_data_directory_not_found_error() {
        let err = Error::DataDirectoryNotFound {
            path: PathBuf::from("/home/user/.cabin"),
        };
        let display = format!("{err}");
        assert!(display.contains("data directory not found"));
        assert!(display.contains(".cabin"));
    }

    #[test]
    fn test_database_corruption_error() {
        let err = Error::DatabaseCorruption {
            details: "unknown seat id in seats table".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("corruption"));
        assert!(display.contains("unknown seat id"));
    }

    #[test]
    fn test_unsupported_schema_version_error() {
        let err = Error::UnsupportedSchemaVersion {
            expected: 1,
            found: 2,
        };
        let display = format!("{err}");
        assert!(display.contains("unsupported schema version"));
        assert!(display.contains("expected 1"));
        assert!(display.contains("found 2"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        let display = format!("{err}");
        assert!(display.contains("I/O error"));
    }

    #[test]
    fn test_invalid_seat_id_maps_to_seat_not_found() {
        let parse_err = SeatId::parse("banana").unwrap_err();
        let err: Error = parse_err.into();
        assert!(err.is_seat_not_found());
        assert!(format!("{err}").contains("banana"));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<usize> {
            Err(Error::SeatNotFound {
                id: "0A".to_string(),
            })
        }

        assert!(returns_result().is_err());
    }
}
