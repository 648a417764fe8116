//! Shared test utilities for database unit tests.
//!
//! This module provides helper functions used across multiple database test modules.

use tempfile::tempdir;

use crate::booking::{Booking, BookingReference, Occupant};
use crate::database::{Database, DatabaseConfig};
use crate::seat::SeatId;

/// Creates a temporary test database that will be cleaned up automatically.
///
/// # Panics
///
/// Panics if the temporary directory or database cannot be created.
/// This is acceptable in test code where we want to fail fast.
#[must_use]
pub fn create_test_database() -> Database {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.db");
    let config = DatabaseConfig::new(path);
    let db = Database::open(config).unwrap();

    // Prevent the TempDir from being dropped immediately
    std::mem::forget(dir);

    db
}

/// Creates a test booking with the given reference, seat, and customer name.
///
/// Uses a fixed passport number.
///
/// # Panics
///
/// Panics if any of the inputs fail validation.
/// This is acceptable in test code where we want to fail fast.
#[must_use]
pub fn create_test_booking(reference: &str, seat: &str, name: &str) -> Booking {
    let reference = BookingReference::new(reference).unwrap();
    let seat = SeatId::parse(seat).unwrap();
    let occupant = Occupant::new(name, "P123").unwrap();
    Booking::builder(reference, seat, occupant).build()
}
