//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixture builders for testing
//! the cabin library.

use std::path::PathBuf;
use std::time::SystemTime;

use cabin::{Booking, BookingReference, Occupant, SeatId};

/// Creates a temporary directory for testing.
///
/// The directory will be automatically cleaned up when the returned
/// `TempDir` is dropped.
#[allow(dead_code)]
pub fn create_temp_dir() -> std::io::Result<tempfile::TempDir> {
    tempfile::tempdir()
}

/// Creates a path for a test database in a temporary location.
#[allow(dead_code)]
pub fn create_test_database_path() -> std::io::Result<PathBuf> {
    let temp_dir = tempfile::tempdir()?;
    let db_path = temp_dir.path().join("test.db");
    // Keep the temp_dir alive by forgetting it - this is a test helper
    std::mem::forget(temp_dir);
    Ok(db_path)
}

/// Builder for creating test bookings with sensible defaults.
#[allow(dead_code)]
pub struct BookingFixture {
    reference: String,
    seat: String,
    customer_name: String,
    passport_number: String,
    created_at: Option<SystemTime>,
}

#[allow(dead_code)]
impl BookingFixture {
    /// Creates a new fixture builder with default values.
    ///
    /// Defaults:
    /// - reference: "AB12CD34"
    /// - seat: "1A"
    /// - customer: "Alice Smith" / "P123456"
    /// - timestamp: current time
    pub fn new() -> Self {
        Self {
            reference: "AB12CD34".into(),
            seat: "1A".into(),
            customer_name: "Alice Smith".into(),
            passport_number: "P123456".into(),
            created_at: None,
        }
    }

    /// Sets the booking reference.
    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = reference.into();
        self
    }

    /// Sets the seat.
    pub fn with_seat(mut self, seat: impl Into<String>) -> Self {
        self.seat = seat.into();
        self
    }

    /// Sets the customer name.
    pub fn with_customer_name(mut self, name: impl Into<String>) -> Self {
        self.customer_name = name.into();
        self
    }

    /// Sets the passport number.
    pub fn with_passport_number(mut self, passport: impl Into<String>) -> Self {
        self.passport_number = passport.into();
        self
    }

    /// Sets the creation timestamp.
    pub fn with_created_at(mut self, created_at: SystemTime) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Builds the booking.
    ///
    /// # Panics
    ///
    /// Panics if any fixture field fails validation. This is acceptable in
    /// test code where we want to fail fast on invalid fixtures.
    pub fn build(self) -> Booking {
        let reference = BookingReference::new(self.reference)
            .expect("fixture should have valid reference");
        let seat = SeatId::parse(&self.seat).expect("fixture should have valid seat");
        let occupant = Occupant::new(self.customer_name, self.passport_number)
            .expect("fixture should have valid occupant");

        let mut builder = Booking::builder(reference, seat, occupant);
        if let Some(created_at) = self.created_at {
            builder = builder.created_at(created_at);
        }
        builder.build()
    }
}

impl Default for BookingFixture {
    fn default() -> Self {
        Self::new()
    }
}
