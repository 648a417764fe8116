//! Booking types for tracking seat reservations.
//!
//! This module provides the booking reference newtype, occupant details,
//! and the booking record that ties a reference, a seat, and an occupant
//! together with a creation timestamp.

use std::fmt;
use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use crate::SeatId;

/// The characters a booking reference may contain.
pub const REFERENCE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// The exact length of a booking reference.
pub const REFERENCE_LENGTH: usize = 8;

/// A validated booking reference: exactly 8 uppercase letters or digits.
///
/// References identify bookings for the life of the store and are never
/// reissued, even after the booked seat is released.
///
/// # Examples
///
/// ```
/// use cabin::BookingReference;
///
/// let reference = BookingReference::new("AB12CD34").unwrap();
/// assert_eq!(reference.as_str(), "AB12CD34");
///
/// // Lowercase and wrong lengths are rejected
/// assert!(BookingReference::new("ab12cd34").is_err());
/// assert!(BookingReference::new("AB12").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingReference(String);

impl BookingReference {
    /// Creates a booking reference from text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not exactly 8 characters drawn from
    /// `A-Z` and `0-9`.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.len() != REFERENCE_LENGTH {
            return Err(ValidationError {
                field: "reference".into(),
                message: format!(
                    "reference must be exactly {REFERENCE_LENGTH} characters, got {}",
                    value.len()
                ),
            });
        }
        if !value
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
        {
            return Err(ValidationError {
                field: "reference".into(),
                message: "reference may only contain A-Z and 0-9".into(),
            });
        }
        Ok(Self(value))
    }

    /// Returns the reference text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookingReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The customer details attached to a booking.
///
/// # Examples
///
/// ```
/// use cabin::Occupant;
///
/// let occupant = Occupant::new("Alice Smith", "P123").unwrap();
/// assert_eq!(occupant.customer_name(), "Alice Smith");
/// assert_eq!(occupant.passport_number(), "P123");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupant {
    customer_name: String,
    passport_number: String,
}

impl Occupant {
    /// Creates occupant details.
    ///
    /// Both fields are trimmed of leading/trailing whitespace.
    ///
    /// # Errors
    ///
    /// Returns an error if either field is empty after trimming.
    pub fn new(
        customer_name: impl Into<String>,
        passport_number: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let customer_name = customer_name.into().trim().to_string();
        if customer_name.is_empty() {
            return Err(ValidationError {
                field: "customer_name".into(),
                message: "customer name must be non-empty after trimming whitespace".into(),
            });
        }

        let passport_number = passport_number.into().trim().to_string();
        if passport_number.is_empty() {
            return Err(ValidationError {
                field: "passport_number".into(),
                message: "passport number must be non-empty after trimming whitespace".into(),
            });
        }

        Ok(Self {
            customer_name,
            passport_number,
        })
    }

    /// Returns the customer name.
    #[must_use]
    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    /// Returns the passport number.
    #[must_use]
    pub fn passport_number(&self) -> &str {
        &self.passport_number
    }

    /// Returns `true` if the given name matches the customer name,
    /// ignoring case and surrounding whitespace.
    #[must_use]
    pub fn matches_name(&self, name: &str) -> bool {
        self.customer_name.eq_ignore_ascii_case(name.trim())
    }
}

/// A booking record tying a reference, a seat, and an occupant together.
///
/// Booking records form the store's audit history: they are inserted when a
/// seat is reserved and never deleted, so released seats keep their past
/// bookings queryable.
///
/// # Examples
///
/// ```
/// use cabin::{Booking, BookingReference, Occupant, SeatId};
///
/// let reference = BookingReference::new("AB12CD34").unwrap();
/// let seat = SeatId::parse("1A").unwrap();
/// let occupant = Occupant::new("Alice Smith", "P123").unwrap();
///
/// let booking = Booking::builder(reference, seat, occupant).build();
/// assert_eq!(booking.seat().to_string(), "1A");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    reference: BookingReference,
    seat: SeatId,
    occupant: Occupant,
    created_at: SystemTime,
}

impl Booking {
    /// Creates a new booking builder.
    #[must_use]
    pub fn builder(reference: BookingReference, seat: SeatId, occupant: Occupant) -> BookingBuilder {
        BookingBuilder {
            reference,
            seat,
            occupant,
            created_at: None,
        }
    }

    /// Returns the booking reference.
    #[must_use]
    pub const fn reference(&self) -> &BookingReference {
        &self.reference
    }

    /// Returns the booked seat.
    #[must_use]
    pub const fn seat(&self) -> SeatId {
        self.seat
    }

    /// Returns the occupant details.
    #[must_use]
    pub const fn occupant(&self) -> &Occupant {
        &self.occupant
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> SystemTime {
        self.created_at
    }

    /// Returns a copy of this booking under a different reference.
    ///
    /// Used when a freshly minted reference collides in the store and a
    /// replacement must be recorded.
    #[must_use]
    pub fn with_reference(&self, reference: BookingReference) -> Self {
        Self {
            reference,
            seat: self.seat,
            occupant: self.occupant.clone(),
            created_at: self.created_at,
        }
    }
}

/// Builder for creating `Booking` instances.
#[derive(Debug)]
pub struct BookingBuilder {
    reference: BookingReference,
    seat: SeatId,
    occupant: Occupant,
    created_at: Option<SystemTime>,
}

impl BookingBuilder {
    /// Sets the creation timestamp.
    #[must_use]
    pub fn created_at(mut self, created_at: SystemTime) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Builds the booking.
    ///
    /// The reference, seat, and occupant were validated at construction, so
    /// building cannot fail; a missing timestamp defaults to now.
    #[must_use]
    pub fn build(self) -> Booking {
        Booking {
            reference: self.reference,
            seat: self.seat,
            occupant: self.occupant,
            created_at: self.created_at.unwrap_or_else(SystemTime::now),
        }
    }
}

/// Error type for validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn references_over_the_alphabet_always_validate(
            indices in proptest::collection::vec(0usize..REFERENCE_ALPHABET.len(), REFERENCE_LENGTH)
        ) {
            let text: String = indices
                .iter()
                .map(|&i| REFERENCE_ALPHABET[i] as char)
                .collect();
            prop_assert!(BookingReference::new(text).is_ok());
        }

        #[test]
        fn wrong_length_never_validates(len in 0usize..20) {
            prop_assume!(len != REFERENCE_LENGTH);
            let text = "A".repeat(len);
            prop_assert!(BookingReference::new(text).is_err());
        }
    }
}
