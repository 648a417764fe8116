//! Seat identifier and seat state types for cabin seat management.
//!
//! This module provides types for working with the fixed 480-seat cabin
//! layout (rows A-F, columns 1-80), including identifier validation,
//! parsing, and the reserved/free seat state machine.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::booking::{BookingReference, Occupant};

/// A cabin row letter (A through F).
///
/// # Examples
///
/// ```
/// use cabin::SeatRow;
///
/// let row = SeatRow::try_from('c').unwrap();
/// assert_eq!(row, SeatRow::C);
/// assert_eq!(row.letter(), 'C');
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum SeatRow {
    /// Row A.
    A,
    /// Row B.
    B,
    /// Row C.
    C,
    /// Row D.
    D,
    /// Row E.
    E,
    /// Row F.
    F,
}

impl SeatRow {
    /// All rows in cabin order.
    pub const ALL: [Self; 6] = [Self::A, Self::B, Self::C, Self::D, Self::E, Self::F];

    /// Returns the uppercase row letter.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::E => 'E',
            Self::F => 'F',
        }
    }
}

impl TryFrom<char> for SeatRow {
    type Error = InvalidSeatIdError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value.to_ascii_uppercase() {
            'A' => Ok(Self::A),
            'B' => Ok(Self::B),
            'C' => Ok(Self::C),
            'D' => Ok(Self::D),
            'E' => Ok(Self::E),
            'F' => Ok(Self::F),
            _ => Err(InvalidSeatIdError {
                input: value.to_string(),
                reason: "row letter must be A through F".into(),
            }),
        }
    }
}

impl fmt::Display for SeatRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A valid seat identifier: a column number (1-80) paired with a row letter.
///
/// Ordering is row-major (all of row A before row B), which matches the
/// cabin display order.
///
/// # Examples
///
/// ```
/// use cabin::SeatId;
///
/// let seat = SeatId::parse("12c").unwrap();
/// assert_eq!(seat.to_string(), "12C");
/// assert_eq!(seat.column(), 12);
///
/// // Out-of-range columns are rejected
/// assert!(SeatId::parse("81A").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatId {
    row: SeatRow,
    column: u8,
}

impl SeatId {
    /// The minimum valid column number.
    pub const MIN_COLUMN: u8 = 1;

    /// The maximum valid column number.
    pub const MAX_COLUMN: u8 = 80;

    /// Total number of seats in the cabin.
    pub const COUNT: usize = 480;

    /// Creates a seat identifier from a row and a column number.
    ///
    /// # Errors
    ///
    /// Returns an error if the column is outside 1-80.
    pub fn new(row: SeatRow, column: u8) -> Result<Self, InvalidSeatIdError> {
        if column < Self::MIN_COLUMN || column > Self::MAX_COLUMN {
            Err(InvalidSeatIdError {
                input: format!("{column}{row}"),
                reason: format!("column must be between 1 and 80, got {column}"),
            })
        } else {
            Ok(Self { row, column })
        }
    }

    /// Parses a seat identifier from text such as `"12C"`.
    ///
    /// Input is trimmed and matched case-insensitively, so `" 12c "` parses
    /// to the same seat as `"12C"`.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a column number 1-80 followed by
    /// a row letter A-F.
    pub fn parse(input: &str) -> Result<Self, InvalidSeatIdError> {
        let trimmed = input.trim();
        let mut chars = trimmed.chars();
        let row_char = chars.next_back().ok_or_else(|| InvalidSeatIdError {
            input: input.to_string(),
            reason: "seat id is empty".into(),
        })?;
        let digits = chars.as_str();

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidSeatIdError {
                input: input.to_string(),
                reason: "expected a column number followed by a row letter".into(),
            });
        }

        let row = SeatRow::try_from(row_char).map_err(|_| InvalidSeatIdError {
            input: input.to_string(),
            reason: "row letter must be A through F".into(),
        })?;
        let column: u8 = digits.parse().map_err(|_| InvalidSeatIdError {
            input: input.to_string(),
            reason: "column number out of range".into(),
        })?;

        Self::new(row, column).map_err(|e| InvalidSeatIdError {
            input: input.to_string(),
            reason: e.reason,
        })
    }

    /// Returns the row letter.
    #[must_use]
    pub const fn row(self) -> SeatRow {
        self.row
    }

    /// Returns the column number (1-80).
    #[must_use]
    pub const fn column(self) -> u8 {
        self.column
    }

    /// Returns an iterator over all 480 seats in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// use cabin::SeatId;
    ///
    /// assert_eq!(SeatId::all().count(), SeatId::COUNT);
    /// ```
    pub fn all() -> impl Iterator<Item = Self> {
        SeatRow::ALL.into_iter().flat_map(|row| {
            (Self::MIN_COLUMN..=Self::MAX_COLUMN).map(move |column| Self { row, column })
        })
    }
}

impl Ord for SeatId {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row
            .cmp(&other.row)
            .then(self.column.cmp(&other.column))
    }
}

impl PartialOrd for SeatId {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column, self.row)
    }
}

impl std::str::FromStr for SeatId {
    type Err = InvalidSeatIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Error type for unparseable or out-of-range seat identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidSeatIdError {
    /// The rejected input.
    pub input: String,
    /// The reason the identifier is invalid.
    pub reason: String,
}

impl fmt::Display for InvalidSeatIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid seat id {:?}: {}", self.input, self.reason)
    }
}

impl std::error::Error for InvalidSeatIdError {}

/// The occupancy state of a single seat.
///
/// A reserved seat always carries both its booking reference and its
/// occupant; a free seat carries neither. Invalid combinations (a free seat
/// with a lingering occupant, a reserved seat without a reference) cannot be
/// constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SeatStatus {
    /// The seat is available.
    Free,
    /// The seat is held by a booking.
    Reserved {
        /// The booking reference holding this seat.
        reference: BookingReference,
        /// The customer occupying this seat.
        occupant: Occupant,
    },
}

/// A seat together with its current occupancy state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    id: SeatId,
    #[serde(flatten)]
    status: SeatStatus,
}

impl Seat {
    /// Creates a free seat.
    #[must_use]
    pub const fn free(id: SeatId) -> Self {
        Self {
            id,
            status: SeatStatus::Free,
        }
    }

    /// Creates a reserved seat.
    #[must_use]
    pub const fn reserved(id: SeatId, reference: BookingReference, occupant: Occupant) -> Self {
        Self {
            id,
            status: SeatStatus::Reserved {
                reference,
                occupant,
            },
        }
    }

    /// Returns the seat identifier.
    #[must_use]
    pub const fn id(&self) -> SeatId {
        self.id
    }

    /// Returns the occupancy state.
    #[must_use]
    pub const fn status(&self) -> &SeatStatus {
        &self.status
    }

    /// Returns `true` if the seat is available.
    #[must_use]
    pub const fn is_free(&self) -> bool {
        matches!(self.status, SeatStatus::Free)
    }

    /// Returns the booking reference if the seat is reserved.
    #[must_use]
    pub fn reference(&self) -> Option<&BookingReference> {
        match &self.status {
            SeatStatus::Free => None,
            SeatStatus::Reserved { reference, .. } => Some(reference),
        }
    }

    /// Returns the occupant if the seat is reserved.
    #[must_use]
    pub fn occupant(&self) -> Option<&Occupant> {
        match &self.status {
            SeatStatus::Free => None,
            SeatStatus::Reserved { occupant, .. } => Some(occupant),
        }
    }
}
