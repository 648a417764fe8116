//! Database CRUD operations for seats and bookings.
//!
//! This module implements all persistence operations for seat state and the
//! append-only booking history.

use std::time::{Duration, SystemTime};

use rusqlite::{params, Connection, TransactionBehavior};

use crate::booking::{Booking, BookingReference, Occupant};
use crate::error::{Error, Result};
use crate::seat::{Seat, SeatId, SeatStatus};

use super::connection::Database;
use super::schema::{INSERT_BOOKING, UPSERT_SEAT};

/// Converts a `SystemTime` to Unix epoch seconds for database storage.
///
/// # Errors
///
/// Returns an error if the time is before the Unix epoch.
#[allow(clippy::cast_possible_wrap)]
pub(super) fn systemtime_to_unix_secs(time: SystemTime) -> Result<i64> {
    time.duration_since(SystemTime::UNIX_EPOCH)
        .map_err(|e| Error::Validation {
            field: "timestamp".into(),
            message: format!("Invalid timestamp: {e}"),
        })
        .map(|d| d.as_secs() as i64)
}

/// Converts Unix epoch seconds from the database to a `SystemTime`.
#[allow(clippy::cast_sign_loss)]
pub(super) fn unix_secs_to_systemtime(secs: i64) -> SystemTime {
    SystemTime::UNIX_EPOCH + Duration::from_secs(secs as u64)
}

fn conversion_failure(details: String) -> rusqlite::Error {
    rusqlite::Error::ToSqlConversionFailure(details.into())
}

/// Helper function to deserialize a seat from a database row.
///
/// Expects row fields in this order: `seat_id`, status, reference,
/// `customer_name`, `passport_number`.
fn row_to_seat(row: &rusqlite::Row<'_>) -> rusqlite::Result<Seat> {
    let seat_text: String = row.get(0)?;
    let status: String = row.get(1)?;
    let reference: Option<String> = row.get(2)?;
    let customer_name: Option<String> = row.get(3)?;
    let passport_number: Option<String> = row.get(4)?;

    let id = SeatId::parse(&seat_text)
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

    match status.as_str() {
        "F" => Ok(Seat::free(id)),
        "R" => {
            let reference = reference
                .ok_or_else(|| conversion_failure(format!("seat {id} reserved without reference")))?;
            let customer_name = customer_name
                .ok_or_else(|| conversion_failure(format!("seat {id} reserved without customer")))?;
            let passport_number = passport_number
                .ok_or_else(|| conversion_failure(format!("seat {id} reserved without passport")))?;

            let reference = BookingReference::new(reference)
                .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
            let occupant = Occupant::new(customer_name, passport_number)
                .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

            Ok(Seat::reserved(id, reference, occupant))
        }
        other => Err(conversion_failure(format!(
            "seat {id} has unknown status {other:?}"
        ))),
    }
}

/// Helper function to deserialize a booking from a database row.
///
/// Expects row fields in this order: reference, `seat_id`, `customer_name`,
/// `passport_number`, `created_at`.
fn row_to_booking(row: &rusqlite::Row<'_>) -> rusqlite::Result<Booking> {
    let reference: String = row.get(0)?;
    let seat_text: String = row.get(1)?;
    let customer_name: String = row.get(2)?;
    let passport_number: String = row.get(3)?;
    let created_secs: i64 = row.get(4)?;

    let reference = BookingReference::new(reference)
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
    let seat = SeatId::parse(&seat_text)
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
    let occupant = Occupant::new(customer_name, passport_number)
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

    Ok(Booking::builder(reference, seat, occupant)
        .created_at(unix_secs_to_systemtime(created_secs))
        .build())
}

/// Maps deserialization failures to corruption, other failures to plain
/// database errors. A row this crate wrote can only fail to deserialize if
/// the file was edited or damaged.
fn map_load_error(e: rusqlite::Error) -> Error {
    match e {
        rusqlite::Error::ToSqlConversionFailure(inner) => Error::DatabaseCorruption {
            details: inner.to_string(),
        },
        other => Error::Database(other),
    }
}

// SQL statements for CRUD operations
const SELECT_SEATS: &str = r"
    SELECT seat_id, status, reference, customer_name, passport_number
    FROM seats
";

const CHECK_REFERENCE: &str = r"
    SELECT COUNT(*) FROM bookings WHERE reference = ?
";

const SELECT_BOOKING: &str = r"
    SELECT reference, seat_id, customer_name, passport_number, created_at
    FROM bookings
    WHERE reference = ?
";

const LIST_BOOKINGS: &str = r"
    SELECT reference, seat_id, customer_name, passport_number, created_at
    FROM bookings
    ORDER BY created_at, reference
";

const SELECT_BOOKINGS_BY_SEAT: &str = r"
    SELECT reference, seat_id, customer_name, passport_number, created_at
    FROM bookings
    WHERE seat_id = ?
    ORDER BY created_at, reference
";

const COUNT_BOOKINGS: &str = r"
    SELECT COUNT(*) FROM bookings
";

impl Database {
    /// Creates or updates a seat row in the database.
    ///
    /// This operation uses a transaction with IMMEDIATE mode to ensure
    /// atomicity. The seat identifier is the primary key, so saving the
    /// same seat twice replaces the row rather than duplicating it.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The transaction cannot be started
    /// - The upsert fails
    /// - The transaction cannot be committed
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use cabin::database::{Database, DatabaseConfig};
    /// use cabin::{Seat, SeatId};
    ///
    /// let config = DatabaseConfig::new("/tmp/cabin.db");
    /// let mut db = Database::open(config).unwrap();
    ///
    /// let seat = Seat::free(SeatId::parse("1A").unwrap());
    /// db.save_seat(&seat).unwrap();
    /// ```
    pub fn save_seat(&mut self, seat: &Seat) -> Result<()> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        Self::save_seat_simple(&tx, seat)?;

        tx.commit()?;
        Ok(())
    }

    /// Creates or updates a seat row using an existing connection or transaction.
    ///
    /// This method is intended for use within an existing transaction context.
    /// Unlike `save_seat`, it does not create its own transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the upsert fails.
    pub fn save_seat_simple(conn: &Connection, seat: &Seat) -> Result<()> {
        let (status, reference, occupant) = match seat.status() {
            SeatStatus::Free => ("F", None, None),
            SeatStatus::Reserved {
                reference,
                occupant,
            } => ("R", Some(reference.as_str()), Some(occupant)),
        };

        conn.execute(
            UPSERT_SEAT,
            params![
                seat.id().to_string(),
                status,
                reference,
                occupant.map(Occupant::customer_name),
                occupant.map(Occupant::passport_number),
            ],
        )?;

        Ok(())
    }

    /// Saves every given seat in a single transaction.
    ///
    /// Used to seed a fresh database and as an explicit full flush; the
    /// normal mutation path persists each seat as it changes.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction or any upsert fails. On error
    /// no seat from this call is persisted.
    pub fn save_all_seats<'a>(&mut self, seats: impl IntoIterator<Item = &'a Seat>) -> Result<()> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        for seat in seats {
            Self::save_seat_simple(&tx, seat)?;
        }

        tx.commit()?;
        Ok(())
    }

    /// Loads all persisted seat rows.
    ///
    /// Returns an empty vector for a fresh database; callers pass the rows
    /// to `SeatInventory::from_seats`, which backfills missing seats as
    /// free.
    ///
    /// # Errors
    ///
    /// Returns `Error::DatabaseCorruption` if any row fails to deserialize,
    /// or a database error if the query itself fails.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use cabin::database::{Database, DatabaseConfig};
    /// use cabin::SeatInventory;
    ///
    /// let config = DatabaseConfig::new("/tmp/cabin.db");
    /// let db = Database::open(config).unwrap();
    ///
    /// let seats = Database::load_seats(db.connection()).unwrap();
    /// let inventory = SeatInventory::from_seats(seats);
    /// ```
    pub fn load_seats(conn: &Connection) -> Result<Vec<Seat>> {
        let mut stmt = conn.prepare(SELECT_SEATS)?;

        let seats = stmt
            .query_map([], row_to_seat)?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()
            .map_err(map_load_error)?;

        Ok(seats)
    }

    /// Inserts a booking into the append-only history.
    ///
    /// The reference column is the primary key; a conflict maps to
    /// `Error::DuplicateReference` so callers can mint a replacement
    /// reference instead of silently overwriting history.
    ///
    /// # Errors
    ///
    /// Returns `Error::DuplicateReference` if the reference already exists,
    /// or a database error for any other failure.
    pub fn insert_booking(&mut self, booking: &Booking) -> Result<()> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let created_secs = systemtime_to_unix_secs(booking.created_at())?;

        let inserted = tx.execute(
            INSERT_BOOKING,
            params![
                booking.reference().as_str(),
                booking.seat().to_string(),
                booking.occupant().customer_name(),
                booking.occupant().passport_number(),
                created_secs,
            ],
        );

        match inserted {
            Ok(_) => {}
            Err(rusqlite::Error::SqliteFailure(err, _))
                if err.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                return Err(Error::DuplicateReference {
                    reference: booking.reference().clone(),
                });
            }
            Err(e) => return Err(e.into()),
        }

        tx.commit()?;
        Ok(())
    }

    /// Checks whether a booking reference exists anywhere in the history.
    ///
    /// Uniqueness is checked against the full history, not just active
    /// seats, so references are never reissued after a release.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn reference_exists(conn: &Connection, reference: &BookingReference) -> Result<bool> {
        let count: i32 =
            conn.query_row(CHECK_REFERENCE, params![reference.as_str()], |row| row.get(0))?;
        Ok(count > 0)
    }

    /// Retrieves a booking from the history by reference.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails (other than "not found").
    ///
    /// # Returns
    ///
    /// - `Ok(Some(booking))` if the booking exists
    /// - `Ok(None)` if the booking doesn't exist
    /// - `Err(_)` if a database error occurs
    pub fn get_booking(
        conn: &Connection,
        reference: &BookingReference,
    ) -> Result<Option<Booking>> {
        let mut stmt = conn.prepare(SELECT_BOOKING)?;

        match stmt.query_row(params![reference.as_str()], row_to_booking) {
            Ok(booking) => Ok(Some(booking)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(map_load_error(e)),
        }
    }

    /// Lists the entire booking history, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or if any booking cannot be
    /// deserialized.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use cabin::database::{Database, DatabaseConfig};
    ///
    /// let config = DatabaseConfig::new("/tmp/cabin.db");
    /// let db = Database::open(config).unwrap();
    ///
    /// let bookings = Database::list_bookings(db.connection()).unwrap();
    /// for booking in bookings {
    ///     println!("{:?}", booking);
    /// }
    /// ```
    pub fn list_bookings(conn: &Connection) -> Result<Vec<Booking>> {
        let mut stmt = conn.prepare(LIST_BOOKINGS)?;

        let bookings = stmt
            .query_map([], row_to_booking)?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()
            .map_err(map_load_error)?;

        Ok(bookings)
    }

    /// Lists the booking history for a single seat, oldest first.
    ///
    /// Includes bookings whose seat has since been released.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or if any booking cannot be
    /// deserialized.
    pub fn bookings_for_seat(conn: &Connection, seat: SeatId) -> Result<Vec<Booking>> {
        let mut stmt = conn.prepare(SELECT_BOOKINGS_BY_SEAT)?;

        let bookings = stmt
            .query_map(params![seat.to_string()], row_to_booking)?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()
            .map_err(map_load_error)?;

        Ok(bookings)
    }

    /// Returns the total number of bookings ever recorded.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn booking_count(conn: &Connection) -> Result<u64> {
        let count: i64 = conn.query_row(COUNT_BOOKINGS, [], |row| row.get(0))?;
        Ok(count.unsigned_abs())
    }

    /// Verifies database integrity using PRAGMA `integrity_check`.
    ///
    /// # Errors
    ///
    /// Returns an error if the integrity check fails or detects corruption.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use cabin::database::{Database, DatabaseConfig};
    ///
    /// let config = DatabaseConfig::new("/tmp/cabin.db");
    /// let mut db = Database::open(config).unwrap();
    ///
    /// db.verify_integrity().unwrap();
    /// ```
    pub fn verify_integrity(&mut self) -> Result<()> {
        let result: String = self
            .conn
            .query_row("PRAGMA integrity_check", [], |row| row.get(0))?;

        if result == "ok" {
            Ok(())
        } else {
            Err(Error::DatabaseCorruption {
                details: format!("Integrity check failed: {result}"),
            })
        }
    }
}
