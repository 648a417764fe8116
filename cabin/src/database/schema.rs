//! Database schema definitions and SQL constants.
//!
//! This module contains all SQL table definitions, indices, and constants
//! related to the database schema for the cabin booking system.

/// Current schema version for the database.
///
/// This version is stored in the metadata table and is used to ensure
/// compatibility between the database and the application.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// SQL statement to create the metadata table.
///
/// The metadata table stores key-value pairs for database configuration
/// and versioning information.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// SQL statement to create the seats table.
///
/// The seats table stores the current state of every seat. The seat
/// identifier is the primary key, so repeated saves of the same seat
/// replace the row instead of accumulating duplicates. The reference and
/// occupant columns are NULL exactly when the status is `'F'`.
pub const CREATE_SEATS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS seats (
        seat_id TEXT PRIMARY KEY NOT NULL,
        status TEXT NOT NULL CHECK (status IN ('F', 'R')),
        reference TEXT,
        customer_name TEXT,
        passport_number TEXT
    )";

/// SQL statement to create the bookings table.
///
/// The bookings table is the append-only booking history. The reference is
/// the primary key, which makes the database the last line of defense
/// against issuing the same reference twice. Rows are never deleted, so a
/// released seat keeps its past bookings queryable.
pub const CREATE_BOOKINGS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS bookings (
        reference TEXT PRIMARY KEY NOT NULL,
        seat_id TEXT NOT NULL,
        customer_name TEXT NOT NULL,
        passport_number TEXT NOT NULL,
        created_at INTEGER NOT NULL
    )";

/// SQL statement to create an index on the bookings seat column.
///
/// This index speeds up per-seat history queries.
pub const CREATE_BOOKING_SEAT_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_bookings_seat ON bookings(seat_id)";

/// SQL statement to create an index on the bookings customer column.
///
/// This index speeds up customer lookups across the booking history.
pub const CREATE_BOOKING_CUSTOMER_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_bookings_customer ON bookings(customer_name)";

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement to insert or update the schema version in the metadata table.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";

/// SQL statement to insert or replace a seat row.
///
/// Used by both single and batch save operations.
pub const UPSERT_SEAT: &str = r"
    INSERT OR REPLACE INTO seats
    (seat_id, status, reference, customer_name, passport_number)
    VALUES (?, ?, ?, ?, ?)
";

/// SQL statement to insert a booking row.
///
/// A plain INSERT, never REPLACE: a primary-key conflict here must surface
/// as an error so a colliding reference is caught rather than overwriting
/// history.
pub const INSERT_BOOKING: &str = r"
    INSERT INTO bookings
    (reference, seat_id, customer_name, passport_number, created_at)
    VALUES (?, ?, ?, ?, ?)
";
