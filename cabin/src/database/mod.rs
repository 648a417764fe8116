//! Database layer for persistent storage of seats and bookings.
//!
//! This module provides a SQLite-based storage layer for the cabin booking
//! system, including connection management, schema versioning, seat state
//! persistence, the append-only booking history, and booking reference
//! generation.
//!
//! # Examples
//!
//! ```no_run
//! use cabin::database::{Database, DatabaseConfig};
//! use cabin::{Seat, SeatId, SeatInventory};
//!
//! // Open a database
//! let config = DatabaseConfig::new("/tmp/cabin.db");
//! let mut db = Database::open(config).unwrap();
//!
//! // Persist a seat and reload the inventory
//! let seat = Seat::free(SeatId::parse("1A").unwrap());
//! db.save_seat(&seat).unwrap();
//!
//! let seats = Database::load_seats(db.connection()).unwrap();
//! let inventory = SeatInventory::from_seats(seats);
//! ```

mod config;
mod connection;
pub mod migrations;
mod operations;
mod reference;
mod schema;

#[cfg(test)]
pub(crate) mod test_util;

// Re-export public API
pub use config::{default_data_dir, resolve_database_path, DatabaseConfig};
pub use connection::Database;
pub use reference::MAX_GENERATION_ATTEMPTS;

// Re-export migration functions for advanced use cases
pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};
