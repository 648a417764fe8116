//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `init`: Initialize the data directory and seat database
//! - `book`: Reserve one or more seats for a customer
//! - `release`: Return a reserved seat to the free pool
//! - `availability`: Show free seats grouped by row
//! - `status`: Look up a seat or find a customer's seats
//! - `bookings`: Show the booking history
//! - `completions`: Generate shell completion scripts

pub mod availability;
pub mod book;
pub mod bookings;
pub mod completions;
pub mod init;
pub mod release;
pub mod status;

pub use availability::AvailabilityCommand;
pub use book::BookCommand;
pub use bookings::BookingsCommand;
pub use completions::CompletionsCommand;
pub use init::InitCommand;
pub use release::ReleaseCommand;
pub use status::StatusCommand;
