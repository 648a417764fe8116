#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # cabin
//!
//! A library for managing a fixed-capacity cabin of bookable seats.
//!
//! This library provides core types and functionality for reserving and
//! releasing seats, minting unique booking references, and keeping the
//! seat map durable across restarts.
//!
//! ## Core Types
//!
//! - [`SeatId`] and [`Seat`]: Seat identity and status with validation
//! - [`BookingReference`], [`Occupant`], and [`Booking`]: Booking records
//! - [`SeatInventory`]: The in-memory seat map
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use cabin::{SeatId, SeatRow};
//!
//! // Seat text is case-insensitive and whitespace-tolerant
//! let seat = SeatId::parse(" 12f ").unwrap();
//! assert_eq!(seat.row(), SeatRow::F);
//! assert_eq!(seat.column(), 12);
//! assert_eq!(seat.to_string(), "12F");
//! ```

pub mod booking;
pub mod config;
pub mod database;
pub mod error;
pub mod inventory;
pub mod logging;
pub mod operations;
pub mod seat;

// Re-export key types at crate root for convenience
pub use booking::{Booking, BookingBuilder, BookingReference, Occupant, ValidationError};
pub use config::{Config, ConfigBuilder, ResolvedConfig};
pub use database::{Database, DatabaseConfig};
pub use error::{Error, Result};
pub use inventory::SeatInventory;
pub use logging::{init_logger, LogLevel, Logger};
pub use operations::{
    reserve_batch, BatchOutcome, BatchReport, ExecutionResult, OperationPlan, PlanAction,
    PlanExecutor, ReleaseOptions, ReleasePlan, ReserveOptions, ReservePlan,
};
pub use seat::{InvalidSeatIdError, Seat, SeatId, SeatRow, SeatStatus};
