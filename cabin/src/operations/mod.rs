//! Booking operations using the plan-execute pattern.
//!
//! This module provides a plan-execute pattern for booking operations,
//! separating planning from execution to enable dry-run mode, better testing,
//! and clear error messages.
//!
//! # Architecture
//!
//! Operations are split into two phases:
//! 1. **Planning**: Analyzes the request, validates seat status, builds a plan
//! 2. **Execution**: Takes the plan, persists it, then updates the inventory
//!
//! # Examples
//!
//! ```no_run
//! use cabin::operations::{PlanExecutor, ReserveOptions, ReservePlan};
//! use cabin::{Database, DatabaseConfig, Occupant, SeatId, SeatInventory};
//!
//! let mut db = Database::open(DatabaseConfig::new("/tmp/cabin.db")).unwrap();
//! let mut inventory = SeatInventory::new();
//! let seat = SeatId::parse("1A").unwrap();
//! let occupant = Occupant::new("Alice Smith", "P123").unwrap();
//!
//! // Generate plan
//! let options = ReserveOptions::new(seat, occupant);
//! let plan = ReservePlan::new(options).build_plan(&inventory, &db).unwrap();
//!
//! // Execute plan
//! let mut executor = PlanExecutor::new(&mut inventory, &mut db);
//! let result = executor.execute(&plan).unwrap();
//! println!("Booked under {}", result.reference.unwrap());
//! ```

pub mod batch;
pub mod executor;
pub mod init;
pub mod plan;
pub mod release;
pub mod reserve;

pub use batch::{reserve_batch, BatchOutcome, BatchReport};
pub use executor::{ExecutionResult, PlanExecutor};
pub use init::{init_database, InitOptions, InitResult};
pub use plan::{OperationPlan, PlanAction};
pub use release::{ReleaseOptions, ReleasePlan};
pub use reserve::{ReserveOptions, ReservePlan};
