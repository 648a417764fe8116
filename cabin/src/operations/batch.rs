//! Batch reservation of multiple seats for one occupant.
//!
//! Each requested seat is planned and executed independently, so one bad
//! seat never aborts the rest of the batch. Seats are processed in request
//! order, which means a seat repeated within a batch is reserved on its
//! first occurrence and rejected on the second.

use crate::booking::{BookingReference, Occupant};
use crate::database::Database;
use crate::error::{Error, Result};
use crate::inventory::SeatInventory;
use crate::seat::SeatId;

use super::executor::PlanExecutor;
use super::reserve::{ReserveOptions, ReservePlan};

/// The outcome of one seat in a batch reservation.
#[derive(Debug)]
pub struct BatchOutcome {
    /// The seat text as the caller supplied it.
    pub input: String,

    /// The minted reference on success, or the per-seat failure.
    pub result: Result<BookingReference>,
}

/// The outcomes of a batch reservation, in request order.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// One outcome per requested seat.
    pub outcomes: Vec<BatchOutcome>,
}

impl BatchReport {
    /// Returns the number of seats that were reserved.
    #[must_use]
    pub fn succeeded(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.result.is_ok())
            .count()
    }

    /// Returns the number of seats that could not be reserved.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    /// Returns true if no seat in the batch was reserved.
    ///
    /// An empty batch is not a failure.
    #[must_use]
    pub fn all_failed(&self) -> bool {
        !self.outcomes.is_empty() && self.succeeded() == 0
    }
}

/// Reserves several seats for the same occupant.
///
/// Every requested seat gets its own outcome; the batch never aborts on a
/// per-seat failure. Unparseable seat text is reported as `SeatNotFound`.
/// Each successful reservation is persisted before the next seat is
/// processed.
///
/// # Errors
///
/// Per-seat failures land in the report, not in the return value. An `Err`
/// is only returned if the store itself fails in a way that makes further
/// processing pointless, such as an I/O error while persisting.
///
/// # Examples
///
/// ```no_run
/// use cabin::operations::reserve_batch;
/// use cabin::{Database, DatabaseConfig, Occupant, SeatInventory};
///
/// let mut db = Database::open(DatabaseConfig::new("/tmp/cabin.db")).unwrap();
/// let mut inventory = SeatInventory::new();
/// let occupant = Occupant::new("Alice Smith", "P123").unwrap();
///
/// let inputs = vec!["1A".to_string(), "1B".to_string()];
/// let report = reserve_batch(&mut inventory, &mut db, &inputs, &occupant).unwrap();
/// assert_eq!(report.succeeded(), 2);
/// ```
pub fn reserve_batch(
    inventory: &mut SeatInventory,
    db: &mut Database,
    inputs: &[String],
    occupant: &Occupant,
) -> Result<BatchReport> {
    let mut report = BatchReport::default();

    for input in inputs {
        let result = reserve_one(inventory, db, input, occupant);
        if let Err(error) = &result {
            log::warn!("Seat {input} not reserved: {error}");
        }
        report.outcomes.push(BatchOutcome {
            input: input.clone(),
            result,
        });
    }

    Ok(report)
}

fn reserve_one(
    inventory: &mut SeatInventory,
    db: &mut Database,
    input: &str,
    occupant: &Occupant,
) -> Result<BookingReference> {
    let seat = SeatId::parse(input)?;

    let options = ReserveOptions::new(seat, occupant.clone());
    let plan = ReservePlan::new(options).build_plan(inventory, db)?;
    let result = PlanExecutor::new(inventory, db).execute(&plan)?;

    result.reference.ok_or_else(|| Error::Validation {
        field: "seat".into(),
        message: format!("no booking was recorded for seat {input}"),
    })
}
