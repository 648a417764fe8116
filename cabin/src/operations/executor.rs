//! Plan execution engine.
//!
//! This module implements the executor that takes operation plans and
//! applies them to the store and the in-memory inventory. Persistence
//! always happens before the inventory is updated, so the in-memory view
//! never runs ahead of durable state.

use crate::booking::{Booking, BookingReference};
use crate::database::Database;
use crate::error::{Error, Result};
use crate::inventory::SeatInventory;
use crate::seat::Seat;

use super::plan::{OperationPlan, PlanAction};

/// Result of executing a plan.
///
/// This struct provides information about what happened during execution,
/// including whether it was a dry run and what actions were taken.
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    /// Whether the execution was successful.
    pub success: bool,

    /// Whether this was a dry-run (no actual changes made).
    pub dry_run: bool,

    /// Descriptions of actions that were taken (or would be taken in dry-run).
    pub actions_taken: Vec<String>,

    /// Warnings from the plan.
    pub warnings: Vec<String>,

    /// The booking reference that was recorded (if applicable).
    pub reference: Option<BookingReference>,
}

impl ExecutionResult {
    /// Creates a successful execution result.
    fn success(plan: &OperationPlan, reference: Option<BookingReference>) -> Self {
        Self {
            success: true,
            dry_run: false,
            actions_taken: plan.actions.iter().map(PlanAction::description).collect(),
            warnings: plan.warnings.clone(),
            reference,
        }
    }

    /// Creates a dry-run execution result.
    fn dry_run(plan: &OperationPlan) -> Self {
        Self {
            success: true,
            dry_run: true,
            actions_taken: plan.actions.iter().map(PlanAction::description).collect(),
            warnings: plan.warnings.clone(),
            reference: Self::extract_reference(plan),
        }
    }

    /// Extracts the booking reference from a plan's actions.
    fn extract_reference(plan: &OperationPlan) -> Option<BookingReference> {
        plan.actions.iter().find_map(|action| match action {
            PlanAction::RecordBooking(booking) => Some(booking.reference().clone()),
            PlanAction::ReleaseSeat(_) => None,
        })
    }
}

/// Executes operation plans against the store and inventory.
///
/// The executor can run in normal mode (applying changes) or dry-run mode
/// (validating without changes).
///
/// # Examples
///
/// ```no_run
/// use cabin::operations::{PlanExecutor, ReservePlan, ReserveOptions};
/// use cabin::{Database, DatabaseConfig, Occupant, SeatId, SeatInventory};
///
/// let mut db = Database::open(DatabaseConfig::new("/tmp/cabin.db")).unwrap();
/// let mut inventory = SeatInventory::new();
/// let seat = SeatId::parse("1A").unwrap();
/// let occupant = Occupant::new("Alice Smith", "P123").unwrap();
///
/// let options = ReserveOptions::new(seat, occupant);
/// let plan = ReservePlan::new(options).build_plan(&inventory, &db).unwrap();
///
/// let mut executor = PlanExecutor::new(&mut inventory, &mut db);
/// let result = executor.execute(&plan).unwrap();
/// assert!(result.success);
/// assert!(result.reference.is_some());
/// ```
pub struct PlanExecutor<'a> {
    inventory: &'a mut SeatInventory,
    db: &'a mut Database,
    dry_run: bool,
}

impl<'a> PlanExecutor<'a> {
    /// Creates a new plan executor.
    #[must_use]
    pub fn new(inventory: &'a mut SeatInventory, db: &'a mut Database) -> Self {
        Self {
            inventory,
            db,
            dry_run: false,
        }
    }

    /// Sets the executor to dry-run mode.
    ///
    /// In dry-run mode, the executor reports what would happen but does
    /// not touch the store or the inventory.
    #[must_use]
    pub const fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    /// Executes the given plan.
    ///
    /// If in dry-run mode, reports the plan without applying it. Otherwise,
    /// applies all actions in order, persisting each change before the
    /// in-memory inventory is updated.
    ///
    /// # Errors
    ///
    /// Returns an error if any action fails to execute. A failed action
    /// leaves the inventory untouched for that action.
    pub fn execute(&mut self, plan: &OperationPlan) -> Result<ExecutionResult> {
        if self.dry_run {
            return Ok(ExecutionResult::dry_run(plan));
        }

        let mut reference = None;
        for action in &plan.actions {
            if let Some(recorded) = self.execute_action(action)? {
                reference = Some(recorded);
            }
        }

        Ok(ExecutionResult::success(plan, reference))
    }

    /// Executes a single action.
    ///
    /// Returns `Ok(Some(reference))` for recorded bookings, `Ok(None)` for
    /// other actions.
    fn execute_action(&mut self, action: &PlanAction) -> Result<Option<BookingReference>> {
        match action {
            PlanAction::RecordBooking(booking) => {
                let booking = self.record_booking(booking)?;

                let seat = Seat::reserved(
                    booking.seat(),
                    booking.reference().clone(),
                    booking.occupant().clone(),
                );
                self.db.save_seat(&seat)?;
                self.inventory.put(seat);

                log::info!(
                    "Recorded booking {} for seat {}",
                    booking.reference(),
                    booking.seat()
                );
                Ok(Some(booking.reference().clone()))
            }
            PlanAction::ReleaseSeat(id) => {
                let seat = Seat::free(*id);
                self.db.save_seat(&seat)?;
                self.inventory.put(seat);

                log::info!("Released seat {id}");
                Ok(None)
            }
        }
    }

    /// Inserts the booking, retrying once with a fresh reference if the
    /// planned one was taken between planning and execution.
    fn record_booking(&mut self, booking: &Booking) -> Result<Booking> {
        match self.db.insert_booking(booking) {
            Ok(()) => Ok(booking.clone()),
            Err(Error::DuplicateReference { reference }) => {
                log::warn!("Reference {reference} collided at insert, minting a replacement");
                let replacement = self.db.generate_unique_reference()?;
                let rebound = booking.with_reference(replacement);
                self.db.insert_booking(&rebound)?;
                Ok(rebound)
            }
            Err(e) => Err(e),
        }
    }
}
