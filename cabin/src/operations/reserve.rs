//! Reserve operation planning.
//!
//! This module implements the reservation planning logic: checking the
//! seat's current status, minting a unique booking reference, and building
//! the booking record that the executor will persist.

use crate::booking::{Booking, Occupant};
use crate::database::Database;
use crate::error::{Error, Result};
use crate::inventory::SeatInventory;
use crate::seat::SeatId;

use super::plan::{OperationPlan, PlanAction};

/// Options for a reserve operation.
///
/// This struct contains all the parameters needed to plan a reservation.
#[derive(Debug, Clone)]
pub struct ReserveOptions {
    /// The seat to reserve.
    pub seat: SeatId,

    /// The customer taking the seat.
    pub occupant: Occupant,
}

impl ReserveOptions {
    /// Creates a new `ReserveOptions` for the given seat and occupant.
    ///
    /// # Examples
    ///
    /// ```
    /// use cabin::operations::ReserveOptions;
    /// use cabin::{Occupant, SeatId};
    ///
    /// let seat = SeatId::parse("1A").unwrap();
    /// let occupant = Occupant::new("Alice Smith", "P123").unwrap();
    /// let options = ReserveOptions::new(seat, occupant);
    /// assert_eq!(options.seat, seat);
    /// ```
    #[must_use]
    pub const fn new(seat: SeatId, occupant: Occupant) -> Self {
        Self { seat, occupant }
    }
}

/// A reservation plan generator.
///
/// This struct is responsible for analyzing a reserve request and
/// generating a plan that describes what actions to take.
pub struct ReservePlan {
    options: ReserveOptions,
}

impl ReservePlan {
    /// Creates a new reserve plan with the given options.
    ///
    /// # Examples
    ///
    /// ```
    /// use cabin::operations::{ReservePlan, ReserveOptions};
    /// use cabin::{Occupant, SeatId};
    ///
    /// let seat = SeatId::parse("1A").unwrap();
    /// let occupant = Occupant::new("Alice Smith", "P123").unwrap();
    /// let options = ReserveOptions::new(seat, occupant);
    /// let planner = ReservePlan::new(options);
    /// ```
    #[must_use]
    pub const fn new(options: ReserveOptions) -> Self {
        Self { options }
    }

    /// Builds an operation plan for this reserve request.
    ///
    /// This method checks the seat's current status and mints a fresh
    /// booking reference, but does NOT modify the inventory or the store.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The seat is already reserved (`SeatAlreadyReserved`)
    /// - No unique reference could be minted (`ReferenceSpaceExhausted`)
    /// - The store cannot be queried
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use cabin::operations::{ReservePlan, ReserveOptions};
    /// use cabin::{Database, DatabaseConfig, Occupant, SeatId, SeatInventory};
    ///
    /// let db = Database::open(DatabaseConfig::new("/tmp/cabin.db")).unwrap();
    /// let inventory = SeatInventory::new();
    /// let seat = SeatId::parse("1A").unwrap();
    /// let occupant = Occupant::new("Alice Smith", "P123").unwrap();
    ///
    /// let options = ReserveOptions::new(seat, occupant);
    /// let plan = ReservePlan::new(options).build_plan(&inventory, &db).unwrap();
    /// assert_eq!(plan.len(), 1);
    /// ```
    pub fn build_plan(&self, inventory: &SeatInventory, db: &Database) -> Result<OperationPlan> {
        let seat = inventory
            .seat(self.options.seat)
            .ok_or_else(|| Error::SeatNotFound {
                id: self.options.seat.to_string(),
            })?;

        if !seat.is_free() {
            return Err(Error::SeatAlreadyReserved {
                id: self.options.seat,
            });
        }

        let reference = db.generate_unique_reference()?;
        log::info!(
            "Planned booking {} for seat {}",
            reference,
            self.options.seat
        );

        let booking =
            Booking::builder(reference, self.options.seat, self.options.occupant.clone()).build();

        let plan = OperationPlan::new(format!("Reserve seat {}", self.options.seat))
            .add_action(PlanAction::RecordBooking(booking));

        Ok(plan)
    }
}
