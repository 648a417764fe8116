//! Release operation planning.
//!
//! This module implements the release planning logic. Releasing only
//! frees the seat; the booking that held it stays in the store as history.

use crate::error::{Error, Result};
use crate::inventory::SeatInventory;
use crate::seat::SeatId;

use super::plan::{OperationPlan, PlanAction};

/// Options for a release operation.
#[derive(Debug, Clone)]
pub struct ReleaseOptions {
    /// The seat to release.
    pub seat: SeatId,
}

impl ReleaseOptions {
    /// Creates a new `ReleaseOptions` for the given seat.
    ///
    /// # Examples
    ///
    /// ```
    /// use cabin::operations::ReleaseOptions;
    /// use cabin::SeatId;
    ///
    /// let seat = SeatId::parse("1A").unwrap();
    /// let options = ReleaseOptions::new(seat);
    /// assert_eq!(options.seat, seat);
    /// ```
    #[must_use]
    pub const fn new(seat: SeatId) -> Self {
        Self { seat }
    }
}

/// A release plan generator.
///
/// This struct is responsible for analyzing a release request and
/// generating a plan that describes what actions to take.
pub struct ReleasePlan {
    options: ReleaseOptions,
}

impl ReleasePlan {
    /// Creates a new release plan with the given options.
    ///
    /// # Examples
    ///
    /// ```
    /// use cabin::operations::{ReleasePlan, ReleaseOptions};
    /// use cabin::SeatId;
    ///
    /// let seat = SeatId::parse("1A").unwrap();
    /// let options = ReleaseOptions::new(seat);
    /// let planner = ReleasePlan::new(options);
    /// ```
    #[must_use]
    pub const fn new(options: ReleaseOptions) -> Self {
        Self { options }
    }

    /// Builds an operation plan for this release request.
    ///
    /// This method performs validation and determines what actions are
    /// needed. It does NOT modify the inventory or the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the seat is currently free (`SeatNotReserved`).
    pub fn build_plan(&self, inventory: &SeatInventory) -> Result<OperationPlan> {
        let seat = inventory
            .seat(self.options.seat)
            .ok_or_else(|| Error::SeatNotFound {
                id: self.options.seat.to_string(),
            })?;

        if seat.is_free() {
            return Err(Error::SeatNotReserved {
                id: self.options.seat,
            });
        }

        let plan = OperationPlan::new(format!("Release seat {}", self.options.seat))
            .add_action(PlanAction::ReleaseSeat(self.options.seat));

        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::{BookingReference, Occupant};
    use crate::seat::Seat;

    #[test]
    fn test_plan_releases_reserved_seat() {
        let seat = SeatId::parse("1A").unwrap();
        let reference = BookingReference::new("AB12CD34").unwrap();
        let occupant = Occupant::new("Alice Smith", "P123").unwrap();

        let mut inventory = SeatInventory::new();
        inventory.put(Seat::reserved(seat, reference, occupant));

        let plan = ReleasePlan::new(ReleaseOptions::new(seat))
            .build_plan(&inventory)
            .unwrap();

        assert_eq!(plan.len(), 1);
        assert_eq!(plan.actions[0], PlanAction::ReleaseSeat(seat));
    }

    #[test]
    fn test_plan_rejects_free_seat() {
        let inventory = SeatInventory::new();
        let seat = SeatId::parse("1A").unwrap();

        let err = ReleasePlan::new(ReleaseOptions::new(seat))
            .build_plan(&inventory)
            .unwrap_err();

        assert!(matches!(err, Error::SeatNotReserved { id } if id == seat));
    }
}
