//! Plan types for booking operations.
//!
//! This module defines the plan structures that describe what actions
//! will be taken during an operation, without actually performing them.

use crate::booking::Booking;
use crate::seat::SeatId;

/// A single action to be taken during plan execution.
///
/// Each action corresponds to a specific store mutation that will be
/// performed when the plan is executed.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanAction {
    /// Record a new booking and mark its seat as reserved.
    RecordBooking(Booking),

    /// Return a reserved seat to the free pool.
    ///
    /// The booking that held the seat stays in the store as history.
    ReleaseSeat(SeatId),
}

impl PlanAction {
    /// Returns a human-readable description of this action.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::RecordBooking(booking) => format!(
                "Record booking {} for seat {}",
                booking.reference(),
                booking.seat()
            ),
            Self::ReleaseSeat(id) => format!("Release seat {id}"),
        }
    }
}

/// A plan describing what an operation will do.
///
/// Plans are built by the operation planners and applied by the
/// [`PlanExecutor`](super::PlanExecutor). A plan with no actions is valid
/// and represents a no-op.
///
/// # Examples
///
/// ```
/// use cabin::operations::OperationPlan;
///
/// let plan = OperationPlan::new("Reserve seat 1A");
/// assert!(plan.is_empty());
/// assert_eq!(plan.description, "Reserve seat 1A");
/// ```
#[derive(Debug, Clone)]
pub struct OperationPlan {
    /// Human-readable description of the operation.
    pub description: String,

    /// The actions to perform, in order.
    pub actions: Vec<PlanAction>,

    /// Warnings to surface to the caller.
    pub warnings: Vec<String>,
}

impl OperationPlan {
    /// Creates a new empty plan with the given description.
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            actions: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an action to the plan.
    #[must_use]
    pub fn add_action(mut self, action: PlanAction) -> Self {
        self.actions.push(action);
        self
    }

    /// Adds a warning to the plan.
    #[must_use]
    pub fn add_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    /// Returns true if the plan contains no actions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Returns the number of actions in the plan.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }
}
