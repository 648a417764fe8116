//! The in-memory seat map.
//!
//! This module provides `SeatInventory`, the canonical in-memory view of all
//! 480 cabin seats. The inventory is always complete: every construction
//! path produces one entry per seat, so lookups distinguish "unknown seat"
//! from "free seat" without a sentinel.

use std::collections::BTreeMap;

use crate::booking::Occupant;
use crate::seat::{Seat, SeatId, SeatRow};

/// The complete in-memory seat map for the cabin.
///
/// Mutation goes through the operation layer, which persists each change
/// before committing it here; the inventory itself only offers queries and
/// a crate-internal `put`.
///
/// # Examples
///
/// ```
/// use cabin::{SeatId, SeatInventory};
///
/// let inventory = SeatInventory::new();
/// assert_eq!(inventory.len(), SeatId::COUNT);
/// assert_eq!(inventory.available_count(), SeatId::COUNT);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatInventory {
    seats: BTreeMap<SeatId, Seat>,
}

impl SeatInventory {
    /// Creates an inventory with every seat free.
    #[must_use]
    pub fn new() -> Self {
        Self {
            seats: SeatId::all().map(|id| (id, Seat::free(id))).collect(),
        }
    }

    /// Reconstructs an inventory from persisted seats.
    ///
    /// Seats absent from `seats` are initialized free, so a store written
    /// before some seats were ever touched still loads to the full cabin.
    /// Later entries for the same seat replace earlier ones.
    #[must_use]
    pub fn from_seats(seats: impl IntoIterator<Item = Seat>) -> Self {
        let mut inventory = Self::new();
        for seat in seats {
            inventory.seats.insert(seat.id(), seat);
        }
        inventory
    }

    /// Returns the seat with the given identifier.
    #[must_use]
    pub fn seat(&self, id: SeatId) -> Option<&Seat> {
        self.seats.get(&id)
    }

    /// Returns the number of seats in the cabin.
    #[must_use]
    pub fn len(&self) -> usize {
        self.seats.len()
    }

    /// Returns `true` if the inventory holds no seats.
    ///
    /// Never true for a constructed inventory; provided for completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    /// Returns an iterator over all seats in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &Seat> {
        self.seats.values()
    }

    /// Returns the number of free seats.
    #[must_use]
    pub fn available_count(&self) -> usize {
        self.seats.values().filter(|seat| seat.is_free()).count()
    }

    /// Returns the free seats grouped by row, in cabin order.
    ///
    /// Rows with no free seats still appear, with an empty list.
    #[must_use]
    pub fn available_by_row(&self) -> BTreeMap<SeatRow, Vec<SeatId>> {
        let mut by_row: BTreeMap<SeatRow, Vec<SeatId>> =
            SeatRow::ALL.into_iter().map(|row| (row, Vec::new())).collect();
        for seat in self.seats.values().filter(|seat| seat.is_free()) {
            if let Some(seats) = by_row.get_mut(&seat.id().row()) {
                seats.push(seat.id());
            }
        }
        by_row
    }

    /// Returns the seats currently reserved under the given customer name.
    ///
    /// Matching is an exact comparison of the trimmed name, ignoring ASCII
    /// case. An empty result is an ordinary outcome, not an error.
    #[must_use]
    pub fn find_by_customer(&self, name: &str) -> Vec<(SeatId, &Occupant)> {
        self.seats
            .values()
            .filter_map(|seat| seat.occupant().map(|occupant| (seat.id(), occupant)))
            .filter(|(_, occupant)| occupant.matches_name(name))
            .collect()
    }

    /// Replaces the entry for a seat.
    ///
    /// Called by the executor after the seat's row has been written to the
    /// store, so the map never runs ahead of durable state.
    pub(crate) fn put(&mut self, seat: Seat) {
        self.seats.insert(seat.id(), seat);
    }
}

impl Default for SeatInventory {
    fn default() -> Self {
        Self::new()
    }
}
