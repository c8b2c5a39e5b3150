//! In-memory reservation store

use dashmap::DashMap;

use crate::domain::{Booking, CancelledBooking};

/// Per-room booking lists kept for the lifetime of the process.
///
/// Each room's list lives behind its map entry, so a mutation of one room
/// holds that entry's write lock for its whole duration and readers never
/// see a half-applied change.
#[derive(Debug, Default)]
pub struct InMemoryReservationStore {
    bookings: DashMap<String, Vec<Booking>>,
}

impl InMemoryReservationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of a room's bookings in insertion order.
    pub fn room_bookings(&self, room: &str) -> Vec<Booking> {
        self.bookings
            .get(room)
            .map(|entry| entry.value().clone())
            .unwrap_or_default()
    }

    /// Runs `f` with exclusive access to a room's list, creating the list
    /// if it does not exist yet. No other writer or reader of the same room
    /// runs until `f` returns.
    pub fn with_room_mut<R>(&self, room: &str, f: impl FnOnce(&mut Vec<Booking>) -> R) -> R {
        let mut entry = self.bookings.entry(room.to_string()).or_default();
        f(entry.value_mut())
    }

    /// Removes the booking holding `code`, wherever it is.
    pub fn remove_by_code(&self, code: &str) -> Option<CancelledBooking> {
        for mut entry in self.bookings.iter_mut() {
            let position = entry.value().iter().position(|b| b.code == *code);
            if let Some(index) = position {
                let removed = entry.value_mut().remove(index);
                return Some(removed.into());
            }
        }
        None
    }

    pub fn total(&self) -> usize {
        self.bookings.iter().map(|entry| entry.value().len()).sum()
    }
}
