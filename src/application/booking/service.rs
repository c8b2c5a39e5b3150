//! Booking service
//!
//! Owns the room registry and the reservation store and is the only code
//! that mutates bookings. Creation runs a fail-fast pipeline; the first
//! rule a request breaks is the one reported.

use chrono::{DateTime, Datelike, Duration, Timelike, Utc};
use tracing::{debug, info, warn};

use crate::domain::{
    system_clock, Booking, BookingError, BookingPolicy, BookingResult, CancelledBooking,
    DateRange, RoomRegistry, SharedClock, Timestamp,
};
use crate::infrastructure::InMemoryReservationStore;

pub struct BookingService {
    rooms: RoomRegistry,
    policy: BookingPolicy,
    clock: SharedClock,
    store: InMemoryReservationStore,
}

impl BookingService {
    pub fn new(rooms: RoomRegistry, policy: BookingPolicy, clock: SharedClock) -> Self {
        Self {
            rooms,
            policy,
            clock,
            store: InMemoryReservationStore::new(),
        }
    }

    /// Service reading the wall clock.
    pub fn with_system_clock(rooms: RoomRegistry, policy: BookingPolicy) -> Self {
        Self::new(rooms, policy, system_clock())
    }

    pub fn policy(&self) -> &BookingPolicy {
        &self.policy
    }

    pub fn list_rooms(&self) -> &[String] {
        self.rooms.rooms()
    }

    /// Bookings of `room` in insertion order. Unknown rooms yield an empty
    /// list rather than an error.
    pub fn list_bookings(&self, room: &str, range: Option<DateRange>) -> Vec<Booking> {
        let bookings = self.store.room_bookings(room);
        match range {
            Some(range) if !range.is_unbounded() => {
                bookings.into_iter().filter(|b| range.contains(b)).collect()
            }
            _ => bookings,
        }
    }

    pub fn create_booking(
        &self,
        room: &str,
        start: Timestamp,
        end: Timestamp,
    ) -> BookingResult<Booking> {
        let result = self.try_create(room, start, end);
        match &result {
            Ok(booking) => info!(
                room = %booking.room,
                start = %booking.start,
                end = %booking.end,
                "Booking created"
            ),
            Err(e) => warn!(room, kind = e.kind(), error = %e, "Booking rejected"),
        }
        result
    }

    fn try_create(&self, room: &str, start: Timestamp, end: Timestamp) -> BookingResult<Booking> {
        if !self.rooms.contains(room) {
            return Err(BookingError::RoomNotFound {
                room: room.to_string(),
            });
        }

        let now = self.clock.utc();
        let start = start.to_utc();
        let end = end.to_utc();

        self.check_interval(start, end, now)?;

        self.store.with_room_mut(room, |bookings| {
            if let Some(existing) = bookings.iter().find(|b| b.overlaps(start, end)) {
                debug!(
                    room,
                    existing_start = %existing.start,
                    existing_end = %existing.end,
                    "Requested slot overlaps an existing booking"
                );
                return Err(BookingError::SlotConflict {
                    room: room.to_string(),
                });
            }

            let booking = Booking::new(room, start, end);
            bookings.push(booking.clone());
            Ok(booking)
        })
    }

    /// Temporal rules, in order, against a single `now`.
    fn check_interval(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> BookingResult<()> {
        let duration = end - start;
        if duration <= Duration::zero() {
            return Err(BookingError::InvalidInterval);
        }
        if duration > self.policy.max_duration {
            return Err(BookingError::DurationExceeded {
                max_hours: self.policy.max_hours(),
            });
        }
        if start < now {
            return Err(BookingError::PastBooking);
        }
        if start.minute() != 0 || start.second() != 0 || start.nanosecond() != 0 {
            return Err(BookingError::MisalignedStart);
        }
        if start.year() != now.year() || end.year() != now.year() {
            return Err(BookingError::OutOfYearRange { year: now.year() });
        }
        Ok(())
    }

    pub fn cancel_booking(&self, code: &str) -> BookingResult<CancelledBooking> {
        match self.store.remove_by_code(code) {
            Some(cancelled) => {
                info!(
                    room = %cancelled.room,
                    start = %cancelled.start,
                    end = %cancelled.end,
                    "Booking cancelled"
                );
                Ok(cancelled)
            }
            None => {
                warn!("Cancellation with unknown code");
                Err(BookingError::InvalidCode)
            }
        }
    }

    pub fn booking_count(&self) -> usize {
        self.store.total()
    }
}

// ── Tests ──────────────────────────────────────────────────────
