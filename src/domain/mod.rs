//! Core booking entities, rules and the time seam

pub mod booking;
pub mod room;
pub mod time;

pub use booking::{
    Booking, BookingCode, BookingError, BookingPolicy, BookingResult, CancelledBooking, DateRange,
};
pub use room::RoomRegistry;
pub use time::{system_clock, SharedClock, Timestamp, TimestampParseError};

#[cfg(test)]
pub(crate) use time::frozen_clock;
