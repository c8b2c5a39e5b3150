//! Application layer
//!
//! Use cases over the booking domain.

pub mod booking;

pub use booking::BookingService;
