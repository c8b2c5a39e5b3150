//! Booking aggregate
//!
//! Contains the Booking entity, its cancellation code, the policy limits
//! applied at creation, and the rejection taxonomy.

pub mod error;
pub mod model;

pub use error::{BookingError, BookingResult};
pub use model::{Booking, BookingCode, BookingPolicy, CancelledBooking, DateRange};
