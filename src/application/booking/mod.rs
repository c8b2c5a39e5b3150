//! Booking use cases

mod service;

pub use service::BookingService;
