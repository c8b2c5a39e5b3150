//! # Room Booking Service
//!
//! Books a fixed set of rooms in hour-aligned slots of bounded length.
//!
//! ## Architecture
//!
//! - **domain**: bookings, rooms, rejection taxonomy, timestamp normalisation
//! - **application**: the booking service and its validation pipeline
//! - **infrastructure**: the in-memory reservation store
//! - **interfaces**: REST API with Swagger documentation
//! - **config**, **server**, **support**: configuration, runtime, shutdown

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod support;

pub use application::BookingService;
pub use config::{default_config_path, AppConfig};
pub use domain::{Booking, BookingError, BookingPolicy, RoomRegistry, Timestamp};
pub use interfaces::http::create_api_router;
