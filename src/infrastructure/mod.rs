//! Infrastructure layer
//!
//! Process-lifetime storage backing the booking service.

pub mod storage;

pub use storage::InMemoryReservationStore;
