//! Reservation storage

mod memory;

pub use memory::InMemoryReservationStore;
