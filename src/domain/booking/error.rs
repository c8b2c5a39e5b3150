//! Booking rejections

use thiserror::Error;

/// Every way the booking core can reject caller input.
///
/// None of these are transient: retrying the same request yields the same
/// answer until the store or the clock changes.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BookingError {
    #[error("Room not found: {room}")]
    RoomNotFound { room: String },

    #[error("Start time must be before end time")]
    InvalidInterval,

    #[error("Booking cannot be longer than {max_hours} hours")]
    DurationExceeded { max_hours: i64 },

    #[error("Cannot book a time that has already passed")]
    PastBooking,

    #[error("Start time must be at the beginning of the hour")]
    MisalignedStart,

    #[error("Bookings must be within the current year ({year})")]
    OutOfYearRange { year: i32 },

    #[error("Room {room} is already booked for that time slot")]
    SlotConflict { room: String },

    #[error("Invalid cancellation code")]
    InvalidCode,
}

impl BookingError {
    /// Stable machine-readable name of the failure kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::RoomNotFound { .. } => "RoomNotFound",
            Self::InvalidInterval => "InvalidInterval",
            Self::DurationExceeded { .. } => "DurationExceeded",
            Self::PastBooking => "PastBooking",
            Self::MisalignedStart => "MisalignedStart",
            Self::OutOfYearRange { .. } => "OutOfYearRange",
            Self::SlotConflict { .. } => "SlotConflict",
            Self::InvalidCode => "InvalidCode",
        }
    }

    /// Whether the failure means the referenced resource does not exist,
    /// as opposed to the request being malformed for an existing one.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::RoomNotFound { .. } | Self::InvalidCode)
    }
}

pub type BookingResult<T> = Result<T, BookingError>;
