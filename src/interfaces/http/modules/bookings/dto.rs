//! Booking DTOs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{Booking, CancelledBooking};

/// Request to book a room
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBookingRequest {
    /// Room identifier, matched exactly
    pub room: String,
    /// Start instant (ISO 8601). Without an offset it is read as UTC.
    pub start: String,
    /// End instant (ISO 8601). Without an offset it is read as UTC.
    pub end: String,
}

/// Optional calendar-date filter on a booking's start
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BookingsQuery {
    /// First day to include (YYYY-MM-DD)
    pub start_date: Option<NaiveDate>,
    /// Last day to include (YYYY-MM-DD)
    pub end_date: Option<NaiveDate>,
}

/// Booking details in API responses
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BookingDto {
    pub room: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// Cancellation code
    pub code: String,
}

impl From<Booking> for BookingDto {
    fn from(b: Booking) -> Self {
        Self {
            room: b.room,
            start: b.start,
            end: b.end,
            code: b.code.to_string(),
        }
    }
}

/// The interval that was freed by a cancellation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CancelledBookingDto {
    pub room: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl From<CancelledBooking> for CancelledBookingDto {
    fn from(c: CancelledBooking) -> Self {
        Self {
            room: c.room,
            start: c.start,
            end: c.end,
        }
    }
}
