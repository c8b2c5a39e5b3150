//! Booking domain entity

use std::fmt;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use uuid::Uuid;

pub const DEFAULT_MAX_DURATION_HOURS: i64 = 3;

/// Opaque token issued at creation; the only credential needed to cancel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingCode(String);

impl BookingCode {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookingCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for BookingCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

/// A reserved `[start, end)` interval in one room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub room: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub code: BookingCode,
}

impl Booking {
    pub fn new(room: impl Into<String>, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            room: room.into(),
            start,
            end,
            code: BookingCode::generate(),
        }
    }

    /// Half-open overlap: a booking ending exactly when another starts
    /// does not overlap it.
    pub fn overlaps(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        !(end <= self.start || start >= self.end)
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

/// What remains visible of a booking after it has been cancelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelledBooking {
    pub room: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl From<Booking> for CancelledBooking {
    fn from(booking: Booking) -> Self {
        Self {
            room: booking.room,
            start: booking.start,
            end: booking.end,
        }
    }
}

/// Inclusive calendar-date filter on a booking's UTC start date.
/// A missing bound leaves that side open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start_date: Option<NaiveDate>, end_date: Option<NaiveDate>) -> Self {
        Self {
            start_date,
            end_date,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.start_date.is_none() && self.end_date.is_none()
    }

    pub fn contains(&self, booking: &Booking) -> bool {
        let day = booking.start.date_naive();
        self.start_date.map_or(true, |from| day >= from)
            && self.end_date.map_or(true, |to| day <= to)
    }
}

/// Limits applied when creating a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingPolicy {
    pub max_duration: Duration,
}

impl BookingPolicy {
    pub fn with_max_hours(hours: i64) -> Self {
        Self {
            max_duration: Duration::hours(hours),
        }
    }

    pub fn max_hours(&self) -> i64 {
        self.max_duration.num_hours()
    }
}

impl Default for BookingPolicy {
    fn default() -> Self {
        Self::with_max_hours(DEFAULT_MAX_DURATION_HOURS)
    }
}

// ── Tests ──────────────────────────────────────────────────────
