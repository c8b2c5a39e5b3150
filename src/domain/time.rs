//! Timestamp normalisation and the clock seam
//!
//! Every instant that enters the booking core goes through
//! [`Timestamp::to_utc`]. Timestamps without offset information are taken
//! to already be UTC; they are never converted from the host's local time.
//! "Now" comes from a [`mockable::Clock`] read through `utc()`.

use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};
use mockable::{Clock, DefaultClock};
use thiserror::Error;

/// Clock shared by every request handled by one service.
pub type SharedClock = Arc<dyn Clock + Send + Sync>;

/// Naive layouts accepted in addition to `NaiveDateTime::from_str`.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// A timestamp as received from a caller, with or without an offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timestamp {
    /// Carries an explicit UTC offset.
    Aware(DateTime<FixedOffset>),
    /// No offset information.
    Naive(NaiveDateTime),
}

impl Timestamp {
    /// Returns the same instant expressed in UTC.
    pub fn to_utc(&self) -> DateTime<Utc> {
        match self {
            Self::Aware(dt) => dt.with_timezone(&Utc),
            Self::Naive(naive) => Utc.from_utc_datetime(naive),
        }
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::Aware(dt.fixed_offset())
    }
}

impl From<DateTime<FixedOffset>> for Timestamp {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        Self::Aware(dt)
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(naive: NaiveDateTime) -> Self {
        Self::Naive(naive)
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid ISO-8601 timestamp: {0:?}")]
pub struct TimestampParseError(pub String);

impl FromStr for Timestamp {
    type Err = TimestampParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(Self::Aware(dt));
        }
        if let Ok(dt) = DateTime::<FixedOffset>::from_str(s) {
            return Ok(Self::Aware(dt));
        }
        if let Ok(naive) = NaiveDateTime::from_str(s) {
            return Ok(Self::Naive(naive));
        }

        NAIVE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
            .map(Self::Naive)
            .ok_or_else(|| TimestampParseError(s.to_string()))
    }
}

/// Wall-clock time.
pub fn system_clock() -> SharedClock {
    Arc::new(DefaultClock)
}

/// A mocked clock that always reports `at`.
#[cfg(test)]
pub(crate) fn frozen_clock(at: DateTime<Utc>) -> SharedClock {
    let mut clock = mockable::MockClock::new();
    clock.expect_utc().return_const(at);
    Arc::new(clock)
}

// ── Tests ──────────────────────────────────────────────────────
