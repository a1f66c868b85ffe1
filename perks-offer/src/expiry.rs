use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// Window before expiry in which an offer counts as expiring soon.
pub const EXPIRING_SOON_DAYS: i64 = 7;

/// Strictly before the current instant.
pub fn is_expired(expiry: DateTime<Utc>) -> bool {
    expiry < Utc::now()
}

/// Remaining time is positive and at most [`EXPIRING_SOON_DAYS`] days.
pub fn expires_soon(expiry: DateTime<Utc>) -> bool {
    let remaining = expiry - Utc::now();
    remaining > Duration::zero() && remaining <= Duration::days(EXPIRING_SOON_DAYS)
}

/// Countdown breakdown until an expiry instant, for badge display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeRemaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub expired: bool,
}

pub fn time_remaining(expiry: DateTime<Utc>) -> TimeRemaining {
    let remaining = expiry - Utc::now();
    if remaining <= Duration::zero() {
        return TimeRemaining {
            days: 0,
            hours: 0,
            minutes: 0,
            seconds: 0,
            expired: true,
        };
    }

    let total_seconds = remaining.num_seconds();
    TimeRemaining {
        days: total_seconds / 86_400,
        hours: total_seconds % 86_400 / 3_600,
        minutes: total_seconds % 3_600 / 60,
        seconds: total_seconds % 60,
        expired: false,
    }
}
