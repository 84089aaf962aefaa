//! Wall-clock helpers for event stamps and run durations.

use chrono::{DateTime, Utc};

/// UTC timestamp carried by events and state snapshots.
pub type Timestamp = DateTime<Utc>;

/// Current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Whole seconds elapsed between `since` and `until`, clamped at zero.
#[must_use]
pub fn elapsed_secs(since: Timestamp, until: Timestamp) -> u64 {
    u64::try_from((until - since).num_seconds()).unwrap_or(0)
}
