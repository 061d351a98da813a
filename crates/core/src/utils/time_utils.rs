use chrono::{DateTime, Utc};

use crate::constants::MONTH_KEY_FORMAT;

/// Converts a UTC instant to its calendar-month bucket key (`YYYY-MM`).
///
/// Buckets are cut on UTC month boundaries. Keys sort lexicographically in
/// chronological order for years 0000-9999.
pub fn month_key(instant: DateTime<Utc>) -> String {
    instant.format(MONTH_KEY_FORMAT).to_string()
}
