//! Time helpers
//!
//! Timestamps are stored as strings: RFC 3339 UTC for `created_at`/`updated_at`,
//! `YYYY-MM-DD` for `joining_date`. ISO date strings sort lexicographically, so
//! the store can `ORDER BY joining_date` directly.

use chrono::{SecondsFormat, Utc};

/// Current UTC timestamp, RFC 3339 with millisecond precision.
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Current UTC calendar date as `YYYY-MM-DD`.
pub fn today_iso() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}
