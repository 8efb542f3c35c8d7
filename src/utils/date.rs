//! Timestamp helpers.
//!
//! The stores keep dates as plain strings so they survive the JSON round
//! trip unchanged; these helpers produce the two formats in use:
//!
//! | Helper       | Format                          | Used for              |
//! |--------------|---------------------------------|-----------------------|
//! | [`today`]    | `YYYY-MM-DD`                    | project/post dates    |
//! | [`now_iso`]  | `2024-02-15T09:45:00.000Z`      | submission timestamps |

use chrono::{Datelike, SecondsFormat, Utc};

/// Current UTC date as `YYYY-MM-DD`.
pub fn today() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

/// Current UTC instant as an RFC 3339 string with millisecond precision.
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Milliseconds since the Unix epoch.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Current calendar year (UTC).
pub fn current_year() -> i32 {
    Utc::now().year()
}
