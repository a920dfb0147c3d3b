//! Human-readable rendering of integer timestamps.

use chrono::DateTime;

/// `strftime` pattern used for readable dates (`YYYY-MM-DD HH:MM:SS`).
pub const READABLE_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats epoch seconds as a UTC readable date.
///
/// Returns `None` when the value is outside chrono's representable range.
#[must_use]
pub fn format_readable_date(epoch_seconds: i64) -> Option<String> {
    DateTime::from_timestamp(epoch_seconds, 0)
        .map(|moment| moment.format(READABLE_DATE_FORMAT).to_string())
}
