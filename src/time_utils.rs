use chrono::DateTime;

use crate::domain::market_data::{DateKey, Timestamp};

/// UTC calendar day of an epoch-millisecond timestamp, `YYYY-MM-DD`.
///
/// Returns `None` when the timestamp lies outside the representable range.
pub fn date_key(timestamp: Timestamp) -> Option<DateKey> {
    DateTime::from_timestamp_millis(timestamp.value())
        .map(|utc| DateKey::new(utc.format("%Y-%m-%d").to_string()))
}
