//! en-US date formatting for the preview.

use chrono::{DateTime, NaiveDate, Utc};

/// `June 14, 2025`.
#[must_use]
pub fn long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// `Jun 14, 4:30 PM`, in UTC.
#[must_use]
pub fn event_time(time: DateTime<Utc>) -> String {
    time.format("%b %-d, %-I:%M %p").to_string()
}
