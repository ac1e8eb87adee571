//! Time buckets of the report rows.

use chrono::{DateTime, Datelike, Days, NaiveDate, TimeZone};

/// Calendar date of the timestamp in its own timezone.
#[must_use]
pub fn day<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> NaiveDate {
    timestamp.date_naive()
}

/// Saturday that closes the Sunday–Saturday week containing `date`.
#[must_use]
pub fn week_ending_saturday(date: NaiveDate) -> Option<NaiveDate> {
    let n_days_left = 6 - date.weekday().num_days_from_sunday();
    date.checked_add_days(Days::new(u64::from(n_days_left)))
}
