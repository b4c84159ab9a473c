//! Date and timestamp generators.
//!
//! Both generators take the reference instant as an argument instead of
//! reading the clock, which keeps them deterministic under test.

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime};
use rand::Rng;
use std::ops::RangeInclusive;

/// Generate a timestamp between January 1st of `now`'s year and `now`.
pub fn generate_datetime_this_year<R: Rng>(rng: &mut R, now: NaiveDateTime) -> NaiveDateTime {
    let Some(start) = NaiveDate::from_ymd_opt(now.year(), 1, 1).and_then(|d| d.and_hms_opt(0, 0, 0))
    else {
        return now;
    };

    let start_ts = start.and_utc().timestamp();
    let end_ts = now.and_utc().timestamp();
    if start_ts >= end_ts {
        return start;
    }

    let random_ts = rng.random_range(start_ts..=end_ts);
    DateTime::from_timestamp(random_ts, 0)
        .map(|dt| dt.naive_utc())
        .unwrap_or(start)
}

/// Generate a date a random number of `days` after `today`.
pub fn generate_future_date<R: Rng>(
    rng: &mut R,
    today: NaiveDate,
    days: RangeInclusive<u64>,
) -> NaiveDate {
    let offset = rng.random_range(days);
    today.checked_add_days(Days::new(offset)).unwrap_or(today)
}
