//! Calendar-accurate difference between two timestamps.
//!
//! Fields are subtracted pairwise on the wall-clock representation and then
//! normalised from seconds upwards, borrowing from the next larger unit. A
//! negative day count borrows the length of the *earlier* timestamp's month.
//!
//! The comparison is directionless: when the first timestamp is later than the
//! second they are swapped, so callers cannot tell a future birth date from a
//! past one by looking at the result.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Timelike};

/// Elapsed calendar units between two timestamps.
///
/// `years` is always the number of full calendar years elapsed; the
/// remaining fields hold the normalised remainder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CalendarDiff {
    /// Full calendar years.
    pub years: i32,
    /// Months left over after `years`, `0..12`.
    pub months: i32,
    /// Days left over after `months`.
    pub days: i32,
    /// Hours left over after `days`, `0..24`.
    pub hours: i32,
    /// Minutes left over after `hours`, `0..60`.
    pub minutes: i32,
    /// Seconds left over after `minutes`, `0..60`.
    pub seconds: i32,
}

/// Compute the calendar difference between `a` and `b`.
///
/// `b` is viewed in `a`'s time zone before fields are compared.
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use roster::domain::calendar_diff;
///
/// let birth = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
/// let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 30, 0).unwrap();
/// let diff = calendar_diff(&birth, &now);
/// assert_eq!((diff.years, diff.months, diff.days), (24, 5, 14));
/// assert_eq!((diff.hours, diff.minutes, diff.seconds), (12, 30, 0));
/// ```
pub fn calendar_diff<Tz, Other>(a: &DateTime<Tz>, b: &DateTime<Other>) -> CalendarDiff
where
    Tz: TimeZone,
    Other: TimeZone,
{
    let b = b.with_timezone(&a.timezone());
    let (earlier, later) = if *a > b { (b, a.clone()) } else { (a.clone(), b) };

    let mut diff = CalendarDiff {
        years: later.year() - earlier.year(),
        months: later.month() as i32 - earlier.month() as i32,
        days: later.day() as i32 - earlier.day() as i32,
        hours: later.hour() as i32 - earlier.hour() as i32,
        minutes: later.minute() as i32 - earlier.minute() as i32,
        seconds: later.second() as i32 - earlier.second() as i32,
    };

    if diff.seconds < 0 {
        diff.seconds += 60;
        diff.minutes -= 1;
    }
    if diff.minutes < 0 {
        diff.minutes += 60;
        diff.hours -= 1;
    }
    if diff.hours < 0 {
        diff.hours += 24;
        diff.days -= 1;
    }
    if diff.days < 0 {
        diff.days += days_in_month(earlier.year(), earlier.month());
        diff.months -= 1;
    }
    if diff.months < 0 {
        diff.months += 12;
        diff.years -= 1;
    }

    diff
}

/// Full calendar years between `birth` and `now`.
pub fn age_in_years<Tz, Other>(birth: &DateTime<Tz>, now: &DateTime<Other>) -> i32
where
    Tz: TimeZone,
    Other: TimeZone,
{
    calendar_diff(birth, now).years
}

fn days_in_month(year: i32, month: u32) -> i32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .map_or(31, |last| last.day() as i32)
}
