use chrono::{Datelike, NaiveDate};
use thiserror::Error;

use crate::domain::model::DateRange;

/// A month/day seed that cannot be anchored onto one of the candidate years
/// (Feb 29 onto a non-leap year). Callers attach the owning entity before
/// surfacing this to the user.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{month:02}-{day:02} cannot be anchored onto year {year}")]
pub struct UnanchorableDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

/// Number of days in `range`, both bounds included.
pub fn inclusive_day_count(range: &DateRange) -> i64 {
    (range.until - range.since).num_days() + 1
}

/// Working-day rule: weekday index Monday = 0 .. Sunday = 6, working exactly
/// when the index lies in [1, 5] — Tuesday through Saturday. The downstream
/// holiday and weekend math depends on this exact window; do not "fix" it to
/// Mon-Fri without a policy decision.
pub fn is_working_day(date: NaiveDate) -> bool {
    (1..=5).contains(&date.weekday().num_days_from_monday())
}

/// Count of dates in `range` classified as working days.
pub fn working_days_in_range(range: &DateRange) -> i64 {
    range
        .since
        .iter_days()
        .take_while(|date| *date <= range.until)
        .filter(|date| is_working_day(*date))
        .count() as i64
}

/// All dates on which `seed`'s month/day recurs inside `range`.
///
/// Returns empty immediately when `seed`'s own year lies outside
/// `[since.year, until.year]`; otherwise the month/day is re-anchored onto
/// every year of the span and kept when it falls within the inclusive
/// bounds. Birthdays and holidays recur annually, so a multi-year range can
/// contain several occurrences.
pub fn annual_recurrences(
    seed: NaiveDate,
    range: &DateRange,
) -> Result<Vec<NaiveDate>, UnanchorableDate> {
    if seed.year() < range.since.year() || seed.year() > range.until.year() {
        return Ok(Vec::new());
    }

    let mut dates = Vec::new();
    for year in range.since.year()..=range.until.year() {
        let candidate =
            NaiveDate::from_ymd_opt(year, seed.month(), seed.day()).ok_or(UnanchorableDate {
                year,
                month: seed.month(),
                day: seed.day(),
            })?;
        if range.since <= candidate && candidate <= range.until {
            dates.push(candidate);
        }
    }
    Ok(dates)
}

/// How many years of the span contain the seed's month/day.
pub fn annual_recurrence_count(
    seed: NaiveDate,
    range: &DateRange,
) -> Result<i64, UnanchorableDate> {
    Ok(annual_recurrences(seed, range)?.len() as i64)
}

/// How many of the seed's recurrences inside `range` land on a working day.
/// This is the quantity folded into a holiday tally: a recurring holiday
/// only consumes a working-day slot in the years it lands on one.
pub fn working_recurrences_in_range(
    seed: NaiveDate,
    range: &DateRange,
) -> Result<i64, UnanchorableDate> {
    Ok(annual_recurrences(seed, range)?
        .into_iter()
        .filter(|date| is_working_day(*date))
        .count() as i64)
}
