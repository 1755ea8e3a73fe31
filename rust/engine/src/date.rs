//! Calendar dates for daily puzzles.
//!
//! A puzzle date is a plain `YYYY-MM-DD` day. The "current" day is always taken
//! in US Eastern time, so every player rolls over to the next puzzle at the same
//! instant wherever they are.

use chrono::{DateTime, Datelike, NaiveDate, TimeDelta, Utc, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::PuzzleError;

const EST_OFFSET_HOURS: i64 = 5;
const EDT_OFFSET_HOURS: i64 = 4;

/// A calendar day identifying one daily puzzle.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PuzzleDate(NaiveDate);

impl PuzzleDate {
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        if year < 1 {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month, day).map(PuzzleDate)
    }

    /// Today's puzzle date in US Eastern time.
    pub fn today() -> Self {
        eastern_date(Utc::now())
    }

    /// `year * 10000 + month * 100 + day`, e.g. `20250615`.
    ///
    /// ```
    /// use dailyset_engine::date::PuzzleDate;
    /// let d: PuzzleDate = "2025-06-15".parse().unwrap();
    /// assert_eq!(d.seed(), 20250615);
    /// ```
    pub fn seed(&self) -> u64 {
        self.0.year() as u64 * 10_000 + self.0.month() as u64 * 100 + self.0.day() as u64
    }

    pub fn naive(&self) -> NaiveDate {
        self.0
    }
}

impl FromStr for PuzzleDate {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let date = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map_err(|_| PuzzleError::InvalidDate(s.to_string()))?;
        if date.year() < 1 {
            return Err(PuzzleError::InvalidDate(s.to_string()));
        }
        Ok(PuzzleDate(date))
    }
}

impl fmt::Display for PuzzleDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl TryFrom<String> for PuzzleDate {
    type Error = PuzzleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PuzzleDate> for String {
    fn from(value: PuzzleDate) -> Self {
        value.to_string()
    }
}

/// Seed for a `YYYY-MM-DD` string.
pub fn date_seed(date: &str) -> Result<u64, PuzzleError> {
    date.parse::<PuzzleDate>().map(|d| d.seed())
}

/// First year of the current US daylight saving rule.
pub const DST_RULE_SINCE: i32 = 2007;

/// Whether US daylight saving time is in effect at `now`.
///
/// DST runs from 2:00 local on the second Sunday of March (07:00 UTC) to
/// 2:00 local on the first Sunday of November (06:00 UTC).
///
/// Only this rule is known: instants before [`DST_RULE_SINCE`] are evaluated
/// with it too, so around the old April/October switch dates the answer can
/// be off by an hour.
pub fn is_eastern_dst(now: DateTime<Utc>) -> bool {
    let year = now.year();
    let start = NaiveDate::from_weekday_of_month_opt(year, 3, Weekday::Sun, 2)
        .and_then(|d| d.and_hms_opt(7, 0, 0));
    let end = NaiveDate::from_weekday_of_month_opt(year, 11, Weekday::Sun, 1)
        .and_then(|d| d.and_hms_opt(6, 0, 0));
    match (start, end) {
        (Some(start), Some(end)) => {
            let t = now.naive_utc();
            t >= start && t < end
        }
        _ => false,
    }
}

/// The US Eastern calendar day containing the instant `now`.
pub fn eastern_date(now: DateTime<Utc>) -> PuzzleDate {
    let hours = if is_eastern_dst(now) {
        EDT_OFFSET_HOURS
    } else {
        EST_OFFSET_HOURS
    };
    let local = now.naive_utc() - TimeDelta::hours(hours);
    PuzzleDate(local.date())
}
