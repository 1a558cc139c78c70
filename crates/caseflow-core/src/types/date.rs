//! Calendar date type for rate lookups and accrual periods.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

use crate::error::{CaseflowError, CaseflowResult};

/// Date formats accepted by [`Date::parse_flexible`], tried in order.
const ACCEPTED_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

/// A calendar date with no time component.
///
/// This is a newtype wrapper around `chrono::NaiveDate`. There is
/// no `From<NaiveDateTime>` impl: a timestamp must be truncated explicitly
/// with [`Date::from_datetime`] before it can be used for a rate lookup.
///
/// # Example
///
/// ```rust
/// use caseflow_core::types::Date;
///
/// let date = Date::from_ymd(2011, 9, 30).unwrap();
/// assert_eq!(date.add_days(1), Date::from_ymd(2011, 10, 1).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `CaseflowError::InvalidDate` if the date is invalid.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> CaseflowResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| CaseflowError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Truncates a timestamp to its calendar date.
    #[must_use]
    pub fn from_datetime(datetime: &NaiveDateTime) -> Self {
        Date(datetime.date())
    }

    /// Creates a date from an ISO 8601 string (YYYY-MM-DD).
    ///
    /// # Errors
    ///
    /// Returns `CaseflowError::InvalidDate` if the string is not a valid date.
    pub fn parse(s: &str) -> CaseflowResult<Self> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|_| CaseflowError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Parses either ISO (YYYY-MM-DD) or US (MM/DD/YYYY) notation.
    ///
    /// # Errors
    ///
    /// Returns `CaseflowError::InvalidDate` if no accepted format matches.
    pub fn parse_flexible(s: &str) -> CaseflowResult<Self> {
        let trimmed = s.trim();
        ACCEPTED_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
            .map(Date)
            .ok_or_else(|| {
                CaseflowError::invalid_date(format!(
                    "Cannot parse: {s} (expected MM/DD/YYYY or YYYY-MM-DD)"
                ))
            })
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Adds a number of days to the date.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Calculates the number of calendar days between two dates.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Number of calendar days in `[self, end]`, counting both ends.
    ///
    /// Zero or negative when `end` precedes `self`.
    #[must_use]
    pub fn days_inclusive(&self, end: &Date) -> i64 {
        self.days_between(end) + 1
    }

    /// Iterates every calendar day from `self` through `end`, inclusive.
    ///
    /// Yields nothing when `end` precedes `self`.
    #[must_use]
    pub fn iter_through(self, end: Date) -> DateIter {
        DateIter {
            next: (self <= end).then_some(self),
            end,
        }
    }

    /// Formats as MM/DD/YYYY.
    #[must_use]
    pub fn to_us_string(&self) -> String {
        self.0.format("%m/%d/%Y").to_string()
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }
}

/// Iterator over consecutive calendar days, see [`Date::iter_through`].
#[derive(Debug, Clone)]
pub struct DateIter {
    next: Option<Date>,
    end: Date,
}

impl Iterator for DateIter {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        let current = self.next?;
        self.next = current
            .0
            .succ_opt()
            .map(Date)
            .filter(|d| *d <= self.end);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .next
            .map_or(0, |d| usize::try_from(d.days_inclusive(&self.end)).unwrap_or(0));
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DateIter {}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl Add<i64> for Date {
    type Output = Self;

    /// Adds days to a date.
    fn add(self, days: i64) -> Self::Output {
        self.add_days(days)
    }
}

impl Sub<i64> for Date {
    type Output = Self;

    /// Subtracts days from a date.
    fn sub(self, days: i64) -> Self::Output {
        self.add_days(-days)
    }
}

impl Sub<Date> for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    fn sub(self, other: Date) -> Self::Output {
        other.days_between(&self)
    }
}
