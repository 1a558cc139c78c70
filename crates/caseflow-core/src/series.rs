//! Append-only rate series with as-of lookup.
//!
//! A [`RateSeries`] is a right-continuous step function of time: each record
//! applies from its effective date until the next record's effective date.

use tracing::debug;

use crate::error::{CaseflowError, CaseflowResult};
use crate::types::{Date, RateRecord};

/// An ordered, append-only schedule of rates for one jurisdiction/category.
///
/// Records are strictly ascending by effective date. There is no way to
/// remove or replace a record once it has been pushed.
///
/// # Example
///
/// ```rust
/// use caseflow_core::series::RateSeries;
/// use caseflow_core::types::{Date, RateRecord};
/// use rust_decimal_macros::dec;
///
/// let mut series = RateSeries::new("FL_POST_JUDGMENT");
/// series
///     .push(RateRecord::new(Date::from_ymd(1981, 10, 1).unwrap(), dec!(12), dec!(0.0003333)))
///     .unwrap();
///
/// assert!(series.rate_as_of(Date::from_ymd(1981, 9, 30).unwrap()).is_none());
/// assert!(series.rate_as_of(Date::from_ymd(2000, 1, 1).unwrap()).is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateSeries {
    key: String,
    records: Vec<RateRecord>,
}

impl RateSeries {
    /// Creates an empty series.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            records: Vec::new(),
        }
    }

    /// Series identifier.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Appends a record.
    ///
    /// # Errors
    ///
    /// Returns `CaseflowError::OrderingViolation` if the record's effective
    /// date is not strictly after the last accepted one. The series is left
    /// unchanged in that case.
    pub fn push(&mut self, record: RateRecord) -> CaseflowResult<()> {
        if let Some(last) = self.records.last() {
            if record.effective_date() <= last.effective_date() {
                return Err(CaseflowError::ordering_violation(
                    &self.key,
                    record.effective_date(),
                    last.effective_date(),
                ));
            }
        }

        debug!(
            series = %self.key,
            effective_date = %record.effective_date(),
            daily_rate = %record.daily_rate_decimal(),
            "Appended rate"
        );
        self.records.push(record);
        Ok(())
    }

    /// Returns the record in force on `date`.
    ///
    /// That is the record with the greatest effective date not after `date`,
    /// or `None` if `date` precedes the first record.
    #[must_use]
    pub fn rate_as_of(&self, date: Date) -> Option<&RateRecord> {
        let idx = self.position_as_of(date)?;
        self.records.get(idx)
    }

    /// Index of the record in force on `date`.
    fn position_as_of(&self, date: Date) -> Option<usize> {
        // Count of records effective on or before `date`; the predecessor
        // sits one slot to the left.
        let upper = self
            .records
            .partition_point(|r| r.effective_date() <= date);
        upper.checked_sub(1)
    }

    /// Records governing at least one day of `[start, end]`, in order.
    ///
    /// The first element is the record in force at `start` (when one exists);
    /// the rest are the records that take effect inside the range.
    #[must_use]
    pub fn records_between(&self, start: Date, end: Date) -> &[RateRecord] {
        if end < start {
            return &[];
        }
        let from = self
            .position_as_of(start)
            .unwrap_or_else(|| self.records.partition_point(|r| r.effective_date() < start));
        let to = self
            .records
            .partition_point(|r| r.effective_date() <= end);
        &self.records[from..to.max(from)]
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if no record has been pushed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Earliest record.
    #[must_use]
    pub fn first(&self) -> Option<&RateRecord> {
        self.records.first()
    }

    /// Latest record.
    #[must_use]
    pub fn last(&self) -> Option<&RateRecord> {
        self.records.last()
    }

    /// All records in chronological order.
    #[must_use]
    pub fn records(&self) -> &[RateRecord] {
        &self.records
    }

    /// Iterates records in chronological order.
    pub fn iter(&self) -> std::slice::Iter<'_, RateRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a RateSeries {
    type Item = &'a RateRecord;
    type IntoIter = std::slice::Iter<'a, RateRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn record(y: i32, m: u32, d: u32, daily: Decimal) -> RateRecord {
        RateRecord::new(date(y, m, d), dec!(1), daily)
    }

    fn sample_series() -> RateSeries {
        let mut series = RateSeries::new("TEST");
        series.push(record(1981, 10, 1, dec!(0.0003333))).unwrap();
        series.push(record(1995, 1, 1, dec!(0.0002192))).unwrap();
        series.push(record(1996, 1, 1, dec!(0.0002740))).unwrap();
        series
    }

    #[test]
    fn test_single_record_lookup() {
        let mut series = RateSeries::new("TEST");
        series.push(record(1981, 10, 1, dec!(0.0003333))).unwrap();

        assert!(series.rate_as_of(date(1981, 9, 30)).is_none());
        assert_eq!(
            series.rate_as_of(date(1981, 10, 1)).unwrap().effective_date(),
            date(1981, 10, 1)
        );
        assert_eq!(
            series.rate_as_of(date(2000, 1, 1)).unwrap().effective_date(),
            date(1981, 10, 1)
        );
    }

    #[test]
    fn test_lookup_between_records() {
        let series = sample_series();

        // Exactly on a boundary
        let r = series.rate_as_of(date(1995, 1, 1)).unwrap();
        assert_eq!(r.daily_rate_decimal(), dec!(0.0002192));

        // Day before a boundary
        let r = series.rate_as_of(date(1994, 12, 31)).unwrap();
        assert_eq!(r.daily_rate_decimal(), dec!(0.0003333));

        // After the last record
        let r = series.rate_as_of(date(2030, 6, 1)).unwrap();
        assert_eq!(r.daily_rate_decimal(), dec!(0.0002740));
    }

    #[test]
    fn test_empty_series_lookup() {
        let series = RateSeries::new("EMPTY");
        assert!(series.is_empty());
        assert!(series.rate_as_of(date(2000, 1, 1)).is_none());
        assert!(series.first().is_none());
    }

    #[test]
    fn test_push_rejects_duplicate_and_backdated() {
        let mut series = sample_series();
        let before = series.clone();

        let dup = series.push(record(1996, 1, 1, dec!(0.0001)));
        assert!(matches!(
            dup,
            Err(CaseflowError::OrderingViolation { date: d, last, .. })
                if d == date(1996, 1, 1) && last == date(1996, 1, 1)
        ));

        let backdated = series.push(record(1990, 1, 1, dec!(0.0001)));
        assert!(matches!(
            backdated,
            Err(CaseflowError::OrderingViolation { last, .. }) if last == date(1996, 1, 1)
        ));

        assert_eq!(series, before);
    }

    #[test]
    fn test_records_between() {
        let series = sample_series();

        let slice = series.records_between(date(1994, 6, 1), date(1995, 6, 1));
        assert_eq!(slice.len(), 2);
        assert_eq!(slice[0].effective_date(), date(1981, 10, 1));
        assert_eq!(slice[1].effective_date(), date(1995, 1, 1));

        let slice = series.records_between(date(1995, 1, 1), date(1995, 1, 1));
        assert_eq!(slice.len(), 1);
        assert_eq!(slice[0].effective_date(), date(1995, 1, 1));

        // Starts before the first record
        let slice = series.records_between(date(1970, 1, 1), date(1995, 1, 1));
        assert_eq!(slice.len(), 2);

        // Entirely before the series
        assert!(series.records_between(date(1970, 1, 1), date(1971, 1, 1)).is_empty());

        // Reversed range
        assert!(series.records_between(date(1996, 1, 1), date(1995, 1, 1)).is_empty());
    }

    #[test]
    fn test_iteration_order() {
        let series = sample_series();
        let dates: Vec<Date> = series.iter().map(RateRecord::effective_date).collect();
        assert_eq!(dates, vec![date(1981, 10, 1), date(1995, 1, 1), date(1996, 1, 1)]);
        assert_eq!((&series).into_iter().count(), 3);
        assert_eq!(series.last().unwrap().effective_date(), date(1996, 1, 1));
    }
}
