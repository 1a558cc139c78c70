//! Catalog of rate series keyed by series identifier.

use std::collections::BTreeMap;

use crate::error::CaseflowResult;
use crate::series::RateSeries;
use crate::types::{Date, RateRecord};

/// Owns every [`RateSeries`] and routes inserts and lookups by key.
///
/// A catalog is built once during initialization and then only read. All
/// query methods take `&self`, so a finished catalog can be shared freely
/// across threads.
///
/// # Example
///
/// ```rust
/// use caseflow_core::catalog::RateCatalog;
/// use caseflow_core::types::{Date, RateRecord};
/// use rust_decimal_macros::dec;
///
/// let mut catalog = RateCatalog::new();
/// catalog
///     .add_rate("FL_POST_JUDGMENT", RateRecord::new(Date::from_ymd(1995, 1, 1).unwrap(), dec!(8), dec!(0.0002192)))
///     .unwrap();
///
/// let rate = catalog.get_rate_as_of("FL_POST_JUDGMENT", Date::from_ymd(1995, 6, 1).unwrap());
/// assert_eq!(rate.unwrap().daily_rate_decimal(), dec!(0.0002192));
/// assert!(catalog.get_rate_as_of("NY_POST_JUDGMENT", Date::from_ymd(1995, 6, 1).unwrap()).is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RateCatalog {
    series: BTreeMap<String, RateSeries>,
}

impl RateCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            series: BTreeMap::new(),
        }
    }

    /// Builds a catalog holding a single series from an ordered record list.
    ///
    /// # Errors
    ///
    /// Fails on the first record that breaks chronological order.
    pub fn from_schedule(
        series_key: &str,
        records: impl IntoIterator<Item = RateRecord>,
    ) -> CaseflowResult<Self> {
        let mut catalog = Self::new();
        catalog.extend_series(series_key, records)?;
        Ok(catalog)
    }

    /// Appends a record to a series, creating the series on first use.
    ///
    /// Any string is a valid key; keys are compared exactly.
    ///
    /// # Errors
    ///
    /// Returns `CaseflowError::OrderingViolation` if the record does not come
    /// strictly after the series' last record.
    pub fn add_rate(&mut self, series_key: &str, record: RateRecord) -> CaseflowResult<()> {
        match self.series.get_mut(series_key) {
            Some(series) => series.push(record),
            None => {
                let mut series = RateSeries::new(series_key);
                series.push(record)?;
                self.series.insert(series_key.to_string(), series);
                Ok(())
            }
        }
    }

    /// Appends records in order, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Propagates the first error from [`RateCatalog::add_rate`]. Records
    /// accepted before the failing one stay in the series.
    pub fn extend_series(
        &mut self,
        series_key: &str,
        records: impl IntoIterator<Item = RateRecord>,
    ) -> CaseflowResult<()> {
        for record in records {
            self.add_rate(series_key, record)?;
        }
        Ok(())
    }

    /// Returns the record in force on `date` for the given series.
    ///
    /// `None` if the series is unknown or `date` precedes its first record.
    #[must_use]
    pub fn get_rate_as_of(&self, series_key: &str, date: Date) -> Option<&RateRecord> {
        self.series.get(series_key)?.rate_as_of(date)
    }

    /// Returns a series by key.
    #[must_use]
    pub fn get(&self, series_key: &str) -> Option<&RateSeries> {
        self.series.get(series_key)
    }

    /// True if the catalog holds the given series.
    #[must_use]
    pub fn contains(&self, series_key: &str) -> bool {
        self.series.contains_key(series_key)
    }

    /// Series keys in sorted order.
    pub fn series_keys(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }

    /// Number of series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// True if no series has been created.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CaseflowError;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_add_creates_series_on_first_use() {
        let mut catalog = RateCatalog::new();
        assert!(catalog.is_empty());

        catalog
            .add_rate("A", RateRecord::new(date(2000, 1, 1), dec!(5), dec!(0.000137)))
            .unwrap();

        assert!(catalog.contains("A"));
        assert!(!catalog.contains("B"));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("A").unwrap().len(), 1);
    }

    #[test]
    fn test_series_are_independent() {
        let mut catalog = RateCatalog::new();
        catalog
            .add_rate("A", RateRecord::new(date(2000, 1, 1), dec!(5), dec!(0.000137)))
            .unwrap();
        // Earlier date is fine in a different series
        catalog
            .add_rate("B", RateRecord::new(date(1990, 1, 1), dec!(9), dec!(0.000247)))
            .unwrap();

        assert_eq!(
            catalog.get_rate_as_of("B", date(1995, 1, 1)).unwrap().annual_rate_percent(),
            dec!(9)
        );
        assert!(catalog.get_rate_as_of("A", date(1995, 1, 1)).is_none());
        assert_eq!(catalog.series_keys().collect::<Vec<_>>(), vec!["A", "B"]);
    }

    #[test]
    fn test_ordering_violation_does_not_mutate() {
        let mut catalog = RateCatalog::new();
        catalog
            .add_rate("A", RateRecord::new(date(2000, 1, 1), dec!(5), dec!(0.000137)))
            .unwrap();

        let err = catalog
            .add_rate("A", RateRecord::new(date(1999, 1, 1), dec!(6), dec!(0.000164)))
            .unwrap_err();
        assert_eq!(
            err,
            CaseflowError::OrderingViolation {
                series: "A".to_string(),
                date: date(1999, 1, 1),
                last: date(2000, 1, 1),
            }
        );
        assert_eq!(catalog.get("A").unwrap().len(), 1);
    }

    #[test]
    fn test_any_key_is_accepted() {
        let mut catalog = RateCatalog::new();
        catalog
            .add_rate("", RateRecord::new(date(2000, 1, 1), dec!(5), dec!(0.000137)))
            .unwrap();
        catalog
            .add_rate("  ", RateRecord::new(date(1990, 1, 1), dec!(9), dec!(0.000247)))
            .unwrap();

        assert_eq!(catalog.len(), 2);
        assert!(catalog.get_rate_as_of("", date(2001, 1, 1)).is_some());
        assert!(catalog.get_rate_as_of("  ", date(1995, 1, 1)).is_some());

        let err = catalog
            .add_rate("", RateRecord::new(date(2000, 1, 1), dec!(6), dec!(0.000164)))
            .unwrap_err();
        assert!(matches!(err, CaseflowError::OrderingViolation { .. }));
    }

    #[test]
    fn test_from_schedule_stops_at_first_violation() {
        let records = vec![
            RateRecord::new(date(2000, 1, 1), dec!(5), dec!(0.000137)),
            RateRecord::new(date(2001, 1, 1), dec!(6), dec!(0.000164)),
            RateRecord::new(date(2001, 1, 1), dec!(7), dec!(0.000192)),
        ];
        let err = RateCatalog::from_schedule("A", records).unwrap_err();
        assert!(matches!(err, CaseflowError::OrderingViolation { .. }));
    }

    #[test]
    fn test_unknown_series_lookup() {
        let catalog = RateCatalog::new();
        assert!(catalog.get_rate_as_of("MISSING", date(2000, 1, 1)).is_none());
        assert!(catalog.get("MISSING").is_none());
    }
}
