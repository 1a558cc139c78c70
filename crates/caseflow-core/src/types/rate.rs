//! Dated rate records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Date;

/// A single entry of a rate schedule.
///
/// The daily rate is authoritative for every calculation. The annual
/// percentage is carried for display only and is never used to derive the
/// daily rate, since published tables round the two independently.
///
/// # Example
///
/// ```rust
/// use caseflow_core::types::{Date, RateRecord};
/// use rust_decimal_macros::dec;
///
/// let record = RateRecord::new(
///     Date::from_ymd(1995, 1, 1).unwrap(),
///     dec!(8.0),
///     dec!(0.0002192),
/// );
/// assert_eq!(record.daily_rate_percent(), dec!(0.02192));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateRecord {
    effective_date: Date,
    annual_rate_percent: Decimal,
    daily_rate_decimal: Decimal,
}

impl RateRecord {
    /// Creates a new rate record.
    #[must_use]
    pub fn new(effective_date: Date, annual_rate_percent: Decimal, daily_rate_decimal: Decimal) -> Self {
        Self {
            effective_date,
            annual_rate_percent,
            daily_rate_decimal,
        }
    }

    /// First date this rate applies.
    #[must_use]
    pub fn effective_date(&self) -> Date {
        self.effective_date
    }

    /// Annual rate as a percentage (e.g., 8.0 for 8%). Display only.
    #[must_use]
    pub fn annual_rate_percent(&self) -> Decimal {
        self.annual_rate_percent
    }

    /// Per-day multiplier applied to the principal.
    #[must_use]
    pub fn daily_rate_decimal(&self) -> Decimal {
        self.daily_rate_decimal
    }

    /// Daily rate as a percentage, the way published tables list it.
    #[must_use]
    pub fn daily_rate_percent(&self) -> Decimal {
        self.daily_rate_decimal * Decimal::ONE_HUNDRED
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_accessors() {
        let record = RateRecord::new(
            Date::from_ymd(2011, 10, 1).unwrap(),
            dec!(4.75),
            dec!(0.000130137),
        );
        assert_eq!(record.effective_date(), Date::from_ymd(2011, 10, 1).unwrap());
        assert_eq!(record.annual_rate_percent(), dec!(4.75));
        assert_eq!(record.daily_rate_decimal(), dec!(0.000130137));
        assert_eq!(record.daily_rate_percent(), dec!(0.0130137));
    }

    #[test]
    fn test_daily_rate_not_derived_from_annual() {
        // 2012 was a leap year: same annual rate, different daily rate.
        let a = RateRecord::new(Date::from_ymd(2011, 10, 1).unwrap(), dec!(4.75), dec!(0.000130137));
        let b = RateRecord::new(Date::from_ymd(2012, 1, 1).unwrap(), dec!(4.75), dec!(0.000129781));
        assert_eq!(a.annual_rate_percent(), b.annual_rate_percent());
        assert_ne!(a.daily_rate_decimal(), b.daily_rate_decimal());
    }

    #[test]
    fn test_serde_roundtrip_keeps_precision() {
        let record = RateRecord::new(
            Date::from_ymd(2016, 4, 1).unwrap(),
            dec!(4.78),
            dec!(0.0001306011),
        );
        let json = serde_json::to_string(&record).unwrap();
        let parsed: RateRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }
}
