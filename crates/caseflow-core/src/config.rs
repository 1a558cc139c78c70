//! Accrual engine configuration.
//!
//! Every field has a default matching the Florida post-judgment rules, so an
//! empty TOML table (or no file at all) yields a working configuration.
//!
//! ```rust
//! use caseflow_core::config::{AccrualConfig, RoundingRule};
//!
//! let config: AccrualConfig = toml::from_str("rounding = \"half_even\"").unwrap();
//! assert_eq!(config.rounding, RoundingRule::HalfEven);
//! assert_eq!(config.series_key, "FL_POST_JUDGMENT");
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{CaseflowError, CaseflowResult};
use crate::schedules::florida;
use crate::types::Date;

/// Upper bound on `decimal_places`.
const MAX_DECIMAL_PLACES: u32 = 10;

/// How the engine decides between the flat-rate and daily methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MethodSelection {
    /// Flat rate only when the whole period ends before the changeover.
    /// Periods that straddle the changeover accrue daily.
    #[default]
    WholePeriodBeforeChangeover,
    /// Flat rate whenever the period starts before the changeover.
    StartBeforeChangeover,
}

/// Midpoint rule for the final currency rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingRule {
    /// Midpoints round away from zero (0.125 -> 0.13).
    #[default]
    HalfUp,
    /// Midpoints round to the even neighbour (0.125 -> 0.12).
    HalfEven,
}

impl RoundingRule {
    /// Rounds `value` to `decimal_places` using this rule.
    #[must_use]
    pub fn round(self, value: Decimal, decimal_places: u32) -> Decimal {
        value.round_dp_with_strategy(decimal_places, self.strategy())
    }

    fn strategy(self) -> RoundingStrategy {
        match self {
            RoundingRule::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            RoundingRule::HalfEven => RoundingStrategy::MidpointNearestEven,
        }
    }
}

/// How the daily method walks the period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DailySummation {
    /// Resolve the rate for every calendar day.
    #[default]
    PerDay,
    /// Resolve once per rate segment and multiply by the segment length.
    Segmented,
}

/// Configuration for [`AccrualEngine`](crate::accrual::AccrualEngine).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccrualConfig {
    /// Series the engine reads rates from.
    #[serde(default = "default_series_key")]
    pub series_key: String,

    /// Policy date at which the accrual method changes.
    #[serde(default = "default_changeover_date")]
    pub changeover_date: Date,

    /// Flat vs. daily selection rule.
    #[serde(default)]
    pub method_selection: MethodSelection,

    /// Final rounding rule.
    #[serde(default)]
    pub rounding: RoundingRule,

    /// Decimal places of the rounded result.
    #[serde(default = "default_decimal_places")]
    pub decimal_places: u32,

    /// Daily method iteration mode.
    #[serde(default)]
    pub daily_summation: DailySummation,
}

fn default_series_key() -> String {
    florida::SERIES_KEY.to_string()
}

fn default_changeover_date() -> Date {
    florida::changeover_date()
}

fn default_decimal_places() -> u32 {
    2
}

impl Default for AccrualConfig {
    fn default() -> Self {
        Self {
            series_key: default_series_key(),
            changeover_date: default_changeover_date(),
            method_selection: MethodSelection::default(),
            rounding: RoundingRule::default(),
            decimal_places: default_decimal_places(),
            daily_summation: DailySummation::default(),
        }
    }
}

impl AccrualConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the series key.
    #[must_use]
    pub fn with_series_key(mut self, series_key: impl Into<String>) -> Self {
        self.series_key = series_key.into();
        self
    }

    /// Sets the changeover date.
    #[must_use]
    pub fn with_changeover_date(mut self, date: Date) -> Self {
        self.changeover_date = date;
        self
    }

    /// Sets the method selection rule.
    #[must_use]
    pub fn with_method_selection(mut self, selection: MethodSelection) -> Self {
        self.method_selection = selection;
        self
    }

    /// Sets the rounding rule.
    #[must_use]
    pub fn with_rounding(mut self, rounding: RoundingRule) -> Self {
        self.rounding = rounding;
        self
    }

    /// Sets the number of decimal places.
    #[must_use]
    pub fn with_decimal_places(mut self, decimal_places: u32) -> Self {
        self.decimal_places = decimal_places;
        self
    }

    /// Sets the daily summation mode.
    #[must_use]
    pub fn with_daily_summation(mut self, summation: DailySummation) -> Self {
        self.daily_summation = summation;
        self
    }

    /// Checks the configuration for unusable values.
    ///
    /// # Errors
    ///
    /// Returns `CaseflowError::Config` for a blank series key or too many
    /// decimal places.
    pub fn validate(&self) -> CaseflowResult<()> {
        if self.series_key.trim().is_empty() {
            return Err(CaseflowError::config("series_key must not be empty"));
        }
        if self.decimal_places > MAX_DECIMAL_PLACES {
            return Err(CaseflowError::config(format!(
                "decimal_places must be at most {MAX_DECIMAL_PLACES}, got {}",
                self.decimal_places
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults() {
        let config = AccrualConfig::default();
        assert_eq!(config.series_key, "FL_POST_JUDGMENT");
        assert_eq!(config.changeover_date, Date::from_ymd(2011, 10, 1).unwrap());
        assert_eq!(config.method_selection, MethodSelection::WholePeriodBeforeChangeover);
        assert_eq!(config.rounding, RoundingRule::HalfUp);
        assert_eq!(config.decimal_places, 2);
        assert_eq!(config.daily_summation, DailySummation::PerDay);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rounding_rules_differ_only_on_midpoints() {
        assert_eq!(RoundingRule::HalfUp.round(dec!(6.576), 2), dec!(6.58));
        assert_eq!(RoundingRule::HalfEven.round(dec!(6.576), 2), dec!(6.58));

        assert_eq!(RoundingRule::HalfUp.round(dec!(0.125), 2), dec!(0.13));
        assert_eq!(RoundingRule::HalfEven.round(dec!(0.125), 2), dec!(0.12));
    }

    #[test]
    fn test_builder() {
        let config = AccrualConfig::new()
            .with_series_key("TEST")
            .with_changeover_date(Date::from_ymd(2020, 1, 1).unwrap())
            .with_method_selection(MethodSelection::StartBeforeChangeover)
            .with_rounding(RoundingRule::HalfEven)
            .with_decimal_places(4)
            .with_daily_summation(DailySummation::Segmented);

        assert_eq!(config.series_key, "TEST");
        assert_eq!(config.decimal_places, 4);
        assert_eq!(config.daily_summation, DailySummation::Segmented);
    }

    #[test]
    fn test_validation() {
        assert!(AccrualConfig::new().with_series_key(" ").validate().is_err());
        assert!(AccrualConfig::new().with_decimal_places(11).validate().is_err());
    }

    #[test]
    fn test_toml_partial() {
        let config: AccrualConfig = toml::from_str(
            r#"
            changeover_date = "2012-01-01"
            method_selection = "start_before_changeover"
            daily_summation = "segmented"
            "#,
        )
        .unwrap();

        assert_eq!(config.changeover_date, Date::from_ymd(2012, 1, 1).unwrap());
        assert_eq!(config.method_selection, MethodSelection::StartBeforeChangeover);
        assert_eq!(config.daily_summation, DailySummation::Segmented);
        assert_eq!(config.series_key, "FL_POST_JUDGMENT");
    }
}
