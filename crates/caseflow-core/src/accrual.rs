//! Post-judgment interest accrual.
//!
//! Two methods exist, split by a policy changeover date:
//!
//! - **Flat rate**: one rate, resolved at the judgment date, applied to every
//!   day of the period: `principal × daily_rate × days_inclusive`.
//! - **Daily accrual**: each day of the period accrues at the rate in force
//!   on that day: `Σ principal × daily_rate(day)`.
//!
//! Both count start and end dates inclusively and round once, at the end.
//! Rounding per day would compound error over periods of thousands of days.
//! Arithmetic is checked: a total beyond the `Decimal` range is reported as
//! [`CaseflowError::Overflow`] rather than wrapping or aborting.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::RateCatalog;
use crate::config::{AccrualConfig, DailySummation, MethodSelection};
use crate::error::{CaseflowError, CaseflowResult};
use crate::series::RateSeries;
use crate::types::{Date, RateRecord};

/// Accrual algorithm applied to a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccrualMethod {
    /// Single rate fixed at the judgment date.
    FlatRate,
    /// Rate resolved per calendar day.
    DailyAccrual,
}

impl std::fmt::Display for AccrualMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccrualMethod::FlatRate => write!(f, "Flat rate"),
            AccrualMethod::DailyAccrual => write!(f, "Daily accrual"),
        }
    }
}

/// A run of consecutive days that accrued at the same rate record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccrualPeriod {
    /// First day of the run.
    pub start: Date,
    /// Last day of the run (inclusive).
    pub end: Date,
    /// Number of days in the run.
    pub days: i64,
    /// Record applied to every day of the run.
    pub record: RateRecord,
    /// Unrounded interest accrued over the run.
    pub interest: Decimal,
}

/// A successful interest calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterestBreakdown {
    /// Interest rounded to the configured number of decimal places.
    pub interest: Decimal,
    /// Exact sum before rounding.
    pub unrounded: Decimal,
    /// Method that produced the amount.
    pub method: AccrualMethod,
    /// Days counted, start and end inclusive.
    pub days: i64,
    /// Rate runs, in date order.
    pub periods: Vec<AccrualPeriod>,
}

/// Outcome of [`AccrualEngine::calculate_interest`].
///
/// A missing rate is kept apart from a genuine zero amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Accrual {
    /// Interest was computed for the whole period.
    Accrued(InterestBreakdown),
    /// No rate was in force on `date`; nothing was accrued.
    Unresolved {
        /// Series that was consulted.
        series: String,
        /// First date without an applicable rate.
        date: Date,
    },
}

impl Accrual {
    /// Rounded interest, if every needed rate was found.
    #[must_use]
    pub fn amount(&self) -> Option<Decimal> {
        match self {
            Accrual::Accrued(breakdown) => Some(breakdown.interest),
            Accrual::Unresolved { .. } => None,
        }
    }

    /// Rounded interest, or zero when a rate was missing.
    ///
    /// This collapses "no applicable rate" into zero interest; use
    /// [`Accrual::amount`] where the two must be told apart.
    #[must_use]
    pub fn amount_or_zero(&self) -> Decimal {
        self.amount().unwrap_or(Decimal::ZERO)
    }

    /// True if interest was computed.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        matches!(self, Accrual::Accrued(_))
    }

    /// Full breakdown, if resolved.
    #[must_use]
    pub fn breakdown(&self) -> Option<&InterestBreakdown> {
        match self {
            Accrual::Accrued(breakdown) => Some(breakdown),
            Accrual::Unresolved { .. } => None,
        }
    }
}

/// Computes interest over a borrowed [`RateCatalog`].
///
/// # Example
///
/// ```rust
/// use caseflow_core::accrual::{AccrualEngine, AccrualMethod};
/// use caseflow_core::schedules::florida;
/// use caseflow_core::types::Date;
/// use rust_decimal_macros::dec;
///
/// let catalog = florida::catalog().unwrap();
/// let engine = AccrualEngine::new(&catalog);
///
/// let start = Date::from_ymd(1995, 6, 1).unwrap();
/// let end = Date::from_ymd(1995, 6, 30).unwrap();
/// let accrual = engine.calculate_interest(dec!(1000), start, end, start).unwrap();
///
/// let breakdown = accrual.breakdown().unwrap();
/// assert_eq!(breakdown.method, AccrualMethod::FlatRate);
/// assert_eq!(breakdown.interest, dec!(6.58));
/// ```
#[derive(Debug, Clone)]
pub struct AccrualEngine<'a> {
    catalog: &'a RateCatalog,
    config: AccrualConfig,
}

impl<'a> AccrualEngine<'a> {
    /// Creates an engine with the default configuration.
    #[must_use]
    pub fn new(catalog: &'a RateCatalog) -> Self {
        Self {
            catalog,
            config: AccrualConfig::default(),
        }
    }

    /// Creates an engine with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns `CaseflowError::Config` if the configuration is invalid.
    pub fn with_config(catalog: &'a RateCatalog, config: AccrualConfig) -> CaseflowResult<Self> {
        config.validate()?;
        Ok(Self { catalog, config })
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &AccrualConfig {
        &self.config
    }

    /// Rate in force on `date` in the configured series.
    #[must_use]
    pub fn rate_as_of(&self, date: Date) -> Option<&'a RateRecord> {
        self.catalog.get_rate_as_of(&self.config.series_key, date)
    }

    /// Method the engine will use for `[start_date, end_date]`.
    #[must_use]
    pub fn select_method(&self, start_date: Date, end_date: Date) -> AccrualMethod {
        let changeover = self.config.changeover_date;
        let flat = match self.config.method_selection {
            MethodSelection::WholePeriodBeforeChangeover => {
                start_date < changeover && end_date < changeover
            }
            MethodSelection::StartBeforeChangeover => start_date < changeover,
        };
        if flat {
            AccrualMethod::FlatRate
        } else {
            AccrualMethod::DailyAccrual
        }
    }

    /// Computes interest on `principal` over `[start_date, end_date]`.
    ///
    /// The caller guarantees `principal >= 0` and `start_date <= end_date`.
    /// `judgment_date` anchors the rate for the flat-rate method and is
    /// ignored by the daily method.
    ///
    /// # Errors
    ///
    /// Returns `CaseflowError::Overflow` if the interest exceeds the range of
    /// `Decimal`. A missing rate is not an error; it yields
    /// [`Accrual::Unresolved`].
    pub fn calculate_interest(
        &self,
        principal: Decimal,
        start_date: Date,
        end_date: Date,
        judgment_date: Date,
    ) -> CaseflowResult<Accrual> {
        let method = self.select_method(start_date, end_date);
        debug!(
            series = %self.config.series_key,
            %principal,
            %start_date,
            %end_date,
            %judgment_date,
            ?method,
            "Calculating interest"
        );

        let result = match method {
            AccrualMethod::FlatRate => self.flat_rate(principal, start_date, end_date, judgment_date),
            AccrualMethod::DailyAccrual => match self.config.daily_summation {
                DailySummation::PerDay => self.daily_per_day(principal, start_date, end_date),
                DailySummation::Segmented => self.daily_segmented(principal, start_date, end_date),
            },
        };

        match result {
            Ok((unrounded, periods)) => {
                let interest = self.config.rounding.round(unrounded, self.config.decimal_places);
                Ok(Accrual::Accrued(InterestBreakdown {
                    interest,
                    unrounded,
                    method,
                    days: start_date.days_inclusive(&end_date).max(0),
                    periods,
                }))
            }
            Err(Halt::NoRate(date)) => {
                warn!(
                    series = %self.config.series_key,
                    %date,
                    "No rate in force; interest not accrued"
                );
                Ok(Accrual::Unresolved {
                    series: self.config.series_key.clone(),
                    date,
                })
            }
            Err(Halt::Failed(err)) => {
                warn!(series = %self.config.series_key, %principal, "{}", err);
                Err(err)
            }
        }
    }

    /// Single rate at `judgment_date` times the inclusive day count.
    fn flat_rate(
        &self,
        principal: Decimal,
        start_date: Date,
        end_date: Date,
        judgment_date: Date,
    ) -> Result<(Decimal, Vec<AccrualPeriod>), Halt> {
        let record = self
            .rate_as_of(judgment_date)
            .ok_or(Halt::NoRate(judgment_date))?;
        let days = start_date.days_inclusive(&end_date);
        let interest = run_interest(principal, record, days)?;
        let period = AccrualPeriod {
            start: start_date,
            end: end_date,
            days,
            record: record.clone(),
            interest,
        };
        Ok((interest, vec![period]))
    }

    /// Resolves the rate for each calendar day and sums.
    fn daily_per_day(
        &self,
        principal: Decimal,
        start_date: Date,
        end_date: Date,
    ) -> Result<(Decimal, Vec<AccrualPeriod>), Halt> {
        let series = self.series();
        let mut total = Decimal::ZERO;
        let mut periods: Vec<AccrualPeriod> = Vec::new();

        for day in start_date.iter_through(end_date) {
            let record = series
                .and_then(|s| s.rate_as_of(day))
                .ok_or(Halt::NoRate(day))?;
            let daily = run_interest(principal, record, 1)?;
            total = checked_sum(total, daily)?;

            if let Some(run) = periods
                .last_mut()
                .filter(|run| run.record.effective_date() == record.effective_date())
            {
                run.end = day;
                run.days += 1;
                run.interest = checked_sum(run.interest, daily)?;
            } else {
                periods.push(AccrualPeriod {
                    start: day,
                    end: day,
                    days: 1,
                    record: record.clone(),
                    interest: daily,
                });
            }
        }

        Ok((total, periods))
    }

    /// Same result as [`Self::daily_per_day`], one step per rate record.
    fn daily_segmented(
        &self,
        principal: Decimal,
        start_date: Date,
        end_date: Date,
    ) -> Result<(Decimal, Vec<AccrualPeriod>), Halt> {
        if end_date < start_date {
            return Ok((Decimal::ZERO, Vec::new()));
        }

        let records = self
            .series()
            .map(|s| s.records_between(start_date, end_date))
            .unwrap_or_default();
        match records.first() {
            Some(first) if first.effective_date() <= start_date => {}
            _ => return Err(Halt::NoRate(start_date)),
        }

        let mut total = Decimal::ZERO;
        let mut periods = Vec::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            let seg_start = record.effective_date().max(start_date);
            let seg_end = records
                .get(i + 1)
                .map_or(end_date, |next| next.effective_date().add_days(-1).min(end_date));
            let days = seg_start.days_inclusive(&seg_end);
            let interest = run_interest(principal, record, days)?;
            total = checked_sum(total, interest)?;
            periods.push(AccrualPeriod {
                start: seg_start,
                end: seg_end,
                days,
                record: record.clone(),
                interest,
            });
        }

        Ok((total, periods))
    }

    fn series(&self) -> Option<&'a RateSeries> {
        self.catalog.get(&self.config.series_key)
    }
}

/// Why an accrual stopped before producing a total.
enum Halt {
    /// No rate in force on this date.
    NoRate(Date),
    Failed(CaseflowError),
}

impl From<CaseflowError> for Halt {
    fn from(err: CaseflowError) -> Self {
        Halt::Failed(err)
    }
}

/// `principal × daily_rate × days`, checked.
fn run_interest(principal: Decimal, record: &RateRecord, days: i64) -> CaseflowResult<Decimal> {
    principal
        .checked_mul(record.daily_rate_decimal())
        .and_then(|daily| daily.checked_mul(Decimal::from(days)))
        .ok_or_else(|| CaseflowError::overflow("interest product"))
}

fn checked_sum(total: Decimal, addend: Decimal) -> CaseflowResult<Decimal> {
    total
        .checked_add(addend)
        .ok_or_else(|| CaseflowError::overflow("interest sum"))
}
