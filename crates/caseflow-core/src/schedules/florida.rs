//! Florida post-judgment interest rates.
//!
//! Rates are published by the Chief Financial Officer under section 55.03,
//! Florida Statutes. Until 2011-10-01 a single rate applied per calendar year
//! (12% for 10/1/1981 through 12/31/1994); from 2011-10-01 the rate is
//! revised quarterly. Where a year was revised quarterly, the rate as of
//! January 1st of the following year must also be listed.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::catalog::RateCatalog;
use crate::error::CaseflowResult;
use crate::types::{Date, RateRecord};

/// Series key of the Florida post-judgment schedule.
pub const SERIES_KEY: &str = "FL_POST_JUDGMENT";

// Evaluated at compile time.
const CHANGEOVER: NaiveDate = match NaiveDate::from_ymd_opt(2011, 10, 1) {
    Some(date) => date,
    None => panic!("invalid changeover date"),
};

/// Date from which Florida rates are revised quarterly and interest accrues
/// at the rate in force on each day.
#[must_use]
pub fn changeover_date() -> Date {
    Date::from(CHANGEOVER)
}

/// Published table, ascending by effective date.
///
/// Columns: effective date, annual rate (%), daily rate (decimal).
fn published_table() -> Vec<(i32, u32, u32, Decimal, Decimal)> {
    vec![
        (1981, 10, 1, dec!(12), dec!(0.0003333)),
        (1995, 1, 1, dec!(8), dec!(0.0002192)),
        (1996, 1, 1, dec!(10), dec!(0.0002740)),
        (2001, 1, 1, dec!(11), dec!(0.0003014)),
        (2002, 1, 1, dec!(9), dec!(0.0002466)),
        (2003, 1, 1, dec!(6), dec!(0.0001644)),
        (2004, 1, 1, dec!(7), dec!(0.0001918)),
        (2006, 1, 1, dec!(9), dec!(0.0002466)),
        (2007, 1, 1, dec!(11), dec!(0.0003014)),
        (2009, 1, 1, dec!(8), dec!(0.0002192)),
        (2010, 1, 1, dec!(6), dec!(0.0001644)),
        (2011, 1, 1, dec!(6), dec!(0.0001644)),
        (2011, 10, 1, dec!(4.75), dec!(0.000130137)),
        (2012, 1, 1, dec!(4.75), dec!(0.000129781)),
        (2013, 1, 1, dec!(4.75), dec!(0.000130137)),
        (2016, 1, 1, dec!(4.75), dec!(0.000129781)),
        (2016, 4, 1, dec!(4.78), dec!(0.0001306011)),
        (2016, 7, 1, dec!(4.84), dec!(0.0001322404)),
        (2016, 10, 1, dec!(4.91), dec!(0.0001341530)),
        (2017, 1, 1, dec!(4.97), dec!(0.0001361644)),
        (2017, 4, 1, dec!(5.05), dec!(0.0001383562)),
        (2017, 7, 1, dec!(5.17), dec!(0.0001416438)),
        (2017, 10, 1, dec!(5.35), dec!(0.000146575)),
        (2018, 1, 1, dec!(5.53), dec!(0.000151507)),
        (2018, 4, 1, dec!(5.72), dec!(0.000156712)),
        (2018, 7, 1, dec!(5.97), dec!(0.000163562)),
        (2018, 10, 1, dec!(6.09), dec!(0.000166849)),
        (2019, 1, 1, dec!(6.33), dec!(0.000173425)),
        (2019, 4, 1, dec!(6.57), dec!(0.000180000)),
        (2019, 7, 1, dec!(6.77), dec!(0.000185479)),
        (2019, 10, 1, dec!(6.89), dec!(0.000188767)),
        (2020, 1, 1, dec!(6.83), dec!(0.000186612)),
        (2020, 4, 1, dec!(6.66), dec!(0.000181967)),
        (2020, 7, 1, dec!(6.03), dec!(0.000164754)),
        (2020, 10, 1, dec!(5.37), dec!(0.000146721)),
        (2021, 1, 1, dec!(4.81), dec!(0.000131781)),
        (2021, 4, 1, dec!(4.31), dec!(0.000118082)),
        (2021, 7, 1, dec!(4.25), dec!(0.000116438)),
        (2022, 1, 1, dec!(4.25), dec!(0.000116438)),
        (2022, 7, 1, dec!(4.34), dec!(0.000118904)),
        (2022, 10, 1, dec!(4.75), dec!(0.000130137)),
        (2023, 1, 1, dec!(5.52), dec!(0.000151233)),
        (2023, 4, 1, dec!(6.58), dec!(0.000180274)),
        (2023, 7, 1, dec!(7.69), dec!(0.000210685)),
        (2023, 10, 1, dec!(8.54), dec!(0.000233973)),
        (2024, 1, 1, dec!(9.09), dec!(0.000248361)),
        (2024, 4, 1, dec!(9.34), dec!(0.000255191)),
        (2024, 7, 1, dec!(9.46), dec!(0.000258470)),
        (2024, 10, 1, dec!(9.50), dec!(0.000259563)),
        (2025, 1, 1, dec!(9.38), dec!(0.000256986)),
        (2025, 4, 1, dec!(9.15), dec!(0.000250685)),
        (2025, 7, 1, dec!(8.90), dec!(0.000243836)),
        (2025, 10, 1, dec!(8.65), dec!(0.000236986)),
        (2026, 1, 1, dec!(8.44), dec!(0.000231233)),
    ]
}

/// The full schedule as rate records, in effective-date order.
///
/// # Errors
///
/// Returns `CaseflowError::InvalidDate` if a table row holds an impossible
/// date.
pub fn post_judgment_records() -> CaseflowResult<Vec<RateRecord>> {
    published_table()
        .into_iter()
        .map(|(year, month, day, annual, daily)| {
            Ok(RateRecord::new(Date::from_ymd(year, month, day)?, annual, daily))
        })
        .collect()
}

/// A catalog holding only the Florida series.
///
/// # Errors
///
/// Propagates any ordering violation in the table.
pub fn catalog() -> CaseflowResult<RateCatalog> {
    RateCatalog::from_schedule(SERIES_KEY, post_judgment_records()?)
}
