//! CLI command implementations.

pub mod config;
pub mod interest;
pub mod rate;
pub mod rates;

// Re-export submodules for convenience
pub use config::ConfigArgs;
pub use interest::InterestArgs;
pub use rate::RateArgs;
pub use rates::RatesArgs;

use std::str::FromStr;

use caseflow_core::catalog::RateCatalog;
use caseflow_core::schedules::florida;
use caseflow_core::types::Date;
use rust_decimal::Decimal;

use crate::error::{CliError, CliResult};

/// Parses a date in MM/DD/YYYY or YYYY-MM-DD format.
pub fn parse_date(s: &str) -> CliResult<Date> {
    Date::parse_flexible(s).map_err(|_| CliError::InvalidDate(s.to_string()))
}

/// Parses a non-negative principal amount.
///
/// Accepts an optional leading `$` and thousands separators.
pub fn parse_principal(s: &str) -> CliResult<Decimal> {
    let cleaned: String = s
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    let value =
        Decimal::from_str(&cleaned).map_err(|_| CliError::InvalidPrincipal(s.to_string()))?;
    if value.is_sign_negative() && !value.is_zero() {
        return Err(CliError::negative_principal(value));
    }
    Ok(value)
}

/// Builds the compiled-in rate catalog.
pub fn load_catalog() -> anyhow::Result<RateCatalog> {
    Ok(florida::catalog()?)
}

/// Fails unless the catalog holds `series_key`.
pub fn require_series(catalog: &RateCatalog, series_key: &str) -> CliResult<()> {
    if catalog.contains(series_key) {
        Ok(())
    } else {
        Err(CliError::UnknownSeries(series_key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_principal() {
        assert_eq!(parse_principal("1000").unwrap(), dec!(1000));
        assert_eq!(parse_principal("$1,250.75").unwrap(), dec!(1250.75));
        assert_eq!(parse_principal("0").unwrap(), Decimal::ZERO);
        assert!(matches!(parse_principal("-5"), Err(CliError::InvalidPrincipal(_))));
        assert!(matches!(parse_principal("abc"), Err(CliError::InvalidPrincipal(_))));
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("06/01/1995").unwrap(), Date::from_ymd(1995, 6, 1).unwrap());
        assert_eq!(parse_date("1995-06-01").unwrap(), Date::from_ymd(1995, 6, 1).unwrap());
        assert!(matches!(parse_date("June 1"), Err(CliError::InvalidDate(_))));
    }

    #[test]
    fn test_require_series() {
        let catalog = load_catalog().unwrap();
        assert!(require_series(&catalog, florida::SERIES_KEY).is_ok());
        assert!(matches!(
            require_series(&catalog, "NY_POST_JUDGMENT"),
            Err(CliError::UnknownSeries(_))
        ));
    }
}
