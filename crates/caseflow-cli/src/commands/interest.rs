//! Interest command implementation.
//!
//! Calculates post-judgment interest owed on a principal over a period.

use anyhow::Result;
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::Tabled;

use caseflow_core::accrual::{Accrual, AccrualEngine, AccrualPeriod, InterestBreakdown};
use caseflow_core::config::RoundingRule;
use caseflow_core::types::Date;

use crate::cli::OutputFormat;
use crate::commands::{load_catalog, parse_date, parse_principal, require_series};
use crate::error::CliError;
use crate::output::{format_currency, print_header, print_json_value, print_output, KeyValue};
use crate::settings::Settings;

/// Arguments for the interest command.
#[derive(Args, Debug)]
pub struct InterestArgs {
    /// Principal amount (e.g., 1000 or 1,250.75)
    #[arg(short, long)]
    pub principal: String,

    /// First day of the accrual period (MM/DD/YYYY)
    #[arg(short, long)]
    pub start: String,

    /// Last day of the accrual period, inclusive (MM/DD/YYYY)
    #[arg(short, long)]
    pub end: String,

    /// Judgment date (MM/DD/YYYY). Defaults to the start date.
    #[arg(short, long)]
    pub judgment: Option<String>,

    /// Rate series. Defaults to the configured series.
    #[arg(long)]
    pub series: Option<String>,
}

/// One rate run of the calculation.
#[derive(Debug, Serialize, Tabled)]
pub struct PeriodRow {
    #[tabled(rename = "From")]
    pub from: Date,
    #[tabled(rename = "To")]
    pub to: Date,
    #[tabled(rename = "Days")]
    pub days: i64,
    #[tabled(rename = "Annual (%)")]
    pub annual_rate_percent: Decimal,
    #[tabled(rename = "Daily rate")]
    pub daily_rate_decimal: Decimal,
    #[tabled(rename = "Interest")]
    pub interest: Decimal,
}

impl PeriodRow {
    fn from_period(period: &AccrualPeriod, rounding: RoundingRule, decimal_places: u32) -> Self {
        Self {
            from: period.start,
            to: period.end,
            days: period.days,
            annual_rate_percent: period.record.annual_rate_percent(),
            daily_rate_decimal: period.record.daily_rate_decimal(),
            interest: rounding.round(period.interest, decimal_places),
        }
    }
}

/// JSON report for a resolved calculation.
#[derive(Debug, Serialize)]
struct InterestReport<'a> {
    series: &'a str,
    principal: Decimal,
    start_date: Date,
    end_date: Date,
    judgment_date: Date,
    #[serde(flatten)]
    breakdown: &'a InterestBreakdown,
}

/// Execute the interest command.
pub fn execute(args: InterestArgs, format: OutputFormat, settings: &Settings) -> Result<()> {
    // Validate inputs
    let principal = parse_principal(&args.principal)?;
    let start = parse_date(&args.start)?;
    let end = parse_date(&args.end)?;
    if end < start {
        return Err(CliError::InvertedPeriod {
            start: args.start,
            end: args.end,
        }
        .into());
    }
    let judgment = match args.judgment.as_deref() {
        Some(s) => parse_date(s)?,
        None => start,
    };

    let mut config = settings.accrual.clone();
    if let Some(series) = args.series {
        config.series_key = series;
    }

    let catalog = load_catalog()?;
    require_series(&catalog, &config.series_key)?;
    let decimal_places = config.decimal_places;
    let rounding = config.rounding;
    let engine = AccrualEngine::with_config(&catalog, config)?;
    let series = engine.config().series_key.as_str();

    let breakdown = match engine.calculate_interest(principal, start, end, judgment)? {
        Accrual::Accrued(breakdown) => breakdown,
        Accrual::Unresolved { series, date } => {
            return Err(anyhow::anyhow!(
                "No rate is found on or before {} in series {}; interest cannot be calculated",
                date.to_us_string(),
                series
            ));
        }
    };

    let periods: Vec<PeriodRow> = breakdown
        .periods
        .iter()
        .map(|p| PeriodRow::from_period(p, rounding, decimal_places))
        .collect();

    match format {
        OutputFormat::Table => {
            let summary = vec![
                KeyValue::new("Series", series),
                KeyValue::new("Principal", format_currency(principal, rounding, decimal_places)),
                KeyValue::new("Start date", start.to_us_string()),
                KeyValue::new("End date", end.to_us_string()),
                KeyValue::new("Judgment date", judgment.to_us_string()),
                KeyValue::new("Days (inclusive)", breakdown.days.to_string()),
                KeyValue::new("Method", breakdown.method.to_string()),
                KeyValue::new(
                    "Interest owed",
                    format_currency(breakdown.interest, rounding, decimal_places),
                ),
            ];
            print_header("Interest Calculation");
            print_output(&summary, format)?;
            print_header("Rate Periods");
            print_output(&periods, format)?;
        }
        OutputFormat::Json => {
            print_json_value(&InterestReport {
                series,
                principal,
                start_date: start,
                end_date: end,
                judgment_date: judgment,
                breakdown: &breakdown,
            })?;
        }
        OutputFormat::Csv => {
            print_output(&periods, format)?;
        }
        OutputFormat::Minimal => {
            println!("{}", breakdown.interest);
        }
    }

    Ok(())
}
