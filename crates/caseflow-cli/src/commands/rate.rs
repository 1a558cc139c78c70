//! Rate command implementation.
//!
//! Shows the rate in force on a given date.

use anyhow::Result;
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;

use caseflow_core::types::Date;

use crate::cli::OutputFormat;
use crate::commands::{load_catalog, parse_date, require_series};
use crate::output::{print_header, print_json_value, print_output, KeyValue};
use crate::settings::Settings;

/// Arguments for the rate command.
#[derive(Args, Debug)]
pub struct RateArgs {
    /// Date to look up (MM/DD/YYYY)
    #[arg(short, long)]
    pub date: String,

    /// Rate series. Defaults to the configured series.
    #[arg(long)]
    pub series: Option<String>,
}

/// Lookup result. Rate fields are absent when no rate applies.
#[derive(Debug, Serialize)]
struct RateLookup<'a> {
    series: &'a str,
    as_of: Date,
    effective_date: Option<Date>,
    annual_rate_percent: Option<Decimal>,
    daily_rate_decimal: Option<Decimal>,
}

/// Execute the rate command.
pub fn execute(args: RateArgs, format: OutputFormat, settings: &Settings) -> Result<()> {
    let as_of = parse_date(&args.date)?;
    let series = args
        .series
        .unwrap_or_else(|| settings.accrual.series_key.clone());

    let catalog = load_catalog()?;
    require_series(&catalog, &series)?;
    let record = catalog.get_rate_as_of(&series, as_of);

    match format {
        OutputFormat::Table | OutputFormat::Csv => {
            let Some(record) = record else {
                println!("No rate is found on or before {}.", as_of.to_us_string());
                return Ok(());
            };
            let rows = vec![
                KeyValue::new("As-of date", as_of.to_us_string()),
                KeyValue::new("Rate effective date", record.effective_date().to_us_string()),
                KeyValue::new("Annual rate (%)", format!("{}%", record.annual_rate_percent())),
                KeyValue::new("Daily rate (decimal)", record.daily_rate_decimal().to_string()),
            ];
            if format == OutputFormat::Table {
                print_header("Rate Result");
            }
            print_output(&rows, format)?;
        }
        OutputFormat::Json => {
            print_json_value(&RateLookup {
                series: &series,
                as_of,
                effective_date: record.map(|r| r.effective_date()),
                annual_rate_percent: record.map(|r| r.annual_rate_percent()),
                daily_rate_decimal: record.map(|r| r.daily_rate_decimal()),
            })?;
        }
        OutputFormat::Minimal => match record {
            Some(record) => println!("{}", record.daily_rate_decimal()),
            None => println!("none"),
        },
    }

    Ok(())
}
