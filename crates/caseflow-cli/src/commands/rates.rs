//! Rates command implementation.
//!
//! Lists the full schedule of a series.

use anyhow::Result;
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::Tabled;

use caseflow_core::types::{Date, RateRecord};

use crate::cli::OutputFormat;
use crate::commands::{load_catalog, require_series};
use crate::output::{print_header, print_output};
use crate::settings::Settings;

/// Arguments for the rates command.
#[derive(Args, Debug)]
pub struct RatesArgs {
    /// Rate series. Defaults to the configured series.
    #[arg(long)]
    pub series: Option<String>,
}

/// One schedule entry.
#[derive(Debug, Serialize, Tabled)]
pub struct RateRow {
    #[tabled(rename = "Effective")]
    pub effective_date: Date,
    #[tabled(rename = "Annual (%)")]
    pub annual_rate_percent: Decimal,
    #[tabled(rename = "Daily (%)")]
    pub daily_rate_percent: Decimal,
    #[tabled(rename = "Daily (decimal)")]
    pub daily_rate_decimal: Decimal,
}

impl From<&RateRecord> for RateRow {
    fn from(record: &RateRecord) -> Self {
        Self {
            effective_date: record.effective_date(),
            annual_rate_percent: record.annual_rate_percent(),
            daily_rate_percent: record.daily_rate_percent(),
            daily_rate_decimal: record.daily_rate_decimal(),
        }
    }
}

/// Execute the rates command.
pub fn execute(args: RatesArgs, format: OutputFormat, settings: &Settings) -> Result<()> {
    let series_key = args
        .series
        .unwrap_or_else(|| settings.accrual.series_key.clone());

    let catalog = load_catalog()?;
    require_series(&catalog, &series_key)?;
    let rows: Vec<RateRow> = catalog
        .get(&series_key)
        .map(|series| series.iter().map(RateRow::from).collect())
        .unwrap_or_default();

    match format {
        // Latest published daily rate.
        OutputFormat::Minimal => {
            if let Some(latest) = rows.last() {
                println!("{}", latest.daily_rate_decimal);
            }
            Ok(())
        }
        OutputFormat::Table => {
            print_header(&format!("{} ({} rates)", series_key, rows.len()));
            print_output(&rows, format)
        }
        _ => print_output(&rows, format),
    }
}
