//! Config command implementation.
//!
//! Shows the configuration the other commands would run with.

use anyhow::Result;
use clap::Args;

use crate::cli::OutputFormat;
use crate::output::{print_header, print_json_value, print_output, KeyValue};
use crate::settings::Settings;

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Print as a TOML file that can be edited and passed back via --config
    #[arg(long)]
    pub toml: bool,
}

/// Execute the config command.
pub fn execute(args: ConfigArgs, format: OutputFormat, settings: &Settings) -> Result<()> {
    if args.toml {
        print!("{}", toml::to_string_pretty(settings)?);
        return Ok(());
    }

    match format {
        OutputFormat::Json => print_json_value(settings),
        _ => {
            let accrual = &settings.accrual;
            let rows = vec![
                KeyValue::new("series_key", accrual.series_key.clone()),
                KeyValue::new("changeover_date", accrual.changeover_date.to_string()),
                KeyValue::new("method_selection", format!("{:?}", accrual.method_selection)),
                KeyValue::new("rounding", format!("{:?}", accrual.rounding)),
                KeyValue::new("decimal_places", accrual.decimal_places.to_string()),
                KeyValue::new("daily_summation", format!("{:?}", accrual.daily_summation)),
            ];
            if format == OutputFormat::Table {
                print_header("Accrual Configuration");
            }
            print_output(&rows, format)
        }
    }
}
