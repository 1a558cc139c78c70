//! CaseFlow CLI - Post-judgment interest calculations.
//!
//! # Usage
//!
//! ```bash
//! # Interest owed on a judgment
//! caseflow interest --principal 1000 --start 06/01/1995 --end 06/30/1995
//!
//! # Rate in force on a date
//! caseflow rate --date 10/01/2011
//!
//! # Full schedule as CSV
//! caseflow --format csv rates
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod error;
mod output;
mod settings;

use cli::{Cli, Commands};
use settings::Settings;

fn main() -> Result<()> {
    let cli = Cli::parse();

    settings::init_logging(cli.verbose);
    let settings = Settings::load(cli.config.as_deref())?;

    // Set up output format
    let format = cli.format;

    // Execute command
    match cli.command {
        Commands::Interest(args) => commands::interest::execute(args, format, &settings)?,
        Commands::Rate(args) => commands::rate::execute(args, format, &settings)?,
        Commands::Rates(args) => commands::rates::execute(args, format, &settings)?,
        Commands::Config(args) => commands::config::execute(args, format, &settings)?,
    }

    Ok(())
}
