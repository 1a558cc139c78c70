//! Configuration file loading and logging setup.
//!
//! The configuration file is optional. When present it is TOML with an
//! `[accrual]` table mirroring [`AccrualConfig`]:
//!
//! ```toml
//! [accrual]
//! series_key = "FL_POST_JUDGMENT"
//! changeover_date = "2011-10-01"
//! method_selection = "whole_period_before_changeover"
//! rounding = "half_up"
//! decimal_places = 2
//! daily_summation = "per_day"
//! ```

use std::path::Path;

use caseflow_core::config::AccrualConfig;
use serde::{Deserialize, Serialize};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{CliError, CliResult};

/// Top-level configuration file contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Accrual engine settings.
    #[serde(default)]
    pub accrual: AccrualConfig,
}

impl Settings {
    /// Loads settings from a TOML file.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parses settings from TOML text and validates them.
    pub fn from_toml(content: &str) -> CliResult<Self> {
        let settings: Settings =
            toml::from_str(content).map_err(|e| CliError::Config(e.to_string()))?;
        settings
            .accrual
            .validate()
            .map_err(|e| CliError::Config(e.to_string()))?;
        Ok(settings)
    }

    /// Loads from `path` if given, otherwise uses defaults.
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => {
                info!("Loading configuration from {}", path.display());
                Self::from_file(path)
            }
            None => {
                info!("Using default configuration");
                Ok(Self::default())
            }
        }
    }
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level follows `-v` flags. Logs go
/// to stderr so stdout carries only command output.
pub fn init_logging(verbosity: u8) {
    let fallback = match verbosity {
        0 => "warn",
        1 => "info,caseflow_core=info",
        _ => "debug,caseflow_core=debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
