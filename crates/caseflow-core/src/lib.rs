//! # CaseFlow Core
//!
//! Rate schedules and post-judgment interest accrual.
//!
//! - **Types**: [`Date`] and [`RateRecord`]
//! - **Series**: append-only [`RateSeries`] with as-of (step function) lookup
//! - **Catalog**: [`RateCatalog`] routing inserts and lookups by series key
//! - **Accrual**: [`AccrualEngine`] computing interest with the flat-rate or
//!   daily-accrual method depending on the policy changeover date
//! - **Schedules**: compiled-in rate tables (Florida post-judgment rates)
//!
//! ## Example
//!
//! ```rust
//! use caseflow_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let catalog = florida::catalog().unwrap();
//! let engine = AccrualEngine::new(&catalog);
//!
//! let start = Date::parse_flexible("09/28/2011").unwrap();
//! let end = Date::parse_flexible("10/03/2011").unwrap();
//! let accrual = engine.calculate_interest(dec!(100000), start, end, start).unwrap();
//!
//! assert_eq!(accrual.amount(), Some(dec!(88.36)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::trivially_copy_pass_by_ref)]

pub mod accrual;
pub mod catalog;
pub mod config;
pub mod error;
pub mod schedules;
pub mod series;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::accrual::{Accrual, AccrualEngine, AccrualMethod, AccrualPeriod, InterestBreakdown};
    pub use crate::catalog::RateCatalog;
    pub use crate::config::{AccrualConfig, DailySummation, MethodSelection, RoundingRule};
    pub use crate::error::{CaseflowError, CaseflowResult};
    pub use crate::schedules::florida;
    pub use crate::series::RateSeries;
    pub use crate::types::{Date, RateRecord};
}

// Re-export commonly used types at crate root
pub use accrual::{Accrual, AccrualEngine, AccrualMethod};
pub use catalog::RateCatalog;
pub use config::AccrualConfig;
pub use error::{CaseflowError, CaseflowResult};
pub use series::RateSeries;
pub use types::{Date, RateRecord};
