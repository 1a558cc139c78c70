//! Domain types for rate schedules.
//!
//! - [`Date`]: Calendar date with no time component
//! - [`RateRecord`]: A dated entry of a rate schedule

mod date;
mod rate;

pub use date::{Date, DateIter};
pub use rate::RateRecord;
