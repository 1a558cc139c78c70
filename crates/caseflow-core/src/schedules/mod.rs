//! Compiled-in rate schedules.
//!
//! Each schedule is exposed as an ordered list of [`RateRecord`](crate::types::RateRecord)s
//! so callers decide which catalog it goes into.

pub mod florida;
