//! Epoch timestamps and calendar helpers on top of [`jiff`].

#![forbid(unsafe_code)]

pub mod dates;
pub mod timestamp;

pub use dates::{DateRange, find_yearly_range, month_last_datetime, yearly_ranges};
pub use timestamp::{from_utc_timestamp, utc_timestamp};

#[derive(thiserror::Error, Debug)]
pub enum TimeError {
    #[error("timestamp {0} is not a finite number")]
    NonFinite(f64),

    #[error("begin {begin} is after end {end}")]
    BeginAfterEnd {
        begin: jiff::civil::Date,
        end: jiff::civil::Date,
    },

    #[error("range length must be at least one year")]
    ZeroYears,

    #[error("{0}")]
    Jiff(#[from] jiff::Error),
}
