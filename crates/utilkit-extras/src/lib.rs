//! Helpers that wrap other third-party crates: CSV files, mainland-China mobile numbers,
//! weighted sampling without replacement and SQL text rendering.

#![forbid(unsafe_code)]

pub mod csv_io;
pub mod phone;
pub mod sampling;
pub mod sql;

pub use phone::parse_phone;
pub use sampling::weighted_choices;

#[derive(thiserror::Error, Debug)]
pub enum ExtrasError {
    #[error("{0}")]
    Csv(#[from] csv::Error),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("field '{0}' is not in the header")]
    UnknownField(String),

    #[error("{weights} weights for a population of {population}")]
    WeightsLength { population: usize, weights: usize },

    #[error("weight {0} is negative or not finite")]
    InvalidWeight(f64),

    #[error("weights must not all be zero")]
    ZeroWeights,

    #[error("cannot draw {k} items, only {available} have a non-zero weight")]
    SampleTooLarge { k: usize, available: usize },

    #[error("query has {placeholders} placeholders but {params} parameters")]
    ParamCount { placeholders: usize, params: usize },
}
