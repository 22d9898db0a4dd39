use std::path::PathBuf;

use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("quantity must be greater than zero (got {0})")]
    QuantityNotPositive(Decimal),

    #[error("unit price cannot be negative (got {0})")]
    NegativeUnitPrice(Decimal),

    #[error("line description cannot be empty")]
    EmptyDescription,

    #[error("line index {index} out of range (invoice has {len} lines)")]
    LineIndexOutOfRange { index: usize, len: usize },

    #[error("tax rate cannot be negative (got {0})")]
    NegativeRate(Decimal),

    #[error("'{0}' is not a valid number")]
    InvalidNumber(String),

    #[error("'{0}' is not a valid date (expected dd/mm/yyyy)")]
    InvalidDate(String),

    #[error("failed to read company profile {path}: {source}")]
    ProfileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse company profile {path}: {source}")]
    ProfileParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
