use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("invalid date range: start {start} is after end {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
    #[error("unknown trailer status: {0}")]
    UnknownTrailerStatus(String),
    #[error("unknown trailer type: {0}")]
    UnknownTrailerType(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
