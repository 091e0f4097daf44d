//! Error types for chart analysis.

use ganzhi_time::TimeError;
use thiserror::Error;

/// Errors from chart synthesis and fortune queries.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum AnalysisError {
    /// Calendar normalization rejected the birth moment or query date.
    #[error(transparent)]
    Time(#[from] TimeError),
    /// A daily-fortune range is reversed or longer than the allowed window.
    #[error("requested {requested_days} days, window allows 1..={max_days}")]
    OutOfRangeQuery { requested_days: i64, max_days: u32 },
    /// A `FortuneConfig` field is outside its accepted range.
    #[error("invalid fortune config: {0}")]
    InvalidConfig(String),
}
