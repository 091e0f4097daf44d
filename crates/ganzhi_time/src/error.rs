//! Error types for calendar normalization.

use thiserror::Error;

/// Errors from civil/lunar date validation and solar-term search.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// The civil or lunar date does not exist (e.g. day 31 in a 30-day month).
    #[error("invalid date: {0}")]
    InvalidDate(String),
    /// Year outside the supported conversion era.
    #[error("year {year} is outside the supported era {min}..={max}")]
    UnsupportedEra { year: i32, min: i32, max: i32 },
    /// Bisection search for a solar term did not bracket a root.
    #[error("no convergence: {0}")]
    NoConvergence(&'static str),
}

impl TimeError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidDate(msg.into())
    }

    pub(crate) fn era(year: i32) -> Self {
        Self::UnsupportedEra {
            year,
            min: crate::MIN_SUPPORTED_YEAR,
            max: crate::MAX_SUPPORTED_YEAR,
        }
    }
}
