use ganzhi_analysis::AnalysisError;
use ganzhi_config::ConfigError;
use ganzhi_time::TimeError;
use thiserror::Error;

/// Unified error type for the convenience API.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum GanzhiError {
    #[error("engine already initialized")]
    AlreadyInitialized,
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
    #[error(transparent)]
    Time(#[from] TimeError),
}
