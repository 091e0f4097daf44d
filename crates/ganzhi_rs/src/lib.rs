//! Convenience wrapper for the ganzhi chart engine.
//!
//! Holds one process-wide [`EngineConfig`] and exposes one-call functions
//! that take a [`BirthInput`] directly, so callers never thread
//! `ChartConfig`/`FortuneConfig` values or resolve cities themselves.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use ganzhi_rs::*;
//!
//! init(EngineConfig::discover()?)?;
//!
//! let input = BirthInput::solar(1990, 1, 1, 0, 0, Gender::Male).with_city("Seoul");
//! let reading = chart(&input)?;
//! println!("{} day master, useful element {}", reading.day_master.name(),
//!     reading.useful_element.name());
//! ```

pub mod convenience;
pub mod error;
pub mod global;

pub use convenience::{
    chart, cities, compatibility, daily_fortune, daily_fortune_range, lunar_to_solar,
    major_fortune, normalize_birth, pillars, solar_terms, solar_to_lunar,
};
pub use error::GanzhiError;
pub use global::{config, init, is_initialized};

// Re-export the types the convenience functions take and return.
pub use ganzhi_analysis::{
    AdvisoryKey, BirthInput, BranchFact, BranchFactKind, ChartReading, CompatibilityResult,
    DailyFortuneResult, FortuneDirection, FortuneGrade, Gender, Grade, MajorFortune,
    MajorFortunePillar, RelationshipContext, Strength, SubScore, current_major_fortune,
};
pub use ganzhi_base::{
    Branch, Element, ElementScores, FourPillars, LateZiRule, Pillar, PillarBreakdown,
    PillarLabel, PillarPosition, RelationFact, Stem,
};
pub use ganzhi_config::{ConfigError, EngineConfig};
pub use ganzhi_time::{
    City, CivilDate, CivilDateTime, LunarDate, NormalizedInstant, SolarTerm, SolarTermEvent,
};
