//! Chart-level analysis over four pillars.
//!
//! This crate provides:
//! - Single-chart synthesis (day master, strength, useful element, branch facts)
//! - Two-chart compatibility scoring with deterministic sub-scores
//! - Major (ten-year) and daily fortune cycles

pub mod chart;
pub mod chart_types;
pub mod compatibility;
pub mod compatibility_types;
pub mod error;
pub mod fortune;
pub mod fortune_types;

pub use chart::{
    STRONG_SUPPORT_THRESHOLD, branch_facts, chart_for_birth, chart_from_instant, strength_of,
    support_of, useful_element_of,
};
pub use chart_types::{
    BirthInput, BranchFact, BranchFactKind, ChartConfig, ChartReading, Gender, Strength,
};
pub use compatibility::{
    BASE_SCORE, clamp_score, compatibility, day_master_delta, dominant_delta,
    score_compatibility, sub_scores,
};
pub use compatibility_types::{
    ALL_CONTEXTS, AdvisoryKey, CompatibilityParty, CompatibilityResult, Dimension,
    GENERAL_DIMENSIONS, Grade, ROMANTIC_DIMENSIONS, ROMANTIC_SCORE_FLOOR, RelationshipContext,
    SCORE_CEILING, SCORE_FLOOR, ScoreFactor, ScoreTerm, SubScore,
};
pub use error::AnalysisError;
pub use fortune::{
    analyze_pillar, current_major_fortune, daily_fortune, daily_fortune_range, element_delta,
    fortune_direction, major_fortune, major_fortune_pillars, start_age_from_days,
};
pub use fortune_types::{
    DAYS_PER_FORTUNE_YEAR, DailyFortuneResult, FortuneAnalysis, FortuneConfig,
    FortuneDirection, FortuneGrade, MAJOR_FORTUNE_COUNT, MAX_DAILY_WINDOW_DAYS, MAX_START_AGE,
    MajorFortune, MajorFortunePillar, NatalBranchRelation, YEARS_PER_MAJOR_FORTUNE,
};
