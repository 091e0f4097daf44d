//! Types for major (ten-year) and daily fortune cycles.

use serde::Serialize;

use ganzhi_base::{Branch, Pillar, PillarLabel, PillarPosition, RelationFact};
use ganzhi_time::{CivilDate, SolarTermEvent};

use crate::error::AnalysisError;

/// Pillars generated per major-fortune sequence.
pub const MAJOR_FORTUNE_COUNT: usize = 10;

/// Years covered by one major-fortune pillar.
pub const YEARS_PER_MAJOR_FORTUNE: i32 = 10;

/// Days between birth and the sectional term that make one year of start age.
pub const DAYS_PER_FORTUNE_YEAR: f64 = 3.0;

/// Upper bound on a computed start age, years.
pub const MAX_START_AGE: i32 = 150;

/// Longest daily-fortune range, in days.
pub const MAX_DAILY_WINDOW_DAYS: u32 = 7;

/// Knobs for fortune generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FortuneConfig {
    /// Default: 3.0.
    pub start_age_divisor: f64,
    /// Maximum inclusive daily range. Default and upper bound: 7.
    pub daily_window_days: u32,
}

impl Default for FortuneConfig {
    fn default() -> Self {
        Self {
            start_age_divisor: DAYS_PER_FORTUNE_YEAR,
            daily_window_days: MAX_DAILY_WINDOW_DAYS,
        }
    }
}

impl FortuneConfig {
    pub fn validate(&self) -> Result<(), AnalysisError> {
        let divisor = self.start_age_divisor;
        if !divisor.is_finite() || divisor <= 0.0 {
            return Err(AnalysisError::InvalidConfig(format!(
                "start_age_divisor must be finite and positive, got {divisor}"
            )));
        }
        if !(1..=MAX_DAILY_WINDOW_DAYS).contains(&self.daily_window_days) {
            return Err(AnalysisError::InvalidConfig(format!(
                "daily_window_days must be within 1..={MAX_DAILY_WINDOW_DAYS}, got {}",
                self.daily_window_days
            )));
        }
        Ok(())
    }
}

/// Walk direction through the 60-cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FortuneDirection {
    Forward,
    Reverse,
}

impl FortuneDirection {
    /// +1 or −1.
    pub const fn step(self) -> i64 {
        match self {
            Self::Forward => 1,
            Self::Reverse => -1,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Reverse => "reverse",
        }
    }
}

/// Five-tier fortune grade, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum FortuneGrade {
    Excellent,
    Good,
    Fair,
    Caution,
    Difficult,
}

impl FortuneGrade {
    pub const fn from_score(score: i32) -> FortuneGrade {
        match score {
            80.. => Self::Excellent,
            65..=79 => Self::Good,
            50..=64 => Self::Fair,
            35..=49 => Self::Caution,
            _ => Self::Difficult,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Caution => "caution",
            Self::Difficult => "difficult",
        }
    }
}

/// How a major-fortune pillar sits against the natal chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FortuneAnalysis {
    /// Pillar stem element relative to the useful element.
    pub stem_relation: RelationFact,
    /// Pillar branch element relative to the useful element.
    pub branch_relation: RelationFact,
    /// Pillar branch clashes with the natal day branch.
    pub clashes_day_branch: bool,
    /// Pillar branch forms a six harmony with some natal branch.
    pub harmonizes_natal: bool,
    /// Stem element same as, feeding or fed by the useful element.
    pub favorable: bool,
    pub score: i32,
    pub grade: FortuneGrade,
}

/// One ten-year window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MajorFortunePillar {
    /// 1-based.
    pub order: u32,
    pub start_age: i32,
    pub end_age: i32,
    pub start_year: i32,
    pub end_year: i32,
    pub pillar: Pillar,
    pub label: PillarLabel,
    pub analysis: FortuneAnalysis,
}

/// The full major-fortune sequence of a chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MajorFortune {
    pub direction: FortuneDirection,
    pub start_age: i32,
    /// Sectional term the start age was measured to.
    pub boundary_term: SolarTermEvent,
    /// Absolute days between birth and the boundary term.
    pub days_to_term: f64,
    pub pillars: Vec<MajorFortunePillar>,
}

/// Relation of the day branch to one natal branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NatalBranchRelation {
    pub position: PillarPosition,
    pub natal: Branch,
    pub relation: RelationFact,
}

/// Fortune for a single civil day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyFortuneResult {
    pub date: CivilDate,
    pub pillar: Pillar,
    pub label: PillarLabel,
    pub branch_relations: Vec<NatalBranchRelation>,
    /// Day stem element relative to the useful element.
    pub stem_relation: RelationFact,
    /// Natal branches in harmony, triad or sameness with the day branch.
    pub supportive_branches: usize,
    pub score: i32,
    pub grade: FortuneGrade,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_thresholds() {
        assert_eq!(FortuneGrade::from_score(80), FortuneGrade::Excellent);
        assert_eq!(FortuneGrade::from_score(79), FortuneGrade::Good);
        assert_eq!(FortuneGrade::from_score(65), FortuneGrade::Good);
        assert_eq!(FortuneGrade::from_score(50), FortuneGrade::Fair);
        assert_eq!(FortuneGrade::from_score(35), FortuneGrade::Caution);
        assert_eq!(FortuneGrade::from_score(0), FortuneGrade::Difficult);
    }

    #[test]
    fn grade_monotonic() {
        for s in 0..100 {
            assert!(FortuneGrade::from_score(s) >= FortuneGrade::from_score(s + 1));
        }
    }

    #[test]
    fn direction_steps() {
        assert_eq!(FortuneDirection::Forward.step(), 1);
        assert_eq!(FortuneDirection::Reverse.step(), -1);
    }
}
