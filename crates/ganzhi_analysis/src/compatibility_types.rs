//! Types for two-chart compatibility scoring.

use serde::{Deserialize, Serialize};

use ganzhi_base::{Element, FourPillars, RelationFact};

/// Declared relationship between the two people.
///
/// Selects the score floor, the sub-score dimensions and which advisories are
/// eligible. It never changes the raw score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationshipContext {
    Colleague,
    #[default]
    Friend,
    Family,
    Partner,
    Romantic,
}

pub const ALL_CONTEXTS: [RelationshipContext; 5] = [
    RelationshipContext::Colleague,
    RelationshipContext::Friend,
    RelationshipContext::Family,
    RelationshipContext::Partner,
    RelationshipContext::Romantic,
];

/// Lowest score reported outside romantic contexts.
pub const SCORE_FLOOR: i32 = 20;

/// Lowest score reported in romantic contexts.
pub const ROMANTIC_SCORE_FLOOR: i32 = 25;

pub const SCORE_CEILING: i32 = 100;

impl RelationshipContext {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Colleague => "colleague",
            Self::Friend => "friend",
            Self::Family => "family",
            Self::Partner => "partner",
            Self::Romantic => "romantic",
        }
    }

    pub const fn is_romantic(self) -> bool {
        matches!(self, Self::Romantic)
    }

    pub const fn floor(self) -> i32 {
        if self.is_romantic() {
            ROMANTIC_SCORE_FLOOR
        } else {
            SCORE_FLOOR
        }
    }

    /// Sub-score dimensions reported for this context.
    pub const fn dimensions(self) -> &'static [Dimension; 4] {
        if self.is_romantic() {
            &ROMANTIC_DIMENSIONS
        } else {
            &GENERAL_DIMENSIONS
        }
    }
}

/// Letter grade, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Grade {
    S,
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Grade for a clamped score. Thresholds are inclusive lower bounds.
    pub const fn from_score(score: i32) -> Grade {
        match score {
            90.. => Self::S,
            80..=89 => Self::A,
            70..=79 => Self::B,
            60..=69 => Self::C,
            45..=59 => Self::D,
            _ => Self::F,
        }
    }

    /// 0 for the best tier, 5 for the worst.
    pub const fn rank(self) -> u8 {
        match self {
            Self::S => 0,
            Self::A => 1,
            Self::B => 2,
            Self::C => 3,
            Self::D => 4,
            Self::F => 5,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::S => "S",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }
}

/// A sub-score dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Communication,
    Collaboration,
    Trust,
    Growth,
    Romance,
    Passion,
    Stability,
    Future,
}

pub const GENERAL_DIMENSIONS: [Dimension; 4] = [
    Dimension::Communication,
    Dimension::Collaboration,
    Dimension::Trust,
    Dimension::Growth,
];

pub const ROMANTIC_DIMENSIONS: [Dimension; 4] = [
    Dimension::Romance,
    Dimension::Passion,
    Dimension::Stability,
    Dimension::Future,
];

impl Dimension {
    /// Fixed offset from the overall score.
    pub const fn offset(self) -> i32 {
        match self {
            Self::Communication => 3,
            Self::Collaboration => -2,
            Self::Trust => 1,
            Self::Growth => -4,
            Self::Romance => 4,
            Self::Passion => 2,
            Self::Stability => -3,
            Self::Future => -1,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Communication => "communication",
            Self::Collaboration => "collaboration",
            Self::Trust => "trust",
            Self::Growth => "growth",
            Self::Romance => "romance",
            Self::Passion => "passion",
            Self::Stability => "stability",
            Self::Future => "future",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubScore {
    pub dimension: Dimension,
    pub score: i32,
}

/// Which rule contributed a score delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ScoreFactor {
    DayMasterElements,
    DayMasterUnion,
    YearBranchTriad,
    YearBranchHarmony,
    YearBranchClash,
    DayBranchHarmony,
    DayBranchClash,
    DominantElementA,
    DominantElementB,
}

/// One applied delta, in application order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreTerm {
    pub factor: ScoreFactor,
    pub delta: i32,
}

/// Placeholder keys for downstream advisory text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AdvisoryKey {
    ElementsNourish,
    ElementsClash,
    SameElement,
    StemUnion,
    YearTriad,
    YearHarmony,
    YearClash,
    DayBranchHarmony,
    DayBranchClash,
    DominantComplement,
    DominantConflict,
    WorkSynergy,
    FriendshipEase,
    FamilyBond,
    RomanticSpark,
    RomanticFriction,
}

impl AdvisoryKey {
    /// Whether the key applies to a context.
    pub const fn eligible(self, context: RelationshipContext) -> bool {
        use RelationshipContext as C;
        match self {
            Self::WorkSynergy => matches!(context, C::Colleague | C::Partner),
            Self::FriendshipEase => matches!(context, C::Friend),
            Self::FamilyBond => matches!(context, C::Family),
            Self::RomanticSpark | Self::RomanticFriction => matches!(context, C::Romantic),
            _ => true,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::ElementsNourish => "elements_nourish",
            Self::ElementsClash => "elements_clash",
            Self::SameElement => "same_element",
            Self::StemUnion => "stem_union",
            Self::YearTriad => "year_triad",
            Self::YearHarmony => "year_harmony",
            Self::YearClash => "year_clash",
            Self::DayBranchHarmony => "day_branch_harmony",
            Self::DayBranchClash => "day_branch_clash",
            Self::DominantComplement => "dominant_complement",
            Self::DominantConflict => "dominant_conflict",
            Self::WorkSynergy => "work_synergy",
            Self::FriendshipEase => "friendship_ease",
            Self::FamilyBond => "family_bond",
            Self::RomanticSpark => "romantic_spark",
            Self::RomanticFriction => "romantic_friction",
        }
    }
}

/// Minimal per-person data the scorer needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompatibilityParty {
    pub pillars: FourPillars,
    /// First dominant element of the chart.
    pub dominant: Option<Element>,
}

/// Scored comparison of two charts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompatibilityResult {
    /// Clamped to `[context floor, 100]`.
    pub score: i32,
    /// Sum of base and deltas before clamping; independent of context.
    pub raw_score: i32,
    pub grade: Grade,
    pub context: RelationshipContext,
    pub sub_scores: Vec<SubScore>,
    /// `(A relative to B, B relative to A)` for day-master elements.
    pub day_master_relation: (RelationFact, RelationFact),
    pub day_master_union: Option<Element>,
    pub year_branch_relation: RelationFact,
    pub day_branch_relation: RelationFact,
    pub terms: Vec<ScoreTerm>,
    pub advisories: Vec<AdvisoryKey>,
    pub pillars_a: FourPillars,
    pub pillars_b: FourPillars,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_thresholds() {
        assert_eq!(Grade::from_score(100), Grade::S);
        assert_eq!(Grade::from_score(90), Grade::S);
        assert_eq!(Grade::from_score(89), Grade::A);
        assert_eq!(Grade::from_score(70), Grade::B);
        assert_eq!(Grade::from_score(60), Grade::C);
        assert_eq!(Grade::from_score(45), Grade::D);
        assert_eq!(Grade::from_score(44), Grade::F);
        assert_eq!(Grade::from_score(20), Grade::F);
    }

    #[test]
    fn grade_monotonic() {
        for s in 0..100 {
            assert!(Grade::from_score(s).rank() >= Grade::from_score(s + 1).rank());
        }
    }

    #[test]
    fn floors() {
        assert_eq!(RelationshipContext::Romantic.floor(), 25);
        for c in ALL_CONTEXTS.iter().filter(|c| !c.is_romantic()) {
            assert_eq!(c.floor(), 20);
        }
    }

    #[test]
    fn context_specific_advisories() {
        assert!(AdvisoryKey::RomanticSpark.eligible(RelationshipContext::Romantic));
        assert!(!AdvisoryKey::RomanticSpark.eligible(RelationshipContext::Colleague));
        assert!(AdvisoryKey::WorkSynergy.eligible(RelationshipContext::Partner));
        assert!(AdvisoryKey::YearClash.eligible(RelationshipContext::Family));
    }

    #[test]
    fn context_deserializes_lowercase() {
        let c: RelationshipContext = serde_json::from_str("\"romantic\"").unwrap();
        assert_eq!(c, RelationshipContext::Romantic);
    }
}
