//! Two-chart compatibility scoring.
//!
//! Starts from a fixed base and applies deltas in a fixed order:
//! 1. day-master elements (the dominant term) and stem union
//! 2. year-branch triad, six harmony, clash
//! 3. day-branch six harmony, clash
//! 4. dominant-element cross relation, once from each side
//!
//! The result is clamped to the context floor and 100. Sub-scores are fixed
//! offsets from the clamped score.

use ganzhi_base::{
    RelationFact, branch_relation, is_clash, is_six_harmony, relate_both_ways, shares_triad,
    stem_combination,
};

use crate::chart_types::ChartReading;
use crate::compatibility_types::{
    AdvisoryKey, CompatibilityParty, CompatibilityResult, Grade, RelationshipContext,
    SCORE_CEILING, ScoreFactor, ScoreTerm, SubScore,
};

pub const BASE_SCORE: i32 = 60;

const SAME_ELEMENT_BONUS: i32 = 8;
const GENERATING_BONUS: i32 = 15;
const CONTROLLING_PENALTY: i32 = -12;
const STEM_UNION_BONUS: i32 = 10;
const YEAR_TRIAD_BONUS: i32 = 10;
const YEAR_HARMONY_BONUS: i32 = 10;
const YEAR_CLASH_PENALTY: i32 = -15;
const DAY_HARMONY_BONUS: i32 = 5;
const DAY_CLASH_PENALTY: i32 = -8;

/// Day-master element delta.
pub const fn day_master_delta(relation: RelationFact) -> i32 {
    match relation {
        RelationFact::Same => SAME_ELEMENT_BONUS,
        RelationFact::Generates | RelationFact::GeneratedBy => GENERATING_BONUS,
        RelationFact::Controls | RelationFact::ControlledBy => CONTROLLING_PENALTY,
        _ => 0,
    }
}

/// Dominant-element delta, from one side's point of view.
pub const fn dominant_delta(relation: RelationFact) -> i32 {
    match relation {
        RelationFact::Generates => 3,
        RelationFact::Same => 2,
        RelationFact::Controls => -3,
        _ => 0,
    }
}

/// Clamp a raw score into `[floor, 100]` for the context.
pub fn clamp_score(raw: i32, context: RelationshipContext) -> i32 {
    raw.clamp(context.floor(), SCORE_CEILING)
}

/// Sub-scores for the context, each offset from `score` and clamped.
pub fn sub_scores(score: i32, context: RelationshipContext) -> Vec<SubScore> {
    context
        .dimensions()
        .iter()
        .map(|&dimension| SubScore {
            dimension,
            score: clamp_score(score + dimension.offset(), context),
        })
        .collect()
}

struct Tally {
    raw: i32,
    terms: Vec<ScoreTerm>,
}

impl Tally {
    fn new() -> Self {
        Self {
            raw: BASE_SCORE,
            terms: Vec::new(),
        }
    }

    fn apply(&mut self, factor: ScoreFactor, delta: i32) {
        if delta != 0 {
            self.raw += delta;
            self.terms.push(ScoreTerm { factor, delta });
        }
    }
}

/// Score two parties. `a` is the subject for all asymmetric relations.
pub fn score_compatibility(
    a: &CompatibilityParty,
    b: &CompatibilityParty,
    context: RelationshipContext,
) -> CompatibilityResult {
    let mut tally = Tally::new();
    let mut advisories = Vec::new();

    let dm_a = a.pillars.day_master();
    let dm_b = b.pillars.day_master();
    let day_master_relation = relate_both_ways(dm_a.element(), dm_b.element());
    tally.apply(
        ScoreFactor::DayMasterElements,
        day_master_delta(day_master_relation.0),
    );
    match day_master_relation.0 {
        RelationFact::Same => advisories.push(AdvisoryKey::SameElement),
        RelationFact::Generates | RelationFact::GeneratedBy => {
            advisories.push(AdvisoryKey::ElementsNourish)
        }
        RelationFact::Controls | RelationFact::ControlledBy => {
            advisories.push(AdvisoryKey::ElementsClash)
        }
        _ => {}
    }
    let day_master_union = stem_combination(dm_a, dm_b);
    if day_master_union.is_some() {
        tally.apply(ScoreFactor::DayMasterUnion, STEM_UNION_BONUS);
        advisories.push(AdvisoryKey::StemUnion);
    }

    let (ya, yb) = (a.pillars.year.branch, b.pillars.year.branch);
    if shares_triad(ya, yb) {
        tally.apply(ScoreFactor::YearBranchTriad, YEAR_TRIAD_BONUS);
        advisories.push(AdvisoryKey::YearTriad);
    }
    if is_six_harmony(ya, yb) {
        tally.apply(ScoreFactor::YearBranchHarmony, YEAR_HARMONY_BONUS);
        advisories.push(AdvisoryKey::YearHarmony);
    }
    if is_clash(ya, yb) {
        tally.apply(ScoreFactor::YearBranchClash, YEAR_CLASH_PENALTY);
        advisories.push(AdvisoryKey::YearClash);
    }

    let (da, db) = (a.pillars.day.branch, b.pillars.day.branch);
    if is_six_harmony(da, db) {
        tally.apply(ScoreFactor::DayBranchHarmony, DAY_HARMONY_BONUS);
        advisories.push(AdvisoryKey::DayBranchHarmony);
    }
    if is_clash(da, db) {
        tally.apply(ScoreFactor::DayBranchClash, DAY_CLASH_PENALTY);
        advisories.push(AdvisoryKey::DayBranchClash);
    }

    if let (Some(ea), Some(eb)) = (a.dominant, b.dominant) {
        let (ab, ba) = relate_both_ways(ea, eb);
        let delta_a = dominant_delta(ab);
        let delta_b = dominant_delta(ba);
        tally.apply(ScoreFactor::DominantElementA, delta_a);
        tally.apply(ScoreFactor::DominantElementB, delta_b);
        if delta_a + delta_b > 0 {
            advisories.push(AdvisoryKey::DominantComplement);
        } else if delta_a + delta_b < 0 {
            advisories.push(AdvisoryKey::DominantConflict);
        }
    }

    let nourish = advisories.contains(&AdvisoryKey::ElementsNourish);
    let friction = advisories.contains(&AdvisoryKey::ElementsClash)
        || advisories.contains(&AdvisoryKey::DayBranchClash);
    if nourish || day_master_union.is_some() {
        advisories.push(AdvisoryKey::WorkSynergy);
    }
    if day_master_relation.0 == RelationFact::Same || nourish {
        advisories.push(AdvisoryKey::FriendshipEase);
    }
    if advisories.contains(&AdvisoryKey::YearTriad)
        || advisories.contains(&AdvisoryKey::YearHarmony)
    {
        advisories.push(AdvisoryKey::FamilyBond);
    }
    if day_master_union.is_some() || advisories.contains(&AdvisoryKey::DayBranchHarmony) {
        advisories.push(AdvisoryKey::RomanticSpark);
    }
    if friction {
        advisories.push(AdvisoryKey::RomanticFriction);
    }
    advisories.retain(|k| k.eligible(context));

    let raw_score = tally.raw;
    let score = clamp_score(raw_score, context);

    tracing::debug!(
        raw_score,
        score,
        context = context.name(),
        terms = tally.terms.len(),
        "scored compatibility"
    );

    CompatibilityResult {
        score,
        raw_score,
        grade: Grade::from_score(score),
        context,
        sub_scores: sub_scores(score, context),
        day_master_relation,
        day_master_union,
        year_branch_relation: branch_relation(ya, yb),
        day_branch_relation: branch_relation(da, db),
        terms: tally.terms,
        advisories,
        pillars_a: a.pillars,
        pillars_b: b.pillars,
    }
}

impl From<&ChartReading> for CompatibilityParty {
    fn from(chart: &ChartReading) -> Self {
        Self {
            pillars: chart.pillars,
            dominant: chart.primary_dominant(),
        }
    }
}

/// Score two synthesized charts.
pub fn compatibility(
    a: &ChartReading,
    b: &ChartReading,
    context: RelationshipContext,
) -> CompatibilityResult {
    score_compatibility(&a.into(), &b.into(), context)
}
