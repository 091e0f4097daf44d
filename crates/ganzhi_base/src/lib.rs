//! Sexagenary symbols and pillar arithmetic built on normalized birth moments.
//!
//! This crate provides:
//! - The 10 stems, 12 branches and 5 elements as closed enumerations
//! - The 60-term cycle and four-pillar computation
//! - Five-element weight vectors and balance classification
//! - Element-cycle relations and branch combination tables
//!
//! Every table is static data; every function is pure.

pub mod branch;
pub mod calculator;
pub mod combination;
pub mod element;
pub mod element_score;
pub mod pillar;
pub mod relation;
pub mod stem;

pub use branch::{ALL_BRANCHES, Branch};
pub use calculator::{
    LateZiRule, PillarBreakdown, PillarConfig, day_pillar_for_date, day_pillar_for_day_number,
    four_pillars, hour_pillar, month_offset, month_pillar, pillar_breakdown, solar_year,
    year_pillar_for_solar_year,
};
pub use combination::{
    CLASHES, DIRECTIONAL_TRIADS, SIX_HARMONIES, STEM_COMBINATIONS, TRIADS, Triad, TriadKind,
    clash_partner, complete_triads, is_clash, is_six_harmony, shares_triad,
    six_harmony_element, six_harmony_partner, stem_combination, triad_of,
};
pub use element::{ALL_ELEMENTS, Element, Polarity};
pub use element_score::{
    BALANCE_SPREAD_LIMIT, BRANCH_WEIGHT, Balance, CHART_TOTAL_WEIGHT, ElementScores, STEM_WEIGHT,
};
pub use pillar::{
    ALL_POSITIONS, CYCLE_LENGTH, FourPillars, Pillar, PillarLabel, PillarPosition,
};
pub use relation::{RelationFact, branch_relation, relate, relate_both_ways};
pub use stem::{ALL_STEMS, Stem};
