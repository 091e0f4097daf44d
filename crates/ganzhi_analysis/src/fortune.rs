//! Major (ten-year) and daily fortune generation.
//!
//! Both generators are pure: the same chart and query always reproduce the
//! same sequence, so callers may cache freely.

use ganzhi_base::{
    ALL_POSITIONS, Element, FourPillars, Pillar, Polarity, RelationFact, Stem, branch_relation,
    day_pillar_for_date, is_clash, is_six_harmony, relate,
};
use ganzhi_time::{CivilDate, TermFilter, check_era, next_solar_term, prev_solar_term};

use crate::chart_types::{ChartReading, Gender};
use crate::error::AnalysisError;
use crate::fortune_types::{
    DailyFortuneResult, FortuneAnalysis, FortuneConfig, FortuneDirection, FortuneGrade,
    MAJOR_FORTUNE_COUNT, MAX_DAILY_WINDOW_DAYS, MajorFortune, MajorFortunePillar,
    MAX_START_AGE, NatalBranchRelation, YEARS_PER_MAJOR_FORTUNE,
};

const BASE_SCORE: i32 = 60;
const DAY_BRANCH_CLASH_PENALTY: i32 = -10;
const NATAL_HARMONY_BONUS: i32 = 5;
const DAILY_HARMONY_BONUS: i32 = 8;
const DAILY_TRIAD_BONUS: i32 = 5;
const DAILY_CLASH_PENALTY: i32 = -10;

/// Forward for yang year stem with male, or yin year stem with female.
pub fn fortune_direction(year_stem: Stem, gender: Gender) -> FortuneDirection {
    let yang = year_stem.polarity() == Polarity::Yang;
    match (yang, gender) {
        (true, Gender::Male) | (false, Gender::Female) => FortuneDirection::Forward,
        _ => FortuneDirection::Reverse,
    }
}

/// Score contribution of a candidate element measured against the useful element.
pub fn element_delta(candidate: Element, useful: Element) -> i32 {
    match relate(candidate, useful) {
        RelationFact::Same => 20,
        RelationFact::Generates => 12,
        RelationFact::GeneratedBy => 6,
        RelationFact::ControlledBy => -8,
        RelationFact::Controls => -15,
        _ => 0,
    }
}

/// Start age from the day distance to the boundary term: rounded, within
/// `1..=MAX_START_AGE`.
pub fn start_age_from_days(days: f64, divisor: f64) -> i32 {
    let years = (days / divisor).round();
    if years.is_nan() {
        return 1;
    }
    years.clamp(1.0, MAX_START_AGE as f64) as i32
}

fn clamp_fortune(score: i32) -> i32 {
    score.clamp(0, 100)
}

/// Score one major-fortune pillar against the natal chart.
pub fn analyze_pillar(pillar: Pillar, useful: Element, natal: &FourPillars) -> FortuneAnalysis {
    let stem_element = pillar.stem.element();
    let branch_element = pillar.branch.element();
    let clashes_day_branch = is_clash(pillar.branch, natal.day.branch);
    let harmonizes_natal = natal
        .branches()
        .iter()
        .any(|&b| is_six_harmony(pillar.branch, b));

    let mut score = BASE_SCORE
        + element_delta(stem_element, useful)
        + element_delta(branch_element, useful) / 2;
    if clashes_day_branch {
        score += DAY_BRANCH_CLASH_PENALTY;
    }
    if harmonizes_natal {
        score += NATAL_HARMONY_BONUS;
    }
    let score = clamp_fortune(score);

    let stem_relation = relate(stem_element, useful);
    FortuneAnalysis {
        stem_relation,
        branch_relation: relate(branch_element, useful),
        clashes_day_branch,
        harmonizes_natal,
        favorable: stem_relation.is_supportive(),
        score,
        grade: FortuneGrade::from_score(score),
    }
}

/// Ten pillars walked from the month pillar.
///
/// The i-th pillar (1-based) is `month_pillar.offset(±i)` and covers ages
/// `start_age + 10(i-1) ..= start_age + 10(i-1) + 9`.
pub fn major_fortune_pillars(
    month_pillar: Pillar,
    direction: FortuneDirection,
    start_age: i32,
    birth_year: i32,
    useful: Element,
    natal: &FourPillars,
) -> Vec<MajorFortunePillar> {
    (1..=MAJOR_FORTUNE_COUNT as i32)
        .map(|i| {
            let pillar = month_pillar.offset(direction.step() * i as i64);
            let first_age = start_age.saturating_add(YEARS_PER_MAJOR_FORTUNE * (i - 1));
            let last_age = first_age.saturating_add(YEARS_PER_MAJOR_FORTUNE - 1);
            MajorFortunePillar {
                order: i as u32,
                start_age: first_age,
                end_age: last_age,
                start_year: birth_year.saturating_add(first_age),
                end_year: birth_year.saturating_add(last_age),
                pillar,
                label: pillar.label(),
                analysis: analyze_pillar(pillar, useful, natal),
            }
        })
        .collect()
}

/// Major-fortune sequence of a chart.
///
/// The start age is measured from the birth instant to the next sectional
/// term (forward) or the previous one (reverse). Fails with `InvalidConfig`
/// when the divisor is not finite and positive.
pub fn major_fortune(
    chart: &ChartReading,
    config: &FortuneConfig,
) -> Result<MajorFortune, AnalysisError> {
    config.validate()?;
    let direction = fortune_direction(chart.pillars.year.stem, chart.input.gender);
    let jd = chart.instant.jd_ut;
    let boundary_term = match direction {
        FortuneDirection::Forward => next_solar_term(jd, TermFilter::Sectional)?,
        FortuneDirection::Reverse => prev_solar_term(jd, TermFilter::Sectional)?,
    };
    let days_to_term = (boundary_term.jd_ut - jd).abs();
    let start_age = start_age_from_days(days_to_term, config.start_age_divisor);

    tracing::debug!(
        direction = direction.name(),
        term = boundary_term.term.name(),
        days_to_term,
        start_age,
        "major fortune start"
    );

    let pillars = major_fortune_pillars(
        chart.pillars.month,
        direction,
        start_age,
        chart.instant.clock.year,
        chart.useful_element,
        &chart.pillars,
    );

    Ok(MajorFortune {
        direction,
        start_age,
        boundary_term,
        days_to_term,
        pillars,
    })
}

/// The window covering a calendar year, if any.
pub fn current_major_fortune(fortune: &MajorFortune, year: i32) -> Option<&MajorFortunePillar> {
    fortune
        .pillars
        .iter()
        .find(|p| (p.start_year..=p.end_year).contains(&year))
}

/// Fortune for one civil day.
pub fn daily_fortune(
    chart: &ChartReading,
    date: CivilDate,
) -> Result<DailyFortuneResult, AnalysisError> {
    check_era(date.year)?;
    date.validate()?;

    let pillar = day_pillar_for_date(date.year, date.month, date.day);
    let useful = chart.useful_element;
    let stem_relation = relate(pillar.stem.element(), useful);

    let mut score = BASE_SCORE + element_delta(pillar.stem.element(), useful);
    let mut branch_relations = Vec::with_capacity(ALL_POSITIONS.len());
    for position in ALL_POSITIONS {
        let natal = chart.pillars.get(position).branch;
        let relation = branch_relation(pillar.branch, natal);
        score += match relation {
            RelationFact::SixHarmony => DAILY_HARMONY_BONUS,
            RelationFact::TriadMember => DAILY_TRIAD_BONUS,
            RelationFact::Clash => DAILY_CLASH_PENALTY,
            _ => 0,
        };
        branch_relations.push(NatalBranchRelation {
            position,
            natal,
            relation,
        });
    }
    let score = clamp_fortune(score);
    let supportive_branches = branch_relations
        .iter()
        .filter(|r| r.relation.is_supportive())
        .count();

    Ok(DailyFortuneResult {
        date,
        pillar,
        label: pillar.label(),
        branch_relations,
        stem_relation,
        supportive_branches,
        score,
        grade: FortuneGrade::from_score(score),
    })
}

/// Daily fortunes for the inclusive range `start..=end`.
///
/// Fails with `OutOfRangeQuery` when the range is reversed or longer than
/// the configured window (never more than 7 days).
pub fn daily_fortune_range(
    chart: &ChartReading,
    start: CivilDate,
    end: CivilDate,
    config: &FortuneConfig,
) -> Result<Vec<DailyFortuneResult>, AnalysisError> {
    start.validate()?;
    end.validate()?;
    let max_days = config.daily_window_days.min(MAX_DAILY_WINDOW_DAYS);
    let requested_days = start.days_until(&end) + 1;
    if requested_days < 1 || requested_days > max_days as i64 {
        return Err(AnalysisError::OutOfRangeQuery {
            requested_days,
            max_days,
        });
    }
    (0..requested_days)
        .map(|k| daily_fortune(chart, start.add_days(k)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ganzhi_base::{ALL_ELEMENTS, ALL_STEMS};

    #[test]
    fn element_deltas() {
        assert_eq!(element_delta(Element::Water, Element::Water), 20);
        assert_eq!(element_delta(Element::Metal, Element::Water), 12);
        assert_eq!(element_delta(Element::Wood, Element::Water), 6);
        assert_eq!(element_delta(Element::Fire, Element::Water), -8);
        assert_eq!(element_delta(Element::Earth, Element::Water), -15);
    }

    #[test]
    fn direction_table() {
        for s in ALL_STEMS {
            let yang = s.index() % 2 == 0;
            let male = fortune_direction(s, Gender::Male);
            let female = fortune_direction(s, Gender::Female);
            if yang {
                assert_eq!(male, FortuneDirection::Forward);
                assert_eq!(female, FortuneDirection::Reverse);
            } else {
                assert_eq!(male, FortuneDirection::Reverse);
                assert_eq!(female, FortuneDirection::Forward);
            }
        }
    }

    #[test]
    fn start_age_rounding() {
        assert_eq!(start_age_from_days(24.49, 3.0), 8);
        assert_eq!(start_age_from_days(25.6, 3.0), 9);
        assert_eq!(start_age_from_days(0.4, 3.0), 1);
        assert_eq!(start_age_from_days(29.9, 3.0), 10);
        assert_eq!(start_age_from_days(24.49, 0.0), MAX_START_AGE);
        assert_eq!(start_age_from_days(24.49, 1e-300), MAX_START_AGE);
        assert_eq!(start_age_from_days(0.0, 0.0), 1);
    }

    #[test]
    fn pillars_walk_from_month() {
        let natal = FourPillars {
            year: Pillar::from_cycle_index(5),
            month: Pillar::from_cycle_index(12),
            day: Pillar::from_cycle_index(1),
            hour: Pillar::from_cycle_index(24),
        };
        let seq = major_fortune_pillars(
            natal.month,
            FortuneDirection::Reverse,
            8,
            1990,
            Element::Water,
            &natal,
        );
        assert_eq!(seq.len(), 10);
        assert_eq!(seq[0].pillar.hanzi(), "乙亥");
        assert_eq!(seq[9].pillar.hanzi(), "丙寅");
        assert_eq!((seq[0].start_age, seq[0].end_age), (8, 17));
        assert_eq!((seq[1].start_year, seq[1].end_year), (2008, 2017));
        assert_eq!(seq[0].analysis.score, 76);
        assert_eq!(seq[0].analysis.grade, FortuneGrade::Good);

        let fwd = major_fortune_pillars(
            natal.month,
            FortuneDirection::Forward,
            3,
            1990,
            Element::Water,
            &natal,
        );
        assert_eq!(fwd[0].pillar.hanzi(), "丁丑");
    }

    #[test]
    fn pillar_scores_clamped() {
        let natal = FourPillars {
            year: Pillar::from_cycle_index(0),
            month: Pillar::from_cycle_index(0),
            day: Pillar::from_cycle_index(0),
            hour: Pillar::from_cycle_index(0),
        };
        for i in 0..60 {
            for useful in ALL_ELEMENTS {
                let a = analyze_pillar(Pillar::from_cycle_index(i), useful, &natal);
                assert!((0..=100).contains(&a.score));
            }
        }
    }
}
