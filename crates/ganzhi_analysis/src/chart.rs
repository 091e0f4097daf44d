//! Single-chart synthesis: pillars, element balance, strength and useful element.

use ganzhi_base::{
    ALL_POSITIONS, CHART_TOTAL_WEIGHT, Element, ElementScores, FourPillars, PillarPosition,
    TriadKind, complete_triads, is_clash, pillar_breakdown, six_harmony_element,
};
use ganzhi_time::{NormalizedInstant, normalize, resolve_city_or};

use crate::chart_types::{
    BirthInput, BranchFact, BranchFactKind, ChartConfig, ChartReading, Strength,
};
use crate::error::AnalysisError;

/// Support at or above this makes the day master strong.
pub const STRONG_SUPPORT_THRESHOLD: u32 = CHART_TOTAL_WEIGHT / 2;

/// Support for the day master: its own element plus the one generating it.
pub fn support_of(day_master: Element, scores: &ElementScores) -> u32 {
    scores.get(day_master) + scores.get(day_master.generated_by())
}

pub fn strength_of(day_master: Element, scores: &ElementScores) -> Strength {
    if support_of(day_master, scores) >= STRONG_SUPPORT_THRESHOLD {
        Strength::Strong
    } else {
        Strength::Weak
    }
}

/// Lowest-scored candidate; ties go to the earliest.
fn weakest<const N: usize>(candidates: [Element; N], scores: &ElementScores) -> Option<Element> {
    candidates.into_iter().min_by_key(|&e| scores.get(e))
}

/// Element judged most beneficial to the chart.
///
/// A strong day master is drained (what it generates), used (what it
/// controls) or restrained (what controls it); a weak one is fed by its
/// generator or its own element. The least present candidate wins.
pub fn useful_element_of(
    day_master: Element,
    strength: Strength,
    scores: &ElementScores,
) -> Element {
    match strength {
        Strength::Strong => weakest(
            [
                day_master.generates(),
                day_master.controls(),
                day_master.controlled_by(),
            ],
            scores,
        ),
        Strength::Weak => weakest([day_master.generated_by(), day_master], scores),
    }
    .unwrap_or(day_master)
}

/// Clashes and six harmonies between natal pairs, then complete triads.
pub fn branch_facts(pillars: &FourPillars) -> Vec<BranchFact> {
    let mut facts = Vec::new();
    for (i, &pa) in ALL_POSITIONS.iter().enumerate() {
        for &pb in &ALL_POSITIONS[i + 1..] {
            let a = pillars.get(pa).branch;
            let b = pillars.get(pb).branch;
            if is_clash(a, b) {
                facts.push(BranchFact {
                    kind: BranchFactKind::Clash,
                    positions: vec![pa, pb],
                    branches: vec![a, b],
                    element: None,
                });
            } else if let Some(element) = six_harmony_element(a, b) {
                facts.push(BranchFact {
                    kind: BranchFactKind::SixHarmony,
                    positions: vec![pa, pb],
                    branches: vec![a, b],
                    element: Some(element),
                });
            }
        }
    }

    let branches = pillars.branches();
    for triad in complete_triads(&branches) {
        let positions: Vec<PillarPosition> = pillars
            .iter()
            .filter(|(_, p)| triad.contains(p.branch))
            .map(|(pos, _)| pos)
            .collect();
        facts.push(BranchFact {
            kind: match triad.kind {
                TriadKind::Harmony => BranchFactKind::Triad,
                TriadKind::Directional => BranchFactKind::DirectionalTriad,
            },
            positions,
            branches: triad.branches.to_vec(),
            element: Some(triad.element),
        });
    }
    facts
}

/// Synthesize a reading from an already normalized instant.
pub fn chart_from_instant(
    input: &BirthInput,
    instant: NormalizedInstant,
    city_resolved: bool,
    config: &ChartConfig,
) -> ChartReading {
    let breakdown = pillar_breakdown(&instant, &config.pillars);
    let pillars = breakdown.pillars;
    let elements = ElementScores::from_pillars(&pillars);
    let day_master = pillars.day_master();
    let dm_element = day_master.element();
    let support = support_of(dm_element, &elements);
    let strength = strength_of(dm_element, &elements);
    let useful_element = useful_element_of(dm_element, strength, &elements);

    tracing::debug!(
        %pillars,
        day_master = day_master.name(),
        strength = strength.name(),
        useful = useful_element.name(),
        "synthesized chart"
    );

    ChartReading {
        input: input.clone(),
        instant,
        city_resolved,
        solar_year: breakdown.solar_year,
        pillars,
        labels: pillars.labels(),
        elements,
        element_percentages: elements.percentages(),
        day_master,
        day_master_element: dm_element,
        day_master_polarity: day_master.polarity(),
        support,
        strength,
        useful_element,
        dominant: elements.dominant(),
        lacking: elements.lacking(),
        balance: elements.balance(),
        branch_facts: branch_facts(&pillars),
    }
}

/// Resolve the city, normalize the birth moment and build the reading.
///
/// Calendar errors (`InvalidDate`, `UnsupportedEra`) propagate unchanged.
/// An unknown city is not an error; `city_resolved` is false and the
/// configured default location is used.
pub fn chart_for_birth(
    input: &BirthInput,
    config: &ChartConfig,
) -> Result<ChartReading, AnalysisError> {
    let resolution = resolve_city_or(&input.city, &config.default_location);
    let instant = normalize(&input.normalize_request(resolution.location))?;
    Ok(chart_from_instant(input, instant, resolution.resolved, config))
}
