//! Golden single-chart readings.

use ganzhi_analysis::{
    AnalysisError, BirthInput, BranchFactKind, ChartConfig, Gender, Strength, chart_for_birth,
};
use ganzhi_base::{Balance, Element, Polarity, Stem};
use ganzhi_time::{Location, TimeError};

fn reference_config() -> ChartConfig {
    ChartConfig {
        default_location: Location::new("ref", 127.0, 540),
        ..ChartConfig::default()
    }
}

#[test]
fn reference_reading() {
    let input = BirthInput::solar(1990, 1, 1, 0, 0, Gender::Male);
    let r = chart_for_birth(&input, &reference_config()).unwrap();

    assert!(!r.city_resolved);
    assert_eq!(r.instant.offset_minutes, -32);
    assert_eq!(r.pillars.to_string(), "己巳 丙子 乙丑 戊子");
    assert_eq!(r.labels[2].hangul, "을축");
    assert_eq!(r.day_master, Stem::Yi);
    assert_eq!(r.day_master_element, Element::Wood);
    assert_eq!(r.day_master_polarity, Polarity::Yin);
    assert_eq!(r.elements.total(), 12);
    let shares: Vec<f64> = r.element_percentages.iter().map(|&(_, p)| p).collect();
    let expected = [2.0, 3.0, 5.0, 0.0, 2.0].map(|w| w * 100.0 / 12.0);
    for (got, want) in shares.iter().zip(expected) {
        assert!((got - want).abs() < 1e-9, "{got} vs {want}");
    }
    assert_eq!(r.dominant, vec![Element::Earth]);
    assert_eq!(r.lacking, vec![Element::Metal]);
    assert_eq!(r.balance, Balance::Imbalanced);
    assert_eq!(r.support, 4);
    assert_eq!(r.strength, Strength::Weak);
    assert_eq!(r.useful_element, Element::Water);
    assert_eq!(r.solar_year, 1989);
    assert_eq!(r.branch_facts.len(), 2);
    assert!(r.branch_facts.iter().all(|f| f.kind == BranchFactKind::SixHarmony));
}

#[test]
fn known_city_resolves() {
    let input = BirthInput::solar(1990, 1, 1, 0, 0, Gender::Female).with_city("Seoul");
    let r = chart_for_birth(&input, &ChartConfig::default()).unwrap();
    assert!(r.city_resolved);
    assert_eq!(r.instant.location.name, "Seoul");
    // 126.98°E on the 135° meridian: −32.08 min, rounded to −32.
    assert_eq!(r.instant.offset_minutes, -32);
}

#[test]
fn unknown_city_falls_back() {
    let input = BirthInput::solar(1990, 1, 1, 0, 0, Gender::Male).with_city("Atlantis");
    let r = chart_for_birth(&input, &ChartConfig::default()).unwrap();
    assert!(!r.city_resolved);
    assert_eq!(r.instant.location.name, "Seoul");
}

#[test]
fn lunar_input_matches_solar_equivalent() {
    // Lunar 1989-12-05 = solar 1990-01-01.
    let lunar = BirthInput::solar(1989, 12, 5, 0, 0, Gender::Male).lunar(false);
    let solar = BirthInput::solar(1990, 1, 1, 0, 0, Gender::Male);
    let a = chart_for_birth(&lunar, &reference_config()).unwrap();
    let b = chart_for_birth(&solar, &reference_config()).unwrap();
    assert_eq!(a.pillars, b.pillars);
    assert_eq!(a.instant.clock, b.instant.clock);
}

#[test]
fn calendar_errors_propagate() {
    let bad_day = BirthInput::solar(2023, 4, 31, 12, 0, Gender::Male);
    assert!(matches!(
        chart_for_birth(&bad_day, &ChartConfig::default()),
        Err(AnalysisError::Time(TimeError::InvalidDate(_)))
    ));
    let too_early = BirthInput::solar(1850, 4, 1, 12, 0, Gender::Male);
    assert!(matches!(
        chart_for_birth(&too_early, &ChartConfig::default()),
        Err(AnalysisError::Time(TimeError::UnsupportedEra { .. }))
    ));
}

#[test]
fn deterministic_and_serializable() {
    let input = BirthInput::solar(1984, 7, 14, 15, 30, Gender::Female).with_city("Busan");
    let a = chart_for_birth(&input, &ChartConfig::default()).unwrap();
    let b = chart_for_birth(&input, &ChartConfig::default()).unwrap();
    assert_eq!(a, b);
    let json = serde_json::to_string(&a).unwrap();
    assert!(json.contains("\"day_master\""));
    assert!(json.contains("\"useful_element\""));
}

#[test]
fn birth_input_deserializes_with_defaults() {
    let input: BirthInput = serde_json::from_str(
        r#"{"year":1990,"month":1,"day":1,"hour":0,"minute":0,"gender":"male"}"#,
    )
    .unwrap();
    assert_eq!(input, BirthInput::solar(1990, 1, 1, 0, 0, Gender::Male));
}
