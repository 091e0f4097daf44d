//! Integration tests for the ganzhi_rs convenience API.

use std::sync::Once;

use ganzhi_rs::*;

static INIT: Once = Once::new();

fn ensure_init() {
    INIT.call_once(|| {
        init(EngineConfig::default()).expect("engine init");
    });
}

fn reference_input() -> BirthInput {
    BirthInput::solar(1990, 1, 1, 0, 0, Gender::Male).with_city("Seoul")
}

#[test]
fn is_initialized_after_init() {
    ensure_init();
    assert!(is_initialized());
    assert_eq!(
        init(EngineConfig::default()),
        Err(GanzhiError::AlreadyInitialized)
    );
}

#[test]
fn pillars_reference_chart() {
    ensure_init();
    let b = pillars(&reference_input()).unwrap();
    assert_eq!(b.pillars.to_string(), "己巳 丙子 乙丑 戊子");
    assert_eq!(b.solar_year, 1989);
    assert!(b.late_zi);
}

#[test]
fn chart_reference_reading() {
    ensure_init();
    let r = chart(&reference_input()).unwrap();
    assert!(r.city_resolved);
    assert_eq!(r.day_master, Stem::Yi);
    assert_eq!(r.strength, Strength::Weak);
    assert_eq!(r.useful_element, Element::Water);
}

#[test]
fn unknown_city_falls_back() {
    ensure_init();
    let r = chart(&reference_input().with_city("Atlantis")).unwrap();
    assert!(!r.city_resolved);
    assert_eq!(r.instant.location.name, "Seoul");
}

#[test]
fn calendar_errors_propagate() {
    ensure_init();
    let bad = BirthInput::solar(2023, 2, 29, 12, 0, Gender::Female);
    assert!(matches!(chart(&bad), Err(GanzhiError::Time(_))));
    let early = BirthInput::solar(1850, 5, 1, 12, 0, Gender::Female);
    assert!(matches!(pillars(&early), Err(GanzhiError::Time(_))));
}

#[test]
fn fortune_and_daily() {
    ensure_init();
    let mf = major_fortune(&reference_input()).unwrap();
    assert_eq!(mf.start_age, 8);
    assert_eq!(mf.pillars.len(), 10);
    assert_eq!(current_major_fortune(&mf, 2000).unwrap().order, 1);

    let d = daily_fortune(&reference_input(), CivilDate::new(2024, 2, 10)).unwrap();
    assert_eq!(d.pillar.hanzi(), "甲辰");

    let week = daily_fortune_range(
        &reference_input(),
        CivilDate::new(2024, 2, 10),
        CivilDate::new(2024, 2, 16),
    )
    .unwrap();
    assert_eq!(week.len(), 7);
    assert!(matches!(
        daily_fortune_range(
            &reference_input(),
            CivilDate::new(2024, 2, 10),
            CivilDate::new(2024, 2, 20),
        ),
        Err(GanzhiError::Analysis(_))
    ));
}

#[test]
fn compatibility_is_symmetric_in_range() {
    ensure_init();
    let other = BirthInput::solar(1992, 8, 21, 14, 5, Gender::Female).with_city("Busan");
    let r = compatibility(&reference_input(), &other, RelationshipContext::Romantic).unwrap();
    assert!((25..=100).contains(&r.score));
    assert_eq!(r.sub_scores.len(), 4);
}

#[test]
fn calendar_helpers() {
    let solar = lunar_to_solar(LunarDate::new(1989, 12, 5, false)).unwrap();
    assert_eq!(solar, CivilDate::new(1990, 1, 1));
    assert_eq!(
        solar_to_lunar(solar).unwrap(),
        LunarDate::new(1989, 12, 5, false)
    );
    let terms = solar_terms(2024).unwrap();
    assert_eq!(terms.len(), 24);
    assert!(cities().iter().any(|c| c.name == "Seoul"));
}
