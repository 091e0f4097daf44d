use ganzhi_analysis::{
    BirthInput, ChartReading, CompatibilityResult, DailyFortuneResult, MajorFortune,
    RelationshipContext, chart_from_instant,
};
use ganzhi_base::{PillarBreakdown, pillar_breakdown};
use ganzhi_time::{
    CITIES, City, CityResolution, CivilDate, LunarDate, NormalizeRequest, NormalizedInstant,
    SolarTermEvent, normalize, resolve_city_or,
};

use crate::error::GanzhiError;
use crate::global::config;

/// Resolve the birth city against the configured default location.
fn locate(input: &BirthInput) -> CityResolution {
    let fallback = config().default_location();
    let resolution = resolve_city_or(&input.city, &fallback);
    if !resolution.resolved && !input.city.trim().is_empty() {
        tracing::warn!(
            city = %input.city,
            fallback = %resolution.location.name,
            "unknown city, using default location"
        );
    }
    resolution
}

fn normalize_with(
    input: &BirthInput,
    resolution: &CityResolution,
) -> Result<NormalizedInstant, GanzhiError> {
    let req = NormalizeRequest {
        year: input.year,
        month: input.month,
        day: input.day,
        hour: input.hour,
        minute: input.minute,
        is_lunar: input.is_lunar,
        is_leap_month: input.is_leap_month,
        location: resolution.location.clone(),
    };
    Ok(normalize(&req)?)
}

/// Normalize a birth moment to corrected local time and a UT instant.
pub fn normalize_birth(input: &BirthInput) -> Result<NormalizedInstant, GanzhiError> {
    normalize_with(input, &locate(input))
}

/// Four pillars plus the intermediate values they were derived from.
pub fn pillars(input: &BirthInput) -> Result<PillarBreakdown, GanzhiError> {
    let instant = normalize_birth(input)?;
    Ok(pillar_breakdown(&instant, &config().pillar_config()))
}

/// Full single-chart reading.
pub fn chart(input: &BirthInput) -> Result<ChartReading, GanzhiError> {
    let resolution = locate(input);
    let instant = normalize_with(input, &resolution)?;
    Ok(chart_from_instant(
        input,
        instant,
        resolution.resolved,
        &config().chart_config(),
    ))
}

/// Compatibility of two birth inputs under a relationship context.
pub fn compatibility(
    a: &BirthInput,
    b: &BirthInput,
    context: RelationshipContext,
) -> Result<CompatibilityResult, GanzhiError> {
    let chart_a = chart(a)?;
    let chart_b = chart(b)?;
    Ok(ganzhi_analysis::compatibility(&chart_a, &chart_b, context))
}

/// Ten-pillar major fortune sequence.
pub fn major_fortune(input: &BirthInput) -> Result<MajorFortune, GanzhiError> {
    let reading = chart(input)?;
    Ok(ganzhi_analysis::major_fortune(
        &reading,
        &config().fortune_config(),
    )?)
}

pub fn daily_fortune(
    input: &BirthInput,
    date: CivilDate,
) -> Result<DailyFortuneResult, GanzhiError> {
    let reading = chart(input)?;
    Ok(ganzhi_analysis::daily_fortune(&reading, date)?)
}

/// Daily fortunes for `start..=end`, bounded by the configured window.
pub fn daily_fortune_range(
    input: &BirthInput,
    start: CivilDate,
    end: CivilDate,
) -> Result<Vec<DailyFortuneResult>, GanzhiError> {
    let reading = chart(input)?;
    Ok(ganzhi_analysis::daily_fortune_range(
        &reading,
        start,
        end,
        &config().fortune_config(),
    )?)
}

pub fn lunar_to_solar(date: LunarDate) -> Result<CivilDate, GanzhiError> {
    Ok(ganzhi_time::lunar_to_solar(&date)?)
}

pub fn solar_to_lunar(date: CivilDate) -> Result<LunarDate, GanzhiError> {
    Ok(ganzhi_time::solar_to_lunar(&date)?)
}

/// All 24 solar terms falling in a Gregorian year, in time order.
pub fn solar_terms(year: i32) -> Result<Vec<SolarTermEvent>, GanzhiError> {
    Ok(ganzhi_time::solar_terms_in_year(year)?)
}

/// The static city table.
pub fn cities() -> &'static [City] {
    &CITIES
}
