//! The 24 solar terms and bisection search for their instants.
//!
//! A solar term begins when the Sun's apparent longitude reaches a multiple
//! of 15 deg. The twelve sectional terms (odd multiples of 15 deg counted
//! from 315 deg: 315, 345, 15, ... 285) open the twelve sexagenary months;
//! Start of Spring (315 deg) opens the sexagenary year.

use serde::Serialize;

use crate::civil_time::CivilDateTime;
use crate::error::TimeError;
use crate::sun::{normalize_360, sun_apparent_longitude_deg};

/// The 24 solar terms, starting from Start of Spring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SolarTerm {
    Lichun,
    Yushui,
    Jingzhe,
    Chunfen,
    Qingming,
    Guyu,
    Lixia,
    Xiaoman,
    Mangzhong,
    Xiazhi,
    Xiaoshu,
    Dashu,
    Liqiu,
    Chushu,
    Bailu,
    Qiufen,
    Hanlu,
    Shuangjiang,
    Lidong,
    Xiaoxue,
    Daxue,
    Dongzhi,
    Xiaohan,
    Dahan,
}

/// All 24 solar terms in order (index 0 = Lichun at 315 deg).
pub const ALL_SOLAR_TERMS: [SolarTerm; 24] = [
    SolarTerm::Lichun,
    SolarTerm::Yushui,
    SolarTerm::Jingzhe,
    SolarTerm::Chunfen,
    SolarTerm::Qingming,
    SolarTerm::Guyu,
    SolarTerm::Lixia,
    SolarTerm::Xiaoman,
    SolarTerm::Mangzhong,
    SolarTerm::Xiazhi,
    SolarTerm::Xiaoshu,
    SolarTerm::Dashu,
    SolarTerm::Liqiu,
    SolarTerm::Chushu,
    SolarTerm::Bailu,
    SolarTerm::Qiufen,
    SolarTerm::Hanlu,
    SolarTerm::Shuangjiang,
    SolarTerm::Lidong,
    SolarTerm::Xiaoxue,
    SolarTerm::Daxue,
    SolarTerm::Dongzhi,
    SolarTerm::Xiaohan,
    SolarTerm::Dahan,
];

/// Longitude at which Start of Spring begins.
pub const LICHUN_LONGITUDE_DEG: f64 = 315.0;

impl SolarTerm {
    /// 0-based index (Lichun=0 .. Dahan=23).
    pub const fn index(self) -> u8 {
        match self {
            Self::Lichun => 0,
            Self::Yushui => 1,
            Self::Jingzhe => 2,
            Self::Chunfen => 3,
            Self::Qingming => 4,
            Self::Guyu => 5,
            Self::Lixia => 6,
            Self::Xiaoman => 7,
            Self::Mangzhong => 8,
            Self::Xiazhi => 9,
            Self::Xiaoshu => 10,
            Self::Dashu => 11,
            Self::Liqiu => 12,
            Self::Chushu => 13,
            Self::Bailu => 14,
            Self::Qiufen => 15,
            Self::Hanlu => 16,
            Self::Shuangjiang => 17,
            Self::Lidong => 18,
            Self::Xiaoxue => 19,
            Self::Daxue => 20,
            Self::Dongzhi => 21,
            Self::Xiaohan => 22,
            Self::Dahan => 23,
        }
    }

    /// Pinyin name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lichun => "Lichun",
            Self::Yushui => "Yushui",
            Self::Jingzhe => "Jingzhe",
            Self::Chunfen => "Chunfen",
            Self::Qingming => "Qingming",
            Self::Guyu => "Guyu",
            Self::Lixia => "Lixia",
            Self::Xiaoman => "Xiaoman",
            Self::Mangzhong => "Mangzhong",
            Self::Xiazhi => "Xiazhi",
            Self::Xiaoshu => "Xiaoshu",
            Self::Dashu => "Dashu",
            Self::Liqiu => "Liqiu",
            Self::Chushu => "Chushu",
            Self::Bailu => "Bailu",
            Self::Qiufen => "Qiufen",
            Self::Hanlu => "Hanlu",
            Self::Shuangjiang => "Shuangjiang",
            Self::Lidong => "Lidong",
            Self::Xiaoxue => "Xiaoxue",
            Self::Daxue => "Daxue",
            Self::Dongzhi => "Dongzhi",
            Self::Xiaohan => "Xiaohan",
            Self::Dahan => "Dahan",
        }
    }

    /// English name.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Lichun => "Start of Spring",
            Self::Yushui => "Rain Water",
            Self::Jingzhe => "Awakening of Insects",
            Self::Chunfen => "Spring Equinox",
            Self::Qingming => "Clear and Bright",
            Self::Guyu => "Grain Rain",
            Self::Lixia => "Start of Summer",
            Self::Xiaoman => "Grain Buds",
            Self::Mangzhong => "Grain in Ear",
            Self::Xiazhi => "Summer Solstice",
            Self::Xiaoshu => "Minor Heat",
            Self::Dashu => "Major Heat",
            Self::Liqiu => "Start of Autumn",
            Self::Chushu => "End of Heat",
            Self::Bailu => "White Dew",
            Self::Qiufen => "Autumn Equinox",
            Self::Hanlu => "Cold Dew",
            Self::Shuangjiang => "Frost's Descent",
            Self::Lidong => "Start of Winter",
            Self::Xiaoxue => "Minor Snow",
            Self::Daxue => "Major Snow",
            Self::Dongzhi => "Winter Solstice",
            Self::Xiaohan => "Minor Cold",
            Self::Dahan => "Major Cold",
        }
    }

    /// Sun longitude at which the term begins.
    pub const fn longitude_deg(self) -> f64 {
        ((LICHUN_LONGITUDE_DEG as u32 + 15 * self.index() as u32) % 360) as f64
    }

    /// Sectional terms (jie) open a sexagenary month.
    pub const fn is_sectional(self) -> bool {
        self.index() % 2 == 0
    }

    /// Term whose 15-degree segment contains `lon_deg`.
    pub fn from_longitude(lon_deg: f64) -> SolarTerm {
        let rel = normalize_360(lon_deg - LICHUN_LONGITUDE_DEG);
        let idx = ((rel / 15.0).floor() as usize).min(23);
        ALL_SOLAR_TERMS[idx]
    }
}

/// A solar term and the instant it begins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolarTermEvent {
    pub term: SolarTerm,
    /// Julian Date (UT) of the instant.
    pub jd_ut: f64,
    /// The instant in UTC, to the nearest minute.
    pub utc: CivilDateTime,
}

/// Which terms a search considers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermFilter {
    /// All 24 terms (15-degree spacing).
    All,
    /// Only the 12 month-opening terms (30-degree spacing).
    Sectional,
}

impl TermFilter {
    const fn spacing_deg(self) -> f64 {
        match self {
            Self::All => 15.0,
            Self::Sectional => 30.0,
        }
    }

    /// Longitude offset of the first boundary relative to 0 deg.
    const fn phase_deg(self) -> f64 {
        match self {
            Self::All => 0.0,
            Self::Sectional => 15.0,
        }
    }
}

/// Bisection parameters for term searches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TermSearchConfig {
    /// Slowest plausible solar motion, deg/day, used to bracket the root.
    pub min_speed_deg_per_day: f64,
    /// Stop when the bracket is narrower than this many days.
    pub tolerance_days: f64,
    pub max_iterations: u32,
}

impl Default for TermSearchConfig {
    fn default() -> Self {
        Self {
            min_speed_deg_per_day: 0.95,
            tolerance_days: 1e-6,
            max_iterations: 64,
        }
    }
}

/// Signed angular distance `lon - target` wrapped to [-180, 180).
fn signed_gap(jd_ut: f64, target_deg: f64) -> f64 {
    normalize_360(sun_apparent_longitude_deg(jd_ut) - target_deg + 180.0) - 180.0
}

/// Find the instant in `[lo, hi]` at which the Sun reaches `target_deg`.
pub fn find_longitude_crossing(
    target_deg: f64,
    mut lo: f64,
    mut hi: f64,
    config: &TermSearchConfig,
) -> Result<f64, TimeError> {
    if signed_gap(lo, target_deg) > 0.0 || signed_gap(hi, target_deg) < 0.0 {
        return Err(TimeError::NoConvergence("solar longitude not bracketed"));
    }
    for _ in 0..config.max_iterations {
        if hi - lo < config.tolerance_days {
            break;
        }
        let mid = 0.5 * (lo + hi);
        if signed_gap(mid, target_deg) < 0.0 {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    Ok(0.5 * (lo + hi))
}

fn event_at(target_deg: f64, jd_ut: f64) -> SolarTermEvent {
    SolarTermEvent {
        term: SolarTerm::from_longitude(target_deg + 1e-6),
        jd_ut,
        utc: CivilDateTime::from_jd(jd_ut),
    }
}

/// First term boundary strictly after `jd_ut`.
pub fn next_solar_term(jd_ut: f64, filter: TermFilter) -> Result<SolarTermEvent, TimeError> {
    next_solar_term_with(jd_ut, filter, &TermSearchConfig::default())
}

pub fn next_solar_term_with(
    jd_ut: f64,
    filter: TermFilter,
    config: &TermSearchConfig,
) -> Result<SolarTermEvent, TimeError> {
    let lon = sun_apparent_longitude_deg(jd_ut);
    let spacing = filter.spacing_deg();
    let rel = (lon - filter.phase_deg()).rem_euclid(spacing);
    let ahead = spacing - rel;
    let target = normalize_360(lon + ahead);
    let hi = jd_ut + ahead / config.min_speed_deg_per_day + 1.0;
    let jd = find_longitude_crossing(target, jd_ut, hi, config)?;
    Ok(event_at(target, jd))
}

/// Last term boundary at or before `jd_ut`.
pub fn prev_solar_term(jd_ut: f64, filter: TermFilter) -> Result<SolarTermEvent, TimeError> {
    prev_solar_term_with(jd_ut, filter, &TermSearchConfig::default())
}

pub fn prev_solar_term_with(
    jd_ut: f64,
    filter: TermFilter,
    config: &TermSearchConfig,
) -> Result<SolarTermEvent, TimeError> {
    let lon = sun_apparent_longitude_deg(jd_ut);
    let behind = (lon - filter.phase_deg()).rem_euclid(filter.spacing_deg());
    let target = normalize_360(lon - behind);
    let lo = jd_ut - behind / config.min_speed_deg_per_day - 1.0;
    let jd = find_longitude_crossing(target, lo, jd_ut, config)?;
    Ok(event_at(target, jd))
}

/// All 24 term instants that fall within the given UTC calendar year.
pub fn solar_terms_in_year(year: i32) -> Result<Vec<SolarTermEvent>, TimeError> {
    if !(crate::MIN_SUPPORTED_YEAR..=crate::MAX_SUPPORTED_YEAR).contains(&year) {
        return Err(TimeError::era(year));
    }
    let start = CivilDateTime::new(year, 1, 1, 0, 0).to_jd();
    let end = CivilDateTime::new(year + 1, 1, 1, 0, 0).to_jd();
    let mut events = Vec::with_capacity(24);
    let mut cursor = start;
    loop {
        let event = next_solar_term(cursor, TermFilter::All)?;
        if event.jd_ut >= end {
            break;
        }
        cursor = event.jd_ut + 1e-4;
        events.push(event);
    }
    tracing::debug!(year, count = events.len(), "solar terms enumerated");
    Ok(events)
}
