//! Four-pillar computation from a normalized birth moment.
//!
//! Year and month pillars follow the sun: the year turns at Start of Spring
//! (apparent longitude 315 deg) and each month opens at a sectional term,
//! 30 deg apart. Day and hour pillars follow the corrected local clock.
//!
//! Reference anchors:
//! - 1984 (solar year) = Jia-Zi, so year index = `(year - 4) mod 60`
//! - JDN 2433191 (1949-10-01) = Jia-Zi, so day index = `(JDN + 49) mod 60`

use serde::{Deserialize, Serialize};

use ganzhi_time::{
    CivilDate, LICHUN_LONGITUDE_DEG, NormalizedInstant, day_number, normalize_360,
    sun_apparent_longitude_deg,
};

use crate::branch::Branch;
use crate::pillar::{FourPillars, Pillar};
use crate::stem::Stem;

/// Added to a Julian Day Number to get its day-cycle index.
const DAY_CYCLE_SHIFT: i64 = 49;

/// Subtracted from a solar year to get its year-cycle index.
const YEAR_CYCLE_SHIFT: i64 = 4;

/// Degrees of solar longitude per pillar month.
const DEGREES_PER_MONTH: f64 = 30.0;

/// Branch of the first month of the solar year (Yin).
const FIRST_MONTH_BRANCH: u8 = 2;

/// How the 23:00–24:00 hour is attributed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LateZiRule {
    /// Day pillar stays on the civil date; the Zi hour takes the next day's stem.
    #[default]
    NextDayStem,
    /// Day pillar and hour stem both stay on the civil date.
    SameDay,
    /// The day pillar itself advances at 23:00.
    NextDay,
}

impl LateZiRule {
    pub const fn name(self) -> &'static str {
        match self {
            Self::NextDayStem => "next_day_stem",
            Self::SameDay => "same_day",
            Self::NextDay => "next_day",
        }
    }
}

/// Knobs for pillar computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PillarConfig {
    pub late_zi: LateZiRule,
}

/// Four pillars plus the intermediate values that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PillarBreakdown {
    pub pillars: FourPillars,
    /// Year whose Start of Spring most recently preceded the birth.
    pub solar_year: i32,
    /// Apparent solar longitude at the birth instant, degrees.
    pub sun_longitude_deg: f64,
    /// Pillar month counted from the Yin month (0..12).
    pub month_offset: u8,
    /// Civil date the day pillar was taken from.
    pub day_date: CivilDate,
    /// Birth fell in the 23:00 hour.
    pub late_zi: bool,
}

/// Year pillar of a solar year (Start of Spring to Start of Spring).
pub const fn year_pillar_for_solar_year(solar_year: i32) -> Pillar {
    Pillar::from_cycle_index(solar_year as i64 - YEAR_CYCLE_SHIFT)
}

/// Day pillar of a Julian Day Number.
pub const fn day_pillar_for_day_number(jdn: i64) -> Pillar {
    Pillar::from_cycle_index(jdn + DAY_CYCLE_SHIFT)
}

/// Day pillar of a Gregorian date.
pub fn day_pillar_for_date(year: i32, month: u32, day: u32) -> Pillar {
    day_pillar_for_day_number(day_number(year, month, day))
}

/// Solar year for a clock reading and the sun's longitude at that moment.
///
/// January and early February belong to the previous year until the sun
/// reaches 315 deg.
pub fn solar_year(clock_year: i32, clock_month: u32, sun_longitude_deg: f64) -> i32 {
    let lon = normalize_360(sun_longitude_deg);
    if clock_month <= 2 && (180.0..LICHUN_LONGITUDE_DEG).contains(&lon) {
        clock_year - 1
    } else {
        clock_year
    }
}

/// Pillar month (0 = Yin .. 11 = Chou) for a solar longitude.
pub fn month_offset(sun_longitude_deg: f64) -> u8 {
    let since_spring = normalize_360(sun_longitude_deg - LICHUN_LONGITUDE_DEG);
    ((since_spring / DEGREES_PER_MONTH).floor() as u8).min(11)
}

/// Month pillar from the year stem ("five tigers" rule).
pub const fn month_pillar(year_stem: Stem, month_offset: u8) -> Pillar {
    let first_stem = (year_stem.index() % 5) * 2 + 2;
    let stem = Stem::from_index((first_stem + month_offset) as i64);
    let branch = Branch::from_index((FIRST_MONTH_BRANCH + month_offset) as i64);
    Pillar { stem, branch }
}

/// Hour pillar from the day stem ("five rats" rule).
pub const fn hour_pillar(day_stem: Stem, hour_branch: Branch) -> Pillar {
    let stem = Stem::from_index(((day_stem.index() % 5) * 2 + hour_branch.index()) as i64);
    Pillar {
        stem,
        branch: hour_branch,
    }
}

/// Compute the four pillars with their intermediate values.
pub fn pillar_breakdown(instant: &NormalizedInstant, config: &PillarConfig) -> PillarBreakdown {
    let sun_longitude_deg = sun_apparent_longitude_deg(instant.jd_ut);
    let solar_year = solar_year(instant.clock.year, instant.clock.month, sun_longitude_deg);
    let year = year_pillar_for_solar_year(solar_year);

    let month_offset = month_offset(sun_longitude_deg);
    let month = month_pillar(year.stem, month_offset);

    let corrected = instant.corrected;
    let late_zi = corrected.hour == 23;
    let civil = corrected.date();

    let (day_date, hour_stem_day) = match (late_zi, config.late_zi) {
        (true, LateZiRule::NextDay) => {
            let next = civil.add_days(1);
            (next, next)
        }
        (true, LateZiRule::NextDayStem) => (civil, civil.add_days(1)),
        _ => (civil, civil),
    };
    let day = day_pillar_for_day_number(day_date.day_number());
    let hour_branch = Branch::from_hour(corrected.hour);
    let hour_day_stem = day_pillar_for_day_number(hour_stem_day.day_number()).stem;
    let hour = hour_pillar(hour_day_stem, hour_branch);

    let pillars = FourPillars {
        year,
        month,
        day,
        hour,
    };

    tracing::debug!(
        %pillars,
        solar_year,
        sun_longitude_deg,
        late_zi,
        rule = config.late_zi.name(),
        "computed four pillars"
    );

    PillarBreakdown {
        pillars,
        solar_year,
        sun_longitude_deg,
        month_offset,
        day_date,
        late_zi,
    }
}

/// Four pillars of a normalized birth moment. Deterministic.
pub fn four_pillars(instant: &NormalizedInstant, config: &PillarConfig) -> FourPillars {
    pillar_breakdown(instant, config).pillars
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_anchor() {
        assert_eq!(day_pillar_for_date(1949, 10, 1).hanzi(), "甲子");
        assert_eq!(day_pillar_for_date(2000, 1, 1).hanzi(), "戊午");
        assert_eq!(day_pillar_for_date(1989, 12, 31).hanzi(), "乙丑");
    }

    #[test]
    fn year_anchor() {
        assert_eq!(year_pillar_for_solar_year(1984).hanzi(), "甲子");
        assert_eq!(year_pillar_for_solar_year(2024).hanzi(), "甲辰");
        assert_eq!(year_pillar_for_solar_year(1989).hanzi(), "己巳");
    }

    #[test]
    fn solar_year_rolls_at_spring() {
        assert_eq!(solar_year(2024, 1, 290.0), 2023);
        assert_eq!(solar_year(2024, 2, 314.9), 2023);
        assert_eq!(solar_year(2024, 2, 315.0), 2024);
        assert_eq!(solar_year(2024, 12, 270.0), 2024);
    }

    #[test]
    fn month_offsets() {
        assert_eq!(month_offset(315.0), 0);
        assert_eq!(month_offset(344.9), 0);
        assert_eq!(month_offset(345.0), 1);
        assert_eq!(month_offset(0.0), 1);
        assert_eq!(month_offset(285.0), 11);
        assert_eq!(month_offset(314.99), 11);
        assert_eq!(month_offset(280.0), 10);
    }

    #[test]
    fn five_tigers() {
        // Jia/Ji years open with Bing-Yin, Wu/Gui years with Jia-Yin.
        assert_eq!(month_pillar(Stem::Jia, 0).hanzi(), "丙寅");
        assert_eq!(month_pillar(Stem::Ji, 0).hanzi(), "丙寅");
        assert_eq!(month_pillar(Stem::Yi, 0).hanzi(), "戊寅");
        assert_eq!(month_pillar(Stem::Wu, 0).hanzi(), "甲寅");
        assert_eq!(month_pillar(Stem::Gui, 11).hanzi(), "乙丑");
    }

    #[test]
    fn five_rats() {
        assert_eq!(hour_pillar(Stem::Jia, Branch::Zi).hanzi(), "甲子");
        assert_eq!(hour_pillar(Stem::Yi, Branch::Zi).hanzi(), "丙子");
        assert_eq!(hour_pillar(Stem::Bing, Branch::Zi).hanzi(), "戊子");
        assert_eq!(hour_pillar(Stem::Gui, Branch::Hai).hanzi(), "癸亥");
    }

    #[test]
    fn generated_pairs_always_valid() {
        for s in crate::stem::ALL_STEMS {
            for m in 0..12 {
                let p = month_pillar(s, m);
                assert!(Pillar::new(p.stem, p.branch).is_some());
            }
            for b in crate::branch::ALL_BRANCHES {
                let p = hour_pillar(s, b);
                assert!(Pillar::new(p.stem, p.branch).is_some());
            }
        }
    }
}
