//! Lunisolar (Chinese/Korean) calendar ↔ Gregorian conversion.
//!
//! Table-driven over lunar years 1900..=2100; see [`crate::lunar_data`].
//! Years outside that range are rejected with `UnsupportedEra`, never clamped.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::civil_time::CivilDate;
use crate::error::TimeError;
use crate::julian::day_number;
use crate::lunar_data::{LUNAR_TABLE_FIRST_YEAR, LUNAR_TABLE_LAST_YEAR, LUNAR_YEAR_TABLE};

/// A date in the lunisolar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LunarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// True when `month` refers to the intercalary month following it.
    pub is_leap_month: bool,
}

impl LunarDate {
    pub const fn new(year: i32, month: u32, day: u32, is_leap_month: bool) -> Self {
        Self {
            year,
            month,
            day,
            is_leap_month,
        }
    }
}

impl Display for LunarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let leap = if self.is_leap_month { " (leap)" } else { "" };
        write!(
            f,
            "{:04}-{:02}-{:02}{leap}",
            self.year, self.month, self.day
        )
    }
}

/// Month structure of one lunar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LunarYearInfo {
    pub year: i32,
    /// Leap month number (1..=12), if the year has one.
    pub leap_month: Option<u32>,
    /// Lengths of the twelve regular months.
    pub month_days: [u32; 12],
    /// Length of the leap month (0 if none).
    pub leap_month_days: u32,
    /// Total days in the year, leap month included.
    pub total_days: u32,
}

fn table_word(year: i32) -> Result<u32, TimeError> {
    if !(LUNAR_TABLE_FIRST_YEAR..=LUNAR_TABLE_LAST_YEAR).contains(&year) {
        return Err(TimeError::era(year));
    }
    Ok(LUNAR_YEAR_TABLE[(year - LUNAR_TABLE_FIRST_YEAR) as usize])
}

fn decode(year: i32, word: u32) -> LunarYearInfo {
    let mut month_days = [29u32; 12];
    for (i, days) in month_days.iter_mut().enumerate() {
        if word & (0x8000 >> i) != 0 {
            *days = 30;
        }
    }
    let leap = word & 0xf;
    let (leap_month, leap_month_days) = if leap == 0 {
        (None, 0)
    } else if word & 0x10000 != 0 {
        (Some(leap), 30)
    } else {
        (Some(leap), 29)
    };
    let total_days = month_days.iter().sum::<u32>() + leap_month_days;
    LunarYearInfo {
        year,
        leap_month,
        month_days,
        leap_month_days,
        total_days,
    }
}

/// Month lengths and leap month of a lunar year.
pub fn lunar_year_info(year: i32) -> Result<LunarYearInfo, TimeError> {
    Ok(decode(year, table_word(year)?))
}

/// Julian Day Number of lunar 1900-01-01.
fn lunar_epoch() -> i64 {
    day_number(1900, 1, 31)
}

/// Days from lunar 1900-01-01 to the first day of `year`.
fn days_before_year(year: i32) -> i64 {
    (LUNAR_TABLE_FIRST_YEAR..year)
        .map(|y| decode(y, LUNAR_YEAR_TABLE[(y - LUNAR_TABLE_FIRST_YEAR) as usize]).total_days as i64)
        .sum()
}

/// Convert a lunar date to its Gregorian equivalent.
pub fn lunar_to_solar(date: &LunarDate) -> Result<CivilDate, TimeError> {
    let info = lunar_year_info(date.year)?;
    if !(1..=12).contains(&date.month) {
        return Err(TimeError::invalid(format!(
            "lunar {date}: month must be 1..=12"
        )));
    }
    if date.is_leap_month && info.leap_month != Some(date.month) {
        return Err(TimeError::invalid(format!(
            "lunar {date}: year {} has no leap month {}",
            date.year, date.month
        )));
    }
    let month_len = if date.is_leap_month {
        info.leap_month_days
    } else {
        info.month_days[(date.month - 1) as usize]
    };
    if date.day == 0 || date.day > month_len {
        return Err(TimeError::invalid(format!(
            "lunar {date}: day must be 1..={month_len}"
        )));
    }

    let mut offset = days_before_year(date.year);
    for m in 1..date.month {
        offset += info.month_days[(m - 1) as usize] as i64;
        if info.leap_month == Some(m) {
            offset += info.leap_month_days as i64;
        }
    }
    if date.is_leap_month {
        offset += info.month_days[(date.month - 1) as usize] as i64;
    }
    offset += date.day as i64 - 1;

    Ok(CivilDate::from_day_number(lunar_epoch() + offset))
}

/// Convert a Gregorian date to the lunisolar calendar.
///
/// Valid from solar 1900-01-31 to the last day of lunar year 2100.
pub fn solar_to_lunar(date: &CivilDate) -> Result<LunarDate, TimeError> {
    date.validate()?;
    let mut offset = date.day_number() - lunar_epoch();
    if offset < 0 {
        return Err(TimeError::era(date.year));
    }

    let mut year = LUNAR_TABLE_FIRST_YEAR;
    let info = loop {
        let info = lunar_year_info(year).map_err(|_| TimeError::era(date.year))?;
        if offset < info.total_days as i64 {
            break info;
        }
        offset -= info.total_days as i64;
        year += 1;
    };

    for m in 1..=12u32 {
        let len = info.month_days[(m - 1) as usize] as i64;
        if offset < len {
            return Ok(LunarDate::new(year, m, offset as u32 + 1, false));
        }
        offset -= len;
        if info.leap_month == Some(m) {
            let leap_len = info.leap_month_days as i64;
            if offset < leap_len {
                return Ok(LunarDate::new(year, m, offset as u32 + 1, true));
            }
            offset -= leap_len;
        }
    }
    Err(TimeError::NoConvergence("lunar month walk overran the year"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_maps_to_1900_01_31() {
        let d = lunar_to_solar(&LunarDate::new(1900, 1, 1, false)).unwrap();
        assert_eq!(d, CivilDate::new(1900, 1, 31));
    }

    #[test]
    fn year_1900_has_leap_eighth_month() {
        let info = lunar_year_info(1900).unwrap();
        assert_eq!(info.leap_month, Some(8));
    }

    #[test]
    fn year_lengths_are_lunisolar() {
        for y in 1900..=2100 {
            let info = lunar_year_info(y).unwrap();
            if info.leap_month.is_some() {
                assert!((383..=385).contains(&info.total_days), "year {y}");
            } else {
                assert!((353..=355).contains(&info.total_days), "year {y}");
            }
        }
    }

    #[test]
    fn out_of_era_is_rejected() {
        assert!(matches!(
            lunar_to_solar(&LunarDate::new(1899, 1, 1, false)),
            Err(TimeError::UnsupportedEra { year: 1899, .. })
        ));
        assert!(matches!(
            lunar_to_solar(&LunarDate::new(2101, 1, 1, false)),
            Err(TimeError::UnsupportedEra { year: 2101, .. })
        ));
        assert!(matches!(
            solar_to_lunar(&CivilDate::new(1900, 1, 30)),
            Err(TimeError::UnsupportedEra { .. })
        ));
    }

    #[test]
    fn leap_flag_must_match_table() {
        // 2023 leaps the 2nd month, not the 3rd.
        assert!(lunar_to_solar(&LunarDate::new(2023, 2, 1, true)).is_ok());
        assert!(matches!(
            lunar_to_solar(&LunarDate::new(2023, 3, 1, true)),
            Err(TimeError::InvalidDate(_))
        ));
    }

    #[test]
    fn day_beyond_month_length() {
        assert!(matches!(
            lunar_to_solar(&LunarDate::new(2024, 1, 31, false)),
            Err(TimeError::InvalidDate(_))
        ));
    }

    #[test]
    fn roundtrip_sample() {
        for jdn in (day_number(1900, 1, 31)..day_number(2100, 12, 31)).step_by(97) {
            let solar = CivilDate::from_day_number(jdn);
            let lunar = solar_to_lunar(&solar).unwrap();
            assert_eq!(lunar_to_solar(&lunar).unwrap(), solar, "{solar}");
        }
    }
}
