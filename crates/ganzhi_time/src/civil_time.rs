//! Civil (proleptic Gregorian) date and wall-clock time.
//!
//! Provides `CivilDate` and `CivilDateTime`, the minute-resolution
//! representations used throughout the engine. Arithmetic is done on the
//! Julian Day Number so month and year rollovers are exact.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::julian::{MINUTES_PER_DAY, date_from_day_number, day_number, days_in_month};

/// A calendar date without time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CivilDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CivilDate {
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Check that the date exists in the Gregorian calendar.
    pub fn validate(&self) -> Result<(), TimeError> {
        if !(1..=12).contains(&self.month) {
            return Err(TimeError::invalid(format!(
                "{self}: month must be 1..=12"
            )));
        }
        let max_day = days_in_month(self.year, self.month);
        if self.day == 0 || self.day > max_day {
            return Err(TimeError::invalid(format!(
                "{self}: day must be 1..={max_day}"
            )));
        }
        Ok(())
    }

    /// Julian Day Number of this date.
    pub fn day_number(&self) -> i64 {
        day_number(self.year, self.month, self.day)
    }

    pub fn from_day_number(jdn: i64) -> Self {
        let (year, month, day) = date_from_day_number(jdn);
        Self { year, month, day }
    }

    /// Shift by a (possibly negative) number of days.
    pub fn add_days(&self, days: i64) -> Self {
        Self::from_day_number(self.day_number() + days)
    }

    /// Signed day count `other - self`.
    pub fn days_until(&self, other: &CivilDate) -> i64 {
        other.day_number() - self.day_number()
    }
}

impl Display for CivilDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Civil date and wall-clock time at minute resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CivilDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl CivilDateTime {
    pub const fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
        }
    }

    /// Construct and validate in one step.
    pub fn checked(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
    ) -> Result<Self, TimeError> {
        let t = Self::new(year, month, day, hour, minute);
        t.validate()?;
        Ok(t)
    }

    pub fn validate(&self) -> Result<(), TimeError> {
        self.date().validate()?;
        if self.hour > 23 || self.minute > 59 {
            return Err(TimeError::invalid(format!(
                "{self}: time must be within 00:00..=23:59"
            )));
        }
        Ok(())
    }

    pub const fn date(&self) -> CivilDate {
        CivilDate::new(self.year, self.month, self.day)
    }

    pub fn day_number(&self) -> i64 {
        day_number(self.year, self.month, self.day)
    }

    /// Minutes elapsed since local midnight.
    pub const fn minute_of_day(&self) -> u32 {
        self.hour * 60 + self.minute
    }

    /// Shift by a (possibly negative) number of minutes, rolling over days,
    /// months and years as needed.
    pub fn add_minutes(&self, minutes: i64) -> Self {
        let total = self.day_number() * MINUTES_PER_DAY + self.minute_of_day() as i64 + minutes;
        Self::from_total_minutes(total)
    }

    /// Julian Date of this reading, interpreting it in whatever time scale
    /// the caller has in mind (UT for clock readings shifted to UTC).
    pub fn to_jd(&self) -> f64 {
        self.day_number() as f64 - 0.5 + self.minute_of_day() as f64 / MINUTES_PER_DAY as f64
    }

    /// Nearest whole-minute reading for a Julian Date.
    pub fn from_jd(jd: f64) -> Self {
        let total = ((jd + 0.5) * MINUTES_PER_DAY as f64).round() as i64;
        Self::from_total_minutes(total)
    }

    fn from_total_minutes(total: i64) -> Self {
        let jdn = total.div_euclid(MINUTES_PER_DAY);
        let rem = total.rem_euclid(MINUTES_PER_DAY) as u32;
        let (year, month, day) = date_from_day_number(jdn);
        Self {
            year,
            month,
            day,
            hour: rem / 60,
            minute: rem % 60,
        }
    }
}

impl Display for CivilDateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_day_31_in_30_day_month() {
        assert!(CivilDate::new(2023, 4, 31).validate().is_err());
        assert!(CivilDate::new(2023, 4, 30).validate().is_ok());
    }

    #[test]
    fn rejects_feb_29_in_common_year() {
        assert!(CivilDate::new(2023, 2, 29).validate().is_err());
        assert!(CivilDate::new(2024, 2, 29).validate().is_ok());
        assert!(CivilDate::new(1900, 2, 29).validate().is_err());
    }

    #[test]
    fn rejects_bad_month_and_time() {
        assert!(CivilDate::new(2023, 0, 1).validate().is_err());
        assert!(CivilDateTime::checked(2023, 1, 1, 24, 0).is_err());
        assert!(CivilDateTime::checked(2023, 1, 1, 23, 60).is_err());
        assert!(CivilDateTime::checked(2023, 1, 1, 23, 59).is_ok());
    }

    #[test]
    fn add_minutes_crosses_year() {
        let t = CivilDateTime::new(1990, 1, 1, 0, 0);
        assert_eq!(t.add_minutes(-32), CivilDateTime::new(1989, 12, 31, 23, 28));
        assert_eq!(
            CivilDateTime::new(1989, 12, 31, 23, 28).add_minutes(32),
            t
        );
    }

    #[test]
    fn add_minutes_crosses_leap_day() {
        let t = CivilDateTime::new(2024, 2, 28, 23, 50);
        assert_eq!(t.add_minutes(20), CivilDateTime::new(2024, 2, 29, 0, 10));
        let t = CivilDateTime::new(2023, 2, 28, 23, 50);
        assert_eq!(t.add_minutes(20), CivilDateTime::new(2023, 3, 1, 0, 10));
    }

    #[test]
    fn jd_roundtrip() {
        let t = CivilDateTime::new(2024, 2, 4, 8, 27);
        assert_eq!(CivilDateTime::from_jd(t.to_jd()), t);
        assert!((CivilDateTime::new(2000, 1, 1, 12, 0).to_jd() - 2_451_545.0).abs() < 1e-9);
    }

    #[test]
    fn add_days_and_distance() {
        let d = CivilDate::new(2024, 12, 30);
        assert_eq!(d.add_days(3), CivilDate::new(2025, 1, 2));
        assert_eq!(d.days_until(&CivilDate::new(2025, 1, 2)), 3);
    }

    #[test]
    fn display_formats() {
        assert_eq!(CivilDate::new(1990, 1, 1).to_string(), "1990-01-01");
        assert_eq!(
            CivilDateTime::new(1989, 12, 31, 23, 28).to_string(),
            "1989-12-31 23:28"
        );
    }
}
