//! Gregorian calendar ↔ Julian Day Number conversions.
//!
//! All day arithmetic in the engine goes through the integer day serial
//! returned by [`day_number`], so leap years are handled exactly and
//! never through month/day fields.

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days per Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Minutes per civil day.
pub const MINUTES_PER_DAY: i64 = 1440;

/// Gregorian leap-year rule.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a Gregorian month. Returns 0 for an invalid month.
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Julian Day Number (integer, noon-based) of a proleptic Gregorian date.
///
/// 2000-01-01 → 2451545. The caller is responsible for passing a valid date.
pub fn day_number(year: i32, month: u32, day: u32) -> i64 {
    let a = (14 - month as i64) / 12;
    let y = year as i64 + 4800 - a;
    let m = month as i64 + 12 * a - 3;
    day as i64 + (153 * m + 2) / 5 + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32045
}

/// Inverse of [`day_number`]: `(year, month, day)`.
pub fn date_from_day_number(jdn: i64) -> (i32, u32, u32) {
    let a = jdn + 32044;
    let b = (4 * a + 3).div_euclid(146_097);
    let c = a - (146_097 * b).div_euclid(4);
    let d = (4 * c + 3).div_euclid(1461);
    let e = c - (1461 * d).div_euclid(4);
    let m = (5 * e + 2).div_euclid(153);
    let day = e - (153 * m + 2).div_euclid(5) + 1;
    let month = m + 3 - 12 * m.div_euclid(10);
    let year = 100 * b + d - 4800 + m.div_euclid(10);
    (year as i32, month as u32, day as u32)
}

/// Julian centuries of TT since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_day_number() {
        assert_eq!(day_number(2000, 1, 1), 2_451_545);
    }

    #[test]
    fn known_reference_day() {
        // 1949-10-01, a Jia-Zi day in the sexagenary count.
        assert_eq!(day_number(1949, 10, 1), 2_433_191);
    }

    #[test]
    fn roundtrip_across_leap_days() {
        for jdn in day_number(1899, 12, 25)..day_number(1901, 3, 5) {
            let (y, m, d) = date_from_day_number(jdn);
            assert_eq!(day_number(y, m, d), jdn);
        }
        for jdn in day_number(1999, 12, 25)..day_number(2001, 3, 5) {
            let (y, m, d) = date_from_day_number(jdn);
            assert_eq!(day_number(y, m, d), jdn);
        }
    }

    #[test]
    fn century_leap_rules() {
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(2100));
        assert!(is_leap_year(2024));
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(2023, 13), 0);
    }

    #[test]
    fn feb_29_is_followed_by_mar_1() {
        let jdn = day_number(2024, 2, 29);
        assert_eq!(date_from_day_number(jdn + 1), (2024, 3, 1));
    }
}
