//! Apparent geocentric longitude of the Sun.
//!
//! Low-precision solar theory: mean longitude plus equation of centre,
//! corrected for nutation and aberration. Accurate to roughly 0.01 deg,
//! i.e. a few minutes of time at solar-term boundaries, over 1900..=2100.

use crate::julian::jd_to_centuries;

/// Tabulated ΔT = TT − UT in seconds, by decade.
const DELTA_T_TABLE: [(f64, f64); 13] = [
    (1900.0, -2.7),
    (1910.0, 10.4),
    (1920.0, 21.2),
    (1930.0, 24.0),
    (1940.0, 24.3),
    (1950.0, 29.1),
    (1960.0, 33.1),
    (1970.0, 40.2),
    (1980.0, 50.5),
    (1990.0, 56.9),
    (2000.0, 63.8),
    (2010.0, 66.1),
    (2020.0, 69.4),
];

/// Assumed growth of ΔT after the last tabulated decade, seconds per year.
const DELTA_T_DRIFT_PER_YEAR: f64 = 0.5;

/// ΔT in seconds for a decimal year.
///
/// Linear interpolation inside the table, constant before 1900 and a linear
/// drift after 2020.
pub fn delta_t_seconds(decimal_year: f64) -> f64 {
    let (first_year, first_dt) = DELTA_T_TABLE[0];
    let (last_year, last_dt) = DELTA_T_TABLE[DELTA_T_TABLE.len() - 1];
    if decimal_year <= first_year {
        return first_dt;
    }
    if decimal_year >= last_year {
        return last_dt + DELTA_T_DRIFT_PER_YEAR * (decimal_year - last_year);
    }
    for pair in DELTA_T_TABLE.windows(2) {
        let (y0, v0) = pair[0];
        let (y1, v1) = pair[1];
        if decimal_year <= y1 {
            return v0 + (v1 - v0) * (decimal_year - y0) / (y1 - y0);
        }
    }
    last_dt
}

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Apparent ecliptic longitude of the Sun in degrees [0, 360) at a
/// Julian Date in UT.
pub fn sun_apparent_longitude_deg(jd_ut: f64) -> f64 {
    let decimal_year = 2000.0 + (jd_ut - crate::julian::J2000_JD) / 365.25;
    let jd_tt = jd_ut + delta_t_seconds(decimal_year) / 86_400.0;
    let t = jd_to_centuries(jd_tt);

    let l0 = 280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t * t;
    let m = (357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t * t).to_radians();
    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin();
    let omega = (125.04 - 1934.136 * t).to_radians();
    let apparent = l0 + c - 0.005_69 - 0.004_78 * omega.sin();
    normalize_360(apparent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::civil_time::CivilDateTime;

    #[test]
    fn delta_t_interpolates() {
        assert!((delta_t_seconds(1995.0) - 60.35).abs() < 1e-9);
        assert!((delta_t_seconds(1850.0) + 2.7).abs() < 1e-12);
        assert!((delta_t_seconds(2030.0) - 74.4).abs() < 1e-9);
    }

    #[test]
    fn normalize_wraps_negative() {
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-12);
        assert!(normalize_360(360.0).abs() < 1e-12);
    }

    #[test]
    fn march_equinox_2000() {
        // Equinox 2000-03-20 07:35 UT: longitude crosses 0 deg.
        let before = CivilDateTime::new(2000, 3, 20, 7, 0).to_jd();
        let after = CivilDateTime::new(2000, 3, 20, 8, 10).to_jd();
        assert!(sun_apparent_longitude_deg(before) > 359.9);
        assert!(sun_apparent_longitude_deg(after) < 0.1);
    }

    #[test]
    fn year_end_1989_is_in_zi_month() {
        let jd = CivilDateTime::new(1989, 12, 31, 15, 0).to_jd();
        let lon = sun_apparent_longitude_deg(jd);
        assert!((279.0..281.0).contains(&lon), "lon = {lon}");
    }
}
