//! Birth-moment normalization: lunar → solar conversion, validation and
//! true-solar-time correction.

use serde::{Deserialize, Serialize};

use crate::civil_time::CivilDateTime;
use crate::error::TimeError;
use crate::location::Location;
use crate::lunar::{LunarDate, lunar_to_solar};
use crate::{MAX_SUPPORTED_YEAR, MIN_SUPPORTED_YEAR};

/// Minutes of clock time per degree of longitude.
pub const MINUTES_PER_DEGREE: f64 = 4.0;

/// Raw birth moment as entered by a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizeRequest {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    /// Date fields are in the lunisolar calendar.
    pub is_lunar: bool,
    /// Lunar input refers to the intercalary month (ignored for solar input).
    pub is_leap_month: bool,
    pub location: Location,
}

/// A birth moment on the solar calendar with its true-solar-time reading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedInstant {
    /// Solar civil date and local clock time.
    pub clock: CivilDateTime,
    /// Clock time shifted to local true solar time.
    pub corrected: CivilDateTime,
    /// Whole minutes added to the clock reading.
    pub offset_minutes: i64,
    /// Unrounded correction in minutes.
    pub offset_exact_minutes: f64,
    pub location: Location,
    /// Julian Date (UT) of the clock instant.
    pub jd_ut: f64,
}

/// Minutes to add to zone clock time to get local true solar time.
///
/// Computed as `(longitude - standard meridian) * 4`, so the result is
/// negative west of the zone's central meridian: 127°E on the 135°E meridian
/// gives -32, the sun crossing 32 minutes after clock noon. This is the
/// opposite sign to the `(standard - local) * 4` form, which is subtracted
/// from the clock rather than added.
pub fn true_solar_offset_minutes(longitude_deg: f64, standard_meridian_deg: f64) -> f64 {
    (longitude_deg - standard_meridian_deg) * MINUTES_PER_DEGREE
}

/// Reject solar years the solar-term model and era tables do not cover.
pub fn check_era(year: i32) -> Result<(), TimeError> {
    if (MIN_SUPPORTED_YEAR..=MAX_SUPPORTED_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(TimeError::era(year))
    }
}

/// Normalize a raw birth moment.
///
/// Errors: `UnsupportedEra` for years outside 1900..=2100 (lunar or solar),
/// `InvalidDate` for dates or times that do not exist.
pub fn normalize(req: &NormalizeRequest) -> Result<NormalizedInstant, TimeError> {
    check_era(req.year)?;

    let date = if req.is_lunar {
        lunar_to_solar(&LunarDate::new(
            req.year,
            req.month,
            req.day,
            req.is_leap_month,
        ))?
    } else {
        crate::civil_time::CivilDate::new(req.year, req.month, req.day)
    };

    let clock = CivilDateTime::checked(date.year, date.month, date.day, req.hour, req.minute)?;

    let exact = true_solar_offset_minutes(
        req.location.longitude_deg,
        req.location.standard_meridian_deg(),
    );
    let offset_minutes = exact.round() as i64;
    let corrected = clock.add_minutes(offset_minutes);
    let jd_ut = clock
        .add_minutes(-(req.location.utc_offset_minutes as i64))
        .to_jd();

    tracing::debug!(
        %clock,
        %corrected,
        offset_minutes,
        location = %req.location.name,
        "normalized birth moment"
    );

    Ok(NormalizedInstant {
        clock,
        corrected,
        offset_minutes,
        offset_exact_minutes: exact,
        location: req.location.clone(),
        jd_ut,
    })
}
