//! Calendar normalization for sexagenary chart computation.
//!
//! This crate provides:
//! - Gregorian ↔ Julian Day Number conversions (exact day serials)
//! - Lunisolar ↔ Gregorian conversion for lunar years 1900..=2100
//! - Apparent solar longitude and the 24 solar terms
//! - A static city table for longitude lookup
//! - True-solar-time normalization of a birth moment

pub mod civil_time;
pub mod error;
pub mod julian;
pub mod location;
pub mod lunar;
pub mod lunar_data;
pub mod normalize;
pub mod solar_term;
pub mod sun;

/// First Gregorian/lunar year the engine accepts.
pub const MIN_SUPPORTED_YEAR: i32 = 1900;

/// Last Gregorian/lunar year the engine accepts.
pub const MAX_SUPPORTED_YEAR: i32 = 2100;

pub use civil_time::{CivilDate, CivilDateTime};
pub use error::TimeError;
pub use julian::{
    J2000_JD, date_from_day_number, day_number, days_in_month, is_leap_year, jd_to_centuries,
};
pub use location::{
    CITIES, City, CityResolution, Location, default_location, find_city, resolve_city,
    resolve_city_or,
};
pub use lunar::{LunarDate, LunarYearInfo, lunar_to_solar, lunar_year_info, solar_to_lunar};
pub use normalize::{
    NormalizeRequest, NormalizedInstant, check_era, normalize, true_solar_offset_minutes,
};
pub use solar_term::{
    ALL_SOLAR_TERMS, LICHUN_LONGITUDE_DEG, SolarTerm, SolarTermEvent, TermFilter,
    TermSearchConfig, next_solar_term, prev_solar_term, solar_terms_in_year,
};
pub use sun::{delta_t_seconds, normalize_360, sun_apparent_longitude_deg};
