//! Named birth locations and their longitudes.
//!
//! The city table is a fixed, small list of approximate longitudes used only
//! for true-solar-time correction. Unknown names fall back to the default
//! location instead of failing; callers decide whether to warn.

use serde::{Deserialize, Serialize};

/// A location as far as time correction is concerned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    /// Geographic longitude in degrees, east positive.
    pub longitude_deg: f64,
    /// Offset of the civil time zone from UTC, in minutes (KST = 540).
    pub utc_offset_minutes: i32,
}

impl Location {
    pub fn new(name: impl Into<String>, longitude_deg: f64, utc_offset_minutes: i32) -> Self {
        Self {
            name: name.into(),
            longitude_deg,
            utc_offset_minutes,
        }
    }

    /// Central meridian of the time zone: 15 deg per hour of offset.
    pub fn standard_meridian_deg(&self) -> f64 {
        self.utc_offset_minutes as f64 / 4.0
    }
}

/// A row of the static city table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct City {
    pub name: &'static str,
    /// Alternative spellings, matched case-insensitively.
    pub aliases: &'static [&'static str],
    pub longitude_deg: f64,
    pub utc_offset_minutes: i32,
}

impl City {
    pub fn location(&self) -> Location {
        Location::new(self.name, self.longitude_deg, self.utc_offset_minutes)
    }

    fn matches(&self, query: &str) -> bool {
        self.name.eq_ignore_ascii_case(query)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(query))
    }
}

const KST: i32 = 540;
const CST: i32 = 480;

/// Known cities. The first entry is the fallback location.
pub static CITIES: [City; 31] = [
    City { name: "Seoul", aliases: &["서울", "서울특별시"], longitude_deg: 126.98, utc_offset_minutes: KST },
    City { name: "Busan", aliases: &["부산", "Pusan"], longitude_deg: 129.08, utc_offset_minutes: KST },
    City { name: "Incheon", aliases: &["인천"], longitude_deg: 126.71, utc_offset_minutes: KST },
    City { name: "Daegu", aliases: &["대구"], longitude_deg: 128.60, utc_offset_minutes: KST },
    City { name: "Daejeon", aliases: &["대전"], longitude_deg: 127.38, utc_offset_minutes: KST },
    City { name: "Gwangju", aliases: &["광주"], longitude_deg: 126.85, utc_offset_minutes: KST },
    City { name: "Ulsan", aliases: &["울산"], longitude_deg: 129.31, utc_offset_minutes: KST },
    City { name: "Sejong", aliases: &["세종"], longitude_deg: 127.29, utc_offset_minutes: KST },
    City { name: "Suwon", aliases: &["수원"], longitude_deg: 127.03, utc_offset_minutes: KST },
    City { name: "Cheongju", aliases: &["청주"], longitude_deg: 127.49, utc_offset_minutes: KST },
    City { name: "Jeonju", aliases: &["전주"], longitude_deg: 127.15, utc_offset_minutes: KST },
    City { name: "Chuncheon", aliases: &["춘천"], longitude_deg: 127.73, utc_offset_minutes: KST },
    City { name: "Gangneung", aliases: &["강릉"], longitude_deg: 128.88, utc_offset_minutes: KST },
    City { name: "Pohang", aliases: &["포항"], longitude_deg: 129.37, utc_offset_minutes: KST },
    City { name: "Changwon", aliases: &["창원"], longitude_deg: 128.68, utc_offset_minutes: KST },
    City { name: "Jeju", aliases: &["제주", "Cheju"], longitude_deg: 126.53, utc_offset_minutes: KST },
    City { name: "Pyongyang", aliases: &["평양"], longitude_deg: 125.75, utc_offset_minutes: KST },
    City { name: "Tokyo", aliases: &["도쿄", "東京"], longitude_deg: 139.69, utc_offset_minutes: KST },
    City { name: "Osaka", aliases: &["오사카", "大阪"], longitude_deg: 135.50, utc_offset_minutes: KST },
    City { name: "Beijing", aliases: &["베이징", "北京", "Peking"], longitude_deg: 116.41, utc_offset_minutes: CST },
    City { name: "Shanghai", aliases: &["상하이", "上海"], longitude_deg: 121.47, utc_offset_minutes: CST },
    City { name: "Hong Kong", aliases: &["홍콩", "香港", "Hongkong"], longitude_deg: 114.17, utc_offset_minutes: CST },
    City { name: "Taipei", aliases: &["타이베이", "臺北", "台北"], longitude_deg: 121.56, utc_offset_minutes: CST },
    City { name: "Singapore", aliases: &["싱가포르"], longitude_deg: 103.82, utc_offset_minutes: CST },
    City { name: "Bangkok", aliases: &["방콕"], longitude_deg: 100.50, utc_offset_minutes: 420 },
    City { name: "Sydney", aliases: &["시드니"], longitude_deg: 151.21, utc_offset_minutes: 600 },
    City { name: "London", aliases: &["런던"], longitude_deg: -0.13, utc_offset_minutes: 0 },
    City { name: "Paris", aliases: &["파리"], longitude_deg: 2.35, utc_offset_minutes: 60 },
    City { name: "New York", aliases: &["뉴욕", "NYC"], longitude_deg: -74.01, utc_offset_minutes: -300 },
    City { name: "Toronto", aliases: &["토론토"], longitude_deg: -79.38, utc_offset_minutes: -300 },
    City { name: "Los Angeles", aliases: &["로스앤젤레스", "LA"], longitude_deg: -118.24, utc_offset_minutes: -480 },
];

/// Result of a city lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityResolution {
    pub location: Location,
    /// False when the name was not found and the default was substituted.
    pub resolved: bool,
}

/// The fallback location (Seoul).
pub fn default_location() -> Location {
    CITIES[0].location()
}

/// Look up a city by name or alias.
pub fn find_city(name: &str) -> Option<&'static City> {
    let query = name.trim();
    if query.is_empty() {
        return None;
    }
    CITIES.iter().find(|c| c.matches(query))
}

/// Resolve a city name, substituting `fallback` when it is unknown.
pub fn resolve_city_or(name: &str, fallback: &Location) -> CityResolution {
    match find_city(name) {
        Some(city) => CityResolution {
            location: city.location(),
            resolved: true,
        },
        None => CityResolution {
            location: fallback.clone(),
            resolved: false,
        },
    }
}

/// Resolve a city name, substituting [`default_location`] when it is unknown.
pub fn resolve_city(name: &str) -> CityResolution {
    resolve_city_or(name, &default_location())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_case_insensitive() {
        let r = resolve_city("busan");
        assert!(r.resolved);
        assert_eq!(r.location.name, "Busan");
        assert!((r.location.longitude_deg - 129.08).abs() < 1e-9);
    }

    #[test]
    fn resolves_korean_alias() {
        let r = resolve_city("대전");
        assert!(r.resolved);
        assert_eq!(r.location.name, "Daejeon");
    }

    #[test]
    fn unknown_city_falls_back() {
        let r = resolve_city("Atlantis");
        assert!(!r.resolved);
        assert_eq!(r.location, default_location());
        assert!(!resolve_city("   ").resolved);
    }

    #[test]
    fn standard_meridians() {
        assert!((default_location().standard_meridian_deg() - 135.0).abs() < 1e-12);
        let ny = find_city("New York").unwrap().location();
        assert!((ny.standard_meridian_deg() + 75.0).abs() < 1e-12);
    }

    #[test]
    fn names_unique() {
        for (i, a) in CITIES.iter().enumerate() {
            for b in &CITIES[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }
}
