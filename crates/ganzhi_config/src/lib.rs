//! TOML configuration for the ganzhi engine.
//!
//! ```toml
//! [location]
//! default_city = "Seoul"
//!
//! [pillars]
//! late_zi = "next_day_stem"
//!
//! [fortune]
//! start_age_divisor = 3.0
//! daily_window_days = 7
//! ```
//!
//! Every section and key is optional; missing values take the defaults above.

pub mod error;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use ganzhi_analysis::{ChartConfig, DAYS_PER_FORTUNE_YEAR, FortuneConfig, MAX_DAILY_WINDOW_DAYS};
use ganzhi_base::{LateZiRule, PillarConfig};
use ganzhi_time::{Location, find_city};

pub use error::ConfigError;

/// Environment variable naming a config file for [`EngineConfig::discover`].
pub const CONFIG_ENV_VAR: &str = "GANZHI_CONFIG";

/// Largest accepted UTC offset, minutes.
const MAX_UTC_OFFSET_MINUTES: i32 = 14 * 60;

/// `[location]`: fallback location for unknown birth cities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LocationSection {
    /// Name looked up in the city table.
    pub default_city: String,
    /// Explicit longitude; bypasses the table when set with `utc_offset_minutes`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude_deg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utc_offset_minutes: Option<i32>,
}

impl Default for LocationSection {
    fn default() -> Self {
        Self {
            default_city: "Seoul".to_string(),
            longitude_deg: None,
            utc_offset_minutes: None,
        }
    }
}

/// `[pillars]`
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PillarSection {
    pub late_zi: LateZiRule,
}

/// `[fortune]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FortuneSection {
    pub start_age_divisor: f64,
    pub daily_window_days: u32,
}

impl Default for FortuneSection {
    fn default() -> Self {
        Self {
            start_age_divisor: DAYS_PER_FORTUNE_YEAR,
            daily_window_days: MAX_DAILY_WINDOW_DAYS,
        }
    }
}

/// Whole-engine configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub location: LocationSection,
    pub pillars: PillarSection,
    pub fortune: FortuneSection,
}

impl EngineConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load the file named by `GANZHI_CONFIG`, or return defaults when unset.
    pub fn discover() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) if !path.is_empty() => Self::load(&PathBuf::from(path)),
            _ => {
                tracing::debug!("no {CONFIG_ENV_VAR} set, using default config");
                Ok(Self::default())
            }
        }
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let loc = &self.location;
        match (loc.longitude_deg, loc.utc_offset_minutes) {
            (Some(lon), Some(offset)) => {
                if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
                    return Err(ConfigError::Invalid(format!(
                        "location.longitude_deg must be within -180..=180, got {lon}"
                    )));
                }
                if offset.abs() > MAX_UTC_OFFSET_MINUTES {
                    return Err(ConfigError::Invalid(format!(
                        "location.utc_offset_minutes must be within ±{MAX_UTC_OFFSET_MINUTES}, got {offset}"
                    )));
                }
            }
            (None, None) => {
                if find_city(&loc.default_city).is_none() {
                    return Err(ConfigError::Invalid(format!(
                        "location.default_city {:?} is not a known city",
                        loc.default_city
                    )));
                }
            }
            _ => {
                return Err(ConfigError::Invalid(
                    "location.longitude_deg and location.utc_offset_minutes must be set together"
                        .to_string(),
                ));
            }
        }

        let divisor = self.fortune.start_age_divisor;
        if !divisor.is_finite() || divisor <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "fortune.start_age_divisor must be positive, got {divisor}"
            )));
        }
        let window = self.fortune.daily_window_days;
        if !(1..=MAX_DAILY_WINDOW_DAYS).contains(&window) {
            return Err(ConfigError::Invalid(format!(
                "fortune.daily_window_days must be within 1..={MAX_DAILY_WINDOW_DAYS}, got {window}"
            )));
        }
        Ok(())
    }

    /// Fallback location described by `[location]`.
    pub fn default_location(&self) -> Location {
        let loc = &self.location;
        match (loc.longitude_deg, loc.utc_offset_minutes) {
            (Some(lon), Some(offset)) => Location::new(loc.default_city.clone(), lon, offset),
            _ => find_city(&loc.default_city)
                .map(|c| c.location())
                .unwrap_or_else(ganzhi_time::default_location),
        }
    }

    pub fn pillar_config(&self) -> PillarConfig {
        PillarConfig {
            late_zi: self.pillars.late_zi,
        }
    }

    pub fn chart_config(&self) -> ChartConfig {
        ChartConfig {
            pillars: self.pillar_config(),
            default_location: self.default_location(),
        }
    }

    pub fn fortune_config(&self) -> FortuneConfig {
        FortuneConfig {
            start_age_divisor: self.fortune.start_age_divisor,
            daily_window_days: self.fortune.daily_window_days,
        }
    }
}
