//! Types for single-chart synthesis.

use serde::{Deserialize, Serialize};

use ganzhi_base::{
    Balance, Branch, Element, ElementScores, FourPillars, PillarConfig, PillarLabel,
    PillarPosition, Polarity, Stem,
};
use ganzhi_time::{Location, NormalizeRequest, NormalizedInstant, default_location};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

/// Birth data as supplied by a caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthInput {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub gender: Gender,
    #[serde(default)]
    pub is_lunar: bool,
    #[serde(default)]
    pub is_leap_month: bool,
    /// City name; unknown names fall back to the default location.
    #[serde(default)]
    pub city: String,
}

impl BirthInput {
    /// Solar-calendar input with no city.
    pub fn solar(year: i32, month: u32, day: u32, hour: u32, minute: u32, gender: Gender) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            gender,
            is_lunar: false,
            is_leap_month: false,
            city: String::new(),
        }
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    pub fn lunar(mut self, is_leap_month: bool) -> Self {
        self.is_lunar = true;
        self.is_leap_month = is_leap_month;
        self
    }

    pub(crate) fn normalize_request(&self, location: Location) -> NormalizeRequest {
        NormalizeRequest {
            year: self.year,
            month: self.month,
            day: self.day,
            hour: self.hour,
            minute: self.minute,
            is_lunar: self.is_lunar,
            is_leap_month: self.is_leap_month,
            location,
        }
    }
}

/// Configuration for chart synthesis.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub pillars: PillarConfig,
    /// Used when the birth city is not in the table.
    pub default_location: Location,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            pillars: PillarConfig::default(),
            default_location: default_location(),
        }
    }
}

/// Day-master strength classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Strength {
    Strong,
    Weak,
}

impl Strength {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Strong => "strong",
            Self::Weak => "weak",
        }
    }
}

/// Kind of natal branch combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BranchFactKind {
    Clash,
    SixHarmony,
    Triad,
    DirectionalTriad,
}

/// A combination found among the four natal branches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BranchFact {
    pub kind: BranchFactKind,
    pub positions: Vec<PillarPosition>,
    pub branches: Vec<Branch>,
    /// Element the combination transforms into, if any.
    pub element: Option<Element>,
}

/// Per-person structured reading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartReading {
    pub input: BirthInput,
    pub instant: NormalizedInstant,
    /// Birth city was found in the city table.
    pub city_resolved: bool,
    pub solar_year: i32,
    pub pillars: FourPillars,
    /// Year, month, day, hour.
    pub labels: [PillarLabel; 4],
    pub elements: ElementScores,
    /// Share of the 12-point total per element, in percent.
    pub element_percentages: [(Element, f64); 5],
    pub day_master: Stem,
    pub day_master_element: Element,
    pub day_master_polarity: Polarity,
    /// Weight of the day master's element plus the element generating it.
    pub support: u32,
    pub strength: Strength,
    pub useful_element: Element,
    pub dominant: Vec<Element>,
    pub lacking: Vec<Element>,
    pub balance: Balance,
    pub branch_facts: Vec<BranchFact>,
}

impl ChartReading {
    /// First dominant element, if any.
    pub fn primary_dominant(&self) -> Option<Element> {
        self.dominant.first().copied()
    }
}
