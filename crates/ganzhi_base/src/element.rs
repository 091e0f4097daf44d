//! The five elements and yin/yang polarity.
//!
//! Generating cycle: Wood → Fire → Earth → Metal → Water → Wood.
//! Controlling cycle: each element controls the one two steps ahead in the
//! generating cycle (Wood → Earth → Water → Fire → Metal → Wood).

use serde::{Deserialize, Serialize};

/// One of the five elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All five elements in generating-cycle order.
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    /// 0-based index in generating-cycle order (Wood=0 .. Water=4).
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    pub const fn hanzi(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    pub const fn hangul(self) -> &'static str {
        match self {
            Self::Wood => "목",
            Self::Fire => "화",
            Self::Earth => "토",
            Self::Metal => "금",
            Self::Water => "수",
        }
    }

    /// The element this one produces.
    pub const fn generates(self) -> Element {
        match self {
            Self::Wood => Self::Fire,
            Self::Fire => Self::Earth,
            Self::Earth => Self::Metal,
            Self::Metal => Self::Water,
            Self::Water => Self::Wood,
        }
    }

    /// The element that produces this one.
    pub const fn generated_by(self) -> Element {
        match self {
            Self::Wood => Self::Water,
            Self::Fire => Self::Wood,
            Self::Earth => Self::Fire,
            Self::Metal => Self::Earth,
            Self::Water => Self::Metal,
        }
    }

    /// The element this one restrains.
    pub const fn controls(self) -> Element {
        match self {
            Self::Wood => Self::Earth,
            Self::Fire => Self::Metal,
            Self::Earth => Self::Water,
            Self::Metal => Self::Wood,
            Self::Water => Self::Fire,
        }
    }

    /// The element that restrains this one.
    pub const fn controlled_by(self) -> Element {
        match self {
            Self::Wood => Self::Metal,
            Self::Fire => Self::Water,
            Self::Earth => Self::Wood,
            Self::Metal => Self::Fire,
            Self::Water => Self::Earth,
        }
    }
}

/// Yin/yang polarity of a stem or branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    /// Even cycle positions are yang.
    pub const fn from_index(index: u8) -> Polarity {
        if index % 2 == 0 { Self::Yang } else { Self::Yin }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Yang => "Yang",
            Self::Yin => "Yin",
        }
    }
}
