//! Stem/branch pairs and the 60-term sexagenary cycle.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::stem::Stem;

/// Length of the sexagenary cycle: lcm(10, 12).
pub const CYCLE_LENGTH: u8 = 60;

/// One stem/branch pair.
///
/// Only pairs of equal parity occur in the cycle; [`Pillar::new`] rejects the
/// other 60 combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
}

impl Pillar {
    /// Pair a stem with a branch; `None` for mixed yin/yang pairs.
    pub const fn new(stem: Stem, branch: Branch) -> Option<Pillar> {
        if stem.index() % 2 == branch.index() % 2 {
            Some(Pillar { stem, branch })
        } else {
            None
        }
    }

    /// Pillar at a cycle position; any integer wraps modulo 60 (0 = Jia-Zi).
    pub const fn from_cycle_index(index: i64) -> Pillar {
        let i = index.rem_euclid(CYCLE_LENGTH as i64);
        Pillar {
            stem: Stem::from_index(i),
            branch: Branch::from_index(i),
        }
    }

    /// Position in the cycle (0..60).
    ///
    /// The unique `i` with `i % 10 == stem` and `i % 12 == branch`.
    pub const fn cycle_index(self) -> u8 {
        let s = self.stem.index() as i32;
        let b = self.branch.index() as i32;
        // i = s + 10k; k ≡ (b - s) / 2 * (5^-1 mod 6) = (b - s) / 2 * 5 (mod 6)
        let k = (((b - s) / 2) * 5).rem_euclid(6);
        (s + 10 * k) as u8
    }

    /// Walk `n` steps through the cycle (negative walks backward).
    pub const fn offset(self, n: i64) -> Pillar {
        Pillar::from_cycle_index(self.cycle_index() as i64 + n)
    }

    /// Hanzi label, e.g. "甲子".
    pub fn hanzi(self) -> String {
        format!("{}{}", self.stem.hanzi(), self.branch.hanzi())
    }

    /// Hangul label, e.g. "갑자".
    pub fn hangul(self) -> String {
        format!("{}{}", self.stem.hangul(), self.branch.hangul())
    }

    pub fn label(self) -> PillarLabel {
        PillarLabel::from(self)
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.stem.name(), self.branch.name())
    }
}

/// Position of a pillar in a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PillarPosition {
    Year,
    Month,
    Day,
    Hour,
}

/// All four positions, year first.
pub const ALL_POSITIONS: [PillarPosition; 4] = [
    PillarPosition::Year,
    PillarPosition::Month,
    PillarPosition::Day,
    PillarPosition::Hour,
];

impl PillarPosition {
    pub const fn index(self) -> u8 {
        match self {
            Self::Year => 0,
            Self::Month => 1,
            Self::Day => 2,
            Self::Hour => 3,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "Year",
            Self::Month => "Month",
            Self::Day => "Day",
            Self::Hour => "Hour",
        }
    }
}

/// The four pillars of a birth moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl FourPillars {
    pub const fn get(&self, position: PillarPosition) -> Pillar {
        match position {
            PillarPosition::Year => self.year,
            PillarPosition::Month => self.month,
            PillarPosition::Day => self.day,
            PillarPosition::Hour => self.hour,
        }
    }

    /// `(position, pillar)` pairs, year first.
    pub fn iter(&self) -> impl Iterator<Item = (PillarPosition, Pillar)> + '_ {
        ALL_POSITIONS.iter().map(move |&p| (p, self.get(p)))
    }

    pub fn stems(&self) -> [Stem; 4] {
        [
            self.year.stem,
            self.month.stem,
            self.day.stem,
            self.hour.stem,
        ]
    }

    pub fn branches(&self) -> [Branch; 4] {
        [
            self.year.branch,
            self.month.branch,
            self.day.branch,
            self.hour.branch,
        ]
    }

    /// The day stem, the chart's reference "self".
    pub const fn day_master(&self) -> Stem {
        self.day.stem
    }

    /// Labelled view of all four pillars.
    pub fn labels(&self) -> [PillarLabel; 4] {
        [
            self.year.label(),
            self.month.label(),
            self.day.label(),
            self.hour.label(),
        ]
    }
}

impl fmt::Display for FourPillars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.year.hanzi(),
            self.month.hanzi(),
            self.day.hanzi(),
            self.hour.hanzi()
        )
    }
}

/// Symbolic plus localized view of a pillar for display layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PillarLabel {
    pub stem: Stem,
    pub branch: Branch,
    pub cycle_index: u8,
    pub pinyin: String,
    pub hanzi: String,
    pub hangul: String,
    pub stem_element: &'static str,
    pub branch_element: &'static str,
    pub animal: &'static str,
}

impl From<Pillar> for PillarLabel {
    fn from(p: Pillar) -> Self {
        Self {
            stem: p.stem,
            branch: p.branch,
            cycle_index: p.cycle_index(),
            pinyin: p.to_string(),
            hanzi: p.hanzi(),
            hangul: p.hangul(),
            stem_element: p.stem.element().name(),
            branch_element: p.branch.element().name(),
            animal: p.branch.animal(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_index_roundtrip_all_sixty() {
        for i in 0..60 {
            let p = Pillar::from_cycle_index(i);
            assert_eq!(p.cycle_index() as i64, i);
        }
    }

    #[test]
    fn known_positions() {
        assert_eq!(Pillar::from_cycle_index(0).hanzi(), "甲子");
        assert_eq!(Pillar::from_cycle_index(59).hanzi(), "癸亥");
        assert_eq!(Pillar::from_cycle_index(40).hanzi(), "甲辰");
        assert_eq!(Pillar::from_cycle_index(60), Pillar::from_cycle_index(0));
        assert_eq!(Pillar::from_cycle_index(-1), Pillar::from_cycle_index(59));
    }

    #[test]
    fn mixed_parity_rejected() {
        assert!(Pillar::new(Stem::Jia, Branch::Chou).is_none());
        assert!(Pillar::new(Stem::Yi, Branch::Chou).is_some());
        let valid = (0..10)
            .flat_map(|s| (0..12).map(move |b| (s, b)))
            .filter(|&(s, b)| Pillar::new(Stem::from_index(s), Branch::from_index(b)).is_some())
            .count();
        assert_eq!(valid, 60);
    }

    #[test]
    fn offset_walks_both_ways() {
        let jz = Pillar::from_cycle_index(0);
        assert_eq!(jz.offset(1).hanzi(), "乙丑");
        assert_eq!(jz.offset(-1).hanzi(), "癸亥");
        assert_eq!(jz.offset(60), jz);
        assert_eq!(jz.offset(7).offset(-7), jz);
    }

    #[test]
    fn four_pillars_accessors() {
        let fp = FourPillars {
            year: Pillar::from_cycle_index(5),
            month: Pillar::from_cycle_index(12),
            day: Pillar::from_cycle_index(1),
            hour: Pillar::from_cycle_index(24),
        };
        assert_eq!(fp.day_master(), Stem::Yi);
        assert_eq!(fp.get(PillarPosition::Month), fp.month);
        let positions: Vec<_> = fp.iter().map(|(p, _)| p).collect();
        assert_eq!(positions, ALL_POSITIONS.to_vec());
        assert_eq!(fp.to_string(), "己巳 丙子 乙丑 戊子");
        assert_eq!(fp.branches()[2], Branch::Chou);
    }

    #[test]
    fn label_carries_localized_names() {
        let l = Pillar::from_cycle_index(0).label();
        assert_eq!(l.pinyin, "Jia-Zi");
        assert_eq!(l.hangul, "갑자");
        assert_eq!(l.animal, "Rat");
        assert_eq!(l.cycle_index, 0);
    }
}
