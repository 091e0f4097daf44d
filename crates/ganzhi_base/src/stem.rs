//! The ten heavenly stems.

use serde::{Deserialize, Serialize};

use crate::element::{Element, Polarity};

/// The 10 heavenly stems, starting from Jia.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in cycle order (index 0 = Jia).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

impl Stem {
    /// 0-based index (Jia=0 .. Gui=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Jia => 0,
            Self::Yi => 1,
            Self::Bing => 2,
            Self::Ding => 3,
            Self::Wu => 4,
            Self::Ji => 5,
            Self::Geng => 6,
            Self::Xin => 7,
            Self::Ren => 8,
            Self::Gui => 9,
        }
    }

    /// Stem at a cycle position; any integer wraps modulo 10.
    pub const fn from_index(index: i64) -> Stem {
        ALL_STEMS[index.rem_euclid(10) as usize]
    }

    /// Pinyin name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jia => "Jia",
            Self::Yi => "Yi",
            Self::Bing => "Bing",
            Self::Ding => "Ding",
            Self::Wu => "Wu",
            Self::Ji => "Ji",
            Self::Geng => "Geng",
            Self::Xin => "Xin",
            Self::Ren => "Ren",
            Self::Gui => "Gui",
        }
    }

    pub const fn hanzi(self) -> &'static str {
        match self {
            Self::Jia => "甲",
            Self::Yi => "乙",
            Self::Bing => "丙",
            Self::Ding => "丁",
            Self::Wu => "戊",
            Self::Ji => "己",
            Self::Geng => "庚",
            Self::Xin => "辛",
            Self::Ren => "壬",
            Self::Gui => "癸",
        }
    }

    pub const fn hangul(self) -> &'static str {
        match self {
            Self::Jia => "갑",
            Self::Yi => "을",
            Self::Bing => "병",
            Self::Ding => "정",
            Self::Wu => "무",
            Self::Ji => "기",
            Self::Geng => "경",
            Self::Xin => "신",
            Self::Ren => "임",
            Self::Gui => "계",
        }
    }

    pub const fn element(self) -> Element {
        match self {
            Self::Jia | Self::Yi => Element::Wood,
            Self::Bing | Self::Ding => Element::Fire,
            Self::Wu | Self::Ji => Element::Earth,
            Self::Geng | Self::Xin => Element::Metal,
            Self::Ren | Self::Gui => Element::Water,
        }
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::from_index(self.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, s) in ALL_STEMS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
            assert_eq!(Stem::from_index(i as i64), *s);
        }
    }

    #[test]
    fn from_index_wraps() {
        assert_eq!(Stem::from_index(10), Stem::Jia);
        assert_eq!(Stem::from_index(-1), Stem::Gui);
    }

    #[test]
    fn elements_pair_up() {
        assert_eq!(Stem::Jia.element(), Element::Wood);
        assert_eq!(Stem::Ding.element(), Element::Fire);
        assert_eq!(Stem::Ji.element(), Element::Earth);
        assert_eq!(Stem::Geng.element(), Element::Metal);
        assert_eq!(Stem::Gui.element(), Element::Water);
    }

    #[test]
    fn polarity_follows_parity() {
        assert_eq!(Stem::Jia.polarity(), Polarity::Yang);
        assert_eq!(Stem::Yi.polarity(), Polarity::Yin);
        assert_eq!(Stem::Ren.polarity(), Polarity::Yang);
    }

    #[test]
    fn labels_nonempty() {
        for s in ALL_STEMS {
            assert!(!s.name().is_empty());
            assert!(!s.hanzi().is_empty());
            assert!(!s.hangul().is_empty());
        }
    }
}
