//! The twelve earthly branches and their double-hour windows.
//!
//! Each branch governs a two-hour window; Zi spans 23:00–01:00, so the
//! window start for branch `i` is `(23 + 2i) mod 24`.

use serde::{Deserialize, Serialize};

use crate::element::{Element, Polarity};

/// The 12 earthly branches, starting from Zi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in cycle order (index 0 = Zi).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

impl Branch {
    /// 0-based index (Zi=0 .. Hai=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }

    /// Branch at a cycle position; any integer wraps modulo 12.
    pub const fn from_index(index: i64) -> Branch {
        ALL_BRANCHES[index.rem_euclid(12) as usize]
    }

    /// Pinyin name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zi => "Zi",
            Self::Chou => "Chou",
            Self::Yin => "Yin",
            Self::Mao => "Mao",
            Self::Chen => "Chen",
            Self::Si => "Si",
            Self::Wu => "Wu",
            Self::Wei => "Wei",
            Self::Shen => "Shen",
            Self::You => "You",
            Self::Xu => "Xu",
            Self::Hai => "Hai",
        }
    }

    pub const fn hanzi(self) -> &'static str {
        match self {
            Self::Zi => "子",
            Self::Chou => "丑",
            Self::Yin => "寅",
            Self::Mao => "卯",
            Self::Chen => "辰",
            Self::Si => "巳",
            Self::Wu => "午",
            Self::Wei => "未",
            Self::Shen => "申",
            Self::You => "酉",
            Self::Xu => "戌",
            Self::Hai => "亥",
        }
    }

    pub const fn hangul(self) -> &'static str {
        match self {
            Self::Zi => "자",
            Self::Chou => "축",
            Self::Yin => "인",
            Self::Mao => "묘",
            Self::Chen => "진",
            Self::Si => "사",
            Self::Wu => "오",
            Self::Wei => "미",
            Self::Shen => "신",
            Self::You => "유",
            Self::Xu => "술",
            Self::Hai => "해",
        }
    }

    /// Zodiac animal.
    pub const fn animal(self) -> &'static str {
        match self {
            Self::Zi => "Rat",
            Self::Chou => "Ox",
            Self::Yin => "Tiger",
            Self::Mao => "Rabbit",
            Self::Chen => "Dragon",
            Self::Si => "Snake",
            Self::Wu => "Horse",
            Self::Wei => "Goat",
            Self::Shen => "Monkey",
            Self::You => "Rooster",
            Self::Xu => "Dog",
            Self::Hai => "Pig",
        }
    }

    pub const fn element(self) -> Element {
        match self {
            Self::Yin | Self::Mao => Element::Wood,
            Self::Si | Self::Wu => Element::Fire,
            Self::Chen | Self::Xu | Self::Chou | Self::Wei => Element::Earth,
            Self::Shen | Self::You => Element::Metal,
            Self::Hai | Self::Zi => Element::Water,
        }
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::from_index(self.index())
    }

    /// Start hour of the branch's double-hour window (Zi = 23).
    pub const fn hour_window_start(self) -> u32 {
        (23 + 2 * self.index() as u32) % 24
    }

    /// `(start_hour, end_hour)` of the window; end is exclusive.
    pub const fn hour_window(self) -> (u32, u32) {
        let start = self.hour_window_start();
        (start, (start + 2) % 24)
    }

    /// Branch governing a clock reading. 23:00–00:59 is Zi, 01:00–02:59 Chou, …
    ///
    /// Windows open on whole odd hours, so the minute never matters.
    pub const fn from_hour(hour: u32) -> Branch {
        ALL_BRANCHES[(((hour + 1) / 2) % 12) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, b) in ALL_BRANCHES.iter().enumerate() {
            assert_eq!(b.index() as usize, i);
            assert_eq!(Branch::from_index(i as i64), *b);
        }
    }

    #[test]
    fn hour_boundaries() {
        assert_eq!(Branch::from_hour(23), Branch::Zi);
        assert_eq!(Branch::from_hour(0), Branch::Zi);
        assert_eq!(Branch::from_hour(1), Branch::Chou);
        assert_eq!(Branch::from_hour(2), Branch::Chou);
        assert_eq!(Branch::from_hour(11), Branch::Wu);
        assert_eq!(Branch::from_hour(12), Branch::Wu);
        assert_eq!(Branch::from_hour(13), Branch::Wei);
        assert_eq!(Branch::from_hour(22), Branch::Hai);
    }

    #[test]
    fn windows_consistent_with_from_hour() {
        for b in ALL_BRANCHES {
            let (start, end) = b.hour_window();
            assert_eq!(Branch::from_hour(start), b);
            assert_eq!(Branch::from_hour((start + 1) % 24), b);
            assert_ne!(Branch::from_hour(end), b);
        }
    }

    #[test]
    fn earth_branches() {
        let earth: Vec<_> = ALL_BRANCHES
            .iter()
            .filter(|b| b.element() == Element::Earth)
            .collect();
        assert_eq!(earth.len(), 4);
    }

    #[test]
    fn polarity_follows_parity() {
        assert_eq!(Branch::Zi.polarity(), Polarity::Yang);
        assert_eq!(Branch::Hai.polarity(), Polarity::Yin);
    }
}
