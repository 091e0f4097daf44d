//! Pairwise relations between elements and between branches.
//!
//! [`relate`] is asymmetric: the first argument is the subject ("I").
//! Use [`relate_both_ways`] when both perspectives are needed.

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::combination::{is_clash, is_six_harmony, shares_triad};
use crate::element::Element;

/// Classification of an ordered pair of elements or branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationFact {
    Same,
    Generates,
    GeneratedBy,
    Controls,
    ControlledBy,
    TriadMember,
    SixHarmony,
    Clash,
    Neutral,
}

impl RelationFact {
    /// Descriptive phrase, from the first argument's point of view.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Same => "comparison",
            Self::Generates => "I produce",
            Self::GeneratedBy => "I receive",
            Self::Controls => "I restrain",
            Self::ControlledBy => "I am restrained",
            Self::TriadMember => "triad member",
            Self::SixHarmony => "six harmony",
            Self::Clash => "clash",
            Self::Neutral => "neutral",
        }
    }

    /// The same relation seen from the other side.
    pub const fn reversed(self) -> RelationFact {
        match self {
            Self::Generates => Self::GeneratedBy,
            Self::GeneratedBy => Self::Generates,
            Self::Controls => Self::ControlledBy,
            Self::ControlledBy => Self::Controls,
            other => other,
        }
    }

    /// Favorable pairings.
    pub const fn is_supportive(self) -> bool {
        matches!(
            self,
            Self::Same | Self::Generates | Self::GeneratedBy | Self::TriadMember | Self::SixHarmony
        )
    }
}

/// Relation of `a` to `b` in the five-element cycles.
///
/// Over five elements every ordered pair is one of Same, Generates,
/// GeneratedBy, Controls or ControlledBy.
pub fn relate(a: Element, b: Element) -> RelationFact {
    if a == b {
        RelationFact::Same
    } else if a.generates() == b {
        RelationFact::Generates
    } else if b.generates() == a {
        RelationFact::GeneratedBy
    } else if a.controls() == b {
        RelationFact::Controls
    } else if b.controls() == a {
        RelationFact::ControlledBy
    } else {
        RelationFact::Neutral
    }
}

/// `(relate(a, b), relate(b, a))`.
pub fn relate_both_ways(a: Element, b: Element) -> (RelationFact, RelationFact) {
    let forward = relate(a, b);
    (forward, forward.reversed())
}

/// Combination relation between two branches.
///
/// Precedence: Same, Clash, SixHarmony, TriadMember, then Neutral.
pub fn branch_relation(a: Branch, b: Branch) -> RelationFact {
    if a == b {
        RelationFact::Same
    } else if is_clash(a, b) {
        RelationFact::Clash
    } else if is_six_harmony(a, b) {
        RelationFact::SixHarmony
    } else if shares_triad(a, b) {
        RelationFact::TriadMember
    } else {
        RelationFact::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::ALL_BRANCHES;
    use crate::element::ALL_ELEMENTS;

    #[test]
    fn wood_fire_asymmetric() {
        assert_eq!(relate(Element::Wood, Element::Fire), RelationFact::Generates);
        assert_eq!(relate(Element::Fire, Element::Wood), RelationFact::GeneratedBy);
        assert_eq!(relate(Element::Wood, Element::Earth), RelationFact::Controls);
        assert_eq!(relate(Element::Earth, Element::Wood), RelationFact::ControlledBy);
    }

    #[test]
    fn every_ordered_pair_classified() {
        for a in ALL_ELEMENTS {
            for b in ALL_ELEMENTS {
                let (ab, ba) = relate_both_ways(a, b);
                assert_ne!(ab, RelationFact::Neutral);
                assert_eq!(ab.reversed(), ba);
                if a != b {
                    assert_ne!(ab, ba);
                }
            }
        }
    }

    #[test]
    fn labels() {
        assert_eq!(RelationFact::Same.label(), "comparison");
        assert_eq!(RelationFact::GeneratedBy.label(), "I receive");
        assert_eq!(RelationFact::ControlledBy.label(), "I am restrained");
    }

    #[test]
    fn branch_relation_precedence() {
        assert_eq!(branch_relation(Branch::Zi, Branch::Zi), RelationFact::Same);
        assert_eq!(branch_relation(Branch::Zi, Branch::Wu), RelationFact::Clash);
        assert_eq!(branch_relation(Branch::Zi, Branch::Chou), RelationFact::SixHarmony);
        assert_eq!(branch_relation(Branch::Zi, Branch::Chen), RelationFact::TriadMember);
        assert_eq!(branch_relation(Branch::Zi, Branch::Mao), RelationFact::Neutral);
    }

    #[test]
    fn branch_relation_symmetric() {
        for a in ALL_BRANCHES {
            for b in ALL_BRANCHES {
                assert_eq!(branch_relation(a, b), branch_relation(b, a));
            }
        }
    }
}
