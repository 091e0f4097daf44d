//! Fixed branch and stem combination tables.
//!
//! Detection is pure lookup: every table here is static data.

use serde::Serialize;

use crate::branch::Branch;
use crate::element::Element;
use crate::stem::Stem;

/// Kind of three-branch frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TriadKind {
    /// Three-harmony frame (branches four apart).
    Harmony,
    /// Seasonal/directional frame (three consecutive branches).
    Directional,
}

/// A set of three branches that combine into one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Triad {
    pub kind: TriadKind,
    pub branches: [Branch; 3],
    pub element: Element,
}

impl Triad {
    pub fn contains(&self, branch: Branch) -> bool {
        self.branches.contains(&branch)
    }
}

const fn harmony(a: Branch, b: Branch, c: Branch, element: Element) -> Triad {
    Triad {
        kind: TriadKind::Harmony,
        branches: [a, b, c],
        element,
    }
}

const fn directional(a: Branch, b: Branch, c: Branch, element: Element) -> Triad {
    Triad {
        kind: TriadKind::Directional,
        branches: [a, b, c],
        element,
    }
}

/// Three-harmony frames.
pub static TRIADS: [Triad; 4] = [
    harmony(Branch::Shen, Branch::Zi, Branch::Chen, Element::Water),
    harmony(Branch::Yin, Branch::Wu, Branch::Xu, Element::Fire),
    harmony(Branch::Si, Branch::You, Branch::Chou, Element::Metal),
    harmony(Branch::Hai, Branch::Mao, Branch::Wei, Element::Wood),
];

/// Directional frames.
pub static DIRECTIONAL_TRIADS: [Triad; 4] = [
    directional(Branch::Yin, Branch::Mao, Branch::Chen, Element::Wood),
    directional(Branch::Si, Branch::Wu, Branch::Wei, Element::Fire),
    directional(Branch::Shen, Branch::You, Branch::Xu, Element::Metal),
    directional(Branch::Hai, Branch::Zi, Branch::Chou, Element::Water),
];

/// Six-harmony pairs with the element each pair transforms into.
pub static SIX_HARMONIES: [(Branch, Branch, Element); 6] = [
    (Branch::Zi, Branch::Chou, Element::Earth),
    (Branch::Yin, Branch::Hai, Element::Wood),
    (Branch::Mao, Branch::Xu, Element::Fire),
    (Branch::Chen, Branch::You, Element::Metal),
    (Branch::Si, Branch::Shen, Element::Water),
    (Branch::Wu, Branch::Wei, Element::Fire),
];

/// Directly opposed branches (six apart).
pub static CLASHES: [(Branch, Branch); 6] = [
    (Branch::Zi, Branch::Wu),
    (Branch::Chou, Branch::Wei),
    (Branch::Yin, Branch::Shen),
    (Branch::Mao, Branch::You),
    (Branch::Chen, Branch::Xu),
    (Branch::Si, Branch::Hai),
];

/// Stem unions (five apart) with the element each produces.
pub static STEM_COMBINATIONS: [(Stem, Stem, Element); 5] = [
    (Stem::Jia, Stem::Ji, Element::Earth),
    (Stem::Yi, Stem::Geng, Element::Metal),
    (Stem::Bing, Stem::Xin, Element::Water),
    (Stem::Ding, Stem::Ren, Element::Wood),
    (Stem::Wu, Stem::Gui, Element::Fire),
];

fn pair_matches(x: Branch, y: Branch, a: Branch, b: Branch) -> bool {
    (x == a && y == b) || (x == b && y == a)
}

/// Three-harmony frame containing `branch`. Every branch belongs to exactly one.
pub fn triad_of(branch: Branch) -> &'static Triad {
    match branch {
        Branch::Shen | Branch::Zi | Branch::Chen => &TRIADS[0],
        Branch::Yin | Branch::Wu | Branch::Xu => &TRIADS[1],
        Branch::Si | Branch::You | Branch::Chou => &TRIADS[2],
        Branch::Hai | Branch::Mao | Branch::Wei => &TRIADS[3],
    }
}

/// Two distinct branches in the same three-harmony frame.
pub fn shares_triad(a: Branch, b: Branch) -> bool {
    a != b && triad_of(a) == triad_of(b)
}

pub fn six_harmony_partner(branch: Branch) -> Branch {
    SIX_HARMONIES
        .iter()
        .find_map(|&(x, y, _)| {
            if x == branch {
                Some(y)
            } else if y == branch {
                Some(x)
            } else {
                None
            }
        })
        .unwrap_or(branch)
}

/// Element produced by a six-harmony pair, if `a` and `b` form one.
pub fn six_harmony_element(a: Branch, b: Branch) -> Option<Element> {
    SIX_HARMONIES
        .iter()
        .find(|&&(x, y, _)| pair_matches(a, b, x, y))
        .map(|&(_, _, e)| e)
}

pub fn is_six_harmony(a: Branch, b: Branch) -> bool {
    six_harmony_element(a, b).is_some()
}

/// The branch directly opposite.
pub const fn clash_partner(branch: Branch) -> Branch {
    Branch::from_index(branch.index() as i64 + 6)
}

pub fn is_clash(a: Branch, b: Branch) -> bool {
    CLASHES.iter().any(|&(x, y)| pair_matches(a, b, x, y))
}

/// Element produced by a stem union, if `a` and `b` form one.
pub fn stem_combination(a: Stem, b: Stem) -> Option<Element> {
    STEM_COMBINATIONS
        .iter()
        .find(|&&(x, y, _)| (a == x && b == y) || (a == y && b == x))
        .map(|&(_, _, e)| e)
}

/// Frames (either kind) whose three branches all appear in `branches`.
pub fn complete_triads(branches: &[Branch]) -> Vec<&'static Triad> {
    TRIADS
        .iter()
        .chain(DIRECTIONAL_TRIADS.iter())
        .filter(|t| t.branches.iter().all(|b| branches.contains(b)))
        .collect()
}
