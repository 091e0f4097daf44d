//! Five-element weight vector of a chart.
//!
//! Each pillar adds 2 for its stem's element and 1 for its branch's element,
//! so every chart totals 12.

use serde::Serialize;

use crate::element::{ALL_ELEMENTS, Element};
use crate::pillar::FourPillars;

/// Weight contributed by a stem.
pub const STEM_WEIGHT: u32 = 2;

/// Weight contributed by a branch.
pub const BRANCH_WEIGHT: u32 = 1;

/// Total weight of any four-pillar chart.
pub const CHART_TOTAL_WEIGHT: u32 = 4 * STEM_WEIGHT + 4 * BRANCH_WEIGHT;

/// Largest max − min spread still classed as balanced.
pub const BALANCE_SPREAD_LIMIT: u32 = 3;

/// Spread-based balance label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Balance {
    Balanced,
    Imbalanced,
}

impl Balance {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Balanced => "balanced",
            Self::Imbalanced => "imbalanced",
        }
    }
}

/// Weight per element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct ElementScores {
    pub wood: u32,
    pub fire: u32,
    pub earth: u32,
    pub metal: u32,
    pub water: u32,
}

impl ElementScores {
    /// Score a chart: stems weigh 2, branches 1.
    pub fn from_pillars(pillars: &FourPillars) -> Self {
        let mut scores = Self::default();
        for (_, p) in pillars.iter() {
            scores.add(p.stem.element(), STEM_WEIGHT);
            scores.add(p.branch.element(), BRANCH_WEIGHT);
        }
        scores
    }

    /// Build from counts in generating-cycle order (wood, fire, earth, metal, water).
    pub const fn from_counts(counts: [u32; 5]) -> Self {
        Self {
            wood: counts[0],
            fire: counts[1],
            earth: counts[2],
            metal: counts[3],
            water: counts[4],
        }
    }

    pub const fn get(&self, element: Element) -> u32 {
        match element {
            Element::Wood => self.wood,
            Element::Fire => self.fire,
            Element::Earth => self.earth,
            Element::Metal => self.metal,
            Element::Water => self.water,
        }
    }

    fn slot(&mut self, element: Element) -> &mut u32 {
        match element {
            Element::Wood => &mut self.wood,
            Element::Fire => &mut self.fire,
            Element::Earth => &mut self.earth,
            Element::Metal => &mut self.metal,
            Element::Water => &mut self.water,
        }
    }

    pub fn add(&mut self, element: Element, weight: u32) {
        *self.slot(element) += weight;
    }

    /// `(element, weight)` in generating-cycle order.
    pub fn iter(&self) -> impl Iterator<Item = (Element, u32)> + '_ {
        ALL_ELEMENTS.iter().map(move |&e| (e, self.get(e)))
    }

    pub fn total(&self) -> u32 {
        self.iter().map(|(_, w)| w).sum()
    }

    fn max(&self) -> u32 {
        self.iter().map(|(_, w)| w).max().unwrap_or(0)
    }

    fn min(&self) -> u32 {
        self.iter().map(|(_, w)| w).min().unwrap_or(0)
    }

    /// Every element at the maximum weight (ties included). Empty for an
    /// all-zero vector.
    pub fn dominant(&self) -> Vec<Element> {
        let max = self.max();
        if max == 0 {
            return Vec::new();
        }
        self.iter().filter(|&(_, w)| w == max).map(|(e, _)| e).collect()
    }

    /// Every element with zero weight.
    pub fn lacking(&self) -> Vec<Element> {
        self.iter().filter(|&(_, w)| w == 0).map(|(e, _)| e).collect()
    }

    pub fn spread(&self) -> u32 {
        self.max() - self.min()
    }

    pub fn balance(&self) -> Balance {
        if self.spread() <= BALANCE_SPREAD_LIMIT {
            Balance::Balanced
        } else {
            Balance::Imbalanced
        }
    }

    /// Share of the total per element, in percent.
    pub fn percentages(&self) -> [(Element, f64); 5] {
        let total = self.total().max(1) as f64;
        ALL_ELEMENTS.map(|e| (e, self.get(e) as f64 * 100.0 / total))
    }
}
