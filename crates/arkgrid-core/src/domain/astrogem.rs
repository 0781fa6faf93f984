//! Astrogems: the items placed into cores.

use serde::{Deserialize, Serialize};

use super::Category;

/// An astrogem owned by the player.
///
/// `quantity` lets one definition stand for several identical physical
/// gems. The solver expands it into independent units before searching.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Astrogem {
    pub id: String,
    pub category: Category,
    /// Capacity cost counted against the core's max willpower.
    pub willpower: u32,
    /// Value counted against the core's breakpoints.
    pub points: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
}

impl Astrogem {
    pub fn new(id: impl Into<String>, category: Category, willpower: u32, points: u32) -> Self {
        Self {
            id: id.into(),
            category,
            willpower,
            points,
            quantity: None,
        }
    }

    /// Sets the number of physical copies this definition represents.
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Number of physical units, one when no quantity is given.
    #[inline]
    pub fn copies(&self) -> u32 {
        self.quantity.unwrap_or(1)
    }
}

/// Sums the points of the given astrogems.
pub fn total_points<'a>(gems: impl IntoIterator<Item = &'a Astrogem>) -> u32 {
    gems.into_iter()
        .fold(0u32, |sum, gem| sum.saturating_add(gem.points))
}

/// Sums the willpower of the given astrogems.
pub fn total_willpower<'a>(gems: impl IntoIterator<Item = &'a Astrogem>) -> u32 {
    gems.into_iter()
        .fold(0u32, |sum, gem| sum.saturating_add(gem.willpower))
}
