//! Cores, their types, categories and rarities.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two mutually exclusive partitions of the grid.
///
/// Cores only accept astrogems of their own category, so the two categories
/// are solved as independent sub-problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
pub enum Category {
    Order,
    Chaos,
}

impl Category {
    /// Both categories in solving order.
    pub const ALL: [Category; 2] = [Category::Order, Category::Chaos];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Order => write!(f, "Order"),
            Category::Chaos => write!(f, "Chaos"),
        }
    }
}

/// Rarity tier of a core, ordered from lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
pub enum Rarity {
    Epic,
    Legendary,
    Relic,
    Ancient,
}

impl Rarity {
    /// Every rarity, lowest first.
    pub const ALL: [Rarity; 4] = [
        Rarity::Epic,
        Rarity::Legendary,
        Rarity::Relic,
        Rarity::Ancient,
    ];
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rarity::Epic => write!(f, "Epic"),
            Rarity::Legendary => write!(f, "Legendary"),
            Rarity::Relic => write!(f, "Relic"),
            Rarity::Ancient => write!(f, "Ancient"),
        }
    }
}

/// Role of the two cores whose joint qualification unlocks the destiny bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DestinyRole {
    Sun,
    Moon,
}

/// The six core types of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum CoreType {
    #[serde(rename = "Order of the Sun")]
    OrderOfTheSun,
    #[serde(rename = "Order of the Moon")]
    OrderOfTheMoon,
    #[serde(rename = "Order of the Star")]
    OrderOfTheStar,
    #[serde(rename = "Chaos of the Sun")]
    ChaosOfTheSun,
    #[serde(rename = "Chaos of the Moon")]
    ChaosOfTheMoon,
    #[serde(rename = "Chaos of the Star")]
    ChaosOfTheStar,
}

impl CoreType {
    /// Returns the category of astrogems this core type accepts.
    pub fn category(self) -> Category {
        match self {
            CoreType::OrderOfTheSun | CoreType::OrderOfTheMoon | CoreType::OrderOfTheStar => {
                Category::Order
            }
            CoreType::ChaosOfTheSun | CoreType::ChaosOfTheMoon | CoreType::ChaosOfTheStar => {
                Category::Chaos
            }
        }
    }

    /// Returns the destiny role carried by this core type, if any.
    ///
    /// Only the Order Sun and Order Moon cores take part in the destiny bonus.
    pub fn destiny_role(self) -> Option<DestinyRole> {
        match self {
            CoreType::OrderOfTheSun => Some(DestinyRole::Sun),
            CoreType::OrderOfTheMoon => Some(DestinyRole::Moon),
            _ => None,
        }
    }
}

impl fmt::Display for CoreType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CoreType::OrderOfTheSun => "Order of the Sun",
            CoreType::OrderOfTheMoon => "Order of the Moon",
            CoreType::OrderOfTheStar => "Order of the Star",
            CoreType::ChaosOfTheSun => "Chaos of the Sun",
            CoreType::ChaosOfTheMoon => "Chaos of the Moon",
            CoreType::ChaosOfTheStar => "Chaos of the Star",
        };
        f.write_str(name)
    }
}

/// A core slot chosen by the player.
///
/// Willpower capacity and breakpoints are not stored on the core: they are
/// looked up from the rule table by rarity.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Core {
    pub id: String,
    #[serde(rename = "type")]
    pub core_type: CoreType,
    pub rarity: Rarity,
}

impl Core {
    pub fn new(id: impl Into<String>, core_type: CoreType, rarity: Rarity) -> Self {
        Self {
            id: id.into(),
            core_type,
            rarity,
        }
    }

    #[inline]
    pub fn category(&self) -> Category {
        self.core_type.category()
    }

    #[inline]
    pub fn destiny_role(&self) -> Option<DestinyRole> {
        self.core_type.destiny_role()
    }
}
