//! Ready-made grids.
//!
//! # Example
//!
//! ```
//! use arkgrid_test::Grid;
//!
//! let grid = Grid::destiny_reachable();
//! assert_eq!(grid.cores.len(), 2);
//! assert_eq!(grid.astrogems.len(), 4);
//! ```

use arkgrid_core::{Astrogem, Core, CoreType, Rarity};

use crate::fixtures::{chaos_gem, core, moon, order_gem, star, sun};

/// A set of cores and the astrogems available to them.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    pub cores: Vec<Core>,
    pub astrogems: Vec<Astrogem>,
}

impl Grid {
    pub fn new(cores: Vec<Core>, astrogems: Vec<Astrogem>) -> Self {
        Self { cores, astrogems }
    }

    /// One Epic core and a single 5 willpower / 10 point gem: score 1.
    pub fn single_epic() -> Self {
        Self::new(
            vec![core("epic", CoreType::OrderOfTheStar, Rarity::Epic)],
            vec![order_gem("g1", 5, 10)],
        )
    }

    /// Legendary Sun and Moon with enough gems for both to reach 14.
    ///
    /// Optimum: 6 + 6 plus the destiny bonus of 10.
    pub fn destiny_reachable() -> Self {
        Self::new(
            vec![sun("sun", Rarity::Legendary), moon("moon", Rarity::Legendary)],
            vec![
                order_gem("a", 6, 7),
                order_gem("b", 6, 7),
                order_gem("c", 5, 7),
                order_gem("d", 6, 7),
            ],
        )
    }

    /// Legendary Sun and Moon sharing one pair of gems that reaches 14.
    ///
    /// Either core can reach 14, never both: the optimum is 6 without bonus.
    pub fn destiny_contested() -> Self {
        Self::new(
            vec![sun("sun", Rarity::Legendary), moon("moon", Rarity::Legendary)],
            vec![
                order_gem("a", 6, 7),
                order_gem("b", 6, 7),
                order_gem("c", 3, 4),
            ],
        )
    }

    /// Three Order cores and three Chaos cores with gems of both categories.
    pub fn full_grid() -> Self {
        Self::new(
            vec![
                sun("order-sun", Rarity::Relic),
                moon("order-moon", Rarity::Legendary),
                star("order-star", Rarity::Ancient),
                core("chaos-sun", CoreType::ChaosOfTheSun, Rarity::Relic),
                core("chaos-moon", CoreType::ChaosOfTheMoon, Rarity::Epic),
                core("chaos-star", CoreType::ChaosOfTheStar, Rarity::Legendary),
            ],
            vec![
                order_gem("o1", 4, 5),
                order_gem("o2", 5, 5),
                order_gem("o3", 3, 4),
                order_gem("o4", 4, 4),
                order_gem("o5", 5, 6),
                order_gem("o6", 3, 3),
                order_gem("o7", 4, 5),
                order_gem("o8", 6, 6),
                order_gem("o9", 5, 4).with_quantity(2),
                chaos_gem("c1", 4, 5),
                chaos_gem("c2", 5, 5),
                chaos_gem("c3", 3, 4),
                chaos_gem("c4", 4, 4),
                chaos_gem("c5", 5, 6).with_quantity(3),
                chaos_gem("c6", 3, 3),
            ],
        )
    }
}
