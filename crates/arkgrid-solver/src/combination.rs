//! Capacity-bounded subset generation.
//!
//! Enumerates every set of astrogems a single core can hold: at most
//! `max_gems` units whose willpower fits the core's capacity.

use arkgrid_core::{Astrogem, Category};
use smallvec::SmallVec;

/// A subset of the unit pool that fits one core.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Combination {
    /// Indices into the unit pool, ascending.
    pub gems: SmallVec<[usize; 4]>,
    pub willpower: u32,
    pub points: u32,
}

impl Combination {
    /// The empty subset.
    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.gems.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.gems.is_empty()
    }

    fn push(&mut self, index: usize, gem: &Astrogem) {
        self.gems.push(index);
        self.willpower += gem.willpower;
        self.points = self.points.saturating_add(gem.points);
    }

    fn pop(&mut self, gem: &Astrogem) {
        self.gems.pop();
        self.willpower -= gem.willpower;
        self.points -= gem.points.min(self.points);
    }
}

/// Generates the feasible subsets of one core.
///
/// Units are scanned in pool order and subsets only grow forward, so each
/// subset is produced exactly once and never holds a unit twice. The empty
/// subset always comes first.
///
/// # Examples
///
/// ```
/// use arkgrid_core::{Astrogem, Category};
/// use arkgrid_solver::CombinationGenerator;
///
/// let pool = vec![
///     Astrogem::new("a", Category::Order, 5, 10),
///     Astrogem::new("b", Category::Order, 5, 4),
///     Astrogem::new("c", Category::Chaos, 1, 9),
/// ];
/// let combos = CombinationGenerator::new(9, 4).generate(&pool, Category::Order);
///
/// // {}, {a}, {b}; {a, b} needs 10 willpower
/// assert_eq!(combos.len(), 3);
/// assert!(combos[0].is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombinationGenerator {
    max_willpower: u32,
    max_gems: usize,
}

impl CombinationGenerator {
    pub fn new(max_willpower: u32, max_gems: usize) -> Self {
        Self {
            max_willpower,
            max_gems,
        }
    }

    /// Enumerates the subsets of `pool` units of `category` that fit.
    pub fn generate(&self, pool: &[Astrogem], category: Category) -> Vec<Combination> {
        let compatible: Vec<usize> = pool
            .iter()
            .enumerate()
            .filter(|(_, gem)| gem.category == category)
            .map(|(index, _)| index)
            .collect();

        let mut combinations = vec![Combination::empty()];
        let mut current = Combination::empty();
        self.extend(pool, &compatible, &mut current, &mut combinations);
        combinations
    }

    fn extend(
        &self,
        pool: &[Astrogem],
        compatible: &[usize],
        current: &mut Combination,
        out: &mut Vec<Combination>,
    ) {
        if current.len() >= self.max_gems {
            return;
        }

        for (offset, &index) in compatible.iter().enumerate() {
            let gem = &pool[index];
            let fits = current
                .willpower
                .checked_add(gem.willpower)
                .is_some_and(|willpower| willpower <= self.max_willpower);
            if !fits {
                continue;
            }

            current.push(index, gem);
            out.push(current.clone());
            self.extend(pool, &compatible[offset + 1..], current, out);
            current.pop(gem);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use arkgrid_test::fixtures::{chaos_gem, order_gem};

    fn pool(n: u32) -> Vec<Astrogem> {
        (0..n)
            .map(|i| order_gem(&format!("g{}", i), 3 + i % 3, 4 + i % 4))
            .collect()
    }

    #[test]
    fn test_empty_pool_yields_empty_subset() {
        let combos = CombinationGenerator::new(17, 4).generate(&[], Category::Order);
        assert_eq!(combos, vec![Combination::empty()]);
    }

    #[test]
    fn test_zero_capacity_yields_empty_subset() {
        let combos = CombinationGenerator::new(0, 4).generate(&pool(5), Category::Order);
        assert_eq!(combos.len(), 1);
        assert!(combos[0].is_empty());
    }

    #[test]
    fn test_other_category_is_ignored() {
        let pool = vec![chaos_gem("c1", 3, 5), order_gem("o1", 3, 5)];
        let combos = CombinationGenerator::new(17, 4).generate(&pool, Category::Order);

        assert_eq!(combos.len(), 2);
        assert_eq!(combos[1].gems.as_slice(), &[1]);
    }

    #[test]
    fn test_all_subsets_when_capacity_is_ample() {
        // 6 units, at most 4 each: C(6,0..=4) = 1 + 6 + 15 + 20 + 15
        let combos = CombinationGenerator::new(u32::MAX, 4).generate(&pool(6), Category::Order);
        assert_eq!(combos.len(), 57);
    }

    #[test]
    fn test_gem_limit() {
        let combos = CombinationGenerator::new(u32::MAX, 2).generate(&pool(5), Category::Order);
        assert_eq!(combos.len(), 1 + 5 + 10);
        assert!(combos.iter().all(|c| c.len() <= 2));
    }

    #[test]
    fn test_capacity_and_totals_respected() {
        let pool = pool(8);
        let combos = CombinationGenerator::new(12, 4).generate(&pool, Category::Order);

        for combo in &combos {
            let willpower: u32 = combo.gems.iter().map(|&i| pool[i].willpower).sum();
            let points: u32 = combo.gems.iter().map(|&i| pool[i].points).sum();
            assert!(willpower <= 12);
            assert_eq!(combo.willpower, willpower);
            assert_eq!(combo.points, points);
        }
    }

    #[test]
    fn test_no_duplicates_and_forward_only() {
        let combos = CombinationGenerator::new(14, 4).generate(&pool(9), Category::Order);

        let mut seen = HashSet::new();
        for combo in &combos {
            assert!(combo.gems.windows(2).all(|w| w[0] < w[1]));
            assert!(seen.insert(combo.gems.clone()), "duplicate {:?}", combo.gems);
        }
    }

    #[test]
    fn test_generation_order() {
        let pool = vec![
            order_gem("a", 1, 1),
            order_gem("b", 1, 1),
            order_gem("c", 1, 1),
        ];
        let combos = CombinationGenerator::new(9, 4).generate(&pool, Category::Order);
        let order: Vec<Vec<usize>> = combos.iter().map(|c| c.gems.to_vec()).collect();

        assert_eq!(
            order,
            vec![
                vec![],
                vec![0],
                vec![0, 1],
                vec![0, 1, 2],
                vec![0, 2],
                vec![1],
                vec![1, 2],
                vec![2],
            ]
        );
    }
}
