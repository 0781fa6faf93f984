//! Category partitioning.
//!
//! An astrogem only fits cores of its own category, so Order and Chaos
//! cores never compete for a unit. Each category is solved on its own and
//! the results are merged back into input order.

use arkgrid_core::{Astrogem, Category, Core, SolverResult};

/// The cores and units of one category.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition {
    pub category: Category,
    pub cores: Vec<Core>,
    /// Input position of each core in `cores`.
    pub core_indices: Vec<usize>,
    pub astrogems: Vec<Astrogem>,
}

impl Partition {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cores.is_empty()
    }
}

/// Splits a grid by category and merges the solved parts.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryPartitioner;

impl CategoryPartitioner {
    /// Returns one partition per category, Order first.
    ///
    /// Partitions without cores are still returned.
    pub fn partition(cores: &[Core], astrogems: &[Astrogem]) -> Vec<Partition> {
        Category::ALL
            .into_iter()
            .map(|category| {
                let (core_indices, members): (Vec<usize>, Vec<Core>) = cores
                    .iter()
                    .enumerate()
                    .filter(|(_, core)| core.category() == category)
                    .map(|(index, core)| (index, core.clone()))
                    .unzip();
                Partition {
                    category,
                    cores: members,
                    core_indices,
                    astrogems: astrogems
                        .iter()
                        .filter(|gem| gem.category == category)
                        .cloned()
                        .collect(),
                }
            })
            .collect()
    }

    /// Places every partition's results back at their cores' input
    /// positions.
    ///
    /// `solved` pairs each partition with its results in partition order.
    pub fn merge(
        core_count: usize,
        solved: Vec<(Partition, Vec<SolverResult>)>,
    ) -> Vec<SolverResult> {
        let mut slots: Vec<Option<SolverResult>> = vec![None; core_count];
        for (partition, results) in solved {
            for (index, result) in partition.core_indices.into_iter().zip(results) {
                if let Some(slot) = slots.get_mut(index) {
                    *slot = Some(result);
                }
            }
        }
        slots.into_iter().flatten().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arkgrid_core::{CoreType, Rarity};
    use arkgrid_test::fixtures::{chaos_gem, core, order_gem, star};

    fn mixed_cores() -> Vec<Core> {
        vec![
            core("chaos-a", CoreType::ChaosOfTheSun, Rarity::Epic),
            star("order-a", Rarity::Relic),
            core("chaos-b", CoreType::ChaosOfTheStar, Rarity::Legendary),
            star("order-b", Rarity::Epic),
        ]
    }

    #[test]
    fn test_partition_by_category() {
        let gems = vec![order_gem("o", 3, 4), chaos_gem("c", 3, 4), order_gem("o2", 1, 1)];
        let parts = CategoryPartitioner::partition(&mixed_cores(), &gems);

        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].category, Category::Order);
        assert_eq!(parts[0].core_indices, vec![1, 3]);
        assert_eq!(parts[0].astrogems.len(), 2);
        assert_eq!(parts[1].category, Category::Chaos);
        assert_eq!(parts[1].core_indices, vec![0, 2]);
        assert_eq!(parts[1].astrogems[0].id, "c");
    }

    #[test]
    fn test_empty_category_kept() {
        let cores = vec![star("only", Rarity::Epic)];
        let parts = CategoryPartitioner::partition(&cores, &[]);

        assert!(!parts[0].is_empty());
        assert!(parts[1].is_empty());
    }

    #[test]
    fn test_merge_restores_input_order() {
        let cores = mixed_cores();
        let parts = CategoryPartitioner::partition(&cores, &[]);
        let solved = parts
            .into_iter()
            .map(|p| {
                let results = p
                    .cores
                    .iter()
                    .map(|c| SolverResult::empty(c.id.clone()))
                    .collect();
                (p, results)
            })
            .collect();

        let merged = CategoryPartitioner::merge(cores.len(), solved);
        let ids: Vec<&str> = merged.iter().map(|r| r.core_id.as_str()).collect();
        assert_eq!(ids, vec!["chaos-a", "order-a", "chaos-b", "order-b"]);
    }
}
