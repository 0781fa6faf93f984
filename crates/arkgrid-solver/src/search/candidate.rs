//! Scored candidate subsets of one core.

use arkgrid_core::{Astrogem, Core, GridScore, Result, RuleSet};
use arkgrid_scoring::CoreScorer;

use crate::combination::{Combination, CombinationGenerator};

/// A feasible subset together with its standalone score.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub combination: Combination,
    pub score: GridScore,
}

/// A core at one depth of the search with its candidates, best first.
#[derive(Debug, Clone)]
pub struct CoreLevel {
    /// Position of the core in the partition as supplied.
    pub core_index: usize,
    pub core_id: String,
    pub scorer: CoreScorer,
    pub candidates: Vec<Candidate>,
}

impl CoreLevel {
    /// Enumerates and scores every subset `core` can hold.
    ///
    /// Sorting is stable, so among equal scores the generation order is kept
    /// and the empty subset, generated first, stays ahead of any non-empty
    /// subset of equal score.
    pub fn build(
        rules: &RuleSet,
        core_index: usize,
        core: &Core,
        pool: &[Astrogem],
    ) -> Result<Self> {
        let scorer = CoreScorer::for_core(rules, core)?;
        let generator =
            CombinationGenerator::new(scorer.max_willpower(), rules.max_astrogems_per_core);

        let mut candidates: Vec<Candidate> = generator
            .generate(pool, core.category())
            .into_iter()
            .map(|combination| Candidate {
                score: scorer.score(combination.points),
                combination,
            })
            .collect();
        candidates.sort_by(|a, b| b.score.cmp(&a.score));

        Ok(Self {
            core_index,
            core_id: core.id.clone(),
            scorer,
            candidates,
        })
    }

    #[inline]
    pub fn max_score(&self) -> GridScore {
        self.scorer.max_score()
    }
}
