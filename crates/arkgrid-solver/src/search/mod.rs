//! Exhaustive assignment search using branch-and-bound.
//!
//! Cores of one partition are decided one at a time in a fixed order. At
//! each depth the candidate subsets of the core are tried best score
//! first, skipping any that reuse an astrogem already placed. A branch is
//! cut as soon as its optimistic bound cannot beat the best complete
//! assignment found so far, so the result is optimal whenever the search
//! runs to completion.

mod bounder;
mod candidate;
mod state;


use std::cmp::Reverse;

use arkgrid_config::{CoreOrder, SearchConfig};
use arkgrid_core::{Astrogem, Category, Core, GridScore, Result, RuleSet, SolverResult};
use arkgrid_scoring::DestinyPair;
use tracing::{debug, trace, warn};

use crate::stats::SearchStats;

pub use bounder::{DestinyBound, ScoreBounder};
pub use candidate::{Candidate, CoreLevel};
pub use state::{Incumbent, SearchState};

/// Optimal assignment of one partition.
#[derive(Debug, Clone)]
pub struct PartitionSolution {
    pub category: Category,
    /// One result per core, in the order the cores were supplied.
    pub results: Vec<SolverResult>,
    /// Sum of core scores plus the destiny bonus if earned.
    pub score: GridScore,
    pub destiny_bonus: GridScore,
    pub stats: SearchStats,
    /// False when the node limit stopped the search early.
    pub exhaustive: bool,
}

/// Branch-and-bound search over the cores of one category.
///
/// # Example
///
/// ```
/// use arkgrid_config::SearchConfig;
/// use arkgrid_core::{Astrogem, Category, Core, CoreType, GridScore, Rarity, RuleSet};
/// use arkgrid_solver::search::ExhaustiveSearch;
///
/// let rules = RuleSet::default();
/// let config = SearchConfig::default();
/// let cores = vec![Core::new("c", CoreType::OrderOfTheStar, Rarity::Epic)];
/// let pool = vec![Astrogem::new("g", Category::Order, 5, 10)];
///
/// let solution = ExhaustiveSearch::new(&rules, &config)
///     .solve(Category::Order, &cores, &pool)
///     .unwrap();
/// assert_eq!(solution.score, GridScore::of(1));
/// assert!(solution.exhaustive);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ExhaustiveSearch<'a> {
    rules: &'a RuleSet,
    config: &'a SearchConfig,
}

impl<'a> ExhaustiveSearch<'a> {
    pub fn new(rules: &'a RuleSet, config: &'a SearchConfig) -> Self {
        Self { rules, config }
    }

    /// Finds the best assignment of `pool` units to `cores`.
    ///
    /// Every core must belong to `category`; units of other categories are
    /// never placed.
    ///
    /// # Errors
    ///
    /// Fails when a core's rarity has no rule.
    pub fn solve(
        &self,
        category: Category,
        cores: &[Core],
        pool: &[Astrogem],
    ) -> Result<PartitionSolution> {
        let mut stats = SearchStats::default();
        stats.start();

        if cores.is_empty() {
            return Ok(PartitionSolution {
                category,
                results: Vec::new(),
                score: GridScore::ZERO,
                destiny_bonus: GridScore::ZERO,
                stats,
                exhaustive: true,
            });
        }

        let tree = SearchTree::build(self.rules, self.config, cores, pool)?;
        let mut state = SearchState::new(pool.len(), tree.levels.len(), self.config.node_limit);
        state.stats = stats;
        for level in &tree.levels {
            state.stats.record_candidates(level.candidates.len());
        }

        debug!(
            event = "partition_start",
            category = %category,
            cores = cores.len(),
            units = pool.len(),
            candidates = state.stats.candidates,
            ceiling = %tree.bounder.remaining(0),
        );

        tree.descend(&mut state, 0, GridScore::ZERO);

        let (best, stats, terminated) = state.into_best();
        if terminated {
            warn!(
                event = "node_limit_reached",
                category = %category,
                nodes = stats.nodes_explored,
                found = best.is_some(),
            );
        }

        let solution = tree.into_solution(category, pool, best, stats, !terminated);
        debug!(
            event = "partition_end",
            category = %category,
            score = %solution.score,
            destiny_bonus = %solution.destiny_bonus,
            nodes = solution.stats.nodes_explored,
            pruned = solution.stats.pruned,
            conflicts = solution.stats.conflicts,
            duration_ms = solution.stats.elapsed().as_millis() as u64,
        );
        Ok(solution)
    }
}

/// Order in which the cores of a partition are decided.
///
/// Returns indices into `cores`. Sorting is stable, so ties keep their
/// input order.
///
/// # Errors
///
/// [`CoreOrder::TightestCapacityFirst`] fails when a rarity has no rule.
pub fn decision_order(cores: &[Core], rules: &RuleSet, order: CoreOrder) -> Result<Vec<usize>> {
    let mut indices: Vec<usize> = (0..cores.len()).collect();
    match order {
        CoreOrder::Input => {}
        CoreOrder::RarityPriority => indices.sort_by_key(|&i| Reverse(cores[i].rarity)),
        CoreOrder::TightestCapacityFirst => {
            let capacities = cores
                .iter()
                .map(|core| rules.rarity(core.rarity).map(|rule| rule.max_willpower))
                .collect::<Result<Vec<_>>>()?;
            indices.sort_by_key(|&i| capacities[i]);
        }
    }
    Ok(indices)
}

/// Candidates of every core in decision order plus their bounds.
struct SearchTree {
    levels: Vec<CoreLevel>,
    bounder: ScoreBounder,
    enable_pruning: bool,
}

impl SearchTree {
    fn build(
        rules: &RuleSet,
        config: &SearchConfig,
        cores: &[Core],
        pool: &[Astrogem],
    ) -> Result<Self> {
        let order = decision_order(cores, rules, config.core_order)?;
        let levels = order
            .iter()
            .map(|&index| CoreLevel::build(rules, index, &cores[index], pool))
            .collect::<Result<Vec<_>>>()?;

        let depth_of = |core_index: usize| order.iter().position(|&i| i == core_index);
        let destiny = DestinyPair::locate(cores).and_then(|pair| {
            Some(DestinyBound {
                sun_depth: depth_of(pair.sun)?,
                moon_depth: depth_of(pair.moon)?,
                threshold: rules.destiny_threshold(),
                bonus: rules.destiny_bonus(),
            })
        });

        let max_scores: Vec<GridScore> = levels.iter().map(CoreLevel::max_score).collect();
        Ok(Self {
            bounder: ScoreBounder::new(&max_scores, destiny),
            levels,
            enable_pruning: config.enable_pruning,
        })
    }

    fn descend(&self, state: &mut SearchState, depth: usize, running: GridScore) {
        let Some(level) = self.levels.get(depth) else {
            let total = running + self.bounder.earned_bonus(state.decided());
            if state.offer(total) {
                trace!(
                    event = "incumbent",
                    score = %total,
                    nodes = state.stats.nodes_explored,
                );
            }
            return;
        };

        for (index, candidate) in level.candidates.iter().enumerate() {
            if self.enable_pruning {
                if let Some(best) = state.best_score() {
                    if self.bounder.level_bound(running, candidate.score, state.decided()) <= best {
                        state.stats.record_pruned(level.candidates.len() - index);
                        break;
                    }
                    let bound = self.bounder.candidate_bound(
                        running,
                        candidate.score,
                        candidate.combination.points,
                        state.decided(),
                    );
                    if bound <= best {
                        state.stats.record_pruned(1);
                        continue;
                    }
                }
            }

            if state.conflicts(candidate) {
                state.stats.record_conflict();
                continue;
            }
            if !state.enter_node() {
                return;
            }

            state.with_committed(index, candidate, |state| {
                self.descend(state, depth + 1, running + candidate.score)
            });
            if state.is_terminated() {
                return;
            }
        }
    }

    fn into_solution(
        self,
        category: Category,
        pool: &[Astrogem],
        best: Option<Incumbent>,
        stats: SearchStats,
        exhaustive: bool,
    ) -> PartitionSolution {
        let mut slots: Vec<Option<SolverResult>> = vec![None; self.levels.len()];
        let mut points = Vec::with_capacity(self.levels.len());
        let chosen = best.as_ref().map(|b| b.chosen.as_slice()).unwrap_or(&[]);

        for (depth, level) in self.levels.iter().enumerate() {
            let combination = chosen
                .get(depth)
                .map(|&index| &level.candidates[index].combination);
            let astrogems: Vec<Astrogem> = combination
                .map(|c| c.gems.iter().map(|&g| pool[g].clone()).collect())
                .unwrap_or_default();
            points.push(combination.map_or(0, |c| c.points));

            slots[level.core_index] = Some(level.scorer.evaluate(level.core_id.clone(), astrogems));
        }

        PartitionSolution {
            category,
            results: slots.into_iter().flatten().collect(),
            score: best.map_or(GridScore::ZERO, |b| b.score),
            destiny_bonus: self.bounder.earned_bonus(&points),
            stats,
            exhaustive,
        }
    }
}
