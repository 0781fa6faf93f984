//! The Ark Grid solver.
//!
//! Validates the input, expands replicated astrogems, splits the grid by
//! category, searches each partition and merges the results.

use std::collections::HashSet;
use std::path::Path;
use std::time::Instant;

use arkgrid_config::SolverConfig;
use arkgrid_core::{
    ArkGridError, Astrogem, Category, Core, GridScore, Result, RuleSet, SolverResult,
};
use arkgrid_scoring::{destiny_bonus, max_possible_score};
use tracing::info;

use crate::expand::expand_astrogems;
use crate::partition::CategoryPartitioner;
use crate::search::ExhaustiveSearch;
use crate::stats::SearchStats;

/// Outcome of searching one category.
#[derive(Debug, Clone)]
pub struct PartitionSummary {
    pub category: Category,
    pub core_count: usize,
    pub score: GridScore,
    pub exhaustive: bool,
    pub stats: SearchStats,
}

/// A solved grid.
#[derive(Debug, Clone)]
pub struct GridSolution {
    /// One result per core, in input order.
    pub results: Vec<SolverResult>,
    pub destiny_bonus: GridScore,
    /// Sum of core scores plus the destiny bonus.
    pub total_score: GridScore,
    /// False when a node limit cut any partition short.
    pub exhaustive: bool,
    pub partitions: Vec<PartitionSummary>,
}

impl GridSolution {
    fn empty() -> Self {
        Self {
            results: Vec::new(),
            destiny_bonus: GridScore::ZERO,
            total_score: GridScore::ZERO,
            exhaustive: true,
            partitions: Vec::new(),
        }
    }

    /// Counters of every partition combined.
    pub fn stats(&self) -> SearchStats {
        let mut stats = SearchStats::default();
        for partition in &self.partitions {
            stats.merge(&partition.stats);
        }
        stats
    }
}

/// Assigns astrogems to cores for the highest total score.
///
/// # Example
///
/// ```
/// use arkgrid_core::{Astrogem, Category, Core, CoreType, GridScore, Rarity};
/// use arkgrid_solver::ArkGridSolver;
///
/// let cores = vec![
///     Core::new("sun", CoreType::OrderOfTheSun, Rarity::Legendary),
///     Core::new("moon", CoreType::OrderOfTheMoon, Rarity::Legendary),
/// ];
/// let gems = vec![Astrogem::new("g", Category::Order, 6, 7).with_quantity(4)];
///
/// let solution = ArkGridSolver::default().solve(&cores, &gems).unwrap();
/// assert_eq!(solution.total_score, GridScore::of(22));
/// assert_eq!(solution.destiny_bonus, GridScore::of(10));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ArkGridSolver {
    config: SolverConfig,
}

impl ArkGridSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Creates a solver from a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read, parsed or validated.
    pub fn from_config_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(SolverConfig::load(path)?))
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn rules(&self) -> &RuleSet {
        &self.config.rules
    }

    /// Finds the assignment with the highest total score.
    ///
    /// # Errors
    ///
    /// Returns [`ArkGridError::InvalidInput`] for duplicate core or unit ids,
    /// [`ArkGridError::UnknownRarity`] when a core's rarity has no rule and
    /// [`ArkGridError::InvalidRules`] when the rule table is malformed.
    pub fn solve(&self, cores: &[Core], astrogems: &[Astrogem]) -> Result<GridSolution> {
        if cores.is_empty() {
            return Ok(GridSolution::empty());
        }

        let started = Instant::now();
        let rules = self.rules();
        rules.validate()?;
        let units = expand_astrogems(astrogems);
        check_unique_ids(cores, &units)?;

        info!(
            event = "solve_start",
            core_count = cores.len(),
            astrogem_count = astrogems.len(),
            unit_count = units.len(),
            core_order = %self.config.search.core_order,
        );

        let search = ExhaustiveSearch::new(rules, &self.config.search);
        let mut solved = Vec::new();
        let mut partitions = Vec::new();
        for partition in CategoryPartitioner::partition(cores, &units) {
            let solution =
                search.solve(partition.category, &partition.cores, &partition.astrogems)?;
            partitions.push(PartitionSummary {
                category: partition.category,
                core_count: partition.cores.len(),
                score: solution.score,
                exhaustive: solution.exhaustive,
                stats: solution.stats,
            });
            solved.push((partition, solution.results));
        }

        let results = CategoryPartitioner::merge(cores.len(), solved);
        let bonus = destiny_bonus(rules, cores, &results);
        let total_score = results.iter().map(|r| r.score).sum::<GridScore>() + bonus;
        let exhaustive = partitions.iter().all(|p| p.exhaustive);

        info!(
            event = "solve_end",
            total_score = %total_score,
            destiny_bonus = %bonus,
            exhaustive,
            duration_ms = started.elapsed().as_millis() as u64,
        );

        Ok(GridSolution {
            results,
            destiny_bonus: bonus,
            total_score,
            exhaustive,
            partitions,
        })
    }

    /// Theoretical ceiling of `cores` under this solver's rules.
    ///
    /// # Errors
    ///
    /// Fails when a core's rarity has no rule.
    pub fn max_possible_score(&self, cores: &[Core]) -> Result<GridScore> {
        max_possible_score(self.rules(), cores)
    }

    /// Destiny bonus earned by a finished result list.
    pub fn destiny_bonus(&self, cores: &[Core], results: &[SolverResult]) -> GridScore {
        destiny_bonus(self.rules(), cores, results)
    }
}

fn check_unique_ids(cores: &[Core], units: &[Astrogem]) -> Result<()> {
    let mut seen = HashSet::with_capacity(cores.len());
    for core in cores {
        if !seen.insert(core.id.as_str()) {
            return Err(ArkGridError::InvalidInput(format!(
                "duplicate core id '{}'",
                core.id
            )));
        }
    }

    let mut seen = HashSet::with_capacity(units.len());
    for unit in units {
        if !seen.insert(unit.id.as_str()) {
            return Err(ArkGridError::InvalidInput(format!(
                "duplicate astrogem id '{}'",
                unit.id
            )));
        }
    }
    Ok(())
}
