//! Per-core breakpoint scoring.

use arkgrid_core::domain::{total_points, total_willpower};
use arkgrid_core::{Astrogem, Core, GridScore, Rarity, Result, RuleSet, SolverResult};

use crate::destiny::DestinyPair;

/// A breakpoint together with everything it is worth for one rarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredBreakpoint {
    pub threshold: u32,
    /// Table weight plus any rarity bonus for this threshold.
    pub value: GridScore,
}

/// Scores cores of one rarity.
///
/// A breakpoint is cleared when the core's points reach its threshold. The
/// score is the sum of the cleared breakpoints' weights plus the rarity's
/// bonuses for those breakpoints, so it never decreases as points grow.
///
/// # Examples
///
/// ```
/// use arkgrid_core::{GridScore, Rarity, RuleSet};
/// use arkgrid_scoring::CoreScorer;
///
/// let rules = RuleSet::default();
/// let ancient = CoreScorer::new(&rules, Rarity::Ancient).unwrap();
///
/// assert_eq!(ancient.score(9), GridScore::ZERO);
/// assert_eq!(ancient.score(14), GridScore::of(6));
/// // 1 + 5 + 5 + 1.5 (Ancient extra at 17)
/// assert_eq!(ancient.score(17), GridScore::from_f64(12.5));
/// assert_eq!(ancient.breakpoints_hit(18), vec![10, 14, 17, 18]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CoreScorer {
    rarity: Rarity,
    max_willpower: u32,
    breakpoints: Vec<ScoredBreakpoint>,
}

impl CoreScorer {
    /// Builds the scorer of a rarity from the rule table.
    ///
    /// # Errors
    ///
    /// Fails when the rule table does not define `rarity`.
    pub fn new(rules: &RuleSet, rarity: Rarity) -> Result<Self> {
        let rule = rules.rarity(rarity)?;
        let breakpoints = rule
            .breakpoints
            .iter()
            .map(|&threshold| ScoredBreakpoint {
                threshold,
                value: rules.breakpoint_weight(threshold) + rules.rarity_bonus(rarity, threshold),
            })
            .collect();

        Ok(Self {
            rarity,
            max_willpower: rule.max_willpower,
            breakpoints,
        })
    }

    /// Builds the scorer matching a core's rarity.
    pub fn for_core(rules: &RuleSet, core: &Core) -> Result<Self> {
        Self::new(rules, core.rarity)
    }

    #[inline]
    pub fn rarity(&self) -> Rarity {
        self.rarity
    }

    /// Willpower capacity of a core of this rarity.
    #[inline]
    pub fn max_willpower(&self) -> u32 {
        self.max_willpower
    }

    pub fn breakpoints(&self) -> &[ScoredBreakpoint] {
        &self.breakpoints
    }

    /// Thresholds cleared by `points`, in ascending order.
    pub fn breakpoints_hit(&self, points: u32) -> Vec<u32> {
        self.cleared(points).map(|bp| bp.threshold).collect()
    }

    /// Score of a core holding `points`.
    pub fn score(&self, points: u32) -> GridScore {
        self.cleared(points).map(|bp| bp.value).sum()
    }

    /// Score with every breakpoint cleared, ignoring capacity.
    pub fn max_score(&self) -> GridScore {
        self.breakpoints.iter().map(|bp| bp.value).sum()
    }

    /// Builds the result record of a core holding `astrogems`.
    pub fn evaluate(&self, core_id: impl Into<String>, astrogems: Vec<Astrogem>) -> SolverResult {
        let points = total_points(&astrogems);
        SolverResult {
            core_id: core_id.into(),
            total_willpower: total_willpower(&astrogems),
            total_points: points,
            breakpoints_hit: self.breakpoints_hit(points),
            score: self.score(points),
            astrogems,
        }
    }

    fn cleared(&self, points: u32) -> impl Iterator<Item = &ScoredBreakpoint> {
        self.breakpoints
            .iter()
            .filter(move |bp| points >= bp.threshold)
    }
}

/// Theoretical ceiling of a set of cores.
///
/// Sums every core's maximum score and adds the destiny bonus when both a
/// Sun and a Moon core are present. Callers use it as a denominator; the
/// solver never exceeds it.
pub fn max_possible_score(rules: &RuleSet, cores: &[Core]) -> Result<GridScore> {
    let mut total = GridScore::ZERO;
    for core in cores {
        total += CoreScorer::for_core(rules, core)?.max_score();
    }
    if DestinyPair::locate(cores).is_some() {
        total += rules.destiny_bonus();
    }
    Ok(total)
}
