//! Optimistic bounds for branch-and-bound pruning.
//!
//! The bound of a partial assignment is the score fixed so far, plus the
//! best score every undecided core could reach on its own, plus the destiny
//! bonus while it is still reachable. Cores are decided in a fixed order,
//! so "undecided" is everything at or past the current depth.

use arkgrid_core::GridScore;

/// Depths of the Sun and Moon cores in decision order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DestinyBound {
    pub sun_depth: usize,
    pub moon_depth: usize,
    pub threshold: u32,
    pub bonus: GridScore,
}

impl DestinyBound {
    /// Returns whether the core at `depth` holds a destiny role.
    #[inline]
    pub fn is_role(&self, depth: usize) -> bool {
        depth == self.sun_depth || depth == self.moon_depth
    }

    /// Whether both role cores can still reach the threshold.
    ///
    /// `decided` holds the points of the cores already decided, indexed by
    /// depth.
    pub fn reachable(&self, decided: &[u32]) -> bool {
        self.role_open(self.sun_depth, decided) && self.role_open(self.moon_depth, decided)
    }

    fn role_open(&self, depth: usize, decided: &[u32]) -> bool {
        decided
            .get(depth)
            .map_or(true, |&points| points >= self.threshold)
    }
}

/// Optimistic score ceilings for a fixed core order.
#[derive(Debug, Clone)]
pub struct ScoreBounder {
    /// `remaining[d]` is the sum of max scores of the cores at depth >= d.
    remaining: Vec<GridScore>,
    destiny: Option<DestinyBound>,
}

impl ScoreBounder {
    /// Builds the bounder from each core's max score, in decision order.
    pub fn new(max_scores: &[GridScore], destiny: Option<DestinyBound>) -> Self {
        let mut remaining = vec![GridScore::ZERO; max_scores.len() + 1];
        for depth in (0..max_scores.len()).rev() {
            remaining[depth] = remaining[depth + 1] + max_scores[depth];
        }
        Self { remaining, destiny }
    }

    /// Sum of max scores of the cores at or past `depth`.
    #[inline]
    pub fn remaining(&self, depth: usize) -> GridScore {
        self.remaining
            .get(depth)
            .copied()
            .unwrap_or(GridScore::ZERO)
    }

    pub fn destiny(&self) -> Option<&DestinyBound> {
        self.destiny.as_ref()
    }

    /// Ceiling over every candidate of the core at the next depth scoring
    /// at most `score`.
    ///
    /// Candidates are visited best score first, so once this ceiling fails
    /// to beat the incumbent none of the later candidates can either.
    pub fn level_bound(&self, running: GridScore, score: GridScore, decided: &[u32]) -> GridScore {
        let depth = decided.len();
        let bonus = self.bonus_if(|d| d.reachable(decided));
        running + score + self.remaining(depth + 1) + bonus
    }

    /// Ceiling of one candidate holding `points` at the next depth.
    pub fn candidate_bound(
        &self,
        running: GridScore,
        score: GridScore,
        points: u32,
        decided: &[u32],
    ) -> GridScore {
        let depth = decided.len();
        let bonus = self.bonus_if(|d| {
            d.reachable(decided) && (!d.is_role(depth) || points >= d.threshold)
        });
        running + score + self.remaining(depth + 1) + bonus
    }

    /// Destiny bonus earned by a complete assignment.
    pub fn earned_bonus(&self, decided: &[u32]) -> GridScore {
        self.bonus_if(|d| {
            let sun = decided.get(d.sun_depth).copied().unwrap_or(0);
            let moon = decided.get(d.moon_depth).copied().unwrap_or(0);
            sun >= d.threshold && moon >= d.threshold
        })
    }

    fn bonus_if(&self, condition: impl FnOnce(&DestinyBound) -> bool) -> GridScore {
        match &self.destiny {
            Some(destiny) if condition(destiny) => destiny.bonus,
            _ => GridScore::ZERO,
        }
    }
}
