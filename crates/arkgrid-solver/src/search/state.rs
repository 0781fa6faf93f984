//! Mutable state of a depth-first search.

use arkgrid_core::GridScore;

use super::candidate::Candidate;
use crate::stats::SearchStats;

/// Best complete assignment found so far.
#[derive(Debug, Clone, PartialEq)]
pub struct Incumbent {
    pub score: GridScore,
    /// Candidate index chosen at each depth.
    pub chosen: Vec<usize>,
}

/// Partial assignment, incumbent and counters.
///
/// `chosen` and `points` are stacks indexed by depth: their length is the
/// number of decided cores.
#[derive(Debug)]
pub struct SearchState {
    used: Vec<bool>,
    chosen: Vec<usize>,
    points: Vec<u32>,
    best: Option<Incumbent>,
    node_limit: Option<u64>,
    terminated: bool,
    pub stats: SearchStats,
}

impl SearchState {
    pub fn new(unit_count: usize, depth: usize, node_limit: Option<u64>) -> Self {
        Self {
            used: vec![false; unit_count],
            chosen: Vec::with_capacity(depth),
            points: Vec::with_capacity(depth),
            best: None,
            node_limit,
            terminated: false,
            stats: SearchStats::default(),
        }
    }

    /// Points of the decided cores, indexed by depth.
    #[inline]
    pub fn decided(&self) -> &[u32] {
        &self.points
    }

    #[inline]
    pub fn best_score(&self) -> Option<GridScore> {
        self.best.as_ref().map(|b| b.score)
    }

    pub fn into_best(self) -> (Option<Incumbent>, SearchStats, bool) {
        (self.best, self.stats, self.terminated)
    }

    #[inline]
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// Returns whether `candidate` reuses a unit already placed.
    pub fn conflicts(&self, candidate: &Candidate) -> bool {
        candidate.combination.gems.iter().any(|&g| self.used[g])
    }

    /// Counts a node, or terminates the search when the limit is reached.
    pub fn enter_node(&mut self) -> bool {
        if let Some(limit) = self.node_limit {
            if self.stats.nodes_explored >= limit {
                self.terminated = true;
                return false;
            }
        }
        self.stats.record_node();
        true
    }

    /// Records a complete assignment if it beats the incumbent.
    pub fn offer(&mut self, total: GridScore) -> bool {
        self.stats.record_leaf();
        if self.best_score().is_some_and(|best| total <= best) {
            return false;
        }
        self.best = Some(Incumbent {
            score: total,
            chosen: self.chosen.clone(),
        });
        self.stats.record_improvement();
        true
    }

    /// Runs `f` with `candidate` placed at the next depth, then removes it.
    pub fn with_committed<R>(
        &mut self,
        index: usize,
        candidate: &Candidate,
        f: impl FnOnce(&mut Self) -> R,
    ) -> R {
        for &g in &candidate.combination.gems {
            self.used[g] = true;
        }
        self.chosen.push(index);
        self.points.push(candidate.combination.points);

        let result = f(self);

        self.points.pop();
        self.chosen.pop();
        for &g in &candidate.combination.gems {
            self.used[g] = false;
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use smallvec::smallvec;

    use super::*;
    use crate::combination::Combination;

    fn candidate(gems: &[usize], points: u32) -> Candidate {
        Candidate {
            combination: Combination {
                gems: gems.iter().copied().collect(),
                willpower: 0,
                points,
            },
            score: GridScore::ZERO,
        }
    }

    #[test]
    fn test_commit_and_release() {
        let mut state = SearchState::new(4, 2, None);
        let first = candidate(&[0, 2], 14);
        let clash = candidate(&[2], 5);
        let free = Candidate {
            combination: Combination {
                gems: smallvec![1, 3],
                willpower: 0,
                points: 3,
            },
            score: GridScore::ZERO,
        };

        state.with_committed(0, &first, |state| {
            assert_eq!(state.decided(), &[14]);
            assert!(state.conflicts(&clash));
            assert!(!state.conflicts(&free));
        });

        assert!(state.decided().is_empty());
        assert!(!state.conflicts(&clash));
    }

    #[test]
    fn test_offer_keeps_first_of_equal_scores() {
        let mut state = SearchState::new(0, 1, None);
        let a = candidate(&[], 0);

        state.with_committed(3, &a, |state| assert!(state.offer(GridScore::of(5))));
        state.with_committed(4, &a, |state| assert!(!state.offer(GridScore::of(5))));

        let (best, stats, _) = state.into_best();
        assert_eq!(best.map(|b| b.chosen), Some(vec![3]));
        assert_eq!(stats.leaves, 2);
        assert_eq!(stats.improvements, 1);
    }

    #[test]
    fn test_node_limit() {
        let mut state = SearchState::new(0, 0, Some(2));
        assert!(state.enter_node());
        assert!(state.enter_node());
        assert!(!state.enter_node());
        assert!(state.is_terminated());
        assert_eq!(state.stats.nodes_explored, 2);
    }
}
