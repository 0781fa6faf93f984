//! Search statistics.
//!
//! Counters collected while one partition is searched.

use std::time::{Duration, Instant};

/// Branch-and-bound counters for one partition.
///
/// # Example
///
/// ```
/// use arkgrid_solver::stats::SearchStats;
///
/// let mut stats = SearchStats::default();
/// stats.start();
/// stats.record_node();
/// stats.record_node();
/// stats.record_pruned(3);
///
/// assert_eq!(stats.nodes_explored, 2);
/// assert_eq!(stats.pruned, 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    start_time: Option<Instant>,
    /// Candidate subsets generated across all cores.
    pub candidates: u64,
    /// Candidates committed to the partial assignment.
    pub nodes_explored: u64,
    /// Candidates skipped because their bound cannot beat the incumbent.
    pub pruned: u64,
    /// Candidates skipped because they reuse an astrogem.
    pub conflicts: u64,
    /// Complete assignments evaluated.
    pub leaves: u64,
    /// Times the incumbent improved.
    pub improvements: u64,
}

impl SearchStats {
    /// Marks the start of the search.
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Returns the elapsed time since the search started.
    pub fn elapsed(&self) -> Duration {
        self.start_time.map(|t| t.elapsed()).unwrap_or_default()
    }

    pub fn record_candidates(&mut self, count: usize) {
        self.candidates += count as u64;
    }

    pub fn record_node(&mut self) {
        self.nodes_explored += 1;
    }

    pub fn record_pruned(&mut self, count: usize) {
        self.pruned += count as u64;
    }

    pub fn record_conflict(&mut self) {
        self.conflicts += 1;
    }

    pub fn record_leaf(&mut self) {
        self.leaves += 1;
    }

    pub fn record_improvement(&mut self) {
        self.improvements += 1;
    }

    /// Adds the counters of another partition.
    pub fn merge(&mut self, other: &SearchStats) {
        self.candidates += other.candidates;
        self.nodes_explored += other.nodes_explored;
        self.pruned += other.pruned;
        self.conflicts += other.conflicts;
        self.leaves += other.leaves;
        self.improvements += other.improvements;
    }

    /// Returns the nodes explored per second.
    pub fn nodes_per_second(&self) -> f64 {
        let secs = self.elapsed().as_secs_f64();
        if secs > 0.0 {
            self.nodes_explored as f64 / secs
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_before_start() {
        let stats = SearchStats::default();
        assert_eq!(stats.elapsed(), Duration::ZERO);
        assert_eq!(stats.nodes_per_second(), 0.0);
    }

    #[test]
    fn test_merge() {
        let mut a = SearchStats::default();
        a.record_candidates(10);
        a.record_node();
        a.record_leaf();

        let mut b = SearchStats::default();
        b.record_candidates(5);
        b.record_conflict();
        b.record_improvement();
        b.record_pruned(4);

        a.merge(&b);
        assert_eq!(a.candidates, 15);
        assert_eq!(a.nodes_explored, 1);
        assert_eq!(a.leaves, 1);
        assert_eq!(a.conflicts, 1);
        assert_eq!(a.improvements, 1);
        assert_eq!(a.pruned, 4);
    }
}
