//! Per-core solver output.

use serde::{Deserialize, Serialize};

use super::Astrogem;
use crate::score::GridScore;

/// Astrogems assigned to one core together with their evaluation.
///
/// `score` is the core's own breakpoint score; the destiny bonus is a
/// global term and never appears here.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolverResult {
    pub core_id: String,
    pub astrogems: Vec<Astrogem>,
    pub total_points: u32,
    pub total_willpower: u32,
    pub breakpoints_hit: Vec<u32>,
    pub score: GridScore,
}

impl SolverResult {
    /// A core left without astrogems.
    pub fn empty(core_id: impl Into<String>) -> Self {
        Self {
            core_id: core_id.into(),
            astrogems: Vec::new(),
            total_points: 0,
            total_willpower: 0,
            breakpoints_hit: Vec::new(),
            score: GridScore::ZERO,
        }
    }

    /// Returns whether no astrogem was assigned.
    pub fn is_empty(&self) -> bool {
        self.astrogems.is_empty()
    }
}
