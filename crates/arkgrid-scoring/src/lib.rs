//! Breakpoint scoring for the Ark Grid solver
//!
//! - [`CoreScorer`]: maps a core's total points to its score
//! - [`DestinyPair`]: locates the Sun and Moon cores and checks the destiny bonus
//! - [`max_possible_score`]: the theoretical ceiling used as a denominator

pub mod destiny;
pub mod scorer;

pub use destiny::{destiny_bonus, DestinyPair};
pub use scorer::{max_possible_score, CoreScorer, ScoredBreakpoint};
