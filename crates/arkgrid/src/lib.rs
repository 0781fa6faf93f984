//! Ark Grid - optimal astrogem assignment
//!
//! Give it the cores you slotted and the astrogems you own; it returns the
//! assignment with the highest breakpoint score, Sun/Moon destiny bonus
//! included.
//!
//! # Example
//!
//! ```rust
//! use arkgrid::prelude::*;
//!
//! let cores = vec![
//!     Core::new("sun", CoreType::OrderOfTheSun, Rarity::Legendary),
//!     Core::new("moon", CoreType::OrderOfTheMoon, Rarity::Legendary),
//! ];
//! let gems = vec![
//!     Astrogem::new("a", Category::Order, 6, 7),
//!     Astrogem::new("b", Category::Order, 6, 7),
//!     Astrogem::new("c", Category::Order, 5, 7),
//!     Astrogem::new("d", Category::Order, 6, 7),
//! ];
//!
//! let solver = ArkGridSolver::default();
//! let solution = solver.solve(&cores, &gems).unwrap();
//! assert_eq!(solution.total_score, GridScore::of(22));
//! assert_eq!(solution.total_score, solver.max_possible_score(&cores).unwrap());
//! ```

// Domain types
pub use arkgrid_core::{
    Astrogem, Category, Core, CoreType, DestinyRole, GridScore, Rarity, SolverResult,
};

// Rules and errors
pub use arkgrid_core::{
    ArkGridError, BreakpointWeight, DestinyBonusRule, RarityBonus, RarityRule, Result, RuleSet,
};

// Configuration
pub use arkgrid_config::{ConfigError, CoreOrder, SearchConfig, SolverConfig};

// Scoring
pub use arkgrid_scoring::{destiny_bonus, max_possible_score, CoreScorer, DestinyPair};

// Solving
pub use arkgrid_solver::{ArkGridSolver, GridSolution, PartitionSummary, SearchStats};

// Execution boundary
pub use arkgrid_solver::manager::{
    global_worker, handle_message, handle_request, solve_async, SolveRequest, SolveResponse,
    SolverWorker,
};

#[cfg(feature = "console")]
pub mod console;

pub mod prelude {
    pub use super::{
        ArkGridError, ArkGridSolver, Astrogem, Category, Core, CoreType, GridScore, GridSolution,
        Rarity, SolverConfig, SolverResult,
    };
    pub use super::{solve_async, SolveRequest, SolveResponse};
}
