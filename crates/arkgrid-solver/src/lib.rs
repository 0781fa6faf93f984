//! Ark Grid Solver - optimal astrogem assignment
//!
//! This crate provides:
//! - [`CombinationGenerator`]: every astrogem subset a core can hold
//! - [`search::ExhaustiveSearch`]: branch-and-bound over the cores of one
//!   category, including the Sun/Moon destiny bonus
//! - [`CategoryPartitioner`]: splits a grid into its Order and Chaos halves
//! - [`ArkGridSolver`]: validation, expansion, partitioning and merging
//! - [`manager`]: a worker thread with an async request API
//!
//! # Example
//!
//! ```
//! use arkgrid_core::{Astrogem, Category, Core, CoreType, GridScore, Rarity};
//! use arkgrid_solver::ArkGridSolver;
//!
//! let cores = vec![Core::new("epic", CoreType::OrderOfTheStar, Rarity::Epic)];
//! let gems = vec![Astrogem::new("g1", Category::Order, 5, 10)];
//!
//! let solution = ArkGridSolver::default().solve(&cores, &gems).unwrap();
//! assert_eq!(solution.results[0].astrogems[0].id, "g1");
//! assert_eq!(solution.total_score, GridScore::of(1));
//! ```

pub mod combination;
pub mod expand;
pub mod manager;
pub mod partition;
pub mod search;
pub mod solver;
pub mod stats;

pub use combination::{Combination, CombinationGenerator};
pub use expand::expand_astrogems;
pub use manager::{
    handle_message, handle_request, solve_async, SolveRequest, SolveResponse, SolverWorker,
};
pub use partition::{CategoryPartitioner, Partition};
pub use search::{decision_order, ExhaustiveSearch, PartitionSolution};
pub use solver::{ArkGridSolver, GridSolution, PartitionSummary};
pub use stats::SearchStats;
