//! Execution boundary of the solver.
//!
//! The manager module provides:
//! - [`SolveRequest`] / [`SolveResponse`]: the messages exchanged with a worker
//! - [`handle_request`] and [`handle_message`]: synchronous entry points that
//!   never panic and never fail, reporting errors inside the response
//! - [`SolverWorker`]: a solver on its own thread behind an async handle
//! - [`solve_async`]: the shared worker, configured from `arkgrid.toml`

mod message;
mod worker;


pub use message::{handle_message, handle_request, SolveRequest, SolveResponse};
pub use worker::{global_worker, max_possible_score, solve_async, SolverWorker, CONFIG_FILE};
