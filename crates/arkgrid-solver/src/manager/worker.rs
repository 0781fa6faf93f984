//! Background solver worker.
//!
//! The search is CPU-bound, so it runs on a dedicated thread. Callers hand
//! requests over a channel and await the reply without blocking their own
//! runtime.

use std::sync::{Arc, OnceLock};
use std::thread;

use arkgrid_config::{ConfigError, SolverConfig};
use arkgrid_core::{ArkGridError, Astrogem, Core, GridScore, Result, SolverResult};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error, info, warn};

use super::message::{handle_request, SolveRequest, SolveResponse};
use crate::solver::ArkGridSolver;

/// Configuration file read by the shared worker.
pub const CONFIG_FILE: &str = "arkgrid.toml";

static WORKER: OnceLock<SolverWorker> = OnceLock::new();

struct Job {
    request: SolveRequest,
    reply: oneshot::Sender<SolveResponse>,
}

impl std::fmt::Debug for Job {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Job")
            .field("cores", &self.request.cores.len())
            .field("astrogems", &self.request.astrogems.len())
            .finish()
    }
}

/// Handle to a solver running on its own thread.
///
/// Requests are solved one at a time in arrival order. The thread exits
/// once every handle is dropped.
///
/// # Example
///
/// ```
/// use arkgrid_core::{Astrogem, Category, Core, CoreType, Rarity};
/// use arkgrid_solver::manager::{SolveRequest, SolverWorker};
/// use arkgrid_solver::ArkGridSolver;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let worker = SolverWorker::spawn(ArkGridSolver::default());
/// let request = SolveRequest::new(
///     vec![Core::new("c", CoreType::OrderOfTheStar, Rarity::Epic)],
///     vec![Astrogem::new("g", Category::Order, 5, 10)],
/// );
///
/// let results = worker.solve(request).await.unwrap();
/// assert_eq!(results[0].astrogems[0].id, "g");
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct SolverWorker {
    sender: mpsc::UnboundedSender<Job>,
    solver: Arc<ArkGridSolver>,
}

impl SolverWorker {
    /// Starts a worker thread owning `solver`.
    ///
    /// If the thread cannot be started every request fails with
    /// [`ArkGridError::WorkerUnavailable`].
    pub fn spawn(solver: ArkGridSolver) -> Self {
        let solver = Arc::new(solver);
        let (sender, receiver) = mpsc::unbounded_channel();

        let worker_solver = Arc::clone(&solver);
        let spawned = thread::Builder::new()
            .name("arkgrid-solver".to_string())
            .spawn(move || run(&worker_solver, receiver));
        match spawned {
            Ok(_) => debug!(event = "worker_started"),
            Err(e) => error!(event = "worker_spawn_failed", error = %e),
        }

        Self { sender, solver }
    }

    pub fn solver(&self) -> &ArkGridSolver {
        &self.solver
    }

    /// Solves `request` on the worker thread.
    ///
    /// A request without cores is answered immediately with no results.
    ///
    /// # Errors
    ///
    /// [`ArkGridError::Solver`] carries a failure reported by the worker,
    /// [`ArkGridError::WorkerUnavailable`] means the worker is gone.
    pub async fn solve(&self, request: SolveRequest) -> Result<Vec<SolverResult>> {
        if request.cores.is_empty() {
            return Ok(Vec::new());
        }

        debug!(
            event = "dispatch",
            core_count = request.cores.len(),
            astrogem_count = request.astrogems.len(),
        );
        let (reply, response) = oneshot::channel();
        self.sender
            .send(Job { request, reply })
            .map_err(|_| ArkGridError::WorkerUnavailable)?;

        response
            .await
            .map_err(|_| ArkGridError::WorkerUnavailable)?
            .into_result()
    }

    #[cfg(test)]
    pub(crate) fn disconnected() -> Self {
        let (sender, _) = mpsc::unbounded_channel();
        Self {
            sender,
            solver: Arc::new(ArkGridSolver::default()),
        }
    }
}

fn run(solver: &ArkGridSolver, mut receiver: mpsc::UnboundedReceiver<Job>) {
    while let Some(job) = receiver.blocking_recv() {
        let response = handle_request(solver, job.request);
        // The caller may have stopped waiting.
        let _ = job.reply.send(response);
    }
    debug!(event = "worker_stopped");
}

/// The worker shared by [`solve_async`], created on first use.
///
/// Its solver is configured from [`CONFIG_FILE`] in the working directory
/// when present, defaults otherwise.
pub fn global_worker() -> &'static SolverWorker {
    WORKER.get_or_init(|| SolverWorker::spawn(ArkGridSolver::new(load_config())))
}

fn load_config() -> SolverConfig {
    match SolverConfig::load(CONFIG_FILE) {
        Ok(config) => {
            info!(event = "config_loaded", path = CONFIG_FILE);
            config
        }
        Err(ConfigError::Io(_)) => SolverConfig::default(),
        Err(e) => {
            warn!(event = "config_invalid", path = CONFIG_FILE, error = %e);
            SolverConfig::default()
        }
    }
}

/// Solves a grid on the shared worker.
///
/// # Errors
///
/// See [`SolverWorker::solve`].
pub async fn solve_async(cores: Vec<Core>, astrogems: Vec<Astrogem>) -> Result<Vec<SolverResult>> {
    if cores.is_empty() {
        return Ok(Vec::new());
    }
    global_worker()
        .solve(SolveRequest::new(cores, astrogems))
        .await
}

/// Theoretical ceiling of `cores` under the shared worker's rules.
///
/// # Errors
///
/// Fails when a core's rarity has no rule.
pub fn max_possible_score(cores: &[Core]) -> Result<GridScore> {
    global_worker().solver().max_possible_score(cores)
}
