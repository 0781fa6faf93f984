//! Request and response messages of the solver worker.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use arkgrid_core::{ArkGridError, Astrogem, Core, Result, SolverResult};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::solver::ArkGridSolver;

/// A grid to solve.
///
/// `slots` and `items` are accepted as aliases of `cores` and `astrogems`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SolveRequest {
    #[serde(default, alias = "slots")]
    pub cores: Vec<Core>,
    #[serde(default, alias = "items")]
    pub astrogems: Vec<Astrogem>,
}

impl SolveRequest {
    pub fn new(cores: Vec<Core>, astrogems: Vec<Astrogem>) -> Self {
        Self { cores, astrogems }
    }
}

/// Reply to a [`SolveRequest`].
///
/// Successful replies carry `results`, failed ones carry `error`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SolveResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<SolverResult>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SolveResponse {
    pub fn success(results: Vec<SolverResult>) -> Self {
        Self {
            success: true,
            results: Some(results),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            results: None,
            error: Some(message.into()),
        }
    }

    /// Converts the reply into the caller's result.
    ///
    /// A failed reply becomes [`ArkGridError::Solver`] with the relayed
    /// message.
    pub fn into_result(self) -> Result<Vec<SolverResult>> {
        if self.success {
            Ok(self.results.unwrap_or_default())
        } else {
            Err(ArkGridError::Solver(
                self.error.unwrap_or_else(|| "unknown error".to_string()),
            ))
        }
    }
}

/// Solves a request, turning errors and panics into failure replies.
pub fn handle_request(solver: &ArkGridSolver, request: SolveRequest) -> SolveResponse {
    guarded(|| {
        solver
            .solve(&request.cores, &request.astrogems)
            .map(|solution| solution.results)
    })
}

/// Solves a JSON-encoded request and returns the JSON-encoded reply.
pub fn handle_message(solver: &ArkGridSolver, message: &str) -> String {
    let response = match serde_json::from_str::<SolveRequest>(message) {
        Ok(request) => handle_request(solver, request),
        Err(e) => {
            warn!(event = "request_rejected", error = %e);
            SolveResponse::failure(format!("invalid request: {}", e))
        }
    };

    serde_json::to_string(&response).unwrap_or_else(|e| {
        format!(
            r#"{{"success":false,"error":{}}}"#,
            serde_json::Value::String(e.to_string())
        )
    })
}

fn guarded(solve: impl FnOnce() -> Result<Vec<SolverResult>>) -> SolveResponse {
    match panic::catch_unwind(AssertUnwindSafe(solve)) {
        Ok(Ok(results)) => SolveResponse::success(results),
        Ok(Err(e)) => {
            warn!(event = "solve_failed", error = %e);
            SolveResponse::failure(e.to_string())
        }
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            error!(event = "solve_panicked", error = %message);
            SolveResponse::failure(message)
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "solver panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arkgrid_core::GridScore;
    use arkgrid_test::Grid;

    #[test]
    fn test_request_accepts_aliases() {
        let json = r#"{
            "slots": [{"id": "c", "type": "Order of the Star", "rarity": "Epic"}],
            "items": [{"id": "g", "category": "Order", "willpower": 5, "points": 10, "quantity": 2}]
        }"#;
        let request: SolveRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.cores.len(), 1);
        assert_eq!(request.astrogems[0].quantity, Some(2));
    }

    #[test]
    fn test_handle_request() {
        let grid = Grid::single_epic();
        let response = handle_request(
            &ArkGridSolver::default(),
            SolveRequest::new(grid.cores, grid.astrogems),
        );

        assert!(response.success);
        let results = response.into_result().unwrap();
        assert_eq!(results[0].score, GridScore::of(1));
    }

    #[test]
    fn test_handle_request_relays_error() {
        let grid = Grid::single_epic();
        let mut cores = grid.cores.clone();
        cores.extend(grid.cores);
        let response = handle_request(&ArkGridSolver::default(), SolveRequest::new(cores, vec![]));

        assert!(!response.success);
        assert!(response.results.is_none());
        assert!(response.error.as_deref().unwrap().contains("duplicate core id"));
    }

    #[test]
    fn test_panic_becomes_failure() {
        let response = guarded(|| panic!("boom"));
        assert_eq!(response, SolveResponse::failure("boom"));

        let response = guarded(|| panic!("{} {}", "formatted", 1));
        assert_eq!(response.error.as_deref(), Some("formatted 1"));
    }

    #[test]
    fn test_into_result_failure() {
        let err = SolveResponse::failure("bad").into_result().unwrap_err();
        assert!(matches!(err, ArkGridError::Solver(ref m) if m == "bad"));
    }

    #[test]
    fn test_handle_message_round_trip() {
        let json = r#"{
            "cores": [{"id": "epic", "type": "Order of the Star", "rarity": "Epic"}],
            "astrogems": [{"id": "g1", "category": "Order", "willpower": 5, "points": 10}]
        }"#;
        let reply: serde_json::Value =
            serde_json::from_str(&handle_message(&ArkGridSolver::default(), json)).unwrap();

        assert_eq!(reply["success"], true);
        assert!(reply.get("error").is_none());
        assert_eq!(reply["results"][0]["coreId"], "epic");
        assert_eq!(reply["results"][0]["score"], 1.0);
        assert_eq!(reply["results"][0]["breakpointsHit"][0], 10);
    }

    #[test]
    fn test_handle_message_malformed() {
        let reply: serde_json::Value =
            serde_json::from_str(&handle_message(&ArkGridSolver::default(), "{not json")).unwrap();

        assert_eq!(reply["success"], false);
        assert!(reply["error"].as_str().unwrap().starts_with("invalid request"));
    }
}
