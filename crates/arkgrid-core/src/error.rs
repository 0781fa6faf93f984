//! Error types for the Ark Grid solver

use thiserror::Error;

use crate::domain::Rarity;

/// Main error type for Ark Grid operations
#[derive(Debug, Error)]
pub enum ArkGridError {
    /// Malformed core or astrogem data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A core references a rarity the rule table does not define
    #[error("Unknown rarity: {0}")]
    UnknownRarity(Rarity),

    /// Rule table violates its own invariants
    #[error("Invalid rules: {0}")]
    InvalidRules(String),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failure reported by the solver worker
    #[error("Solver failed: {0}")]
    Solver(String),

    /// The solver worker cannot accept or answer requests
    #[error("Solver worker is unavailable")]
    WorkerUnavailable,
}

/// Result type alias for Ark Grid operations
pub type Result<T> = std::result::Result<T, ArkGridError>;
