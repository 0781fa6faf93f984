//! Ark Grid Core - domain types and rule tables
//!
//! This crate provides the fundamental abstractions of the Ark Grid solver:
//! - Domain types for cores, astrogems and per-core results
//! - The rule tables mapping rarities to willpower and breakpoints
//! - The fixed-point score type used by every component
//! - The error type shared across the workspace

pub mod domain;
pub mod error;
pub mod rules;
pub mod score;

pub use domain::{Astrogem, Category, Core, CoreType, DestinyRole, Rarity, SolverResult};
pub use error::{ArkGridError, Result};
pub use rules::{BreakpointWeight, DestinyBonusRule, RarityBonus, RarityRule, RuleSet};
pub use score::GridScore;
