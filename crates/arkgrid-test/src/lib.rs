//! Shared test fixtures for the Ark Grid crates.
//!
//! This crate provides builders and sample inventories for testing.
//! It only depends on `arkgrid-core` so every crate can use it.
//!
//! - [`fixtures`] - one-line builders for cores and astrogems
//! - [`inventory`] - ready-made grids exercising the destiny bonus and
//!   category isolation
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! arkgrid-test = { workspace = true }
//! ```
//!
//! ```
//! use arkgrid_test::fixtures::{order_gem, sun};
//! use arkgrid_core::Rarity;
//!
//! let core = sun("sun", Rarity::Relic);
//! let gem = order_gem("g1", 4, 5);
//! assert_eq!(core.category(), gem.category);
//! ```

pub mod fixtures;
pub mod inventory;

pub use inventory::Grid;
