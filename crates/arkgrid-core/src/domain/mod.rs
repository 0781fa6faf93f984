//! Domain model for the Ark Grid.
//!
//! - [`Core`]: a slot with a type and a rarity
//! - [`Astrogem`]: an item with a category, willpower cost and points
//! - [`SolverResult`]: the astrogems chosen for one core and their score

mod astrogem;
mod core_type;
mod result;

#[cfg(test)]
mod tests;

pub use astrogem::{total_points, total_willpower, Astrogem};
pub use core_type::{Category, Core, CoreType, DestinyRole, Rarity};
pub use result::SolverResult;
