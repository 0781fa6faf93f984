//! Expansion of replicated astrogems into independent units.

use arkgrid_core::Astrogem;

/// Expands every astrogem into `quantity` physical units.
///
/// The first unit keeps the original id; copy `k` is named `"{id}#{k}"`.
/// A quantity of zero contributes nothing, a missing quantity means one.
///
/// ```
/// use arkgrid_core::{Astrogem, Category};
/// use arkgrid_solver::expand_astrogems;
///
/// let gems = vec![Astrogem::new("g", Category::Order, 4, 5).with_quantity(3)];
/// let ids: Vec<String> = expand_astrogems(&gems).into_iter().map(|g| g.id).collect();
/// assert_eq!(ids, vec!["g", "g#1", "g#2"]);
/// ```
pub fn expand_astrogems(astrogems: &[Astrogem]) -> Vec<Astrogem> {
    let mut units = Vec::with_capacity(astrogems.len());
    for gem in astrogems {
        for copy in 0..gem.copies() {
            let id = if copy == 0 {
                gem.id.clone()
            } else {
                format!("{}#{}", gem.id, copy)
            };
            units.push(Astrogem {
                id,
                quantity: None,
                ..gem.clone()
            });
        }
    }
    units
}
