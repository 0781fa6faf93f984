//! One-line builders for cores and astrogems.

use arkgrid_core::{Astrogem, Category, Core, CoreType, Rarity};

/// Creates a core of any type.
pub fn core(id: &str, core_type: CoreType, rarity: Rarity) -> Core {
    Core::new(id, core_type, rarity)
}

/// Creates an Order of the Sun core.
pub fn sun(id: &str, rarity: Rarity) -> Core {
    core(id, CoreType::OrderOfTheSun, rarity)
}

/// Creates an Order of the Moon core.
pub fn moon(id: &str, rarity: Rarity) -> Core {
    core(id, CoreType::OrderOfTheMoon, rarity)
}

/// Creates an Order of the Star core.
pub fn star(id: &str, rarity: Rarity) -> Core {
    core(id, CoreType::OrderOfTheStar, rarity)
}

/// Creates an Order astrogem.
pub fn order_gem(id: &str, willpower: u32, points: u32) -> Astrogem {
    Astrogem::new(id, Category::Order, willpower, points)
}

/// Creates a Chaos astrogem.
pub fn chaos_gem(id: &str, willpower: u32, points: u32) -> Astrogem {
    Astrogem::new(id, Category::Chaos, willpower, points)
}
