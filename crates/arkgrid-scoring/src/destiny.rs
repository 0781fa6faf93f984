//! The destiny bonus: a global term over the Sun and Moon cores.

use arkgrid_core::{Core, DestinyRole, GridScore, RuleSet, SolverResult};

/// Positions of the cores holding the Sun and Moon roles.
///
/// When several cores share a role, the first one in the given order holds
/// it. The pair only exists when both roles are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DestinyPair {
    pub sun: usize,
    pub moon: usize,
}

impl DestinyPair {
    /// Finds the first Sun core and the first Moon core.
    pub fn locate<'a>(cores: impl IntoIterator<Item = &'a Core>) -> Option<Self> {
        let mut sun = None;
        let mut moon = None;
        for (index, core) in cores.into_iter().enumerate() {
            match core.destiny_role() {
                Some(DestinyRole::Sun) if sun.is_none() => sun = Some(index),
                Some(DestinyRole::Moon) if moon.is_none() => moon = Some(index),
                _ => {}
            }
        }
        Some(Self {
            sun: sun?,
            moon: moon?,
        })
    }

    /// Returns whether both cores reach the destiny threshold.
    pub fn qualifies(rules: &RuleSet, sun_points: u32, moon_points: u32) -> bool {
        let threshold = rules.destiny_threshold();
        sun_points >= threshold && moon_points >= threshold
    }
}

/// Destiny bonus earned by a finished assignment.
///
/// Results are matched to cores by id; a missing result counts as no bonus.
pub fn destiny_bonus(rules: &RuleSet, cores: &[Core], results: &[SolverResult]) -> GridScore {
    let Some(pair) = DestinyPair::locate(cores) else {
        return GridScore::ZERO;
    };
    let points_of = |core: &Core| {
        results
            .iter()
            .find(|r| r.core_id == core.id)
            .map(|r| r.total_points)
    };

    match (points_of(&cores[pair.sun]), points_of(&cores[pair.moon])) {
        (Some(sun), Some(moon)) if DestinyPair::qualifies(rules, sun, moon) => {
            rules.destiny_bonus()
        }
        _ => GridScore::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arkgrid_core::{CoreType, Rarity};
    use arkgrid_test::fixtures::core;

    fn result(core_id: &str, total_points: u32) -> SolverResult {
        SolverResult {
            core_id: core_id.to_string(),
            astrogems: Vec::new(),
            total_points,
            total_willpower: 0,
            breakpoints_hit: Vec::new(),
            score: GridScore::ZERO,
        }
    }

    #[test]
    fn test_locate_requires_both_roles() {
        let only_sun = vec![core("s", CoreType::OrderOfTheSun, Rarity::Relic)];
        assert_eq!(DestinyPair::locate(&only_sun), None);

        let both = vec![
            core("star", CoreType::OrderOfTheStar, Rarity::Relic),
            core("moon", CoreType::OrderOfTheMoon, Rarity::Relic),
            core("sun", CoreType::OrderOfTheSun, Rarity::Relic),
        ];
        assert_eq!(
            DestinyPair::locate(&both),
            Some(DestinyPair { sun: 2, moon: 1 })
        );
    }

    #[test]
    fn test_locate_takes_first_of_each_role() {
        let cores = vec![
            core("sun1", CoreType::OrderOfTheSun, Rarity::Epic),
            core("sun2", CoreType::OrderOfTheSun, Rarity::Ancient),
            core("moon", CoreType::OrderOfTheMoon, Rarity::Epic),
        ];
        assert_eq!(
            DestinyPair::locate(&cores),
            Some(DestinyPair { sun: 0, moon: 2 })
        );
    }

    #[test]
    fn test_qualifies_at_threshold() {
        let rules = RuleSet::default();
        assert!(DestinyPair::qualifies(&rules, 14, 14));
        assert!(!DestinyPair::qualifies(&rules, 13, 20));
        assert!(!DestinyPair::qualifies(&rules, 20, 13));
    }

    #[test]
    fn test_destiny_bonus_awarded() {
        let rules = RuleSet::default();
        let cores = vec![
            core("sun", CoreType::OrderOfTheSun, Rarity::Legendary),
            core("moon", CoreType::OrderOfTheMoon, Rarity::Legendary),
        ];
        let results = vec![result("sun", 15), result("moon", 14)];

        assert_eq!(destiny_bonus(&rules, &cores, &results), GridScore::of(10));
    }

    #[test]
    fn test_destiny_bonus_missing() {
        let rules = RuleSet::default();
        let cores = vec![
            core("sun", CoreType::OrderOfTheSun, Rarity::Legendary),
            core("moon", CoreType::OrderOfTheMoon, Rarity::Legendary),
        ];

        assert_eq!(
            destiny_bonus(&rules, &cores, &[result("sun", 20), result("moon", 10)]),
            GridScore::ZERO
        );
        assert_eq!(
            destiny_bonus(&rules, &cores, &[result("sun", 20)]),
            GridScore::ZERO
        );
        assert_eq!(destiny_bonus(&rules, &[], &[]), GridScore::ZERO);
    }
}
