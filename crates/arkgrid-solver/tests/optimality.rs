//! The branch-and-bound optimum against plain enumeration on random grids.

use std::collections::HashSet;

use arkgrid_config::{CoreOrder, SolverConfig};
use arkgrid_core::{Astrogem, Category, Core, CoreType, GridScore, Rarity, RuleSet};
use arkgrid_scoring::{CoreScorer, DestinyPair};
use arkgrid_solver::{ArkGridSolver, CombinationGenerator};
use arkgrid_test::fixtures::{core, order_gem};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ORDER_TYPES: [CoreType; 3] = [
    CoreType::OrderOfTheSun,
    CoreType::OrderOfTheMoon,
    CoreType::OrderOfTheStar,
];

fn random_grid(rng: &mut StdRng) -> (Vec<Core>, Vec<Astrogem>) {
    let core_count = rng.random_range(2..=4);
    let cores = (0..core_count)
        .map(|i| {
            let core_type = ORDER_TYPES[rng.random_range(0..ORDER_TYPES.len())];
            let rarity = Rarity::ALL[rng.random_range(0..Rarity::ALL.len())];
            core(&format!("core{}", i), core_type, rarity)
        })
        .collect();
    // Kept small so plain enumeration stays fast.
    let gem_count = rng.random_range(6..=7);
    let gems = (0..gem_count)
        .map(|i| {
            order_gem(
                &format!("gem{}", i),
                rng.random_range(1..=10),
                rng.random_range(1..=10),
            )
        })
        .collect();
    (cores, gems)
}

/// Tries every combination of every core.
fn enumerate(rules: &RuleSet, cores: &[Core], pool: &[Astrogem]) -> GridScore {
    let scorers: Vec<CoreScorer> = cores
        .iter()
        .map(|c| CoreScorer::for_core(rules, c).unwrap())
        .collect();
    let options: Vec<_> = scorers
        .iter()
        .map(|s| {
            CombinationGenerator::new(s.max_willpower(), rules.max_astrogems_per_core)
                .generate(pool, Category::Order)
        })
        .collect();
    let pair = DestinyPair::locate(cores);

    let mut best = GridScore::ZERO;
    let mut points = Vec::new();
    let mut used = HashSet::new();
    walk(rules, &scorers, &options, pair, 0, &mut points, &mut used, &mut best);
    best
}

#[allow(clippy::too_many_arguments)]
fn walk(
    rules: &RuleSet,
    scorers: &[CoreScorer],
    options: &[Vec<arkgrid_solver::Combination>],
    pair: Option<DestinyPair>,
    depth: usize,
    points: &mut Vec<u32>,
    used: &mut HashSet<usize>,
    best: &mut GridScore,
) {
    if depth == scorers.len() {
        let mut total: GridScore = scorers
            .iter()
            .zip(points.iter())
            .map(|(s, &p)| s.score(p))
            .sum();
        if let Some(pair) = pair {
            if DestinyPair::qualifies(rules, points[pair.sun], points[pair.moon]) {
                total += rules.destiny_bonus();
            }
        }
        if total > *best {
            *best = total;
        }
        return;
    }

    for combo in &options[depth] {
        if combo.gems.iter().any(|g| used.contains(g)) {
            continue;
        }
        used.extend(combo.gems.iter().copied());
        points.push(combo.points);
        walk(rules, scorers, options, pair, depth + 1, points, used, best);
        points.pop();
        for g in &combo.gems {
            used.remove(g);
        }
    }
}

#[test]
fn test_matches_enumeration() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let rules = RuleSet::default();
    let solver = ArkGridSolver::default();

    for _ in 0..25 {
        let (cores, gems) = random_grid(&mut rng);
        let expected = enumerate(&rules, &cores, &gems);
        let solution = solver.solve(&cores, &gems).unwrap();

        assert!(solution.exhaustive);
        assert_eq!(
            solution.total_score, expected,
            "cores {:?} gems {:?}",
            cores, gems
        );
    }
}

#[test]
fn test_configurations_agree() {
    let mut rng = StdRng::seed_from_u64(42);
    let configs = [
        SolverConfig::default(),
        SolverConfig::default().with_pruning(false),
        SolverConfig::default().with_core_order(CoreOrder::Input),
        SolverConfig::default().with_core_order(CoreOrder::TightestCapacityFirst),
    ];

    for _ in 0..15 {
        let (cores, gems) = random_grid(&mut rng);
        let scores: Vec<GridScore> = configs
            .iter()
            .map(|c| {
                ArkGridSolver::new(c.clone())
                    .solve(&cores, &gems)
                    .unwrap()
                    .total_score
            })
            .collect();

        assert!(scores.windows(2).all(|w| w[0] == w[1]), "{:?}", scores);
    }
}

#[test]
fn test_never_exceeds_ceiling() {
    let mut rng = StdRng::seed_from_u64(7);
    let solver = ArkGridSolver::default();

    for _ in 0..25 {
        let (cores, gems) = random_grid(&mut rng);
        let solution = solver.solve(&cores, &gems).unwrap();
        let ceiling = solver.max_possible_score(&cores).unwrap();

        assert!(solution.total_score <= ceiling);
        for (core, result) in cores.iter().zip(&solution.results) {
            let capacity = solver.rules().rarity(core.rarity).unwrap().max_willpower;
            assert!(result.total_willpower <= capacity);
            assert!(result.astrogems.len() <= 4);
        }
    }
}
