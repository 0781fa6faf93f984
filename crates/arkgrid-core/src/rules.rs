//! Rule tables: what each rarity allows and what each breakpoint is worth.
//!
//! The defaults reproduce the live game tables. A [`RuleSet`] is a plain
//! lookup table; nothing in it is derived at runtime.

use serde::{Deserialize, Serialize};

use crate::domain::Rarity;
use crate::error::{ArkGridError, Result};
use crate::score::GridScore;

/// Capacity and breakpoints of one rarity tier.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct RarityRule {
    pub rarity: Rarity,
    /// Maximum total willpower of the astrogems in one core.
    pub max_willpower: u32,
    /// Point thresholds, strictly ascending.
    pub breakpoints: Vec<u32>,
}

impl RarityRule {
    pub fn new(rarity: Rarity, max_willpower: u32, breakpoints: Vec<u32>) -> Self {
        Self {
            rarity,
            max_willpower,
            breakpoints,
        }
    }
}

/// Score weight of a breakpoint, shared by every rarity.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct BreakpointWeight {
    pub threshold: u32,
    pub weight: f64,
}

/// Extra score a rarity earns for clearing one breakpoint, on top of its weight.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct RarityBonus {
    pub rarity: Rarity,
    pub breakpoint: u32,
    pub bonus: f64,
}

/// The global bonus for the Sun and Moon cores both reaching `threshold`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct DestinyBonusRule {
    pub threshold: u32,
    pub bonus: f64,
}

impl Default for DestinyBonusRule {
    fn default() -> Self {
        Self {
            threshold: 14,
            bonus: 10.0,
        }
    }
}

/// The complete rule table consulted by the scorer and the search.
///
/// # Examples
///
/// ```
/// use arkgrid_core::{GridScore, Rarity, RuleSet};
///
/// let rules = RuleSet::default();
/// assert_eq!(rules.rarity(Rarity::Legendary).unwrap().max_willpower, 12);
/// assert_eq!(rules.breakpoint_weight(14), GridScore::of(5));
/// assert_eq!(rules.rarity_bonus(Rarity::Ancient, 17), GridScore::from_f64(1.5));
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct RuleSet {
    pub max_astrogems_per_core: usize,
    pub rarities: Vec<RarityRule>,
    pub breakpoint_weights: Vec<BreakpointWeight>,
    pub rarity_bonuses: Vec<RarityBonus>,
    pub destiny: DestinyBonusRule,
}

impl Default for RuleSet {
    fn default() -> Self {
        let upper = vec![10, 14, 17, 18, 19, 20];
        Self {
            max_astrogems_per_core: 4,
            rarities: vec![
                RarityRule::new(Rarity::Epic, 9, vec![10]),
                RarityRule::new(Rarity::Legendary, 12, vec![10, 14]),
                RarityRule::new(Rarity::Relic, 15, upper.clone()),
                RarityRule::new(Rarity::Ancient, 17, upper),
            ],
            breakpoint_weights: [(10, 1.0), (14, 5.0), (17, 5.0), (18, 0.5), (19, 0.5), (20, 0.5)]
                .into_iter()
                .map(|(threshold, weight)| BreakpointWeight { threshold, weight })
                .collect(),
            rarity_bonuses: vec![RarityBonus {
                rarity: Rarity::Ancient,
                breakpoint: 17,
                bonus: 1.5,
            }],
            destiny: DestinyBonusRule::default(),
        }
    }
}

impl RuleSet {
    /// Looks up the rule of a rarity.
    ///
    /// # Errors
    ///
    /// Returns [`ArkGridError::UnknownRarity`] if the table has no entry.
    pub fn rarity(&self, rarity: Rarity) -> Result<&RarityRule> {
        self.rarities
            .iter()
            .find(|rule| rule.rarity == rarity)
            .ok_or(ArkGridError::UnknownRarity(rarity))
    }

    /// Weight of a breakpoint; thresholds absent from the table weigh nothing.
    pub fn breakpoint_weight(&self, threshold: u32) -> GridScore {
        self.breakpoint_weights
            .iter()
            .find(|w| w.threshold == threshold)
            .map(|w| GridScore::from_f64(w.weight))
            .unwrap_or(GridScore::ZERO)
    }

    /// Rarity-specific extra for clearing `breakpoint`.
    pub fn rarity_bonus(&self, rarity: Rarity, breakpoint: u32) -> GridScore {
        self.rarity_bonuses
            .iter()
            .filter(|b| b.rarity == rarity && b.breakpoint == breakpoint)
            .map(|b| GridScore::from_f64(b.bonus))
            .sum()
    }

    /// Points both destiny cores must reach.
    #[inline]
    pub fn destiny_threshold(&self) -> u32 {
        self.destiny.threshold
    }

    /// Value of the destiny bonus.
    pub fn destiny_bonus(&self) -> GridScore {
        GridScore::from_f64(self.destiny.bonus)
    }

    /// Checks the invariants the search relies on.
    ///
    /// Weights must be finite and non-negative so that adding astrogems
    /// never lowers a core's score, which the pruning bound depends on.
    /// The rarity table may be partial; lookups of absent rarities fail
    /// with [`ArkGridError::UnknownRarity`].
    pub fn validate(&self) -> Result<()> {
        if self.max_astrogems_per_core == 0 {
            return Err(invalid("max_astrogems_per_core must be at least 1"));
        }

        for (i, rule) in self.rarities.iter().enumerate() {
            if self.rarities[..i].iter().any(|r| r.rarity == rule.rarity) {
                return Err(invalid(format!("rarity {} is defined twice", rule.rarity)));
            }
            if rule.breakpoints.windows(2).any(|w| w[0] >= w[1]) {
                return Err(invalid(format!(
                    "breakpoints of {} must be strictly ascending",
                    rule.rarity
                )));
            }
        }

        for (i, w) in self.breakpoint_weights.iter().enumerate() {
            check_weight(w.weight, || format!("weight of breakpoint {}", w.threshold))?;
            if self.breakpoint_weights[..i]
                .iter()
                .any(|other| other.threshold == w.threshold)
            {
                return Err(invalid(format!(
                    "breakpoint {} has more than one weight",
                    w.threshold
                )));
            }
        }

        for b in &self.rarity_bonuses {
            check_weight(b.bonus, || {
                format!("bonus of {} at breakpoint {}", b.rarity, b.breakpoint)
            })?;
        }

        check_weight(self.destiny.bonus, || "destiny bonus".to_string())
    }
}

fn check_weight(value: f64, what: impl FnOnce() -> String) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(format!("{} must be finite and non-negative", what())))
    }
}

fn invalid(message: impl Into<String>) -> ArkGridError {
    ArkGridError::InvalidRules(message.into())
}
