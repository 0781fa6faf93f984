//! Tests for the domain model.

use super::*;
use crate::score::GridScore;

#[test]
fn test_core_type_category() {
    assert_eq!(CoreType::OrderOfTheSun.category(), Category::Order);
    assert_eq!(CoreType::OrderOfTheStar.category(), Category::Order);
    assert_eq!(CoreType::ChaosOfTheMoon.category(), Category::Chaos);
    assert_eq!(CoreType::ChaosOfTheStar.category(), Category::Chaos);
}

#[test]
fn test_destiny_roles_only_on_order_sun_and_moon() {
    assert_eq!(CoreType::OrderOfTheSun.destiny_role(), Some(DestinyRole::Sun));
    assert_eq!(
        CoreType::OrderOfTheMoon.destiny_role(),
        Some(DestinyRole::Moon)
    );
    assert_eq!(CoreType::OrderOfTheStar.destiny_role(), None);
    assert_eq!(CoreType::ChaosOfTheSun.destiny_role(), None);
    assert_eq!(CoreType::ChaosOfTheMoon.destiny_role(), None);
}

#[test]
fn test_rarity_ordering() {
    assert!(Rarity::Epic < Rarity::Legendary);
    assert!(Rarity::Relic < Rarity::Ancient);
    assert_eq!(Rarity::ALL.len(), 4);
}

#[test]
fn test_core_json_uses_display_names() {
    let core = Core::new("c1", CoreType::OrderOfTheSun, Rarity::Relic);
    let json = serde_json::to_value(&core).unwrap();

    assert_eq!(json["type"], "Order of the Sun");
    assert_eq!(json["rarity"], "Relic");

    let parsed: Core = serde_json::from_value(json).unwrap();
    assert_eq!(parsed, core);
}

#[test]
fn test_core_json_ignores_unknown_fields() {
    let core: Core = serde_json::from_str(
        r#"{"id":"c","type":"Chaos of the Star","rarity":"Epic","name":"ignored"}"#,
    )
    .unwrap();
    assert_eq!(core.category(), Category::Chaos);
}

#[test]
fn test_unknown_core_type_is_rejected() {
    let json = r#"{"id":"c","type":"Order of the Comet","rarity":"Epic"}"#;
    let parsed = serde_json::from_str::<Core>(json);
    assert!(parsed.is_err());
}

#[test]
fn test_astrogem_copies() {
    let gem = Astrogem::new("g", Category::Order, 4, 5);
    assert_eq!(gem.copies(), 1);
    assert_eq!(gem.clone().with_quantity(3).copies(), 3);
    assert_eq!(gem.with_quantity(0).copies(), 0);
}

#[test]
fn test_astrogem_quantity_is_optional_on_the_wire() {
    let gem: Astrogem =
        serde_json::from_str(r#"{"id":"g","category":"Chaos","willpower":3,"points":4}"#).unwrap();
    assert_eq!(gem.quantity, None);

    let json = serde_json::to_string(&gem).unwrap();
    assert!(!json.contains("quantity"));
}

#[test]
fn test_totals() {
    let gems = [
        Astrogem::new("a", Category::Order, 4, 5),
        Astrogem::new("b", Category::Order, 5, 4),
    ];
    assert_eq!(total_points(&gems), 9);
    assert_eq!(total_willpower(&gems), 9);
    assert_eq!(total_points(&Vec::<Astrogem>::new()), 0);
}

#[test]
fn test_solver_result_camel_case() {
    let result = SolverResult {
        core_id: "c1".to_string(),
        astrogems: vec![Astrogem::new("a", Category::Order, 5, 10)],
        total_points: 10,
        total_willpower: 5,
        breakpoints_hit: vec![10],
        score: GridScore::of(1),
    };
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["coreId"], "c1");
    assert_eq!(json["totalPoints"], 10);
    assert_eq!(json["totalWillpower"], 5);
    assert_eq!(json["breakpointsHit"][0], 10);
    assert_eq!(json["score"], 1.0);
    assert!(!result.is_empty());
}
