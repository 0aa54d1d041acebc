// ABOUTME: Integration tests for the expanded food catalog and priority nutrient suggestions
// ABOUTME: Covers keyword search, tag lookup, validation, and compliant per-nutrient food lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriGuide Contributors
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{init_test_logging, report_with_scores};
use nutriguide::{
    Allergy, DietaryPreference, ErrorCode, FoodCatalog, FoodItem, NutrientPriority,
    NutritionEngine, UserPreferences,
};
use nutriguide_intelligence::food_catalog::search_keyword;
use nutriguide_intelligence::RecommendationConfig;

fn names(foods: &[FoodItem]) -> Vec<&str> {
    foods.iter().map(|f| f.name.as_str()).collect()
}

// ============================================================================
// Search
// ============================================================================

#[test]
fn test_builtin_catalog_size() {
    let catalog = FoodCatalog::builtin();
    assert_eq!(catalog.len(), 27);
    assert!(!catalog.is_empty());
}

#[test]
fn test_search_matches_tags_names_and_rationale_in_catalog_order() {
    let catalog = FoodCatalog::builtin();

    let magnesium = catalog.search("Magnesium", 10);
    assert_eq!(
        names(&magnesium),
        vec!["Dark Chocolate (85%)", "Almonds", "Spinach", "Pumpkin Seeds"]
    );

    let hydrating = catalog.search("hydrating", 10);
    assert_eq!(
        names(&hydrating),
        vec!["Coconut Water", "Watermelon", "Cucumber", "Herbal Tea"]
    );
}

#[test]
fn test_search_respects_limit() {
    let catalog = FoodCatalog::builtin();
    assert_eq!(catalog.search("protein", 10).len(), 7);
    assert_eq!(
        names(&catalog.search("protein", 2)),
        vec!["Grilled Chicken Breast", "Salmon Fillet"]
    );
    assert!(catalog.search("protein", 0).is_empty());
}

#[test]
fn test_search_without_match_is_empty() {
    assert!(FoodCatalog::builtin().search("unobtainium", 10).is_empty());
}

#[test]
fn test_by_tag_is_exact() {
    let catalog = FoodCatalog::builtin();
    assert_eq!(catalog.by_tag("recovery").len(), 3);
    assert!(catalog.by_tag("recov").is_empty());
}

#[test]
fn test_get_ignores_case() {
    let catalog = FoodCatalog::builtin();
    let walnuts = catalog.get("walnuts").expect("walnuts in catalog");
    assert_eq!(walnuts.icon, "🌰");
    assert!(catalog.get("Walnut").is_none());
}

#[test]
fn test_water_maps_to_hydrating_keyword() {
    assert_eq!(search_keyword("Water"), "hydrating");
    assert_eq!(search_keyword("Tryptophan"), "tryptophan");
}

#[test]
fn test_from_foods_rejects_blank_names() {
    let mut food = FoodCatalog::builtin().foods()[0].clone();
    food.name = "   ".to_owned();

    let error = FoodCatalog::from_foods(vec![food]).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}

#[test]
fn test_from_foods_allows_duplicate_names() {
    let food = FoodCatalog::builtin().foods()[0].clone();
    let catalog = FoodCatalog::from_foods(vec![food.clone(), food]).unwrap();
    assert_eq!(catalog.len(), 2);
}

// ============================================================================
// Priority Suggestions
// ============================================================================

#[test]
fn test_suggestions_follow_priority_order() {
    init_test_logging();
    let engine = NutritionEngine::new();
    let report = report_with_scores(0.8, 0.5, 0.9, 0.3, 0.4);
    let plan = engine.derive_nutrient_plan(&report, 70.0);

    let suggestions = engine.suggest_foods(&plan.priority_nutrients, &UserPreferences::default());

    let nutrients: Vec<&str> = suggestions.iter().map(|s| s.nutrient.as_str()).collect();
    assert_eq!(nutrients, vec!["Protein", "Magnesium", "Tryptophan", "Water"]);
    assert_eq!(suggestions[2].priority, NutrientPriority::Medium);

    assert_eq!(
        names(&suggestions[0].foods),
        vec!["Greek Yogurt", "Grilled Chicken Breast", "Lentils"]
    );
    assert_eq!(
        names(&suggestions[1].foods),
        vec!["Almonds", "Dark Chocolate (85%)", "Pumpkin Seeds"]
    );
    assert_eq!(
        names(&suggestions[2].foods),
        vec!["Milk", "Oatmeal", "Turkey Breast"]
    );
    assert_eq!(
        names(&suggestions[3].foods),
        vec!["Coconut Water", "Cucumber", "Herbal Tea"]
    );
}

#[test]
fn test_suggestions_apply_preferences_and_allergies() {
    let engine = NutritionEngine::new();
    let report = report_with_scores(0.8, 0.5, 0.9, 0.3, 0.4);
    let plan = engine.derive_nutrient_plan(&report, 70.0);

    let vegan = UserPreferences::default().with_preference(DietaryPreference::Vegan);
    let suggestions = engine.suggest_foods(&plan.priority_nutrients, &vegan);
    assert_eq!(
        names(&suggestions[0].foods),
        vec!["Lentils", "Pumpkin Seeds", "Quinoa"]
    );

    let dairy = UserPreferences::default().with_allergy(Allergy::Dairy);
    let suggestions = engine.suggest_foods(&plan.priority_nutrients, &dairy);
    assert_eq!(
        names(&suggestions[2].foods),
        vec!["Oatmeal", "Turkey Breast", "Walnuts"]
    );
}

#[test]
fn test_suggestions_capped_at_three_foods_for_oversized_config() {
    let engine = NutritionEngine::new();
    let report = report_with_scores(0.8, 0.5, 0.9, 0.3, 0.4);
    let plan = engine.derive_nutrient_plan(&report, 70.0);
    let config = RecommendationConfig {
        max_foods: 6,
        search_limit: 10,
    };

    let suggestions = FoodCatalog::builtin().suggest_for_priorities(
        &plan.priority_nutrients[..1],
        &UserPreferences::default(),
        &config,
    );

    assert_eq!(suggestions.len(), 1);
    assert_eq!(
        names(&suggestions[0].foods),
        vec!["Greek Yogurt", "Grilled Chicken Breast", "Lentils"]
    );
}

#[test]
fn test_no_priorities_no_suggestions() {
    let engine = NutritionEngine::new();
    assert!(engine
        .suggest_foods(&[], &UserPreferences::with_default_pantry())
        .is_empty());
}
