// ABOUTME: Integration tests for state-driven recommendation assembly and the state catalog
// ABOUTME: Covers every state, empty results, preference reapplication, titles, and custom catalogs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriGuide Contributors
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{init_test_logging, prefs_with_pantry};
use nutriguide::{
    Allergy, DietaryPreference, ErrorCode, NutritionEngine, StateCatalog, UserPreferences,
    UserState,
};

fn food_names(engine: &NutritionEngine, state: UserState, prefs: &UserPreferences) -> Vec<String> {
    engine
        .recommend(state, prefs)
        .foods
        .into_iter()
        .map(|f| f.name)
        .collect()
}

// ============================================================================
// Assembly
// ============================================================================

#[test]
fn test_stressed_with_pantry() {
    init_test_logging();
    let engine = NutritionEngine::new();
    let prefs = prefs_with_pantry(&["Banana", "Yogurt"]);

    let recommendation = engine.recommend(UserState::Stressed, &prefs);

    assert_eq!(recommendation.state, UserState::Stressed);
    assert_eq!(
        recommendation.reason,
        "HRV lower vs baseline • Late afternoon dip • Suggest Mg + B6 for relaxation"
    );
    assert_eq!(
        food_names(&engine, UserState::Stressed, &prefs),
        vec!["Banana", "Yogurt", "Dark Chocolate (70%+)"]
    );
}

#[test]
fn test_stressed_with_dairy_allergy() {
    let engine = NutritionEngine::new();
    let prefs = prefs_with_pantry(&["Banana", "Yogurt"]).with_allergy(Allergy::Dairy);
    assert_eq!(food_names(&engine, UserState::Stressed, &prefs), vec!["Banana"]);
}

#[test]
fn test_every_state_yields_three_foods_without_constraints() {
    let engine = NutritionEngine::new();
    for state in UserState::ALL {
        let recommendation = engine.recommend(state, &UserPreferences::default());
        assert_eq!(recommendation.foods.len(), 3, "{state}");
        assert!(!recommendation.reason.is_empty());
        assert!(recommendation.foods.iter().all(|f| !f.icon.is_empty()));
    }
}

#[test]
fn test_no_compliant_food_keeps_reason() {
    let engine = NutritionEngine::new();
    let vegan = UserPreferences::default().with_preference(DietaryPreference::Vegan);

    let recommendation = engine.recommend(UserState::Stressed, &vegan);

    assert!(recommendation.is_empty());
    assert!(recommendation.foods.is_empty());
    assert!(recommendation.reason.starts_with("HRV lower vs baseline"));
}

#[test]
fn test_recommendation_is_deterministic() {
    let engine = NutritionEngine::new();
    let prefs = UserPreferences::with_default_pantry();
    let first = engine.recommend(UserState::LowEnergy, &prefs);
    let second = engine.recommend(UserState::LowEnergy, &prefs);
    assert_eq!(first, second);
}

#[test]
fn test_recommend_from_json() {
    let engine = NutritionEngine::new();
    let json = r#"{"preferences": ["vegan"], "allergies": [], "pantry": []}"#;

    let recommendation = engine
        .recommend_from_json(UserState::LowEnergy, json)
        .unwrap();
    let names: Vec<&str> = recommendation.foods.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["Apple", "Oatmeal"]);

    let error = engine
        .recommend_from_json(UserState::LowEnergy, "{\"preferences\": [")
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidFormat);
}

// ============================================================================
// Presentation
// ============================================================================

#[test]
fn test_title_uses_display_name() {
    let engine = NutritionEngine::new();
    let prefs = UserPreferences::default();
    assert_eq!(
        engine.recommend(UserState::Stressed, &prefs).title(),
        "Top 3 for Stressed"
    );
    assert_eq!(
        engine.recommend(UserState::LowEnergy, &prefs).title(),
        "Top 3 for Low Energy"
    );
}

#[test]
fn test_short_reason_keeps_two_clauses() {
    let engine = NutritionEngine::new();
    let prefs = UserPreferences::default();
    assert_eq!(
        engine.recommend(UserState::Stressed, &prefs).short_reason(),
        "HRV lower vs baseline • Late afternoon dip"
    );
    assert_eq!(
        engine.recommend(UserState::FocusNeeded, &prefs).short_reason(),
        "Need to improve focus • Suggest stable blood sugar and brain nutrition"
    );
}

// ============================================================================
// Preference Changes
// ============================================================================

#[test]
fn test_apply_preferences_refilters_current_foods() {
    let engine = NutritionEngine::new();
    let mut recommendation = engine.recommend(UserState::Stressed, &UserPreferences::default());
    assert_eq!(recommendation.foods.len(), 3);

    recommendation.apply_preferences(&UserPreferences::default().with_allergy(Allergy::Dairy));

    let names: Vec<&str> = recommendation.foods.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["Banana"]);
    assert_eq!(recommendation.state, UserState::Stressed);
}

#[test]
fn test_apply_preferences_can_empty_the_list() {
    let engine = NutritionEngine::new();
    let mut recommendation = engine.recommend(UserState::PostWorkout, &UserPreferences::default());

    recommendation
        .apply_preferences(&UserPreferences::default().with_preference(DietaryPreference::Kosher));

    assert!(recommendation.is_empty());
    assert!(!recommendation.short_reason().is_empty());
}

// ============================================================================
// Custom Catalogs
// ============================================================================

#[test]
fn test_with_entry_replaces_one_state() {
    let builtin = StateCatalog::builtin();
    let mut entry = builtin.lookup(UserState::Stressed).clone();
    entry.state = UserState::Calm;
    entry.rationale = "Custom calm foods".to_owned();

    let catalog = builtin.clone().with_entry(entry).unwrap();
    let engine = NutritionEngine::new().with_state_catalog(catalog);

    let recommendation = engine.recommend(UserState::Calm, &UserPreferences::default());
    assert_eq!(recommendation.reason, "Custom calm foods");
    assert_eq!(recommendation.foods[0].name, "Banana");
    assert_eq!(
        engine.state_catalog().lookup(UserState::Stressed),
        builtin.lookup(UserState::Stressed)
    );
}

#[test]
fn test_from_entries_requires_every_state() {
    let builtin = StateCatalog::builtin();
    let entries = builtin.entries().to_vec();

    let rebuilt = StateCatalog::from_entries(entries.iter().rev().cloned()).unwrap();
    assert_eq!(rebuilt, builtin);

    let missing = StateCatalog::from_entries(entries.into_iter().skip(1)).unwrap_err();
    assert_eq!(missing.code, ErrorCode::InvalidInput);
}

#[test]
fn test_blank_food_name_rejected() {
    let builtin = StateCatalog::builtin();
    let mut entry = builtin.lookup(UserState::Calm).clone();
    entry.foods[1].name = String::new();

    let error = builtin.with_entry(entry).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}
