// ABOUTME: Integration tests for dietary compliance filtering and pantry-first ranking
// ABOUTME: Covers allergy exclusion, AND preference matching, pantry ordering, and result bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriGuide Contributors
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{init_test_logging, prefs_with_pantry};
use nutriguide::{
    Allergy, DietaryPreference, FoodItem, PantryItem, StateCatalog, UserPreferences, UserState,
};
use nutriguide_intelligence::FoodFilter;

fn state_foods(state: UserState) -> Vec<FoodItem> {
    StateCatalog::builtin().lookup(state).foods.to_vec()
}

fn names(foods: &[FoodItem]) -> Vec<&str> {
    foods.iter().map(|f| f.name.as_str()).collect()
}

// ============================================================================
// Pantry Ranking
// ============================================================================

#[test]
fn test_stressed_with_pantry_ranks_pantry_first() {
    init_test_logging();
    let prefs = prefs_with_pantry(&["Banana", "Yogurt"]);

    let ranked = FoodFilter::filter_and_rank(&state_foods(UserState::Stressed), &prefs);

    assert_eq!(names(&ranked), vec!["Banana", "Yogurt", "Dark Chocolate (70%+)"]);
}

#[test]
fn test_pantry_match_ignores_case_and_disabled_items() {
    let prefs = UserPreferences::default()
        .with_pantry_item(PantryItem::new("yogurt", "", true))
        .with_pantry_item(PantryItem::new("Banana", "", false));

    let ranked = FoodFilter::filter_and_rank(&state_foods(UserState::Stressed), &prefs);

    assert_eq!(names(&ranked), vec!["Yogurt", "Banana", "Dark Chocolate (70%+)"]);
}

#[test]
fn test_no_pantry_sorts_by_name() {
    let ranked =
        FoodFilter::filter_and_rank(&state_foods(UserState::PostWorkout), &UserPreferences::default());
    assert_eq!(names(&ranked), vec!["Almonds", "Chicken Breast", "Sweet Potato"]);
}

#[test]
fn test_default_pantry_promotes_apple() {
    let prefs = UserPreferences::with_default_pantry();
    let ranked = FoodFilter::filter_and_rank(&state_foods(UserState::LowEnergy), &prefs);
    assert_eq!(names(&ranked), vec!["Apple", "Greek Yogurt", "Oatmeal"]);
}

// ============================================================================
// Allergies
// ============================================================================

#[test]
fn test_dairy_allergy_removes_substring_matches() {
    let prefs = prefs_with_pantry(&["Banana", "Yogurt"]).with_allergy(Allergy::Dairy);

    let ranked = FoodFilter::filter_and_rank(&state_foods(UserState::Stressed), &prefs);

    assert_eq!(names(&ranked), vec!["Banana"]);
}

#[test]
fn test_nut_allergy_on_focus_foods() {
    let prefs = UserPreferences::default().with_allergy(Allergy::Nuts);
    let ranked = FoodFilter::filter_and_rank(&state_foods(UserState::FocusNeeded), &prefs);
    assert_eq!(names(&ranked), vec!["Blueberries", "Green Tea"]);
}

#[test]
fn test_unknown_allergy_excludes_nothing() {
    let prefs = UserPreferences::default().with_allergy(Allergy::parse("pollen"));
    let ranked = FoodFilter::filter_and_rank(&state_foods(UserState::Stressed), &prefs);
    assert_eq!(ranked.len(), 3);
}

// ============================================================================
// Preferences
// ============================================================================

#[test]
fn test_vegetarian_preference() {
    let prefs = UserPreferences::default().with_preference(DietaryPreference::Vegetarian);
    let ranked = FoodFilter::filter_and_rank(&state_foods(UserState::Stressed), &prefs);
    assert_eq!(names(&ranked), vec!["Banana", "Dark Chocolate (70%+)"]);
}

#[test]
fn test_preferences_are_anded() {
    let vegan = UserPreferences::default().with_preference(DietaryPreference::Vegan);
    let ranked = FoodFilter::filter_and_rank(&state_foods(UserState::LowEnergy), &vegan);
    assert_eq!(names(&ranked), vec!["Apple", "Oatmeal"]);

    let vegan_halal = vegan.with_preference(DietaryPreference::Halal);
    let ranked = FoodFilter::filter_and_rank(&state_foods(UserState::LowEnergy), &vegan_halal);
    assert_eq!(names(&ranked), vec!["Apple"]);
}

#[test]
fn test_unknown_preference_matches_nothing() {
    let prefs = UserPreferences::default().with_preference(DietaryPreference::parse("paleo"));
    assert!(FoodFilter::filter_and_rank(&state_foods(UserState::Calm), &prefs).is_empty());
}

#[test]
fn test_is_compliant_single_food() {
    let foods = state_foods(UserState::Stressed);
    let yogurt = foods.iter().find(|f| f.name == "Yogurt").unwrap();
    let dairy = UserPreferences::default().with_allergy(Allergy::Dairy);

    assert!(!FoodFilter::is_compliant(yogurt, &dairy));
    assert!(FoodFilter::is_compliant(yogurt, &UserPreferences::default()));
}

// ============================================================================
// Bounds & Invariants
// ============================================================================

#[test]
fn test_empty_input_gives_empty_output() {
    let prefs = UserPreferences::with_default_pantry();
    assert!(FoodFilter::filter_and_rank(&[], &prefs).is_empty());
}

#[test]
fn test_output_is_bounded_subset_with_pantry_prefix() {
    let candidates = nutriguide::FoodCatalog::builtin().foods().to_vec();
    let pref_sets = [
        UserPreferences::default(),
        UserPreferences::with_default_pantry(),
        prefs_with_pantry(&["Walnuts", "Salmon Fillet", "Quinoa"]),
        UserPreferences::default().with_preference(DietaryPreference::Vegan),
        UserPreferences::default()
            .with_allergy(Allergy::Dairy)
            .with_allergy(Allergy::Nuts),
    ];

    for prefs in &pref_sets {
        let ranked = FoodFilter::filter_and_rank(&candidates, prefs);
        assert!(ranked.len() <= 3);
        assert!(ranked.iter().all(|food| candidates.contains(food)));

        let pantry = prefs.enabled_pantry_names();
        let flags: Vec<bool> = ranked
            .iter()
            .map(|f| pantry.contains(&f.name.to_lowercase()))
            .collect();
        assert!(
            flags.windows(2).all(|w| w[0] || !w[1]),
            "pantry foods must come first: {:?}",
            names(&ranked)
        );
        for pair in ranked.windows(2) {
            if flags_equal(&pantry, &pair[0], &pair[1]) {
                assert!(pair[0].name <= pair[1].name);
            }
        }
    }
}

fn flags_equal(
    pantry: &std::collections::BTreeSet<String>,
    a: &FoodItem,
    b: &FoodItem,
) -> bool {
    pantry.contains(&a.name.to_lowercase()) == pantry.contains(&b.name.to_lowercase())
}

#[test]
fn test_custom_limit() {
    let candidates = nutriguide::FoodCatalog::builtin().foods().to_vec();
    let ranked =
        FoodFilter::filter_and_rank_with_limit(&candidates, &UserPreferences::default(), 5);
    assert_eq!(ranked.len(), 5);
}

#[test]
fn test_pantry_matches_reports_names() {
    let prefs = prefs_with_pantry(&["banana"]);
    let matches = FoodFilter::pantry_matches(&state_foods(UserState::SleepPrep), &prefs);
    assert!(matches.contains("Banana"));
    assert_eq!(matches.len(), 1);
}
