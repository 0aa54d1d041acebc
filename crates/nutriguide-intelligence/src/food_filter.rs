// ABOUTME: Dietary compliance filtering and pantry-first ranking of candidate foods
// ABOUTME: Allergy exclusion, AND-across-preferences diet matching, deterministic top-N selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriGuide Contributors

//! Food Filter & Rank Engine
//!
//! 1. **Compliance**: a food is dropped if any of its allergy flags contains
//!    (case-insensitively) the label of a user allergy. When preferences are
//!    set, every preference label must be contained in at least one of the
//!    food's diet flags.
//! 2. **Ordering**: foods in the enabled pantry (case-insensitive exact name)
//!    come first; each group is sorted by name. The sort is stable.
//! 3. **Truncation** to the requested size.
//!
//! Unknown preference tokens match no diet flag, so they empty the result.
//! Unknown allergy tokens exclude nothing.

use nutriguide_core::constants::limits;
use nutriguide_core::models::{FoodItem, UserPreferences};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use tracing::debug;

/// Precomputed lowercase match labels for one filtering pass
struct CompliancePredicate {
    allergy_labels: Vec<String>,
    // `None` marks an unknown preference, which no food satisfies
    preference_labels: Vec<Option<String>>,
}

impl CompliancePredicate {
    fn new(prefs: &UserPreferences) -> Self {
        Self {
            allergy_labels: prefs
                .allergies
                .iter()
                .filter_map(|a| a.match_label())
                .collect(),
            preference_labels: prefs.preferences.iter().map(|p| p.match_label()).collect(),
        }
    }

    fn triggers_allergy(&self, food: &FoodItem) -> bool {
        food.allergy_flags.iter().any(|flag| {
            let flag = flag.to_lowercase();
            self.allergy_labels
                .iter()
                .any(|label| flag.contains(label.as_str()))
        })
    }

    fn satisfies_preferences(&self, food: &FoodItem) -> bool {
        if self.preference_labels.is_empty() {
            return true;
        }
        let flags: Vec<String> = food.diet_flags.iter().map(|f| f.to_lowercase()).collect();
        self.preference_labels.iter().all(|label| {
            label
                .as_deref()
                .is_some_and(|label| flags.iter().any(|flag| flag.contains(label)))
        })
    }

    fn accepts(&self, food: &FoodItem) -> bool {
        !self.triggers_allergy(food) && self.satisfies_preferences(food)
    }
}

/// Compliance filter and pantry-first ranker
pub struct FoodFilter;

impl FoodFilter {
    /// Whether a single food passes the user's allergy and preference checks
    #[must_use]
    pub fn is_compliant(food: &FoodItem, prefs: &UserPreferences) -> bool {
        CompliancePredicate::new(prefs).accepts(food)
    }

    /// Filter, rank, and keep at most three foods
    #[must_use]
    pub fn filter_and_rank(candidates: &[FoodItem], prefs: &UserPreferences) -> Vec<FoodItem> {
        Self::filter_and_rank_with_limit(candidates, prefs, limits::MAX_RECOMMENDED_FOODS)
    }

    /// Filter, rank, and keep at most `limit` foods
    ///
    /// The result is a subset of `candidates` in pantry-first, then
    /// name order. Empty input or no compliant food gives an empty list.
    #[must_use]
    pub fn filter_and_rank_with_limit(
        candidates: &[FoodItem],
        prefs: &UserPreferences,
        limit: usize,
    ) -> Vec<FoodItem> {
        let predicate = CompliancePredicate::new(prefs);
        let pantry = prefs.enabled_pantry_names();

        let mut ranked: Vec<(bool, &FoodItem)> = candidates
            .iter()
            .filter(|food| predicate.accepts(food))
            .map(|food| (pantry.contains(&food.name.to_lowercase()), food))
            .collect();
        let compliant = ranked.len();

        ranked.sort_by(|(a_in, a), (b_in, b)| Self::pantry_first(*a_in, a, *b_in, b));
        ranked.truncate(limit);

        debug!(
            candidates = candidates.len(),
            compliant,
            returned = ranked.len(),
            "Filtered and ranked foods"
        );

        ranked.into_iter().map(|(_, food)| food.clone()).collect()
    }

    fn pantry_first(a_in: bool, a: &FoodItem, b_in: bool, b: &FoodItem) -> Ordering {
        b_in.cmp(&a_in).then_with(|| a.name.cmp(&b.name))
    }

    /// Names of candidates that are in the user's enabled pantry
    #[must_use]
    pub fn pantry_matches(candidates: &[FoodItem], prefs: &UserPreferences) -> BTreeSet<String> {
        let pantry = prefs.enabled_pantry_names();
        candidates
            .iter()
            .filter(|food| pantry.contains(&food.name.to_lowercase()))
            .map(|food| food.name.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nutriguide_core::models::{DietaryPreference, Nutrition};
    use std::collections::BTreeMap;

    fn food(name: &str, diet: &[&str], allergy: &[&str]) -> FoodItem {
        FoodItem {
            name: name.to_owned(),
            icon: String::new(),
            nutrition: Nutrition {
                calories: 0,
                carbs_g: 0.0,
                protein_g: 0.0,
                fat_g: 0.0,
                micronutrients: BTreeMap::new(),
            },
            tags: vec![],
            diet_flags: diet.iter().map(|s| (*s).to_owned()).collect(),
            allergy_flags: allergy.iter().map(|s| (*s).to_owned()).collect(),
            rationale: String::new(),
            portion: String::new(),
        }
    }

    #[test]
    fn test_preferences_use_substring_of_label() {
        // "Gluten-free" is contained in "Gluten-Free" once lowercased
        let prefs = UserPreferences::default().with_preference(DietaryPreference::GlutenFree);
        let oats = food("Oats", &["Vegan", "Gluten-Free"], &[]);
        assert!(FoodFilter::is_compliant(&oats, &prefs));
    }

    #[test]
    fn test_pantry_first_ordering() {
        let a = food("Apple", &[], &[]);
        let b = food("Banana", &[], &[]);
        assert_eq!(FoodFilter::pantry_first(false, &a, true, &b), Ordering::Greater);
        assert_eq!(FoodFilter::pantry_first(true, &a, true, &b), Ordering::Less);
    }
}
