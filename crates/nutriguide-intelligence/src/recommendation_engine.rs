// ABOUTME: Recommendation assembler combining state catalog lookup with compliance filtering
// ABOUTME: Produces a rationale plus up to three ranked foods for the user's current state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriGuide Contributors

use crate::config::intelligence::RecommendationConfig;
use crate::food_filter::FoodFilter;
use crate::state_catalog::StateCatalog;
use nutriguide_core::constants::limits;
use nutriguide_core::models::{FoodItem, UserPreferences, UserState};
use serde::{Deserialize, Serialize};
use tracing::debug;

const CLAUSE_SEPARATOR: char = '•';

/// Foods recommended for one state, with the state's rationale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// State the recommendation was built for
    pub state: UserState,
    /// Rationale text from the state catalog
    pub reason: String,
    /// Ranked compliant foods, at most three, possibly empty
    pub foods: Vec<FoodItem>,
}

impl Recommendation {
    /// Card title, e.g. "Top 3 for Stressed"
    #[must_use]
    pub fn title(&self) -> String {
        format!("Top 3 for {}", self.state.display_name())
    }

    /// Condensed rationale
    ///
    /// Multi-clause reasons keep their first two clauses. Single-clause
    /// reasons longer than 60 characters are cut to 57 plus "...".
    #[must_use]
    pub fn short_reason(&self) -> String {
        let clauses: Vec<&str> = self.reason.split(CLAUSE_SEPARATOR).map(str::trim).collect();
        if clauses.len() > 1 {
            let kept = clauses.len().min(limits::SHORT_REASON_CLAUSES);
            return clauses[..kept].join(" • ");
        }

        if self.reason.chars().count() > limits::SHORT_REASON_MAX_CHARS {
            let head: String = self
                .reason
                .chars()
                .take(limits::SHORT_REASON_MAX_CHARS - 3)
                .collect();
            format!("{head}...")
        } else {
            self.reason.clone()
        }
    }

    /// True when no food survived filtering
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    /// Re-run compliance filtering and ranking over the current foods
    ///
    /// Used when preferences change after the recommendation was built.
    /// The rationale is kept even if every food is removed.
    pub fn apply_preferences(&mut self, prefs: &UserPreferences) {
        self.foods = FoodFilter::filter_and_rank(&self.foods, prefs);
    }
}

/// Builds recommendations from a state catalog
pub struct RecommendationEngine;

impl RecommendationEngine {
    /// Look up the state's canonical foods and keep the compliant ones
    #[must_use]
    pub fn recommend(
        catalog: &StateCatalog,
        state: UserState,
        prefs: &UserPreferences,
        config: &RecommendationConfig,
    ) -> Recommendation {
        let entry = catalog.lookup(state);
        let limit = config.max_foods.min(limits::MAX_RECOMMENDED_FOODS);
        let foods = FoodFilter::filter_and_rank_with_limit(&entry.foods, prefs, limit);

        debug!(
            state = state.token(),
            preferences = prefs.preferences.len(),
            allergies = prefs.allergies.len(),
            foods = foods.len(),
            "Assembled recommendation"
        );

        Recommendation {
            state,
            reason: entry.rationale.clone(),
            foods,
        }
    }
}
