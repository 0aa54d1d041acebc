// ABOUTME: NutritionEngine facade bundling configuration with the state and food catalogs
// ABOUTME: Exposes scoring, nutrient planning, recommendation, and nutrient food suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriGuide Contributors

//! The public entry point to the engine.
//!
//! A `NutritionEngine` owns its configuration and catalogs. It holds no
//! mutable state, so one instance can be shared across threads behind an
//! `Arc` and every call is a pure function of its arguments.

use nutriguide_core::errors::AppResult;
use nutriguide_core::models::{HealthSnapshot, UserPreferences, UserState};
use nutriguide_intelligence::{
    FoodCatalog, HealthScorer, IntelligenceConfig, NutrientCalculator, NutrientPlan,
    NutrientSuggestion, PriorityNutrient, Recommendation, RecommendationEngine, ScoreReport,
    StateCatalog,
};
use tracing::info;

/// Health scoring and food recommendation engine
#[derive(Debug, Clone, Default)]
pub struct NutritionEngine {
    config: IntelligenceConfig,
    states: StateCatalog,
    foods: FoodCatalog,
}

impl NutritionEngine {
    /// Engine with default configuration and built-in catalogs
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with a caller-supplied configuration
    ///
    /// # Errors
    ///
    /// Returns a `ConfigInvalid` error if the configuration fails validation
    pub fn with_config(config: IntelligenceConfig) -> AppResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    /// Engine configured from `NUTRIGUIDE_*` environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be parsed or validation fails
    pub fn load() -> AppResult<Self> {
        let config = IntelligenceConfig::load()?;
        let engine = Self {
            config,
            ..Self::default()
        };
        info!(
            states = engine.states.entries().len(),
            foods = engine.foods.len(),
            "Nutrition engine ready"
        );
        Ok(engine)
    }

    /// Replace the state catalog
    #[must_use]
    pub fn with_state_catalog(mut self, states: StateCatalog) -> Self {
        self.states = states;
        self
    }

    /// Replace the food catalog
    #[must_use]
    pub fn with_food_catalog(mut self, foods: FoodCatalog) -> Self {
        self.foods = foods;
        self
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &IntelligenceConfig {
        &self.config
    }

    /// State catalog used by [`Self::recommend`]
    #[must_use]
    pub const fn state_catalog(&self) -> &StateCatalog {
        &self.states
    }

    /// Food catalog used by [`Self::suggest_foods`]
    #[must_use]
    pub const fn food_catalog(&self) -> &FoodCatalog {
        &self.foods
    }

    /// Score the five health domains of a snapshot
    #[must_use]
    pub fn compute_health_score(&self, snapshot: &HealthSnapshot) -> ScoreReport {
        HealthScorer::score(snapshot, &self.config.scoring)
    }

    /// Score a series of snapshots, preserving order
    #[must_use]
    pub fn score_history(&self, snapshots: &[HealthSnapshot]) -> Vec<ScoreReport> {
        HealthScorer::score_history(snapshots, &self.config.scoring)
    }

    /// Derive the daily nutrient plan from a score report
    #[must_use]
    pub fn derive_nutrient_plan(&self, report: &ScoreReport, body_weight_kg: f64) -> NutrientPlan {
        NutrientCalculator::derive_nutrient_plan(report, body_weight_kg, &self.config.nutrient_plan)
    }

    /// Up to three compliant foods for the user's state
    #[must_use]
    pub fn recommend(&self, state: UserState, prefs: &UserPreferences) -> Recommendation {
        RecommendationEngine::recommend(&self.states, state, prefs, &self.config.recommendation)
    }

    /// Recommendation for preferences supplied as JSON
    ///
    /// # Errors
    ///
    /// Returns an `InvalidFormat` error if the preferences JSON is malformed
    pub fn recommend_from_json(
        &self,
        state: UserState,
        preferences_json: &str,
    ) -> AppResult<Recommendation> {
        let prefs = UserPreferences::from_json(preferences_json)?;
        Ok(self.recommend(state, &prefs))
    }

    /// Compliant catalog foods for each priority nutrient
    #[must_use]
    pub fn suggest_foods(
        &self,
        priorities: &[PriorityNutrient],
        prefs: &UserPreferences,
    ) -> Vec<NutrientSuggestion> {
        self.foods
            .suggest_for_priorities(priorities, prefs, &self.config.recommendation)
    }
}
