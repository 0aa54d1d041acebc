// ABOUTME: Async collaborator traits supplying health snapshots and user preferences to the engine
// ABOUTME: In-memory sources plus the RecommendationService that assembles daily guidance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriGuide Contributors

//! Collaborator interfaces
//!
//! Health data and preferences live outside the engine. The service awaits
//! both sources, then runs the synchronous pipeline. Source failures are
//! reported as `ExternalServiceError` before the engine is reached.

use crate::engine::NutritionEngine;
use async_trait::async_trait;
use nutriguide_core::errors::{AppError, AppResult, ErrorCode};
use nutriguide_core::models::{HealthSnapshot, UserPreferences, UserState};
use nutriguide_intelligence::{NutrientPlan, NutrientSuggestion, Recommendation, ScoreReport};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, instrument, warn};

/// Supplies the most recent health snapshot
#[async_trait]
pub trait HealthSnapshotSource: Send + Sync {
    /// Source name used in error reports
    fn name(&self) -> &'static str;

    /// Latest snapshot for the user
    async fn latest_snapshot(&self) -> AppResult<HealthSnapshot>;
}

/// Supplies the user's dietary preferences, allergies, and pantry
#[async_trait]
pub trait PreferencesSource: Send + Sync {
    /// Source name used in error reports
    fn name(&self) -> &'static str;

    /// Current preferences
    async fn preferences(&self) -> AppResult<UserPreferences>;
}

/// Snapshot source holding one replaceable snapshot
pub struct StaticSnapshotSource {
    snapshot: RwLock<Option<HealthSnapshot>>,
}

impl StaticSnapshotSource {
    /// Source that always returns `snapshot`
    #[must_use]
    pub fn new(snapshot: HealthSnapshot) -> Self {
        Self {
            snapshot: RwLock::new(Some(snapshot)),
        }
    }

    /// Source with no data yet
    #[must_use]
    pub fn empty() -> Self {
        Self {
            snapshot: RwLock::new(None),
        }
    }

    /// Replace the stored snapshot
    pub async fn set_snapshot(&self, snapshot: HealthSnapshot) {
        *self.snapshot.write().await = Some(snapshot);
    }
}

#[async_trait]
impl HealthSnapshotSource for StaticSnapshotSource {
    fn name(&self) -> &'static str {
        "static_snapshot"
    }

    async fn latest_snapshot(&self) -> AppResult<HealthSnapshot> {
        self.snapshot
            .read()
            .await
            .clone()
            .ok_or_else(|| AppError::not_found("health snapshot"))
    }
}

/// Preferences store seeded with the default pantry
pub struct InMemoryPreferences {
    preferences: RwLock<UserPreferences>,
}

impl InMemoryPreferences {
    /// Store holding `preferences`
    #[must_use]
    pub fn new(preferences: UserPreferences) -> Self {
        Self {
            preferences: RwLock::new(preferences),
        }
    }

    /// Replace the stored preferences
    pub async fn update(&self, preferences: UserPreferences) {
        *self.preferences.write().await = preferences;
    }

    /// Replace the stored preferences from their JSON form
    ///
    /// # Errors
    ///
    /// Returns an `InvalidFormat` error and leaves the store unchanged if the
    /// JSON is malformed
    pub async fn update_from_json(&self, json: &str) -> AppResult<()> {
        let parsed = UserPreferences::from_json(json)?;
        self.update(parsed).await;
        Ok(())
    }
}

impl Default for InMemoryPreferences {
    fn default() -> Self {
        Self::new(UserPreferences::with_default_pantry())
    }
}

#[async_trait]
impl PreferencesSource for InMemoryPreferences {
    fn name(&self) -> &'static str {
        "in_memory_preferences"
    }

    async fn preferences(&self) -> AppResult<UserPreferences> {
        Ok(self.preferences.read().await.clone())
    }
}

/// Everything the engine produces for one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyGuidance {
    /// Domain scores for the latest snapshot
    pub report: ScoreReport,
    /// Nutrient plan derived from the scores
    pub plan: NutrientPlan,
    /// State-driven food recommendation
    pub recommendation: Recommendation,
    /// Catalog foods for each priority nutrient
    pub priority_suggestions: Vec<NutrientSuggestion>,
}

/// Orchestrates collaborators and the engine
pub struct RecommendationService<S, P> {
    engine: Arc<NutritionEngine>,
    snapshots: S,
    preferences: P,
}

impl<S, P> RecommendationService<S, P>
where
    S: HealthSnapshotSource,
    P: PreferencesSource,
{
    /// Service over a shared engine and two sources
    #[must_use]
    pub const fn new(engine: Arc<NutritionEngine>, snapshots: S, preferences: P) -> Self {
        Self {
            engine,
            snapshots,
            preferences,
        }
    }

    /// Shared engine
    #[must_use]
    pub fn engine(&self) -> &NutritionEngine {
        &self.engine
    }

    /// Snapshot source
    #[must_use]
    pub const fn snapshots(&self) -> &S {
        &self.snapshots
    }

    /// Preferences source
    #[must_use]
    pub const fn preferences(&self) -> &P {
        &self.preferences
    }

    /// Score, plan, and recommend for the given state
    ///
    /// # Errors
    ///
    /// Returns an `ExternalServiceError` if either source fails
    #[instrument(skip(self))]
    pub async fn daily_guidance(
        &self,
        state: UserState,
        body_weight_kg: f64,
    ) -> AppResult<DailyGuidance> {
        let snapshot = self
            .snapshots
            .latest_snapshot()
            .await
            .map_err(|e| source_failure(self.snapshots.name(), e))?;
        let prefs = self
            .preferences
            .preferences()
            .await
            .map_err(|e| source_failure(self.preferences.name(), e))?;

        let report = self.engine.compute_health_score(&snapshot);
        let plan = self.engine.derive_nutrient_plan(&report, body_weight_kg);
        let recommendation = self.engine.recommend(state, &prefs);
        let priority_suggestions = self.engine.suggest_foods(&plan.priority_nutrients, &prefs);

        info!(
            overall = report.overall,
            priorities = plan.priority_nutrients.len(),
            foods = recommendation.foods.len(),
            "Assembled daily guidance"
        );

        Ok(DailyGuidance {
            report,
            plan,
            recommendation,
            priority_suggestions,
        })
    }

    /// Recommendation only, using the stored preferences
    ///
    /// # Errors
    ///
    /// Returns an `ExternalServiceError` if the preferences source fails
    pub async fn recommend(&self, state: UserState) -> AppResult<Recommendation> {
        let prefs = self
            .preferences
            .preferences()
            .await
            .map_err(|e| source_failure(self.preferences.name(), e))?;
        Ok(self.engine.recommend(state, &prefs))
    }
}

fn source_failure(source: &'static str, error: AppError) -> AppError {
    warn!(source, code = ?error.code, error = %error, "Collaborator failed");
    match error.code {
        ErrorCode::ExternalServiceError | ErrorCode::ExternalServiceUnavailable => error,
        _ => AppError::external_service(source, error.message.clone()).with_source(error),
    }
}
