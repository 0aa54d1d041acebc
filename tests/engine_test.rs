// ABOUTME: End-to-end tests for the NutritionEngine facade and the async RecommendationService
// ABOUTME: Exercises collaborator sources, failure mapping, and full daily guidance assembly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriGuide Contributors
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use async_trait::async_trait;
use common::{approx_eq, init_test_logging, reference_snapshot, typical_snapshot};
use nutriguide::{
    AppError, AppResult, DailyGuidance, ErrorCode, HealthSnapshot, HealthSnapshotSource,
    InMemoryPreferences, NutritionEngine, PreferencesSource, RecommendationService,
    StaticSnapshotSource, UserPreferences, UserState,
};
use std::sync::Arc;

struct OfflineWearable;

#[async_trait]
impl HealthSnapshotSource for OfflineWearable {
    fn name(&self) -> &'static str {
        "offline_wearable"
    }

    async fn latest_snapshot(&self) -> AppResult<HealthSnapshot> {
        Err(AppError::new(
            ErrorCode::ExternalServiceUnavailable,
            "device not synced",
        ))
    }
}

struct BrokenPreferences;

#[async_trait]
impl PreferencesSource for BrokenPreferences {
    fn name(&self) -> &'static str {
        "broken_preferences"
    }

    async fn preferences(&self) -> AppResult<UserPreferences> {
        Err(AppError::internal("storage corrupted"))
    }
}

fn service_for(
    snapshot: HealthSnapshot,
) -> RecommendationService<StaticSnapshotSource, InMemoryPreferences> {
    RecommendationService::new(
        Arc::new(NutritionEngine::new()),
        StaticSnapshotSource::new(snapshot),
        InMemoryPreferences::default(),
    )
}

// ============================================================================
// Daily Guidance
// ============================================================================

#[tokio::test]
async fn test_daily_guidance_for_typical_day() {
    init_test_logging();
    let service = service_for(typical_snapshot());

    let guidance = service
        .daily_guidance(UserState::LowEnergy, 65.0)
        .await
        .unwrap();

    assert!((0.0..=1.0).contains(&guidance.report.overall));
    assert!(approx_eq(guidance.plan.body_weight_kg, 65.0));
    assert_eq!(guidance.recommendation.state, UserState::LowEnergy);
    // default pantry has Apple and Greek Yogurt enabled
    let names: Vec<&str> = guidance
        .recommendation
        .foods
        .iter()
        .map(|f| f.name.as_str())
        .collect();
    assert_eq!(names, vec!["Apple", "Greek Yogurt", "Oatmeal"]);
    assert_eq!(
        guidance.priority_suggestions.len(),
        guidance.plan.priority_nutrients.len()
    );
}

#[tokio::test]
async fn test_reference_day_flags_only_protein() {
    let service = service_for(reference_snapshot());
    let guidance = service.daily_guidance(UserState::Calm, 70.0).await.unwrap();

    // reference activity scores 1.0, which flags protein only
    let flagged: Vec<&str> = guidance
        .plan
        .priority_nutrients
        .iter()
        .map(|p| p.nutrient.as_str())
        .collect();
    assert_eq!(flagged, vec!["Protein"]);
    assert_eq!(guidance.priority_suggestions[0].nutrient, "Protein");
}

#[tokio::test]
async fn test_guidance_matches_direct_engine_calls() {
    let engine = NutritionEngine::new();
    let snapshot = typical_snapshot();
    let service = service_for(snapshot.clone());

    let guidance = service.daily_guidance(UserState::Stressed, 70.0).await.unwrap();

    let report = engine.compute_health_score(&snapshot);
    assert_eq!(guidance.report, report);
    assert_eq!(guidance.plan, engine.derive_nutrient_plan(&report, 70.0));
    assert_eq!(
        guidance.recommendation,
        engine.recommend(UserState::Stressed, &UserPreferences::with_default_pantry())
    );
}

#[tokio::test]
async fn test_guidance_serializes_to_json() {
    let service = service_for(typical_snapshot());
    let guidance = service.daily_guidance(UserState::SleepPrep, 70.0).await.unwrap();

    let json = serde_json::to_string(&guidance).unwrap();
    let parsed: DailyGuidance = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.recommendation, guidance.recommendation);
    assert!(json.contains("\"sleepPrep\""));
}

// ============================================================================
// Source Updates
// ============================================================================

#[tokio::test]
async fn test_preference_updates_are_visible() {
    let service = service_for(typical_snapshot());

    service
        .preferences()
        .update_from_json(r#"{"allergies": ["dairy"], "pantry": [{"name": "Banana"}]}"#)
        .await
        .unwrap();
    let recommendation = service.recommend(UserState::Stressed).await.unwrap();

    let names: Vec<&str> = recommendation.foods.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["Banana"]);
}

#[tokio::test]
async fn test_malformed_preferences_leave_store_unchanged() {
    let service = service_for(typical_snapshot());

    let error = service
        .preferences()
        .update_from_json("not json")
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidFormat);

    let stored = service.preferences().preferences().await.unwrap();
    assert_eq!(stored, UserPreferences::with_default_pantry());
}

#[tokio::test]
async fn test_snapshot_updates_are_visible() {
    let service = service_for(typical_snapshot());
    service.snapshots().set_snapshot(reference_snapshot()).await;

    let guidance = service.daily_guidance(UserState::Calm, 70.0).await.unwrap();
    assert!(approx_eq(guidance.report.overall, 1.0));
}

// ============================================================================
// Collaborator Failures
// ============================================================================

#[tokio::test]
async fn test_missing_snapshot_is_external_service_error() {
    let service = RecommendationService::new(
        Arc::new(NutritionEngine::new()),
        StaticSnapshotSource::empty(),
        InMemoryPreferences::default(),
    );

    let error = service
        .daily_guidance(UserState::Calm, 70.0)
        .await
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::ExternalServiceError);
    assert_eq!(error.context.resource_id.as_deref(), Some("static_snapshot"));
}

#[tokio::test]
async fn test_external_errors_pass_through() {
    let service = RecommendationService::new(
        Arc::new(NutritionEngine::new()),
        OfflineWearable,
        InMemoryPreferences::default(),
    );

    let error = service
        .daily_guidance(UserState::Calm, 70.0)
        .await
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::ExternalServiceUnavailable);
    assert_eq!(error.message, "device not synced");
}

#[tokio::test]
async fn test_preference_failure_is_wrapped() {
    let service = RecommendationService::new(
        Arc::new(NutritionEngine::new()),
        StaticSnapshotSource::new(typical_snapshot()),
        BrokenPreferences,
    );

    let error = service.recommend(UserState::Calm).await.unwrap_err();

    assert_eq!(error.code, ErrorCode::ExternalServiceError);
    assert!(error.message.contains("storage corrupted"));
    assert!(std::error::Error::source(&error).is_some());
}

// ============================================================================
// Shared Engine
// ============================================================================

#[tokio::test]
async fn test_engine_is_shareable_across_tasks() {
    let engine = Arc::new(NutritionEngine::new());
    let prefs = Arc::new(UserPreferences::with_default_pantry());

    let handles: Vec<_> = UserState::ALL
        .into_iter()
        .map(|state| {
            let engine = Arc::clone(&engine);
            let prefs = Arc::clone(&prefs);
            tokio::spawn(async move { engine.recommend(state, &prefs) })
        })
        .collect();

    for (handle, state) in handles.into_iter().zip(UserState::ALL) {
        let recommendation = handle.await.unwrap();
        assert_eq!(recommendation, engine.recommend(state, &prefs));
    }
}
