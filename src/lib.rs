// ABOUTME: Main library entry point for the NutriGuide health scoring and recommendation engine
// ABOUTME: Re-exports the core models and engine crates and adds the facade, logging, and collaborators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriGuide Contributors

#![deny(unsafe_code)]

//! # `NutriGuide`
//!
//! Turns wearable health metrics into five domain scores, derives daily
//! nutrient needs from those scores, and recommends up to three foods for
//! the user's current state while honoring dietary preferences, allergies,
//! and pantry contents.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nutriguide::{NutritionEngine, UserPreferences, UserState};
//!
//! let engine = NutritionEngine::new();
//! let prefs = UserPreferences::with_default_pantry();
//! let recommendation = engine.recommend(UserState::Stressed, &prefs);
//! println!("{}: {}", recommendation.title(), recommendation.short_reason());
//! ```
//!
//! ## Architecture
//!
//! - **`nutriguide-core`**: errors, constants, and data models
//! - **`nutriguide-intelligence`**: scorer, calculator, catalogs, filter, assembler
//! - **this crate**: the [`NutritionEngine`] facade, logging setup, and async
//!   collaborator traits used by [`RecommendationService`]

/// Engine facade
pub mod engine;

/// Structured logging setup
pub mod logging;

/// Async data sources and the daily guidance service
pub mod providers;

pub use engine::NutritionEngine;
pub use providers::{
    DailyGuidance, HealthSnapshotSource, InMemoryPreferences, PreferencesSource,
    RecommendationService, StaticSnapshotSource,
};

pub use nutriguide_core::errors::{AppError, AppResult, ErrorCode};
pub use nutriguide_core::models::{
    ActivityReading, Allergy, DietaryPreference, FoodItem, HealthSnapshot, HrvReading,
    HydrationReading, Nutrition, PantryItem, SleepReading, StressReading, UserPreferences,
    UserState,
};
pub use nutriguide_intelligence::{
    DomainScore, FoodCatalog, HealthDomain, IntelligenceConfig, MacroTargets, NutrientPlan,
    NutrientPriority, NutrientSuggestion, NutrientTarget, PriorityNutrient, Recommendation,
    ScoreBand, ScoreReport, StateCatalog, StateEntry,
};
