// ABOUTME: Configuration root for the NutriGuide intelligence engine
// ABOUTME: Exposes the intelligence config tree used by the scorer, planner, and recommender
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriGuide Contributors

//! Engine configuration
//!
//! All tunables are plain data with documented defaults. There is no global
//! configuration instance: callers load an `IntelligenceConfig` once and pass
//! references into the engine.

/// Scoring, nutrient planning, and recommendation configuration
pub mod intelligence;

pub use intelligence::{
    ConfigError, IntelligenceConfig, NutrientPlanConfig, RecommendationConfig, ScoringConfig,
};
