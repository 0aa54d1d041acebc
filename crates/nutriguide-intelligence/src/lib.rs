// ABOUTME: Scoring, nutrient planning, and recommendation algorithms for NutriGuide
// ABOUTME: Pure synchronous engine crate with explicit configuration and catalog values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriGuide Contributors

#![deny(unsafe_code)]

//! # `NutriGuide` Intelligence
//!
//! The engine half of the workspace. Everything here is synchronous and
//! free of global state: configuration, the state catalog, and the food
//! catalog are values passed in by the caller.
//!
//! ## Pipeline
//!
//! 1. [`health_scorer`] turns a `HealthSnapshot` into five domain scores
//!    and an overall score.
//! 2. [`nutrient_calculator`] derives macro, micronutrient, hydration, and
//!    timing targets plus ordered priority nutrients from a score report.
//! 3. [`recommendation_engine`] looks the user's state up in the
//!    [`state_catalog`] and keeps compliant foods via [`food_filter`].
//! 4. [`food_catalog`] maps priority nutrients to foods from the expanded
//!    database.

/// Engine configuration with environment overrides and validation
pub mod config;

/// Expanded food database and nutrient keyword search
pub mod food_catalog;

/// Dietary compliance filtering and pantry-first ranking
pub mod food_filter;

/// Five-domain health scoring
pub mod health_scorer;

/// Nutrient needs derived from health scores
pub mod nutrient_calculator;

/// State-driven recommendation assembly
pub mod recommendation_engine;

/// State to canonical foods table
pub mod state_catalog;

pub use config::{
    ConfigError, IntelligenceConfig, NutrientPlanConfig, RecommendationConfig, ScoringConfig,
};
pub use food_catalog::{FoodCatalog, NutrientSuggestion};
pub use food_filter::FoodFilter;
pub use health_scorer::{DomainScore, HealthDomain, HealthScorer, ScoreBand, ScoreReport};
pub use nutrient_calculator::{
    HydrationPlan, MacroTargets, MicronutrientCategory, MicronutrientTarget, NutrientCalculator,
    NutrientPlan, NutrientPriority, NutrientTarget, PriorityNutrient, TimingPlan,
};
pub use recommendation_engine::{Recommendation, RecommendationEngine};
pub use state_catalog::{StateCatalog, StateEntry};
