// ABOUTME: Core data models for the NutriGuide engine
// ABOUTME: Re-exports health snapshots, food items, preferences, and user states
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriGuide Contributors

//! # Data Models
//!
//! Value types shared by the engine and its callers. All models serialize
//! with serde so snapshots and preferences can arrive as JSON documents.
//!
//! ## Core Models
//!
//! - `HealthSnapshot`: one point-in-time set of biometric readings
//! - `FoodItem`: immutable catalog entry with nutrition and restriction flags
//! - `UserPreferences`: dietary preferences, allergies, and pantry
//! - `UserState`: discrete physiological/emotional state driving recommendations

mod food;
mod health;
mod preferences;
mod state;

pub use food::{FoodItem, Nutrition};
pub use health::{
    ActivityReading, HealthSnapshot, HrvReading, HydrationReading, SleepReading, StressReading,
};
pub use preferences::{Allergy, DietaryPreference, PantryItem, UserPreferences};
pub use state::UserState;
