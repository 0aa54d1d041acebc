// ABOUTME: Nutrient plan configuration for macro targets, priority thresholds, and timing
// ABOUTME: Per-kg bases, score multipliers, placeholder intake fractions, hydration and snack triggers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriGuide Contributors

//! Nutrient Plan Configuration
//!
//! Macro targets are `per_kg * body_weight * multiplier` where each multiplier
//! grows with the domain score that drives it:
//!
//! - `activity = 1 + activity_score * activity_weight`
//! - `stress = 1 + (1 - stress_score) * stress_weight`
//! - `sleep = 1 + (1 - sleep_score) * sleep_weight`
//!
//! # Scientific References
//!
//! - Protein: Phillips & Van Loon (2011) DOI: 10.1080/02640414.2011.619204
//! - Carbs: Burke et al. (2011) DOI: 10.1080/02640414.2011.585473

use nutriguide_core::constants::body;
use serde::{Deserialize, Serialize};

/// Nutrient Plan Configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutrientPlanConfig {
    /// Macro target bases and multipliers
    pub macros: MacroTargetConfig,
    /// Placeholder "current intake" fractions
    pub intake: IntakeEstimateConfig,
    /// Domain score thresholds that raise priority nutrients
    pub priorities: PriorityThresholdsConfig,
    /// Daily water target
    pub hydration: HydrationPlanConfig,
    /// Snack triggers for the timing plan
    pub timing: TimingPlanConfig,
}

/// Macro target bases and multiplier weights
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroTargetConfig {
    /// Base protein (g/kg)
    pub protein_g_per_kg: f64,
    /// Base carbohydrate (g/kg)
    pub carbs_g_per_kg: f64,
    /// Base fat (g/kg)
    pub fat_g_per_kg: f64,
    /// Weight of the activity score in the activity multiplier
    pub activity_multiplier_weight: f64,
    /// Weight of the stress deficit in the stress multiplier
    pub stress_multiplier_weight: f64,
    /// Weight of the sleep deficit in the sleep multiplier
    pub sleep_multiplier_weight: f64,
    /// Recommended daily fiber (g)
    pub fiber_recommended_g: f64,
    /// Body weight used when the caller's value is unusable (kg)
    pub reference_body_weight_kg: f64,
}

impl Default for MacroTargetConfig {
    fn default() -> Self {
        Self {
            protein_g_per_kg: 1.6,
            carbs_g_per_kg: 4.0,
            fat_g_per_kg: 1.0,
            activity_multiplier_weight: 0.5,
            stress_multiplier_weight: 0.3,
            sleep_multiplier_weight: 0.2,
            fiber_recommended_g: 25.0,
            reference_body_weight_kg: body::REFERENCE_BODY_WEIGHT_KG,
        }
    }
}

/// Estimated current intake
///
/// No food diary feeds the engine yet, so "current" intake is a fixed
/// fraction of each target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntakeEstimateConfig {
    /// Protein intake as a fraction of target
    pub protein_fraction: f64,
    /// Carbohydrate intake as a fraction of target
    pub carbs_fraction: f64,
    /// Fat intake as a fraction of target
    pub fat_fraction: f64,
    /// Current daily fiber (g)
    pub fiber_current_g: f64,
}

impl Default for IntakeEstimateConfig {
    fn default() -> Self {
        Self {
            protein_fraction: 0.7,
            carbs_fraction: 0.8,
            fat_fraction: 0.6,
            fiber_current_g: 15.0,
        }
    }
}

/// Domain score thresholds for priority nutrient detection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriorityThresholdsConfig {
    /// Activity above this raises Protein
    pub high_activity: f64,
    /// Stress score below this raises Magnesium
    pub low_stress_score: f64,
    /// Sleep below this raises Tryptophan
    pub poor_sleep: f64,
    /// Hydration below this raises Water
    pub low_hydration: f64,
}

impl Default for PriorityThresholdsConfig {
    fn default() -> Self {
        Self {
            high_activity: 0.7,
            low_stress_score: 0.5,
            poor_sleep: 0.6,
            low_hydration: 0.6,
        }
    }
}

/// Daily water target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HydrationPlanConfig {
    /// Recommended daily water (liters)
    pub recommended_liters: f64,
}

impl Default for HydrationPlanConfig {
    fn default() -> Self {
        Self {
            recommended_liters: 3.0,
        }
    }
}

/// Snack triggers for the timing plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingPlanConfig {
    /// Exercise minutes above which workout snacks are suggested
    pub workout_snack_exercise_minutes: u32,
    /// Sleep score below which a bedtime snack is suggested
    pub bedtime_snack_sleep_score: f64,
}

impl Default for TimingPlanConfig {
    fn default() -> Self {
        Self {
            workout_snack_exercise_minutes: 30,
            bedtime_snack_sleep_score: 0.6,
        }
    }
}
