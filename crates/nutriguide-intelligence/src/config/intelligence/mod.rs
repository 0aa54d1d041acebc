// ABOUTME: Intelligence configuration container with env overrides and validation
// ABOUTME: Aggregates scoring, nutrient plan, and recommendation configs into one loadable tree
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriGuide Contributors

//! Intelligence Configuration Module
//!
//! # Module Structure
//!
//! - `scoring` - Indicator references and score bands for the health scorer
//! - `nutrient_plan` - Macro bases, multipliers, priority thresholds, timing triggers
//! - `recommendation` - Output size limits
//!
//! `IntelligenceConfig::load()` starts from defaults, applies `NUTRIGUIDE_*`
//! environment overrides, then validates the result.

pub mod error;
pub mod nutrient_plan;
pub mod recommendation;
pub mod scoring;

pub use error::ConfigError;
pub use nutrient_plan::{
    HydrationPlanConfig, IntakeEstimateConfig, MacroTargetConfig, NutrientPlanConfig,
    PriorityThresholdsConfig, TimingPlanConfig,
};
pub use recommendation::RecommendationConfig;
pub use scoring::{
    ActivityReferenceConfig, HrvReferenceConfig, HydrationReferenceConfig, ScoreBandsConfig,
    ScoringConfig, SleepReferenceConfig, StressReferenceConfig,
};

use nutriguide_core::constants::limits;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use tracing::debug;

/// Main intelligence configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Configuration for the health domain scorer
    pub scoring: ScoringConfig,
    /// Configuration for the nutrient need calculator
    pub nutrient_plan: NutrientPlanConfig,
    /// Configuration for recommendation assembly
    pub recommendation: RecommendationConfig,
}

impl IntelligenceConfig {
    /// Load configuration from defaults and environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        debug!(
            max_foods = config.recommendation.max_foods,
            protein_g_per_kg = config.nutrient_plan.macros.protein_g_per_kg,
            "Intelligence configuration loaded"
        );
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_scoring()?;
        self.validate_nutrient_plan()?;

        let rec = &self.recommendation;
        if rec.max_foods == 0 || rec.max_foods > limits::MAX_RECOMMENDED_FOODS {
            return Err(ConfigError::ValueOutOfRange(
                "recommendation.max_foods must be between 1 and 3",
            ));
        }
        if rec.search_limit == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "recommendation.search_limit must be at least 1",
            ));
        }

        Ok(())
    }

    fn validate_scoring(&self) -> Result<(), ConfigError> {
        let s = &self.scoring;
        let references = [
            s.hrv.rmssd_reference_ms,
            s.hrv.sdnn_reference_ms,
            s.hrv.pnn50_reference_percent,
            s.sleep.total_sleep_reference_hours,
            s.sleep.deep_sleep_reference_hours,
            s.sleep.efficiency_reference_percent,
            s.sleep.onset_reference_minutes,
            s.activity.steps_reference,
            s.activity.active_minutes_reference,
            s.activity.exercise_minutes_reference,
            s.activity.standing_hours_reference,
            s.stress.perceived_range,
            s.stress.resting_hr_tolerance_bpm,
            s.hydration.water_reference_liters,
            s.hydration.urine_color_range,
        ];
        if references.iter().any(|r| !r.is_finite() || *r <= 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "Scoring reference values must be positive and finite",
            ));
        }

        let bands = &s.bands;
        if !(0.0..=1.0).contains(&bands.poor) || !(0.0..=1.0).contains(&bands.excellent) {
            return Err(ConfigError::ValueOutOfRange(
                "Score bands must lie within [0, 1]",
            ));
        }
        if bands.poor >= bands.moderate
            || bands.moderate >= bands.good
            || bands.good >= bands.excellent
        {
            return Err(ConfigError::InvalidRange(
                "Score bands must be in ascending order (poor < moderate < good < excellent)",
            ));
        }

        Ok(())
    }

    fn validate_nutrient_plan(&self) -> Result<(), ConfigError> {
        let plan = &self.nutrient_plan;
        let positive = |v: f64| v.is_finite() && v > 0.0;
        let non_negative = |v: f64| v.is_finite() && v >= 0.0;

        let macros = &plan.macros;
        let bases = [
            macros.protein_g_per_kg,
            macros.carbs_g_per_kg,
            macros.fat_g_per_kg,
            macros.fiber_recommended_g,
        ];
        if !bases.into_iter().all(positive) {
            return Err(ConfigError::ValueOutOfRange(
                "Macro bases must be positive and finite",
            ));
        }
        let weights = [
            macros.activity_multiplier_weight,
            macros.stress_multiplier_weight,
            macros.sleep_multiplier_weight,
        ];
        if !weights.into_iter().all(non_negative) {
            return Err(ConfigError::ValueOutOfRange(
                "Multiplier weights must be finite and not negative",
            ));
        }
        if !positive(macros.reference_body_weight_kg) {
            return Err(ConfigError::ValueOutOfRange(
                "reference_body_weight_kg must be positive and finite",
            ));
        }

        let intake = &plan.intake;
        let fractions = [
            intake.protein_fraction,
            intake.carbs_fraction,
            intake.fat_fraction,
        ];
        if !fractions.into_iter().all(|f| positive(f) && f <= 1.0) {
            return Err(ConfigError::ValueOutOfRange(
                "Intake fractions must be within (0, 1]",
            ));
        }
        if !non_negative(intake.fiber_current_g) {
            return Err(ConfigError::ValueOutOfRange(
                "intake.fiber_current_g must be finite and not negative",
            ));
        }

        let p = &plan.priorities;
        let thresholds = [
            p.high_activity,
            p.low_stress_score,
            p.poor_sleep,
            p.low_hydration,
            plan.timing.bedtime_snack_sleep_score,
        ];
        if thresholds.iter().any(|t| !(0.0..=1.0).contains(t)) {
            return Err(ConfigError::ValueOutOfRange(
                "Priority and snack thresholds must be within [0, 1]",
            ));
        }

        if !positive(plan.hydration.recommended_liters) {
            return Err(ConfigError::ValueOutOfRange(
                "hydration.recommended_liters must be positive and finite",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Scoring references
        Self::apply_env_var(
            "NUTRIGUIDE_HRV_RMSSD_REFERENCE_MS",
            &mut self.scoring.hrv.rmssd_reference_ms,
        )?;
        Self::apply_env_var(
            "NUTRIGUIDE_HRV_SDNN_REFERENCE_MS",
            &mut self.scoring.hrv.sdnn_reference_ms,
        )?;
        Self::apply_env_var(
            "NUTRIGUIDE_SLEEP_TOTAL_REFERENCE_HOURS",
            &mut self.scoring.sleep.total_sleep_reference_hours,
        )?;
        Self::apply_env_var(
            "NUTRIGUIDE_ACTIVITY_STEPS_REFERENCE",
            &mut self.scoring.activity.steps_reference,
        )?;
        Self::apply_env_var(
            "NUTRIGUIDE_STRESS_RESTING_HR_BASELINE",
            &mut self.scoring.stress.resting_hr_baseline_bpm,
        )?;
        Self::apply_env_var(
            "NUTRIGUIDE_HYDRATION_WATER_REFERENCE_LITERS",
            &mut self.scoring.hydration.water_reference_liters,
        )?;

        // Macro bases
        Self::apply_env_var(
            "NUTRIGUIDE_PROTEIN_G_PER_KG",
            &mut self.nutrient_plan.macros.protein_g_per_kg,
        )?;
        Self::apply_env_var(
            "NUTRIGUIDE_CARBS_G_PER_KG",
            &mut self.nutrient_plan.macros.carbs_g_per_kg,
        )?;
        Self::apply_env_var(
            "NUTRIGUIDE_FAT_G_PER_KG",
            &mut self.nutrient_plan.macros.fat_g_per_kg,
        )?;
        Self::apply_env_var(
            "NUTRIGUIDE_REFERENCE_BODY_WEIGHT_KG",
            &mut self.nutrient_plan.macros.reference_body_weight_kg,
        )?;

        // Priority thresholds
        Self::apply_env_var(
            "NUTRIGUIDE_PRIORITY_HIGH_ACTIVITY",
            &mut self.nutrient_plan.priorities.high_activity,
        )?;
        Self::apply_env_var(
            "NUTRIGUIDE_PRIORITY_LOW_STRESS_SCORE",
            &mut self.nutrient_plan.priorities.low_stress_score,
        )?;
        Self::apply_env_var(
            "NUTRIGUIDE_PRIORITY_POOR_SLEEP",
            &mut self.nutrient_plan.priorities.poor_sleep,
        )?;
        Self::apply_env_var(
            "NUTRIGUIDE_PRIORITY_LOW_HYDRATION",
            &mut self.nutrient_plan.priorities.low_hydration,
        )?;
        Self::apply_env_var(
            "NUTRIGUIDE_HYDRATION_RECOMMENDED_LITERS",
            &mut self.nutrient_plan.hydration.recommended_liters,
        )?;

        // Recommendation limits
        Self::apply_env_var(
            "NUTRIGUIDE_RECOMMENDATION_MAX_FOODS",
            &mut self.recommendation.max_foods,
        )?;
        Self::apply_env_var(
            "NUTRIGUIDE_RECOMMENDATION_SEARCH_LIMIT",
            &mut self.recommendation.search_limit,
        )?;

        Ok(self)
    }
}
