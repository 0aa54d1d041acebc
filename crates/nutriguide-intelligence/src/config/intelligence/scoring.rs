// ABOUTME: Health domain scoring configuration with reference values per indicator
// ABOUTME: Normalization references for HRV, sleep, activity, stress, hydration, and score bands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriGuide Contributors

//! Health Domain Scoring Configuration
//!
//! Every indicator is normalized as `value / reference` (or its complement)
//! and clamped into [0, 1]. The references below are the values at which an
//! indicator saturates.
//!
//! # References
//!
//! - Shaffer, F. & Ginsberg, J.P. (2017). An Overview of Heart Rate Variability
//!   Metrics and Norms. *Frontiers in Public Health*, 5, 258.
//! - Hirshkowitz, M., et al. (2015). National Sleep Foundation's sleep time
//!   duration recommendations. *Sleep Health*, 1(1), 40-43.
//! - Tudor-Locke, C., et al. (2011). How many steps/day are enough?
//!   *International Journal of Behavioral Nutrition and Physical Activity*, 8, 79.

use nutriguide_core::constants::score_bands;
use serde::{Deserialize, Serialize};

/// Health Domain Scoring Configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// HRV saturation references
    pub hrv: HrvReferenceConfig,
    /// Sleep saturation references
    pub sleep: SleepReferenceConfig,
    /// Activity saturation references
    pub activity: ActivityReferenceConfig,
    /// Stress scale definitions
    pub stress: StressReferenceConfig,
    /// Hydration saturation references
    pub hydration: HydrationReferenceConfig,
    /// Lower bounds of the interpretation bands
    pub bands: ScoreBandsConfig,
}

/// HRV indicator references
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HrvReferenceConfig {
    /// RMSSD at which the indicator reaches 1.0 (ms)
    pub rmssd_reference_ms: f64,
    /// SDNN at which the indicator reaches 1.0 (ms)
    pub sdnn_reference_ms: f64,
    /// pNN50 at which the indicator reaches 1.0 (%)
    pub pnn50_reference_percent: f64,
}

impl Default for HrvReferenceConfig {
    fn default() -> Self {
        Self {
            rmssd_reference_ms: 50.0,
            sdnn_reference_ms: 100.0,
            pnn50_reference_percent: 20.0,
        }
    }
}

/// Sleep indicator references
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SleepReferenceConfig {
    /// Total sleep for a full score (hours)
    pub total_sleep_reference_hours: f64,
    /// Deep sleep for a full score (hours)
    pub deep_sleep_reference_hours: f64,
    /// Efficiency for a full score (%)
    pub efficiency_reference_percent: f64,
    /// Onset latency at which the indicator drops to 0 (minutes)
    pub onset_reference_minutes: f64,
}

impl Default for SleepReferenceConfig {
    fn default() -> Self {
        Self {
            total_sleep_reference_hours: 8.0,
            deep_sleep_reference_hours: 2.0,
            efficiency_reference_percent: 100.0,
            onset_reference_minutes: 30.0,
        }
    }
}

/// Activity indicator references
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityReferenceConfig {
    /// Daily steps for a full score
    pub steps_reference: f64,
    /// Active minutes for a full score
    pub active_minutes_reference: f64,
    /// Exercise minutes for a full score
    pub exercise_minutes_reference: f64,
    /// Standing hours for a full score
    pub standing_hours_reference: f64,
}

impl Default for ActivityReferenceConfig {
    fn default() -> Self {
        Self {
            steps_reference: 10_000.0,
            active_minutes_reference: 150.0,
            exercise_minutes_reference: 60.0,
            standing_hours_reference: 12.0,
        }
    }
}

/// Stress scale definitions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StressReferenceConfig {
    /// Lowest value on the perceived stress scale
    pub perceived_min: f64,
    /// Width of the perceived stress scale (max - min)
    pub perceived_range: f64,
    /// Resting heart rate considered unstressed (bpm)
    pub resting_hr_baseline_bpm: f64,
    /// Deviation from baseline at which the indicator drops to 0 (bpm)
    pub resting_hr_tolerance_bpm: f64,
}

impl Default for StressReferenceConfig {
    fn default() -> Self {
        Self {
            perceived_min: 1.0,
            perceived_range: 9.0,
            resting_hr_baseline_bpm: 60.0,
            resting_hr_tolerance_bpm: 30.0,
        }
    }
}

/// Hydration indicator references
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HydrationReferenceConfig {
    /// Water intake for a full score (liters)
    pub water_reference_liters: f64,
    /// Palest position on the urine color chart
    pub urine_color_min: f64,
    /// Width of the urine color chart (darkest - palest)
    pub urine_color_range: f64,
}

impl Default for HydrationReferenceConfig {
    fn default() -> Self {
        Self {
            water_reference_liters: 3.0,
            urine_color_min: 1.0,
            urine_color_range: 7.0,
        }
    }
}

/// Lower bounds of the score interpretation bands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreBandsConfig {
    /// Excellent at or above
    pub excellent: f64,
    /// Good at or above
    pub good: f64,
    /// Moderate at or above
    pub moderate: f64,
    /// Poor at or above; below is very poor
    pub poor: f64,
}

impl Default for ScoreBandsConfig {
    fn default() -> Self {
        Self {
            excellent: score_bands::EXCELLENT,
            good: score_bands::GOOD,
            moderate: score_bands::MODERATE,
            poor: score_bands::POOR,
        }
    }
}
