// ABOUTME: Health domain scoring from HRV, sleep, activity, stress, and hydration readings
// ABOUTME: Normalizes every indicator into [0, 1], averages per domain, and bands the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriGuide Contributors

//! Health Domain Scorer
//!
//! Each domain score is the unweighted mean of its indicators, and each
//! indicator is a ratio against a saturation reference clamped into [0, 1].
//! Non-finite readings never escape the clamp: NaN maps to 0 and infinities
//! saturate, so the scorer is total over every possible snapshot.
//!
//! # Scientific References
//!
//! - Shaffer, F., & Ginsberg, J.P. (2017). An Overview of Heart Rate Variability Metrics and Norms.
//!   *Frontiers in Public Health*, 5, 258. <https://doi.org/10.3389/fpubh.2017.00258>
//!
//! - Hirshkowitz, M., et al. (2015). National Sleep Foundation's sleep time duration recommendations.
//!   *Sleep Health*, 1(1), 40-43. <https://doi.org/10.1016/j.sleh.2014.12.010>
//!
//! - Armstrong, L.E., et al. (1994). Urinary indices of hydration status.
//!   *International Journal of Sport Nutrition*, 4(3), 265-279.

use crate::config::intelligence::{
    ActivityReferenceConfig, HrvReferenceConfig, HydrationReferenceConfig, ScoreBandsConfig,
    ScoringConfig, SleepReferenceConfig, StressReferenceConfig,
};
use nutriguide_core::models::{
    ActivityReading, HealthSnapshot, HrvReading, HydrationReading, SleepReading, StressReading,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Clamp into [0, 1], mapping NaN to 0
#[must_use]
pub fn unit_clamp(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Arithmetic mean of already-clamped indicators
fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// The five scored health domains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthDomain {
    /// Heart rate variability (recovery)
    Hrv,
    /// Sleep quality
    Sleep,
    /// Daily activity
    Activity,
    /// Stress (higher score = less stress)
    Stress,
    /// Hydration
    Hydration,
}

impl HealthDomain {
    /// Every domain, in report order
    pub const ALL: [Self; 5] = [
        Self::Hrv,
        Self::Sleep,
        Self::Activity,
        Self::Stress,
        Self::Hydration,
    ];
}

impl fmt::Display for HealthDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Hrv => "HRV",
            Self::Sleep => "Sleep",
            Self::Activity => "Activity",
            Self::Stress => "Stress",
            Self::Hydration => "Hydration",
        };
        f.write_str(name)
    }
}

/// Interpretation band of a [0, 1] score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    /// Below the poor threshold
    VeryPoor,
    /// [poor, moderate)
    Poor,
    /// [moderate, good)
    Moderate,
    /// [good, excellent)
    Good,
    /// At or above excellent
    Excellent,
}

impl ScoreBand {
    /// Band for a score given the configured lower bounds
    #[must_use]
    pub fn from_score(score: f64, bands: &ScoreBandsConfig) -> Self {
        if score >= bands.excellent {
            Self::Excellent
        } else if score >= bands.good {
            Self::Good
        } else if score >= bands.moderate {
            Self::Moderate
        } else if score >= bands.poor {
            Self::Poor
        } else {
            Self::VeryPoor
        }
    }

    /// Domain-specific wording for this band
    #[must_use]
    pub const fn interpretation(self, domain: HealthDomain) -> &'static str {
        match (domain, self) {
            (HealthDomain::Hrv, Self::Excellent) => "Excellent recovery",
            (HealthDomain::Hrv, Self::Good) => "Good recovery",
            (HealthDomain::Hrv, Self::Moderate) => "Moderate recovery",
            (HealthDomain::Hrv, Self::Poor) => "Poor recovery",
            (HealthDomain::Hrv, Self::VeryPoor) => "Very poor recovery",
            (HealthDomain::Sleep, Self::Excellent) => "Excellent sleep quality",
            (HealthDomain::Sleep, Self::Good) => "Good sleep quality",
            (HealthDomain::Sleep, Self::Moderate) => "Moderate sleep quality",
            (HealthDomain::Sleep, Self::Poor) => "Poor sleep quality",
            (HealthDomain::Sleep, Self::VeryPoor) => "Very poor sleep quality",
            (HealthDomain::Activity, Self::Excellent) => "Highly active day",
            (HealthDomain::Activity, Self::Good) => "Moderately active day",
            (HealthDomain::Activity, Self::Moderate) => "Lightly active day",
            (HealthDomain::Activity, Self::Poor) => "Sedentary day",
            (HealthDomain::Activity, Self::VeryPoor) => "Very sedentary day",
            (HealthDomain::Stress, Self::Excellent) => "Very low stress",
            (HealthDomain::Stress, Self::Good) => "Low stress",
            (HealthDomain::Stress, Self::Moderate) => "Moderate stress",
            (HealthDomain::Stress, Self::Poor) => "High stress",
            (HealthDomain::Stress, Self::VeryPoor) => "Very high stress",
            (HealthDomain::Hydration, Self::Excellent) => "Excellent hydration",
            (HealthDomain::Hydration, Self::Good) => "Good hydration",
            (HealthDomain::Hydration, Self::Moderate) => "Moderate hydration",
            (HealthDomain::Hydration, Self::Poor) => "Poor hydration",
            (HealthDomain::Hydration, Self::VeryPoor) => "Very poor hydration",
        }
    }
}

/// Score of one health domain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainScore {
    /// Which domain
    pub domain: HealthDomain,
    /// Normalized score in [0, 1]
    pub score: f64,
    /// Interpretation band
    pub band: ScoreBand,
    /// Human-readable interpretation ("Good recovery")
    pub interpretation: String,
}

impl DomainScore {
    /// Score entry for a raw value, clamped into [0, 1] and banded
    #[must_use]
    pub fn new(domain: HealthDomain, score: f64, bands: &ScoreBandsConfig) -> Self {
        let score = unit_clamp(score);
        let band = ScoreBand::from_score(score, bands);
        Self {
            domain,
            score,
            band,
            interpretation: band.interpretation(domain).to_owned(),
        }
    }
}

/// Scores for all five domains plus their mean
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    /// Snapshot the report was computed from
    pub snapshot: HealthSnapshot,
    /// HRV domain
    pub hrv: DomainScore,
    /// Sleep domain
    pub sleep: DomainScore,
    /// Activity domain
    pub activity: DomainScore,
    /// Stress domain
    pub stress: DomainScore,
    /// Hydration domain
    pub hydration: DomainScore,
    /// Arithmetic mean of the five domain scores
    pub overall: f64,
}

impl ScoreReport {
    /// Domain scores in report order
    #[must_use]
    pub const fn domains(&self) -> [&DomainScore; 5] {
        [
            &self.hrv,
            &self.sleep,
            &self.activity,
            &self.stress,
            &self.hydration,
        ]
    }

    /// Score entry for one domain
    #[must_use]
    pub const fn domain(&self, domain: HealthDomain) -> &DomainScore {
        match domain {
            HealthDomain::Hrv => &self.hrv,
            HealthDomain::Sleep => &self.sleep,
            HealthDomain::Activity => &self.activity,
            HealthDomain::Stress => &self.stress,
            HealthDomain::Hydration => &self.hydration,
        }
    }

    /// Lowest-scoring domain (first in report order on ties)
    #[must_use]
    pub fn weakest_domain(&self) -> &DomainScore {
        self.domains()
            .into_iter()
            .reduce(|weakest, d| if d.score < weakest.score { d } else { weakest })
            .unwrap_or(&self.hrv)
    }
}

/// Health domain scorer
pub struct HealthScorer;

impl HealthScorer {
    /// Score every domain of a snapshot
    ///
    /// Never fails: every indicator is clamped into [0, 1] before averaging.
    #[must_use]
    pub fn score(snapshot: &HealthSnapshot, config: &ScoringConfig) -> ScoreReport {
        let bands = &config.bands;
        let hrv = DomainScore::new(
            HealthDomain::Hrv,
            Self::hrv_score(&snapshot.hrv, &config.hrv),
            bands,
        );
        let sleep = DomainScore::new(
            HealthDomain::Sleep,
            Self::sleep_score(&snapshot.sleep, &config.sleep),
            bands,
        );
        let activity = DomainScore::new(
            HealthDomain::Activity,
            Self::activity_score(&snapshot.activity, &config.activity),
            bands,
        );
        let stress = DomainScore::new(
            HealthDomain::Stress,
            Self::stress_score(&snapshot.stress, &config.stress),
            bands,
        );
        let hydration = DomainScore::new(
            HealthDomain::Hydration,
            Self::hydration_score(&snapshot.hydration, &config.hydration),
            bands,
        );

        let overall = unit_clamp(mean(&[
            hrv.score,
            sleep.score,
            activity.score,
            stress.score,
            hydration.score,
        ]));

        debug!(
            hrv = hrv.score,
            sleep = sleep.score,
            activity = activity.score,
            stress = stress.score,
            hydration = hydration.score,
            overall,
            "Scored health snapshot"
        );

        ScoreReport {
            snapshot: snapshot.clone(),
            hrv,
            sleep,
            activity,
            stress,
            hydration,
            overall,
        }
    }

    /// Score a series of snapshots in parallel, preserving input order
    #[must_use]
    pub fn score_history(snapshots: &[HealthSnapshot], config: &ScoringConfig) -> Vec<ScoreReport> {
        snapshots
            .par_iter()
            .map(|snapshot| Self::score(snapshot, config))
            .collect()
    }

    /// HRV: mean of rmssd, sdnn, and pnn50 against their references
    #[must_use]
    pub fn hrv_score(hrv: &HrvReading, refs: &HrvReferenceConfig) -> f64 {
        mean(&[
            unit_clamp(hrv.rmssd_ms / refs.rmssd_reference_ms),
            unit_clamp(hrv.sdnn_ms / refs.sdnn_reference_ms),
            unit_clamp(hrv.pnn50_percent / refs.pnn50_reference_percent),
        ])
    }

    /// Sleep: duration, deep sleep, efficiency, and inverted onset latency
    #[must_use]
    pub fn sleep_score(sleep: &SleepReading, refs: &SleepReferenceConfig) -> f64 {
        mean(&[
            unit_clamp(sleep.total_sleep_hours / refs.total_sleep_reference_hours),
            unit_clamp(sleep.deep_sleep_hours / refs.deep_sleep_reference_hours),
            unit_clamp(sleep.efficiency_percent / refs.efficiency_reference_percent),
            unit_clamp(1.0 - sleep.onset_minutes / refs.onset_reference_minutes),
        ])
    }

    /// Activity: steps, active minutes, exercise minutes, standing hours
    #[must_use]
    pub fn activity_score(activity: &ActivityReading, refs: &ActivityReferenceConfig) -> f64 {
        mean(&[
            unit_clamp(f64::from(activity.steps) / refs.steps_reference),
            unit_clamp(f64::from(activity.active_minutes) / refs.active_minutes_reference),
            unit_clamp(f64::from(activity.exercise_minutes) / refs.exercise_minutes_reference),
            unit_clamp(f64::from(activity.standing_hours) / refs.standing_hours_reference),
        ])
    }

    /// Stress: inverted perceived stress, inverted cortisol, resting HR deviation
    #[must_use]
    pub fn stress_score(stress: &StressReading, refs: &StressReferenceConfig) -> f64 {
        let perceived = f64::from(stress.perceived_stress);
        let hr_deviation = (stress.resting_heart_rate_bpm - refs.resting_hr_baseline_bpm).abs();
        mean(&[
            unit_clamp(1.0 - (perceived - refs.perceived_min) / refs.perceived_range),
            unit_clamp(1.0 - stress.cortisol_level),
            unit_clamp(1.0 - hr_deviation / refs.resting_hr_tolerance_bpm),
        ])
    }

    /// Hydration: water intake, inverted urine color, skin elasticity
    #[must_use]
    pub fn hydration_score(hydration: &HydrationReading, refs: &HydrationReferenceConfig) -> f64 {
        let urine = f64::from(hydration.urine_color);
        mean(&[
            unit_clamp(hydration.water_intake_liters / refs.water_reference_liters),
            unit_clamp(1.0 - (urine - refs.urine_color_min) / refs.urine_color_range),
            unit_clamp(hydration.skin_elasticity),
        ])
    }
}
