// ABOUTME: Shared test utilities and fixtures for NutriGuide integration tests
// ABOUTME: Provides quiet logging setup, reference snapshots, and score report builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriGuide Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `nutriguide`

use chrono::{DateTime, Utc};
use nutriguide::{
    ActivityReading, HealthSnapshot, HrvReading, HydrationReading, PantryItem, ScoreReport,
    SleepReading, StressReading, UserPreferences,
};
use nutriguide_intelligence::health_scorer::{unit_clamp, DomainScore, HealthDomain};
use nutriguide_intelligence::ScoringConfig;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Fixed timestamp so reports compare equal across runs
pub fn test_timestamp() -> DateTime<Utc> {
    DateTime::from_timestamp(1_736_928_000, 0).expect("valid timestamp")
}

/// Snapshot where every indicator sits exactly at its reference value
pub fn reference_snapshot() -> HealthSnapshot {
    HealthSnapshot::new(
        test_timestamp(),
        HrvReading {
            rmssd_ms: 50.0,
            sdnn_ms: 100.0,
            pnn50_percent: 20.0,
        },
        SleepReading {
            total_sleep_hours: 8.0,
            deep_sleep_hours: 2.0,
            rem_sleep_hours: 1.5,
            light_sleep_hours: 4.5,
            efficiency_percent: 100.0,
            onset_minutes: 0.0,
        },
        ActivityReading {
            steps: 10_000,
            active_minutes: 150,
            calories_burned: 500.0,
            exercise_minutes: 60,
            standing_hours: 12,
        },
        StressReading {
            perceived_stress: 1,
            cortisol_level: 0.0,
            resting_heart_rate_bpm: 60.0,
        },
        HydrationReading {
            water_intake_liters: 3.0,
            urine_color: 1,
            skin_elasticity: 1.0,
        },
    )
}

/// Typical mid-range day
pub fn typical_snapshot() -> HealthSnapshot {
    HealthSnapshot::new(
        test_timestamp(),
        HrvReading {
            rmssd_ms: 42.0,
            sdnn_ms: 80.0,
            pnn50_percent: 15.0,
        },
        SleepReading {
            total_sleep_hours: 7.0,
            deep_sleep_hours: 1.5,
            rem_sleep_hours: 1.5,
            light_sleep_hours: 4.0,
            efficiency_percent: 88.0,
            onset_minutes: 12.0,
        },
        ActivityReading {
            steps: 8_000,
            active_minutes: 45,
            calories_burned: 420.0,
            exercise_minutes: 30,
            standing_hours: 9,
        },
        StressReading {
            perceived_stress: 4,
            cortisol_level: 0.3,
            resting_heart_rate_bpm: 62.0,
        },
        HydrationReading {
            water_intake_liters: 2.1,
            urine_color: 3,
            skin_elasticity: 0.8,
        },
    )
}

/// Report with hand-picked domain scores over the reference snapshot
pub fn report_with_scores(
    hrv: f64,
    sleep: f64,
    activity: f64,
    stress: f64,
    hydration: f64,
) -> ScoreReport {
    let bands = ScoringConfig::default().bands;
    let domain = |d, score| DomainScore::new(d, score, &bands);
    ScoreReport {
        snapshot: reference_snapshot(),
        hrv: domain(HealthDomain::Hrv, hrv),
        sleep: domain(HealthDomain::Sleep, sleep),
        activity: domain(HealthDomain::Activity, activity),
        stress: domain(HealthDomain::Stress, stress),
        hydration: domain(HealthDomain::Hydration, hydration),
        overall: unit_clamp((hrv + sleep + activity + stress + hydration) / 5.0),
    }
}

/// Preferences with only the named pantry items enabled
pub fn prefs_with_pantry(names: &[&str]) -> UserPreferences {
    names.iter().fold(UserPreferences::default(), |prefs, name| {
        prefs.with_pantry_item(PantryItem::new(*name, "", true))
    })
}

/// Float comparison used across score assertions
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
