// ABOUTME: Biometric snapshot models for HRV, sleep, activity, stress, and hydration
// ABOUTME: HealthSnapshot is an immutable point-in-time input to the domain scorer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriGuide Contributors

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Accepts RFC 3339 ("2025-11-26T07:30:00Z"), a naive datetime assumed UTC,
/// or a bare date mapped to midnight UTC.
fn deserialize_flexible_datetime<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;

    if let Ok(dt) = DateTime::parse_from_rfc3339(&s) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(&s, "%Y-%m-%dT%H:%M:%S") {
        return Ok(Utc.from_utc_datetime(&dt));
    }

    if let Ok(date) = NaiveDate::parse_from_str(&s, "%Y-%m-%d") {
        let datetime = date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| serde::de::Error::custom("Invalid date"))?;
        return Ok(Utc.from_utc_datetime(&datetime));
    }

    Err(serde::de::Error::custom(format!(
        "Invalid timestamp: '{s}'. Expected 'YYYY-MM-DD' or RFC 3339"
    )))
}

/// Heart rate variability readings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HrvReading {
    /// Root mean square of successive RR differences (ms)
    pub rmssd_ms: f64,
    /// Standard deviation of NN intervals (ms)
    pub sdnn_ms: f64,
    /// Share of successive intervals differing by more than 50 ms (%)
    pub pnn50_percent: f64,
}

/// Sleep readings for the previous night
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SleepReading {
    /// Total time asleep (hours)
    pub total_sleep_hours: f64,
    /// Deep sleep (hours)
    pub deep_sleep_hours: f64,
    /// REM sleep (hours)
    pub rem_sleep_hours: f64,
    /// Light sleep (hours)
    pub light_sleep_hours: f64,
    /// Time asleep over time in bed (%)
    pub efficiency_percent: f64,
    /// Sleep onset latency (minutes)
    pub onset_minutes: f64,
}

/// Daily activity totals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActivityReading {
    /// Step count
    pub steps: u32,
    /// Minutes of moderate or vigorous movement
    pub active_minutes: u32,
    /// Active energy expenditure (kcal)
    pub calories_burned: f64,
    /// Minutes of structured exercise
    pub exercise_minutes: u32,
    /// Hours with at least one minute of standing
    pub standing_hours: u32,
}

/// Stress indicators
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StressReading {
    /// Self-reported stress on a 1-10 scale
    pub perceived_stress: u8,
    /// Normalized cortisol level (0-1)
    pub cortisol_level: f64,
    /// Resting heart rate (bpm)
    pub resting_heart_rate_bpm: f64,
}

/// Hydration indicators
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HydrationReading {
    /// Water consumed today (liters)
    pub water_intake_liters: f64,
    /// Urine color chart position (1 = pale, 8 = dark)
    pub urine_color: u8,
    /// Skin turgor estimate (0-1)
    pub skin_elasticity: f64,
}

/// One point-in-time set of biometric readings
///
/// Snapshots are plain values: the engine only ever reads them, and callers
/// that need a different reading build a new snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthSnapshot {
    /// When the readings were taken
    #[serde(deserialize_with = "deserialize_flexible_datetime")]
    pub timestamp: DateTime<Utc>,
    /// Heart rate variability
    pub hrv: HrvReading,
    /// Sleep
    pub sleep: SleepReading,
    /// Activity
    pub activity: ActivityReading,
    /// Stress
    pub stress: StressReading,
    /// Hydration
    pub hydration: HydrationReading,
}

impl HealthSnapshot {
    /// Assemble a snapshot from its five readings
    #[must_use]
    pub const fn new(
        timestamp: DateTime<Utc>,
        hrv: HrvReading,
        sleep: SleepReading,
        activity: ActivityReading,
        stress: StressReading,
        hydration: HydrationReading,
    ) -> Self {
        Self {
            timestamp,
            hrv,
            sleep,
            activity,
            stress,
            hydration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    const READINGS: &str = r#""hrv": {"rmssd_ms": 42.0, "sdnn_ms": 80.0, "pnn50_percent": 15.0},
        "sleep": {"total_sleep_hours": 7.0, "deep_sleep_hours": 1.5, "rem_sleep_hours": 1.5,
                  "light_sleep_hours": 4.0, "efficiency_percent": 88.0, "onset_minutes": 12.0},
        "activity": {"steps": 8000, "active_minutes": 45, "calories_burned": 420.0,
                     "exercise_minutes": 30, "standing_hours": 9},
        "stress": {"perceived_stress": 4, "cortisol_level": 0.3, "resting_heart_rate_bpm": 62.0},
        "hydration": {"water_intake_liters": 2.1, "urine_color": 3, "skin_elasticity": 0.8}"#;

    #[test]
    fn test_snapshot_accepts_bare_date() {
        let json = format!("{{\"timestamp\": \"2025-11-26\", {READINGS}}}");
        let snapshot: HealthSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.timestamp.hour(), 0);
        assert_eq!(snapshot.activity.steps, 8000);
    }

    #[test]
    fn test_snapshot_rejects_garbage_timestamp() {
        let json = format!("{{\"timestamp\": \"yesterday\", {READINGS}}}");
        assert!(serde_json::from_str::<HealthSnapshot>(&json).is_err());
    }
}
