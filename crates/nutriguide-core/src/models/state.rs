// ABOUTME: Discrete physiological/emotional user states that drive food recommendations
// ABOUTME: Wire tokens, display names, and descriptions for each state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriGuide Contributors

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// User state selecting the canonical foods and rationale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UserState {
    /// Relaxed and in good condition
    Calm,
    /// Feeling stressed
    Stressed,
    /// Low energy
    LowEnergy,
    /// Recovering from a workout
    PostWorkout,
    /// Winding down for sleep
    SleepPrep,
    /// Needs to concentrate
    FocusNeeded,
}

impl UserState {
    /// Every state, in display order
    pub const ALL: [Self; 6] = [
        Self::Calm,
        Self::Stressed,
        Self::LowEnergy,
        Self::PostWorkout,
        Self::SleepPrep,
        Self::FocusNeeded,
    ];

    /// Position in `ALL`
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Wire token ("lowEnergy")
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Calm => "calm",
            Self::Stressed => "stressed",
            Self::LowEnergy => "lowEnergy",
            Self::PostWorkout => "postWorkout",
            Self::SleepPrep => "sleepPrep",
            Self::FocusNeeded => "focusNeeded",
        }
    }

    /// Human-readable name ("Low Energy")
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Calm => "Calm",
            Self::Stressed => "Stressed",
            Self::LowEnergy => "Low Energy",
            Self::PostWorkout => "Post Workout",
            Self::SleepPrep => "Sleep Prep",
            Self::FocusNeeded => "Focus Needed",
        }
    }

    /// One-line description of the state
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Calm => "Relaxed and in good condition",
            Self::Stressed => "Feeling stressed, need relief",
            Self::LowEnergy => "Low energy, need replenishment",
            Self::PostWorkout => "Post-workout recovery period",
            Self::SleepPrep => "Preparing for sleep, need sleep aid",
            Self::FocusNeeded => "Need to improve focus",
        }
    }
}

impl FromStr for UserState {
    type Err = AppError;

    /// Accepts the wire token or display name, ignoring case and separators
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        Self::ALL
            .into_iter()
            .find(|state| state.token().to_lowercase() == wanted)
            .ok_or_else(|| AppError::not_found(format!("user state '{s}'")))
    }
}

impl fmt::Display for UserState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
