// ABOUTME: Nutrient need calculation from health domain scores and body weight
// ABOUTME: Macro and micronutrient targets, hydration and meal timing plans, priority deficiencies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriGuide Contributors

//! Nutrient Need Calculator
//!
//! Turns a `ScoreReport` into daily targets. Macro needs start from per-kg
//! bases and are scaled up by activity, stress, and sleep. Priority nutrients
//! are raised by fixed domain thresholds, in a fixed order:
//!
//! 1. high activity → Protein (High)
//! 2. low stress score → Magnesium (High)
//! 3. poor sleep → Tryptophan (Medium)
//! 4. low hydration → Water (High)
//!
//! "Current" intake is estimated as a fixed fraction of each target until a
//! food diary is wired in.
//!
//! # Scientific References
//!
//! - Phillips, S.M., & Van Loon, L.J. (2011). Dietary protein for athletes.
//!   *Journal of Sports Sciences*, 29(sup1), S29-S38.
//!   <https://doi.org/10.1080/02640414.2011.619204>
//!
//! - Burke, L.M., et al. (2011). Carbohydrates for training and competition.
//!   *Journal of Sports Sciences*, 29(sup1), S17-S27.
//!   <https://doi.org/10.1080/02640414.2011.585473>
//!
//! - Boyle, N.B., et al. (2017). The Effects of Magnesium Supplementation on Subjective Anxiety and Stress.
//!   *Nutrients*, 9(5), 429. <https://doi.org/10.3390/nu9050429>

use crate::config::intelligence::{MacroTargetConfig, NutrientPlanConfig};
use crate::health_scorer::ScoreReport;
use nutriguide_core::constants::{energy, intake, nutrients};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// Urgency of a priority nutrient
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum NutrientPriority {
    /// Address today
    High,
    /// Address this week
    Medium,
    /// Nice to have
    Low,
}

impl fmt::Display for NutrientPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        };
        f.write_str(label)
    }
}

/// Current versus recommended amount of one nutrient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientTarget {
    /// Nutrient name
    pub nutrient: String,
    /// Estimated current intake
    pub current: f64,
    /// Recommended intake
    pub recommended: f64,
    /// Unit of both amounts ("g", "mg", "IU", "L")
    pub unit: String,
}

impl NutrientTarget {
    /// Create a target
    pub fn new(
        nutrient: impl Into<String>,
        current: f64,
        recommended: f64,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            nutrient: nutrient.into(),
            current,
            recommended,
            unit: unit.into(),
        }
    }

    /// Amount still missing, zero when the target is met
    #[must_use]
    pub fn deficit(&self) -> f64 {
        (self.recommended - self.current).max(0.0)
    }

    /// Amount above target, zero when under it
    #[must_use]
    pub fn surplus(&self) -> f64 {
        (self.current - self.recommended).max(0.0)
    }

    /// Intake below 80% of the recommendation
    #[must_use]
    pub fn is_deficient(&self) -> bool {
        self.current < self.recommended * intake::DEFICIENT_RATIO
    }

    /// Intake above 120% of the recommendation
    #[must_use]
    pub fn is_excessive(&self) -> bool {
        self.current > self.recommended * intake::EXCESSIVE_RATIO
    }
}

/// Daily macronutrient targets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroTargets {
    /// Protein (g)
    pub protein: NutrientTarget,
    /// Carbohydrates (g)
    pub carbs: NutrientTarget,
    /// Fat (g)
    pub fat: NutrientTarget,
    /// Fiber (g)
    pub fiber: NutrientTarget,
}

impl MacroTargets {
    /// Energy of the recommended macros (kcal)
    #[must_use]
    pub fn total_calories(&self) -> f64 {
        self.fat.recommended.mul_add(
            energy::FAT_KCAL_PER_G,
            self.protein.recommended * energy::PROTEIN_KCAL_PER_G
                + self.carbs.recommended * energy::CARBS_KCAL_PER_G,
        )
    }

    /// Energy of the estimated current intake (kcal)
    #[must_use]
    pub fn current_calories(&self) -> f64 {
        self.fat.current.mul_add(
            energy::FAT_KCAL_PER_G,
            self.protein.current * energy::PROTEIN_KCAL_PER_G
                + self.carbs.current * energy::CARBS_KCAL_PER_G,
        )
    }

    /// All four targets in display order
    #[must_use]
    pub const fn all(&self) -> [&NutrientTarget; 4] {
        [&self.protein, &self.carbs, &self.fat, &self.fiber]
    }
}

/// Micronutrient family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MicronutrientCategory {
    /// Vitamins
    Vitamin,
    /// Minerals
    Mineral,
    /// Antioxidants and fatty acids
    Antioxidant,
    /// Amino acids
    AminoAcid,
}

/// Micronutrient target with its benefits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MicronutrientTarget {
    /// Family
    pub category: MicronutrientCategory,
    /// Amounts
    pub target: NutrientTarget,
    /// Short benefit statements
    pub benefits: Vec<String>,
}

/// One row of the micronutrient reference table
struct MicroRow {
    name: &'static str,
    category: MicronutrientCategory,
    current: f64,
    recommended: f64,
    unit: &'static str,
    benefits: [&'static str; 2],
}

const MICRONUTRIENT_TABLE: [MicroRow; 9] = [
    MicroRow {
        name: "Vitamin D",
        category: MicronutrientCategory::Vitamin,
        current: 800.0,
        recommended: 2000.0,
        unit: "IU",
        benefits: ["Bone health", "Immune function"],
    },
    MicroRow {
        name: "B12",
        category: MicronutrientCategory::Vitamin,
        current: 2.4,
        recommended: 2.4,
        unit: "mcg",
        benefits: ["Energy production", "Nerve function"],
    },
    MicroRow {
        name: "Vitamin C",
        category: MicronutrientCategory::Vitamin,
        current: 65.0,
        recommended: 90.0,
        unit: "mg",
        benefits: ["Immune support", "Antioxidant"],
    },
    MicroRow {
        name: nutrients::MAGNESIUM,
        category: MicronutrientCategory::Mineral,
        current: 200.0,
        recommended: 400.0,
        unit: "mg",
        benefits: ["Muscle function", "Stress relief"],
    },
    MicroRow {
        name: "Iron",
        category: MicronutrientCategory::Mineral,
        current: 8.0,
        recommended: 18.0,
        unit: "mg",
        benefits: ["Oxygen transport", "Energy"],
    },
    MicroRow {
        name: "Zinc",
        category: MicronutrientCategory::Mineral,
        current: 8.0,
        recommended: 11.0,
        unit: "mg",
        benefits: ["Immune function", "Wound healing"],
    },
    MicroRow {
        name: "Omega-3",
        category: MicronutrientCategory::Antioxidant,
        current: 0.5,
        recommended: 2.0,
        unit: "g",
        benefits: ["Brain health", "Anti-inflammatory"],
    },
    MicroRow {
        name: "Resveratrol",
        category: MicronutrientCategory::Antioxidant,
        current: 0.0,
        recommended: 5.0,
        unit: "mg",
        benefits: ["Heart health", "Longevity"],
    },
    MicroRow {
        name: nutrients::TRYPTOPHAN,
        category: MicronutrientCategory::AminoAcid,
        current: 0.2,
        recommended: 0.28,
        unit: "g",
        benefits: ["Sleep regulation", "Mood support"],
    },
];

/// Daily water plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HydrationPlan {
    /// Water consumed so far (L)
    pub current_liters: f64,
    /// Daily target (L)
    pub recommended_liters: f64,
    /// Remaining amount to drink (L), never negative
    pub additional_liters: f64,
    /// Suggested drinking moments
    pub timing: Vec<String>,
}

impl HydrationPlan {
    /// Hydration expressed as a nutrient target
    #[must_use]
    pub fn as_target(&self) -> NutrientTarget {
        NutrientTarget::new(
            nutrients::WATER,
            self.current_liters,
            self.recommended_liters,
            "L",
        )
    }
}

/// One scheduled meal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealSlot {
    /// Meal name
    pub meal: String,
    /// Local clock time ("7:00 AM")
    pub time: String,
    /// How much the meal matters today
    pub priority: NutrientPriority,
    /// What the meal should emphasize
    pub focus: Vec<String>,
}

/// Meal schedule and conditional snacks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingPlan {
    /// Breakfast, lunch, dinner
    pub meals: Vec<MealSlot>,
    /// Snack before exercise, when the day included a real workout
    pub pre_workout: Option<String>,
    /// Snack after exercise, when the day included a real workout
    pub post_workout: Option<String>,
    /// Evening snack, when sleep is suffering
    pub bedtime: Option<String>,
}

/// A nutrient flagged for attention
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorityNutrient {
    /// Nutrient name (Protein, Magnesium, Tryptophan, Water)
    pub nutrient: String,
    /// Estimated current intake
    pub current: f64,
    /// Recommended intake
    pub recommended: f64,
    /// Urgency
    pub priority: NutrientPriority,
    /// Why it was flagged
    pub reason: String,
}

impl PriorityNutrient {
    fn from_target(target: &NutrientTarget, priority: NutrientPriority, reason: &str) -> Self {
        Self {
            nutrient: target.nutrient.clone(),
            current: target.current,
            recommended: target.recommended,
            priority,
            reason: reason.to_owned(),
        }
    }
}

/// Complete daily nutrient plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientPlan {
    /// Body weight the targets were computed for (kg)
    pub body_weight_kg: f64,
    /// Macro targets
    pub macro_targets: MacroTargets,
    /// Micronutrient targets
    pub micronutrients: Vec<MicronutrientTarget>,
    /// Water plan
    pub hydration: HydrationPlan,
    /// Meal schedule
    pub timing: TimingPlan,
    /// Flagged nutrients, in detection order; empty means nothing to flag
    pub priority_nutrients: Vec<PriorityNutrient>,
}

impl NutrientPlan {
    /// Micronutrient target by name
    #[must_use]
    pub fn micronutrient(&self, name: &str) -> Option<&MicronutrientTarget> {
        self.micronutrients.iter().find(|m| m.target.nutrient == name)
    }

    /// Every target in the plan that is below 80% of its recommendation
    #[must_use]
    pub fn deficient_targets(&self) -> Vec<&NutrientTarget> {
        self.macro_targets
            .all()
            .into_iter()
            .chain(self.micronutrients.iter().map(|m| &m.target))
            .filter(|t| t.is_deficient())
            .collect()
    }
}

/// Nutrient need calculator
pub struct NutrientCalculator;

impl NutrientCalculator {
    /// Derive the full daily plan from domain scores and body weight
    ///
    /// A non-finite or non-positive body weight falls back to the configured
    /// reference weight instead of failing.
    #[must_use]
    pub fn derive_nutrient_plan(
        report: &ScoreReport,
        body_weight_kg: f64,
        config: &NutrientPlanConfig,
    ) -> NutrientPlan {
        let body_weight_kg = Self::effective_body_weight(body_weight_kg, &config.macros);
        let macro_targets = Self::macro_targets(report, body_weight_kg, config);
        let micronutrients = Self::micronutrient_targets();
        let hydration = Self::hydration_plan(report, config);
        let timing = Self::timing_plan(report, config);
        let priority_nutrients =
            Self::priority_nutrients(report, &macro_targets, &micronutrients, &hydration, config);

        debug!(
            body_weight_kg,
            protein_g = macro_targets.protein.recommended,
            carbs_g = macro_targets.carbs.recommended,
            fat_g = macro_targets.fat.recommended,
            priorities = priority_nutrients.len(),
            "Derived nutrient plan"
        );

        NutrientPlan {
            body_weight_kg,
            macro_targets,
            micronutrients,
            hydration,
            timing,
            priority_nutrients,
        }
    }

    fn effective_body_weight(body_weight_kg: f64, config: &MacroTargetConfig) -> f64 {
        if body_weight_kg.is_finite() && body_weight_kg > 0.0 {
            body_weight_kg
        } else {
            warn!(
                body_weight_kg,
                fallback_kg = config.reference_body_weight_kg,
                "Unusable body weight, using reference weight"
            );
            config.reference_body_weight_kg
        }
    }

    /// Macro targets scaled by activity, stress, and sleep
    #[must_use]
    pub fn macro_targets(
        report: &ScoreReport,
        body_weight_kg: f64,
        config: &NutrientPlanConfig,
    ) -> MacroTargets {
        let m = &config.macros;
        let activity_mult = 1.0 + report.activity.score * m.activity_multiplier_weight;
        let stress_mult = 1.0 + (1.0 - report.stress.score) * m.stress_multiplier_weight;
        let sleep_mult = 1.0 + (1.0 - report.sleep.score) * m.sleep_multiplier_weight;

        let protein = m.protein_g_per_kg * body_weight_kg * activity_mult * stress_mult;
        let carbs = m.carbs_g_per_kg * body_weight_kg * activity_mult;
        let fat = m.fat_g_per_kg * body_weight_kg * sleep_mult;

        let est = &config.intake;
        MacroTargets {
            protein: NutrientTarget::new(
                nutrients::PROTEIN,
                protein * est.protein_fraction,
                protein,
                "g",
            ),
            carbs: NutrientTarget::new("Carbohydrates", carbs * est.carbs_fraction, carbs, "g"),
            fat: NutrientTarget::new("Fat", fat * est.fat_fraction, fat, "g"),
            fiber: NutrientTarget::new(
                nutrients::FIBER,
                est.fiber_current_g,
                m.fiber_recommended_g,
                "g",
            ),
        }
    }

    /// Reference micronutrient targets
    #[must_use]
    pub fn micronutrient_targets() -> Vec<MicronutrientTarget> {
        MICRONUTRIENT_TABLE
            .iter()
            .map(|row| MicronutrientTarget {
                category: row.category,
                target: NutrientTarget::new(row.name, row.current, row.recommended, row.unit),
                benefits: row.benefits.iter().map(|b| (*b).to_owned()).collect(),
            })
            .collect()
    }

    /// Water plan from the snapshot's intake
    #[must_use]
    pub fn hydration_plan(report: &ScoreReport, config: &NutrientPlanConfig) -> HydrationPlan {
        let recommended = config.hydration.recommended_liters;
        let raw = report.snapshot.hydration.water_intake_liters;
        let current = if raw.is_finite() { raw.max(0.0) } else { 0.0 };
        HydrationPlan {
            current_liters: current,
            recommended_liters: recommended,
            additional_liters: (recommended - current).max(0.0),
            timing: ["Upon waking", "Before meals", "During exercise", "Before bed"]
                .into_iter()
                .map(str::to_owned)
                .collect(),
        }
    }

    /// Meal schedule with workout and bedtime snacks when warranted
    #[must_use]
    pub fn timing_plan(report: &ScoreReport, config: &NutrientPlanConfig) -> TimingPlan {
        let meal = |meal: &str, time: &str, priority, focus: [&str; 2]| MealSlot {
            meal: meal.to_owned(),
            time: time.to_owned(),
            priority,
            focus: focus.iter().map(|f| (*f).to_owned()).collect(),
        };

        let worked_out = report.snapshot.activity.exercise_minutes
            > config.timing.workout_snack_exercise_minutes;
        let poor_sleep = report.sleep.score < config.timing.bedtime_snack_sleep_score;

        TimingPlan {
            meals: vec![
                meal(
                    "Breakfast",
                    "7:00 AM",
                    NutrientPriority::High,
                    ["Protein", "Complex carbs"],
                ),
                meal(
                    "Lunch",
                    "12:30 PM",
                    NutrientPriority::High,
                    ["Balanced macros", "Vegetables"],
                ),
                meal(
                    "Dinner",
                    "7:00 PM",
                    NutrientPriority::Medium,
                    ["Protein", "Healthy fats"],
                ),
            ],
            pre_workout: worked_out.then(|| "Banana + Almonds".to_owned()),
            post_workout: worked_out.then(|| "Protein shake + Berries".to_owned()),
            bedtime: poor_sleep.then(|| "Chamomile tea + Walnuts".to_owned()),
        }
    }

    /// Priority nutrients in detection order
    #[must_use]
    pub fn priority_nutrients(
        report: &ScoreReport,
        macros: &MacroTargets,
        micronutrients: &[MicronutrientTarget],
        hydration: &HydrationPlan,
        config: &NutrientPlanConfig,
    ) -> Vec<PriorityNutrient> {
        let thresholds = &config.priorities;
        let micro = |name: &str| {
            micronutrients
                .iter()
                .find(|m| m.target.nutrient == name)
                .map_or_else(
                    || NutrientTarget::new(name, 0.0, 0.0, ""),
                    |m| m.target.clone(),
                )
        };

        let mut priorities = Vec::new();

        if report.activity.score > thresholds.high_activity {
            priorities.push(PriorityNutrient::from_target(
                &macros.protein,
                NutrientPriority::High,
                "High activity level requires increased protein for muscle recovery",
            ));
        }

        if report.stress.score < thresholds.low_stress_score {
            priorities.push(PriorityNutrient::from_target(
                &micro(nutrients::MAGNESIUM),
                NutrientPriority::High,
                "Stress management requires adequate magnesium levels",
            ));
        }

        if report.sleep.score < thresholds.poor_sleep {
            priorities.push(PriorityNutrient::from_target(
                &micro(nutrients::TRYPTOPHAN),
                NutrientPriority::Medium,
                "Sleep quality improvement through tryptophan-rich foods",
            ));
        }

        if report.hydration.score < thresholds.low_hydration {
            priorities.push(PriorityNutrient::from_target(
                &hydration.as_target(),
                NutrientPriority::High,
                "Inadequate hydration levels detected",
            ));
        }

        priorities
    }
}
