// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Score bands, nutrient names, intake ratios, and recommendation limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriGuide Contributors

//! Constants module
//!
//! Pure data constants grouped by domain. Tunable scoring references live in
//! `nutriguide_intelligence::config`; the values here are fixed by the data model.

/// Lower bounds of the five score bands (inclusive)
pub mod score_bands {
    /// Scores at or above this are "Excellent"
    pub const EXCELLENT: f64 = 0.8;
    /// Scores at or above this are "Good"
    pub const GOOD: f64 = 0.6;
    /// Scores at or above this are "Moderate"
    pub const MODERATE: f64 = 0.4;
    /// Scores at or above this are "Poor"; anything lower is "Very poor"
    pub const POOR: f64 = 0.2;
}

/// Thresholds for classifying intake against a target
pub mod intake {
    /// Intake below this fraction of the recommendation is a deficiency
    pub const DEFICIENT_RATIO: f64 = 0.8;
    /// Intake above this fraction of the recommendation is excessive
    pub const EXCESSIVE_RATIO: f64 = 1.2;
}

/// Energy density of macronutrients (kcal per gram)
pub mod energy {
    /// Protein kcal/g
    pub const PROTEIN_KCAL_PER_G: f64 = 4.0;
    /// Carbohydrate kcal/g
    pub const CARBS_KCAL_PER_G: f64 = 4.0;
    /// Fat kcal/g
    pub const FAT_KCAL_PER_G: f64 = 9.0;
}

/// Canonical nutrient names used by priority detection and catalog search
pub mod nutrients {
    /// Protein
    pub const PROTEIN: &str = "Protein";
    /// Magnesium
    pub const MAGNESIUM: &str = "Magnesium";
    /// Tryptophan
    pub const TRYPTOPHAN: &str = "Tryptophan";
    /// Water
    pub const WATER: &str = "Water";
    /// Dietary fiber
    pub const FIBER: &str = "Fiber";
}

/// Micronutrient keys used inside `Nutrition::micronutrients`
pub mod micro_keys {
    /// Keys surfaced by `Nutrition::key_micros`, in display order
    pub const KEY_MICROS: [&str; 7] = ["Mg", "B6", "Ca", "K", "Fe", "Zn", "C"];
    /// Keys surfaced by `Nutrition::quick_facts`, in display order
    pub const QUICK_FACT_MICROS: [&str; 5] = ["Mg", "B6", "Ca", "K", "Fe"];
}

/// Recommendation output limits
pub mod limits {
    /// Maximum number of foods in a recommendation
    pub const MAX_RECOMMENDED_FOODS: usize = 3;
    /// Number of canonical foods bound to each user state
    pub const FOODS_PER_STATE: usize = 3;
    /// Default result size for nutrient catalog searches
    pub const DEFAULT_SEARCH_LIMIT: usize = 10;
    /// `Recommendation::short_reason` length cap (including ellipsis)
    pub const SHORT_REASON_MAX_CHARS: usize = 60;
    /// Number of reason clauses kept by `Recommendation::short_reason`
    pub const SHORT_REASON_CLAUSES: usize = 2;
}

/// Body-weight fallback used when the caller supplies an unusable weight
pub mod body {
    /// Reference adult body weight in kilograms
    pub const REFERENCE_BODY_WEIGHT_KG: f64 = 70.0;
}
