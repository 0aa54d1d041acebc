// ABOUTME: Food catalog entry models with per-portion nutrition and restriction flags
// ABOUTME: FoodItem and Nutrition plus the display helpers used by recommendation cards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriGuide Contributors

use crate::constants::micro_keys::{KEY_MICROS, QUICK_FACT_MICROS};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Nutrition facts for one portion of a food
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    /// Energy (kcal)
    pub calories: u32,
    /// Carbohydrates (g)
    pub carbs_g: f64,
    /// Protein (g)
    pub protein_g: f64,
    /// Fat (g)
    pub fat_g: f64,
    /// Micronutrient amounts keyed by short name ("Mg", "B6", "Omega-3", ...)
    #[serde(default)]
    pub micronutrients: BTreeMap<String, f64>,
}

impl Nutrition {
    /// Amount of a micronutrient, if the food lists it
    #[must_use]
    pub fn micro(&self, key: &str) -> Option<f64> {
        self.micronutrients.get(key).copied()
    }

    /// Headline micronutrients formatted as `"{amount}mg {key}"`
    #[must_use]
    pub fn key_micros(&self) -> Vec<String> {
        self.format_micros(&KEY_MICROS)
    }

    /// Short fact list: energy, macros, then the main micronutrients
    #[must_use]
    pub fn quick_facts(&self) -> Vec<String> {
        let mut facts = vec![
            format!("{} calories", self.calories),
            format!("{}g carbs", self.carbs_g as i64),
            format!("{}g protein", self.protein_g as i64),
            format!("{}g fat", self.fat_g as i64),
        ];
        facts.extend(self.format_micros(&QUICK_FACT_MICROS));
        facts
    }

    fn format_micros(&self, keys: &[&str]) -> Vec<String> {
        keys.iter()
            .filter_map(|key| {
                self.micro(key)
                    .filter(|amount| *amount > 0.0)
                    .map(|amount| format!("{}mg {key}", amount as i64))
            })
            .collect()
    }
}

/// Immutable catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    /// Display name, also the ranking and pantry-matching key
    pub name: String,
    /// Emoji icon
    pub icon: String,
    /// Nutrition for one portion
    pub nutrition: Nutrition,
    /// Free-form catalog tags ("protein", "sleep-aid", ...)
    #[serde(default)]
    pub tags: Vec<String>,
    /// Diet compliance labels ("Vegan", "Halal", "Gluten-Free", ...)
    #[serde(default)]
    pub diet_flags: Vec<String>,
    /// Allergen labels ("Dairy", "Nuts", "Gluten (unless gluten-free)", ...)
    #[serde(default)]
    pub allergy_flags: Vec<String>,
    /// Why this food helps
    #[serde(default)]
    pub rationale: String,
    /// Human-readable portion ("1 medium (120 g)")
    pub portion: String,
}

impl FoodItem {
    /// Whether the food carries the exact tag
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Diet flags joined for display
    #[must_use]
    pub fn display_diet_flags(&self) -> String {
        self.diet_flags.join(" • ")
    }

    /// Allergy flags joined for display
    #[must_use]
    pub fn display_allergy_flags(&self) -> String {
        self.allergy_flags.join(" • ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn banana() -> Nutrition {
        Nutrition {
            calories: 105,
            carbs_g: 27.0,
            protein_g: 1.3,
            fat_g: 0.4,
            micronutrients: BTreeMap::from([("Mg".to_owned(), 32.0), ("B6".to_owned(), 0.4)]),
        }
    }

    #[test]
    fn test_key_micros_truncate_sub_milligram_amounts() {
        // B6 truncates to 0 but is still listed because the raw amount is positive
        assert_eq!(banana().key_micros(), vec!["32mg Mg", "0mg B6"]);
    }

    #[test]
    fn test_key_micros_skip_zero_amounts() {
        let mut nutrition = banana();
        nutrition.micronutrients.insert("Ca".to_owned(), 0.0);
        nutrition.micronutrients.insert("K".to_owned(), 422.0);
        assert_eq!(nutrition.key_micros(), vec!["32mg Mg", "0mg B6", "422mg K"]);
    }

    #[test]
    fn test_quick_facts_order() {
        let facts = banana().quick_facts();
        assert_eq!(facts[0], "105 calories");
        assert_eq!(facts[1], "27g carbs");
        assert_eq!(facts[2], "1g protein");
        assert_eq!(facts[3], "0g fat");
        assert_eq!(facts[4], "32mg Mg");
    }
}
