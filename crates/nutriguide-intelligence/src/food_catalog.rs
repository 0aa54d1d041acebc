// ABOUTME: Expanded food database with nutrient keyword search and tag lookup
// ABOUTME: Static food rows, owned FoodCatalog value, and priority-nutrient food suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriGuide Contributors

//! Food Catalog
//!
//! The catalog is an explicit value built once and passed to whoever needs
//! it. Search is a case-insensitive substring match over tags, name, and
//! rationale, returned in catalog order.

use crate::config::intelligence::RecommendationConfig;
use crate::food_filter::FoodFilter;
use crate::nutrient_calculator::{NutrientPriority, PriorityNutrient};
use nutriguide_core::constants::{limits, nutrients};
use nutriguide_core::errors::{AppError, AppResult};
use nutriguide_core::models::{FoodItem, Nutrition, UserPreferences};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Static description of a food, turned into an owned `FoodItem` at load time
pub(crate) struct FoodRow {
    pub name: &'static str,
    pub icon: &'static str,
    pub calories: u32,
    pub carbs_g: f64,
    pub protein_g: f64,
    pub fat_g: f64,
    pub micros: &'static [(&'static str, f64)],
    pub tags: &'static [&'static str],
    pub portion: &'static str,
    pub diet_flags: &'static [&'static str],
    pub allergy_flags: &'static [&'static str],
    pub rationale: &'static str,
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_owned()).collect()
}

impl FoodRow {
    pub(crate) fn to_food(&self) -> FoodItem {
        FoodItem {
            name: self.name.to_owned(),
            icon: self.icon.to_owned(),
            nutrition: Nutrition {
                calories: self.calories,
                carbs_g: self.carbs_g,
                protein_g: self.protein_g,
                fat_g: self.fat_g,
                micronutrients: self
                    .micros
                    .iter()
                    .map(|(key, amount)| ((*key).to_owned(), *amount))
                    .collect(),
            },
            tags: owned(self.tags),
            diet_flags: owned(self.diet_flags),
            allergy_flags: owned(self.allergy_flags),
            rationale: self.rationale.to_owned(),
            portion: self.portion.to_owned(),
        }
    }
}

const PLANT_GF: &[&str] = &["Vegan", "Vegetarian", "Gluten-Free"];

const EXPANDED_FOODS: &[FoodRow] = &[
    // Protein-rich
    FoodRow {
        name: "Grilled Chicken Breast",
        icon: "🍗",
        calories: 165,
        carbs_g: 0.0,
        protein_g: 31.0,
        fat_g: 3.6,
        micros: &[("Mg", 25.0), ("B6", 0.5), ("Zn", 0.8)],
        tags: &["high-protein", "lean", "muscle-recovery"],
        portion: "100g serving",
        diet_flags: &["Gluten-Free", "Keto", "Paleo"],
        allergy_flags: &[],
        rationale: "Complete protein source for muscle recovery and repair",
    },
    FoodRow {
        name: "Salmon Fillet",
        icon: "🐟",
        calories: 208,
        carbs_g: 0.0,
        protein_g: 25.0,
        fat_g: 12.0,
        micros: &[("Omega-3", 2.3), ("D", 11.0), ("B12", 2.4)],
        tags: &["high-protein", "omega-3", "brain-health"],
        portion: "100g serving",
        diet_flags: &["Gluten-Free", "Keto", "Paleo"],
        allergy_flags: &["Fish"],
        rationale: "Rich in omega-3 fatty acids and complete protein for brain and heart health",
    },
    FoodRow {
        name: "Greek Yogurt",
        icon: "🥛",
        calories: 100,
        carbs_g: 6.0,
        protein_g: 17.0,
        fat_g: 0.4,
        micros: &[("Ca", 200.0), ("B12", 0.5), ("Probiotics", 1.0)],
        tags: &["high-protein", "probiotic", "calcium"],
        portion: "170g container",
        diet_flags: &["Vegetarian"],
        allergy_flags: &["Dairy"],
        rationale: "High protein with probiotics for gut health and muscle recovery",
    },
    FoodRow {
        name: "Lentils",
        icon: "🫘",
        calories: 116,
        carbs_g: 20.0,
        protein_g: 9.0,
        fat_g: 0.4,
        micros: &[("Fe", 3.3), ("Folate", 90.0), ("Mg", 36.0)],
        tags: &["plant-protein", "fiber", "iron"],
        portion: "100g cooked",
        diet_flags: PLANT_GF,
        allergy_flags: &[],
        rationale: "Plant-based protein with iron and folate for energy and blood health",
    },
    // Magnesium-rich
    FoodRow {
        name: "Dark Chocolate (85%)",
        icon: "🍫",
        calories: 170,
        carbs_g: 13.0,
        protein_g: 2.7,
        fat_g: 12.0,
        micros: &[("Mg", 64.0), ("Fe", 3.3), ("Antioxidants", 15.0)],
        tags: &["magnesium", "antioxidant", "stress-relief"],
        portion: "30g (3-4 pieces)",
        diet_flags: &["Vegetarian"],
        allergy_flags: &["Dairy (check label)"],
        rationale: "Rich in magnesium and antioxidants for stress relief and heart health",
    },
    FoodRow {
        name: "Almonds",
        icon: "🥜",
        calories: 164,
        carbs_g: 6.0,
        protein_g: 6.0,
        fat_g: 14.0,
        micros: &[("Mg", 76.0), ("E", 7.3), ("Ca", 75.0)],
        tags: &["magnesium", "healthy-fats", "vitamin-e"],
        portion: "28g (23 almonds)",
        diet_flags: &["Vegan", "Gluten-Free", "Keto"],
        allergy_flags: &["Nuts"],
        rationale: "High magnesium content for muscle function and stress management",
    },
    FoodRow {
        name: "Spinach",
        icon: "🥬",
        calories: 23,
        carbs_g: 3.6,
        protein_g: 2.9,
        fat_g: 0.4,
        micros: &[("Mg", 79.0), ("Fe", 2.7), ("K", 558.0), ("Folate", 194.0)],
        tags: &["magnesium", "iron", "folate"],
        portion: "100g raw",
        diet_flags: PLANT_GF,
        allergy_flags: &[],
        rationale: "Nutrient-dense leafy green with magnesium, iron, and folate",
    },
    FoodRow {
        name: "Pumpkin Seeds",
        icon: "🎃",
        calories: 446,
        carbs_g: 18.0,
        protein_g: 19.0,
        fat_g: 35.0,
        micros: &[("Mg", 262.0), ("Zn", 7.6), ("Fe", 3.3)],
        tags: &["magnesium", "zinc", "protein"],
        portion: "28g (1/4 cup)",
        diet_flags: PLANT_GF,
        allergy_flags: &["Seeds"],
        rationale: "Exceptionally high in magnesium and zinc for immune function",
    },
    // Tryptophan-rich
    FoodRow {
        name: "Turkey Breast",
        icon: "🦃",
        calories: 135,
        carbs_g: 0.0,
        protein_g: 25.0,
        fat_g: 3.0,
        micros: &[("Tryptophan", 0.3), ("B6", 0.6), ("Zn", 1.5)],
        tags: &["tryptophan", "sleep-support", "lean-protein"],
        portion: "100g serving",
        diet_flags: &["Gluten-Free", "Keto"],
        allergy_flags: &[],
        rationale: "Rich in tryptophan for better sleep quality and mood regulation",
    },
    FoodRow {
        name: "Oatmeal",
        icon: "🥣",
        calories: 154,
        carbs_g: 27.0,
        protein_g: 5.0,
        fat_g: 3.0,
        micros: &[("Tryptophan", 0.1), ("Mg", 63.0), ("B1", 0.2)],
        tags: &["tryptophan", "complex-carbs", "fiber"],
        portion: "40g dry (1/2 cup)",
        diet_flags: PLANT_GF,
        allergy_flags: &[],
        rationale: "Complex carbs help tryptophan reach the brain for better sleep",
    },
    FoodRow {
        name: "Milk",
        icon: "🥛",
        calories: 42,
        carbs_g: 5.0,
        protein_g: 3.4,
        fat_g: 1.0,
        micros: &[("Tryptophan", 0.1), ("Ca", 113.0), ("D", 2.5)],
        tags: &["tryptophan", "calcium", "sleep-support"],
        portion: "100ml",
        diet_flags: &["Vegetarian"],
        allergy_flags: &["Dairy"],
        rationale: "Classic bedtime drink with tryptophan and calcium for relaxation",
    },
    FoodRow {
        name: "Walnuts",
        icon: "🌰",
        calories: 185,
        carbs_g: 4.0,
        protein_g: 4.0,
        fat_g: 18.0,
        micros: &[("Tryptophan", 0.1), ("Omega-3", 2.6), ("Mg", 45.0)],
        tags: &["tryptophan", "omega-3", "brain-health"],
        portion: "28g (7 halves)",
        diet_flags: PLANT_GF,
        allergy_flags: &["Nuts"],
        rationale: "Tryptophan and omega-3 for brain health and sleep quality",
    },
    // Hydrating
    FoodRow {
        name: "Coconut Water",
        icon: "🥥",
        calories: 19,
        carbs_g: 4.0,
        protein_g: 0.7,
        fat_g: 0.2,
        micros: &[("K", 600.0), ("Na", 252.0), ("Mg", 60.0)],
        tags: &["electrolytes", "hydrating", "natural"],
        portion: "240ml (1 cup)",
        diet_flags: PLANT_GF,
        allergy_flags: &[],
        rationale: "Natural electrolytes for optimal hydration and muscle function",
    },
    FoodRow {
        name: "Watermelon",
        icon: "🍉",
        calories: 30,
        carbs_g: 8.0,
        protein_g: 0.6,
        fat_g: 0.2,
        micros: &[("Water", 92.0), ("C", 8.1), ("Lycopene", 4.5)],
        tags: &["hydrating", "antioxidant", "low-calorie"],
        portion: "150g slice",
        diet_flags: PLANT_GF,
        allergy_flags: &[],
        rationale: "92% water content with natural electrolytes and antioxidants",
    },
    FoodRow {
        name: "Cucumber",
        icon: "🥒",
        calories: 16,
        carbs_g: 4.0,
        protein_g: 0.7,
        fat_g: 0.1,
        micros: &[("Water", 96.0), ("K", 147.0), ("C", 2.8)],
        tags: &["hydrating", "low-calorie", "detox"],
        portion: "100g",
        diet_flags: PLANT_GF,
        allergy_flags: &[],
        rationale: "96% water content with potassium for hydration and detox",
    },
    FoodRow {
        name: "Herbal Tea",
        icon: "🍵",
        calories: 2,
        carbs_g: 0.4,
        protein_g: 0.0,
        fat_g: 0.0,
        micros: &[("Antioxidants", 1.0), ("C", 0.1)],
        tags: &["hydrating", "antioxidant", "calming"],
        portion: "240ml cup",
        diet_flags: PLANT_GF,
        allergy_flags: &[],
        rationale: "Hydrating with calming properties and antioxidants",
    },
    // General
    FoodRow {
        name: "Avocado",
        icon: "🥑",
        calories: 160,
        carbs_g: 9.0,
        protein_g: 2.0,
        fat_g: 15.0,
        micros: &[("K", 485.0), ("Folate", 81.0), ("E", 2.1)],
        tags: &["healthy-fats", "fiber", "potassium"],
        portion: "100g (1/2 medium)",
        diet_flags: &["Vegan", "Vegetarian", "Gluten-Free", "Keto"],
        allergy_flags: &[],
        rationale: "Healthy monounsaturated fats and fiber for heart health",
    },
    FoodRow {
        name: "Quinoa",
        icon: "🌾",
        calories: 120,
        carbs_g: 22.0,
        protein_g: 4.4,
        fat_g: 1.9,
        micros: &[("Mg", 64.0), ("Fe", 1.5), ("Lysine", 0.2)],
        tags: &["complete-protein", "fiber", "gluten-free"],
        portion: "100g cooked",
        diet_flags: PLANT_GF,
        allergy_flags: &[],
        rationale: "Complete plant protein with all essential amino acids",
    },
    FoodRow {
        name: "Blueberries",
        icon: "🫐",
        calories: 57,
        carbs_g: 14.0,
        protein_g: 0.7,
        fat_g: 0.3,
        micros: &[("C", 9.7), ("K", 77.0), ("Antioxidants", 13.4)],
        tags: &["antioxidant", "brain-health", "low-sugar"],
        portion: "100g (3/4 cup)",
        diet_flags: PLANT_GF,
        allergy_flags: &[],
        rationale: "High in antioxidants for brain health and anti-aging",
    },
    FoodRow {
        name: "Sweet Potato",
        icon: "🍠",
        calories: 86,
        carbs_g: 20.0,
        protein_g: 1.6,
        fat_g: 0.1,
        micros: &[("A", 14187.0), ("C", 2.4), ("K", 337.0)],
        tags: &["complex-carbs", "vitamin-a", "fiber"],
        portion: "100g (1/2 medium)",
        diet_flags: PLANT_GF,
        allergy_flags: &[],
        rationale: "Complex carbohydrates with beta-carotene for immune support",
    },
    FoodRow {
        name: "Broccoli",
        icon: "🥦",
        calories: 34,
        carbs_g: 7.0,
        protein_g: 2.8,
        fat_g: 0.4,
        micros: &[("C", 89.0), ("K", 101.0), ("Folate", 63.0)],
        tags: &["vitamin-c", "fiber", "cancer-fighting"],
        portion: "100g (1 cup)",
        diet_flags: PLANT_GF,
        allergy_flags: &[],
        rationale: "High in vitamin C and sulforaphane for immune and cellular health",
    },
    // Energy
    FoodRow {
        name: "Banana",
        icon: "🍌",
        calories: 89,
        carbs_g: 23.0,
        protein_g: 1.1,
        fat_g: 0.3,
        micros: &[("K", 358.0), ("B6", 0.4), ("Mg", 27.0)],
        tags: &["energy", "potassium", "pre-workout"],
        portion: "1 medium (120g)",
        diet_flags: PLANT_GF,
        allergy_flags: &[],
        rationale: "Natural energy with potassium and B6 for muscle function",
    },
    FoodRow {
        name: "Oats",
        icon: "🌾",
        calories: 68,
        carbs_g: 12.0,
        protein_g: 2.4,
        fat_g: 1.4,
        micros: &[("Mg", 27.0), ("Zn", 0.6), ("B1", 0.1)],
        tags: &["sustained-energy", "fiber", "beta-glucan"],
        portion: "40g dry (1/2 cup)",
        diet_flags: PLANT_GF,
        allergy_flags: &[],
        rationale: "Sustained energy release with beta-glucan for heart health",
    },
    FoodRow {
        name: "Green Tea",
        icon: "🍵",
        calories: 2,
        carbs_g: 0.0,
        protein_g: 0.0,
        fat_g: 0.0,
        micros: &[("Caffeine", 25.0), ("L-Theanine", 8.0), ("EGCG", 50.0)],
        tags: &["energy", "antioxidant", "focus"],
        portion: "240ml cup",
        diet_flags: PLANT_GF,
        allergy_flags: &[],
        rationale: "Gentle caffeine with L-theanine for sustained focus and energy",
    },
    // Recovery
    FoodRow {
        name: "Cherries",
        icon: "🍒",
        calories: 50,
        carbs_g: 12.0,
        protein_g: 1.0,
        fat_g: 0.3,
        micros: &[("C", 7.0), ("K", 173.0), ("Melatonin", 0.1)],
        tags: &["recovery", "anti-inflammatory", "sleep"],
        portion: "100g (3/4 cup)",
        diet_flags: PLANT_GF,
        allergy_flags: &[],
        rationale: "Natural melatonin and anti-inflammatory compounds for recovery",
    },
    FoodRow {
        name: "Ginger",
        icon: "🫚",
        calories: 80,
        carbs_g: 18.0,
        protein_g: 1.8,
        fat_g: 0.8,
        micros: &[("Gingerol", 2.5), ("Mg", 43.0), ("K", 415.0)],
        tags: &["anti-inflammatory", "digestive", "recovery"],
        portion: "100g",
        diet_flags: PLANT_GF,
        allergy_flags: &[],
        rationale: "Anti-inflammatory gingerol for muscle recovery and digestion",
    },
    FoodRow {
        name: "Turmeric",
        icon: "🫚",
        calories: 354,
        carbs_g: 65.0,
        protein_g: 8.0,
        fat_g: 10.0,
        micros: &[("Curcumin", 3.1), ("Fe", 41.0), ("Mn", 7.8)],
        tags: &["anti-inflammatory", "antioxidant", "recovery"],
        portion: "100g powder",
        diet_flags: PLANT_GF,
        allergy_flags: &[],
        rationale: "Curcumin for powerful anti-inflammatory and recovery benefits",
    },
];

/// Search keyword used to find foods for a priority nutrient
#[must_use]
pub fn search_keyword(nutrient: &str) -> String {
    if nutrient.eq_ignore_ascii_case(nutrients::WATER) {
        "hydrating".to_owned()
    } else {
        nutrient.to_lowercase()
    }
}

/// Foods suggested for one priority nutrient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientSuggestion {
    /// Priority nutrient name
    pub nutrient: String,
    /// Its urgency
    pub priority: NutrientPriority,
    /// Compliant foods, pantry first, at most the configured maximum
    pub foods: Vec<FoodItem>,
}

/// Owned collection of catalog foods
#[derive(Debug, Clone, PartialEq)]
pub struct FoodCatalog {
    foods: Vec<FoodItem>,
}

impl FoodCatalog {
    /// The built-in expanded food database
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            foods: EXPANDED_FOODS.iter().map(FoodRow::to_food).collect(),
        }
    }

    /// Build a catalog from caller-supplied foods
    ///
    /// # Errors
    ///
    /// Returns an `InvalidInput` error if any food has a blank name
    pub fn from_foods(foods: Vec<FoodItem>) -> AppResult<Self> {
        if let Some(position) = foods.iter().position(|f| f.name.trim().is_empty()) {
            return Err(AppError::invalid_input(format!(
                "Food at position {position} has an empty name"
            )));
        }
        Ok(Self { foods })
    }

    /// All foods in catalog order
    #[must_use]
    pub fn foods(&self) -> &[FoodItem] {
        &self.foods
    }

    /// Number of foods
    #[must_use]
    pub fn len(&self) -> usize {
        self.foods.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    /// Food by name, ignoring case
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FoodItem> {
        self.foods.iter().find(|f| f.name.eq_ignore_ascii_case(name))
    }

    /// Foods whose tags, name, or rationale contain the query (case-insensitive)
    #[must_use]
    pub fn search(&self, nutrient: &str, limit: usize) -> Vec<FoodItem> {
        let needle = nutrient.to_lowercase();
        self.foods
            .iter()
            .filter(|food| {
                food.tags.iter().any(|t| t.to_lowercase().contains(&needle))
                    || food.name.to_lowercase().contains(&needle)
                    || food.rationale.to_lowercase().contains(&needle)
            })
            .take(limit)
            .cloned()
            .collect()
    }

    /// Foods carrying exactly this tag
    #[must_use]
    pub fn by_tag(&self, tag: &str) -> Vec<FoodItem> {
        self.foods.iter().filter(|f| f.has_tag(tag)).cloned().collect()
    }

    /// Compliant foods for each priority nutrient, in priority order
    #[must_use]
    pub fn suggest_for_priorities(
        &self,
        priorities: &[PriorityNutrient],
        prefs: &UserPreferences,
        config: &RecommendationConfig,
    ) -> Vec<NutrientSuggestion> {
        let max_foods = config.max_foods.min(limits::MAX_RECOMMENDED_FOODS);
        priorities
            .iter()
            .map(|priority| {
                let keyword = search_keyword(&priority.nutrient);
                let candidates = self.search(&keyword, config.search_limit);
                let foods = FoodFilter::filter_and_rank_with_limit(&candidates, prefs, max_foods);
                debug!(
                    nutrient = %priority.nutrient,
                    keyword = %keyword,
                    candidates = candidates.len(),
                    suggested = foods.len(),
                    "Matched catalog foods to priority nutrient"
                );
                NutrientSuggestion {
                    nutrient: priority.nutrient.clone(),
                    priority: priority.priority,
                    foods,
                }
            })
            .collect()
    }
}

impl Default for FoodCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
