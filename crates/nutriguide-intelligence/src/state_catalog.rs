// ABOUTME: State-to-foods data table binding each user state to a rationale and three foods
// ABOUTME: Built-in rows, owned StateCatalog value, and validated construction from custom entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriGuide Contributors

//! State→Catalog Lookup
//!
//! Every `UserState` is bound to exactly three canonical foods and a short
//! rationale. The binding is data: adding a state means adding a row, not a
//! branch. Lookup is plain indexing and cannot fail.

use crate::food_catalog::FoodRow;
use nutriguide_core::constants::limits::FOODS_PER_STATE;
use nutriguide_core::errors::{AppError, AppResult, ErrorCode};
use nutriguide_core::models::{FoodItem, UserState};
use serde::{Deserialize, Serialize};

/// Rationale and canonical foods for one state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateEntry {
    /// State this entry belongs to
    pub state: UserState,
    /// Short explanation, clauses separated by " • "
    pub rationale: String,
    /// Canonical foods, unranked
    pub foods: [FoodItem; FOODS_PER_STATE],
}

struct StateRow {
    state: UserState,
    rationale: &'static str,
    foods: [FoodRow; FOODS_PER_STATE],
}

impl StateRow {
    fn to_entry(&self) -> StateEntry {
        StateEntry {
            state: self.state,
            rationale: self.rationale.to_owned(),
            foods: self.foods.each_ref().map(FoodRow::to_food),
        }
    }
}

const BANANA_MICROS: &[(&str, f64)] = &[("Mg", 32.0), ("B6", 0.4)];
const VEGAN_HALAL: &[&str] = &["Vegan", "Halal"];
const GLUTEN_UNLESS_GF: &[&str] = &["Gluten (unless gluten-free)"];

const STATE_COUNT: usize = UserState::ALL.len();

/// Rows in `UserState::ALL` order
const STATE_TABLE: [StateRow; STATE_COUNT] = [
    StateRow {
        state: UserState::Calm,
        rationale: "Mind and body relaxed state • Maintain balanced nutrition • Support overall health",
        foods: [
            FoodRow {
                name: "Avocado",
                icon: "🥑",
                calories: 160,
                carbs_g: 9.0,
                protein_g: 2.0,
                fat_g: 15.0,
                micros: &[("K", 485.0), ("E", 2.1)],
                tags: &["healthy-fat"],
                portion: "1/2 medium (100 g)",
                diet_flags: VEGAN_HALAL,
                allergy_flags: &[],
                rationale: "Healthy monounsaturated fats, support cardiovascular health",
            },
            FoodRow {
                name: "Salmon",
                icon: "🐟",
                calories: 208,
                carbs_g: 0.0,
                protein_g: 25.0,
                fat_g: 12.0,
                micros: &[("B12", 3.2), ("D", 11.0)],
                tags: &["protein"],
                portion: "100 g",
                diet_flags: &[],
                allergy_flags: &["Fish"],
                rationale: "Omega-3 fatty acids, anti-inflammatory and heart health",
            },
            FoodRow {
                name: "Spinach",
                icon: "🥬",
                calories: 23,
                carbs_g: 3.6,
                protein_g: 2.9,
                fat_g: 0.4,
                micros: &[("K", 558.0), ("Fe", 2.7), ("A", 469.0)],
                tags: &["leafy-green"],
                portion: "100 g raw weight",
                diet_flags: VEGAN_HALAL,
                allergy_flags: &[],
                rationale: "Folate and iron, support blood and nervous system",
            },
        ],
    },
    StateRow {
        state: UserState::Stressed,
        rationale: "HRV lower vs baseline • Late afternoon dip • Suggest Mg + B6 for relaxation",
        foods: [
            FoodRow {
                name: "Banana",
                icon: "🍌",
                calories: 105,
                carbs_g: 27.0,
                protein_g: 1.3,
                fat_g: 0.4,
                micros: BANANA_MICROS,
                tags: &["common"],
                portion: "1 medium (120 g)",
                diet_flags: &["Vegetarian", "Halal"],
                allergy_flags: &[],
                rationale: "Rich in magnesium and B6, helps relieve stress and anxiety",
            },
            FoodRow {
                name: "Dark Chocolate (70%+)",
                icon: "🍫",
                calories: 170,
                carbs_g: 13.0,
                protein_g: 2.7,
                fat_g: 12.0,
                micros: &[("Mg", 64.0)],
                tags: &["treat"],
                portion: "30 g (3-4 pieces)",
                diet_flags: &["Vegetarian"],
                allergy_flags: &["Dairy (check label)"],
                rationale: "High magnesium content, theobromine helps improve mood",
            },
            FoodRow {
                name: "Yogurt",
                icon: "🥣",
                calories: 120,
                carbs_g: 9.0,
                protein_g: 10.0,
                fat_g: 4.0,
                micros: &[("Ca", 200.0)],
                tags: &["protein"],
                portion: "150 g cup",
                diet_flags: &[],
                allergy_flags: &["Dairy"],
                rationale: "Probiotics support gut health, protein stabilizes blood sugar",
            },
        ],
    },
    StateRow {
        state: UserState::LowEnergy,
        rationale: "Blood sugar levels low • Need quick energy boost • Suggest complex carbohydrates",
        foods: [
            FoodRow {
                name: "Oatmeal",
                icon: "🥣",
                calories: 150,
                carbs_g: 27.0,
                protein_g: 5.0,
                fat_g: 3.0,
                micros: &[("B1", 0.2), ("Mg", 25.0)],
                tags: &["staple"],
                portion: "40 g dry weight",
                diet_flags: &["Vegan"],
                allergy_flags: GLUTEN_UNLESS_GF,
                rationale: "Complex carbohydrates provide sustained energy",
            },
            FoodRow {
                name: "Greek Yogurt",
                icon: "🥛",
                calories: 120,
                carbs_g: 5.0,
                protein_g: 17.0,
                fat_g: 0.0,
                micros: &[("Ca", 180.0)],
                tags: &["protein"],
                portion: "170 g",
                diet_flags: &[],
                allergy_flags: &["Dairy"],
                rationale: "High protein, provides quick energy",
            },
            FoodRow {
                name: "Apple",
                icon: "🍎",
                calories: 95,
                carbs_g: 25.0,
                protein_g: 0.5,
                fat_g: 0.3,
                micros: &[("K", 195.0)],
                tags: &["common"],
                portion: "1 medium (180 g)",
                diet_flags: VEGAN_HALAL,
                allergy_flags: &[],
                rationale: "Natural sugars quickly boost blood sugar",
            },
        ],
    },
    StateRow {
        state: UserState::PostWorkout,
        rationale: "Post-workout recovery • Need protein and carbohydrates • Promote muscle repair",
        foods: [
            FoodRow {
                name: "Chicken Breast",
                icon: "🍗",
                calories: 165,
                carbs_g: 0.0,
                protein_g: 31.0,
                fat_g: 3.6,
                micros: &[("B6", 0.8), ("Zn", 1.0)],
                tags: &["protein"],
                portion: "100 g",
                diet_flags: &[],
                allergy_flags: &[],
                rationale: "High protein, promotes muscle repair",
            },
            FoodRow {
                name: "Sweet Potato",
                icon: "🍠",
                calories: 112,
                carbs_g: 26.0,
                protein_g: 2.0,
                fat_g: 0.1,
                micros: &[("K", 337.0), ("A", 18443.0)],
                tags: &["staple"],
                portion: "1 medium (130 g)",
                diet_flags: VEGAN_HALAL,
                allergy_flags: &[],
                rationale: "Complex carbohydrates replenish glycogen",
            },
            FoodRow {
                name: "Almonds",
                icon: "🥜",
                calories: 164,
                carbs_g: 6.0,
                protein_g: 6.0,
                fat_g: 14.0,
                micros: &[("Mg", 76.0), ("E", 7.3)],
                tags: &["healthy-fat"],
                portion: "28 g (about 23 pieces)",
                diet_flags: VEGAN_HALAL,
                allergy_flags: &["Nuts"],
                rationale: "Healthy fats and vitamin E, anti-inflammatory effects",
            },
        ],
    },
    StateRow {
        state: UserState::SleepPrep,
        rationale: "Preparing for sleep • Need to promote melatonin secretion • Avoid stimulating foods",
        foods: [
            FoodRow {
                name: "Cherries",
                icon: "🍒",
                calories: 50,
                carbs_g: 12.0,
                protein_g: 1.0,
                fat_g: 0.3,
                micros: &[("C", 7.0), ("K", 173.0)],
                tags: &["sleep-aid"],
                portion: "100 g (about 10 pieces)",
                diet_flags: VEGAN_HALAL,
                allergy_flags: &[],
                rationale: "Natural melatonin source, promotes sleep",
            },
            FoodRow {
                name: "Oatmeal Porridge",
                icon: "🥣",
                calories: 150,
                carbs_g: 27.0,
                protein_g: 5.0,
                fat_g: 3.0,
                micros: &[("Mg", 25.0), ("B6", 0.1)],
                tags: &["staple"],
                portion: "40 g dry weight",
                diet_flags: &["Vegan"],
                allergy_flags: GLUTEN_UNLESS_GF,
                rationale: "Magnesium and B6 help relax nerves",
            },
            FoodRow {
                name: "Banana",
                icon: "🍌",
                calories: 105,
                carbs_g: 27.0,
                protein_g: 1.3,
                fat_g: 0.4,
                micros: BANANA_MICROS,
                tags: &["common"],
                portion: "1 medium (120 g)",
                diet_flags: &["Vegetarian", "Halal"],
                allergy_flags: &[],
                rationale: "Tryptophan and magnesium, natural sleep aid",
            },
        ],
    },
    StateRow {
        state: UserState::FocusNeeded,
        rationale: "Need to improve focus • Suggest stable blood sugar and brain nutrition • Avoid blood sugar fluctuations",
        foods: [
            FoodRow {
                name: "Blueberries",
                icon: "🫐",
                calories: 57,
                carbs_g: 14.0,
                protein_g: 0.7,
                fat_g: 0.3,
                micros: &[("C", 9.7), ("K", 77.0)],
                tags: &["brain-food"],
                portion: "100 g (about 1 cup)",
                diet_flags: VEGAN_HALAL,
                allergy_flags: &[],
                rationale: "Antioxidants protect brain cells, improve cognitive function",
            },
            FoodRow {
                name: "Walnuts",
                icon: "🥜",
                calories: 185,
                carbs_g: 4.0,
                protein_g: 4.0,
                fat_g: 18.0,
                micros: &[("Mg", 45.0), ("E", 0.7)],
                tags: &["healthy-fat"],
                portion: "28 g (about 7 pieces)",
                diet_flags: VEGAN_HALAL,
                allergy_flags: &["Nuts"],
                rationale: "Omega-3 fatty acids, support brain health",
            },
            FoodRow {
                name: "Green Tea",
                icon: "🍵",
                calories: 2,
                carbs_g: 0.0,
                protein_g: 0.0,
                fat_g: 0.0,
                micros: &[("C", 6.0), ("K", 8.0)],
                tags: &["beverage"],
                portion: "240 ml",
                diet_flags: VEGAN_HALAL,
                allergy_flags: &[],
                rationale: "L-theanine and moderate caffeine, improves focus",
            },
        ],
    },
];

/// Owned state→foods table covering every `UserState`
#[derive(Debug, Clone, PartialEq)]
pub struct StateCatalog {
    // Indexed by `UserState::index`
    entries: [StateEntry; STATE_COUNT],
}

impl StateCatalog {
    /// The built-in table
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            entries: STATE_TABLE.each_ref().map(StateRow::to_entry),
        }
    }

    /// Build a table from caller-supplied entries
    ///
    /// # Errors
    ///
    /// Returns an error if a state appears twice, a state is missing, or a
    /// food has a blank name
    pub fn from_entries(entries: impl IntoIterator<Item = StateEntry>) -> AppResult<Self> {
        let mut catalog = Self::builtin();
        let mut supplied = [false; STATE_COUNT];
        for entry in entries {
            Self::check_entry(&entry)?;
            let index = entry.state.index();
            if supplied[index] {
                return Err(AppError::new(
                    ErrorCode::ResourceAlreadyExists,
                    format!("Duplicate catalog entry for state '{}'", entry.state.token()),
                )
                .with_resource_id(entry.state.token()));
            }
            supplied[index] = true;
            catalog.entries[index] = entry;
        }

        if let Some(state) = UserState::ALL
            .into_iter()
            .find(|state| !supplied[state.index()])
        {
            return Err(AppError::invalid_input(format!(
                "Catalog is missing an entry for state '{}'",
                state.token()
            ))
            .with_resource_id(state.token()));
        }

        Ok(catalog)
    }

    fn check_entry(entry: &StateEntry) -> AppResult<()> {
        if entry.foods.iter().any(|f| f.name.trim().is_empty()) {
            return Err(AppError::invalid_input(format!(
                "Catalog entry for state '{}' has a food with an empty name",
                entry.state.token()
            )));
        }
        Ok(())
    }

    /// Replace the entry for one state
    ///
    /// # Errors
    ///
    /// Returns an error if a food in the entry has a blank name
    pub fn with_entry(mut self, entry: StateEntry) -> AppResult<Self> {
        Self::check_entry(&entry)?;
        let index = entry.state.index();
        self.entries[index] = entry;
        Ok(self)
    }

    /// Entry for a state
    #[must_use]
    pub fn lookup(&self, state: UserState) -> &StateEntry {
        &self.entries[state.index()]
    }

    /// All entries in `UserState::ALL` order
    #[must_use]
    pub fn entries(&self) -> &[StateEntry] {
        &self.entries
    }
}

impl Default for StateCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_rows_follow_state_order() {
        for (row, state) in STATE_TABLE.iter().zip(UserState::ALL) {
            assert_eq!(row.state, state);
        }
    }

    #[test]
    fn test_builtin_covers_every_state() {
        let catalog = StateCatalog::builtin();
        for state in UserState::ALL {
            assert_eq!(catalog.lookup(state).state, state);
        }
    }

    #[test]
    fn test_missing_state_reported_by_token() {
        let mut entries = StateCatalog::builtin().entries().to_vec();
        entries.retain(|entry| entry.state != UserState::SleepPrep);

        let error = StateCatalog::from_entries(entries).unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidInput);
        assert_eq!(error.context.resource_id.as_deref(), Some("sleepPrep"));
    }

    #[test]
    fn test_from_entries_accepts_reordered_table() {
        let mut entries = StateCatalog::builtin().entries().to_vec();
        entries.reverse();
        assert_eq!(
            StateCatalog::from_entries(entries).unwrap(),
            StateCatalog::builtin()
        );
    }

    #[test]
    fn test_duplicate_state_rejected() {
        let stressed = StateCatalog::builtin().lookup(UserState::Stressed).clone();
        let result = StateCatalog::from_entries(vec![stressed.clone(), stressed]);
        assert!(result.is_err());
    }
}
