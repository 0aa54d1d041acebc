// ABOUTME: User dietary preferences, allergies, and pantry models
// ABOUTME: Token parsing for preference documents and the default pantry contents
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriGuide Contributors

use crate::errors::AppResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Lowercase a token and drop separators so "dairyFree", "dairy-free" and
/// "Dairy free" compare equal.
fn normalize_token(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Dietary preference selected by the user
///
/// Tokens that are not recognized are kept as `Unknown` so a preferences
/// document always parses; an unknown preference matches no food.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DietaryPreference {
    /// No animal products
    Vegan,
    /// No meat or fish
    Vegetarian,
    /// Halal compliant
    Halal,
    /// Kosher compliant
    Kosher,
    /// No dairy
    DairyFree,
    /// No gluten
    GlutenFree,
    /// No tree nuts or peanuts
    NutFree,
    /// Unrecognized token, preserved verbatim
    Unknown(String),
}

impl DietaryPreference {
    /// Every recognized preference
    pub const KNOWN: [Self; 7] = [
        Self::Vegan,
        Self::Vegetarian,
        Self::Halal,
        Self::Kosher,
        Self::DairyFree,
        Self::GlutenFree,
        Self::NutFree,
    ];

    /// Wire token ("dairyFree")
    #[must_use]
    pub fn token(&self) -> &str {
        match self {
            Self::Vegan => "vegan",
            Self::Vegetarian => "vegetarian",
            Self::Halal => "halal",
            Self::Kosher => "kosher",
            Self::DairyFree => "dairyFree",
            Self::GlutenFree => "glutenFree",
            Self::NutFree => "nutFree",
            Self::Unknown(raw) => raw,
        }
    }

    /// Display label ("Dairy-free"), used for diet-flag matching
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Vegan => "Vegan",
            Self::Vegetarian => "Vegetarian",
            Self::Halal => "Halal",
            Self::Kosher => "Kosher",
            Self::DairyFree => "Dairy-free",
            Self::GlutenFree => "Gluten-free",
            Self::NutFree => "Nut-free",
            Self::Unknown(raw) => raw,
        }
    }

    /// Lowercased label to match against diet flags; `None` for unknown tokens
    #[must_use]
    pub fn match_label(&self) -> Option<String> {
        match self {
            Self::Unknown(_) => None,
            known => Some(known.label().to_lowercase()),
        }
    }

    /// Parse a token or label, case-insensitively
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let wanted = normalize_token(raw);
        Self::KNOWN
            .into_iter()
            .find(|p| normalize_token(p.token()) == wanted || normalize_token(p.label()) == wanted)
            .unwrap_or_else(|| Self::Unknown(raw.to_owned()))
    }
}

impl From<String> for DietaryPreference {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<DietaryPreference> for String {
    fn from(pref: DietaryPreference) -> Self {
        match pref {
            DietaryPreference::Unknown(raw) => raw,
            known => known.token().to_owned(),
        }
    }
}

impl fmt::Display for DietaryPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Food allergy declared by the user
///
/// Unknown tokens are preserved and exclude nothing.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Allergy {
    /// Milk and milk products
    Dairy,
    /// Tree nuts and peanuts
    Nuts,
    /// Wheat, barley, rye
    Gluten,
    /// Eggs
    Egg,
    /// Soybeans
    Soy,
    /// Crustaceans and molluscs
    Shellfish,
    /// Unrecognized token, preserved verbatim
    Unknown(String),
}

impl Allergy {
    /// Every recognized allergy
    pub const KNOWN: [Self; 6] = [
        Self::Dairy,
        Self::Nuts,
        Self::Gluten,
        Self::Egg,
        Self::Soy,
        Self::Shellfish,
    ];

    /// Wire token ("shellfish")
    #[must_use]
    pub fn token(&self) -> &str {
        match self {
            Self::Dairy => "dairy",
            Self::Nuts => "nuts",
            Self::Gluten => "gluten",
            Self::Egg => "egg",
            Self::Soy => "soy",
            Self::Shellfish => "shellfish",
            Self::Unknown(raw) => raw,
        }
    }

    /// Display label ("Shellfish"), used for allergy-flag matching
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Dairy => "Dairy",
            Self::Nuts => "Nuts",
            Self::Gluten => "Gluten",
            Self::Egg => "Egg",
            Self::Soy => "Soy",
            Self::Shellfish => "Shellfish",
            Self::Unknown(raw) => raw,
        }
    }

    /// Lowercased label to match against allergy flags; `None` for unknown tokens
    #[must_use]
    pub fn match_label(&self) -> Option<String> {
        match self {
            Self::Unknown(_) => None,
            known => Some(known.label().to_lowercase()),
        }
    }

    /// Parse a token or label, case-insensitively
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let wanted = normalize_token(raw);
        Self::KNOWN
            .into_iter()
            .find(|a| normalize_token(a.token()) == wanted)
            .unwrap_or_else(|| Self::Unknown(raw.to_owned()))
    }
}

impl From<String> for Allergy {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<Allergy> for String {
    fn from(allergy: Allergy) -> Self {
        match allergy {
            Allergy::Unknown(raw) => raw,
            known => known.token().to_owned(),
        }
    }
}

impl fmt::Display for Allergy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Item the user keeps at home
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PantryItem {
    /// Food name, matched case-insensitively against catalog names
    pub name: String,
    /// Emoji icon
    #[serde(default)]
    pub emoji: String,
    /// Disabled items are kept in the list but ignored for ranking
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

const fn default_enabled() -> bool {
    true
}

impl PantryItem {
    /// Create a pantry item
    pub fn new(name: impl Into<String>, emoji: impl Into<String>, enabled: bool) -> Self {
        Self {
            name: name.into(),
            emoji: emoji.into(),
            enabled,
        }
    }
}

/// Dietary preferences, allergies, and pantry of one user
///
/// Supplied by the caller and only read by the engine. Missing keys in a
/// preferences document default to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPreferences {
    /// Selected dietary preferences (AND semantics when filtering)
    pub preferences: BTreeSet<DietaryPreference>,
    /// Declared allergies
    pub allergies: BTreeSet<Allergy>,
    /// Pantry contents
    pub pantry: Vec<PantryItem>,
}

impl UserPreferences {
    /// Parse a preferences JSON document
    ///
    /// # Errors
    ///
    /// Returns an `InvalidFormat` error if the document is not valid JSON or
    /// does not follow the `{preferences, allergies, pantry}` shape
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize back to a JSON document
    ///
    /// # Errors
    ///
    /// Returns a serialization error if encoding fails
    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Empty preferences with the default pantry stocked
    #[must_use]
    pub fn with_default_pantry() -> Self {
        Self {
            pantry: Self::default_pantry(),
            ..Self::default()
        }
    }

    /// Starter pantry offered to new users
    #[must_use]
    pub fn default_pantry() -> Vec<PantryItem> {
        vec![
            PantryItem::new("Banana", "🍌", true),
            PantryItem::new("Dark Chocolate (70%+)", "🍫", false),
            PantryItem::new("Yogurt", "🥣", true),
            PantryItem::new("Oats", "🥣", true),
            PantryItem::new("Apple", "🍎", true),
            PantryItem::new("Greek Yogurt", "🥛", true),
            PantryItem::new("Eggs", "🥚", false),
            PantryItem::new("Nuts", "🥜", false),
        ]
    }

    /// Lowercased names of enabled pantry items
    #[must_use]
    pub fn enabled_pantry_names(&self) -> BTreeSet<String> {
        self.pantry
            .iter()
            .filter(|item| item.enabled)
            .map(|item| item.name.to_lowercase())
            .collect()
    }

    /// Builder-style preference addition
    #[must_use]
    pub fn with_preference(mut self, preference: DietaryPreference) -> Self {
        self.preferences.insert(preference);
        self
    }

    /// Builder-style allergy addition
    #[must_use]
    pub fn with_allergy(mut self, allergy: Allergy) -> Self {
        self.allergies.insert(allergy);
        self
    }

    /// Builder-style pantry addition
    #[must_use]
    pub fn with_pantry_item(mut self, item: PantryItem) -> Self {
        self.pantry.push(item);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preference_parse_accepts_token_and_label() {
        assert_eq!(DietaryPreference::parse("dairyFree"), DietaryPreference::DairyFree);
        assert_eq!(DietaryPreference::parse("Dairy-free"), DietaryPreference::DairyFree);
        assert_eq!(DietaryPreference::parse("VEGAN"), DietaryPreference::Vegan);
        assert_eq!(
            DietaryPreference::parse("paleo"),
            DietaryPreference::Unknown("paleo".to_owned())
        );
    }

    #[test]
    fn test_unknown_tokens_have_no_match_label() {
        assert!(DietaryPreference::parse("paleo").match_label().is_none());
        assert!(Allergy::parse("sesame").match_label().is_none());
        assert_eq!(Allergy::Dairy.match_label().as_deref(), Some("dairy"));
    }

    #[test]
    fn test_token_round_trip_preserves_unknown() {
        let raw: String = DietaryPreference::parse("Keto").into();
        assert_eq!(raw, "Keto");
        let raw: String = DietaryPreference::NutFree.into();
        assert_eq!(raw, "nutFree");
    }

    #[test]
    fn test_default_pantry_enabled_names() {
        let prefs = UserPreferences::with_default_pantry();
        let names = prefs.enabled_pantry_names();
        assert!(names.contains("banana"));
        assert!(names.contains("greek yogurt"));
        assert!(!names.contains("dark chocolate (70%+)"));
        assert_eq!(names.len(), 5);
    }
}
