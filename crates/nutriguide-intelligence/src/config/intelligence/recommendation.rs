// ABOUTME: Recommendation configuration for result size and catalog search limits
// ABOUTME: Bounds the number of foods returned per state and per priority nutrient
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriGuide Contributors

use nutriguide_core::constants::limits;
use serde::{Deserialize, Serialize};

/// Recommendation Configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationConfig {
    /// Maximum foods per recommendation (at most 3)
    pub max_foods: usize,
    /// Candidate pool size when searching the food catalog for a nutrient
    pub search_limit: usize,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            max_foods: limits::MAX_RECOMMENDED_FOODS,
            search_limit: limits::DEFAULT_SEARCH_LIMIT,
        }
    }
}
