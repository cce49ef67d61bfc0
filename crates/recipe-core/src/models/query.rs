// ABOUTME: Recommendation request DTO, criteria groups, weights, and the validated query
// ABOUTME: Converts the loosely-typed HTTP request into a normalized RecommendationQuery
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tracing::warn;

use super::health::HealthTarget;
use super::text::{clean_label, normalize_key};
use crate::constants::query::{DEFAULT_CRITERION_WEIGHT, DEFAULT_TOP_K, MAX_TOP_K};
use crate::errors::{AppError, AppResult, ErrorCode};

/// A weighted criteria group; each group has exactly one feature extractor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CriteriaGroup {
    /// Cooking method exact match
    CookingMethod,
    /// Cuisine region exact match
    CuisineRegion,
    /// Diet type coverage
    DietTypes,
    /// Ingredient semantic similarity
    Ingredients,
    /// Health-level coverage
    Nutrition,
    /// Meal type coverage
    MealType,
    /// Servings bucket exact match
    ServingsBin,
    /// Cook time bucket exact match
    CookTime,
}

impl CriteriaGroup {
    /// Number of groups
    pub const COUNT: usize = 8;

    /// Every group, in slot order
    pub const ALL: [Self; Self::COUNT] = [
        Self::CookingMethod,
        Self::CuisineRegion,
        Self::DietTypes,
        Self::Ingredients,
        Self::Nutrition,
        Self::MealType,
        Self::ServingsBin,
        Self::CookTime,
    ];

    /// Slot of this group in per-group arrays
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Canonical weight key
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CookingMethod => "cooking_method",
            Self::CuisineRegion => "cuisine_region",
            Self::DietTypes => "diet_types",
            Self::Ingredients => "ingredients",
            Self::Nutrition => "nutrition",
            Self::MealType => "meal_type",
            Self::ServingsBin => "servings_bin",
            Self::CookTime => "cook_time",
        }
    }

    /// Resolve a weight key, accepting the aliases older clients send
    #[must_use]
    pub fn from_weight_key(key: &str) -> Option<Self> {
        match key.trim().to_lowercase().as_str() {
            "cooking_method" => Some(Self::CookingMethod),
            "cuisine_region" | "region" => Some(Self::CuisineRegion),
            "diet_types" | "diet_type" => Some(Self::DietTypes),
            "ingredients" | "ingredient" => Some(Self::Ingredients),
            "nutrition" | "health_types" | "healthy_type" | "health_type" => Some(Self::Nutrition),
            "meal_type" | "meal_types" => Some(Self::MealType),
            "servings_bin" | "servings" => Some(Self::ServingsBin),
            "cook_time" => Some(Self::CookTime),
            _ => None,
        }
    }
}

impl fmt::Display for CriteriaGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Non-negative relative weight per criteria group
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CriteriaWeights([f64; CriteriaGroup::COUNT]);

impl Default for CriteriaWeights {
    fn default() -> Self {
        Self([DEFAULT_CRITERION_WEIGHT; CriteriaGroup::COUNT])
    }
}

impl CriteriaWeights {
    /// Every group weighted zero
    #[must_use]
    pub const fn zero() -> Self {
        Self([0.0; CriteriaGroup::COUNT])
    }

    /// Weight of one group
    #[must_use]
    pub const fn get(&self, group: CriteriaGroup) -> f64 {
        self.0[group.index()]
    }

    /// Builder-style setter; negative and non-finite weights clamp to zero
    #[must_use]
    pub fn with(mut self, group: CriteriaGroup, weight: f64) -> Self {
        self.0[group.index()] = if weight.is_finite() {
            weight.max(0.0)
        } else {
            0.0
        };
        self
    }

    /// Sum of all weights
    #[must_use]
    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Build from caller-supplied key → weight pairs
    ///
    /// Missing groups default to 1.0; unknown keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when a weight is negative or not finite.
    pub fn from_map(weights: &HashMap<String, f64>) -> AppResult<Self> {
        let mut resolved = Self::default();
        for (key, &weight) in weights {
            let Some(group) = CriteriaGroup::from_weight_key(key) else {
                warn!(weight_key = %key, "Ignoring weight for unknown criteria group");
                continue;
            };
            if !weight.is_finite() || weight < 0.0 {
                return Err(AppError::new(
                    ErrorCode::ValueOutOfRange,
                    format!("Weight for '{key}' must be a non-negative number, got {weight}"),
                ));
            }
            resolved.0[group.index()] = weight;
        }
        Ok(resolved)
    }
}

/// Recommendation request body, exactly as the front end posts it
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationRequest {
    /// Requested cooking method
    pub cooking_method: Option<String>,
    /// Requested servings bucket
    pub servings_bin: Option<String>,
    /// Requested diet types
    pub diet_types: Vec<String>,
    /// Requested meal types
    pub meal_type: Vec<String>,
    /// Requested cook time bucket
    pub cook_time: Option<String>,
    /// Requested health labels (folded from the per-nutrient selects)
    pub health_types: Vec<String>,
    /// Requested cuisine region
    pub cuisine_region: Option<String>,
    /// Requested ingredients
    pub ingredients: Vec<String>,
    /// Relative weight per criteria group
    pub weights: HashMap<String, f64>,
    /// Maximum result size
    pub top_k: Option<i64>,
    /// Allow relaxation when the strict pass finds nothing
    pub flexible: Option<bool>,
}

/// Bounds applied while normalizing a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryLimits {
    /// `top_k` used when the request omits it
    pub default_top_k: usize,
    /// Upper clamp for `top_k`
    pub max_top_k: usize,
}

impl Default for QueryLimits {
    fn default() -> Self {
        Self {
            default_top_k: DEFAULT_TOP_K,
            max_top_k: MAX_TOP_K,
        }
    }
}

/// A validated, normalized recommendation query
///
/// All labels are normalized keys; empty means "no opinion".
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationQuery {
    /// Requested cooking method
    pub cooking_method: Option<String>,
    /// Requested cuisine region
    pub cuisine_region: Option<String>,
    /// Requested servings bucket
    pub servings_bin: Option<String>,
    /// Requested cook time bucket
    pub cook_time: Option<String>,
    /// Requested diet types
    pub diet_types: Vec<String>,
    /// Requested meal types
    pub meal_type: Vec<String>,
    /// Requested health targets
    pub health_types: Vec<HealthTarget>,
    /// Requested ingredients
    pub ingredients: Vec<String>,
    /// Per-group weights
    pub weights: CriteriaWeights,
    /// Maximum result size, at least 1
    pub top_k: usize,
    /// Allow relaxation when the strict pass finds nothing
    pub flexible: bool,
}

impl Default for RecommendationQuery {
    fn default() -> Self {
        Self {
            cooking_method: None,
            cuisine_region: None,
            servings_bin: None,
            cook_time: None,
            diet_types: Vec::new(),
            meal_type: Vec::new(),
            health_types: Vec::new(),
            ingredients: Vec::new(),
            weights: CriteriaWeights::default(),
            top_k: DEFAULT_TOP_K,
            flexible: false,
        }
    }
}

fn normalize_single(value: Option<&str>) -> Option<String> {
    clean_label(value).map(|v| normalize_key(&v))
}

/// Normalize and de-duplicate a list, keeping first-seen order
fn normalize_list(values: &[String]) -> Vec<String> {
    let mut seen = Vec::with_capacity(values.len());
    for key in values.iter().filter_map(|v| normalize_single(Some(v.as_str()))) {
        if !seen.contains(&key) {
            seen.push(key);
        }
    }
    seen
}

impl RecommendationQuery {
    /// True when the caller expressed an opinion on this group
    #[must_use]
    pub fn is_specified(&self, group: CriteriaGroup) -> bool {
        match group {
            CriteriaGroup::CookingMethod => self.cooking_method.is_some(),
            CriteriaGroup::CuisineRegion => self.cuisine_region.is_some(),
            CriteriaGroup::DietTypes => !self.diet_types.is_empty(),
            CriteriaGroup::Ingredients => !self.ingredients.is_empty(),
            CriteriaGroup::Nutrition => !self.health_types.is_empty(),
            CriteriaGroup::MealType => !self.meal_type.is_empty(),
            CriteriaGroup::ServingsBin => self.servings_bin.is_some(),
            CriteriaGroup::CookTime => self.cook_time.is_some(),
        }
    }

    /// True when no criteria group carries a value
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !CriteriaGroup::ALL.iter().any(|&g| self.is_specified(g))
    }

    /// Groups that constrain candidates: specified with a positive weight
    ///
    /// When every specified group is weighted zero, the specified groups are
    /// returned instead so the query still filters on what was asked.
    #[must_use]
    pub fn active_groups(&self) -> Vec<CriteriaGroup> {
        let specified: Vec<CriteriaGroup> = CriteriaGroup::ALL
            .into_iter()
            .filter(|&g| self.is_specified(g))
            .collect();
        let weighted: Vec<CriteriaGroup> = specified
            .iter()
            .copied()
            .filter(|&g| self.weights.get(g) > 0.0)
            .collect();
        if weighted.is_empty() {
            specified
        } else {
            weighted
        }
    }

    /// Validate and normalize a request
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the request names no criterion, and
    /// `ValueOutOfRange` for a negative or non-finite weight.
    pub fn from_request(request: &RecommendationRequest, limits: QueryLimits) -> AppResult<Self> {
        let weights = CriteriaWeights::from_map(&request.weights)?;

        let max_top_k = limits.max_top_k.max(1);
        let top_k = request.top_k.map_or(limits.default_top_k, |requested| {
            usize::try_from(requested).unwrap_or(0)
        });

        let query = Self {
            cooking_method: normalize_single(request.cooking_method.as_deref()),
            cuisine_region: normalize_single(request.cuisine_region.as_deref()),
            servings_bin: normalize_single(request.servings_bin.as_deref()),
            cook_time: normalize_single(request.cook_time.as_deref()),
            diet_types: normalize_list(&request.diet_types),
            meal_type: normalize_list(&request.meal_type),
            health_types: dedup_targets(&request.health_types),
            ingredients: normalize_list(&request.ingredients),
            weights,
            top_k: top_k.clamp(1, max_top_k),
            flexible: request.flexible.unwrap_or(false),
        };

        if query.is_empty() {
            return Err(AppError::invalid_input(
                "At least one recommendation criterion must be provided",
            ));
        }
        Ok(query)
    }
}

fn dedup_targets(labels: &[String]) -> Vec<HealthTarget> {
    let mut targets: Vec<HealthTarget> = Vec::with_capacity(labels.len());
    for target in labels.iter().filter_map(|label| HealthTarget::parse(label)) {
        if !targets.contains(&target) {
            targets.push(target);
        }
    }
    targets
}
