// ABOUTME: Canonical recipe model and its precomputed scoring profile
// ABOUTME: Recipe holds display fields; RecipeProfile holds normalized match keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;

use super::health::{HealthTarget, Nutrient};
use super::text::normalize_key;

/// Unique recipe identifier
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RecipeId(pub u64);

impl RecipeId {
    /// Underlying integer value
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for RecipeId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// A recipe as loaded from the corpus
///
/// Every list field is already split and trimmed; nothing downstream ever
/// sees delimiter-joined text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique identifier
    pub id: RecipeId,
    /// Display name
    pub name: String,
    /// Free-text description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Cooking method label ("bake", "grill", ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cooking_method: Option<String>,
    /// Cuisine region label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuisine_region: Option<String>,
    /// Country of origin, when the dataset records one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Diet type labels
    pub diet_types: Vec<String>,
    /// Meal type labels
    pub meal_type: Vec<String>,
    /// Servings bucket label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servings_bin: Option<String>,
    /// Cook time bucket label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<String>,
    /// Health labels as written in the dataset
    pub health_types: Vec<String>,
    /// Canonical per-nutrient ordinal buckets
    pub health_levels: BTreeMap<Nutrient, String>,
    /// Nutrient magnitudes (display only)
    pub nutrition_values: BTreeMap<String, f64>,
    /// Ingredient names in recipe order
    pub ingredients: Vec<String>,
    /// Raw ingredient lines with quantities
    pub ingredient_lines: Vec<String>,
    /// Preparation instructions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    /// Image URLs
    pub images: Vec<String>,
}

/// Normalized match keys for one recipe, built once at load time
///
/// Scoring reads only profiles so the hot loop never re-normalizes text.
#[derive(Debug, Clone, Default)]
pub struct RecipeProfile {
    /// Recipe this profile belongs to
    pub id: RecipeId,
    /// Normalized cooking method
    pub cooking_method: Option<String>,
    /// Normalized cuisine region
    pub cuisine_region: Option<String>,
    /// Normalized servings bucket
    pub servings_bin: Option<String>,
    /// Normalized cook time bucket
    pub cook_time: Option<String>,
    /// Normalized diet types
    pub diet_types: HashSet<String>,
    /// Normalized meal types
    pub meal_type: HashSet<String>,
    /// Per-nutrient buckets
    pub health_levels: BTreeMap<Nutrient, String>,
    /// Normalized health labels for attributes that name no nutrient
    pub health_labels: HashSet<String>,
    /// Positions of this recipe's distinct ingredients in the corpus index
    pub ingredient_indices: Vec<u32>,
}

impl RecipeProfile {
    /// Build the profile for a recipe; ingredient indices are filled by the corpus
    #[must_use]
    pub fn from_recipe(recipe: &Recipe) -> Self {
        let normalize_opt = |value: &Option<String>| value.as_deref().map(normalize_key);
        let normalize_set =
            |values: &[String]| values.iter().map(|v| normalize_key(v)).collect::<HashSet<_>>();

        let health_labels = recipe
            .health_types
            .iter()
            .filter_map(|label| HealthTarget::parse(label))
            .map(|target| target.label)
            .collect();

        Self {
            id: recipe.id,
            cooking_method: normalize_opt(&recipe.cooking_method),
            cuisine_region: normalize_opt(&recipe.cuisine_region),
            servings_bin: normalize_opt(&recipe.servings_bin),
            cook_time: normalize_opt(&recipe.cook_time),
            diet_types: normalize_set(&recipe.diet_types),
            meal_type: normalize_set(&recipe.meal_type),
            health_levels: recipe.health_levels.clone(),
            health_labels,
            ingredient_indices: Vec::new(),
        }
    }

    /// True when this recipe offers the requested health attribute
    #[must_use]
    pub fn satisfies(&self, target: &HealthTarget) -> bool {
        match (target.nutrient, target.level.as_deref()) {
            (Some(nutrient), Some(level)) => self
                .health_levels
                .get(&nutrient)
                .is_some_and(|bucket| bucket == level),
            (Some(nutrient), None) => self.health_levels.contains_key(&nutrient),
            (None, _) => self.health_labels.contains(&target.label),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Recipe {
        Recipe {
            id: RecipeId(7),
            name: "Oat Bake".to_owned(),
            cooking_method: Some(" Bake".to_owned()),
            diet_types: vec!["Vegan".to_owned(), "Gluten  Free".to_owned()],
            health_types: vec!["High Protein".to_owned(), "Heart Healthy".to_owned()],
            health_levels: BTreeMap::from([(Nutrient::Protein, "high".to_owned())]),
            ..Recipe::default()
        }
    }

    #[test]
    fn test_profile_normalizes_labels() {
        let profile = RecipeProfile::from_recipe(&sample());
        assert_eq!(profile.cooking_method.as_deref(), Some("bake"));
        assert!(profile.diet_types.contains("gluten free"));
        assert!(profile.diet_types.contains("vegan"));
    }

    #[test]
    fn test_profile_satisfies_health_targets() {
        let profile = RecipeProfile::from_recipe(&sample());

        assert!(profile.satisfies(&HealthTarget::parse("high protein").unwrap()));
        assert!(!profile.satisfies(&HealthTarget::parse("low protein").unwrap()));
        assert!(!profile.satisfies(&HealthTarget::parse("low fat").unwrap()));
        assert!(profile.satisfies(&HealthTarget::parse("heart healthy").unwrap()));
    }

    #[test]
    fn test_recipe_id_serializes_as_integer() {
        let json = serde_json::to_string(&vec![RecipeId(3), RecipeId(11)]).unwrap();
        assert_eq!(json, "[3,11]");
    }
}
