// ABOUTME: Raw corpus record as found in source files, and its normalization into Recipe
// ABOUTME: Resolves dataset column aliases and delimiter-joined strings at the ingestion boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Ingestion Records
//!
//! Source datasets name columns inconsistently (`Healthy_Type` vs
//! `health_type`, `BestUsdaIngredientName` vs `ingredients`) and encode lists
//! as delimiter-joined strings. Both quirks are resolved here, once, through
//! serde aliases and [`RecipeRecord::into_recipe`]. Nothing past this module
//! sees the raw shapes.

use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::warn;

use super::health::{HealthTarget, Nutrient};
use super::recipe::{Recipe, RecipeId};
use super::text::{clean_label, is_placeholder, split_delimited};
use crate::constants::ingestion::{INGREDIENT_DELIMITER, LABEL_DELIMITER};
use crate::errors::CorpusError;

/// Identifier as written in the source: integer or numeric string
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawRecipeId {
    /// JSON integer
    Number(u64),
    /// Numeric text, e.g. from a CSV export
    Text(String),
}

/// List field as written in the source: array or delimiter-joined string
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(untagged)]
pub enum RawList {
    /// Already a JSON array
    Items(Vec<String>),
    /// Delimiter-joined text
    Joined(String),
    /// Absent or `null`
    #[default]
    Empty,
}

impl RawList {
    /// Flatten into trimmed, non-placeholder parts, splitting joined text on `delimiter`
    #[must_use]
    pub fn into_vec(self, delimiter: char) -> Vec<String> {
        match self {
            Self::Items(items) => items
                .into_iter()
                .filter(|item| !is_placeholder(item))
                .map(|item| item.trim().to_owned())
                .collect(),
            Self::Joined(text) => split_delimited(&text, delimiter),
            Self::Empty => Vec::new(),
        }
    }
}

/// Numeric magnitude as written in the source
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    /// JSON number
    Number(f64),
    /// Numeric text, possibly with a unit suffix ("12.5g")
    Text(String),
}

impl RawNumber {
    fn to_f64(&self) -> Option<f64> {
        let value = match self {
            Self::Number(value) => Some(*value),
            Self::Text(text) => {
                let numeric: String = text
                    .trim()
                    .chars()
                    .take_while(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
                    .collect();
                numeric.parse::<f64>().ok()
            }
        };
        value.filter(|v| v.is_finite())
    }
}

/// Instructions as written in the source: one text block or a list of steps
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawText {
    /// Single text block
    Text(String),
    /// Ordered steps
    Steps(Vec<String>),
}

/// One recipe record exactly as deserialized from the corpus source
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecipeRecord {
    /// Identifier
    #[serde(default, alias = "RecipeId", alias = "recipe_id")]
    pub id: Option<RawRecipeId>,
    /// Display name
    #[serde(default, alias = "Name")]
    pub name: Option<String>,
    /// Description
    #[serde(default, alias = "Description")]
    pub description: Option<String>,
    /// Cooking method
    #[serde(default, alias = "Cooking_Method")]
    pub cooking_method: Option<String>,
    /// Cuisine region
    #[serde(default, alias = "CuisineRegion", alias = "region")]
    pub cuisine_region: Option<String>,
    /// Country of origin
    #[serde(default, alias = "Country")]
    pub country: Option<String>,
    /// Diet types (comma-joined or list)
    #[serde(default, alias = "Diet_Types", alias = "diet_type")]
    pub diet_types: RawList,
    /// Meal types (comma-joined or list)
    #[serde(default, alias = "meal_types", alias = "Meal_Type")]
    pub meal_type: RawList,
    /// Servings bucket
    #[serde(default, alias = "Servings_Bin")]
    pub servings_bin: Option<String>,
    /// Cook time bucket
    #[serde(default, alias = "Cook_Time")]
    pub cook_time: Option<String>,
    /// Health labels (comma-joined or list)
    #[serde(
        default,
        alias = "Healthy_Type",
        alias = "healthy_type",
        alias = "health_type"
    )]
    pub health_types: RawList,
    /// Explicit nutrient → bucket map
    #[serde(default)]
    pub health_levels: BTreeMap<String, String>,
    /// Nutrient magnitudes
    #[serde(default, alias = "nutrition_facts", alias = "Nutrition_Facts")]
    pub nutrition_values: BTreeMap<String, RawNumber>,
    /// Ingredient names (semicolon-joined or list)
    #[serde(default, alias = "BestUsdaIngredientName")]
    pub ingredients: RawList,
    /// Raw ingredient lines with quantities (semicolon-joined or list)
    #[serde(default, alias = "RecipeIngredientParts", alias = "ingredient_parts")]
    pub ingredient_lines: RawList,
    /// Instructions
    #[serde(default, alias = "RecipeInstructions")]
    pub instructions: Option<RawText>,
    /// Image URLs (comma-joined or list)
    #[serde(default, alias = "Images")]
    pub images: RawList,
}

impl RecipeRecord {
    /// Normalize into a canonical recipe
    ///
    /// # Errors
    ///
    /// Returns [`CorpusError::MissingId`] or [`CorpusError::InvalidId`] when the
    /// record cannot be identified. `index` is the record's position in the
    /// source and only feeds error messages.
    pub fn into_recipe(self, index: usize) -> Result<Recipe, CorpusError> {
        let id = match self.id {
            None => return Err(CorpusError::MissingId { index }),
            Some(RawRecipeId::Number(value)) => RecipeId(value),
            Some(RawRecipeId::Text(text)) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return Err(CorpusError::MissingId { index });
                }
                trimmed
                    .parse::<u64>()
                    .map(RecipeId)
                    .map_err(|_| CorpusError::InvalidId {
                        index,
                        value: trimmed.to_owned(),
                    })?
            }
        };

        let health_types = self.health_types.into_vec(LABEL_DELIMITER);
        let health_levels = merge_health_levels(id, &health_types, &self.health_levels);
        let nutrition_values = self
            .nutrition_values
            .iter()
            .filter_map(|(name, raw)| match raw.to_f64() {
                Some(value) => Some((name.trim().to_lowercase(), value)),
                None => {
                    warn!(recipe_id = %id, nutrient = %name, "Dropping unparsable nutrition value");
                    None
                }
            })
            .collect();

        let instructions = match self.instructions {
            Some(RawText::Text(text)) => clean_label(Some(&text)),
            Some(RawText::Steps(steps)) => {
                let joined = steps
                    .iter()
                    .map(|step| step.trim())
                    .filter(|step| !step.is_empty())
                    .collect::<Vec<_>>()
                    .join("\n");
                clean_label(Some(&joined))
            }
            None => None,
        };

        Ok(Recipe {
            id,
            name: clean_label(self.name.as_deref()).unwrap_or_else(|| format!("Recipe {id}")),
            description: clean_label(self.description.as_deref()),
            cooking_method: clean_label(self.cooking_method.as_deref()),
            cuisine_region: clean_label(self.cuisine_region.as_deref()),
            country: clean_label(self.country.as_deref()),
            diet_types: self.diet_types.into_vec(LABEL_DELIMITER),
            meal_type: self.meal_type.into_vec(LABEL_DELIMITER),
            servings_bin: clean_label(self.servings_bin.as_deref()),
            cook_time: clean_label(self.cook_time.as_deref()),
            health_types,
            health_levels,
            nutrition_values,
            ingredients: self.ingredients.into_vec(INGREDIENT_DELIMITER),
            ingredient_lines: self.ingredient_lines.into_vec(INGREDIENT_DELIMITER),
            instructions,
            images: self.images.into_vec(LABEL_DELIMITER),
        })
    }
}

/// Fold labelled health types and the explicit level map into one canonical map
///
/// Explicit `health_levels` entries win over levels parsed from labels.
fn merge_health_levels(
    id: RecipeId,
    labels: &[String],
    explicit: &BTreeMap<String, String>,
) -> BTreeMap<Nutrient, String> {
    let mut levels = BTreeMap::new();

    for target in labels.iter().filter_map(|label| HealthTarget::parse(label)) {
        if let (Some(nutrient), Some(level)) = (target.nutrient, target.level) {
            levels.insert(nutrient, level);
        }
    }

    for (name, bucket) in explicit {
        let Some(nutrient) = Nutrient::classify(name) else {
            warn!(recipe_id = %id, nutrient = %name, "Ignoring health level for unknown nutrient");
            continue;
        };
        if let Some(level) = HealthTarget::from_level(nutrient, bucket).level {
            levels.insert(nutrient, level);
        }
    }

    levels
}
