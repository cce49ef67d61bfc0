// ABOUTME: Immutable in-memory recipe corpus with id lookup and unique-ingredient index
// ABOUTME: Built once at startup from normalized records; read-only afterwards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::{BTreeSet, HashMap};
use tracing::debug;

use super::recipe::{Recipe, RecipeId, RecipeProfile};
use super::record::RecipeRecord;
use super::text::normalize_key;
use crate::errors::{AppError, AppResult, CorpusError};

/// The recipe corpus
///
/// `recipes[i]` and `profiles[i]` describe the same recipe. Each profile's
/// `ingredient_indices` point into [`Corpus::unique_ingredients`].
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    recipes: Vec<Recipe>,
    profiles: Vec<RecipeProfile>,
    by_id: HashMap<RecipeId, usize>,
    unique_ingredients: Vec<String>,
}

impl Corpus {
    /// Normalize raw records and build the corpus
    ///
    /// # Errors
    ///
    /// Fails on the first record without a usable id, or on a duplicate id.
    pub fn from_records(records: Vec<RecipeRecord>) -> Result<Self, CorpusError> {
        let recipes = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| record.into_recipe(index))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_recipes(recipes)
    }

    /// Build the corpus from already-normalized recipes
    ///
    /// # Errors
    ///
    /// Returns [`CorpusError::DuplicateId`] when two recipes share an id.
    pub fn from_recipes(recipes: Vec<Recipe>) -> Result<Self, CorpusError> {
        let mut by_id = HashMap::with_capacity(recipes.len());
        for (position, recipe) in recipes.iter().enumerate() {
            if by_id.insert(recipe.id, position).is_some() {
                return Err(CorpusError::DuplicateId {
                    id: recipe.id.value(),
                });
            }
        }

        let unique_ingredients: Vec<String> = recipes
            .iter()
            .flat_map(|recipe| recipe.ingredients.iter())
            .map(|name| normalize_key(name))
            .filter(|key| !key.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let slots: HashMap<&str, u32> = unique_ingredients
            .iter()
            .zip(0_u32..)
            .map(|(name, slot)| (name.as_str(), slot))
            .collect();

        let profiles = recipes
            .iter()
            .map(|recipe| {
                let mut profile = RecipeProfile::from_recipe(recipe);
                let mut indices: Vec<u32> = recipe
                    .ingredients
                    .iter()
                    .filter_map(|name| slots.get(normalize_key(name).as_str()).copied())
                    .collect();
                indices.sort_unstable();
                indices.dedup();
                profile.ingredient_indices = indices;
                profile
            })
            .collect();

        debug!(
            recipes = recipes.len(),
            unique_ingredients = unique_ingredients.len(),
            "Built recipe corpus"
        );

        Ok(Self {
            recipes,
            profiles,
            by_id,
            unique_ingredients,
        })
    }

    /// Look up a recipe by id
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when no recipe has this id.
    pub fn get(&self, id: RecipeId) -> AppResult<&Recipe> {
        self.by_id
            .get(&id)
            .and_then(|&position| self.recipes.get(position))
            .ok_or_else(|| AppError::not_found("Recipe"))
    }

    /// All recipes in load order
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Scoring profiles, parallel to [`Corpus::recipes`]
    #[must_use]
    pub fn profiles(&self) -> &[RecipeProfile] {
        &self.profiles
    }

    /// Sorted, de-duplicated normalized ingredient names across the corpus
    #[must_use]
    pub fn unique_ingredients(&self) -> &[String] {
        &self.unique_ingredients
    }

    /// Number of recipes
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// True when the corpus holds no recipes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    fn recipe(id: u64, ingredients: &[&str]) -> Recipe {
        Recipe {
            id: RecipeId(id),
            name: format!("Recipe {id}"),
            ingredients: ingredients.iter().map(|&s| s.to_owned()).collect(),
            ..Recipe::default()
        }
    }

    #[test]
    fn test_unique_ingredients_sorted_and_deduplicated() {
        let corpus = Corpus::from_recipes(vec![
            recipe(1, &["Sugar", "egg"]),
            recipe(2, &["EGG", "brown  sugar", "sugar"]),
        ])
        .unwrap();

        assert_eq!(
            corpus.unique_ingredients(),
            &["brown sugar".to_owned(), "egg".to_owned(), "sugar".to_owned()]
        );
        assert_eq!(corpus.profiles()[0].ingredient_indices, vec![1, 2]);
        assert_eq!(corpus.profiles()[1].ingredient_indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_get_known_and_unknown_ids() {
        let corpus = Corpus::from_recipes(vec![recipe(10, &[]), recipe(20, &[])]).unwrap();

        assert_eq!(corpus.get(RecipeId(20)).unwrap().name, "Recipe 20");
        let error = corpus.get(RecipeId(99)).unwrap_err();
        assert_eq!(error.code, ErrorCode::ResourceNotFound);
        assert_eq!(error.message, "Recipe not found");
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = Corpus::from_recipes(vec![recipe(1, &[]), recipe(1, &[])]);
        assert!(matches!(result, Err(CorpusError::DuplicateId { id: 1 })));
    }

    #[test]
    fn test_from_records_normalizes_joined_lists() {
        let records: Vec<RecipeRecord> = serde_json::from_str(
            r#"[
                {"RecipeId": "5", "Name": "Pancakes", "BestUsdaIngredientName": "Flour;Milk;unknown"},
                {"id": 6, "name": "Toast", "ingredients": ["Bread", " butter "]}
            ]"#,
        )
        .unwrap();
        let corpus = Corpus::from_records(records).unwrap();

        assert_eq!(corpus.len(), 2);
        assert_eq!(
            corpus.get(RecipeId(5)).unwrap().ingredients,
            vec!["Flour".to_owned(), "Milk".to_owned()]
        );
        assert_eq!(corpus.unique_ingredients().len(), 4);
    }

    #[test]
    fn test_from_records_reports_missing_id() {
        let records: Vec<RecipeRecord> =
            serde_json::from_str(r#"[{"id": 1, "name": "A"}, {"name": "B"}]"#).unwrap();
        assert!(matches!(
            Corpus::from_records(records),
            Err(CorpusError::MissingId { index: 1 })
        ));
    }
}
