// ABOUTME: Recipe corpus and embedding fixtures shared by integration tests
// ABOUTME: Builds engines, server resources, and routers over a five-recipe corpus
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use axum::Router;
use recipe_recommender::{
    config::ServerConfig,
    corpus::{parse_corpus, parse_embeddings},
    intelligence::RecommendationEngine,
    resources::ServerResources,
    server::build_router,
};

/// Five recipes written with the mixed column spellings seen in dataset exports
///
/// | id | method | region   | diets                    | ingredients                  |
/// |----|--------|----------|--------------------------|------------------------------|
/// | 1  | bake   | italian  | vegan, vegetarian        | tomato, basil, olive oil     |
/// | 2  | fry    | asian    | vegetarian               | egg, rice, soy sauce         |
/// | 3  | fry    | french   | vegetarian, gluten free  | egg, cheese, butter          |
/// | 4  | grill  | american | gluten free              | chicken, garlic, olive oil   |
/// | 5  | raw    | italian  | vegan                    | cherry tomato, basil, olive oil |
pub const SAMPLE_CORPUS: &str = r#"[
    {
        "RecipeId": 1,
        "Name": "Tomato Basil Bake",
        "Cooking_Method": "Bake",
        "CuisineRegion": "Italian",
        "Diet_Types": "Vegan, Vegetarian",
        "Meal_Type": "Dinner",
        "Healthy_Type": "High Protein, Low Fat",
        "Servings_Bin": "4-6",
        "Cook_Time": "30-60 min",
        "BestUsdaIngredientName": "tomato; basil; olive oil"
    },
    {
        "id": "2",
        "name": "Egg Fried Rice",
        "cooking_method": "fry",
        "cuisine_region": "Asian",
        "diet_types": ["Vegetarian"],
        "meal_type": ["Lunch", "Dinner"],
        "health_types": ["High Carb"],
        "ingredients": ["egg", "rice", "soy sauce"]
    },
    {
        "id": 3,
        "name": "Cheese Omelette",
        "cooking_method": "Fry",
        "region": "French",
        "diet_type": ["Vegetarian", "Gluten Free"],
        "meal_types": ["Breakfast"],
        "health_type": ["High Protein"],
        "ingredients": ["egg", "cheese", "butter"]
    },
    {
        "recipe_id": 4,
        "name": "Grilled Chicken",
        "cooking_method": "Grill",
        "cuisine_region": "American",
        "diet_types": ["Gluten Free"],
        "meal_type": ["Dinner"],
        "health_levels": {"protein": "high", "fat": "low"},
        "nutrition_facts": {"protein": "31g", "fat": 6.5},
        "ingredients": ["chicken", "garlic", "olive oil"]
    },
    {
        "id": 5,
        "name": "Cherry Tomato Salad",
        "cooking_method": "Raw",
        "cuisine_region": "Italian",
        "diet_types": "Vegan",
        "meal_type": "Lunch",
        "health_types": "Low Calorie",
        "ingredients": "cherry tomato; basil; olive oil",
        "RecipeInstructions": ["Halve the tomatoes.", "Toss with basil."]
    }
]"#;

/// Embeddings where `tomato` and `cherry tomato` are close and everything else is orthogonal
pub const SAMPLE_EMBEDDINGS: &str = r#"{
    "egg": [1.0, 0.0, 0.0, 0.0],
    "tomato": [0.0, 1.0, 0.0, 0.0],
    "cherry tomato": [0.0, 0.8, 0.6, 0.0],
    "basil": [0.0, 0.0, 1.0, 0.0],
    "rice": [0.0, 0.0, 0.0, 1.0]
}"#;

/// Engine over the sample corpus and embeddings
pub fn sample_engine() -> RecommendationEngine {
    let corpus = parse_corpus(SAMPLE_CORPUS.as_bytes()).expect("sample corpus parses");
    let embeddings =
        parse_embeddings(SAMPLE_EMBEDDINGS.as_bytes()).expect("sample embeddings parse");
    RecommendationEngine::new(corpus, embeddings)
}

/// Server resources over the sample engine with default configuration
pub fn test_resources() -> Arc<ServerResources> {
    Arc::new(ServerResources::new(ServerConfig::default(), sample_engine()))
}

/// Fully layered router over the sample engine
pub fn test_router() -> Router {
    build_router(&test_resources())
}
