// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Query defaults, clamp limits, ingestion placeholders, and service names

//! Constants module
//!
//! Constants are grouped into small domain modules rather than being
//! scattered through the scoring and service code.

/// Query defaults and limits
pub mod query {
    /// Result size used when a request omits `top_k`
    pub const DEFAULT_TOP_K: usize = 5;

    /// Upper clamp for `top_k` unless configuration overrides it
    pub const MAX_TOP_K: usize = 100;

    /// Weight applied to a criteria group the caller did not weight explicitly
    pub const DEFAULT_CRITERION_WEIGHT: f64 = 1.0;
}

/// Corpus ingestion constants
pub mod ingestion {
    /// Values the upstream dataset uses for "no value"
    pub const PLACEHOLDER_VALUES: [&str; 3] = ["unknown", "nan", "none"];

    /// Delimiter for diet types, meal types, and health labels in joined strings
    pub const LABEL_DELIMITER: char = ',';

    /// Delimiter for ingredient names in joined strings
    pub const INGREDIENT_DELIMITER: char = ';';
}

/// Service identification
pub mod service_names {
    /// Name reported in logs and the root banner
    pub const RECIPE_RECOMMENDER: &str = "recipe-recommender";
}

/// Environment-derived defaults
pub mod defaults {
    /// Default HTTP port (matches the original deployment)
    pub const HTTP_PORT: u16 = 8000;

    /// Default bind address
    pub const HOST: &str = "0.0.0.0";

    /// Default corpus location
    pub const RECIPES_PATH: &str = "./recipes.json";

    /// Default serving-layer timeout
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
}
