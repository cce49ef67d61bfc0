// ABOUTME: Nutrient classification and health-level parsing for recipe health labels
// ABOUTME: Turns labels like "High Protein" into a canonical (nutrient, level) target
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

use super::text::{is_placeholder, normalize_key};

/// Nutrient a health level refers to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Nutrient {
    /// Protein content
    Protein,
    /// Carbohydrate content
    Carb,
    /// Total fat content
    Fat,
    /// Saturated fat content
    SaturatedFat,
    /// Energy content
    Calorie,
    /// Sodium content
    Sodium,
    /// Sugar content
    Sugar,
    /// Dietary fiber content
    Fiber,
    /// Cholesterol content
    Cholesterol,
}

impl Nutrient {
    /// Classify free text into a nutrient
    ///
    /// Order matters: "saturated fat" must not be read as plain fat, and a
    /// label mentioning protein is a protein label regardless of what follows.
    #[must_use]
    pub fn classify(text: &str) -> Option<Self> {
        let e = text.to_lowercase();
        let saturated = e.contains("saturated");
        if e.contains("protein") {
            Some(Self::Protein)
        } else if e.contains("carb") {
            Some(Self::Carb)
        } else if e.contains("fat") && !saturated {
            Some(Self::Fat)
        } else if e.contains("fat") && saturated {
            Some(Self::SaturatedFat)
        } else if e.contains("calorie") || e.contains("kcal") {
            Some(Self::Calorie)
        } else if e.contains("sodium") {
            Some(Self::Sodium)
        } else if e.contains("sugar") {
            Some(Self::Sugar)
        } else if e.contains("fiber") || e.contains("fibre") {
            Some(Self::Fiber)
        } else if e.contains("cholesterol") {
            Some(Self::Cholesterol)
        } else {
            None
        }
    }

    /// Word stems that name this nutrient inside a label
    const fn stems(self) -> &'static [&'static str] {
        match self {
            Self::Protein => &["protein"],
            Self::Carb => &["carb"],
            Self::Fat => &["fat"],
            Self::SaturatedFat => &["saturated", "fat"],
            Self::Calorie => &["calorie", "kcal"],
            Self::Sodium => &["sodium"],
            Self::Sugar => &["sugar"],
            Self::Fiber => &["fiber", "fibre"],
            Self::Cholesterol => &["cholesterol"],
        }
    }

    /// Canonical lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Protein => "protein",
            Self::Carb => "carb",
            Self::Fat => "fat",
            Self::SaturatedFat => "saturated_fat",
            Self::Calorie => "calorie",
            Self::Sodium => "sodium",
            Self::Sugar => "sugar",
            Self::Fiber => "fiber",
            Self::Cholesterol => "cholesterol",
        }
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalize a bucket word sequence ("Moderate", "very-high") into a level key
#[must_use]
pub fn normalize_level(words: &[&str]) -> Option<String> {
    let mapped: Vec<&str> = words
        .iter()
        .map(|word| match *word {
            "moderate" | "mid" | "med" | "balanced" => "medium",
            other => other,
        })
        .collect();
    if mapped.is_empty() {
        None
    } else {
        Some(mapped.join("_"))
    }
}

fn tokenize(label: &str) -> Vec<String> {
    label
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// A requested (or offered) health attribute
///
/// Labels naming a nutrient become `(nutrient, level)` pairs; anything else
/// stays a generic attribute matched by its normalized label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HealthTarget {
    /// Nutrient the label refers to, if any
    pub nutrient: Option<Nutrient>,
    /// Ordinal bucket ("low", "medium", "high", ...), if the label names one
    pub level: Option<String>,
    /// Normalized label text
    pub label: String,
}

impl HealthTarget {
    /// Parse a health label; placeholders yield `None`
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        if is_placeholder(label) {
            return None;
        }
        let tokens = tokenize(label);
        let joined = tokens.join("_");
        let nutrient = Nutrient::classify(&joined);

        let level = nutrient.and_then(|n| {
            let words: Vec<&str> = tokens
                .iter()
                .map(String::as_str)
                .filter(|token| !n.stems().iter().any(|stem| token.contains(stem)))
                .collect();
            normalize_level(&words)
        });

        Some(Self {
            nutrient,
            level,
            label: normalize_key(&tokens.join(" ")),
        })
    }

    /// Build a target from an explicit `nutrient -> bucket` pair
    #[must_use]
    pub fn from_level(nutrient: Nutrient, bucket: &str) -> Self {
        let tokens = tokenize(bucket);
        let words: Vec<&str> = tokens.iter().map(String::as_str).collect();
        let level = normalize_level(&words);
        let label = match &level {
            Some(level) => format!("{} {nutrient}", level.replace('_', " ")),
            None => nutrient.to_string(),
        };
        Self {
            nutrient: Some(nutrient),
            level,
            label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_follows_dataset_rules() {
        assert_eq!(Nutrient::classify("High_Protein"), Some(Nutrient::Protein));
        assert_eq!(Nutrient::classify("low carbs"), Some(Nutrient::Carb));
        assert_eq!(Nutrient::classify("low_fat"), Some(Nutrient::Fat));
        assert_eq!(
            Nutrient::classify("low_saturated_fat"),
            Some(Nutrient::SaturatedFat)
        );
        assert_eq!(Nutrient::classify("Low Calorie"), Some(Nutrient::Calorie));
        assert_eq!(Nutrient::classify("heart healthy"), None);
    }

    #[test]
    fn test_parse_label_variants_agree() {
        let a = HealthTarget::parse("High Protein").unwrap();
        let b = HealthTarget::parse("high_protein").unwrap();
        let c = HealthTarget::parse("Protein: HIGH").unwrap();

        for target in [&a, &b, &c] {
            assert_eq!(target.nutrient, Some(Nutrient::Protein));
            assert_eq!(target.level.as_deref(), Some("high"));
        }
    }

    #[test]
    fn test_parse_normalizes_moderate_to_medium() {
        let target = HealthTarget::parse("Moderate Sugar").unwrap();
        assert_eq!(target.nutrient, Some(Nutrient::Sugar));
        assert_eq!(target.level.as_deref(), Some("medium"));
    }

    #[test]
    fn test_parse_generic_attribute() {
        let target = HealthTarget::parse("Heart Healthy").unwrap();
        assert_eq!(target.nutrient, None);
        assert_eq!(target.level, None);
        assert_eq!(target.label, "heart healthy");
    }

    #[test]
    fn test_parse_placeholder() {
        assert!(HealthTarget::parse("unknown").is_none());
        assert!(HealthTarget::parse("   ").is_none());
    }

    #[test]
    fn test_from_level() {
        let target = HealthTarget::from_level(Nutrient::Cholesterol, "Low");
        assert_eq!(target.level.as_deref(), Some("low"));
        assert_eq!(target.label, "low cholesterol");
    }
}
