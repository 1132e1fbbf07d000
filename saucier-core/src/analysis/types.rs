//! Recipe analysis value records.
//!
//! Both records are deserialized once from the model's JSON reply and never
//! mutated. Every field is required: a reply missing one fails
//! deserialization instead of silently defaulting.

use serde::{Deserialize, Serialize};

/// Nutritional information per serving.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct NutritionalInfo {
    /// Estimated calories per serving.
    pub calories: u32,
    /// Protein content in grams.
    pub protein_g: f64,
    /// Carbohydrate content in grams.
    pub carbs_g: f64,
    /// Fat content in grams.
    pub fat_g: f64,
    /// Fiber content in grams.
    pub fiber_g: f64,
}

/// Complete recipe analysis with structured data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RecipeAnalysis {
    /// "Easy", "Medium", or "Hard". The prompt constrains the value; the
    /// type does not.
    pub difficulty_level: String,
    /// Preparation time in minutes.
    pub prep_time_minutes: u32,
    /// Cooking time in minutes.
    pub cook_time_minutes: u32,
    /// Number of servings.
    pub servings: u32,
    /// Type of cuisine (e.g., "Italian", "Asian").
    pub cuisine_type: String,
    /// Diet tags like "vegetarian", "gluten-free". Model order preserved.
    pub dietary_tags: Vec<String>,
    /// Per-serving nutritional estimate.
    pub nutrition: NutritionalInfo,
    /// Common ingredients that might be missing.
    pub missing_ingredients: Vec<String>,
    /// Helpful cooking tips for this recipe.
    pub cooking_tips: Vec<String>,
    /// Health score from 1-10 (10 being healthiest). Range intended, not
    /// enforced beyond the type.
    pub healthiness_score: u32,
}
