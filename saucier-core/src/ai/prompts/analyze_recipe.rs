//! Recipe analysis prompt.
//!
//! The system prompt doubles as the output contract: the per-field guidance
//! text in the schema block steers what the model puts in each field, so
//! editing it changes model behavior. Treat the text as versioned.

/// Bump when the prompt text changes in a way that affects output.
pub const ANALYZE_RECIPE_PROMPT_VERSION: &str = "v1";

/// System prompt for recipe analysis.
pub const ANALYZE_RECIPE_SYSTEM_PROMPT: &str = r#"You are a professional chef and nutritionist. Analyze recipes and provide detailed, accurate information about cooking difficulty, timing, nutrition, and helpful tips.

Be realistic with your estimates and provide practical advice that home cooks can use. For nutritional information, provide reasonable estimates based on typical ingredient portions.

Respond with ONLY valid JSON matching the exact schema below. No other text.

JSON Schema:
{
  "difficulty_level": "string - Easy, Medium, or Hard",
  "prep_time_minutes": "integer - preparation time in minutes",
  "cook_time_minutes": "integer - cooking time in minutes",
  "servings": "integer - number of servings",
  "cuisine_type": "string - type of cuisine (e.g., Italian, Asian, etc.)",
  "dietary_tags": ["string - diet tags like vegetarian, gluten-free, etc."],
  "nutrition": {
    "calories": "integer - estimated calories per serving",
    "protein_g": "number - protein content in grams",
    "carbs_g": "number - carbohydrate content in grams",
    "fat_g": "number - fat content in grams",
    "fiber_g": "number - fiber content in grams"
  },
  "missing_ingredients": ["string - common ingredients that might be missing"],
  "cooking_tips": ["string - helpful cooking tips for this recipe"],
  "healthiness_score": "integer - health score from 1-10 (10 being healthiest)"
}"#;

/// Render the user message with the recipe text.
pub fn render_analyze_recipe_prompt(recipe_text: &str) -> String {
    format!("Analyze this recipe: {recipe_text}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_prompt_carries_contract() {
        assert!(ANALYZE_RECIPE_SYSTEM_PROMPT.contains("professional chef and nutritionist"));
        assert!(ANALYZE_RECIPE_SYSTEM_PROMPT.contains("JSON Schema"));
        assert!(ANALYZE_RECIPE_SYSTEM_PROMPT.contains("Easy, Medium, or Hard"));
        assert!(ANALYZE_RECIPE_SYSTEM_PROMPT.contains("healthiness_score"));
        assert!(ANALYZE_RECIPE_SYSTEM_PROMPT.contains("estimated calories per serving"));
    }

    #[test]
    fn test_render_user_prompt() {
        let prompt = render_analyze_recipe_prompt("Spaghetti Carbonara\n400g spaghetti");
        assert!(prompt.starts_with("Analyze this recipe: "));
        assert!(prompt.contains("Spaghetti Carbonara"));
    }
}
