//! Human-readable report rendering.

use super::types::RecipeAnalysis;

/// Format an analysis for display.
///
/// Pure and total: identical records render to identical output, so the
/// result doubles as a golden fixture. Section order and field labels are
/// part of the output contract.
pub fn format_analysis(analysis: &RecipeAnalysis) -> String {
    let tips = analysis
        .cooking_tips
        .iter()
        .map(|tip| format!("• {tip}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"
🍳 RECIPE ANALYSIS
==================

📊 Basic Info:
• Difficulty: {difficulty}
• Prep Time: {prep} minutes
• Cook Time: {cook} minutes
• Servings: {servings}
• Cuisine: {cuisine}
• Health Score: {score}/10

🏷️ Dietary Tags: {tags}

📈 Nutrition (per serving):
• Calories: {calories}
• Protein: {protein}g
• Carbs: {carbs}g
• Fat: {fat}g
• Fiber: {fiber}g

❓ Might be missing: {missing}

💡 Cooking Tips:
{tips}
"#,
        difficulty = analysis.difficulty_level,
        prep = analysis.prep_time_minutes,
        cook = analysis.cook_time_minutes,
        servings = analysis.servings,
        cuisine = analysis.cuisine_type,
        score = analysis.healthiness_score,
        tags = analysis.dietary_tags.join(", "),
        calories = analysis.nutrition.calories,
        protein = analysis.nutrition.protein_g,
        carbs = analysis.nutrition.carbs_g,
        fat = analysis.nutrition.fat_g,
        fiber = analysis.nutrition.fiber_g,
        missing = analysis.missing_ingredients.join(", "),
        tips = tips,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::NutritionalInfo;

    fn sample_analysis() -> RecipeAnalysis {
        RecipeAnalysis {
            difficulty_level: "Medium".to_string(),
            prep_time_minutes: 15,
            cook_time_minutes: 20,
            servings: 4,
            cuisine_type: "Italian".to_string(),
            dietary_tags: vec!["high-protein".to_string(), "nut-free".to_string()],
            nutrition: NutritionalInfo {
                calories: 650,
                protein_g: 30.0,
                carbs_g: 70.0,
                fat_g: 25.0,
                fiber_g: 3.0,
            },
            missing_ingredients: vec!["eggs".to_string(), "flour".to_string()],
            cooking_tips: vec![
                "Reserve some pasta water".to_string(),
                "Serve immediately".to_string(),
            ],
            healthiness_score: 5,
        }
    }

    #[test]
    fn test_format_contains_labels_and_values() {
        let report = format_analysis(&sample_analysis());

        assert!(report.contains("🍳 RECIPE ANALYSIS"));
        assert!(report.contains("Difficulty: Medium"));
        assert!(report.contains("Prep Time: 15 minutes"));
        assert!(report.contains("Cook Time: 20 minutes"));
        assert!(report.contains("Servings: 4"));
        assert!(report.contains("Cuisine: Italian"));
        assert!(report.contains("Health Score: 5/10"));
        assert!(report.contains("650"));
        assert!(report.contains("Dietary Tags: high-protein, nut-free"));
        assert!(report.contains("Might be missing: eggs, flour"));
    }

    #[test]
    fn test_format_tips_one_bullet_per_line() {
        let report = format_analysis(&sample_analysis());

        assert!(report.contains("• Reserve some pasta water\n• Serve immediately"));
    }

    #[test]
    fn test_format_is_deterministic() {
        let analysis = sample_analysis();
        assert_eq!(format_analysis(&analysis), format_analysis(&analysis));
    }

    #[test]
    fn test_format_empty_lists() {
        let mut analysis = sample_analysis();
        analysis.dietary_tags.clear();
        analysis.missing_ingredients.clear();
        analysis.cooking_tips.clear();

        let report = format_analysis(&analysis);
        assert!(report.contains("Dietary Tags: \n"));
        assert!(report.contains("Might be missing: \n"));
    }
}
