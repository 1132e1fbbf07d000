//! Derived insights over an analysis record.
//!
//! Pure helpers used by both adapters; no state, no error paths.

use super::types::RecipeAnalysis;

/// Total recipe time in minutes (prep + cook).
pub fn total_time_minutes(analysis: &RecipeAnalysis) -> u32 {
    analysis.prep_time_minutes + analysis.cook_time_minutes
}

/// Meal category by total time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeCategory {
    QuickMeal,
    RegularMeal,
    SpecialOccasion,
}

impl TimeCategory {
    /// Display label for UI.
    pub fn label(self) -> &'static str {
        match self {
            TimeCategory::QuickMeal => "Quick meal",
            TimeCategory::RegularMeal => "Regular meal",
            TimeCategory::SpecialOccasion => "Special occasion",
        }
    }
}

/// Categorize a recipe by total time.
///
/// Boundaries are inclusive to the lower category: exactly 30 minutes is
/// still a quick meal, exactly 60 still a regular one.
pub fn time_category(analysis: &RecipeAnalysis) -> TimeCategory {
    let total = total_time_minutes(analysis);
    if total <= 30 {
        TimeCategory::QuickMeal
    } else if total <= 60 {
        TimeCategory::RegularMeal
    } else {
        TimeCategory::SpecialOccasion
    }
}

/// Quick health check: score 7 or above counts as healthy.
pub fn is_healthy(analysis: &RecipeAnalysis) -> bool {
    analysis.healthiness_score >= 7
}

/// Generate a shopping list from missing ingredients.
pub fn shopping_list(analysis: &RecipeAnalysis) -> Vec<String> {
    analysis
        .missing_ingredients
        .iter()
        .map(|ingredient| format!("□ {ingredient}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::NutritionalInfo;

    fn analysis_with(prep: u32, cook: u32, score: u32, missing: &[&str]) -> RecipeAnalysis {
        RecipeAnalysis {
            difficulty_level: "Easy".to_string(),
            prep_time_minutes: prep,
            cook_time_minutes: cook,
            servings: 2,
            cuisine_type: "Italian".to_string(),
            dietary_tags: vec![],
            nutrition: NutritionalInfo {
                calories: 100,
                protein_g: 1.0,
                carbs_g: 2.0,
                fat_g: 3.0,
                fiber_g: 0.5,
            },
            missing_ingredients: missing.iter().map(|s| s.to_string()).collect(),
            cooking_tips: vec![],
            healthiness_score: score,
        }
    }

    #[test]
    fn test_time_category_boundaries() {
        // 30 and 60 belong to the lower category
        assert_eq!(
            time_category(&analysis_with(10, 20, 5, &[])),
            TimeCategory::QuickMeal
        );
        assert_eq!(
            time_category(&analysis_with(10, 21, 5, &[])),
            TimeCategory::RegularMeal
        );
        assert_eq!(
            time_category(&analysis_with(30, 30, 5, &[])),
            TimeCategory::RegularMeal
        );
        assert_eq!(
            time_category(&analysis_with(30, 31, 5, &[])),
            TimeCategory::SpecialOccasion
        );
    }

    #[test]
    fn test_time_category_labels() {
        assert_eq!(TimeCategory::QuickMeal.label(), "Quick meal");
        assert_eq!(TimeCategory::RegularMeal.label(), "Regular meal");
        assert_eq!(TimeCategory::SpecialOccasion.label(), "Special occasion");
    }

    #[test]
    fn test_is_healthy_threshold() {
        assert!(!is_healthy(&analysis_with(5, 5, 6, &[])));
        assert!(is_healthy(&analysis_with(5, 5, 7, &[])));
        assert!(is_healthy(&analysis_with(5, 5, 10, &[])));
    }

    #[test]
    fn test_shopping_list() {
        assert_eq!(
            shopping_list(&analysis_with(5, 5, 5, &["eggs", "flour"])),
            vec!["□ eggs".to_string(), "□ flour".to_string()]
        );
    }

    #[test]
    fn test_shopping_list_empty() {
        assert!(shopping_list(&analysis_with(5, 5, 5, &[])).is_empty());
    }
}
