//! AI prompt templates.

pub mod analyze_recipe;

pub use analyze_recipe::render_analyze_recipe_prompt;
