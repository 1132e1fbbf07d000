//! Recipe analysis.
//!
//! The analyzer sends recipe text to the model with a fixed prompt, validates
//! the JSON reply into a [`RecipeAnalysis`], and the rest of the module turns
//! that record into displayable output: a formatted report and a handful of
//! derived insights.

mod analyzer;
mod format;
mod insights;
mod types;

pub use analyzer::{AnalysisError, RecipeAnalyzer};
pub use format::format_analysis;
pub use insights::{is_healthy, shopping_list, time_category, total_time_minutes, TimeCategory};
pub use types::{NutritionalInfo, RecipeAnalysis};
