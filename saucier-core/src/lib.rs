pub mod ai;
pub mod analysis;

pub use ai::{AiClient, AiConfig, AiError, ConfigError, FakeClient, OpenAiClient};
pub use analysis::{
    format_analysis, is_healthy, shopping_list, time_category, total_time_minutes, AnalysisError,
    NutritionalInfo, RecipeAnalysis, RecipeAnalyzer, TimeCategory,
};
