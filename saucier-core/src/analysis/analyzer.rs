//! Recipe analyzer: one recipe text in, one validated analysis out.

use std::sync::Arc;

use thiserror::Error;

use crate::ai::prompts::analyze_recipe::{
    render_analyze_recipe_prompt, ANALYZE_RECIPE_PROMPT_VERSION, ANALYZE_RECIPE_SYSTEM_PROMPT,
};
use crate::ai::{AiClient, AiError, ChatMessage, ChatRequest, OpenAiClient};

use super::types::RecipeAnalysis;

/// Error type for recipe analysis.
///
/// A single kind on purpose: transport failures, API errors, and
/// non-conforming replies all surface as one failure carrying the
/// underlying cause's description. The caller resubmits or reports; it
/// never branches on the cause.
#[derive(Debug, Error)]
#[error("Recipe analysis failed: {0}")]
pub struct AnalysisError(String);

impl AnalysisError {
    fn new(cause: impl std::fmt::Display) -> Self {
        Self(cause.to_string())
    }
}

impl From<AiError> for AnalysisError {
    fn from(e: AiError) -> Self {
        Self::new(e)
    }
}

/// Analyzes recipes using an injected AI client.
///
/// Holds only the client reference; cheap to construct and stateless
/// between calls.
pub struct RecipeAnalyzer {
    client: Arc<dyn AiClient>,
}

impl RecipeAnalyzer {
    /// Create an analyzer with the given AI client.
    pub fn new(client: Arc<dyn AiClient>) -> Self {
        Self { client }
    }

    /// Create an analyzer backed by an OpenAI-compatible client configured
    /// from environment variables. Fails if `OPENAI_API_KEY` is not set.
    pub fn from_env() -> Result<Self, AiError> {
        Ok(Self::new(Arc::new(OpenAiClient::from_env()?)))
    }

    /// Analyze a recipe and return structured data.
    ///
    /// The text is forwarded as-is; no length bounds are imposed, and empty
    /// input is accepted (the model decides what to make of it).
    pub async fn analyze(&self, recipe_text: &str) -> Result<RecipeAnalysis, AnalysisError> {
        let request = ChatRequest {
            messages: vec![
                ChatMessage::system(ANALYZE_RECIPE_SYSTEM_PROMPT),
                ChatMessage::user(render_analyze_recipe_prompt(recipe_text)),
            ],
            json_response: true,
            max_tokens: Some(1024),
            temperature: Some(0.3),
        };

        let response = self.client.complete(request).await?;

        let analysis: RecipeAnalysis =
            serde_json::from_str(response.content.trim()).map_err(|e| {
                AnalysisError::new(format!("response did not match the expected schema: {}", e))
            })?;

        tracing::debug!(
            prompt_version = ANALYZE_RECIPE_PROMPT_VERSION,
            total_tokens = response.usage.total_tokens,
            "Recipe analysis complete"
        );

        Ok(analysis)
    }
}
