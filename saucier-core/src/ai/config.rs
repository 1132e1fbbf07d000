//! AI configuration from environment variables.

use std::env;
use thiserror::Error;

/// Default model to use.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
}

/// AI client configuration.
#[derive(Debug, Clone)]
pub struct AiConfig {
    /// API key for the model service.
    pub api_key: String,
    /// Model name (e.g., "gpt-4o-mini").
    pub model: String,
    /// Base URL override for OpenAI-compatible providers. None uses the
    /// client library's default endpoint.
    pub base_url: Option<String>,
}

impl AiConfig {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `OPENAI_API_KEY`: API key for the model service
    ///
    /// Optional:
    /// - `SAUCIER_AI_MODEL`: Model name (default: "gpt-4o-mini")
    /// - `SAUCIER_AI_BASE_URL`: API base URL for compatible providers
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var("OPENAI_API_KEY")
            .map_err(|_| ConfigError::MissingEnvVar("OPENAI_API_KEY".to_string()))?;

        let model = env::var("SAUCIER_AI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let base_url = env::var("SAUCIER_AI_BASE_URL").ok();

        Ok(Self {
            api_key,
            model,
            base_url,
        })
    }
}
