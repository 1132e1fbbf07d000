//! Fake AI client for testing.
//!
//! This client returns deterministic responses based on prompt matching,
//! allowing tests to run without network access or API costs.

use super::client::{AiClient, AiError};
use super::types::{ChatRequest, ChatResponse, Usage};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

/// A fake AI client for testing.
///
/// Responses are matched by checking if any message content contains a
/// registered substring. If no match is found, returns a default response
/// or an error.
#[derive(Debug)]
pub struct FakeClient {
    /// Map of prompt substring -> response content
    responses: RwLock<HashMap<String, String>>,
    /// Default response if no match found
    default_response: Option<String>,
    /// If set, every call fails with this message
    error: Option<String>,
}

impl FakeClient {
    /// Create a new FakeClient with no registered responses.
    pub fn new() -> Self {
        Self {
            responses: RwLock::new(HashMap::new()),
            default_response: None,
            error: None,
        }
    }

    /// Create a FakeClient that returns a specific response for prompts containing a substring.
    pub fn with_response(prompt_contains: &str, response: &str) -> Self {
        let mut client = Self::new();
        client.add_response(prompt_contains, response);
        client
    }

    /// Create a FakeClient whose every call fails with the given message.
    pub fn with_error(message: &str) -> Self {
        Self {
            error: Some(message.to_string()),
            ..Self::new()
        }
    }

    /// Add a response for prompts containing a specific substring.
    pub fn add_response(&mut self, prompt_contains: &str, response: &str) {
        self.responses
            .write()
            .unwrap()
            .insert(prompt_contains.to_string(), response.to_string());
    }

    /// Set the default response when no pattern matches.
    pub fn with_default_response(mut self, response: &str) -> Self {
        self.default_response = Some(response.to_string());
        self
    }
}

impl Default for FakeClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AiClient for FakeClient {
    async fn complete(&self, request: ChatRequest) -> Result<ChatResponse, AiError> {
        if let Some(message) = &self.error {
            return Err(AiError::Api(message.clone()));
        }

        let prompt = request
            .messages
            .iter()
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        let responses = self.responses.read().unwrap();

        // Find first matching pattern (case-insensitive)
        let prompt_lower = prompt.to_lowercase();
        for (pattern, response) in responses.iter() {
            if prompt_lower.contains(&pattern.to_lowercase()) {
                return Ok(ChatResponse {
                    content: response.clone(),
                    usage: Usage::default(),
                });
            }
        }

        // Return default or error
        match &self.default_response {
            Some(response) => Ok(ChatResponse {
                content: response.clone(),
                usage: Usage::default(),
            }),
            None => Err(AiError::Api(format!(
                "FakeClient: No response configured for prompt (first 100 chars): {}",
                &prompt[..prompt.len().min(100)]
            ))),
        }
    }
}
