//! AI client module for LLM integration.
//!
//! This module provides:
//! - `AiClient` trait for abstracting AI providers
//! - `OpenAiClient` implementation for OpenAI-compatible APIs
//! - Configuration via environment variables
//! - `FakeClient` for testing without network access
//! - Prompt templates for recipe analysis
//!
//! # Configuration
//!
//! Set these environment variables:
//!
//! - `OPENAI_API_KEY` (required): Your API key
//! - `SAUCIER_AI_MODEL` (optional): Model name, e.g., "gpt-4o-mini"
//! - `SAUCIER_AI_BASE_URL` (optional): API base URL for compatible providers
//!
//! # Example
//!
//! ```ignore
//! use saucier_core::ai::{AiClient, ChatMessage, ChatRequest, OpenAiClient};
//!
//! let client = OpenAiClient::from_env()?;
//!
//! let request = ChatRequest {
//!     messages: vec![ChatMessage::user("Hello!")],
//!     ..Default::default()
//! };
//!
//! let response = client.complete(request).await?;
//! println!("Response: {}", response.content);
//! ```

mod client;
mod config;
mod fake;
pub mod prompts;
mod types;

pub use client::{AiClient, AiError, OpenAiClient};
pub use config::{AiConfig, ConfigError, DEFAULT_MODEL};
pub use fake::FakeClient;
pub use types::{ChatMessage, ChatRequest, ChatResponse, Role, Usage};
