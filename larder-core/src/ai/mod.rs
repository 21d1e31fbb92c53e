//! Generative model integration.
//!
//! This module provides a trait-based abstraction over generative
//! text/vision backends, with a real Gemini client and a fake client for
//! testing.

mod config;
mod fake;
mod gemini;
pub mod prompts;
mod schema;
mod types;

pub use config::{AiConfig, ConfigError};
pub use fake::FakeClient;
pub use gemini::GeminiClient;
pub use schema::{recipe_list_schema, recipe_schema};
pub use types::{GenerateReply, GenerateRequest, Part, Usage};

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Error type for generative client operations.
#[derive(Debug, Error)]
pub enum GenerativeError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("API returned error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Rate limited, retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("Client not configured: {0}")]
    NotConfigured(String),
}

/// Trait for generative model clients.
///
/// Implementations should be stateless and thread-safe. The client is
/// responsible for talking to the backend and returning whatever text the
/// model produced; interpreting that text is the caller's problem.
#[async_trait]
pub trait GenerativeClient: Send + Sync + fmt::Debug {
    /// Send a request to the model and get its reply.
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateReply, GenerativeError>;

    /// Get the client name (e.g., "gemini", "fake").
    fn client_name(&self) -> &'static str;

    /// Get the model name used for text requests.
    fn model_name(&self) -> &str;
}

/// Pick a client based on environment variables.
///
/// - `LARDER_AI_CLIENT`: "gemini" (default) | "fake"
/// - `GEMINI_API_KEY`: API key, required for the gemini client
pub fn client_from_env() -> Result<Box<dyn GenerativeClient>, GenerativeError> {
    let client = std::env::var("LARDER_AI_CLIENT").unwrap_or_else(|_| "gemini".to_string());

    match client.as_str() {
        "fake" => Ok(Box::new(FakeClient::default())),
        "gemini" => {
            let config =
                AiConfig::from_env().map_err(|e| GenerativeError::NotConfigured(e.to_string()))?;
            Ok(Box::new(GeminiClient::new(config)))
        }
        other => Err(GenerativeError::NotConfigured(format!(
            "Unknown client: {}",
            other
        ))),
    }
}
