//! AI configuration from environment variables.

use std::env;
use thiserror::Error;

/// Default Gemini API base URL.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model for text requests.
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Default model for requests that carry an image.
pub const DEFAULT_VISION_MODEL: &str = "gemini-2.5-flash-image";

/// Default delay between requests in milliseconds. Zero disables it.
pub const DEFAULT_RATE_LIMIT_MS: u64 = 0;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
}

/// Gemini client configuration.
#[derive(Debug, Clone)]
pub struct AiConfig {
    /// API key from Google AI Studio.
    pub api_key: String,
    /// Model for text requests.
    pub model: String,
    /// Model for requests carrying an inline image.
    pub vision_model: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Milliseconds to wait between requests.
    pub rate_limit_ms: u64,
}

impl AiConfig {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `GEMINI_API_KEY`: API key for the Gemini API
    ///
    /// Optional:
    /// - `LARDER_AI_MODEL`: Text model name (default: "gemini-3-flash-preview")
    /// - `LARDER_AI_VISION_MODEL`: Image model name (default: "gemini-2.5-flash-image")
    /// - `LARDER_AI_BASE_URL`: API base URL
    /// - `LARDER_AI_RATE_LIMIT_MS`: Delay between requests in ms (default: 0)
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| ConfigError::MissingEnvVar("GEMINI_API_KEY".to_string()))?;

        let model = env::var("LARDER_AI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let vision_model = env::var("LARDER_AI_VISION_MODEL")
            .unwrap_or_else(|_| DEFAULT_VISION_MODEL.to_string());

        let base_url =
            env::var("LARDER_AI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let rate_limit_ms = env::var("LARDER_AI_RATE_LIMIT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_RATE_LIMIT_MS);

        Ok(Self {
            api_key,
            model,
            vision_model,
            base_url,
            rate_limit_ms,
        })
    }
}
