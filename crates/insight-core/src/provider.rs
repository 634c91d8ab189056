//! Generative Provider Strategy Pattern
//!
//! Defines a common interface for generative-language backends (Gemini,
//! OpenAI, local models, mocks) so the analysis client can work with any of
//! them without code changes. The contract is deliberately narrow: a prompt
//! goes in, a text blob comes out. Interpretation of that blob is the
//! caller's problem.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use insight_core::provider::{GenerativeProvider, GenerationRequest};
//!
//! let request = GenerationRequest::new("Summarize BTC price action today.")
//!     .with_search_grounding();
//! let text = provider.generate(&request).await?;
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Configuration for a single generation call
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Model identifier override; `None` uses the provider's configured
    /// default
    #[serde(default)]
    pub model: Option<String>,

    /// Temperature for sampling (0.0 = deterministic, 1.0 = creative)
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Maximum tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

fn default_temperature() -> f32 {
    0.7
}
fn default_max_tokens() -> u32 {
    8192
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            model: None,
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }
}

/// A single generation request
///
/// `search_grounding` asks the backend to augment generation with live web
/// search. Backends that cannot ground simply ignore the flag.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// The full prompt text
    pub prompt: String,

    /// Whether to enable search-grounded generation
    #[serde(default)]
    pub search_grounding: bool,

    /// Generation options
    #[serde(default)]
    pub options: GenerationOptions,
}

impl GenerationRequest {
    /// Create a request with default options and no grounding
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            search_grounding: false,
            options: GenerationOptions::default(),
        }
    }

    /// Enable search-grounded generation
    pub fn with_search_grounding(mut self) -> Self {
        self.search_grounding = true;
        self
    }

    /// Override the model for this request
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.options.model = Some(model.into());
        self
    }

    /// Override the sampling temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.options.temperature = temperature;
        self
    }
}

/// Strategy trait for generative-language providers
///
/// Implement this trait to add support for new backends. The analysis
/// pipeline works exclusively through this interface.
#[async_trait]
pub trait GenerativeProvider: Send + Sync {
    /// Generate text from a prompt
    ///
    /// Returns the raw model output, which may contain markdown fences or
    /// conversational wrapper text around any JSON payload.
    async fn generate(&self, request: &GenerationRequest) -> Result<String>;

    /// Check if the provider is reachable and configured correctly
    async fn health_check(&self) -> Result<bool>;

    /// Provider name (e.g., "Gemini")
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_options_defaults() {
        let opts = GenerationOptions::default();
        assert_eq!(opts.temperature, 0.7);
        assert!(opts.model.is_none());
    }

    #[test]
    fn test_request_builder() {
        let request = GenerationRequest::new("hello")
            .with_search_grounding()
            .with_model("gemini-2.0-flash")
            .with_temperature(0.2);

        assert!(request.search_grounding);
        assert_eq!(request.options.model.as_deref(), Some("gemini-2.0-flash"));
        assert_eq!(request.options.temperature, 0.2);
    }
}
