//! Gemini Provider
//!
//! Implementation of `GenerativeProvider` for the Google Generative Language
//! REST API (`models/{model}:generateContent`). Supports search-grounded
//! generation via the `google_search` tool.

use std::time::Duration;

use async_trait::async_trait;
use insight_core::{
    error::{CoreError, Result},
    provider::{GenerationRequest, GenerativeProvider},
};
use serde::{Deserialize, Serialize};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Gemini provider configuration
#[derive(Clone, Debug)]
pub struct GeminiConfig {
    /// API key for the Generative Language API
    pub api_key: String,

    /// Default model identifier
    pub model: String,

    /// API base URL
    pub base_url: String,

    /// Request timeout in seconds. No automatic retries are performed;
    /// a timed-out call surfaces immediately.
    pub timeout_secs: u64,
}

impl GeminiConfig {
    /// Read configuration from environment variables.
    ///
    /// `GEMINI_API_KEY` is required; `GEMINI_MODEL` and
    /// `GEMINI_TIMEOUT_SECS` are optional overrides. A missing key is a
    /// recoverable condition for callers (fall back or surface an error),
    /// never a panic.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| CoreError::Config("GEMINI_API_KEY not set".into()))?;

        let model = std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into());
        let timeout_secs = std::env::var("GEMINI_TIMEOUT_SECS")
            .ok()
            .and_then(|t| t.parse().ok())
            .unwrap_or(30);

        Ok(Self {
            api_key,
            model,
            base_url: DEFAULT_BASE_URL.into(),
            timeout_secs,
        })
    }
}

// ============================================================================
// Wire Types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<Vec<ToolSpec>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

/// The REST API expects snake_case here, unlike the rest of the payload.
#[derive(Debug, Serialize)]
struct ToolSpec {
    google_search: GoogleSearch,
}

#[derive(Debug, Serialize)]
struct GoogleSearch {}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

// ============================================================================
// Provider
// ============================================================================

/// Gemini generative provider
pub struct GeminiProvider {
    client: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiProvider {
    /// Create from configuration
    pub fn from_config(config: GeminiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| CoreError::Config(format!("HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_config(GeminiConfig::from_env()?)
    }

    fn generate_url(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.config.base_url, model)
    }

    fn build_request(&self, request: &GenerationRequest) -> GenerateContentRequest {
        let tools = request
            .search_grounding
            .then(|| vec![ToolSpec { google_search: GoogleSearch {} }]);

        GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: request.prompt.clone() }],
            }],
            tools,
            generation_config: GenerationConfig {
                temperature: request.options.temperature,
                max_output_tokens: request.options.max_tokens,
            },
        }
    }

    /// Flatten the first candidate's parts into one text blob.
    ///
    /// Grounded responses can split their answer across several parts.
    fn extract_text(response: GenerateContentResponse) -> Result<String> {
        let candidate = response
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| CoreError::MalformedPayload("no candidates in response".into()))?;

        let parts = candidate
            .content
            .ok_or_else(|| CoreError::MalformedPayload("candidate has no content".into()))?
            .parts;

        let text: String = parts.into_iter().map(|p| p.text).collect();
        if text.is_empty() {
            return Err(CoreError::MalformedPayload("candidate text is empty".into()));
        }

        Ok(text)
    }

    fn map_transport_error(err: reqwest::Error) -> CoreError {
        if err.is_timeout() || err.is_connect() {
            CoreError::ProviderUnavailable(err.to_string())
        } else {
            CoreError::Provider(err.to_string())
        }
    }
}

#[async_trait]
impl GenerativeProvider for GeminiProvider {
    async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        let model = request
            .options
            .model
            .as_deref()
            .unwrap_or(&self.config.model);

        let body = self.build_request(request);

        tracing::debug!(
            model = %model,
            grounded = request.search_grounding,
            prompt_len = request.prompt.len(),
            "sending generateContent request"
        );

        let response = self
            .client
            .post(self.generate_url(model))
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(Self::map_transport_error)?;

        match response.status() {
            reqwest::StatusCode::OK => {
                let payload: GenerateContentResponse = response
                    .json()
                    .await
                    .map_err(|e| CoreError::MalformedPayload(e.to_string()))?;
                Self::extract_text(payload)
            }
            reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => {
                Err(CoreError::Auth("API key rejected".into()))
            }
            reqwest::StatusCode::TOO_MANY_REQUESTS => {
                Err(CoreError::RateLimited("generateContent quota exceeded".into()))
            }
            status => {
                let text = response.text().await.unwrap_or_default();
                Err(CoreError::Provider(format!("HTTP {}: {}", status, text)))
            }
        }
    }

    async fn health_check(&self) -> Result<bool> {
        let url = format!("{}/models", self.config.base_url);
        match self
            .client
            .get(url)
            .header("x-goog-api-key", &self.config.api_key)
            .send()
            .await
        {
            Ok(response) => Ok(response.status().is_success()),
            Err(e) => {
                tracing::warn!("Gemini health check failed: {}", e);
                Ok(false)
            }
        }
    }

    fn name(&self) -> &str {
        "Gemini"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insight_core::GenerationRequest;

    fn test_config() -> GeminiConfig {
        GeminiConfig {
            api_key: "test-key".into(),
            model: DEFAULT_MODEL.into(),
            base_url: DEFAULT_BASE_URL.into(),
            timeout_secs: 30,
        }
    }

    #[test]
    fn test_request_wire_format() {
        let provider = GeminiProvider::from_config(test_config()).unwrap();
        let request = GenerationRequest::new("what is trending?").with_search_grounding();

        let body = provider.build_request(&request);
        let json = serde_json::to_string(&body).unwrap();

        assert!(json.contains("\"generationConfig\""));
        assert!(json.contains("\"maxOutputTokens\""));
        assert!(json.contains("\"google_search\":{}"));
        assert!(json.contains("what is trending?"));
    }

    #[test]
    fn test_grounding_flag_controls_tools() {
        let provider = GeminiProvider::from_config(test_config()).unwrap();
        let request = GenerationRequest::new("plain prompt");

        let body = provider.build_request(&request);
        let json = serde_json::to_string(&body).unwrap();

        assert!(!json.contains("google_search"));
    }

    #[test]
    fn test_extract_text_joins_parts() {
        let response = GenerateContentResponse {
            candidates: vec![Candidate {
                content: Some(Content {
                    parts: vec![
                        Part { text: "{\"a\":".into() },
                        Part { text: "1}".into() },
                    ],
                }),
            }],
        };

        let text = GeminiProvider::extract_text(response).unwrap();
        assert_eq!(text, "{\"a\":1}");
    }

    #[test]
    fn test_extract_text_rejects_empty_response() {
        let response = GenerateContentResponse { candidates: vec![] };
        assert!(GeminiProvider::extract_text(response).is_err());
    }

    #[test]
    fn test_generate_url() {
        let provider = GeminiProvider::from_config(test_config()).unwrap();
        assert_eq!(
            provider.generate_url("gemini-2.5-flash"),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }
}
