//! Remote Analysis Client
//!
//! The two public operations of the system, and the sanitize → parse →
//! validate pipeline that turns raw model text into typed results.
//!
//! The two operations deliberately fail differently:
//!
//! - `fetch_trending_tokens` never raises. Missing credential, transport
//!   failure, unparseable output - every problem degrades to the static
//!   fallback list, logged but invisible to callers.
//! - `analyze_token` never fabricates. Any failure propagates as a
//!   classified [`AnalystError`] so the dashboard shows an error state
//!   instead of invented trade signals.

use std::sync::Arc;

use insight_core::{extract_json, GenerationRequest, GenerativeProvider};

use crate::error::{AnalystError, Result};
use crate::fallback::fallback_trending;
use crate::model::{FullAnalysisResponse, TrendingToken};
use crate::prompt::{analysis_prompt, TRENDING_PROMPT};

/// Result of a trending fetch.
///
/// `fallback` is true when the tokens came from the static fallback list
/// rather than a live model response, so callers can label the data.
#[derive(Clone, Debug)]
pub struct TrendingList {
    pub tokens: Vec<TrendingToken>,
    pub fallback: bool,
}

/// Client for AI-generated token analysis.
///
/// Constructed explicitly and injected into consumers; there is no ambient
/// global instance. Built without a provider it serves fallback trending
/// data and refuses analysis requests.
pub struct AnalysisClient {
    provider: Option<Arc<dyn GenerativeProvider>>,
}

impl AnalysisClient {
    /// Client backed by a generative provider
    pub fn new(provider: Arc<dyn GenerativeProvider>) -> Self {
        Self {
            provider: Some(provider),
        }
    }

    /// Client with no credential configured
    pub fn unconfigured() -> Self {
        Self { provider: None }
    }

    /// Whether a provider is wired in
    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    /// Whether the backing provider is reachable
    pub async fn health_check(&self) -> bool {
        match &self.provider {
            Some(provider) => provider.health_check().await.unwrap_or(false),
            None => false,
        }
    }

    /// Fetch the trending-token list. Infallible by contract.
    pub async fn fetch_trending_tokens(&self) -> TrendingList {
        let Some(provider) = &self.provider else {
            tracing::warn!("no provider configured; serving fallback trending list");
            return TrendingList {
                tokens: fallback_trending(),
                fallback: true,
            };
        };

        match self.request_trending(provider.as_ref()).await {
            Ok(tokens) if !tokens.is_empty() => TrendingList {
                tokens,
                fallback: false,
            },
            Ok(_) => {
                tracing::warn!("model returned an empty trending list; serving fallback");
                TrendingList {
                    tokens: fallback_trending(),
                    fallback: true,
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "trending fetch failed; serving fallback");
                TrendingList {
                    tokens: fallback_trending(),
                    fallback: true,
                }
            }
        }
    }

    async fn request_trending(
        &self,
        provider: &dyn GenerativeProvider,
    ) -> Result<Vec<TrendingToken>> {
        let request = GenerationRequest::new(TRENDING_PROMPT).with_search_grounding();
        let raw = provider.generate(&request).await?;

        let payload = extract_json(&raw);
        let tokens: Vec<TrendingToken> = serde_json::from_str(&payload)
            .map_err(|e| AnalystError::MalformedResponse(format!("trending list: {}", e)))?;

        Ok(tokens)
    }

    /// Run the full deep analysis for one symbol.
    ///
    /// The symbol must be non-empty; case-normalization is the caller's
    /// responsibility.
    pub async fn analyze_token(&self, symbol: &str) -> Result<FullAnalysisResponse> {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return Err(AnalystError::InvalidSymbol(symbol.into()));
        }

        let provider = self
            .provider
            .as_ref()
            .ok_or_else(|| AnalystError::Config("no generative provider configured".into()))?;

        tracing::info!(symbol = %symbol, provider = provider.name(), "requesting analysis");

        let request = GenerationRequest::new(analysis_prompt(symbol)).with_search_grounding();
        let raw = provider.generate(&request).await?;

        let payload = extract_json(&raw);
        let analysis: FullAnalysisResponse = serde_json::from_str(&payload)
            .map_err(|e| AnalystError::MalformedResponse(format!("analysis object: {}", e)))?;

        analysis.validate()?;

        Ok(analysis)
    }
}
