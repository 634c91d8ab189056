//! HTTP Handlers

use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use token_analyst::{AnalystError, CommittedAnalysis, FullAnalysisResponse, TrendingToken};

use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub provider_configured: bool,
    pub provider_reachable: bool,
    pub timestamp: DateTime<Utc>,
}

#[derive(Serialize)]
pub struct TrendingResponse {
    pub tokens: Vec<TrendingToken>,
    /// True when the tokens are the static placeholder list
    pub fallback: bool,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub symbol: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub request_id: String,
    pub analysis: FullAnalysisResponse,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

fn error_response(err: &AnalystError) -> (StatusCode, Json<ErrorResponse>) {
    let (status, code) = match err {
        AnalystError::InvalidSymbol(_) => (StatusCode::UNPROCESSABLE_ENTITY, "INVALID_SYMBOL"),
        AnalystError::Config(_) => (StatusCode::SERVICE_UNAVAILABLE, "CONFIG_MISSING"),
        AnalystError::Transport(_) => (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR"),
        AnalystError::RateLimited(_) => (StatusCode::TOO_MANY_REQUESTS, "RATE_LIMITED"),
        AnalystError::MalformedResponse(_) => (StatusCode::BAD_GATEWAY, "MALFORMED_RESPONSE"),
    };

    (
        status,
        Json(ErrorResponse {
            error: err.user_message(),
            code: code.into(),
        }),
    )
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let provider_reachable = state.client.health_check().await;

    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        provider_configured: state.client.is_configured(),
        provider_reachable,
        timestamp: Utc::now(),
    })
}

/// Trending-token list. Always 200; failures degrade to placeholder data.
pub async fn trending_handler(State(state): State<AppState>) -> Json<TrendingResponse> {
    let trending = state.client.fetch_trending_tokens().await;

    Json(TrendingResponse {
        tokens: trending.tokens,
        fallback: trending.fallback,
    })
}

/// Run a deep analysis for one symbol.
///
/// Failures are surfaced to the caller; no fabricated analysis data is ever
/// returned. The result is committed through the generation guard so a slow
/// response can't clobber a newer request's state.
pub async fn analyze_handler(
    State(state): State<AppState>,
    Json(payload): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, (StatusCode, Json<ErrorResponse>)> {
    // Uppercasing is the caller's job per the client contract, and the
    // HTTP layer is that caller.
    let symbol = payload.symbol.trim().to_uppercase();

    let ticket = state.analysis_slot.begin();

    let analysis = state.client.analyze_token(&symbol).await.map_err(|e| {
        tracing::error!(symbol = %symbol, error = %e, "analysis failed");
        error_response(&e)
    })?;

    if !state.analysis_slot.commit(ticket, analysis.clone()) {
        tracing::info!(symbol = %symbol, "analysis superseded by a newer request");
    }

    Ok(Json(AnalyzeResponse {
        request_id: uuid::Uuid::new_v4().to_string(),
        analysis,
    }))
}

/// Most recently committed analysis
pub async fn latest_analysis_handler(
    State(state): State<AppState>,
) -> Result<Json<CommittedAnalysis>, (StatusCode, Json<ErrorResponse>)> {
    state.analysis_slot.latest().map(Json).ok_or_else(|| {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "No analysis has been run yet.".into(),
                code: "NO_ANALYSIS".into(),
            }),
        )
    })
}
