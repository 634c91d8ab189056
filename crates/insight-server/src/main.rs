//! token-insight HTTP Server
//!
//! Axum-based server exposing the AI analysis API consumed by the browser
//! dashboard: a trending-token list and a per-symbol deep analysis, both
//! generated by a remote model. The dashboard itself is static content
//! served from `static/`.

mod handlers;
mod state;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use insight_core::GenerativeProvider;
use insight_runtime::GeminiProvider;
use token_analyst::{AnalysisClient, AnalysisSlot};

use crate::handlers::{analyze_handler, health_check, latest_analysis_handler, trending_handler};
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();

    // Initialize the generative provider. A missing key is recoverable:
    // trending degrades to placeholder data, analysis surfaces an error.
    let client = match GeminiProvider::from_env() {
        Ok(provider) => {
            let provider: Arc<dyn GenerativeProvider> = Arc::new(provider);
            match provider.health_check().await {
                Ok(true) => tracing::info!("✓ Connected to Gemini"),
                Ok(false) | Err(_) => {
                    tracing::warn!("⚠ Gemini endpoint not reachable - analysis will fail");
                }
            }
            AnalysisClient::new(provider)
        }
        Err(e) => {
            tracing::warn!("⚠ Gemini not configured - serving fallback trending data");
            tracing::warn!("  {} (set GEMINI_API_KEY in .env)", e);
            AnalysisClient::unconfigured()
        }
    };

    // Build application state
    let state = AppState {
        client: Arc::new(client),
        analysis_slot: Arc::new(AnalysisSlot::new()),
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = Router::new()
        // Health & info
        .route("/health", get(health_check))
        // Analysis API
        .route("/api/trending", get(trending_handler))
        .route("/api/analyze", post(analyze_handler))
        .route("/api/analysis/latest", get(latest_analysis_handler))
        // Static files (dashboard frontend)
        .nest_service("/", tower_http::services::ServeDir::new("static"))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🚀 token-insight server running on http://{}", addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health              - Health check");
    tracing::info!("  GET  /api/trending        - Trending token list");
    tracing::info!("  POST /api/analyze         - Deep analysis for a symbol");
    tracing::info!("  GET  /api/analysis/latest - Most recent committed analysis");
    tracing::info!("");

    axum::serve(listener, app).await?;

    Ok(())
}
