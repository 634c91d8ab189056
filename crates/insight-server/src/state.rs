//! Application State

use std::sync::Arc;

use token_analyst::{AnalysisClient, AnalysisSlot};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Analysis client (provider-backed or unconfigured)
    pub client: Arc<AnalysisClient>,

    /// Generation-guarded holder for the most recent analysis
    pub analysis_slot: Arc<AnalysisSlot>,
}
