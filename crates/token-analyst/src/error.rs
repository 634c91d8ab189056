//! Error Types for the Analysis Client

use insight_core::CoreError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnalystError>;

#[derive(Error, Debug)]
pub enum AnalystError {
    /// Symbol was empty or otherwise unusable
    #[error("Invalid symbol: {0:?}")]
    InvalidSymbol(String),

    /// No credential/provider configured
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network or remote-endpoint failure
    #[error("Transport error: {0}")]
    Transport(String),

    /// Remote endpoint rate-limited the request
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// Model output could not be parsed into, or did not satisfy, the
    /// expected schema
    #[error("Malformed model response: {0}")]
    MalformedResponse(String),
}

impl AnalystError {
    /// Convert to a message safe to show on the dashboard
    pub fn user_message(&self) -> String {
        match self {
            AnalystError::InvalidSymbol(_) => "Please enter a token symbol.".into(),
            AnalystError::Config(_) => {
                "AI analysis is not configured. Add an API key to enable live analysis.".into()
            }
            AnalystError::Transport(_) => {
                "Could not reach the AI service. Please try again.".into()
            }
            AnalystError::RateLimited(_) => {
                "Too many analysis requests. Please wait a moment.".into()
            }
            AnalystError::MalformedResponse(_) => {
                "The AI service returned an unreadable analysis. Please try again.".into()
            }
        }
    }
}

impl From<CoreError> for AnalystError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Config(msg) | CoreError::Auth(msg) => AnalystError::Config(msg),
            CoreError::RateLimited(msg) => AnalystError::RateLimited(msg),
            CoreError::Provider(msg) | CoreError::ProviderUnavailable(msg) => {
                AnalystError::Transport(msg)
            }
            CoreError::MalformedPayload(msg) => AnalystError::MalformedResponse(msg),
            CoreError::Json(e) => AnalystError::MalformedResponse(e.to_string()),
        }
    }
}
