//! Error Types

use thiserror::Error;

/// Result type alias for provider operations
pub type Result<T> = std::result::Result<T, CoreError>;

/// Provider-layer error types
#[derive(Error, Debug)]
pub enum CoreError {
    /// Credential or endpoint configuration missing/invalid
    #[error("Configuration error: {0}")]
    Config(String),

    /// Authentication rejected by the remote endpoint
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Rate limited by the remote endpoint
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// Remote endpoint returned an error or was unreachable
    #[error("Provider error: {0}")]
    Provider(String),

    /// Provider unavailable or not responding
    #[error("Provider unavailable: {0}")]
    ProviderUnavailable(String),

    /// Provider returned a payload we could not make sense of
    #[error("Malformed provider payload: {0}")]
    MalformedPayload(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CoreError {
    /// Check if the error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            CoreError::ProviderUnavailable(_) | CoreError::RateLimited(_)
        )
    }

    /// Convert to a user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            CoreError::Config(_) => "The analysis service is not configured.".into(),
            CoreError::Auth(_) => "Authentication with the AI service failed.".into(),
            CoreError::RateLimited(_) => "Too many requests to the AI service. Please wait a moment.".into(),
            CoreError::ProviderUnavailable(_) => "The AI service is currently unavailable. Please try again.".into(),
            CoreError::Provider(msg) => format!("The AI service encountered an error: {}", msg),
            CoreError::MalformedPayload(_) => "The AI service returned an unreadable response.".into(),
            CoreError::Json(_) => "The AI service returned an unreadable response.".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_classification() {
        assert!(CoreError::RateLimited("slow down".into()).is_retryable());
        assert!(CoreError::ProviderUnavailable("down".into()).is_retryable());
        assert!(!CoreError::Config("no key".into()).is_retryable());
        assert!(!CoreError::MalformedPayload("not json".into()).is_retryable());
    }
}
