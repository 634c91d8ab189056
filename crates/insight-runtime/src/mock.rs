//! Mock Provider
//!
//! For testing and demo purposes. Returns canned text and records the
//! prompts it was asked to generate from.

use std::sync::Mutex;

use async_trait::async_trait;
use insight_core::{
    error::{CoreError, Result},
    provider::{GenerationRequest, GenerativeProvider},
};

/// Mock generative provider with a fixed response
pub struct MockProvider {
    response: Result<String>,
    prompts: Mutex<Vec<String>>,
}

impl MockProvider {
    /// Provider that always returns the given text
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: Ok(response.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Provider that always fails with a transport-style error
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            response: Err(CoreError::ProviderUnavailable(message.into())),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Prompts received so far, in call order
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerativeProvider for MockProvider {
    async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        self.prompts.lock().unwrap().push(request.prompt.clone());

        match &self.response {
            Ok(text) => Ok(text.clone()),
            Err(CoreError::ProviderUnavailable(msg)) => {
                Err(CoreError::ProviderUnavailable(msg.clone()))
            }
            Err(e) => Err(CoreError::Provider(e.to_string())),
        }
    }

    async fn health_check(&self) -> Result<bool> {
        Ok(self.response.is_ok())
    }

    fn name(&self) -> &str {
        "Mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_returns_canned_text() {
        let provider = MockProvider::new("[]");
        let request = GenerationRequest::new("anything");

        let text = provider.generate(&request).await.unwrap();
        assert_eq!(text, "[]");
        assert_eq!(provider.prompts(), vec!["anything".to_string()]);
    }

    #[tokio::test]
    async fn test_failing_mock() {
        let provider = MockProvider::failing("offline");
        let request = GenerationRequest::new("anything");

        assert!(provider.generate(&request).await.is_err());
        assert!(!provider.health_check().await.unwrap());
    }
}
