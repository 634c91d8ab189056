//! # insight-runtime
//!
//! Runtime providers for the token-insight system.
//!
//! ## Providers
//!
//! - **Gemini** (default): Google Generative Language REST API with
//!   search-grounded generation
//! - **Mock**: canned responses for tests and demos
//!
//! ## Usage
//!
//! ```rust,ignore
//! use insight_runtime::GeminiProvider;
//!
//! let provider = GeminiProvider::from_env()?;
//! let text = provider.generate(&request).await?;
//! ```

#[cfg(feature = "gemini")]
pub mod gemini;
pub mod mock;

#[cfg(feature = "gemini")]
pub use gemini::{GeminiConfig, GeminiProvider};
pub use mock::MockProvider;

// Re-export core types for convenience
pub use insight_core::{
    CoreError, GenerationOptions, GenerationRequest, GenerativeProvider, Result,
};
