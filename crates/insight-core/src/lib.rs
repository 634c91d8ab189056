//! # insight-core
//!
//! Provider-agnostic core for generative market analysis.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                     AnalysisClient                       │
//! │  ┌───────────────┐  ┌─────────────┐  ┌───────────────┐   │
//! │  │    Prompt     │──│ Generative  │──│   Sanitizer   │   │
//! │  │   Templates   │  │  Provider   │  │ (JSON extract)│   │
//! │  └───────────────┘  └─────────────┘  └───────────────┘   │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! The `GenerativeProvider` trait is the boundary to the remote model: one
//! logical operation, "generate content from a prompt with optional
//! live-search augmentation". Everything downstream of it treats the model
//! output as an untrusted text blob that the sanitizer turns into a JSON
//! candidate for typed deserialization.

pub mod error;
pub mod provider;
pub mod sanitize;

pub use error::{CoreError, Result};
pub use provider::{GenerationOptions, GenerationRequest, GenerativeProvider};
pub use sanitize::extract_json;
