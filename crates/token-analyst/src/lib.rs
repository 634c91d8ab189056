//! # token-analyst
//!
//! AI-generated cryptocurrency analysis for a dashboard frontend.
//!
//! The heavy lifting happens in a remote generative model: one call per
//! operation, a large hand-written prompt, live web search enabled. This
//! crate owns everything around that call:
//!
//! - **Schema contracts** (`model`) - the two output shapes the dashboard
//!   may assume: a trending-token list and a full analysis object
//! - **Prompt templates** (`prompt`) - the instructions that pin the model
//!   to those shapes
//! - **Analysis client** (`client`) - the two public operations, with the
//!   sanitize → parse → validate pipeline between raw model text and typed
//!   results
//! - **Fallback policy** (`fallback`) - deterministic placeholder data for
//!   the trending path when no credential is configured or the call fails.
//!   Analysis results are never fabricated; that path surfaces errors.
//! - **Generation guard** (`session`) - keeps a stale analysis response
//!   from overwriting state intended for a newer request

pub mod client;
pub mod error;
pub mod fallback;
pub mod model;
pub mod prompt;
pub mod session;

pub use client::{AnalysisClient, TrendingList};
pub use error::{AnalystError, Result};
pub use model::{
    AnalysisCategory, AnalysisMethod, Direction, FullAnalysisResponse, Interpretation,
    Timeframe, TradeSignal, Trend, TrendingToken,
};
pub use session::{AnalysisSlot, CommittedAnalysis, Ticket};
