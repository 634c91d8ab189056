//! Generation Guard
//!
//! The dashboard fires one analysis request per search submit, but nothing
//! cancels an in-flight request when the user searches again or navigates
//! away. A slow first response can therefore arrive after a newer request
//! has been issued. `AnalysisSlot` resolves the race with a generation
//! counter: every request takes a [`Ticket`] up front, and only the ticket
//! from the most recent `begin` may commit its result.

use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::model::FullAnalysisResponse;

/// Claim on the right to commit one analysis result
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
}

/// A committed analysis with its commit time
#[derive(Clone, Debug, Serialize)]
pub struct CommittedAnalysis {
    pub analysis: FullAnalysisResponse,
    pub committed_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
struct Inner {
    generation: u64,
    latest: Option<CommittedAnalysis>,
}

/// Holder for the most recent analysis, guarded against stale writes
#[derive(Debug, Default)]
pub struct AnalysisSlot {
    inner: RwLock<Inner>,
}

impl AnalysisSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request generation.
    ///
    /// Invalidates every ticket issued before this call.
    pub fn begin(&self) -> Ticket {
        let mut inner = self.inner.write().unwrap();
        inner.generation += 1;
        Ticket {
            generation: inner.generation,
        }
    }

    /// Commit a result if its ticket is still current.
    ///
    /// Returns `false` (and drops the result) when a newer request has been
    /// started since the ticket was issued.
    pub fn commit(&self, ticket: Ticket, analysis: FullAnalysisResponse) -> bool {
        let mut inner = self.inner.write().unwrap();
        if ticket.generation != inner.generation {
            tracing::debug!(
                symbol = %analysis.symbol,
                ticket = ticket.generation,
                current = inner.generation,
                "dropping stale analysis result"
            );
            return false;
        }

        inner.latest = Some(CommittedAnalysis {
            analysis,
            committed_at: Utc::now(),
        });
        true
    }

    /// Most recently committed analysis, if any
    pub fn latest(&self) -> Option<CommittedAnalysis> {
        self.inner.read().unwrap().latest.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Trend;

    fn analysis_for(symbol: &str) -> FullAnalysisResponse {
        FullAnalysisResponse {
            symbol: symbol.into(),
            current_price: "$1.00".into(),
            trend: Trend::Sideways,
            timestamp: "now".into(),
            signals: Vec::new(),
            deep_analysis: Vec::new(),
        }
    }

    #[test]
    fn test_single_request_commits() {
        let slot = AnalysisSlot::new();
        let ticket = slot.begin();

        assert!(slot.commit(ticket, analysis_for("BTC")));
        assert_eq!(slot.latest().unwrap().analysis.symbol, "BTC");
    }

    #[test]
    fn test_stale_response_cannot_overwrite_newer_request() {
        let slot = AnalysisSlot::new();

        // User searches BTC, then ETH before the BTC call resolves.
        let btc_ticket = slot.begin();
        let eth_ticket = slot.begin();

        // ETH resolves first and commits.
        assert!(slot.commit(eth_ticket, analysis_for("ETH")));

        // The late BTC response must be dropped.
        assert!(!slot.commit(btc_ticket, analysis_for("BTC")));
        assert_eq!(slot.latest().unwrap().analysis.symbol, "ETH");
    }

    #[test]
    fn test_stale_response_before_newer_commit_is_dropped() {
        let slot = AnalysisSlot::new();

        let btc_ticket = slot.begin();
        let eth_ticket = slot.begin();

        // BTC resolves first but is already stale.
        assert!(!slot.commit(btc_ticket, analysis_for("BTC")));
        assert!(slot.latest().is_none());

        assert!(slot.commit(eth_ticket, analysis_for("ETH")));
        assert_eq!(slot.latest().unwrap().analysis.symbol, "ETH");
    }

    #[test]
    fn test_ticket_cannot_commit_twice_after_newer_begin() {
        let slot = AnalysisSlot::new();
        let first = slot.begin();
        assert!(slot.commit(first, analysis_for("BTC")));

        let _second = slot.begin();
        assert!(!slot.commit(first, analysis_for("BTC")));
    }
}
