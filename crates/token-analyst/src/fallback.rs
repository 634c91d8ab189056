//! Fallback Policy
//!
//! Deterministic placeholder data for the trending path, used when no
//! credential is configured or the remote call fails for any reason. The
//! dashboard always has something to render instead of an empty state.
//!
//! The analysis path must never fall back: presenting fabricated trade
//! signals as if real would be materially misleading, so that path surfaces
//! failure to the caller instead.

use crate::model::TrendingToken;

/// Static trending list: the two majors with clearly-placeholder fields.
pub fn fallback_trending() -> Vec<TrendingToken> {
    vec![
        TrendingToken {
            symbol: "BTC".into(),
            name: "Bitcoin".into(),
            price: "N/A".into(),
            change_24h: "0%".into(),
        },
        TrendingToken {
            symbol: "ETH".into(),
            name: "Ethereum".into(),
            price: "N/A".into(),
            change_24h: "0%".into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_is_nonempty_with_majors_first() {
        let tokens = fallback_trending();
        assert!(!tokens.is_empty());
        assert_eq!(tokens[0].symbol, "BTC");
        assert_eq!(tokens[1].symbol, "ETH");
    }

    #[test]
    fn test_fallback_is_clearly_placeholder() {
        for token in fallback_trending() {
            assert_eq!(token.price, "N/A");
        }
    }
}
