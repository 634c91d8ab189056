//! Schema Contracts
//!
//! The two output shapes the generative model is instructed to produce, and
//! that the rest of the system may assume after validation. Field names on
//! the wire are camelCase to match what the model emits.
//!
//! Price, change and level fields are display strings, not numbers - the
//! dashboard renders them verbatim and no arithmetic is ever performed on
//! them. Category scores are the one numeric exception, and they are a
//! model-produced aggregate: no client-side recomputation from the method
//! rows is attempted, so a score and its methods are not guaranteed to be
//! internally consistent.

use serde::{Deserialize, Serialize};

use crate::error::{AnalystError, Result};

/// Number of trade signals the analysis prompt asks for
pub const EXPECTED_SIGNALS: usize = 3;

/// Number of deep-analysis categories the analysis prompt asks for
pub const EXPECTED_CATEGORIES: usize = 5;

/// A trending cryptocurrency with display-only price fields
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendingToken {
    /// Ticker symbol (e.g., "BTC")
    pub symbol: String,

    /// Full name (e.g., "Bitcoin")
    pub name: String,

    /// Display price (e.g., "$96,500")
    pub price: String,

    /// Display 24h change (e.g., "+1.2%")
    pub change_24h: String,
}

/// Overall trend direction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Up,
    Down,
    Sideways,
}

/// Verdict of a single analysis method
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Interpretation {
    Bullish,
    Bearish,
    Neutral,
}

/// Trade direction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Long,
    Short,
}

/// Signal horizon
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Timeframe {
    #[serde(rename = "Short-term")]
    ShortTerm,
    #[serde(rename = "Mid-term")]
    MidTerm,
    #[serde(rename = "Long-term")]
    LongTerm,
}

/// One scoring method within an analysis category
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisMethod {
    pub name: String,
    pub value: String,
    pub interpretation: Interpretation,
    pub details: String,
}

/// One of the five analytical dimensions with its aggregate score
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisCategory {
    pub category_name: String,

    /// Aggregate score in [0, 100], produced by the model
    pub score: u8,

    pub methods: Vec<AnalysisMethod>,
}

/// A generated directional trading suggestion
///
/// Entry/stop/target levels are opaque display strings; the contract never
/// parses them as numbers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeSignal {
    pub timeframe: Timeframe,
    pub asset_pair: String,
    pub direction: Direction,
    pub duration: String,
    pub entry_zone: String,
    pub leverage: String,
    pub stop_loss: String,
    pub position_risk: String,
    pub risk_reward_ratio: String,
    pub tp1: String,
    pub tp2: String,
    pub tp3: String,
    pub strategy_note: String,
    pub technical_justification: Vec<String>,
    pub fundamental_context: Vec<String>,
}

/// The complete analysis object returned for one symbol
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullAnalysisResponse {
    pub symbol: String,
    pub current_price: String,
    pub trend: Trend,
    pub timestamp: String,
    pub signals: Vec<TradeSignal>,
    pub deep_analysis: Vec<AnalysisCategory>,
}

impl FullAnalysisResponse {
    /// Structural validation after deserialization.
    ///
    /// Enum membership is already enforced by serde; this checks the parts
    /// serde cannot: required strings non-empty, scores within [0, 100],
    /// and both lists populated. Count mismatches against the prompt's
    /// expectations (3 signals, 5 categories) are logged, not rejected -
    /// the counts are expectations, not invariants the model is trusted
    /// to keep.
    pub fn validate(&self) -> Result<()> {
        if self.symbol.trim().is_empty() {
            return Err(AnalystError::MalformedResponse("symbol is empty".into()));
        }
        if self.current_price.trim().is_empty() {
            return Err(AnalystError::MalformedResponse("currentPrice is empty".into()));
        }
        if self.signals.is_empty() {
            return Err(AnalystError::MalformedResponse("no trade signals".into()));
        }
        if self.deep_analysis.is_empty() {
            return Err(AnalystError::MalformedResponse("no analysis categories".into()));
        }

        for category in &self.deep_analysis {
            if category.category_name.trim().is_empty() {
                return Err(AnalystError::MalformedResponse(
                    "category with empty name".into(),
                ));
            }
            if category.score > 100 {
                return Err(AnalystError::MalformedResponse(format!(
                    "score {} out of range for {}",
                    category.score, category.category_name
                )));
            }
        }

        if self.signals.len() != EXPECTED_SIGNALS {
            tracing::warn!(
                symbol = %self.symbol,
                count = self.signals.len(),
                "unexpected signal count"
            );
        }
        if self.deep_analysis.len() != EXPECTED_CATEGORIES {
            tracing::warn!(
                symbol = %self.symbol,
                count = self.deep_analysis.len(),
                "unexpected category count"
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trending_token_wire_names() {
        let json = r#"{"symbol":"BTC","name":"Bitcoin","price":"$96,500","change24h":"+1.2%"}"#;
        let token: TrendingToken = serde_json::from_str(json).unwrap();
        assert_eq!(token.symbol, "BTC");
        assert_eq!(token.change_24h, "+1.2%");

        let back = serde_json::to_string(&token).unwrap();
        assert!(back.contains("\"change24h\""));
    }

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(
            serde_json::from_str::<Direction>("\"LONG\"").unwrap(),
            Direction::Long
        );
        assert_eq!(
            serde_json::from_str::<Timeframe>("\"Short-term\"").unwrap(),
            Timeframe::ShortTerm
        );
        assert_eq!(
            serde_json::from_str::<Trend>("\"Sideways\"").unwrap(),
            Trend::Sideways
        );
        assert!(serde_json::from_str::<Interpretation>("\"Sceptical\"").is_err());
    }

    #[test]
    fn test_validate_rejects_out_of_range_score() {
        let mut analysis = sample_analysis();
        analysis.deep_analysis[0].score = 101;
        assert!(matches!(
            analysis.validate(),
            Err(AnalystError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_validate_rejects_empty_signals() {
        let mut analysis = sample_analysis();
        analysis.signals.clear();
        assert!(analysis.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_well_formed() {
        assert!(sample_analysis().validate().is_ok());
    }

    fn sample_analysis() -> FullAnalysisResponse {
        FullAnalysisResponse {
            symbol: "BTC".into(),
            current_price: "$96,500".into(),
            trend: Trend::Up,
            timestamp: "Oct 26, 2025 14:30 UTC".into(),
            signals: vec![TradeSignal {
                timeframe: Timeframe::ShortTerm,
                asset_pair: "BTC/USDT".into(),
                direction: Direction::Long,
                duration: "1-3 Days".into(),
                entry_zone: "$95,800 - $96,200".into(),
                leverage: "5x".into(),
                stop_loss: "$94,500".into(),
                position_risk: "1%".into(),
                risk_reward_ratio: "1:3".into(),
                tp1: "$97,500".into(),
                tp2: "$98,800".into(),
                tp3: "$100,000".into(),
                strategy_note: "Momentum continuation".into(),
                technical_justification: vec!["RSI reset on 4h".into()],
                fundamental_context: vec!["ETF inflows steady".into()],
            }],
            deep_analysis: vec![AnalysisCategory {
                category_name: "Fundamental".into(),
                score: 85,
                methods: vec![AnalysisMethod {
                    name: "Network Growth".into(),
                    value: "125k Active Addr".into(),
                    interpretation: Interpretation::Bullish,
                    details: "Daily active addresses up 5% week-over-week.".into(),
                }],
            }],
        }
    }
}
