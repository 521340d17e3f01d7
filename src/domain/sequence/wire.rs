//! Wire types for candle sequences embedded in prediction responses.

use serde::{Deserialize, Serialize};

/// Raw candle as the backend serializes it.
///
/// Indicator columns are optional: warm-up rows and older snapshots may carry
/// `null` or omit them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandleResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub timestamp: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<String>,
    #[serde(default)]
    pub adx: Option<f64>,
    #[serde(default)]
    pub atr_14: Option<f64>,
    #[serde(default)]
    pub bb_bbh: Option<f64>,
    #[serde(default)]
    pub bb_bbl: Option<f64>,
    #[serde(default)]
    pub bb_bbm: Option<f64>,
    #[serde(default)]
    pub ema_12: Option<f64>,
    #[serde(default)]
    pub ema_26: Option<f64>,
    #[serde(default)]
    pub macd: Option<f64>,
    #[serde(default)]
    pub macd_diff: Option<f64>,
    #[serde(default)]
    pub obv: Option<f64>,
    #[serde(default)]
    pub psar: Option<f64>,
    #[serde(default)]
    pub roc_12: Option<f64>,
    #[serde(default)]
    pub rsi_14: Option<f64>,
    #[serde(default)]
    pub sentiment: Option<f64>,
    /// Training target; never charted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

/// Raw per-timeframe candle sequences.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SequenceResponse {
    #[serde(default)]
    pub hourly: Vec<CandleResponse>,
    #[serde(default)]
    pub fourhourly: Vec<CandleResponse>,
    #[serde(default)]
    pub daily: Vec<CandleResponse>,
    #[serde(default)]
    pub weekly: Vec<CandleResponse>,
    #[serde(default)]
    pub monthly: Vec<CandleResponse>,
}
