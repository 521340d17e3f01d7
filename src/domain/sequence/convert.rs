//! Conversions from wire types to domain types for candle sequences.

use super::indicator::Indicator;
use super::wire::{CandleResponse, SequenceResponse};
use super::{Candle, SequenceData};
use crate::shared::parse_timestamp;
use std::collections::BTreeMap;

impl From<CandleResponse> for Candle {
    fn from(c: CandleResponse) -> Self {
        let columns = [
            (Indicator::Adx, c.adx),
            (Indicator::Atr14, c.atr_14),
            (Indicator::BbBbh, c.bb_bbh),
            (Indicator::BbBbl, c.bb_bbl),
            (Indicator::BbBbm, c.bb_bbm),
            (Indicator::Ema12, c.ema_12),
            (Indicator::Ema26, c.ema_26),
            (Indicator::Macd, c.macd),
            (Indicator::MacdDiff, c.macd_diff),
            (Indicator::Obv, c.obv),
            (Indicator::Psar, c.psar),
            (Indicator::Roc12, c.roc_12),
            (Indicator::Rsi14, c.rsi_14),
            (Indicator::Sentiment, c.sentiment),
        ];

        let indicators: BTreeMap<Indicator, f64> = columns
            .into_iter()
            .filter_map(|(ind, value)| value.filter(|v| v.is_finite()).map(|v| (ind, v)))
            .collect();

        Self {
            id: c.id,
            time: parse_timestamp(&c.timestamp),
            timestamp: c.timestamp,
            open: c.open,
            high: c.high,
            low: c.low,
            close: c.close,
            volume: c.volume,
            confidence: c.confidence,
            indicators,
        }
    }
}

impl From<SequenceResponse> for SequenceData {
    fn from(s: SequenceResponse) -> Self {
        fn candles(raw: Vec<CandleResponse>) -> Vec<Candle> {
            raw.into_iter().map(Candle::from).collect()
        }

        Self {
            hourly: candles(s.hourly),
            fourhourly: candles(s.fourhourly),
            daily: candles(s.daily),
            weekly: candles(s.weekly),
            monthly: candles(s.monthly),
        }
    }
}
