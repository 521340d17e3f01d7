//! Sequence domain — per-timeframe candle series behind a prediction.

pub mod chart;
mod convert;
pub mod indicator;
pub mod wire;

use crate::shared::Timeframe;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub use chart::{
    axis_domain, prepare_chart_data, prepare_chart_data_local, AxisDomain, ChartField, ChartPoint,
    ChartSeries,
};
pub use indicator::{Indicator, IndicatorSelection};

/// One OHLCV bar with its precomputed indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub id: Option<i64>,
    /// Timestamp as the backend sent it.
    pub timestamp: String,
    /// Parsed `timestamp`, `None` when the backend format was not recognised.
    pub time: Option<DateTime<Utc>>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub confidence: Option<String>,
    /// Finite indicator values present on this bar.
    pub indicators: BTreeMap<Indicator, f64>,
}

impl Candle {
    pub fn indicator(&self, indicator: Indicator) -> Option<f64> {
        self.indicators.get(&indicator).copied()
    }
}

/// The five candle sequences fed to the model. Each timeframe is independent;
/// alignment between them is the backend's concern.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SequenceData {
    pub hourly: Vec<Candle>,
    pub fourhourly: Vec<Candle>,
    pub daily: Vec<Candle>,
    pub weekly: Vec<Candle>,
    pub monthly: Vec<Candle>,
}

impl SequenceData {
    pub fn get(&self, timeframe: Timeframe) -> &[Candle] {
        match timeframe {
            Timeframe::Hourly => &self.hourly,
            Timeframe::Fourhourly => &self.fourhourly,
            Timeframe::Daily => &self.daily,
            Timeframe::Weekly => &self.weekly,
            Timeframe::Monthly => &self.monthly,
        }
    }

    /// `(timeframe, candles)` pairs, finest timeframe first.
    pub fn iter(&self) -> impl Iterator<Item = (Timeframe, &[Candle])> {
        Timeframe::ALL.into_iter().map(move |tf| (tf, self.get(tf)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().all(|(_, candles)| candles.is_empty())
    }

    /// Indicators offered for charting: those present on the first bar of the
    /// first non-empty timeframe.
    pub fn available_indicators(&self) -> Vec<Indicator> {
        self.iter()
            .find_map(|(_, candles)| candles.first())
            .map(|first| first.indicators.keys().copied().collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn candle(close: f64, indicators: &[(Indicator, f64)]) -> Candle {
        Candle {
            id: None,
            timestamp: "2024-01-01T00:00:00Z".to_string(),
            time: None,
            open: close,
            high: close,
            low: close,
            close,
            volume: 1.0,
            confidence: None,
            indicators: indicators.iter().copied().collect(),
        }
    }

    #[test]
    fn test_available_indicators_from_first_non_empty_timeframe() {
        let seq = SequenceData {
            daily: vec![
                candle(1.0, &[(Indicator::Rsi14, 50.0), (Indicator::Adx, 20.0)]),
                candle(2.0, &[(Indicator::Macd, 0.1)]),
            ],
            weekly: vec![candle(3.0, &[(Indicator::Obv, 9.0)])],
            ..Default::default()
        };
        assert_eq!(
            seq.available_indicators(),
            vec![Indicator::Adx, Indicator::Rsi14]
        );
    }

    #[test]
    fn test_available_indicators_prefers_finer_timeframe() {
        let seq = SequenceData {
            hourly: vec![candle(1.0, &[(Indicator::Psar, 1.0)])],
            daily: vec![candle(1.0, &[(Indicator::Rsi14, 50.0)])],
            ..Default::default()
        };
        assert_eq!(seq.available_indicators(), vec![Indicator::Psar]);
    }

    #[test]
    fn test_empty_sequence_has_no_indicators() {
        let seq = SequenceData::default();
        assert!(seq.is_empty());
        assert!(seq.available_indicators().is_empty());
    }

    #[test]
    fn test_get_and_iter_follow_timeframe_order() {
        let seq = SequenceData {
            monthly: vec![candle(7.0, &[])],
            ..Default::default()
        };
        assert_eq!(seq.get(Timeframe::Monthly).len(), 1);
        let order: Vec<_> = seq.iter().map(|(tf, _)| tf).collect();
        assert_eq!(order, Timeframe::ALL.to_vec());
    }
}
