//! Chart data preparation — flat rows and padded axis domains for one
//! timeframe's candles.

use super::indicator::{Indicator, IndicatorSelection};
use super::{Candle, SequenceData};
use crate::shared::Timeframe;
use chrono::{Local, TimeZone};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Display;

/// Fraction of the value range added below and above an axis.
pub const DOMAIN_PADDING: f64 = 0.1;

/// Domain used when a field has no values to scale against.
pub const EMPTY_DOMAIN: AxisDomain = AxisDomain { min: 0.0, max: 1.0 };

/// Date label format for chart rows.
pub const DATE_LABEL_FORMAT: &str = "%Y-%m-%d %H:%M";

// ─── Fields ──────────────────────────────────────────────────────────────────

/// A numeric candle column an axis can be scaled against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartField {
    Open,
    High,
    Low,
    Close,
    Volume,
    Indicator(Indicator),
}

impl ChartField {
    pub fn value(&self, candle: &Candle) -> Option<f64> {
        match self {
            ChartField::Open => Some(candle.open),
            ChartField::High => Some(candle.high),
            ChartField::Low => Some(candle.low),
            ChartField::Close => Some(candle.close),
            ChartField::Volume => Some(candle.volume),
            ChartField::Indicator(ind) => candle.indicator(*ind),
        }
    }
}

impl From<Indicator> for ChartField {
    fn from(indicator: Indicator) -> Self {
        ChartField::Indicator(indicator)
    }
}

// ─── Rows ────────────────────────────────────────────────────────────────────

/// One chart-ready row. Indicator columns are flattened next to OHLCV and
/// keyed by indicator display name (`"EMA_12"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub date: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    #[serde(flatten)]
    pub indicators: BTreeMap<String, f64>,
}

/// Map candles to chart rows, rendering dates in `tz`.
///
/// Indicators missing on a bar are left out of that row rather than zeroed.
pub fn prepare_chart_data<Tz>(
    candles: &[Candle],
    selection: &IndicatorSelection,
    tz: &Tz,
) -> Vec<ChartPoint>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    candles
        .iter()
        .map(|candle| ChartPoint {
            date: date_label(candle, tz),
            open: candle.open,
            high: candle.high,
            low: candle.low,
            close: candle.close,
            volume: candle.volume,
            indicators: selection
                .iter()
                .filter_map(|ind| candle.indicator(ind).map(|v| (ind.name(), v)))
                .collect(),
        })
        .collect()
}

/// [`prepare_chart_data`] in the machine's local time zone.
pub fn prepare_chart_data_local(
    candles: &[Candle],
    selection: &IndicatorSelection,
) -> Vec<ChartPoint> {
    prepare_chart_data(candles, selection, &Local)
}

fn date_label<Tz>(candle: &Candle, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match candle.time {
        Some(t) => t.with_timezone(tz).format(DATE_LABEL_FORMAT).to_string(),
        None => candle.timestamp.clone(),
    }
}

// ─── Domains ─────────────────────────────────────────────────────────────────

/// Closed numeric interval for an axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisDomain {
    pub min: f64,
    pub max: f64,
}

impl From<AxisDomain> for (f64, f64) {
    fn from(d: AxisDomain) -> Self {
        (d.min, d.max)
    }
}

/// `[min - 10% range, max + 10% range]` over `field`, or [`EMPTY_DOMAIN`] when
/// no candle has a finite value for it.
pub fn axis_domain(candles: &[Candle], field: ChartField) -> AxisDomain {
    let bounds = candles
        .iter()
        .filter_map(|c| field.value(c))
        .filter(|v| v.is_finite())
        .fold(None, |acc: Option<(f64, f64)>, v| match acc {
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            None => Some((v, v)),
        });

    match bounds {
        Some((min, max)) => {
            let padding = (max - min) * DOMAIN_PADDING;
            AxisDomain {
                min: min - padding,
                max: max + padding,
            }
        }
        None => EMPTY_DOMAIN,
    }
}

// ─── Series ──────────────────────────────────────────────────────────────────

/// Everything needed to draw one timeframe: rows, the close-price axis, and one
/// secondary axis per selected indicator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub timeframe: Timeframe,
    pub points: Vec<ChartPoint>,
    pub close_domain: AxisDomain,
    pub indicator_domains: Vec<(Indicator, AxisDomain)>,
}

impl ChartSeries {
    pub fn build<Tz>(
        sequence: &SequenceData,
        timeframe: Timeframe,
        selection: &IndicatorSelection,
        tz: &Tz,
    ) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let candles = sequence.get(timeframe);
        Self {
            timeframe,
            points: prepare_chart_data(candles, selection, tz),
            close_domain: axis_domain(candles, ChartField::Close),
            indicator_domains: selection
                .iter()
                .map(|ind| (ind, axis_domain(candles, ind.into())))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
