//! Single-prediction card.

use super::Tone;
use crate::domain::prediction::{Prediction, Verdict};
use crate::shared::NOT_AVAILABLE;

use chrono::NaiveDate;
use serde::Serialize;

/// Everything needed to render one prediction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionCard {
    pub date: String,
    pub direction: String,
    pub direction_tone: Tone,
    pub verdict: Verdict,
    pub verdict_label: &'static str,
    pub verdict_tone: Tone,
    pub future_date: String,
    pub pct_change: String,
    pub pct_tone: Tone,
    pub confidence: String,
}

impl PredictionCard {
    /// `key` is the board key the prediction was listed under; it can differ
    /// from `specific_date` when the backend keys by request date. The verdict
    /// horizon is checked against `key`.
    pub fn new(key: NaiveDate, prediction: &Prediction, today: NaiveDate) -> Self {
        let verdict = prediction.verdict_at(key, today);
        Self {
            date: key.to_string(),
            direction: prediction.direction.to_string(),
            direction_tone: Tone::for_direction(&prediction.direction),
            verdict,
            verdict_label: verdict.label(),
            verdict_tone: Tone::for_verdict(verdict),
            future_date: prediction
                .future_date
                .map(|d| d.to_string())
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            pct_change: prediction.pct_change.clone(),
            pct_tone: Tone::for_pct(prediction.pct_value().ok()),
            confidence: prediction.confidence.clone(),
        }
    }
}
