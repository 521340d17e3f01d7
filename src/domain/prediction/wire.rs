//! Wire types for prediction responses (REST).

use crate::domain::sequence::wire::SequenceResponse;
use crate::shared::serde_util::{empty_string_as_none, string_or_number};
use crate::shared::Direction;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// REST response for a single prediction (`GET /predict/{date}`, and each
/// value of `GET /predictions`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub specific_date: String,
    #[serde(default, deserialize_with = "empty_string_as_none::deserialize")]
    pub future_date: Option<String>,
    pub prediction: Direction,
    #[serde(default, deserialize_with = "string_or_number::deserialize")]
    pub pct_change: String,
    #[serde(default, deserialize_with = "string_or_number::deserialize")]
    pub confidence: String,
    /// `null` until the outcome window has elapsed.
    #[serde(default)]
    pub was_correct: Option<bool>,
    #[serde(default)]
    pub sequence: SequenceResponse,
}

/// REST response for `GET /predictions`: ISO date → prediction, unordered.
///
/// Values stay untyped until conversion so one malformed entry is dropped on
/// its own instead of failing the whole map.
pub type PredictionsResponse = HashMap<String, serde_json::Value>;
