//! Conversions from wire types to domain types for predictions.

use super::wire::{PredictionResponse, PredictionsResponse};
use super::{Prediction, PredictionBoard, ValidationError};
use crate::shared::parse_date;

impl TryFrom<PredictionResponse> for Prediction {
    type Error = ValidationError;

    fn try_from(source: PredictionResponse) -> Result<Self, Self::Error> {
        let mut errors: Vec<ValidationError> = Vec::new();

        let specific_date = match parse_date(&source.specific_date) {
            Ok(d) => Some(d),
            Err(_) => {
                errors.push(ValidationError::InvalidSpecificDate(
                    source.specific_date.clone(),
                ));
                None
            }
        };

        let future_date = match source.future_date.as_deref() {
            Some(raw) => match parse_date(raw) {
                Ok(d) => Some(d),
                Err(_) => {
                    errors.push(ValidationError::InvalidFutureDate(raw.to_string()));
                    None
                }
            },
            None => None,
        };

        let specific_date = match specific_date {
            Some(d) if errors.is_empty() => d,
            _ => {
                return Err(ValidationError::Multiple(
                    source.specific_date.clone(),
                    errors,
                ))
            }
        };

        Ok(Prediction {
            specific_date,
            future_date,
            direction: source.prediction,
            pct_change: source.pct_change,
            confidence: source.confidence,
            was_correct: source.was_correct,
            sequence: source.sequence.into(),
        })
    }
}

impl From<PredictionsResponse> for PredictionBoard {
    /// Entries that fail validation are logged and left out; one malformed
    /// record does not hide the rest of the board.
    fn from(resp: PredictionsResponse) -> Self {
        let mut board = PredictionBoard::new();
        for (key, raw) in resp {
            let key_date = match parse_date(&key) {
                Ok(d) => d,
                Err(e) => {
                    tracing::warn!(key = %key, "Skipping prediction with invalid key: {}", e);
                    continue;
                }
            };
            let wire = match serde_json::from_value::<PredictionResponse>(raw) {
                Ok(wire) => wire,
                Err(e) => {
                    tracing::warn!(key = %key, "Skipping malformed prediction: {}", e);
                    continue;
                }
            };
            match Prediction::try_from(wire) {
                Ok(prediction) => board.insert_at(key_date, prediction),
                Err(e) => tracing::warn!(key = %key, "Skipping invalid prediction: {}", e),
            }
        }
        board
    }
}
