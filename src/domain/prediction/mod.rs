//! Prediction domain — weekly directional calls, their verdicts, and the board
//! of all known predictions.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod state;
pub mod wire;

use crate::domain::sequence::SequenceData;
use crate::error::ParseError;
use crate::shared::{parse_pct, Direction, NOT_AVAILABLE};
use chrono::{Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub use state::PredictionBoard;

/// Days between a prediction and the date its outcome is known.
///
/// The record dated exactly this many days ago is shown as still calculating.
/// Only the weekly horizon is known to hold; other horizons are untested.
pub const RESOLUTION_HORIZON_DAYS: u64 = 7;

// ─── Prediction ──────────────────────────────────────────────────────────────

/// A validated prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub specific_date: NaiveDate,
    pub future_date: Option<NaiveDate>,
    pub direction: Direction,
    /// Percentage move as reported (`"2.50%"`, `"N/A"`); see [`Prediction::pct_value`].
    pub pct_change: String,
    pub confidence: String,
    pub was_correct: Option<bool>,
    pub sequence: SequenceData,
}

impl Prediction {
    /// Synthetic record standing in for a prediction that could not be fetched,
    /// so rendering code always has the same shape to branch on.
    pub fn placeholder(date: NaiveDate) -> Self {
        Self {
            specific_date: date,
            future_date: None,
            direction: Direction::Error,
            pct_change: NOT_AVAILABLE.to_string(),
            confidence: NOT_AVAILABLE.to_string(),
            was_correct: Some(false),
            sequence: SequenceData::default(),
        }
    }

    /// Parsed `pct_change`.
    pub fn pct_value(&self) -> Result<f64, ParseError> {
        parse_pct(&self.pct_change)
    }

    pub fn is_error(&self) -> bool {
        matches!(self.direction, Direction::Error)
    }

    /// Display-level resolution of `was_correct` as of `today`, dated by
    /// `specific_date`.
    pub fn verdict(&self, today: NaiveDate) -> Verdict {
        self.verdict_at(self.specific_date, today)
    }

    /// Like [`Prediction::verdict`], but the horizon check uses `key`, the
    /// date the prediction is listed under on a board.
    pub fn verdict_at(&self, key: NaiveDate, today: NaiveDate) -> Verdict {
        match self.was_correct {
            None => Verdict::Unresolved,
            Some(_) if Some(key) == still_calculating_date(today) => Verdict::StillCalculating,
            Some(true) => Verdict::Correct,
            Some(false) => Verdict::Incorrect,
        }
    }
}

/// The date whose verdict is still being computed as of `today`.
pub fn still_calculating_date(today: NaiveDate) -> Option<NaiveDate> {
    today.checked_sub_days(Days::new(RESOLUTION_HORIZON_DAYS))
}

/// Today's date in UTC, the calendar the backend keys predictions by.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

// ─── Verdict ─────────────────────────────────────────────────────────────────

/// Whether a past prediction's call matched the move that followed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Correct,
    Incorrect,
    /// Backend has not resolved the outcome yet.
    Unresolved,
    /// Backend reported a value, but the outcome window closes today.
    StillCalculating,
}

impl Verdict {
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Correct => "Yes",
            Verdict::Incorrect => "No",
            Verdict::Unresolved => NOT_AVAILABLE,
            Verdict::StillCalculating => "Still Calculating",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum ValidationError {
    Multiple(String, Vec<ValidationError>),
    InvalidSpecificDate(String),
    InvalidFutureDate(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Multiple(date, errors) => {
                writeln!(f, "Prediction validation errors ({date}):")?;
                for err in errors {
                    writeln!(f, "  - {}", err)?;
                }
                Ok(())
            }
            ValidationError::InvalidSpecificDate(raw) => {
                write!(f, "Invalid specific date: {:?}", raw)
            }
            ValidationError::InvalidFutureDate(raw) => write!(f, "Invalid future date: {:?}", raw),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn resolved(day: NaiveDate, was_correct: Option<bool>) -> Prediction {
        Prediction {
            specific_date: day,
            future_date: day.checked_add_days(Days::new(7)),
            direction: Direction::Up,
            pct_change: "1.00%".to_string(),
            confidence: "0.6".to_string(),
            was_correct,
            sequence: SequenceData::default(),
        }
    }

    #[test]
    fn test_placeholder_shape() {
        let p = Prediction::placeholder(date(2024, 1, 1));
        assert_eq!(p.direction, Direction::Error);
        assert_eq!(p.was_correct, Some(false));
        assert_eq!(p.specific_date.to_string(), "2024-01-01");
        assert_eq!(p.pct_change, "N/A");
        assert_eq!(p.confidence, "N/A");
        assert!(p.future_date.is_none());
        assert!(p.sequence.is_empty());
        assert!(p.is_error());
        assert!(p.pct_value().is_err());
    }

    #[test]
    fn test_verdict_still_calculating_exactly_horizon_days_ago() {
        let today = date(2024, 1, 15);
        assert_eq!(
            resolved(date(2024, 1, 8), Some(true)).verdict(today),
            Verdict::StillCalculating
        );
        assert_eq!(
            resolved(date(2024, 1, 8), Some(false)).verdict(today),
            Verdict::StillCalculating
        );
        assert_eq!(
            resolved(date(2024, 1, 7), Some(true)).verdict(today),
            Verdict::Correct
        );
        assert_eq!(
            resolved(date(2024, 1, 9), Some(false)).verdict(today),
            Verdict::Incorrect
        );
    }

    #[test]
    fn test_verdict_null_is_unresolved_even_on_horizon_day() {
        let today = date(2024, 1, 15);
        let p = resolved(date(2024, 1, 8), None);
        assert_eq!(p.verdict(today), Verdict::Unresolved);
        assert_eq!(p.verdict(today).label(), "N/A");
    }

    #[test]
    fn test_verdict_at_uses_board_key() {
        let today = date(2024, 1, 15);
        let p = resolved(date(2024, 1, 9), Some(true));
        assert_eq!(p.verdict(today), Verdict::Correct);
        assert_eq!(p.verdict_at(date(2024, 1, 8), today), Verdict::StillCalculating);
        assert_eq!(p.verdict_at(date(2024, 1, 7), today), Verdict::Correct);
    }

    #[test]
    fn test_verdict_labels() {
        assert_eq!(Verdict::Correct.to_string(), "Yes");
        assert_eq!(Verdict::Incorrect.to_string(), "No");
        assert_eq!(Verdict::StillCalculating.to_string(), "Still Calculating");
    }
}
