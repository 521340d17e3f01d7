//! Presentation view models. Plain data a renderer (terminal, web, etc.) can
//! lay out without re-deriving labels or colours.

pub mod calculator;
pub mod card;

pub use calculator::CalculatorSummary;
pub use card::PredictionCard;

use crate::domain::prediction::Verdict;
use crate::shared::Direction;
use serde::Serialize;

/// Colour intent for a rendered value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Positive,
    Negative,
    Caution,
    Muted,
}

impl Tone {
    pub fn for_direction(direction: &Direction) -> Self {
        match direction {
            Direction::Up => Tone::Positive,
            Direction::Down | Direction::Error => Tone::Negative,
            Direction::Neutral => Tone::Caution,
            Direction::NoFutureData | Direction::Unrecognized(_) => Tone::Muted,
        }
    }

    pub fn for_verdict(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Correct => Tone::Positive,
            Verdict::Incorrect => Tone::Negative,
            Verdict::StillCalculating => Tone::Caution,
            Verdict::Unresolved => Tone::Muted,
        }
    }

    /// Positive above zero, negative below, caution for zero or no value.
    pub fn for_pct(value: Option<f64>) -> Self {
        match value {
            Some(v) if v > 0.0 => Tone::Positive,
            Some(v) if v < 0.0 => Tone::Negative,
            _ => Tone::Caution,
        }
    }
}
