//! Indicator — the declared set of precomputed technical indicator columns.
//!
//! Replaces sniffing candle keys at runtime: wire candles carry exactly these
//! optional columns and everything downstream addresses them by enum.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A technical indicator column carried on each candle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Indicator {
    Adx,
    #[serde(rename = "atr_14")]
    Atr14,
    BbBbh,
    BbBbl,
    BbBbm,
    #[serde(rename = "ema_12")]
    Ema12,
    #[serde(rename = "ema_26")]
    Ema26,
    Macd,
    MacdDiff,
    Obv,
    Psar,
    #[serde(rename = "roc_12")]
    Roc12,
    #[serde(rename = "rsi_14")]
    Rsi14,
    Sentiment,
}

impl Indicator {
    /// Declaration order; the order indicators are offered for selection.
    pub const ALL: [Indicator; 14] = [
        Indicator::Adx,
        Indicator::Atr14,
        Indicator::BbBbh,
        Indicator::BbBbl,
        Indicator::BbBbm,
        Indicator::Ema12,
        Indicator::Ema26,
        Indicator::Macd,
        Indicator::MacdDiff,
        Indicator::Obv,
        Indicator::Psar,
        Indicator::Roc12,
        Indicator::Rsi14,
        Indicator::Sentiment,
    ];

    /// Backend field name.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Adx => "adx",
            Self::Atr14 => "atr_14",
            Self::BbBbh => "bb_bbh",
            Self::BbBbl => "bb_bbl",
            Self::BbBbm => "bb_bbm",
            Self::Ema12 => "ema_12",
            Self::Ema26 => "ema_26",
            Self::Macd => "macd",
            Self::MacdDiff => "macd_diff",
            Self::Obv => "obv",
            Self::Psar => "psar",
            Self::Roc12 => "roc_12",
            Self::Rsi14 => "rsi_14",
            Self::Sentiment => "sentiment",
        }
    }

    /// Display name, also the column key in prepared chart rows.
    pub fn name(&self) -> String {
        self.key().to_ascii_uppercase()
    }

    /// Line colour as a hex string.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Ema12 => "#FF0000",
            Self::Ema26 => "#0000FF",
            Self::Rsi14 => "#00FF00",
            Self::Macd => "#FFA500",
            Self::Adx => "#800080",
            Self::Atr14 => "#008080",
            Self::BbBbh => "#FFC0CB",
            Self::BbBbl => "#FFD700",
            Self::BbBbm => "#A52A2A",
            Self::Obv => "#00FFFF",
            Self::Psar => "#808080",
            Self::Roc12 => "#FF00FF",
            Self::Sentiment | Self::MacdDiff => "#000000",
        }
    }

    /// Identifier of the secondary y-axis this indicator is drawn against.
    pub fn axis_id(&self) -> String {
        format!("right-{}", self.key())
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Indicator {
    type Err = String;

    /// Accepts the field key or display name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Indicator::ALL
            .into_iter()
            .find(|ind| ind.key().eq_ignore_ascii_case(needle))
            .ok_or_else(|| format!("unknown indicator: {}", s))
    }
}

// ─── Selection ───────────────────────────────────────────────────────────────

/// Indicators the user picked for charting, in the order they were picked.
///
/// A UI preference only; losing it has no effect on correctness.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IndicatorSelection(Vec<Indicator>);

impl IndicatorSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove the indicator if selected, otherwise append it.
    /// Returns whether it is selected afterwards.
    pub fn toggle(&mut self, indicator: Indicator) -> bool {
        if let Some(pos) = self.0.iter().position(|i| *i == indicator) {
            self.0.remove(pos);
            false
        } else {
            self.0.push(indicator);
            true
        }
    }

    pub fn contains(&self, indicator: Indicator) -> bool {
        self.0.contains(&indicator)
    }

    pub fn iter(&self) -> impl Iterator<Item = Indicator> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[Indicator] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl FromIterator<Indicator> for IndicatorSelection {
    fn from_iter<I: IntoIterator<Item = Indicator>>(iter: I) -> Self {
        let mut selection = IndicatorSelection::new();
        for indicator in iter {
            if !selection.contains(indicator) {
                selection.0.push(indicator);
            }
        }
        selection
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_key_serde_matches_backend_fields() {
        for ind in Indicator::ALL {
            let json = serde_json::to_string(&ind).unwrap();
            assert_eq!(json, format!("\"{}\"", ind.key()));
            let back: Indicator = serde_json::from_str(&json).unwrap();
            assert_eq!(back, ind);
        }
    }

    #[test]
    fn test_indicator_from_str_is_case_insensitive() {
        assert_eq!("EMA_12".parse::<Indicator>().unwrap(), Indicator::Ema12);
        assert_eq!("macd_diff".parse::<Indicator>().unwrap(), Indicator::MacdDiff);
        assert!("close".parse::<Indicator>().is_err());
        assert!("volume".parse::<Indicator>().is_err());
    }

    #[test]
    fn test_indicator_name_and_axis() {
        assert_eq!(Indicator::Rsi14.name(), "RSI_14");
        assert_eq!(Indicator::Rsi14.axis_id(), "right-rsi_14");
        assert_eq!(Indicator::Ema12.color(), "#FF0000");
    }

    #[test]
    fn test_toggle_twice_restores_selection() {
        let mut sel = IndicatorSelection::new();
        assert!(sel.toggle(Indicator::Macd));
        assert!(sel.toggle(Indicator::Rsi14));
        assert_eq!(sel.as_slice(), &[Indicator::Macd, Indicator::Rsi14]);
        assert!(!sel.toggle(Indicator::Macd));
        assert_eq!(sel.as_slice(), &[Indicator::Rsi14]);
        assert!(sel.toggle(Indicator::Macd));
        assert_eq!(sel.as_slice(), &[Indicator::Rsi14, Indicator::Macd]);
    }

    #[test]
    fn test_selection_serializes_as_key_list() {
        let sel: IndicatorSelection = [Indicator::Ema26, Indicator::Ema26, Indicator::Obv]
            .into_iter()
            .collect();
        assert_eq!(sel.len(), 2);
        let json = serde_json::to_string(&sel).unwrap();
        assert_eq!(json, r#"["ema_26","obv"]"#);
        let back: IndicatorSelection = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sel);
    }
}
