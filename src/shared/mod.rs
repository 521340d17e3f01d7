//! Shared newtypes and parsing helpers used across all domain modules.
//!
//! The enums here serialize/deserialize identically to the raw strings the
//! backend sends, so they can be used directly in wire types.

pub mod fmt;
pub mod serde_util;

use crate::error::ParseError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ─── Timeframe ───────────────────────────────────────────────────────────────

/// Candle bucket granularity of one model input sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    Hourly,
    Fourhourly,
    Daily,
    Weekly,
    Monthly,
}

impl Timeframe {
    /// All timeframes, finest first. This is also the scan order used when
    /// sniffing which indicators a sequence carries.
    pub const ALL: [Timeframe; 5] = [
        Timeframe::Hourly,
        Timeframe::Fourhourly,
        Timeframe::Daily,
        Timeframe::Weekly,
        Timeframe::Monthly,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Fourhourly => "fourhourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }

    /// Capitalised label for section headers.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Hourly => "Hourly",
            Self::Fourhourly => "Fourhourly",
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
        }
    }
}

impl std::fmt::Display for Timeframe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Timeframe {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Timeframe::ALL
            .into_iter()
            .find(|tf| tf.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown timeframe: {}", s))
    }
}

// ─── Direction ───────────────────────────────────────────────────────────────

/// Directional call of a prediction.
///
/// Serializes as the backend label (`"Up"`, `"No Future Data"`, ...). Labels
/// the backend may add later are kept verbatim in `Unrecognized`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Neutral,
    NoFutureData,
    Error,
    Unrecognized(String),
}

impl Direction {
    pub fn as_str(&self) -> &str {
        match self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Neutral => "Neutral",
            Direction::NoFutureData => "No Future Data",
            Direction::Error => "Error",
            Direction::Unrecognized(s) => s,
        }
    }

    pub fn from_label(s: &str) -> Self {
        match s {
            "Up" => Direction::Up,
            "Down" => Direction::Down,
            "Neutral" => Direction::Neutral,
            "No Future Data" => Direction::NoFutureData,
            "Error" => Direction::Error,
            other => Direction::Unrecognized(other.to_string()),
        }
    }

    pub fn is_neutral(&self) -> bool {
        matches!(self, Direction::Neutral)
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Direction {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Direction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Direction::from_label(&s))
    }
}

// ─── Parsing ─────────────────────────────────────────────────────────────────

/// Literal the backend uses for "no value".
pub const NOT_AVAILABLE: &str = "N/A";

/// Parse a backend percentage string (`"-2.35%"`, `"+1.2%"`, `"4"`) into a number.
///
/// A single trailing `%` is stripped. `"N/A"` and anything else that is not a
/// finite number is an error.
pub fn parse_pct(raw: &str) -> Result<f64, ParseError> {
    let trimmed = raw.trim();
    let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim_end();
    number
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ParseError::InvalidPercentage(raw.to_string()))
}

/// Parse a `YYYY-MM-DD` date. A trailing time component (`2024-01-01T00:00:00`,
/// `2024-01-01 00:00:00`) is ignored.
pub fn parse_date(raw: &str) -> Result<NaiveDate, ParseError> {
    let trimmed = raw.trim();
    let day = trimmed
        .split(['T', ' '])
        .next()
        .unwrap_or(trimmed);
    NaiveDate::parse_from_str(day, "%Y-%m-%d")
        .map_err(|_| ParseError::InvalidDate(raw.to_string()))
}

/// Parse a candle timestamp. Naive timestamps are taken as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_timestamp_formats() {
        let expected = Utc.with_ymd_and_hms(2024, 1, 3, 12, 30, 0).unwrap();
        assert_eq!(parse_timestamp("2024-01-03T12:30:00Z"), Some(expected));
        assert_eq!(parse_timestamp("2024-01-03T14:30:00+02:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-01-03T12:30:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-01-03 12:30:00.000"), Some(expected));
        assert_eq!(
            parse_timestamp("2024-01-03"),
            Some(Utc.with_ymd_and_hms(2024, 1, 3, 0, 0, 0).unwrap())
        );
        assert_eq!(parse_timestamp("yesterday"), None);
    }

    #[test]
    fn test_parse_pct_signed_and_unsigned() {
        assert_eq!(parse_pct("5%").unwrap(), 5.0);
        assert_eq!(parse_pct("-2.5%").unwrap(), -2.5);
        assert_eq!(parse_pct("+1.25%").unwrap(), 1.25);
        assert_eq!(parse_pct(" 3.0 % ").unwrap(), 3.0);
        assert_eq!(parse_pct("7").unwrap(), 7.0);
    }

    #[test]
    fn test_parse_pct_rejects_not_available() {
        assert_eq!(
            parse_pct("N/A"),
            Err(ParseError::InvalidPercentage("N/A".to_string()))
        );
        assert!(parse_pct("").is_err());
        assert!(parse_pct("%").is_err());
        assert!(parse_pct("inf%").is_err());
        assert!(parse_pct("NaN").is_err());
    }

    #[test]
    fn test_parse_date_variants() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        assert_eq!(parse_date("2024-01-03").unwrap(), expected);
        assert_eq!(parse_date("2024-01-03T12:00:00").unwrap(), expected);
        assert_eq!(parse_date("2024-01-03 12:00:00").unwrap(), expected);
        assert!(parse_date("").is_err());
        assert!(parse_date("01/03/2024").is_err());
    }

    #[test]
    fn test_direction_serde() {
        let up: Direction = serde_json::from_str("\"Up\"").unwrap();
        assert_eq!(up, Direction::Up);
        let nfd: Direction = serde_json::from_str("\"No Future Data\"").unwrap();
        assert_eq!(nfd, Direction::NoFutureData);
        let other: Direction = serde_json::from_str("\"Sideways\"").unwrap();
        assert_eq!(other, Direction::Unrecognized("Sideways".to_string()));
        assert_eq!(serde_json::to_string(&Direction::Error).unwrap(), "\"Error\"");
    }

    #[test]
    fn test_timeframe_serde_and_from_str() {
        let tf: Timeframe = serde_json::from_str("\"fourhourly\"").unwrap();
        assert_eq!(tf, Timeframe::Fourhourly);
        assert_eq!("Weekly".parse::<Timeframe>().unwrap(), Timeframe::Weekly);
        assert!("minutely".parse::<Timeframe>().is_err());
    }
}
