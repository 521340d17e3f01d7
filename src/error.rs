//! Unified error types.

use thiserror::Error;

/// Top-level dashboard error.
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// HTTP-layer errors. Any of these is a failed fetch; none are retried.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Timeout")]
    Timeout,
}

/// Value-level parse failures. Aggregation skips these instead of failing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid percentage: {0:?}")]
    InvalidPercentage(String),

    #[error("Invalid date: {0:?}")]
    InvalidDate(String),
}

/// Settings store errors.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed settings: {0}")]
    Serde(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_wraps_into_dashboard_error() {
        let err: DashboardError = ParseError::InvalidPercentage("N/A".to_string()).into();
        assert!(matches!(err, DashboardError::Parse(_)));
        assert_eq!(err.to_string(), "Parse error: Invalid percentage: \"N/A\"");
    }

    #[test]
    fn test_http_error_display() {
        let err = HttpError::ServerError {
            status: 502,
            body: "bad gateway".to_string(),
        };
        assert_eq!(err.to_string(), "Server error 502: bad gateway");
        let err: DashboardError = HttpError::NotFound("/predict/2024-01-01".to_string()).into();
        assert_eq!(err.to_string(), "HTTP error: Not found: /predict/2024-01-01");
    }
}
