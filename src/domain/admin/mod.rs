//! Admin domain — asking the backend to pull fresh market data.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric status the backend uses for "refresh triggered".
pub const SUCCESS_CODE: i64 = 200;

/// String statuses treated as success (compared case-insensitively).
pub const SUCCESS_MARKERS: [&str; 3] = ["ok", "success", "done"];

/// Opaque outcome of a `/latest_data` refresh trigger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefreshStatus {
    pub raw: serde_json::Value,
}

impl RefreshStatus {
    /// The status code or text, unwrapping `{"status": ...}` objects.
    pub fn status(&self) -> &serde_json::Value {
        match &self.raw {
            serde_json::Value::Object(map) => map.get("status").unwrap_or(&self.raw),
            other => other,
        }
    }

    /// Whether the payload matches one of the success markers.
    pub fn is_success(&self) -> bool {
        match self.status() {
            serde_json::Value::Number(n) => n.as_i64() == Some(SUCCESS_CODE),
            serde_json::Value::String(s) => {
                let s = s.trim();
                SUCCESS_MARKERS.iter().any(|m| s.eq_ignore_ascii_case(m))
                    || s.parse::<i64>().ok() == Some(SUCCESS_CODE)
            }
            serde_json::Value::Bool(b) => *b,
            _ => false,
        }
    }
}

impl From<wire::LatestDataResponse> for RefreshStatus {
    fn from(resp: wire::LatestDataResponse) -> Self {
        Self { raw: resp.0 }
    }
}

impl fmt::Display for RefreshStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status() {
            serde_json::Value::String(s) => write!(f, "{}", s),
            other => write!(f, "{}", other),
        }
    }
}
