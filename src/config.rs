//! Runtime configuration read from the environment.

use crate::network::{DEFAULT_API_URL, DEFAULT_REFRESH_INTERVAL};
use crate::settings::DEFAULT_SETTINGS_FILE;

use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const ENV_API_URL: &str = "PREDICTIONS_API_URL";
pub const ENV_PASSWORD: &str = "DASHBOARD_PASSWORD";
pub const ENV_SETTINGS_PATH: &str = "DASHBOARD_SETTINGS_PATH";
pub const ENV_REFRESH_SECS: &str = "DASHBOARD_REFRESH_SECS";

/// Dashboard configuration derived from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub api_url: String,
    /// Password the gate expects. Unset or empty ⇒ gate disabled.
    pub gate_password: Option<String>,
    pub settings_path: PathBuf,
    pub refresh_interval: Duration,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl DashboardConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from any variable source. Blank or unparsable values fall back
    /// to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let str_var = |name: &str| {
            lookup(name)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let refresh_secs = str_var(ENV_REFRESH_SECS)
            .and_then(|s| s.parse::<u64>().ok())
            .filter(|secs| *secs > 0);

        Self {
            api_url: str_var(ENV_API_URL).unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            gate_password: str_var(ENV_PASSWORD),
            settings_path: str_var(ENV_SETTINGS_PATH)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE)),
            refresh_interval: refresh_secs
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_REFRESH_INTERVAL),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> DashboardConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        DashboardConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let cfg = config(&[]);
        assert_eq!(cfg.api_url, "http://localhost:8000");
        assert_eq!(cfg.gate_password, None);
        assert_eq!(cfg.settings_path, PathBuf::from("dashboard-settings.json"));
        assert_eq!(cfg.refresh_interval, Duration::from_secs(3600));
        assert_eq!(cfg, DashboardConfig::default());
    }

    #[test]
    fn test_values_are_trimmed() {
        let cfg = config(&[
            (ENV_API_URL, "  http://predict.internal:9000/ "),
            (ENV_PASSWORD, " hunter2 "),
            (ENV_SETTINGS_PATH, "/tmp/dash.json"),
            (ENV_REFRESH_SECS, " 120 "),
        ]);
        assert_eq!(cfg.api_url, "http://predict.internal:9000/");
        assert_eq!(cfg.gate_password.as_deref(), Some("hunter2"));
        assert_eq!(cfg.settings_path, PathBuf::from("/tmp/dash.json"));
        assert_eq!(cfg.refresh_interval, Duration::from_secs(120));
    }

    #[test]
    fn test_blank_and_invalid_fall_back() {
        let cfg = config(&[
            (ENV_PASSWORD, "   "),
            (ENV_REFRESH_SECS, "soon"),
        ]);
        assert_eq!(cfg.gate_password, None);
        assert_eq!(cfg.refresh_interval, DEFAULT_REFRESH_INTERVAL);

        let cfg = config(&[(ENV_REFRESH_SECS, "0")]);
        assert_eq!(cfg.refresh_interval, DEFAULT_REFRESH_INTERVAL);
    }
}
