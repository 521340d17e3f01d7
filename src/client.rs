//! High-level client — `DashboardClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the loaded settings, and accessor methods.

use crate::config::DashboardConfig;
use crate::domain::admin::client::Admin;
use crate::domain::prediction::client::Predictions;
use crate::error::DashboardError;
use crate::http::PredictionsHttp;
use crate::settings::client::SettingsClient;
use crate::settings::{JsonFileStore, MemoryStore, Settings, SettingsStore};

use async_lock::RwLock;
use std::sync::Arc;
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::admin::client::Admin as AdminClient;
pub use crate::domain::prediction::client::Predictions as PredictionsClient;
pub use crate::settings::client::SettingsClient as SettingsSubClient;

/// The primary entry point for the dashboard.
///
/// Provides nested sub-client accessors for each domain:
/// `client.predictions()`, `client.admin()`, `client.settings()`.
/// Clones share the same settings.
#[derive(Clone)]
pub struct DashboardClient {
    pub(crate) http: PredictionsHttp,
    /// Preferences loaded at build time; every change is written through.
    pub(crate) settings: Arc<RwLock<Settings>>,
    pub(crate) settings_store: Arc<dyn SettingsStore>,
    /// Password the gate expects, if any.
    pub(crate) gate_password: Option<String>,
    pub(crate) refresh_interval: Duration,
}

impl DashboardClient {
    pub fn builder() -> DashboardClientBuilder {
        DashboardClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn predictions(&self) -> Predictions<'_> {
        Predictions { client: self }
    }

    pub fn admin(&self) -> Admin<'_> {
        Admin { client: self }
    }

    pub fn settings(&self) -> SettingsClient<'_> {
        SettingsClient { client: self }
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Interval used by callers of [`Predictions::watch`] that have no
    /// preference of their own.
    pub fn refresh_interval(&self) -> Duration {
        self.refresh_interval
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct DashboardClientBuilder {
    base_url: String,
    timeout: Duration,
    refresh_interval: Duration,
    gate_password: Option<String>,
    settings_store: Option<Arc<dyn SettingsStore>>,
}

impl Default for DashboardClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            timeout: crate::network::DEFAULT_REQUEST_TIMEOUT,
            refresh_interval: crate::network::DEFAULT_REFRESH_INTERVAL,
            gate_password: None,
            settings_store: None,
        }
    }
}

impl DashboardClientBuilder {
    /// Start from environment-derived configuration. Settings persist to
    /// `config.settings_path`.
    pub fn from_config(config: &DashboardConfig) -> Self {
        Self {
            base_url: config.api_url.clone(),
            refresh_interval: config.refresh_interval,
            gate_password: config.gate_password.clone(),
            settings_store: Some(Arc::new(JsonFileStore::new(config.settings_path.clone()))),
            ..Self::default()
        }
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn refresh_interval(mut self, interval: Duration) -> Self {
        self.refresh_interval = interval;
        self
    }

    pub fn gate_password(mut self, password: Option<&str>) -> Self {
        self.gate_password = password.map(str::to_string);
        self
    }

    /// Where preferences are loaded from and saved to. Defaults to an
    /// in-memory store.
    pub fn settings_store(mut self, store: impl SettingsStore + 'static) -> Self {
        self.settings_store = Some(Arc::new(store));
        self
    }

    pub fn build(self) -> Result<DashboardClient, DashboardError> {
        if self.refresh_interval.is_zero() {
            return Err(DashboardError::Config(
                "refresh interval must be greater than zero".to_string(),
            ));
        }

        let store: Arc<dyn SettingsStore> = self
            .settings_store
            .unwrap_or_else(|| Arc::new(MemoryStore::default()));
        let settings = store.load().unwrap_or_else(|e| {
            tracing::warn!("Could not load settings, using defaults: {}", e);
            Settings::default()
        });

        Ok(DashboardClient {
            http: PredictionsHttp::new(&self.base_url, self.timeout)?,
            settings: Arc::new(RwLock::new(settings)),
            settings_store: store,
            gate_password: self.gate_password,
            refresh_interval: self.refresh_interval,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sequence::Indicator;

    #[test]
    fn test_builder_defaults() {
        let client = DashboardClient::builder().build().unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.refresh_interval(), Duration::from_secs(3600));
    }

    #[test]
    fn test_builder_rejects_zero_interval() {
        let err = DashboardClient::builder()
            .refresh_interval(Duration::ZERO)
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, DashboardError::Config(_)));
    }

    #[test]
    fn test_builder_from_config() {
        let config = DashboardConfig {
            api_url: "http://example.test/".to_string(),
            gate_password: Some("pw".to_string()),
            settings_path: std::env::temp_dir().join("prediction-dashboard-builder-unused.json"),
            refresh_interval: Duration::from_secs(90),
        };
        let client = DashboardClientBuilder::from_config(&config).build().unwrap();
        assert_eq!(client.base_url(), "http://example.test");
        assert_eq!(client.refresh_interval(), Duration::from_secs(90));
        assert_eq!(client.gate_password.as_deref(), Some("pw"));
    }

    #[tokio::test]
    async fn test_settings_write_through_and_shared_by_clones() {
        let store = Arc::new(MemoryStore::default());
        let client = DashboardClient {
            settings_store: store.clone(),
            ..DashboardClient::builder().build().unwrap()
        };
        let other = client.clone();

        assert!(client.settings().toggle_indicator(Indicator::Rsi14).await.unwrap());
        assert!(other.settings().selected_indicators().await.contains(Indicator::Rsi14));
        assert!(store.load().unwrap().selected_indicators.contains(Indicator::Rsi14));

        assert!(!other.settings().toggle_indicator(Indicator::Rsi14).await.unwrap());
        assert!(client.settings().selected_indicators().await.is_empty());
    }

    #[tokio::test]
    async fn test_gate() {
        let open = DashboardClient::builder().build().unwrap();
        assert!(open.settings().is_unlocked().await);

        let gated = DashboardClient::builder()
            .gate_password(Some("secret"))
            .build()
            .unwrap();
        assert!(!gated.settings().is_unlocked().await);
        assert!(!gated.settings().unlock("guess").await.unwrap());
        assert!(gated.settings().unlock("secret").await.unwrap());
        assert!(gated.settings().is_unlocked().await);
        gated.settings().lock().await.unwrap();
        assert!(!gated.settings().is_unlocked().await);
    }
}
