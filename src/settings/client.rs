//! Settings sub-client — reads and updates the preferences held by
//! [`DashboardClient`], writing each change through to the store.

use crate::client::DashboardClient;
use crate::domain::sequence::{Indicator, IndicatorSelection};
use crate::error::DashboardError;
use crate::settings::Settings;

/// Sub-client for persisted UI preferences.
pub struct SettingsClient<'a> {
    pub(crate) client: &'a DashboardClient,
}

impl<'a> SettingsClient<'a> {
    /// Snapshot of the current settings.
    pub async fn current(&self) -> Settings {
        self.client.settings.read().await.clone()
    }

    pub async fn selected_indicators(&self) -> IndicatorSelection {
        self.client.settings.read().await.selected_indicators.clone()
    }

    /// Toggle one indicator. Returns whether it is selected afterwards.
    pub async fn toggle_indicator(&self, indicator: Indicator) -> Result<bool, DashboardError> {
        self.update(|s| s.selected_indicators.toggle(indicator)).await
    }

    pub async fn set_indicators(&self, selection: IndicatorSelection) -> Result<(), DashboardError> {
        self.update(|s| s.selected_indicators = selection).await
    }

    pub async fn clear_indicators(&self) -> Result<(), DashboardError> {
        self.update(|s| s.selected_indicators.clear()).await
    }

    /// Remember `password` and report whether it opens the configured gate.
    pub async fn unlock(&self, password: &str) -> Result<bool, DashboardError> {
        let expected = self.client.gate_password.as_deref();
        self.update(|s| {
            s.gate_password = Some(password.to_string());
            s.unlocks(expected)
        })
        .await
    }

    /// Forget the stored password.
    pub async fn lock(&self) -> Result<(), DashboardError> {
        self.update(|s| s.gate_password = None).await
    }

    pub async fn is_unlocked(&self) -> bool {
        self.client
            .settings
            .read()
            .await
            .unlocks(self.client.gate_password.as_deref())
    }

    /// Re-read settings from the store, discarding in-memory changes.
    pub async fn reload(&self) -> Result<Settings, DashboardError> {
        let loaded = self.client.settings_store.load()?;
        *self.client.settings.write().await = loaded.clone();
        Ok(loaded)
    }

    /// Apply `f` to a copy and swap it in only once the store accepted it.
    async fn update<R>(&self, f: impl FnOnce(&mut Settings) -> R) -> Result<R, DashboardError> {
        let mut guard = self.client.settings.write().await;
        let mut next = guard.clone();
        let out = f(&mut next);
        self.client.settings_store.save(&next)?;
        *guard = next;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use crate::client::DashboardClient;
    use crate::domain::sequence::Indicator;
    use crate::error::{DashboardError, SettingsError};
    use crate::settings::{Settings, SettingsStore};
    use std::io;
    use std::sync::Arc;

    struct ReadOnlyStore;

    impl SettingsStore for ReadOnlyStore {
        fn load(&self) -> Result<Settings, SettingsError> {
            Ok(Settings::default())
        }

        fn save(&self, _settings: &Settings) -> Result<(), SettingsError> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full").into())
        }
    }

    fn gated_client() -> DashboardClient {
        DashboardClient {
            settings_store: Arc::new(ReadOnlyStore),
            ..DashboardClient::builder()
                .gate_password(Some("pw"))
                .build()
                .unwrap()
        }
    }

    #[tokio::test]
    async fn test_failed_save_leaves_settings_unchanged() {
        let client = gated_client();

        let err = client.settings().unlock("pw").await.unwrap_err();
        assert!(matches!(err, DashboardError::Settings(SettingsError::Io(_))));
        assert!(!client.settings().is_unlocked().await);
        assert_eq!(client.settings().current().await.gate_password, None);

        assert!(client.settings().toggle_indicator(Indicator::Adx).await.is_err());
        assert!(client.settings().selected_indicators().await.is_empty());
    }
}
