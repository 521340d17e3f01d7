//! UI preferences that outlive a session: the chart indicator selection and
//! the password typed into the gate.
//!
//! Settings are loaded once through a [`SettingsStore`] and written back on
//! every change. A missing or unreadable store never blocks the dashboard;
//! losing preferences has no correctness impact.

#[cfg(feature = "http")]
pub mod client;

use crate::domain::sequence::IndicatorSelection;
use crate::error::SettingsError;

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Default file name used by [`JsonFileStore`] when no path is configured.
pub const DEFAULT_SETTINGS_FILE: &str = "dashboard-settings.json";

/// Persisted preferences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    #[serde(rename = "selectedIndicators")]
    pub selected_indicators: IndicatorSelection,
    /// Last password entered at the gate. Stored in clear text.
    #[serde(rename = "password", skip_serializing_if = "Option::is_none")]
    pub gate_password: Option<String>,
}

impl Settings {
    /// Whether the stored password opens a gate configured with `expected`.
    ///
    /// No configured password means the gate is open. This is a convenience
    /// screen, not access control.
    pub fn unlocks(&self, expected: Option<&str>) -> bool {
        match expected {
            None => true,
            Some(expected) => self.gate_password.as_deref() == Some(expected),
        }
    }
}

// ─── Stores ──────────────────────────────────────────────────────────────────

/// Where [`Settings`] live between sessions.
pub trait SettingsStore: Send + Sync {
    /// Load settings. Implementations fall back to defaults for absent or
    /// malformed data and only fail on I/O they cannot recover from.
    fn load(&self) -> Result<Settings, SettingsError>;

    fn save(&self, settings: &Settings) -> Result<(), SettingsError>;
}

/// JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for JsonFileStore {
    fn load(&self) -> Result<Settings, SettingsError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Settings::default()),
            Err(e) => return Err(e.into()),
        };
        match serde_json::from_str(&raw) {
            Ok(settings) => Ok(settings),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    "Ignoring malformed settings file: {}",
                    e
                );
                Ok(Settings::default())
            }
        }
    }

    fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// Process-local store. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Settings>,
}

impl MemoryStore {
    pub fn new(initial: Settings) -> Self {
        Self {
            inner: Mutex::new(initial),
        }
    }
}

impl SettingsStore for MemoryStore {
    fn load(&self) -> Result<Settings, SettingsError> {
        Ok(self.inner.lock().map(|s| s.clone()).unwrap_or_default())
    }

    fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        if let Ok(mut inner) = self.inner.lock() {
            *inner = settings.clone();
        }
        Ok(())
    }
}
