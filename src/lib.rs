//! # Prediction Dashboard
//!
//! Client library for a dashboard of weekly market-direction predictions:
//! fetches pre-computed predictions from the prediction backend, aggregates
//! their percentage moves, estimates leveraged profit, and prepares candle
//! and indicator series for charting.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core** — Shared types, domain models, analytics, view models (always available, WASM-safe)
//! 2. **Settings** — Persisted UI preferences behind a `SettingsStore`
//! 3. **HTTP API** — `PredictionsHttp`, one method per backend endpoint
//! 4. **High-Level Client** — `DashboardClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use prediction_dashboard::prelude::*;
//!
//! let client = DashboardClient::builder()
//!     .base_url("http://localhost:8000")
//!     .build()?;
//!
//! let board = client.predictions().all().await?;
//! let avg = board.average_pct_change();
//! let estimate = estimate_profit(1000.0, 2.0, avg);
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared enums, parsers and formatting helpers used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Pure calculations over predictions: average move, profit estimate.
pub mod analytics;

/// Presentation view models.
pub mod view;

/// Unified error types.
pub mod error;

/// Network URL and timing constants.
pub mod network;

/// Environment-derived configuration.
pub mod config;

// ── Layer 2: Settings ────────────────────────────────────────────────────────

/// Persisted preferences: indicator selection, gate password.
pub mod settings;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// HTTP client for the prediction backend.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `DashboardClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared types
    pub use crate::shared::{Direction, Timeframe, NOT_AVAILABLE};

    // Domain types — prediction
    pub use crate::domain::prediction::{
        today_utc, Prediction, PredictionBoard, ValidationError, Verdict,
    };

    // Domain types — sequence + chart
    pub use crate::domain::sequence::{
        axis_domain, prepare_chart_data, prepare_chart_data_local, AxisDomain, Candle,
        ChartField, ChartPoint, ChartSeries, Indicator, IndicatorSelection, SequenceData,
    };

    // Domain types — admin
    pub use crate::domain::admin::RefreshStatus;

    // Analytics
    pub use crate::analytics::{average_abs_pct_change, estimate_profit, ProfitEstimate, ProfitInput};

    // View models
    pub use crate::view::{CalculatorSummary, PredictionCard, Tone};

    // Settings + config
    pub use crate::config::DashboardConfig;
    pub use crate::settings::{JsonFileStore, MemoryStore, Settings, SettingsStore};

    // Errors
    pub use crate::error::{DashboardError, HttpError, ParseError, SettingsError};

    // Network
    pub use crate::network::{DEFAULT_API_URL, DEFAULT_REFRESH_INTERVAL};

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        AdminClient, DashboardClient, DashboardClientBuilder, PredictionsClient,
        SettingsSubClient,
    };
    #[cfg(feature = "http")]
    pub use crate::http::PredictionsHttp;
}
