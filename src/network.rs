//! Network and timing constants.

use std::time::Duration;

/// Default REST API base URL (local prediction backend).
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Default interval between automatic `/predictions` refreshes.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(60 * 60);

/// Per-request timeout for native clients.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
