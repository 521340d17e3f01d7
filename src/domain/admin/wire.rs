//! Wire types for admin endpoints.

use serde::{Deserialize, Serialize};

/// Raw `GET /latest_data` payload.
///
/// The backend has answered with a bare string, a bare number, and
/// `{"status": <code>}` over time, so the body is kept as untyped JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LatestDataResponse(pub serde_json::Value);
