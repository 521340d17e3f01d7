//! Admin sub-client — backend refresh trigger.

use crate::client::DashboardClient;
use crate::domain::admin::RefreshStatus;
use crate::error::DashboardError;

/// Sub-client for admin operations.
pub struct Admin<'a> {
    pub(crate) client: &'a DashboardClient,
}

impl<'a> Admin<'a> {
    /// Ask the backend to pull the latest market data. The returned status is
    /// opaque; check [`RefreshStatus::is_success`].
    pub async fn refresh(&self) -> Result<RefreshStatus, DashboardError> {
        let resp = self.client.http.get_latest_data().await?;
        let status = RefreshStatus::from(resp);
        tracing::info!(success = status.is_success(), "Backend refresh requested: {}", status);
        Ok(status)
    }
}
