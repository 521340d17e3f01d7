//! Predictions sub-client — list, single-date lookup, historical window, and
//! periodic refresh.

use crate::client::DashboardClient;
use crate::domain::prediction::{Prediction, PredictionBoard};
use crate::error::DashboardError;

use chrono::{Days, NaiveDate};
use futures_util::future::join_all;
use futures_util::Stream;
use std::time::Duration;

/// Sub-client for prediction queries.
pub struct Predictions<'a> {
    pub(crate) client: &'a DashboardClient,
}

impl<'a> Predictions<'a> {
    /// Fetch every prediction the backend knows about.
    pub async fn all(&self) -> Result<PredictionBoard, DashboardError> {
        let resp = self.client.http.get_predictions().await?;
        let board = PredictionBoard::from(resp);
        tracing::debug!(count = board.len(), "Fetched predictions");
        Ok(board)
    }

    /// Fetch (or have the backend compute) the prediction for one date.
    pub async fn get(&self, date: NaiveDate) -> Result<Prediction, DashboardError> {
        let resp = self.client.http.get_prediction(date).await?;
        Prediction::try_from(resp).map_err(|e| DashboardError::Validation(e.to_string()))
    }

    /// Like [`Predictions::get`], but a failure is logged and replaced by
    /// [`Prediction::placeholder`] so the caller always gets a renderable record.
    pub async fn get_or_placeholder(&self, date: NaiveDate) -> Prediction {
        match self.get(date).await {
            Ok(prediction) => prediction,
            Err(e) => {
                tracing::error!(%date, "Error making prediction: {}", e);
                Prediction::placeholder(date)
            }
        }
    }

    /// Fetch every date in `from..=to` concurrently. Requests are independent
    /// and unordered; failed dates are logged and left out of the board.
    pub async fn window(&self, from: NaiveDate, to: NaiveDate) -> PredictionBoard {
        let dates: Vec<NaiveDate> = from.iter_days().take_while(|d| *d <= to).collect();
        let fetches = dates.iter().map(|date| async move { (*date, self.get(*date).await) });

        let mut board = PredictionBoard::new();
        for (date, result) in join_all(fetches).await {
            match result {
                Ok(prediction) => board.insert_at(date, prediction),
                Err(e) => tracing::warn!(%date, "Skipping date in window: {}", e),
            }
        }
        board
    }

    /// [`Predictions::window`] over `today - from_days_ago ..= today - to_days_ago`.
    pub async fn history(
        &self,
        today: NaiveDate,
        from_days_ago: u64,
        to_days_ago: u64,
    ) -> Result<PredictionBoard, DashboardError> {
        let bound = |days| {
            today.checked_sub_days(Days::new(days)).ok_or_else(|| {
                DashboardError::Validation(format!("{} days before {} is out of range", days, today))
            })
        };
        let (from, to) = (bound(from_days_ago)?, bound(to_days_ago)?);
        Ok(self.window(from.min(to), from.max(to)).await)
    }

    /// Re-fetch `/predictions` every `interval`. The first item is produced
    /// immediately. The timer lives inside the stream, so dropping the stream
    /// stops polling.
    ///
    /// A zero interval yields a single [`DashboardError::Config`] and ends.
    pub fn watch(
        &self,
        interval: Duration,
    ) -> impl Stream<Item = Result<PredictionBoard, DashboardError>> + 'static {
        let client = self.client.clone();
        async_stream::stream! {
            if interval.is_zero() {
                yield Err(DashboardError::Config(
                    "watch interval must be greater than zero".to_string(),
                ));
                return;
            }
            loop {
                yield client.predictions().all().await;
                futures_timer::Delay::new(interval).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::StreamExt;

    #[tokio::test]
    async fn test_watch_rejects_zero_interval_without_fetching() {
        let client = DashboardClient::builder()
            .base_url("http://127.0.0.1:9")
            .build()
            .unwrap();
        let items: Vec<_> = client.predictions().watch(Duration::ZERO).collect().await;

        assert_eq!(items.len(), 1);
        assert!(matches!(items[0], Err(DashboardError::Config(_))));
    }
}
