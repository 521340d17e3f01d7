//! Low-level HTTP client — `PredictionsHttp`.
//!
//! One method per backend endpoint. Returns wire types; conversion to domain
//! types happens in the sub-clients. Requests are sent once: failures surface
//! to the caller, which decides how to present them.

use crate::domain::admin::wire::LatestDataResponse;
use crate::domain::prediction::wire::{PredictionResponse, PredictionsResponse};
use crate::error::HttpError;

use chrono::NaiveDate;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Low-level HTTP client for the prediction backend.
#[derive(Clone)]
pub struct PredictionsHttp {
    base_url: String,
    client: Client,
}

impl PredictionsHttp {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, HttpError> {
        #[allow(unused_mut)]
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder.timeout(timeout).pool_max_idle_per_host(4);
        }
        #[cfg(target_arch = "wasm32")]
        let _ = timeout;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Predictions ──────────────────────────────────────────────────────

    pub async fn get_predictions(&self) -> Result<PredictionsResponse, HttpError> {
        let url = format!("{}/predictions", self.base_url);
        self.get(&url).await
    }

    pub async fn get_prediction(&self, date: NaiveDate) -> Result<PredictionResponse, HttpError> {
        let day = date.format("%Y-%m-%d").to_string();
        let url = format!("{}/predict/{}", self.base_url, urlencoding::encode(&day));
        self.get(&url).await
    }

    // ── Admin ────────────────────────────────────────────────────────────

    pub async fn get_latest_data(&self) -> Result<LatestDataResponse, HttpError> {
        let url = format!("{}/latest_data", self.base_url);
        self.get(&url).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    pub(crate) async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        tracing::debug!(url, "GET");

        let resp = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                HttpError::Timeout
            } else {
                HttpError::Reqwest(e)
            }
        })?;
        let status = resp.status();

        if status.is_success() {
            let parsed = resp.json::<T>().await?;
            return Ok(parsed);
        }

        let status_code = status.as_u16();
        let body_text = resp.text().await.unwrap_or_default();
        tracing::debug!(url, status = status_code, "Request failed");

        match status_code {
            401 => Err(HttpError::Unauthorized),
            404 => Err(HttpError::NotFound(if body_text.is_empty() {
                url.to_string()
            } else {
                body_text
            })),
            400..=499 => Err(HttpError::BadRequest(body_text)),
            _ => Err(HttpError::ServerError {
                status: status_code,
                body: body_text,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let http = PredictionsHttp::new("http://localhost:8000///", Duration::from_secs(5)).unwrap();
        assert_eq!(http.base_url(), "http://localhost:8000");
    }
}
