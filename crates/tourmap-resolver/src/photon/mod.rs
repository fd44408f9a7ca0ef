//! HTTP client for the Photon geocoder (<https://photon.komoot.io>).
//!
//! Photon serves both lookups the pipeline needs from a single endpoint:
//! free-text geocoding (`q` + `limit`) and location-biased keyword search
//! (`q` + `lat`/`lon` + `limit`).

pub mod types;

use std::time::Duration;

use reqwest::{Client, Url};
use tourmap_core::{AppConfig, Coordinate};

use crate::error::UpstreamError;
use crate::retry::retry_with_backoff;

pub use types::{PhotonFeature, PhotonResponse};

/// Photon API client.
///
/// Use [`PhotonClient::from_config`] in binaries; tests point
/// [`PhotonClient::new`] at a wiremock server.
#[derive(Debug, Clone)]
pub struct PhotonClient {
    client: Client,
    base_url: Url,
    max_retries: u32,
    backoff_base_ms: u64,
}

impl PhotonClient {
    /// Creates a client for the Photon instance at `base_url`.
    ///
    /// `max_retries` is the number of additional attempts after a transient
    /// failure; `0` disables retrying.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError::Http`] if the `reqwest::Client` cannot be
    /// built, or [`UpstreamError::InvalidBaseUrl`] if `base_url` does not parse.
    pub fn new(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        backoff_base_ms: u64,
    ) -> Result<Self, UpstreamError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(5))
            .user_agent(user_agent)
            .build()?;

        // A trailing slash keeps `/api` from being treated as a file segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| UpstreamError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            base_url,
            max_retries,
            backoff_base_ms,
        })
    }

    /// # Errors
    ///
    /// See [`PhotonClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, UpstreamError> {
        Self::new(
            &config.photon_url,
            config.request_timeout_secs,
            &config.user_agent,
            config.max_retries,
            config.retry_backoff_base_ms,
        )
    }

    /// Runs one Photon query.
    ///
    /// With `near` set, results are biased towards that point (Photon ranks by
    /// proximity but does not hard-filter by distance).
    ///
    /// # Errors
    ///
    /// - [`UpstreamError::Http`] on network failure after retries.
    /// - [`UpstreamError::UnexpectedStatus`] for non-2xx responses.
    /// - [`UpstreamError::Deserialize`] if the body is not a `FeatureCollection`.
    pub async fn search(
        &self,
        text: &str,
        limit: u32,
        near: Option<Coordinate>,
    ) -> Result<Vec<PhotonFeature>, UpstreamError> {
        let url = self.build_url(text, limit, near);
        retry_with_backoff(self.max_retries, self.backoff_base_ms, || {
            let url = url.clone();
            async move {
                let body: PhotonResponse = self.request_json(&url, text).await?;
                Ok(body.features)
            }
        })
        .await
    }

    fn build_url(&self, text: &str, limit: u32, near: Option<Coordinate>) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("q", text);
            if let Some(center) = near {
                pairs.append_pair("lat", &center.latitude().to_string());
                pairs.append_pair("lon", &center.longitude().to_string());
            }
            pairs.append_pair("limit", &limit.to_string());
        }
        url
    }

    async fn request_json(&self, url: &Url, text: &str) -> Result<PhotonResponse, UpstreamError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| UpstreamError::Deserialize {
            context: format!("photon search(q={text})"),
            source: e,
        })
    }
}
