//! End-to-end place search.

use tourmap_core::{AppConfig, PlaceQuery, SearchResult};

use crate::aggregator::aggregate;
use crate::error::{ResolveError, UpstreamError};
use crate::fetcher::fetch_all;
use crate::geocoder::resolve;
use crate::photon::PhotonClient;
use crate::types::SearchSettings;

/// Geocode → concurrent keyword search → aggregate.
///
/// Holds no mutable state; concurrent searches through one resolver are
/// independent of each other.
#[derive(Debug, Clone)]
pub struct PoiResolver {
    client: PhotonClient,
    settings: SearchSettings,
}

impl PoiResolver {
    #[must_use]
    pub fn new(client: PhotonClient, settings: SearchSettings) -> Self {
        Self { client, settings }
    }

    /// A resolver with default settings against the configured Photon instance.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError`] if the HTTP client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, UpstreamError> {
        Ok(Self::new(
            PhotonClient::from_config(config)?,
            SearchSettings::default(),
        ))
    }

    #[must_use]
    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }

    /// Finds exactly `settings.min_results` points of interest around `query`.
    ///
    /// Keyword searches only start once geocoding has succeeded.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::NotFound`] if the place cannot be geocoded.
    /// - [`ResolveError::Network`] if the geocoding request fails.
    pub async fn search(&self, query: &PlaceQuery) -> Result<SearchResult, ResolveError> {
        let center = resolve(&self.client, query).await?;

        let fetched = fetch_all(
            &self.client,
            center,
            &self.settings.keywords,
            self.settings.per_keyword_limit,
        )
        .await;
        tracing::debug!(query = %query, hits = fetched.total(), "keyword searches complete");

        let pois = aggregate(
            center,
            fetched.into_candidates(),
            self.settings.min_results,
            self.settings.max_distance_deg,
        );

        let result = SearchResult { center, pois };
        tracing::info!(
            query = %query,
            %center,
            synthetic = result.synthetic_count(),
            "place search complete"
        );
        Ok(result)
    }
}
