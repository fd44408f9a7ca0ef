//! Place name → coordinate.

use tourmap_core::{Coordinate, PlaceQuery};

use crate::error::ResolveError;
use crate::photon::PhotonClient;

/// Resolves `query` to the coordinate of Photon's top candidate.
///
/// Exactly one request is made, with `limit=1`; the first candidate is taken
/// as authoritative.
///
/// # Errors
///
/// - [`ResolveError::NotFound`] when Photon returns no candidates.
/// - [`ResolveError::Network`] for transport failures, bad statuses,
///   unparsable bodies, or a candidate without a valid point.
pub async fn resolve(
    client: &PhotonClient,
    query: &PlaceQuery,
) -> Result<Coordinate, ResolveError> {
    let features = client.search(query.as_str(), 1, None).await?;

    let Some(first) = features.first() else {
        tracing::info!(query = %query, "geocoder returned no candidates");
        return Err(ResolveError::NotFound {
            query: query.to_string(),
        });
    };

    let center = first.coordinate()?;
    tracing::debug!(query = %query, %center, "geocoded place");
    Ok(center)
}
