//! Photon GeoJSON response shapes.
//!
//! Photon answers every query with a `FeatureCollection`. Point geometries
//! carry `[lon, lat]` (GeoJSON axis order, not lat/lon). Properties vary by
//! OSM object; everything we read is optional.

use serde::Deserialize;
use tourmap_core::Coordinate;

use crate::error::UpstreamError;
use crate::types::RawResult;

#[derive(Debug, Deserialize)]
pub struct PhotonResponse {
    #[serde(default)]
    pub features: Vec<PhotonFeature>,
}

#[derive(Debug, Deserialize)]
pub struct PhotonFeature {
    pub geometry: Option<PhotonGeometry>,
    #[serde(default)]
    pub properties: PhotonProperties,
}

#[derive(Debug, Deserialize)]
pub struct PhotonGeometry {
    #[serde(default)]
    pub coordinates: Vec<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PhotonProperties {
    pub osm_id: Option<i64>,
    pub name: Option<String>,
    pub street: Option<String>,
    /// OSM tag value, e.g. `"hotel"` for `tourism=hotel`.
    pub osm_value: Option<String>,
}

impl PhotonFeature {
    /// The feature's point, validated.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError::InvalidCoordinate`] when the geometry is
    /// missing, has fewer than two axes, or lies outside the valid range.
    pub fn coordinate(&self) -> Result<Coordinate, UpstreamError> {
        let coords = self
            .geometry
            .as_ref()
            .map(|g| g.coordinates.as_slice())
            .unwrap_or_default();
        let [lon, lat, ..] = coords else {
            return Err(UpstreamError::InvalidCoordinate(format!(
                "expected [lon, lat], got {coords:?}"
            )));
        };
        Coordinate::new(*lat, *lon).map_err(|e| UpstreamError::InvalidCoordinate(e.to_string()))
    }

    /// Converts the feature into a search hit, or `None` when it has no
    /// usable point.
    #[must_use]
    pub fn into_raw_result(self) -> Option<RawResult> {
        let coordinate = match self.coordinate() {
            Ok(c) => c,
            Err(e) => {
                tracing::debug!(osm_id = ?self.properties.osm_id, error = %e, "skipping feature");
                return None;
            }
        };
        let PhotonProperties {
            osm_id,
            name,
            street,
            osm_value,
        } = self.properties;
        Some(RawResult {
            id: osm_id.map(|id| id.to_string()),
            coordinate,
            name: non_empty(name),
            street: non_empty(street),
            category: non_empty(osm_value),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
