//! Geographic primitives.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A WGS84 point in decimal degrees.
///
/// Latitude is always within `[-90, 90]` and longitude within `[-180, 180]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate")]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

#[derive(Deserialize)]
struct RawCoordinate {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = CoreError;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        Self::new(raw.latitude, raw.longitude)
    }
}

impl Coordinate {
    /// Builds a coordinate, rejecting non-finite or out-of-range values.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::CoordinateOutOfRange`] when either axis is outside
    /// its valid range.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoreError> {
        if (-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude) {
            Ok(Self {
                latitude,
                longitude,
            })
        } else {
            Err(CoreError::CoordinateOutOfRange {
                latitude,
                longitude,
            })
        }
    }

    /// Builds a coordinate, saturating each axis into its valid range.
    ///
    /// NaN collapses to `0.0`.
    #[must_use]
    pub fn clamped(latitude: f64, longitude: f64) -> Self {
        let clamp = |v: f64, bound: f64| if v.is_nan() { 0.0 } else { v.clamp(-bound, bound) };
        Self {
            latitude: clamp(latitude, 90.0),
            longitude: clamp(longitude, 180.0),
        }
    }

    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Planar Euclidean distance in degrees.
    ///
    /// Treats latitude and longitude as a flat grid. Good enough at city scale,
    /// increasingly wrong towards the poles.
    #[must_use]
    pub fn planar_distance_deg(&self, other: &Coordinate) -> f64 {
        (self.latitude - other.latitude).hypot(self.longitude - other.longitude)
    }

    /// Shifts the point by the given deltas, clamping the result into range.
    #[must_use]
    pub fn offset(&self, d_lat: f64, d_lon: f64) -> Self {
        Self::clamped(self.latitude + d_lat, self.longitude + d_lon)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

/// A place name that is safe to send to the geocoder.
///
/// Blank input never becomes a `PlaceQuery`, so a search for nothing cannot
/// be started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceQuery(String);

impl PlaceQuery {
    /// Returns `None` for empty or whitespace-only input.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_owned()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlaceQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_boundaries() {
        assert!(Coordinate::new(90.0, 180.0).is_ok());
        assert!(Coordinate::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn new_rejects_out_of_range_and_nan() {
        assert!(Coordinate::new(90.5, 0.0).is_err());
        assert!(Coordinate::new(0.0, -180.1).is_err());
        assert!(Coordinate::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn clamped_saturates() {
        let c = Coordinate::clamped(95.0, -200.0);
        assert!((c.latitude() - 90.0).abs() < f64::EPSILON);
        assert!((c.longitude() + 180.0).abs() < f64::EPSILON);
    }

    #[test]
    fn planar_distance_is_euclidean_in_degrees() {
        let a = Coordinate::new(16.0, 108.0).unwrap();
        let b = Coordinate::new(16.03, 108.04).unwrap();
        assert!((a.planar_distance_deg(&b) - 0.05).abs() < 1e-9);
        assert!(a.planar_distance_deg(&a).abs() < f64::EPSILON);
    }

    #[test]
    fn offset_near_pole_stays_valid() {
        let c = Coordinate::new(89.995, 179.995).unwrap().offset(0.01, 0.01);
        assert!(c.latitude() <= 90.0);
        assert!(c.longitude() <= 180.0);
    }

    #[test]
    fn deserialize_validates_range() {
        let ok: Result<Coordinate, _> =
            serde_json::from_str(r#"{"latitude": 16.05, "longitude": 108.2}"#);
        assert!(ok.is_ok());
        let bad: Result<Coordinate, _> =
            serde_json::from_str(r#"{"latitude": 120.0, "longitude": 108.2}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn place_query_rejects_blank_input() {
        assert_eq!(PlaceQuery::parse(""), None);
        assert_eq!(PlaceQuery::parse("   \t"), None);
    }

    #[test]
    fn place_query_trims() {
        let q = PlaceQuery::parse("  Da Lat ").unwrap();
        assert_eq!(q.as_str(), "Da Lat");
    }
}
