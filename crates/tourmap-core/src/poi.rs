use serde::{Deserialize, Serialize};

use crate::geo::Coordinate;

/// Number of points of interest every search returns.
pub const POI_COUNT: usize = 5;

/// A resolved point of interest, either from upstream data or synthesized
/// as a placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Poi {
    pub coordinate: Coordinate,
    pub display_name: String,
    /// Upstream category (`"hotel"`, `"cafe"`, ...) or `"suggested"` for
    /// synthetic entries.
    #[serde(rename = "type")]
    pub kind: String,
    pub synthetic: bool,
}

impl Poi {
    /// The display name up to the first comma.
    ///
    /// Upstream names often carry the full address (`"Cầu Rồng, Sơn Trà, Đà Nẵng"`);
    /// map popups only want the leading label.
    #[must_use]
    pub fn short_name(&self) -> &str {
        self.display_name
            .split(',')
            .next()
            .map_or("", str::trim)
    }
}

/// Output of one place search.
///
/// `pois` always holds exactly [`POI_COUNT`] entries, real ones first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub center: Coordinate,
    pub pois: Vec<Poi>,
}

impl SearchResult {
    #[must_use]
    pub fn synthetic_count(&self) -> usize {
        self.pois.iter().filter(|p| p.synthetic).count()
    }
}
