//! Pipeline-internal types.

use tourmap_core::{Coordinate, POI_COUNT};

/// Categories searched around every resolved center, in merge order.
pub const DEFAULT_KEYWORDS: [&str; 3] = ["tourism", "hotel", "coffee"];

/// Hits requested per keyword.
pub const PER_KEYWORD_LIMIT: u32 = 10;

/// Roughly 10 km at Vietnamese latitudes.
pub const MAX_DISTANCE_DEG: f64 = 0.1;

/// A single upstream search hit before aggregation.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResult {
    /// Stable upstream identifier (OSM id), when the provider supplies one.
    pub id: Option<String>,
    pub coordinate: Coordinate,
    pub name: Option<String>,
    pub street: Option<String>,
    /// Upstream category value, e.g. `"hotel"` or `"museum"`.
    pub category: Option<String>,
}

/// Knobs for one search run.
#[derive(Debug, Clone)]
pub struct SearchSettings {
    pub keywords: Vec<String>,
    pub per_keyword_limit: u32,
    /// Exact number of POIs returned.
    pub min_results: usize,
    pub max_distance_deg: f64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            keywords: DEFAULT_KEYWORDS.iter().map(ToString::to_string).collect(),
            per_keyword_limit: PER_KEYWORD_LIMIT,
            min_results: POI_COUNT,
            max_distance_deg: MAX_DISTANCE_DEG,
        }
    }
}
