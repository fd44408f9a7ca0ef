//! Point-of-interest discovery around a named place.
//!
//! The pipeline geocodes a place name through Photon, runs one keyword search
//! per category concurrently around the resolved center, then deduplicates,
//! distance-filters and pads the hits so every search yields exactly
//! [`POI_COUNT`](tourmap_core::POI_COUNT) points.

pub mod aggregator;
pub mod error;
pub mod fetcher;
pub mod geocoder;
pub mod photon;
pub mod resolver;
pub mod types;

mod retry;

pub use aggregator::{aggregate, aggregate_with_rng};
pub use error::{ResolveError, UpstreamError};
pub use fetcher::{fetch_all, FetchOutcome};
pub use geocoder::resolve;
pub use photon::PhotonClient;
pub use resolver::PoiResolver;
pub use types::{RawResult, SearchSettings, DEFAULT_KEYWORDS};
