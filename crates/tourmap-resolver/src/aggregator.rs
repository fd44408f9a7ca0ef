//! Merge, deduplicate, distance-filter and pad search hits.
//!
//! The aggregator is total: for any valid center it returns exactly
//! `min_results` POIs. When upstream data runs short, the gap is filled with
//! synthetic "suggested" points scattered around the center.

use std::collections::HashSet;

use rand::Rng;
use tourmap_core::{Coordinate, Poi};

use crate::types::RawResult;

/// Fallback label for hits with neither a name nor a street.
pub const DEFAULT_DISPLAY_NAME: &str = "Địa điểm tham quan";

/// Category assumed when upstream omits one.
pub const DEFAULT_KIND: &str = "tourism";

pub const SYNTHETIC_KIND: &str = "suggested";

/// Prefix of synthetic labels; entries are numbered from 1.
pub const SYNTHETIC_LABEL_PREFIX: &str = "Địa điểm gợi ý du lịch #";

/// Maximum per-axis offset of synthetic points from the center, in degrees.
pub const SYNTHETIC_JITTER_DEG: f64 = 0.01;

/// [`aggregate_with_rng`] using the thread-local RNG.
#[must_use]
pub fn aggregate(
    center: Coordinate,
    candidates: Vec<RawResult>,
    min_results: usize,
    max_distance_deg: f64,
) -> Vec<Poi> {
    aggregate_with_rng(
        center,
        candidates,
        min_results,
        max_distance_deg,
        &mut rand::rng(),
    )
}

/// Builds exactly `min_results` POIs from `candidates`.
///
/// 1. Keep the first occurrence of each dedup key (see [`dedup_key`]).
/// 2. Drop hits whose planar distance to `center` is `>= max_distance_deg`.
/// 3. Pad with synthetic points while short.
/// 4. Truncate to `min_results`.
///
/// Real POIs always precede synthetic ones and keep input order.
pub fn aggregate_with_rng<R: Rng + ?Sized>(
    center: Coordinate,
    candidates: Vec<RawResult>,
    min_results: usize,
    max_distance_deg: f64,
    rng: &mut R,
) -> Vec<Poi> {
    let total = candidates.len();
    let mut seen: HashSet<String> = HashSet::with_capacity(total);
    let mut pois: Vec<Poi> = Vec::with_capacity(min_results.max(1));

    for candidate in candidates {
        if !seen.insert(dedup_key(&candidate)) {
            continue;
        }
        if candidate.coordinate.planar_distance_deg(&center) >= max_distance_deg {
            continue;
        }
        pois.push(into_poi(candidate));
    }

    let real = pois.len();
    let mut label = 1usize;
    while pois.len() < min_results {
        pois.push(synthetic_poi(center, label, rng));
        label += 1;
    }
    pois.truncate(min_results);

    tracing::debug!(
        candidates = total,
        accepted = real,
        padded = label - 1,
        "aggregated points of interest"
    );
    pois
}

/// Identity used to detect duplicate hits.
///
/// The upstream id when present, otherwise the literal `"<lon>,<lat>"` pair.
/// Two different places reported at the same coordinate without ids
/// therefore collapse into one.
#[must_use]
pub fn dedup_key(candidate: &RawResult) -> String {
    match &candidate.id {
        Some(id) => id.clone(),
        None => format!(
            "{},{}",
            candidate.coordinate.longitude(),
            candidate.coordinate.latitude()
        ),
    }
}

fn into_poi(candidate: RawResult) -> Poi {
    let display_name = candidate
        .name
        .or(candidate.street)
        .unwrap_or_else(|| DEFAULT_DISPLAY_NAME.to_string());
    Poi {
        coordinate: candidate.coordinate,
        display_name,
        kind: candidate
            .category
            .unwrap_or_else(|| DEFAULT_KIND.to_string()),
        synthetic: false,
    }
}

fn synthetic_poi<R: Rng + ?Sized>(center: Coordinate, label: usize, rng: &mut R) -> Poi {
    let d_lat = rng.random_range(-SYNTHETIC_JITTER_DEG..=SYNTHETIC_JITTER_DEG);
    let d_lon = rng.random_range(-SYNTHETIC_JITTER_DEG..=SYNTHETIC_JITTER_DEG);
    Poi {
        coordinate: center.offset(d_lat, d_lon),
        display_name: format!("{SYNTHETIC_LABEL_PREFIX}{label}"),
        kind: SYNTHETIC_KIND.to_string(),
        synthetic: true,
    }
}

#[cfg(test)]
#[path = "aggregator_test.rs"]
mod tests;
