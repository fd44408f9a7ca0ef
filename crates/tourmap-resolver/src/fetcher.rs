//! Concurrent keyword searches around a center.

use futures::future::join_all;
use tourmap_core::Coordinate;

use crate::photon::{PhotonClient, PhotonFeature};
use crate::types::RawResult;

/// Per-keyword hits from one [`fetch_all`] call, in keyword order.
#[derive(Debug, Clone, Default)]
pub struct FetchOutcome {
    per_keyword: Vec<(String, Vec<RawResult>)>,
}

impl FetchOutcome {
    /// Hits for `keyword`, or `None` if it was not part of the request.
    #[must_use]
    pub fn get(&self, keyword: &str) -> Option<&[RawResult]> {
        self.per_keyword
            .iter()
            .find(|(k, _)| k == keyword)
            .map(|(_, hits)| hits.as_slice())
    }

    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.per_keyword.iter().map(|(k, _)| k.as_str())
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.per_keyword.iter().map(|(_, hits)| hits.len()).sum()
    }

    /// Flattens into a single candidate list: keywords in request order, each
    /// keyword's hits in upstream order.
    #[must_use]
    pub fn into_candidates(self) -> Vec<RawResult> {
        self.per_keyword
            .into_iter()
            .flat_map(|(_, hits)| hits)
            .collect()
    }
}

/// Searches every keyword around `center` concurrently and waits for all of
/// them.
///
/// A failing keyword is logged and contributes an empty list; it never
/// aborts the others. Features without a usable point are dropped.
pub async fn fetch_all<S: AsRef<str>>(
    client: &PhotonClient,
    center: Coordinate,
    keywords: &[S],
    limit: u32,
) -> FetchOutcome {
    let searches = keywords.iter().map(|keyword| {
        let keyword = keyword.as_ref();
        async move {
            let hits: Vec<RawResult> = match client.search(keyword, limit, Some(center)).await {
                Ok(features) => features
                    .into_iter()
                    .filter_map(PhotonFeature::into_raw_result)
                    .collect(),
                Err(e) => {
                    tracing::warn!(keyword, error = %e, "keyword search failed, using empty list");
                    Vec::new()
                }
            };
            tracing::debug!(keyword, count = hits.len(), "keyword search settled");
            (keyword.to_owned(), hits)
        }
    });

    FetchOutcome {
        per_keyword: join_all(searches).await,
    }
}
