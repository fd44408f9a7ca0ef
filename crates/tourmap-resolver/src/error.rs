use thiserror::Error;

/// A failed exchange with an upstream HTTP service.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("upstream returned an unusable coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("invalid base URL \"{url}\": {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

/// Errors surfaced by a place search.
///
/// Only geocoding failures reach the caller; keyword-search failures are
/// absorbed by the fetcher.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("place not found: {query}")]
    NotFound { query: String },

    #[error("network error while geocoding: {0}")]
    Network(#[from] UpstreamError),
}

impl ResolveError {
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
