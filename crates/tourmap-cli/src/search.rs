//! `tourmap search`.

use anyhow::Context;
use serde::Serialize;
use tourmap_core::{AppConfig, PlaceQuery, SearchResult};
use tourmap_resolver::{PoiResolver, ResolveError};
use tourmap_weather::{CurrentWeather, OpenMeteoClient};

/// JSON shape of `search --json`.
#[derive(Debug, Serialize)]
pub(crate) struct SearchReport<'a> {
    pub query: &'a str,
    #[serde(flatten)]
    pub result: &'a SearchResult,
    pub weather: Option<&'a CurrentWeather>,
}

/// Runs one place search and prints the result.
///
/// Blank input does nothing. Weather is best-effort: a failed forecast is
/// logged and the panel is left out.
///
/// # Errors
///
/// Returns an error if the place cannot be found or the geocoder is unreachable.
pub(crate) async fn run_search(config: &AppConfig, raw: &str, json: bool) -> anyhow::Result<()> {
    let Some(query) = PlaceQuery::parse(raw) else {
        tracing::debug!("empty place, nothing to search");
        return Ok(());
    };

    let resolver = PoiResolver::from_config(config)?;
    let result = match resolver.search(&query).await {
        Ok(result) => result,
        Err(ResolveError::NotFound { .. }) => {
            anyhow::bail!("no place matching '{query}' was found; try a different name")
        }
        Err(ResolveError::Network(source)) => {
            return Err(source).with_context(|| {
                format!("network error while searching for '{query}', please retry")
            });
        }
    };

    let weather = fetch_weather(config, &result).await;

    if json {
        let report = SearchReport {
            query: query.as_str(),
            result: &result,
            weather: weather.as_ref(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", crate::render::render_search(&query, &result, weather.as_ref()));
    }

    Ok(())
}

async fn fetch_weather(config: &AppConfig, result: &SearchResult) -> Option<CurrentWeather> {
    let client = match OpenMeteoClient::from_config(config) {
        Ok(client) => client,
        Err(e) => {
            tracing::warn!(error = %e, "weather client unavailable");
            return None;
        }
    };
    match client.current_weather(&result.center).await {
        Ok(weather) => Some(weather),
        Err(e) => {
            tracing::warn!(center = %result.center, error = %e, "weather lookup failed");
            None
        }
    }
}
