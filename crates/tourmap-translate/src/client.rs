use std::time::Duration;

use reqwest::{Client, Url};
use serde_json::Value;
use tourmap_core::AppConfig;

use crate::error::TranslateError;

pub const DEFAULT_SOURCE_LANG: &str = "en";
pub const DEFAULT_TARGET_LANG: &str = "vi";

/// Client for the keyless `translate_a/single` endpoint (`client=gtx`).
#[derive(Debug, Clone)]
pub struct GoogleTranslateClient {
    client: Client,
    endpoint: Url,
}

impl GoogleTranslateClient {
    /// # Errors
    ///
    /// Returns [`TranslateError::Http`] if the `reqwest::Client` cannot be
    /// built, or [`TranslateError::InvalidBaseUrl`] if `endpoint` does not parse.
    pub fn new(
        endpoint: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, TranslateError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(user_agent)
            .build()?;
        let endpoint = Url::parse(endpoint).map_err(|e| TranslateError::InvalidBaseUrl {
            url: endpoint.to_owned(),
            reason: e.to_string(),
        })?;
        Ok(Self { client, endpoint })
    }

    /// # Errors
    ///
    /// See [`GoogleTranslateClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, TranslateError> {
        Self::new(
            &config.translate_url,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// Translates `text` from `source` to `target` (ISO 639-1 codes).
    ///
    /// Blank input returns `Ok(None)` without touching the network. A response
    /// that parses as JSON but does not carry a translated segment also yields
    /// `Ok(None)`.
    ///
    /// # Errors
    ///
    /// - [`TranslateError::Http`] on network failure or a non-2xx status.
    /// - [`TranslateError::Deserialize`] if the body is not JSON.
    pub async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<Option<String>, TranslateError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }

        let url = self.build_url(text, source, target);
        let body = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        let data: Value = serde_json::from_str(&body).map_err(|e| TranslateError::Deserialize {
            context: format!("translate({source}->{target})"),
            source: e,
        })?;

        let translated = first_segment(&data);
        if translated.is_none() {
            tracing::warn!(source, target, "translate response had no segment");
        }
        Ok(translated)
    }

    fn build_url(&self, text: &str, source: &str, target: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("client", "gtx")
            .append_pair("sl", source)
            .append_pair("tl", target)
            .append_pair("dt", "t")
            .append_pair("q", text);
        url
    }
}

/// The response is positional: `[[["<translated>", "<source text>", ...], ...], ...]`.
fn first_segment(data: &Value) -> Option<String> {
    data.get(0)?
        .get(0)?
        .get(0)?
        .as_str()
        .map(ToOwned::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn build_url_encodes_text() {
        let client = GoogleTranslateClient::new(
            "https://translate.googleapis.com/translate_a/single",
            5,
            "ua",
        )
        .unwrap();
        let url = client.build_url("Dragon Bridge & beach", "en", "vi");
        assert_eq!(
            url.as_str(),
            "https://translate.googleapis.com/translate_a/single?client=gtx&sl=en&tl=vi&dt=t&q=Dragon+Bridge+%26+beach"
        );
    }

    #[test]
    fn first_segment_reads_nested_string() {
        let data = json!([[["Cầu Rồng", "Dragon Bridge", null, null, 10]], null, "en"]);
        assert_eq!(first_segment(&data).as_deref(), Some("Cầu Rồng"));
    }

    #[test]
    fn first_segment_tolerates_unexpected_shapes() {
        assert_eq!(first_segment(&json!([])), None);
        assert_eq!(first_segment(&json!([null])), None);
        assert_eq!(first_segment(&json!([[[42]]])), None);
        assert_eq!(first_segment(&json!({"error": "quota"})), None);
    }
}
