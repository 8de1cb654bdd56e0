use std::time::Duration;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde::de::DeserializeOwned;

use super::SearchBackend;
use super::error::ApiError;
use crate::types::{CategoryStats, ReportSummary};

/// Characters percent-encoded inside the `itemName` query parameter.
const QUERY_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'>')
    .add(b'?');

/// Blocking HTTP client for the report backend.
///
/// Each call performs a single GET and decodes the JSON body. Requests are
/// issued from request threads owned by the dispatcher, so blocking here is
/// fine; timeouts are enforced by the underlying client.
pub struct HttpBackend {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpBackend {
    /// Build a client against `base_url` with the given request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ApiError::Build)?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the most recent reports (the backend caps the list at 16,
    /// newest first).
    pub fn latest_reports(&self) -> Result<Vec<ReportSummary>, ApiError> {
        self.get_json(format!("{}/user-reports/latest", self.base_url))
    }

    /// Fetch per-category report counts.
    pub fn category_stats(&self) -> Result<CategoryStats, ApiError> {
        self.get_json(format!("{}/user-reports/category-stats", self.base_url))
    }

    fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, ApiError> {
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|source| ApiError::Http {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { url, status });
        }

        response.json().map_err(|source| ApiError::Decode { url, source })
    }
}

impl SearchBackend for HttpBackend {
    fn search(&self, item_name: &str) -> Result<Vec<ReportSummary>, ApiError> {
        self.get_json(search_url(&self.base_url, item_name))
    }
}

/// Build the search endpoint URL for a raw query string.
fn search_url(base_url: &str, item_name: &str) -> String {
    let encoded = utf8_percent_encode(item_name, QUERY_ENCODE_SET);
    format!("{base_url}/lostAndFound/search?itemName={encoded}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_url_targets_the_search_endpoint() {
        let url = search_url("http://localhost:8080", "wallet");
        assert_eq!(
            url,
            "http://localhost:8080/lostAndFound/search?itemName=wallet"
        );
    }

    #[test]
    fn search_url_percent_encodes_the_query() {
        let url = search_url("http://localhost:8080", "black wallet & keys");
        assert!(url.ends_with("itemName=black%20wallet%20%26%20keys"));
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let backend =
            HttpBackend::new("http://localhost:8080/", Duration::from_secs(5)).expect("builds");
        assert_eq!(backend.base_url, "http://localhost:8080");
    }
}
