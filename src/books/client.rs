//! Google Books `volumes` search client.
//!
//! One `GET {base}/volumes?q=...` per call. The reqwest client is owned by the
//! value and passed in (or built) at construction time, so tests can point it
//! at a mock server.

use async_trait::async_trait;
use log::{debug, info, warn};

use super::mapper;
use super::source::{BookSource, SearchError};
use super::types::{BookRecord, SearchPage};

/// Upper bound the endpoint accepts for `maxResults`.
pub const MAX_RESULTS_LIMIT: u32 = 40;

pub struct GoogleBooksClient {
    base_url: String,
    client: reqwest::Client,
    max_results: Option<u32>,
    api_key: Option<String>,
}

impl GoogleBooksClient {
    pub fn new(base_url: String) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            max_results: None,
            api_key: None,
        }
    }

    /// Page size, clamped to `1..=40`.
    pub fn max_results(mut self, max_results: Option<u32>) -> Self {
        self.max_results = max_results.map(|n| n.clamp(1, MAX_RESULTS_LIMIT));
        self
    }

    pub fn api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn query_params(&self, query: &str) -> Vec<(&'static str, String)> {
        let mut params = vec![("q", query.to_string())];
        if let Some(n) = self.max_results {
            params.push(("maxResults", n.to_string()));
        }
        if let Some(ref key) = self.api_key {
            params.push(("key", key.clone()));
        }
        params
    }
}

#[async_trait]
impl BookSource for GoogleBooksClient {
    fn name(&self) -> &str {
        "google-books"
    }

    async fn search(&self, query: &str) -> Result<Vec<BookRecord>, SearchError> {
        self.search_page(query).await.map(|page| page.records)
    }

    async fn search_page(&self, query: &str) -> Result<SearchPage, SearchError> {
        info!(
            "Search request: q={:?}, max_results={:?}",
            query, self.max_results
        );

        let response = self
            .client
            .get(format!("{}/volumes", self.base_url))
            .query(&self.query_params(query))
            .send()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;

        debug!("Search response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Search API error: {} - {}", status, err_body);
            return Err(SearchError::Api {
                status,
                message: err_body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;
        debug!("Search response body: {} bytes", body.len());

        let page = mapper::map_page(&body)?;
        info!(
            "Search for {:?} returned {} records (of {:?})",
            query,
            page.records.len(),
            page.total_items
        );
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = GoogleBooksClient::new("http://localhost:9999/books/v1/".to_string());
        assert_eq!(client.base_url(), "http://localhost:9999/books/v1");
    }

    #[test]
    fn test_query_params_minimal() {
        let client = GoogleBooksClient::new("http://localhost".to_string());
        assert_eq!(client.query_params("dune"), vec![("q", "dune".to_string())]);
    }

    #[test]
    fn test_query_params_with_options() {
        let client = GoogleBooksClient::new("http://localhost".to_string())
            .max_results(Some(100))
            .api_key(Some("k-123".to_string()));
        assert_eq!(
            client.query_params(""),
            vec![
                ("q", String::new()),
                ("maxResults", "40".to_string()),
                ("key", "k-123".to_string()),
            ]
        );
    }

    #[test]
    fn test_max_results_clamped_low() {
        let client = GoogleBooksClient::new("http://localhost".to_string()).max_results(Some(0));
        assert_eq!(client.max_results, Some(1));
    }
}
