//! HTTP client for making requests to geocoding services

use super::request::{SearchRequest, SearchResponse};
use crate::error::ConfigError;
use reqwest::{Client, Response};
use std::time::Duration;
use url::Url;

/// HTTP client bound to one service base URL
///
/// Cloning is cheap and clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl HttpClient {
    /// Create a client for `base_url` with a fixed per-request timeout
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ConfigError> {
        Url::parse(base_url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            message: e.to_string(),
        })?;

        let client = Client::builder()
            .timeout(timeout)
            .gzip(true)
            .user_agent(concat!("address-parser-rs/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    /// Base URL requests are resolved against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Per-request timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Full URL for a request path
    pub fn url_for(&self, request: &SearchRequest) -> String {
        format!("{}{}", self.base_url, request.path)
    }

    /// Execute a GET request; non-2xx statuses are returned as errors
    pub async fn execute(&self, request: SearchRequest) -> Result<SearchResponse, reqwest::Error> {
        let url = self.url_for(&request);

        let mut req_builder = self.client.get(&url);
        if !request.params.is_empty() {
            req_builder = req_builder.query(&request.params);
        }

        let response = req_builder.send().await?.error_for_status()?;

        Self::parse_response(response).await
    }

    async fn parse_response(response: Response) -> Result<SearchResponse, reqwest::Error> {
        let status = response.status().as_u16();
        let url = response.url().to_string();
        let text = response.text().await?;

        Ok(SearchResponse { status, url, text })
    }
}
