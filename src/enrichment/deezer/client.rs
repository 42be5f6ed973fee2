//! Deezer HTTP client
//!
//! No API key required. See: https://developers.deezer.com/api

use super::{adapter, dto};
use crate::enrichment::domain::{DeezerTrack, EnrichmentError};
use crate::enrichment::http;

/// Default API root
pub const DEFAULT_BASE_URL: &str = "https://api.deezer.com";

/// Deezer API client
pub struct DeezerClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl DeezerClient {
    /// Create a new client against the public API
    pub fn new() -> Result<Self, EnrichmentError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client with a custom API root (mirrors, tests)
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, EnrichmentError> {
        Ok(Self::with_http_client(http::build_client()?, base_url))
    }

    /// Create a client reusing an existing HTTP client
    pub fn with_http_client(http_client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Search for a track and return the best match
    pub async fn search(&self, query: &str) -> Result<DeezerTrack, EnrichmentError> {
        let url = format!("{}/search?q={}", self.base_url, urlencoding::encode(query));
        let response: dto::SearchResponse = http::send_json(self.http_client.get(&url)).await?;
        adapter::to_track(response)
    }
}
