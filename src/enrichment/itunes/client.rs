//! iTunes Search HTTP client
//!
//! No API key required. Apple documents a limit of roughly 20 calls per minute.

use super::{adapter, dto};
use crate::enrichment::domain::{EnrichmentError, ItunesTrack};
use crate::enrichment::http;

/// Default API root
pub const DEFAULT_BASE_URL: &str = "https://itunes.apple.com";

/// iTunes Search API client
pub struct ItunesClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl ItunesClient {
    /// Create a new client against the public API
    pub fn new() -> Result<Self, EnrichmentError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client with a custom API root
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

    /// Search songs and return the single best match
    pub async fn search(&self, query: &str) -> Result<ItunesTrack, EnrichmentError> {
        let url = format!(
            "{}/search?term={}&entity=song&limit=1",
            self.base_url,
            urlencoding::encode(query)
        );
        let response: dto::SearchResponse = http::send_json(self.http_client.get(&url)).await?;
        adapter::to_track(response)
    }
}
