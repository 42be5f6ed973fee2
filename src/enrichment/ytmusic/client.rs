//! YouTube Music HTTP client
//!
//! ## API Quirks
//!
//! ### No public API
//! The web player talks to `youtubei/v1` endpoints with a JSON body carrying a
//! client context. We send the same `WEB_REMIX` context the browser does; the
//! endpoints work without signing in.
//!
//! ### Filtering to songs
//! Search filters are opaque protobuf blobs passed in `params`. The blob below
//! restricts results to the "Songs" shelf.
//!
//! ### Required headers
//! Requests without an `Origin`/`Referer` of music.youtube.com are sometimes
//! answered with HTTP 400.

use serde_json::json;

use super::{adapter, dto};
use crate::enrichment::domain::{ArtistProfile, EnrichmentError, YtMusicTrack};
use crate::enrichment::http;

/// Default innertube root
pub const DEFAULT_BASE_URL: &str = "https://music.youtube.com/youtubei/v1";

const ORIGIN: &str = "https://music.youtube.com";
const CLIENT_NAME: &str = "WEB_REMIX";
const CLIENT_VERSION: &str = "1.20240101.01.00";

/// `params` value selecting the Songs filter
const SONGS_FILTER: &str = "EgWKAQIIAWoMEA4QChADEAQQCRAF";

/// YouTube Music client
pub struct YtMusicClient {
    http_client: reqwest::Client,
    base_url: String,
    language: String,
}

impl YtMusicClient {
    /// Create a new client against music.youtube.com
    pub fn new() -> Result<Self, EnrichmentError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client with a custom innertube root
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, EnrichmentError> {
        Ok(Self::with_http_client(http::build_client()?, base_url))
    }

    /// Create a client reusing an existing HTTP client
    pub fn with_http_client(http_client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            language: "en".to_string(),
        }
    }

    /// Set the interface language (`hl`) used for result text
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Search songs and return the first result
    pub async fn search(&self, query: &str) -> Result<YtMusicTrack, EnrichmentError> {
        let body = json!({
            "context": self.context(),
            "query": query,
            "params": SONGS_FILTER,
        });
        let response: dto::SearchResponse = self.post("search", body).await?;
        adapter::to_track(response)
    }

    /// Fetch an artist page by channel id
    pub async fn artist_profile(&self, artist_id: &str) -> Result<ArtistProfile, EnrichmentError> {
        let body = json!({
            "context": self.context(),
            "browseId": artist_id,
        });
        let response: dto::BrowseResponse = self.post("browse", body).await?;
        adapter::to_artist_profile(response)
    }

    fn context(&self) -> serde_json::Value {
        json!({
            "client": {
                "clientName": CLIENT_NAME,
                "clientVersion": CLIENT_VERSION,
                "hl": self.language,
            },
            "user": {},
        })
    }

    async fn post<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        body: serde_json::Value,
    ) -> Result<T, EnrichmentError> {
        let url = format!("{}/{}?prettyPrint=false", self.base_url, endpoint);
        let request = self
            .http_client
            .post(&url)
            .header("Origin", ORIGIN)
            .header("Referer", format!("{}/", ORIGIN))
            .json(&body);
        http::send_json(request).await
    }
}
